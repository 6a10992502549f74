multiversx_sc::imports!();

use common_constants::{
    DOMAIN_TYPE, PERMIT_DIGEST_PREFIX, PERMIT_TYPE, PERMIT_VERSION, SECP256K1_HALF_ORDER,
    SIGNATURE_V_HIGH, SIGNATURE_V_LOW, WORKING_WIDTH_BYTES,
};
use common_errors::{ERROR_INVALID_SIGNATURE, ERROR_PERMIT_EXPIRED};
use common_proxies::proxy_signer::SignerProxy;
use common_structs::PermitSignature;

use crate::{guard, ledger, storage, utils};

/// Allowances granted by an off-chain signature of the owner.
///
/// The signed message is a typed-data digest bound to this market and chain, and to the
/// owner's current nonce, so each signature can be used once.
#[multiversx_sc::module]
pub trait PermitModule:
    storage::Storage
    + guard::GuardModule
    + ledger::LedgerModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[endpoint(permit)]
    fn permit(
        &self,
        owner: ManagedAddress,
        spender: ManagedAddress,
        value: BigUint,
        deadline: u64,
        signature: PermitSignature<Self::Api>,
    ) {
        let _lock = self.lock_execution();
        require!(
            self.blockchain().get_block_timestamp() <= deadline,
            ERROR_PERMIT_EXPIRED
        );
        self.require_canonical_signature(&signature);

        let nonce_mapper = self.nonces(&owner);
        let nonce = nonce_mapper.get();
        let digest = self.permit_digest_of(&owner, &spender, &value, nonce, deadline);

        let signer = self.recover_signer(&digest, &signature);
        require!(signer == Some(owner.clone()), ERROR_INVALID_SIGNATURE);

        nonce_mapper.set(nonce + 1);
        self.set_allowance(&owner, &spender, &value);
    }

    /// Rejects malleable signatures: `v` must be 27 or 28 and `s` in the lower half order.
    fn require_canonical_signature(&self, signature: &PermitSignature<Self::Api>) {
        require!(
            signature.v == SIGNATURE_V_LOW || signature.v == SIGNATURE_V_HIGH,
            ERROR_INVALID_SIGNATURE
        );

        let s = BigUint::from_bytes_be(&signature.s.to_byte_array());
        require!(
            s <= BigUint::from_bytes_be(&SECP256K1_HALF_ORDER),
            ERROR_INVALID_SIGNATURE
        );
    }

    fn recover_signer(
        &self,
        digest: &ManagedByteArray<Self::Api, 32>,
        signature: &PermitSignature<Self::Api>,
    ) -> Option<ManagedAddress> {
        self.tx()
            .to(self.signature_verifier().get())
            .typed(SignerProxy)
            .recover(digest, signature.v, &signature.r, &signature.s)
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_option()
    }

    #[view(getDomainSeparator)]
    fn get_domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new();
        encoded.append(self.hash_bytes(DOMAIN_TYPE).as_managed_buffer());
        encoded.append(self.crypto().keccak256(self.name().get()).as_managed_buffer());
        encoded.append(self.hash_bytes(PERMIT_VERSION).as_managed_buffer());
        encoded.append(self.crypto().keccak256(self.chain_id().get()).as_managed_buffer());
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());

        self.crypto().keccak256(encoded)
    }

    /// Digest an owner signs to approve `value` for `spender` at `nonce`.
    #[view(getPermitDigest)]
    fn get_permit_digest(
        &self,
        owner: ManagedAddress,
        spender: ManagedAddress,
        value: BigUint,
        nonce: u64,
        deadline: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        self.permit_digest_of(&owner, &spender, &value, nonce, deadline)
    }

    fn permit_digest_of(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
        value: &BigUint,
        nonce: u64,
        deadline: u64,
    ) -> ManagedByteArray<Self::Api, 32> {
        let mut permit = ManagedBuffer::new();
        permit.append(self.hash_bytes(PERMIT_TYPE).as_managed_buffer());
        permit.append(owner.as_managed_buffer());
        permit.append(spender.as_managed_buffer());
        permit.append(&self.encode_word(value));
        permit.append(&self.encode_word(&BigUint::from(nonce)));
        permit.append(&self.encode_word(&BigUint::from(deadline)));
        let permit_hash = self.crypto().keccak256(permit);

        let mut encoded = ManagedBuffer::new_from_bytes(PERMIT_DIGEST_PREFIX);
        encoded.append(self.get_domain_separator().as_managed_buffer());
        encoded.append(permit_hash.as_managed_buffer());

        self.crypto().keccak256(encoded)
    }

    fn hash_bytes(&self, bytes: &[u8]) -> ManagedByteArray<Self::Api, 32> {
        self.crypto().keccak256(ManagedBuffer::new_from_bytes(bytes))
    }

    /// Big-endian, left-padded to 32 bytes.
    fn encode_word(&self, value: &BigUint) -> ManagedBuffer {
        self.require_within_width(value);

        let bytes = value.to_bytes_be_buffer();
        let padding = [0u8; WORKING_WIDTH_BYTES];
        let mut word = ManagedBuffer::new_from_bytes(&padding[..WORKING_WIDTH_BYTES - bytes.len()]);
        word.append(&bytes);

        word
    }
}
