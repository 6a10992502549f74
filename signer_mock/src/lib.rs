#![no_std]

use common_constants::SIGNATURE_V_LOW;
use common_structs::PermitSignature;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Deterministic stand-in for ECDSA recovery.
///
/// `sign` derives a well-formed `(v, r, s)` from the signer and the digest and remembers who
/// produced it. `recover` only knows signatures made that way, and only for the digest they
/// were made over.
#[multiversx_sc::contract]
pub trait SignerMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(sign)]
    fn sign(
        &self,
        signer: ManagedAddress,
        digest: ManagedByteArray<Self::Api, 32>,
    ) -> PermitSignature<Self::Api> {
        let mut preimage = signer.as_managed_buffer().clone();
        preimage.append(digest.as_managed_buffer());
        let r = self.crypto().keccak256(preimage);

        // Clearing the top bits keeps `s` in the lower half order.
        let mut s_bytes = self.crypto().keccak256(r.as_managed_buffer()).to_byte_array();
        s_bytes[0] &= 0x3f;
        let s = ManagedByteArray::new_from_bytes(&s_bytes);

        let signature = PermitSignature {
            v: SIGNATURE_V_LOW,
            r,
            s,
        };
        self.signed(&signature).set(SignedDigest { signer, digest });

        signature
    }

    #[view(recover)]
    fn recover(
        &self,
        digest: ManagedByteArray<Self::Api, 32>,
        v: u8,
        r: ManagedByteArray<Self::Api, 32>,
        s: ManagedByteArray<Self::Api, 32>,
    ) -> OptionalValue<ManagedAddress> {
        let mapper = self.signed(&PermitSignature { v, r, s });
        if mapper.is_empty() {
            return OptionalValue::None;
        }

        let record = mapper.get();
        if record.digest != digest {
            return OptionalValue::None;
        }

        OptionalValue::Some(record.signer)
    }

    #[storage_mapper("signed")]
    fn signed(
        &self,
        signature: &PermitSignature<Self::Api>,
    ) -> SingleValueMapper<SignedDigest<Self::Api>>;
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode)]
pub struct SignedDigest<M: ManagedTypeApi> {
    pub signer: ManagedAddress<M>,
    pub digest: ManagedByteArray<M, 32>,
}
