multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{BorrowSnapshot, MarketState, MarketStateV1};

/// On-chain state of a market: its configuration, the share ledger and the accounting state.
#[multiversx_sc::module]
pub trait Storage {
    /// The underlying asset lent and borrowed in this market.
    #[view(getAsset)]
    #[storage_mapper("asset")]
    fn asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Authority consulted before every transfer, deposit and borrow.
    #[view(getManager)]
    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getInterestRateModel)]
    #[storage_mapper("interest_rate_model")]
    fn interest_rate_model(&self) -> SingleValueMapper<ManagedAddress>;

    /// Recovers permit signers.
    #[view(getSignatureVerifier)]
    #[storage_mapper("signature_verifier")]
    fn signature_verifier(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(name)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(symbol)]
    #[storage_mapper("symbol")]
    fn symbol(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    /// Chain identity mixed into the permit domain.
    #[view(getChainId)]
    #[storage_mapper("chain_id")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;

    /// Exchange rate (WAD) used while no shares exist.
    #[view(getInitialExchangeRate)]
    #[storage_mapper("initial_exchange_rate")]
    fn initial_exchange_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balance_of")]
    fn balance_of(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(allowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// Permit replay counter of each owner.
    #[view(nonces)]
    #[storage_mapper("nonces")]
    fn nonces(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(totalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    /// Layout version of the value under `market_state`.
    #[view(getStateVersion)]
    #[storage_mapper("state_version")]
    fn state_version(&self) -> SingleValueMapper<u32>;

    /// Stored accounting state, without interest accrued since the last touch.
    #[view(getMarketState)]
    #[storage_mapper("market_state")]
    fn market_state(&self) -> SingleValueMapper<MarketState<Self::Api>>;

    /// Same key as `market_state`, decoded with the version 1 layout.
    #[storage_mapper("market_state")]
    fn market_state_v1(&self) -> SingleValueMapper<MarketStateV1<Self::Api>>;

    #[storage_mapper("account_borrows")]
    fn account_borrows(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<BorrowSnapshot<Self::Api>>;

    #[storage_mapper("execution_lock")]
    fn execution_lock(&self) -> SingleValueMapper<bool>;
}
