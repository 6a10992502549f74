#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("new_interest_rate_vars")]
    fn new_interest_rate_vars_event(
        &self,
        #[indexed] market: &ManagedAddress,
        #[indexed] base_rate_per_period: u64,
        #[indexed] multiplier_per_period: u64,
        #[indexed] jump_multiplier_per_period: u64,
        #[indexed] kink: u64,
    );

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // Emitted only when at least one block elapsed since the previous accrual
    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] cash: &BigUint,
        #[indexed] interest: &BigUint,
        #[indexed] borrow_index: u128,
        #[indexed] total_borrows: &BigUint,
        #[indexed] total_reserves: &BigUint,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] account_borrows: &BigUint,
        #[indexed] total_borrows: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] account_borrows: &BigUint,
        #[indexed] total_borrows: &BigUint,
    );

    /// `feed` is the zero address when the entry was cleared.
    #[event("set_feed")]
    fn set_feed_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] feed: &ManagedAddress,
    );

    #[event("state_migrated")]
    fn state_migrated_event(&self, #[indexed] from_version: u32, #[indexed] to_version: u32);
}
