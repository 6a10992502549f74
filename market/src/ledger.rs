multiversx_sc::imports!();

use common_errors::{ERROR_INSUFFICIENT_ALLOWANCE, ERROR_INSUFFICIENT_BALANCE};

use crate::{guard, storage, utils};

/// Share ledger: balances, allowances and the transfer surface.
///
/// Every move of shares between two holders goes through the manager's transfer check.
/// Minting and burning are driven by the vault and skip it.
#[multiversx_sc::module]
pub trait LedgerModule:
    storage::Storage
    + guard::GuardModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let _lock = self.lock_execution();
        let caller = self.blockchain().get_caller();

        self.transfer_shares(&caller, &to, &amount);
    }

    /// Moves shares of `from` on its behalf. An unlimited allowance is left untouched.
    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        let _lock = self.lock_execution();
        let caller = self.blockchain().get_caller();

        self.spend_allowance(&from, &caller, &amount);
        self.transfer_shares(&from, &to, &amount);
    }

    /// Overwrites the allowance; `2^256 - 1` never decreases.
    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let _lock = self.lock_execution();
        let caller = self.blockchain().get_caller();

        self.set_allowance(&caller, &spender, &amount);
    }

    /// Transfers and then calls `endpoint(from, amount)` on the recipient contract.
    ///
    /// The execution lock stays held during the callback, so a recipient cannot enter any
    /// state-changing endpoint of this market.
    #[endpoint(transferAndCall)]
    fn transfer_and_call(&self, to: ManagedAddress, amount: BigUint, endpoint: ManagedBuffer) {
        let _lock = self.lock_execution();
        let caller = self.blockchain().get_caller();

        self.transfer_shares(&caller, &to, &amount);

        self.tx()
            .to(&to)
            .raw_call(endpoint)
            .argument(&caller)
            .argument(&amount)
            .sync_call();
    }

    fn transfer_shares(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        self.require_can_transfer(from, to, amount);

        let from_mapper = self.balance_of(from);
        let balance = from_mapper.get();
        require!(balance >= *amount, ERROR_INSUFFICIENT_BALANCE);

        from_mapper.set(&balance - amount);
        self.balance_of(to).update(|balance| *balance += amount);

        self.transfer_event(from, to, amount);
    }

    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        let mapper = self.allowance(owner, spender);
        let current = mapper.get();
        if current == self.max_uint256() {
            return;
        }

        require!(current >= *amount, ERROR_INSUFFICIENT_ALLOWANCE);
        mapper.set(&current - amount);
    }

    fn set_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        self.require_within_width(amount);

        self.allowance(owner, spender).set(amount);
        self.approval_event(owner, spender, amount);
    }

    fn mint_shares(&self, to: &ManagedAddress, amount: &BigUint) {
        self.balance_of(to).update(|balance| *balance += amount);
        self.total_supply().update(|supply| *supply += amount);

        self.transfer_event(&ManagedAddress::zero(), to, amount);
    }

    fn burn_shares(&self, from: &ManagedAddress, amount: &BigUint) {
        let from_mapper = self.balance_of(from);
        let balance = from_mapper.get();
        require!(balance >= *amount, ERROR_INSUFFICIENT_BALANCE);

        from_mapper.set(&balance - amount);
        self.total_supply().update(|supply| *supply -= amount);

        self.transfer_event(from, &ManagedAddress::zero(), amount);
    }
}
