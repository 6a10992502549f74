multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_CASH, ERROR_NOTHING_TO_REPAY, ERROR_ZERO_AMOUNT_NOT_ALLOWED,
};
use common_structs::BorrowSnapshot;

use crate::{accrual, cache::Cache, guard, storage, utils, view};

#[multiversx_sc::module]
pub trait BorrowModule:
    storage::Storage
    + guard::GuardModule
    + accrual::AccrualModule
    + utils::UtilsModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    /// Lends `amount` of the underlying to the caller. No shares are involved.
    #[endpoint(borrow)]
    fn borrow(&self, amount: BigUint) {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        require!(amount > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.accrue(&mut cache);
        self.require_can_borrow(&caller, &amount);
        require!(cache.has_cash(&amount), ERROR_INSUFFICIENT_CASH);

        let account_borrows = self.debt_of(&caller, &cache.state) + &amount;
        self.store_debt(&caller, &account_borrows, cache.state.borrow_index);

        cache.state.total_borrows += &amount;
        cache.state.cash -= &amount;

        self.send_asset(&cache, &amount, &caller);

        self.borrow_event(&caller, &amount, &account_borrows, &cache.state.total_borrows);
    }

    /// Repays debt of `borrower` (the caller by default) with the attached assets.
    ///
    /// At most the outstanding debt is taken; the rest goes back to the caller. Returns the
    /// amount repaid.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, borrower: OptionalValue<ManagedAddress>) -> BigUint {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);
        let payment = self.get_payment_amount(&cache);
        let caller = self.blockchain().get_caller();
        let borrower = self.resolve_account(borrower);

        self.accrue(&mut cache);

        let debt = self.debt_of(&borrower, &cache.state);
        require!(debt > 0, ERROR_NOTHING_TO_REPAY);

        let repaid = self.min(&payment, &debt);
        let account_borrows = &debt - &repaid;
        self.store_debt(&borrower, &account_borrows, cache.state.borrow_index);

        cache.state.total_borrows = self.sub_or_zero(&cache.state.total_borrows, &repaid);
        cache.state.cash += &repaid;

        self.send_asset(&cache, &(&payment - &repaid), &caller);

        self.repay_event(
            &caller,
            &borrower,
            &repaid,
            &account_borrows,
            &cache.state.total_borrows,
        );

        repaid
    }

    fn store_debt(&self, account: &ManagedAddress, debt: &BigUint, borrow_index: u128) {
        if *debt == 0 {
            self.account_borrows(account).clear();
            return;
        }

        self.account_borrows(account).set(BorrowSnapshot {
            principal: debt.clone(),
            interest_index: borrow_index,
        });
    }
}
