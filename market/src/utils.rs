multiversx_sc::imports!();

use common_errors::{
    ERROR_BORROW_NOT_ALLOWED, ERROR_DEPOSIT_NOT_ALLOWED, ERROR_INVALID_ASSET,
    ERROR_TRANSFER_NOT_ALLOWED, ERROR_ZERO_AMOUNT_NOT_ALLOWED,
};
use common_proxies::proxy_manager::ManagerProxy;

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait UtilsModule: storage::Storage {
    fn require_can_transfer(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let allowed = self
            .tx()
            .to(self.manager().get())
            .typed(ManagerProxy)
            .can_transfer(self.blockchain().get_sc_address(), from, to, amount)
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(allowed, ERROR_TRANSFER_NOT_ALLOWED);
    }

    fn require_can_deposit(&self, account: &ManagedAddress, amount: &BigUint) {
        let allowed = self
            .tx()
            .to(self.manager().get())
            .typed(ManagerProxy)
            .can_deposit(self.blockchain().get_sc_address(), account, amount)
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(allowed, ERROR_DEPOSIT_NOT_ALLOWED);
    }

    fn require_can_borrow(&self, account: &ManagedAddress, amount: &BigUint) {
        let allowed = self
            .tx()
            .to(self.manager().get())
            .typed(ManagerProxy)
            .can_borrow(self.blockchain().get_sc_address(), account, amount)
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(allowed, ERROR_BORROW_NOT_ALLOWED);
    }

    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(cache.asset.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Amount of the underlying attached to the call. Any other token is rejected.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        amount
    }

    fn resolve_account(&self, account: OptionalValue<ManagedAddress>) -> ManagedAddress {
        account
            .into_option()
            .unwrap_or_else(|| self.blockchain().get_caller())
    }
}
