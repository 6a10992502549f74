#![no_std]

use common_proxies::proxy_market::MarketProxy;

multiversx_sc::imports!();

/// Recipient of `transferAndCall`.
///
/// Counts the shares it is notified about. When re-entry is switched on it tries to send them
/// straight back through the calling market while that market is still executing.
#[multiversx_sc::contract]
pub trait ReceiverMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setReenter)]
    fn set_reenter(&self, enabled: bool) {
        self.reenter().set(enabled);
    }

    #[endpoint(onSharesReceived)]
    fn on_shares_received(&self, from: ManagedAddress, amount: BigUint) {
        self.received().update(|received| *received += &amount);

        if self.reenter().get() {
            let market = self.blockchain().get_caller();
            sc_print!("Re-entering market with {} shares", amount);

            self.tx()
                .to(&market)
                .typed(MarketProxy)
                .transfer(from, amount)
                .sync_call();
        }
    }

    #[view(getReceived)]
    #[storage_mapper("received")]
    fn received(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reenter")]
    fn reenter(&self) -> SingleValueMapper<bool>;
}
