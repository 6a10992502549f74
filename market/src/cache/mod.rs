multiversx_sc::imports!();

use common_structs::MarketState;

/// In-memory copy of the market state for the duration of one endpoint call.
///
/// Read once in `new`, mutated freely, and written back in `drop`. A failing call never
/// reaches storage because the platform reverts the write along with everything else.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub state: MarketState<C::Api>,
    pub asset: EgldOrEsdtTokenIdentifier<C::Api>,
    /// Time step of the current call.
    pub block_nonce: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            state: sc_ref.market_state().get(),
            asset: sc_ref.asset().get(),
            block_nonce: sc_ref.blockchain().get_block_nonce(),
            sc_ref,
        }
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.asset == *asset
    }

    pub fn has_cash(&self, amount: &BigUint<C::Api>) -> bool {
        self.state.cash >= *amount
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.market_state().set(&self.state);
    }
}
