multiversx_sc::imports!();

use common_proxies::proxy_interest_rate_model::InterestRateModelProxy;
use common_structs::MarketState;

use crate::{cache::Cache, guard, storage};

#[multiversx_sc::module]
pub trait AccrualModule:
    storage::Storage
    + guard::GuardModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    /// Brings `state` forward to `block_nonce` and returns the interest charged to borrowers.
    ///
    /// The rate is taken at the balances of the last touch and applied linearly over the
    /// elapsed steps. Every product rounds down. Nothing happens when no step elapsed.
    fn apply_accrual(&self, state: &mut MarketState<Self::Api>, block_nonce: u64) -> BigUint {
        if block_nonce <= state.accrual_nonce {
            return BigUint::zero();
        }

        let elapsed = block_nonce - state.accrual_nonce;
        let borrow_rate = self.query_borrow_rate(state);
        let factor = borrow_rate * BigUint::from(elapsed);

        let interest = self.wad_mul(&factor, &state.total_borrows);
        let reserve_share = self.wad_mul(&interest, &BigUint::from(state.reserve_factor));

        let borrow_index = BigUint::from(state.borrow_index);
        let index_growth = self.wad_mul(&factor, &borrow_index);
        state.borrow_index = self.narrow_to_u128(&(borrow_index + index_growth));

        state.total_borrows += &interest;
        state.total_reserves += reserve_share;
        state.accrual_nonce = block_nonce;

        interest
    }

    fn query_borrow_rate(&self, state: &MarketState<Self::Api>) -> BigUint {
        self.tx()
            .to(self.interest_rate_model().get())
            .typed(InterestRateModelProxy)
            .get_borrow_rate_per_period(
                self.blockchain().get_sc_address(),
                &state.cash,
                &state.total_borrows,
                &state.total_reserves,
            )
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn accrue(&self, cache: &mut Cache<Self>) {
        if cache.block_nonce == cache.state.accrual_nonce {
            return;
        }

        let interest = self.apply_accrual(&mut cache.state, cache.block_nonce);

        self.accrue_interest_event(
            &cache.state.cash,
            &interest,
            cache.state.borrow_index,
            &cache.state.total_borrows,
            &cache.state.total_reserves,
        );
    }

    /// Stored state brought forward to the current block without persisting it.
    fn current_state(&self) -> MarketState<Self::Api> {
        let mut state = self.market_state().get();
        self.apply_accrual(&mut state, self.blockchain().get_block_nonce());

        state
    }

    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);

        self.accrue(&mut cache);
    }
}
