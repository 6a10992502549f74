multiversx_sc::imports!();

use common_constants::MAX_RESERVE_FACTOR;
use common_errors::ERROR_INVALID_RESERVE_FACTOR;

use crate::{accrual, cache::Cache, guard, storage};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + guard::GuardModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    /// Interest up to the current block is split with the old factor before the new one
    /// applies.
    #[only_owner]
    #[endpoint(setReserveFactor)]
    fn set_reserve_factor(&self, reserve_factor: u64) {
        let _lock = self.lock_execution();
        require!(
            reserve_factor <= MAX_RESERVE_FACTOR,
            ERROR_INVALID_RESERVE_FACTOR
        );

        let mut cache = Cache::new(self);
        self.accrue(&mut cache);

        cache.state.reserve_factor = reserve_factor;
    }

    /// Maximum assets the market accepts from suppliers.
    #[only_owner]
    #[endpoint(setSupplyCap)]
    fn set_supply_cap(&self, supply_cap: BigUint) {
        let _lock = self.lock_execution();
        self.require_within_width(&supply_cap);

        let mut cache = Cache::new(self);
        cache.state.supply_cap = supply_cap;
    }
}
