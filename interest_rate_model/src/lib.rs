#![no_std]

multiversx_sc::imports!();

pub mod storage;
pub mod view;

use common_constants::MAX_KINK;
use common_errors::{
    ERROR_INVALID_KINK, ERROR_ZERO_ADDRESS_NOT_ALLOWED, ERROR_ZERO_AMOUNT_NOT_ALLOWED,
};

/// Jump-rate model shared by every market of the protocol.
///
/// Each market is configured under its own address, so a single deployment serves any number
/// of markets without them seeing each other's curve.
#[multiversx_sc::contract]
pub trait InterestRateModel:
    storage::Storage
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
    + common_rates::InterestRates
{
    #[init]
    fn init(&self, periods_per_year: u64) {
        require!(periods_per_year > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.periods_per_year().set(periods_per_year);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Replaces the curve of `market`.
    ///
    /// Rates are given per year and stored per period, truncated. `kink` is a utilization and
    /// is stored as given.
    #[only_owner]
    #[endpoint(setInterestRateVars)]
    fn set_interest_rate_vars(
        &self,
        market: ManagedAddress,
        base_per_year: BigUint,
        multiplier_per_year: BigUint,
        jump_per_year: BigUint,
        kink: u64,
    ) {
        require!(!market.is_zero(), ERROR_ZERO_ADDRESS_NOT_ALLOWED);
        require!(kink <= MAX_KINK, ERROR_INVALID_KINK);

        let vars = self.rate_vars_from_annual(
            &base_per_year,
            &multiplier_per_year,
            &jump_per_year,
            kink,
            self.periods_per_year().get(),
        );

        self.new_interest_rate_vars_event(
            &market,
            vars.base_rate_per_period,
            vars.multiplier_per_period,
            vars.jump_multiplier_per_period,
            vars.kink,
        );

        self.interest_rate_vars(&market).set(vars);
    }
}
