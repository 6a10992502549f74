multiversx_sc::imports!();

use common_errors::ERROR_INTEREST_RATE_VARS_NOT_SET;
use common_structs::InterestRateVars;

use crate::storage;

#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
    + common_rates::InterestRates
{
    #[view(getInterestRateVars)]
    fn get_interest_rate_vars(&self, market: &ManagedAddress) -> InterestRateVars {
        let mapper = self.interest_rate_vars(market);
        require!(!mapper.is_empty(), ERROR_INTEREST_RATE_VARS_NOT_SET);

        mapper.get()
    }

    /// Curve used for pricing: a market nobody configured yet borrows at zero.
    fn rate_vars_or_zero(&self, market: &ManagedAddress) -> InterestRateVars {
        let mapper = self.interest_rate_vars(market);
        if mapper.is_empty() {
            return InterestRateVars {
                base_rate_per_period: 0,
                multiplier_per_period: 0,
                jump_multiplier_per_period: 0,
                kink: 0,
            };
        }

        mapper.get()
    }

    #[view(getUtilization)]
    fn get_utilization(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        self.utilization(cash, borrows, reserves)
    }

    /// Rate borrowers of `market` pay per block at the given balances.
    #[view(getBorrowRatePerPeriod)]
    fn get_borrow_rate_per_period(
        &self,
        market: &ManagedAddress,
        cash: &BigUint,
        borrows: &BigUint,
        reserves: &BigUint,
    ) -> BigUint {
        let vars = self.rate_vars_or_zero(market);
        let utilization = self.utilization(cash, borrows, reserves);

        self.borrow_rate(&utilization, &vars)
    }

    /// Rate suppliers of `market` earn per block once `reserve_factor` of the interest is
    /// retained.
    #[view(getSupplyRatePerPeriod)]
    fn get_supply_rate_per_period(
        &self,
        market: &ManagedAddress,
        cash: &BigUint,
        borrows: &BigUint,
        reserves: &BigUint,
        reserve_factor: u64,
    ) -> BigUint {
        let vars = self.rate_vars_or_zero(market);
        let utilization = self.utilization(cash, borrows, reserves);
        let borrow_rate = self.borrow_rate(&utilization, &vars);

        self.supply_rate(&utilization, &borrow_rate, reserve_factor)
    }
}
