#![no_std]

use common_constants::{MAX_RESERVE_FACTOR, WAD};
use common_errors::{ERROR_INVALID_RESERVE_FACTOR, ERROR_ZERO_AMOUNT_NOT_ALLOWED};
use common_structs::InterestRateVars;

multiversx_sc::imports!();

/// Jump-rate curve shared by the rate model and the market's views.
///
/// Utilization and rates are WAD fractions. Rates are quoted per period, a period being one
/// block; annual figures are converted once, when the curve is configured.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule + common_safecast::SafeCastModule {
    /// `borrows / (cash + borrows - reserves)`, zero when nothing is borrowed.
    ///
    /// Not clamped: reserves larger than cash can push it above 100%. A market whose reserves
    /// cover all of its assets has no supplier capital left to lend and reports zero.
    fn utilization(&self, cash: &BigUint, borrows: &BigUint, reserves: &BigUint) -> BigUint {
        if *borrows == BigUint::zero() {
            return BigUint::zero();
        }

        let gross = cash + borrows;
        let net = self.sub_or_zero(&gross, reserves);
        if net == BigUint::zero() {
            return BigUint::zero();
        }

        self.wad_div(borrows, &net)
    }

    /// Piecewise linear in utilization, continuous at the kink.
    ///
    /// - `u <= kink`: `u * multiplier + base`
    /// - `u > kink`: `kink * multiplier + base + (u - kink) * jump`
    fn borrow_rate(&self, utilization: &BigUint, vars: &InterestRateVars) -> BigUint {
        let base = BigUint::from(vars.base_rate_per_period);
        let multiplier = BigUint::from(vars.multiplier_per_period);
        let kink = BigUint::from(vars.kink);

        if *utilization <= kink {
            return self.wad_mul(utilization, &multiplier) + base;
        }

        let normal_rate = self.wad_mul(&kink, &multiplier) + base;
        let excess = utilization - &kink;
        let jump = BigUint::from(vars.jump_multiplier_per_period);

        normal_rate + self.wad_mul(&excess, &jump)
    }

    /// What suppliers earn per period: the borrower payment net of the reserve cut, scaled by
    /// utilization.
    fn supply_rate(
        &self,
        utilization: &BigUint,
        borrow_rate: &BigUint,
        reserve_factor: u64,
    ) -> BigUint {
        require!(
            reserve_factor <= MAX_RESERVE_FACTOR,
            ERROR_INVALID_RESERVE_FACTOR
        );

        let retained_share = BigUint::from(WAD) - BigUint::from(reserve_factor);
        let rate_to_pool = self.wad_mul(borrow_rate, &retained_share);

        self.wad_mul(utilization, &rate_to_pool)
    }

    fn per_period(&self, annual: &BigUint, periods_per_year: u64) -> u64 {
        require!(periods_per_year > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.narrow_to_u64(&(annual / &BigUint::from(periods_per_year)))
    }

    fn rate_vars_from_annual(
        &self,
        base_per_year: &BigUint,
        multiplier_per_year: &BigUint,
        jump_per_year: &BigUint,
        kink: u64,
        periods_per_year: u64,
    ) -> InterestRateVars {
        InterestRateVars {
            base_rate_per_period: self.per_period(base_per_year, periods_per_year),
            multiplier_per_period: self.per_period(multiplier_per_year, periods_per_year),
            jump_multiplier_per_period: self.per_period(jump_per_year, periods_per_year),
            kink,
        }
    }
}
