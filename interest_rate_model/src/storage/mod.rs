multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::InterestRateVars;

#[multiversx_sc::module]
pub trait Storage {
    /// Number of time steps (blocks) in a year, fixed at deploy.
    #[view(getPeriodsPerYear)]
    #[storage_mapper("periods_per_year")]
    fn periods_per_year(&self) -> SingleValueMapper<u64>;

    /// Per-period curve of each market, keyed by the market contract address.
    #[storage_mapper("interest_rate_vars")]
    fn interest_rate_vars(&self, market: &ManagedAddress) -> SingleValueMapper<InterestRateVars>;
}
