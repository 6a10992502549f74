multiversx_sc::imports!();

use common_constants::WAD;
use common_proxies::proxy_interest_rate_model::InterestRateModelProxy;
use common_structs::{BorrowSnapshot, MarketState};

use crate::{accrual, guard, storage};

/// Conversions, limits and read-only queries.
///
/// Every view brings the state forward to the current block first, so the figures match what
/// a state-changing call in the same block would see.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + guard::GuardModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    /// `totalAssets * 1e18 / totalShares`, or the initial rate while no shares exist.
    fn exchange_rate_of(&self, state: &MarketState<Self::Api>) -> BigUint {
        let total_shares = self.total_supply().get();
        if total_shares == 0 {
            return self.initial_exchange_rate().get();
        }

        self.mul_div(&state.total_assets(), &BigUint::from(WAD), &total_shares)
    }

    fn to_shares(&self, assets: &BigUint, exchange_rate: &BigUint) -> BigUint {
        self.mul_div(assets, &BigUint::from(WAD), exchange_rate)
    }

    fn to_shares_up(&self, assets: &BigUint, exchange_rate: &BigUint) -> BigUint {
        self.mul_div_up(assets, &BigUint::from(WAD), exchange_rate)
    }

    fn to_assets(&self, shares: &BigUint, exchange_rate: &BigUint) -> BigUint {
        self.mul_div(shares, exchange_rate, &BigUint::from(WAD))
    }

    fn to_assets_up(&self, shares: &BigUint, exchange_rate: &BigUint) -> BigUint {
        self.mul_div_up(shares, exchange_rate, &BigUint::from(WAD))
    }

    /// Room left under the supply cap, in assets.
    fn max_deposit_of(&self, state: &MarketState<Self::Api>, exchange_rate: &BigUint) -> BigUint {
        let supplied = self.to_assets(&self.total_supply().get(), exchange_rate);

        self.sub_or_zero(&state.supply_cap, &supplied)
    }

    fn max_mint_of(&self, state: &MarketState<Self::Api>, exchange_rate: &BigUint) -> BigUint {
        let unlimited = self.max_uint256();
        if state.supply_cap == unlimited {
            return unlimited;
        }

        let cap_in_shares = self.to_shares(&state.supply_cap, exchange_rate);

        self.sub_or_zero(&cap_in_shares, &self.total_supply().get())
    }

    fn max_withdraw_of(
        &self,
        owner: &ManagedAddress,
        state: &MarketState<Self::Api>,
        exchange_rate: &BigUint,
    ) -> BigUint {
        let owned = self.to_assets(&self.balance_of(owner).get(), exchange_rate);

        self.min(&owned, &state.cash)
    }

    fn max_redeem_of(
        &self,
        owner: &ManagedAddress,
        state: &MarketState<Self::Api>,
        exchange_rate: &BigUint,
    ) -> BigUint {
        let redeemable = self.to_shares(&state.cash, exchange_rate);

        self.min(&self.balance_of(owner).get(), &redeemable)
    }

    /// Debt of `account` at the index of `state`.
    fn debt_of(&self, account: &ManagedAddress, state: &MarketState<Self::Api>) -> BigUint {
        let snapshot = self.borrow_snapshot(account.clone());
        if snapshot.is_empty() {
            return BigUint::zero();
        }

        self.mul_div(
            &snapshot.principal,
            &BigUint::from(state.borrow_index),
            &BigUint::from(snapshot.interest_index),
        )
    }

    #[view(getBorrowSnapshot)]
    fn borrow_snapshot(&self, account: ManagedAddress) -> BorrowSnapshot<Self::Api> {
        let mapper = self.account_borrows(&account);
        if mapper.is_empty() {
            return BorrowSnapshot {
                principal: BigUint::zero(),
                interest_index: 0,
            };
        }

        mapper.get()
    }

    #[view(totalAssets)]
    fn total_assets(&self) -> BigUint {
        self.current_state().total_assets()
    }

    #[view(exchangeRateCurrent)]
    fn exchange_rate_current(&self) -> BigUint {
        self.exchange_rate_of(&self.current_state())
    }

    #[view(convertToShares)]
    fn convert_to_shares(&self, assets: BigUint) -> BigUint {
        self.to_shares(&assets, &self.exchange_rate_current())
    }

    #[view(convertToAssets)]
    fn convert_to_assets(&self, shares: BigUint) -> BigUint {
        self.to_assets(&shares, &self.exchange_rate_current())
    }

    #[view(previewDeposit)]
    fn preview_deposit(&self, assets: BigUint) -> BigUint {
        self.to_shares(&assets, &self.exchange_rate_current())
    }

    /// Assets a `mint` of `shares` costs, rounded up.
    #[view(previewMint)]
    fn preview_mint(&self, shares: BigUint) -> BigUint {
        self.to_assets_up(&shares, &self.exchange_rate_current())
    }

    /// Shares a `withdraw` of `assets` burns, rounded up.
    #[view(previewWithdraw)]
    fn preview_withdraw(&self, assets: BigUint) -> BigUint {
        self.to_shares_up(&assets, &self.exchange_rate_current())
    }

    #[view(previewRedeem)]
    fn preview_redeem(&self, shares: BigUint) -> BigUint {
        self.to_assets(&shares, &self.exchange_rate_current())
    }

    #[view(maxDeposit)]
    fn max_deposit(&self, _account: ManagedAddress) -> BigUint {
        let state = self.current_state();
        let exchange_rate = self.exchange_rate_of(&state);

        self.max_deposit_of(&state, &exchange_rate)
    }

    #[view(maxMint)]
    fn max_mint(&self, _account: ManagedAddress) -> BigUint {
        let state = self.current_state();
        let exchange_rate = self.exchange_rate_of(&state);

        self.max_mint_of(&state, &exchange_rate)
    }

    #[view(maxWithdraw)]
    fn max_withdraw(&self, owner: ManagedAddress) -> BigUint {
        let state = self.current_state();
        let exchange_rate = self.exchange_rate_of(&state);

        self.max_withdraw_of(&owner, &state, &exchange_rate)
    }

    #[view(maxRedeem)]
    fn max_redeem(&self, owner: ManagedAddress) -> BigUint {
        let state = self.current_state();
        let exchange_rate = self.exchange_rate_of(&state);

        self.max_redeem_of(&owner, &state, &exchange_rate)
    }

    #[view(borrowRatePerPeriod)]
    fn borrow_rate_per_period(&self) -> BigUint {
        self.query_borrow_rate(&self.current_state())
    }

    #[view(supplyRatePerPeriod)]
    fn supply_rate_per_period(&self) -> BigUint {
        let state = self.current_state();

        self.tx()
            .to(self.interest_rate_model().get())
            .typed(InterestRateModelProxy)
            .get_supply_rate_per_period(
                self.blockchain().get_sc_address(),
                &state.cash,
                &state.total_borrows,
                &state.total_reserves,
                state.reserve_factor,
            )
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(borrowBalanceCurrent)]
    fn borrow_balance_current(&self, account: ManagedAddress) -> BigUint {
        self.debt_of(&account, &self.current_state())
    }
}
