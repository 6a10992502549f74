multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_CASH, ERROR_INSUFFICIENT_PAYMENT, ERROR_SUPPLY_CAP_EXCEEDED,
    ERROR_ZERO_AMOUNT_NOT_ALLOWED,
};

use crate::{accrual, cache::Cache, guard, ledger, storage, utils, view};

/// Share issuance and redemption against the underlying asset.
#[multiversx_sc::module]
pub trait VaultModule:
    storage::Storage
    + guard::GuardModule
    + accrual::AccrualModule
    + ledger::LedgerModule
    + utils::UtilsModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    /// Deposits the attached assets and mints shares to `receiver` (the caller by default).
    ///
    /// Returns the shares minted.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, receiver: OptionalValue<ManagedAddress>) -> BigUint {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);
        let assets = self.get_payment_amount(&cache);
        let caller = self.blockchain().get_caller();
        let receiver = self.resolve_account(receiver);

        self.accrue(&mut cache);
        self.require_can_deposit(&caller, &assets);

        let exchange_rate = self.exchange_rate_of(&cache.state);
        require!(
            assets <= self.max_deposit_of(&cache.state, &exchange_rate),
            ERROR_SUPPLY_CAP_EXCEEDED
        );

        let shares = self.to_shares(&assets, &exchange_rate);
        require!(shares > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        cache.state.cash += &assets;
        self.mint_shares(&receiver, &shares);

        self.deposit_event(&caller, &receiver, &assets, &shares);

        shares
    }

    /// Mints exactly `shares` to `receiver`, charging their cost rounded up.
    ///
    /// Whatever the payment exceeds the cost by is refunded to the caller. Returns the assets
    /// kept.
    #[payable("*")]
    #[endpoint(mint)]
    fn mint(&self, shares: BigUint, receiver: OptionalValue<ManagedAddress>) -> BigUint {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);
        let payment = self.get_payment_amount(&cache);
        let caller = self.blockchain().get_caller();
        let receiver = self.resolve_account(receiver);
        require!(shares > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.accrue(&mut cache);

        let exchange_rate = self.exchange_rate_of(&cache.state);
        let assets = self.to_assets_up(&shares, &exchange_rate);
        self.require_can_deposit(&caller, &assets);
        require!(
            assets <= self.max_deposit_of(&cache.state, &exchange_rate),
            ERROR_SUPPLY_CAP_EXCEEDED
        );
        require!(payment >= assets, ERROR_INSUFFICIENT_PAYMENT);

        cache.state.cash += &assets;
        self.mint_shares(&receiver, &shares);

        self.send_asset(&cache, &(&payment - &assets), &caller);

        self.deposit_event(&caller, &receiver, &assets, &shares);

        assets
    }

    /// Burns the shares worth `assets` from `owner` and pays `receiver`.
    ///
    /// `owner` defaults to the caller. A caller other than the owner spends its allowance.
    /// Returns the shares burned.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        assets: BigUint,
        receiver: ManagedAddress,
        owner: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);
        require!(assets > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.accrue(&mut cache);

        let exchange_rate = self.exchange_rate_of(&cache.state);
        let shares = self.to_shares_up(&assets, &exchange_rate);

        self.exit(&mut cache, &assets, &shares, receiver, owner);

        shares
    }

    /// Burns `shares` from `owner` and pays what they are worth to `receiver`.
    ///
    /// Returns the assets paid.
    #[endpoint(redeem)]
    fn redeem(
        &self,
        shares: BigUint,
        receiver: ManagedAddress,
        owner: OptionalValue<ManagedAddress>,
    ) -> BigUint {
        let _lock = self.lock_execution();
        let mut cache = Cache::new(self);
        require!(shares > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.accrue(&mut cache);

        let exchange_rate = self.exchange_rate_of(&cache.state);
        let assets = self.to_assets(&shares, &exchange_rate);
        require!(assets > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.exit(&mut cache, &assets, &shares, receiver, owner);

        assets
    }

    fn exit(
        &self,
        cache: &mut Cache<Self>,
        assets: &BigUint,
        shares: &BigUint,
        receiver: ManagedAddress,
        owner: OptionalValue<ManagedAddress>,
    ) {
        let caller = self.blockchain().get_caller();
        let owner = self.resolve_account(owner);

        self.require_can_transfer(&owner, &receiver, shares);
        if caller != owner {
            self.spend_allowance(&owner, &caller, shares);
        }
        require!(cache.has_cash(assets), ERROR_INSUFFICIENT_CASH);

        self.burn_shares(&owner, shares);
        cache.state.cash -= assets;

        self.send_asset(cache, assets, &receiver);

        self.withdraw_event(&caller, &receiver, &owner, assets, shares);
    }
}
