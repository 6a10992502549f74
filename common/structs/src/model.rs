#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-period jump-rate curve of one market, as stored by the rate model.
///
/// Every field is a WAD fraction. `kink` is the utilization past which the jump
/// multiplier applies.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Eq, Debug)]
pub struct InterestRateVars {
    pub base_rate_per_period: u64,
    pub multiplier_per_period: u64,
    pub jump_multiplier_per_period: u64,
    pub kink: u64,
}

/// Accounting state of a market, layout version 2.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct MarketState<M: ManagedTypeApi> {
    pub cash: BigUint<M>,
    pub total_borrows: BigUint<M>,
    pub total_reserves: BigUint<M>,
    pub reserve_factor: u64,
    pub accrual_nonce: u64,
    pub borrow_index: u128,
    pub supply_cap: BigUint<M>,
}

impl<M: ManagedTypeApi> MarketState<M> {
    pub fn new(
        reserve_factor: u64,
        accrual_nonce: u64,
        borrow_index: u128,
        supply_cap: BigUint<M>,
    ) -> Self {
        MarketState {
            cash: BigUint::zero(),
            total_borrows: BigUint::zero(),
            total_reserves: BigUint::zero(),
            reserve_factor,
            accrual_nonce,
            borrow_index,
            supply_cap,
        }
    }

    /// `cash + total_borrows - total_reserves`, floored at zero.
    pub fn total_assets(&self) -> BigUint<M> {
        let gross = &self.cash + &self.total_borrows;
        if gross > self.total_reserves {
            gross - &self.total_reserves
        } else {
            BigUint::zero()
        }
    }
}

/// Layout version 1, written before supply caps existed.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct MarketStateV1<M: ManagedTypeApi> {
    pub cash: BigUint<M>,
    pub total_borrows: BigUint<M>,
    pub total_reserves: BigUint<M>,
    pub reserve_factor: u64,
    pub accrual_nonce: u64,
    pub borrow_index: u128,
}

impl<M: ManagedTypeApi> MarketStateV1<M> {
    pub fn into_current(self, supply_cap: BigUint<M>) -> MarketState<M> {
        MarketState {
            cash: self.cash,
            total_borrows: self.total_borrows,
            total_reserves: self.total_reserves,
            reserve_factor: self.reserve_factor,
            accrual_nonce: self.accrual_nonce,
            borrow_index: self.borrow_index,
            supply_cap,
        }
    }
}

/// Debt of one borrower as of its last touch.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct BorrowSnapshot<M: ManagedTypeApi> {
    pub principal: BigUint<M>,
    pub interest_index: u128,
}

impl<M: ManagedTypeApi> BorrowSnapshot<M> {
    pub fn is_empty(&self) -> bool {
        self.principal == BigUint::zero() || self.interest_index == 0
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub enum PricedAsset<M: ManagedTypeApi> {
    /// Claim on a two-token constant-product pool.
    Lp(ManagedAddress<M>),
    /// Shares of a lending market, valued through its underlying.
    InterestBearing(ManagedAddress<M>),
    Standard(EgldOrEsdtTokenIdentifier<M>),
}

/// Recoverable ECDSA signature in `(v, r, s)` form.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, PartialEq, Debug)]
pub struct PermitSignature<M: ManagedTypeApi> {
    pub v: u8,
    pub r: ManagedByteArray<M, 32>,
    pub s: ManagedByteArray<M, 32>,
}
