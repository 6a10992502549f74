#![no_std]

multiversx_sc::imports!();

/// Two-token constant-product pool reduced to its accounting.
///
/// Amounts are booked without moving tokens. `addLiquidity` is the only liquidity event and
/// the only place `k_last` is recorded; donations stay outside the reserves until `sync`.
#[multiversx_sc::contract]
pub trait PairMock {
    #[init]
    fn init(
        &self,
        first_token: EgldOrEsdtTokenIdentifier,
        second_token: EgldOrEsdtTokenIdentifier,
    ) {
        self.first_token().set(first_token);
        self.second_token().set(second_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Adds both amounts to the pool, mints `liquidity` and records the new invariant.
    #[endpoint(addLiquidity)]
    fn add_liquidity(&self, first_amount: BigUint, second_amount: BigUint, liquidity: BigUint) {
        self.first_balance().update(|balance| *balance += &first_amount);
        self.second_balance().update(|balance| *balance += &second_amount);
        self.sync();

        self.total_supply().update(|supply| *supply += &liquidity);
        self.k_last()
            .set(self.first_reserve().get() * self.second_reserve().get());
    }

    /// Tokens sent to the pool without minting anything.
    #[endpoint(donate)]
    fn donate(&self, first_amount: BigUint, second_amount: BigUint) {
        self.first_balance().update(|balance| *balance += &first_amount);
        self.second_balance().update(|balance| *balance += &second_amount);
    }

    /// Aligns the reserves with the balances held.
    #[endpoint(sync)]
    fn sync(&self) {
        self.first_reserve().set(self.first_balance().get());
        self.second_reserve().set(self.second_balance().get());
    }

    #[view(getTokens)]
    fn get_tokens(&self) -> MultiValue2<EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenIdentifier> {
        (self.first_token().get(), self.second_token().get()).into()
    }

    #[view(getReserves)]
    fn get_reserves(&self) -> MultiValue2<BigUint, BigUint> {
        (self.first_reserve().get(), self.second_reserve().get()).into()
    }

    #[view(getTotalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getKLast)]
    #[storage_mapper("k_last")]
    fn k_last(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("first_token")]
    fn first_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("second_token")]
    fn second_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("first_balance")]
    fn first_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("second_balance")]
    fn second_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("first_reserve")]
    fn first_reserve(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("second_reserve")]
    fn second_reserve(&self) -> SingleValueMapper<BigUint>;
}
