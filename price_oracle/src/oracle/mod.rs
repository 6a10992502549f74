multiversx_sc::imports!();

use common_errors::{
    ERROR_INVALID_PRICE_FEED_ANSWER, ERROR_POOL_INVARIANT_NOT_RECORDED, ERROR_PRICE_FEED_NOT_FOUND,
};
use common_proxies::{proxy_feed::FeedProxy, proxy_market::MarketProxy, proxy_pair::PairProxy};

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + common_math::SharedMathModule + common_safecast::SafeCastModule
{
    /// Price of one whole unit of `asset`, normalized to WAD.
    fn feed_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let mapper = self.feeds(asset);
        require!(!mapper.is_empty(), ERROR_PRICE_FEED_NOT_FOUND);
        let feed = mapper.get();

        let answer = self
            .tx()
            .to(&feed)
            .typed(FeedProxy)
            .latest_answer()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(answer.sign() == Sign::Plus, ERROR_INVALID_PRICE_FEED_ANSWER);

        let decimals = self
            .tx()
            .to(&feed)
            .typed(FeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.to_wad(&self.to_unsigned(&answer), decimals as usize)
    }

    fn quote(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint) -> BigUint {
        self.wad_mul(&self.feed_price(asset), amount)
    }

    /// Reserves the pool would hold at the external prices, given its invariant.
    ///
    /// `x' = sqrt(k * pY / pX)` and `y' = sqrt(k * pX / pY)`.
    fn fair_reserves(
        &self,
        invariant: &BigUint,
        first_price: &BigUint,
        second_price: &BigUint,
    ) -> (BigUint, BigUint) {
        let first = self.sqrt(&self.mul_div(invariant, second_price, first_price));
        let second = self.sqrt(&self.mul_div(invariant, first_price, second_price));

        (first, second)
    }

    /// Value of `amount` pool claims, each leg priced at its feed.
    ///
    /// The invariant is the one recorded at the last liquidity event, so tokens donated and
    /// synced into the reserves do not move the valuation. Pools that never recorded one are
    /// rejected.
    fn liquidity_token_value(&self, pool: &ManagedAddress, amount: &BigUint) -> BigUint {
        let (first_token, second_token) = self
            .tx()
            .to(pool)
            .typed(PairProxy)
            .get_tokens()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();
        let total_supply = self
            .tx()
            .to(pool)
            .typed(PairProxy)
            .get_total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let invariant = self
            .tx()
            .to(pool)
            .typed(PairProxy)
            .get_k_last()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(invariant > 0, ERROR_POOL_INVARIANT_NOT_RECORDED);

        let first_price = self.feed_price(&first_token);
        let second_price = self.feed_price(&second_token);
        let (fair_first, fair_second) = self.fair_reserves(&invariant, &first_price, &second_price);

        let first_amount = self.mul_div(amount, &fair_first, &total_supply);
        let second_amount = self.mul_div(amount, &fair_second, &total_supply);

        self.wad_mul(&first_price, &first_amount) + self.wad_mul(&second_price, &second_amount)
    }

    /// Underlying asset of `market` and what `shares` of it are worth in that asset.
    fn underlying_of(
        &self,
        market: &ManagedAddress,
        shares: &BigUint,
    ) -> (EgldOrEsdtTokenIdentifier, BigUint) {
        let asset = self
            .tx()
            .to(market)
            .typed(MarketProxy)
            .asset()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let assets = self
            .tx()
            .to(market)
            .typed(MarketProxy)
            .convert_to_assets(shares)
            .returns(ReturnsResult)
            .sync_call_readonly();

        (asset, assets)
    }
}
