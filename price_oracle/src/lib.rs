#![no_std]

multiversx_sc::imports!();

pub mod oracle;
pub mod storage;

use common_errors::{ERROR_ZERO_ADDRESS_NOT_ALLOWED, ERROR_ZERO_AMOUNT_NOT_ALLOWED};
use common_structs::PricedAsset;

/// Values assets in the unit of account of its feeds.
///
/// Plain tokens are priced by a registered feed. Pool claims and market shares are broken down
/// into plain tokens first. The oracle never writes to the contracts it reads.
#[multiversx_sc::contract]
pub trait PriceOracle:
    storage::Storage
    + oracle::OracleModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Registers `feed` for `asset`; the zero address removes the entry.
    #[only_owner]
    #[endpoint(setFeed)]
    fn set_feed(&self, asset: EgldOrEsdtTokenIdentifier, feed: ManagedAddress) {
        require!(asset.is_valid(), ERROR_ZERO_ADDRESS_NOT_ALLOWED);

        if feed.is_zero() {
            self.feeds(&asset).clear();
        } else {
            self.feeds(&asset).set(&feed);
        }

        self.set_feed_event(&asset, &feed);
    }

    /// The zero address when `asset` has no feed.
    #[view(getFeed)]
    fn get_feed(&self, asset: EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let mapper = self.feeds(&asset);
        if mapper.is_empty() {
            return ManagedAddress::zero();
        }

        mapper.get()
    }

    #[view(priceOf)]
    fn price_of(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        require!(asset.is_valid(), ERROR_ZERO_ADDRESS_NOT_ALLOWED);
        require!(amount > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.quote(&asset, &amount)
    }

    #[view(priceOfLiquidityToken)]
    fn price_of_liquidity_token(&self, pool: ManagedAddress, amount: BigUint) -> BigUint {
        require!(!pool.is_zero(), ERROR_ZERO_ADDRESS_NOT_ALLOWED);
        require!(amount > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.liquidity_token_value(&pool, &amount)
    }

    #[view(getAssetPrice)]
    fn get_asset_price(&self, asset: PricedAsset<Self::Api>, amount: BigUint) -> BigUint {
        match asset {
            PricedAsset::Standard(token) => self.price_of(token, amount),
            PricedAsset::Lp(pool) => self.price_of_liquidity_token(pool, amount),
            PricedAsset::InterestBearing(market) => {
                require!(!market.is_zero(), ERROR_ZERO_ADDRESS_NOT_ALLOWED);
                require!(amount > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

                let (underlying, assets) = self.underlying_of(&market, &amount);
                self.price_of(underlying, assets)
            },
        }
    }
}
