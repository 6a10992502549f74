#![allow(dead_code)]

use crate::constants::*;

use common_proxies::{
    proxy_feed::FeedProxy, proxy_interest_rate_model::InterestRateModelProxy,
    proxy_manager::ManagerProxy, proxy_market::MarketProxy, proxy_pair::PairProxy,
    proxy_price_oracle::PriceOracleProxy, proxy_signer::SignerProxy,
};
use common_structs::PricedAsset;
use multiversx_sc::types::{
    BigInt, BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer,
    ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(PRICE_ORACLE_PATH, price_oracle::ContractBuilder);
    blockchain.register_contract(FEED_MOCK_PATH, feed_mock::ContractBuilder);
    blockchain.register_contract(PAIR_MOCK_PATH, pair_mock::ContractBuilder);
    blockchain.register_contract(MARKET_PATH, market::ContractBuilder);
    blockchain.register_contract(INTEREST_RATE_MODEL_PATH, interest_rate_model::ContractBuilder);
    blockchain.register_contract(MANAGER_MOCK_PATH, manager_mock::ContractBuilder);
    blockchain.register_contract(SIGNER_MOCK_PATH, signer_mock::ContractBuilder);

    blockchain
}

pub fn token(id: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(id.to_token_identifier())
}

pub struct PriceOracleTestState {
    pub world: ScenarioWorld,
    pub oracle: ManagedAddress<StaticApi>,
    pub egld_feed: ManagedAddress<StaticApi>,
    pub usdc_feed: ManagedAddress<StaticApi>,
    pub pair: ManagedAddress<StaticApi>,
}

impl PriceOracleTestState {
    /// Oracle with feeds for WEGLD and USDC and an empty WEGLD/USDC pool.
    pub fn new() -> Self {
        let mut world = world();
        world.account(OWNER_ADDRESS).nonce(1);
        world.account(USER_ADDRESS).nonce(1);

        let oracle = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(PriceOracleProxy)
            .init()
            .code(PRICE_ORACLE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let egld_feed = deploy_feed(&mut world, EGLD_FEED_ANSWER, EGLD_FEED_DECIMALS);
        let usdc_feed = deploy_feed(&mut world, USDC_FEED_ANSWER, USDC_FEED_DECIMALS);

        let pair = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(PairProxy)
            .init(token(EGLD_TOKEN), token(USDC_TOKEN))
            .code(PAIR_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            oracle,
            egld_feed,
            usdc_feed,
            pair,
        };

        let egld_feed = state.egld_feed.clone();
        let usdc_feed = state.usdc_feed.clone();
        state.set_feed(EGLD_TOKEN, &egld_feed);
        state.set_feed(USDC_TOKEN, &usdc_feed);

        state
    }

    pub fn set_feed(&mut self, asset: TestTokenIdentifier, feed: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .set_feed(token(asset), feed)
            .run();
    }

    pub fn get_feed(&mut self, asset: TestTokenIdentifier) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .get_feed(token(asset))
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_answer(&mut self, feed: &ManagedAddress<StaticApi>, answer: i64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(feed)
            .typed(FeedProxy)
            .set_answer(BigInt::from(answer))
            .run();
    }

    pub fn set_decimals(&mut self, feed: &ManagedAddress<StaticApi>, decimals: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(feed)
            .typed(FeedProxy)
            .set_decimals(decimals)
            .run();
    }

    pub fn price_of(
        &mut self,
        asset: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .price_of(asset, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn price_of_error(
        &mut self,
        asset: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(USER_ADDRESS)
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .price_of(asset, amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn price_of_liquidity_token(&mut self, amount: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .price_of_liquidity_token(&self.pair, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn asset_price(
        &mut self,
        asset: PricedAsset<StaticApi>,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .get_asset_price(asset, amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn asset_price_error(
        &mut self,
        asset: PricedAsset<StaticApi>,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(USER_ADDRESS)
            .to(&self.oracle)
            .typed(PriceOracleProxy)
            .get_asset_price(asset, amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    // Pool accounting
    pub fn add_liquidity(
        &mut self,
        first_amount: BigUint<StaticApi>,
        second_amount: BigUint<StaticApi>,
        liquidity: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pair)
            .typed(PairProxy)
            .add_liquidity(first_amount, second_amount, liquidity)
            .run();
    }

    pub fn donate_and_sync(
        &mut self,
        first_amount: BigUint<StaticApi>,
        second_amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(USER_ADDRESS)
            .to(&self.pair)
            .typed(PairProxy)
            .donate(first_amount, second_amount)
            .run();

        self.world
            .tx()
            .from(USER_ADDRESS)
            .to(&self.pair)
            .typed(PairProxy)
            .sync()
            .run();
    }

    pub fn pool_reserves(&mut self) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .query()
            .to(&self.pair)
            .typed(PairProxy)
            .get_reserves()
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    /// Market over WEGLD whose shares are still at their initial exchange rate.
    pub fn deploy_egld_market(&mut self) -> ManagedAddress<StaticApi> {
        let model = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(InterestRateModelProxy)
            .init(BLOCKS_PER_YEAR)
            .code(INTEREST_RATE_MODEL_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        let manager = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(ManagerProxy)
            .init()
            .code(MANAGER_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        let signer = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(SignerProxy)
            .init()
            .code(SIGNER_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(MarketProxy)
            .init(
                token(EGLD_TOKEN),
                &manager,
                &model,
                &signer,
                ManagedBuffer::from(b"Interest WEGLD"),
                ManagedBuffer::from(b"iWEGLD"),
                18u8,
                BigUint::from(MARKET_EXCHANGE_RATE),
                ManagedBuffer::from(b"D"),
            )
            .code(MARKET_PATH)
            .returns(ReturnsNewManagedAddress)
            .run()
    }
}

pub fn deploy_feed(
    world: &mut ScenarioWorld,
    answer: i64,
    decimals: u8,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(FeedProxy)
        .init(BigInt::from(answer), decimals)
        .code(FEED_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
