#![allow(dead_code)]

use crate::constants::*;

use common_proxies::{
    proxy_interest_rate_model::InterestRateModelProxy, proxy_manager::ManagerProxy,
    proxy_market::MarketProxy, proxy_receiver::ReceiverProxy, proxy_signer::SignerProxy,
};
use common_structs::{BorrowSnapshot, MarketState, PermitSignature};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, EsdtTokenPayment, ManagedAddress, ManagedBuffer, ManagedByteArray,
        ReturnsNewManagedAddress, ReturnsResult,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(MARKET_PATH, market::ContractBuilder);
    blockchain.register_contract(INTEREST_RATE_MODEL_PATH, interest_rate_model::ContractBuilder);
    blockchain.register_contract(MANAGER_MOCK_PATH, manager_mock::ContractBuilder);
    blockchain.register_contract(SIGNER_MOCK_PATH, signer_mock::ContractBuilder);
    blockchain.register_contract(RECEIVER_MOCK_PATH, receiver_mock::ContractBuilder);

    blockchain
}

pub struct MarketTestState {
    pub world: ScenarioWorld,
    pub market: ManagedAddress<StaticApi>,
    pub model: ManagedAddress<StaticApi>,
    pub manager: ManagedAddress<StaticApi>,
    pub signer: ManagedAddress<StaticApi>,
    pub receiver: ManagedAddress<StaticApi>,
}

impl MarketTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world
            .current_block()
            .block_nonce(START_NONCE)
            .block_timestamp(START_TIMESTAMP);

        let model = setup_interest_rate_model(&mut world);
        let manager = setup_manager(&mut world);
        let signer = setup_signer(&mut world);
        let market = setup_market(&mut world, &model, &manager, &signer);
        let receiver = setup_receiver(&mut world);

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&model)
            .typed(InterestRateModelProxy)
            .set_interest_rate_vars(
                &market,
                BigUint::from(BASE_RATE_PER_YEAR),
                BigUint::from(MULTIPLIER_PER_YEAR),
                BigUint::from(JUMP_MULTIPLIER_PER_YEAR),
                KINK,
            )
            .run();

        Self {
            world,
            market,
            model,
            manager,
            signer,
            receiver,
        }
    }

    pub fn advance_to_block(&mut self, nonce: u64) {
        self.world.current_block().block_nonce(nonce);
    }

    // Supply side
    pub fn deposit(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .deposit(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(underlying(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_for(
        &mut self,
        from: &TestAddress,
        receiver: &TestAddress,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .deposit(OptionalValue::Some(receiver.to_managed_address()))
            .payment(underlying(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_error(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .deposit(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(underlying(amount))
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn mint(
        &mut self,
        from: &TestAddress,
        shares: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .mint(shares, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(underlying(payment))
            .returns(ReturnsResult)
            .run()
    }

    pub fn mint_error(
        &mut self,
        from: &TestAddress,
        shares: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .mint(shares, OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(underlying(payment))
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        receiver: &TestAddress,
        owner: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .withdraw(assets, receiver.to_managed_address(), owner)
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        owner: OptionalValue<ManagedAddress<StaticApi>>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .withdraw(assets, from.to_managed_address(), owner)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn redeem(
        &mut self,
        from: &TestAddress,
        shares: BigUint<StaticApi>,
        receiver: &TestAddress,
        owner: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .redeem(shares, receiver.to_managed_address(), owner)
            .returns(ReturnsResult)
            .run()
    }

    pub fn redeem_error(&mut self, from: &TestAddress, shares: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .redeem(
                shares,
                from.to_managed_address(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    // Borrow side
    pub fn borrow(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .borrow(amount)
            .run();
    }

    pub fn borrow_error(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .borrow(amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        borrower: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .repay(borrower)
            .payment(underlying(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(&mut self, from: &TestAddress, amount: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .repay(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .payment(underlying(amount))
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    // Share ledger
    pub fn transfer(&mut self, from: &TestAddress, to: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .transfer(to.to_managed_address(), amount)
            .run();
    }

    pub fn transfer_error(
        &mut self,
        from: &TestAddress,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .transfer(to.to_managed_address(), amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn approve(&mut self, owner: &TestAddress, spender: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(owner.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .approve(spender.to_managed_address(), amount)
            .run();
    }

    pub fn transfer_from(
        &mut self,
        spender: &TestAddress,
        from: &TestAddress,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(spender.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .transfer_from(from.to_managed_address(), to.to_managed_address(), amount)
            .run();
    }

    pub fn transfer_from_error(
        &mut self,
        spender: &TestAddress,
        from: &TestAddress,
        to: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(spender.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .transfer_from(from.to_managed_address(), to.to_managed_address(), amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn transfer_and_call(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .transfer_and_call(&self.receiver, amount, ManagedBuffer::from(b"onSharesReceived"))
            .run();
    }

    pub fn transfer_and_call_error(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .transfer_and_call(&self.receiver, amount, ManagedBuffer::from(b"onSharesReceived"))
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    // Permits
    pub fn permit_digest(
        &mut self,
        owner: &TestAddress,
        spender: &TestAddress,
        value: BigUint<StaticApi>,
        nonce: u64,
        deadline: u64,
    ) -> ManagedByteArray<StaticApi, 32> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .permit_digest(
                owner.to_managed_address(),
                spender.to_managed_address(),
                value,
                nonce,
                deadline,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn sign(
        &mut self,
        signer: &TestAddress,
        digest: ManagedByteArray<StaticApi, 32>,
    ) -> PermitSignature<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.signer)
            .typed(SignerProxy)
            .sign(signer.to_managed_address(), digest)
            .returns(ReturnsResult)
            .run()
    }

    pub fn permit(
        &mut self,
        owner: &TestAddress,
        spender: &TestAddress,
        value: BigUint<StaticApi>,
        deadline: u64,
        signature: PermitSignature<StaticApi>,
    ) {
        self.world
            .tx()
            .from(spender.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .permit(
                owner.to_managed_address(),
                spender.to_managed_address(),
                value,
                deadline,
                signature,
            )
            .run();
    }

    pub fn permit_error(
        &mut self,
        owner: &TestAddress,
        spender: &TestAddress,
        value: BigUint<StaticApi>,
        deadline: u64,
        signature: PermitSignature<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(spender.to_managed_address())
            .to(&self.market)
            .typed(MarketProxy)
            .permit(
                owner.to_managed_address(),
                spender.to_managed_address(),
                value,
                deadline,
                signature,
            )
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    // Administration
    pub fn set_reserve_factor(&mut self, reserve_factor: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.market)
            .typed(MarketProxy)
            .set_reserve_factor(reserve_factor)
            .run();
    }

    pub fn set_supply_cap(&mut self, supply_cap: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.market)
            .typed(MarketProxy)
            .set_supply_cap(supply_cap)
            .run();
    }

    pub fn set_transfer_allowed(&mut self, allowed: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.manager)
            .typed(ManagerProxy)
            .set_transfer_allowed(allowed)
            .run();
    }

    pub fn set_deposit_allowed(&mut self, allowed: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.manager)
            .typed(ManagerProxy)
            .set_deposit_allowed(allowed)
            .run();
    }

    pub fn set_borrow_allowed(&mut self, allowed: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.manager)
            .typed(ManagerProxy)
            .set_borrow_allowed(allowed)
            .run();
    }

    pub fn set_blocked(&mut self, account: &TestAddress, blocked: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.manager)
            .typed(ManagerProxy)
            .set_blocked(account.to_managed_address(), blocked)
            .run();
    }

    pub fn set_reenter(&mut self, enabled: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.receiver)
            .typed(ReceiverProxy)
            .set_reenter(enabled)
            .run();
    }

    // Views
    pub fn balance_of(&mut self, account: &ManagedAddress<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .balance_of(account)
            .returns(ReturnsResult)
            .run()
    }

    pub fn shares_of(&mut self, account: &TestAddress) -> BigUint<StaticApi> {
        self.balance_of(&account.to_managed_address())
    }

    pub fn allowance(&mut self, owner: &TestAddress, spender: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .allowance(owner.to_managed_address(), spender.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn nonce_of(&mut self, owner: &TestAddress) -> u64 {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .nonces(owner.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_assets(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .total_assets()
            .returns(ReturnsResult)
            .run()
    }

    pub fn exchange_rate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .exchange_rate_current()
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_state(&mut self) -> MarketState<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .market_state()
            .returns(ReturnsResult)
            .run()
    }

    pub fn state_version(&mut self) -> u32 {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .state_version()
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_snapshot(&mut self, account: &TestAddress) -> BorrowSnapshot<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .borrow_snapshot(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_balance(&mut self, account: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .borrow_balance_current(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_rate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .borrow_rate_per_period()
            .returns(ReturnsResult)
            .run()
    }

    pub fn supply_rate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .supply_rate_per_period()
            .returns(ReturnsResult)
            .run()
    }

    pub fn convert_to_shares(&mut self, assets: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .convert_to_shares(assets)
            .returns(ReturnsResult)
            .run()
    }

    pub fn convert_to_assets(&mut self, shares: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .convert_to_assets(shares)
            .returns(ReturnsResult)
            .run()
    }

    pub fn preview_deposit(&mut self, assets: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .preview_deposit(assets)
            .returns(ReturnsResult)
            .run()
    }

    pub fn preview_mint(&mut self, shares: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .preview_mint(shares)
            .returns(ReturnsResult)
            .run()
    }

    pub fn preview_withdraw(&mut self, assets: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .preview_withdraw(assets)
            .returns(ReturnsResult)
            .run()
    }

    pub fn preview_redeem(&mut self, shares: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .preview_redeem(shares)
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_deposit(&mut self, account: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .max_deposit(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_mint(&mut self, account: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .max_mint(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_withdraw(&mut self, account: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .max_withdraw(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_redeem(&mut self, account: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.market)
            .typed(MarketProxy)
            .max_redeem(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn received_by_receiver(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.receiver)
            .typed(ReceiverProxy)
            .received()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_underlying_balance(&mut self, account: &TestAddress, expected: BigUint<StaticApi>) {
        self.world
            .check_account(*account)
            .esdt_balance(UNDERLYING_TOKEN, expected);
    }
}

pub fn underlying(amount: BigUint<StaticApi>) -> EsdtTokenPayment<StaticApi> {
    EsdtTokenPayment::new(UNDERLYING_TOKEN.to_token_identifier(), 0, amount)
}

/// 2^256 - 1, the unlimited supply cap and allowance.
pub fn max_uint256() -> BigUint<StaticApi> {
    (BigUint::from(1u64) << 256) - BigUint::from(1u64)
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);

    for account in [
        SUPPLIER_ADDRESS,
        BORROWER_ADDRESS,
        SPENDER_ADDRESS,
        RECIPIENT_ADDRESS,
    ] {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(UNDERLYING_TOKEN, wad(10_000))
            .esdt_balance(OTHER_TOKEN, wad(10_000));
    }
}

pub fn setup_interest_rate_model(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(InterestRateModelProxy)
        .init(BLOCKS_PER_YEAR)
        .code(INTEREST_RATE_MODEL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_manager(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(ManagerProxy)
        .init()
        .code(MANAGER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_signer(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(SignerProxy)
        .init()
        .code(SIGNER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_receiver(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(ReceiverProxy)
        .init()
        .code(RECEIVER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_market(
    world: &mut ScenarioWorld,
    model: &ManagedAddress<StaticApi>,
    manager: &ManagedAddress<StaticApi>,
    signer: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(MarketProxy)
        .init(
            EgldOrEsdtTokenIdentifier::esdt(UNDERLYING_TOKEN.to_token_identifier()),
            manager,
            model,
            signer,
            ManagedBuffer::from(SHARE_NAME),
            ManagedBuffer::from(SHARE_SYMBOL),
            SHARE_DECIMALS,
            BigUint::from(INITIAL_EXCHANGE_RATE),
            ManagedBuffer::from(CHAIN_ID),
        )
        .code(MARKET_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
