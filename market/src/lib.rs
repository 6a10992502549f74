#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accrual;
pub mod borrowing;
pub mod cache;
pub mod config;
pub mod guard;
pub mod ledger;
pub mod migration;
pub mod permit;
pub mod storage;
pub mod utils;
pub mod vault;
pub mod view;

pub use common_errors::*;
pub use common_events::*;

use common_constants::{DEFAULT_RESERVE_FACTOR, MARKET_STATE_VERSION, WAD};

/// Lending market over a single underlying asset.
///
/// Suppliers hold transferable shares whose value grows as borrowers pay interest. Interest is
/// accrued once per block, before anything else happens in a state-changing call.
#[multiversx_sc::contract]
pub trait Market:
    storage::Storage
    + guard::GuardModule
    + accrual::AccrualModule
    + ledger::LedgerModule
    + permit::PermitModule
    + vault::VaultModule
    + borrowing::BorrowModule
    + view::ViewModule
    + config::ConfigModule
    + migration::MigrationModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_safecast::SafeCastModule
{
    /// Sets up an empty market.
    ///
    /// `initial_exchange_rate` (WAD) prices the first shares. The reserve factor starts at 20%
    /// and the supply cap is unlimited.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        manager: ManagedAddress,
        interest_rate_model: ManagedAddress,
        signature_verifier: ManagedAddress,
        name: ManagedBuffer,
        symbol: ManagedBuffer,
        decimals: u8,
        initial_exchange_rate: BigUint,
        chain_id: ManagedBuffer,
    ) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        require!(
            !manager.is_zero() && !interest_rate_model.is_zero() && !signature_verifier.is_zero(),
            ERROR_ZERO_ADDRESS_NOT_ALLOWED
        );
        require!(initial_exchange_rate > 0, ERROR_ZERO_AMOUNT_NOT_ALLOWED);

        self.asset().set(asset);
        self.manager().set(manager);
        self.interest_rate_model().set(interest_rate_model);
        self.signature_verifier().set(signature_verifier);
        self.name().set(name);
        self.symbol().set(symbol);
        self.decimals().set(decimals);
        self.initial_exchange_rate().set(initial_exchange_rate);
        self.chain_id().set(chain_id);

        self.market_state().set(common_structs::MarketState::new(
            DEFAULT_RESERVE_FACTOR,
            self.blockchain().get_block_nonce(),
            WAD,
            self.max_uint256(),
        ));
        self.state_version().set(MARKET_STATE_VERSION);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.migrate_state();
    }
}
