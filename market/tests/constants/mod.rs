use multiversx_sc::types::{BigUint, TestAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const WAD: u128 = 1_000_000_000_000_000_000;

// 100 blocks per year keeps per-block rates round.
pub const BLOCKS_PER_YEAR: u64 = 100;
pub const START_NONCE: u64 = 10;
pub const START_TIMESTAMP: u64 = 1_000;

pub const BASE_RATE_PER_YEAR: u128 = WAD * 2 / 100; // 2%
pub const MULTIPLIER_PER_YEAR: u128 = WAD / 10; // 10%
pub const JUMP_MULTIPLIER_PER_YEAR: u128 = WAD * 15 / 100; // 15%
pub const KINK: u64 = 800_000_000_000_000_000; // 80%

pub const INITIAL_EXCHANGE_RATE: u128 = WAD;
pub const DEFAULT_RESERVE_FACTOR: u64 = 200_000_000_000_000_000; // 20%

pub const UNDERLYING_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XOXNO-abcdef");
pub const SHARE_NAME: &[u8] = b"Interest WEGLD";
pub const SHARE_SYMBOL: &[u8] = b"iWEGLD";
pub const SHARE_DECIMALS: u8 = 18;
pub const CHAIN_ID: &[u8] = b"D";

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const SPENDER_ADDRESS: TestAddress = TestAddress::new("spender");
pub const RECIPIENT_ADDRESS: TestAddress = TestAddress::new("recipient");

pub const MARKET_PATH: MxscPath = MxscPath::new("output/market.mxsc.json");
pub const INTEREST_RATE_MODEL_PATH: MxscPath =
    MxscPath::new("../interest_rate_model/output/interest_rate_model.mxsc.json");
pub const MANAGER_MOCK_PATH: MxscPath =
    MxscPath::new("../manager_mock/output/manager-mock.mxsc.json");
pub const SIGNER_MOCK_PATH: MxscPath = MxscPath::new("../signer_mock/output/signer-mock.mxsc.json");
pub const RECEIVER_MOCK_PATH: MxscPath =
    MxscPath::new("../receiver_mock/output/receiver-mock.mxsc.json");

/// `amount` whole tokens in 18-decimal units.
pub fn wad(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(WAD)
}

/// `numerator / denominator` whole tokens in 18-decimal units.
pub fn wad_fraction(numerator: u64, denominator: u64) -> BigUint<StaticApi> {
    wad(numerator) / BigUint::from(denominator)
}
