#![no_std]

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// RAY / WAD
pub const WAD_RAY_RATIO: u128 = 1_000_000_000;

/// Bytes of the working width; every fixed-point result must fit in 256 bits.
pub const WORKING_WIDTH_BYTES: usize = 32;

/// 20% of accrued interest is retained as protocol reserves unless configured otherwise.
pub const DEFAULT_RESERVE_FACTOR: u64 = 200_000_000_000_000_000;

/// Upper bound for the reserve factor (100%).
pub const MAX_RESERVE_FACTOR: u64 = WAD as u64;

/// Upper bound for the kink utilization (100%).
pub const MAX_KINK: u64 = WAD as u64;

pub const MARKET_STATE_VERSION: u32 = 2;
pub const LEGACY_MARKET_STATE_VERSION: u32 = 1;

pub const PERMIT_VERSION: &[u8] = b"1";
pub const PERMIT_DIGEST_PREFIX: &[u8] = &[0x19, 0x01];
pub const DOMAIN_TYPE: &[u8] =
    b"Domain(string name,string version,bytes chainId,address verifyingContract)";
pub const PERMIT_TYPE: &[u8] =
    b"Permit(address owner,address spender,uint256 value,uint64 nonce,uint64 deadline)";

/// secp256k1 curve order divided by two; signatures with a higher `s` are malleable.
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];
pub const SIGNATURE_V_LOW: u8 = 27;
pub const SIGNATURE_V_HIGH: u8 = 28;
