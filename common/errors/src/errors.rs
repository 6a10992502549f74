#![no_std]

// Arithmetic

pub static ERROR_ARITHMETIC_OVERFLOW: &[u8] = b"Arithmetic overflow.";

pub static ERROR_DIVIDE_BY_ZERO: &[u8] = b"Division by zero.";

pub static ERROR_INVALID_CAST: &[u8] = b"Invalid cast of a negative value.";

// Authorization

pub static ERROR_TRANSFER_NOT_ALLOWED: &[u8] = b"Transfer not allowed.";

pub static ERROR_DEPOSIT_NOT_ALLOWED: &[u8] = b"Deposit not allowed.";

pub static ERROR_BORROW_NOT_ALLOWED: &[u8] = b"Borrow not allowed.";

pub static ERROR_PERMIT_EXPIRED: &[u8] = b"Permit expired.";

pub static ERROR_INVALID_SIGNATURE: &[u8] = b"Invalid signature.";

// Consistency

pub static ERROR_REENTRANCY_DETECTED: &[u8] = b"Reentrancy detected.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient balance.";

pub static ERROR_INSUFFICIENT_ALLOWANCE: &[u8] = b"Insufficient allowance.";

pub static ERROR_INSUFFICIENT_CASH: &[u8] = b"Insufficient cash in the market.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the required assets.";

pub static ERROR_SUPPLY_CAP_EXCEEDED: &[u8] = b"Supply cap exceeded.";

pub static ERROR_NOTHING_TO_REPAY: &[u8] = b"Nothing to repay.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Reserve factor can not exceed 100%.";

pub static ERROR_UNSUPPORTED_STATE_VERSION: &[u8] = b"Unsupported market state version.";

// Rate model

pub static ERROR_INVALID_KINK: &[u8] = b"Kink can not exceed 100%.";

pub static ERROR_INTEREST_RATE_VARS_NOT_SET: &[u8] = b"Interest rate vars not set for asset.";

// Oracle

pub static ERROR_ZERO_ADDRESS_NOT_ALLOWED: &[u8] = b"Zero address not allowed.";

pub static ERROR_ZERO_AMOUNT_NOT_ALLOWED: &[u8] = b"Zero amount not allowed.";

pub static ERROR_PRICE_FEED_NOT_FOUND: &[u8] = b"Price feed not found.";

pub static ERROR_INVALID_PRICE_FEED_ANSWER: &[u8] = b"Invalid price feed answer.";

pub static ERROR_POOL_INVARIANT_NOT_RECORDED: &[u8] = b"Pool has no recorded invariant.";
