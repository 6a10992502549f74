#![no_std]

use common_errors::{ERROR_ARITHMETIC_OVERFLOW, ERROR_INVALID_CAST};

multiversx_sc::imports!();

const U64_BYTES: usize = 8;
const U128_BYTES: usize = 16;
const INT256_BYTES: usize = 32;

/// Checked conversions between the unbounded managed integers and the narrower fields
/// persisted in storage.
#[multiversx_sc::module]
pub trait SafeCastModule {
    fn narrow_to_u128(&self, value: &BigUint) -> u128 {
        let mut word = [0u8; U128_BYTES];
        self.copy_big_endian(value, &mut word);

        u128::from_be_bytes(word)
    }

    fn narrow_to_u64(&self, value: &BigUint) -> u64 {
        let mut word = [0u8; U64_BYTES];
        self.copy_big_endian(value, &mut word);

        u64::from_be_bytes(word)
    }

    /// Writes the minimal big-endian bytes of `value` right-aligned into `word`.
    fn copy_big_endian(&self, value: &BigUint, word: &mut [u8]) {
        let bytes = value.to_bytes_be_buffer();
        let len = bytes.len();
        require!(len <= word.len(), ERROR_ARITHMETIC_OVERFLOW);

        let start = word.len() - len;
        require!(
            bytes.load_slice(0, &mut word[start..]).is_ok(),
            ERROR_ARITHMETIC_OVERFLOW
        );
    }

    /// Fails on negative inputs and on magnitudes that a signed 256-bit integer could not hold.
    fn to_unsigned(&self, value: &BigInt) -> BigUint {
        require!(value.sign() != Sign::Minus, ERROR_INVALID_CAST);

        let magnitude = value.magnitude();
        let mut max_int256 = [0xffu8; INT256_BYTES];
        max_int256[0] = 0x7f;
        require!(
            magnitude <= BigUint::from_bytes_be(&max_int256),
            ERROR_INVALID_CAST
        );

        magnitude
    }
}
