#![no_std]

use core::cmp::Ordering;

use common_constants::{RAY, WAD, WAD_PRECISION, WAD_RAY_RATIO, WORKING_WIDTH_BYTES};
use common_errors::{ERROR_ARITHMETIC_OVERFLOW, ERROR_DIVIDE_BY_ZERO};

multiversx_sc::imports!();

/// Fixed-point arithmetic over the WAD (1e18) and RAY (1e27) scales.
///
/// Values are plain `BigUint` integers carrying an implicit denominator. Products are always
/// formed before the scale division, so no precision is lost to an early truncation, and every
/// intermediate is held to the 256-bit working width shared with the rest of the protocol.
/// All divisions truncate toward zero.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `a * b / 1e18`, truncated.
    fn wad_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.scaled_mul(a, b, &BigUint::from(WAD))
    }

    /// `a * 1e18 / b`, truncated.
    fn wad_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.scaled_div(a, b, &BigUint::from(WAD))
    }

    /// `a * b / 1e27`, truncated.
    fn ray_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.scaled_mul(a, b, &BigUint::from(RAY))
    }

    /// `a * 1e27 / b`, truncated.
    fn ray_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.scaled_div(a, b, &BigUint::from(RAY))
    }

    fn scaled_mul(&self, a: &BigUint, b: &BigUint, scale: &BigUint) -> BigUint {
        let product = a * b;
        self.require_within_width(&product);

        product / scale
    }

    fn scaled_div(&self, a: &BigUint, b: &BigUint, scale: &BigUint) -> BigUint {
        require!(*b != BigUint::zero(), ERROR_DIVIDE_BY_ZERO);

        let numerator = a * scale;
        self.require_within_width(&numerator);

        numerator / b
    }

    /// Computes `floor(a * b / denominator)`.
    ///
    /// The product is kept at full precision before dividing, so `a * b` may exceed the working
    /// width as long as the quotient fits in it.
    fn mul_div(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(*denominator != BigUint::zero(), ERROR_DIVIDE_BY_ZERO);

        let result = a * b / denominator;
        self.require_within_width(&result);

        result
    }

    /// Rescales an amount expressed with `decimals` fractional digits to WAD.
    ///
    /// Upscaling fails on overflow. Downscaling truncates, so amounts whose significant digits
    /// are all below WAD resolution become zero.
    fn to_wad(&self, value: &BigUint, decimals: usize) -> BigUint {
        match decimals.cmp(&WAD_PRECISION) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let factor = BigUint::from(10u64).pow((WAD_PRECISION - decimals) as u32);
                let scaled = value * &factor;
                self.require_within_width(&scaled);
                scaled
            },
            Ordering::Greater => {
                let factor = BigUint::from(10u64).pow((decimals - WAD_PRECISION) as u32);
                value / &factor
            },
        }
    }

    fn wad_to_ray(&self, value: &BigUint) -> BigUint {
        let scaled = value * &BigUint::from(WAD_RAY_RATIO);
        self.require_within_width(&scaled);

        scaled
    }

    /// Always rounds down.
    fn ray_to_wad(&self, value: &BigUint) -> BigUint {
        value / &BigUint::from(WAD_RAY_RATIO)
    }

    fn min(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a < b {
            a.clone()
        } else {
            b.clone()
        }
    }

    /// Largest integer `r` with `r * r <= value`.
    ///
    /// Newton's iteration seeded from above with `2^ceil(bits / 2)`; the sequence decreases
    /// strictly until it reaches the floor root.
    fn sqrt(&self, value: &BigUint) -> BigUint {
        let zero = BigUint::zero();
        if *value == zero {
            return zero;
        }

        let two = BigUint::from(2u64);
        let bit_length = value.to_bytes_be_buffer().len() * 8;
        let mut root = two.pow(bit_length.div_ceil(2) as u32);

        loop {
            let next = (&root + &(value / &root)) / &two;
            if next >= root {
                return root;
            }
            root = next;
        }
    }

    /// Saturating subtraction.
    fn sub_or_zero(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    /// Rounds `a * b / denominator` up instead of down.
    fn mul_div_up(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(*denominator != BigUint::zero(), ERROR_DIVIDE_BY_ZERO);

        let product = a * b;
        let mut result = &product / denominator;
        if result.clone() * denominator != product {
            result += BigUint::from(1u64);
        }
        self.require_within_width(&result);

        result
    }

    fn max_uint256(&self) -> BigUint {
        BigUint::from_bytes_be(&[0xffu8; WORKING_WIDTH_BYTES])
    }

    fn require_within_width(&self, value: &BigUint) {
        require!(
            value.to_bytes_be_buffer().len() <= WORKING_WIDTH_BYTES,
            ERROR_ARITHMETIC_OVERFLOW
        );
    }
}
