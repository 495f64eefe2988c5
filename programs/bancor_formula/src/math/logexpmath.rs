// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::U256;
use static_assertions::const_assert;

use super::math::Math;
use super::tables::{EXP_COEFFICIENTS, MAX_EXP_ARRAY};
use crate::error::ErrorCode;

/**
 * @dev Binary fixed point logarithm and exponentiation over U256.
 *
 * A value `v` at precision `p` is stored as `v * 2^p`. Every function rounds toward zero, so `ln`, `fixed_exp` and
 * `power` never return more than the exact real result.
 */
pub struct LogExpMath;

// Precision range served by the exponentiation table.
pub const MIN_PRECISION: u8 = 32;
pub const MAX_PRECISION: u8 = 127;

// FIXED_1 = 2^127, the value 1 at MAX_PRECISION
pub const FIXED_1: U256 = U256([0, 0x8000000000000000, 0, 0]);
// FIXED_2 = 2^128, the value 2 at MAX_PRECISION
pub const FIXED_2: U256 = U256([0, 0, 1, 0]);
// MAX_NUM = 2^129 - 1, the largest numerator `ln` accepts: `numerator << MAX_PRECISION` must still fit in 256 bits
pub const MAX_NUM: U256 = U256([0xffffffffffffffff, 0xffffffffffffffff, 0x1, 0]);

// ln(2) = LN2_MANTISSA / 2^LN2_EXPONENT, rounded down
pub const LN2_MANTISSA: U256 = U256([0xaf278ece600fcbda, 0x02c5c85fdf473de6, 0, 0]);
pub const LN2_EXPONENT: u32 = 122;

// Squaring a value below 2^(MAX_PRECISION + 1) has to stay inside the word.
const_assert!(MIN_PRECISION <= MAX_PRECISION);
const_assert!(2 * (MAX_PRECISION as u32 + 1) <= 256);

impl LogExpMath {
    fn check_precision(precision: u8) -> Result<()> {
        require!(
            (MIN_PRECISION..=MAX_PRECISION).contains(&precision),
            ErrorCode::OutOfDomain
        );
        Ok(())
    }

    fn max_exp_at(precision: u8) -> U256 {
        MAX_EXP_ARRAY[(precision - MIN_PRECISION) as usize]
    }

    /**
     * @dev Largest `fixed_exp` input at MAX_PRECISION scale for which evaluating at `precision` cannot overflow.
     * The input accepted by `fixed_exp(x, precision)` is this value shifted right by `MAX_PRECISION - precision`.
     */
    pub fn max_exp(precision: u8) -> Result<U256> {
        Self::check_precision(precision)?;
        Ok(Self::max_exp_at(precision))
    }

    /**
     * @dev Position of the most significant set bit of `n`, i.e. floor(log2(n)). Reverts for zero.
     */
    pub fn floor_log2(n: U256) -> Result<u32> {
        require!(!n.is_zero(), ErrorCode::OutOfDomain);
        Ok(n.bits() as u32 - 1)
    }

    /**
     * @dev Computes log2(x / 2^precision) * 2^precision, rounded down. Requires x >= 2^precision.
     *
     * The integer part comes straight from the bit length. The fraction is built one bit at a time by squaring:
     * while 1 <= x < 2, log2(x^2) = 2 * log2(x), so each squaring that lands at or above 2 contributes the next bit.
     */
    pub fn fixed_log2(x: U256, precision: u8) -> Result<U256> {
        Self::check_precision(precision)?;
        let shift = precision as usize;
        let one = U256::one() << shift;
        let two = one << 1usize;
        require!(x >= one, ErrorCode::OutOfDomain);

        let mut x = x;
        let mut res = U256::zero();

        if x >= two {
            let count = Self::floor_log2(x >> shift)?;
            x = x >> count as usize;
            res = U256::from(count) << shift;
        }

        if x > one {
            for i in (0..shift).rev() {
                // 1 < x < 2, so x^2 < 2^(2 * precision + 2)
                x = Math::mul(x, x)? >> shift;
                if x >= two {
                    x = x >> 1usize;
                    res = Math::add(res, U256::one() << i)?;
                }
            }
        }

        Ok(res)
    }

    /**
     * @dev Natural logarithm at the same scale: fixed_log2(x) * ln(2), rounded down.
     */
    pub fn fixed_loge(x: U256, precision: u8) -> Result<U256> {
        let log2 = Self::fixed_log2(x, precision)?;
        Ok(Math::mul(log2, LN2_MANTISSA)? >> LN2_EXPONENT as usize)
    }

    /**
     * @dev ln(numerator / denominator) * 2^precision, rounded down.
     *
     * Requires 0 < denominator <= numerator < 2^(256 - precision), so the ratio is at least one and can be scaled
     * up without losing bits.
     */
    pub fn ln_with_precision(numerator: U256, denominator: U256, precision: u8) -> Result<U256> {
        Self::check_precision(precision)?;
        let limit = U256::one() << (256 - precision as usize);
        require!(!denominator.is_zero(), ErrorCode::OutOfDomain);
        require!(denominator <= numerator, ErrorCode::OutOfDomain);
        require!(numerator < limit, ErrorCode::OutOfDomain);

        let scaled = Math::div(Math::shl(numerator, precision as u32)?, denominator)?;
        Self::fixed_loge(scaled, precision)
    }

    /**
     * @dev ln(numerator / denominator) * 2^127. The numerator may not exceed MAX_NUM.
     */
    pub fn ln(numerator: U256, denominator: U256) -> Result<U256> {
        Self::ln_with_precision(numerator, denominator, MAX_PRECISION)
    }

    /**
     * @dev Computes e^(x / 2^precision) * 2^precision, rounded down.
     *
     * Reverts unless x <= max_exp(precision) >> (MAX_PRECISION - precision). The bound is checked before any
     * arithmetic so the caller learns about the overflow without paying for the series.
     */
    pub fn fixed_exp(x: U256, precision: u8) -> Result<U256> {
        Self::check_precision(precision)?;
        let bound = Self::max_exp_at(precision) >> (MAX_PRECISION - precision) as usize;
        require!(x <= bound, ErrorCode::Overflow);
        Self::exp_series(x, precision)
    }

    /**
     * @dev The raw Maclaurin evaluation behind `fixed_exp`, without the table bound.
     *
     * res = 34! * 2^precision + sum over k in 1..34 of (x^k / 2^(precision * (k - 1))) * 34! / k!, then / 34!.
     * Every power of x is truncated to `precision` fractional bits before it is weighted.
     */
    pub(crate) fn exp_series(x: U256, precision: u8) -> Result<U256> {
        let shift = precision as usize;
        let mut xi = x;
        let mut res = Math::shl(EXP_COEFFICIENTS[0], precision as u32)?;

        for (k, coefficient) in EXP_COEFFICIENTS.iter().enumerate().skip(1) {
            if k > 1 {
                xi = Math::mul(xi, x)? >> shift;
            }
            res = Math::add(res, Math::mul(xi, *coefficient)?)?;
        }

        Math::div(res, EXP_COEFFICIENTS[0])
    }

    /**
     * @dev Highest precision whose table entry still covers `x`, where `x` is a MAX_PRECISION scaled exponent.
     * The table decreases strictly with precision, so a binary search over [MIN_PRECISION, MAX_PRECISION] finds it.
     */
    pub fn find_position_in_max_exp_array(x: U256) -> Result<u8> {
        let mut lo = MIN_PRECISION;
        let mut hi = MAX_PRECISION;

        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if Self::max_exp_at(mid) >= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        if Self::max_exp_at(hi) >= x {
            return Ok(hi);
        }
        require!(Self::max_exp_at(lo) >= x, ErrorCode::Overflow);
        Ok(lo)
    }

    /**
     * @dev (base_n / base_d) ^ (exp_n / exp_d), returned as `(result, precision)` with the value being
     * result / 2^precision. The precision is the highest one at which the exponentiation does not overflow.
     *
     * Requires base_d <= base_n <= MAX_NUM, so the base is at least one and the result is at least 2^precision.
     */
    pub fn power(base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Result<(U256, u8)> {
        let base_log = Self::ln(base_n, base_d)?;
        let base_log_times_exp = Math::div(
            Math::mul(base_log, U256::from(exp_n))?,
            U256::from(exp_d),
        )?;

        let precision = Self::find_position_in_max_exp_array(base_log_times_exp)?;
        let result = Self::fixed_exp(
            base_log_times_exp >> (MAX_PRECISION - precision) as usize,
            precision,
        )?;
        Ok((result, precision))
    }
}
