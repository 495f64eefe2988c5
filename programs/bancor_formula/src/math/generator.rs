// SPDX-License-Identifier: MIT

//! Rebuilds the constant tables in `tables.rs` from first principles.
//! Only compiled for tests or with the `table-gen` feature; nothing on chain depends on it.

use anchor_lang::prelude::*;
use primitive_types::U256;

use super::lambert::LambertMath;
use super::logexpmath::{LogExpMath, MAX_PRECISION, MIN_PRECISION};
use super::math::Math;
use super::tables::{LAMBERT_LOOKUP_MAX, NUM_OF_EXP_COEFFICIENTS, NUM_OF_LAMBERT_COEFFICIENTS};
use crate::error::ErrorCode;

/// `34! / k!` for every k, built from the tail: the last entry is 34 and each step multiplies by k + 1.
pub fn exp_coefficients() -> Result<Vec<U256>> {
    let mut coefficients = vec![U256::from(NUM_OF_EXP_COEFFICIENTS); NUM_OF_EXP_COEFFICIENTS];
    for k in (0..NUM_OF_EXP_COEFFICIENTS - 1).rev() {
        coefficients[k] = Math::mul(coefficients[k + 1], U256::from(k + 1))?;
    }
    Ok(coefficients)
}

/// Largest x for which the raw series at `precision` stays inside 256 bits.
fn max_series_input(precision: u8) -> U256 {
    // exp_series(0) always succeeds, exp_series(U256::MAX) never does
    let mut lo = U256::zero();
    let mut hi = U256::MAX;
    while lo + U256::one() < hi {
        let mid = lo + ((hi - lo) >> 1usize);
        if LogExpMath::exp_series(mid, precision).is_ok() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

pub fn max_exp_array() -> Result<Vec<U256>> {
    (MIN_PRECISION..=MAX_PRECISION)
        .map(|precision| Math::shl(max_series_input(precision), (MAX_PRECISION - precision) as u32))
        .collect()
}

/// Renders the table body in the layout `tables.rs` uses, one entry per line.
pub fn render_max_exp_array() -> Result<String> {
    let mut out = String::new();
    for (precision, value) in (MIN_PRECISION..=MAX_PRECISION).zip(max_exp_array()?) {
        out.push_str(&format!(
            "    U256([0x{:016x}, 0x{:016x}, 0x{:016x}, 0x{:016x}]), // {:3}: 0x{:x}\n",
            value.0[0], value.0[1], value.0[2], value.0[3], precision, value
        ));
    }
    Ok(out)
}

/// `34! * n^(n-1) / n!` for n = 1..=34, built as `(34! / n!) * n^(n-1)`.
pub fn lambert_coefficients() -> Result<Vec<U256>> {
    let count = NUM_OF_LAMBERT_COEFFICIENTS;
    let mut factorial_ratio = U256::one();
    let mut coefficients = vec![U256::zero(); count];
    for n in (1..=count).rev() {
        let power = U256::from(n)
            .checked_pow(U256::from(n - 1))
            .ok_or(ErrorCode::Overflow)?;
        coefficients[n - 1] = Math::mul(factorial_ratio, power)?;
        factorial_ratio = Math::mul(factorial_ratio, U256::from(n))?;
    }
    Ok(coefficients)
}

/// Largest x for which the asymptotic expansion of W(x) / x stays inside 256 bits.
pub fn lambert_asymptotic_max() -> U256 {
    // the expansion is only used past the lookup table
    let mut lo = LAMBERT_LOOKUP_MAX + U256::one();
    let mut hi = U256::MAX;
    while lo + U256::one() < hi {
        let mid = lo + ((hi - lo) >> 1usize);
        if LambertMath::positive_asymptotic(mid).is_ok() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
