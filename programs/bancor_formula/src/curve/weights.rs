use std::cmp::Ordering;

use anchor_lang::prelude::*;
use primitive_types::U256;

use super::MAX_WEIGHT;
use crate::error::ErrorCode;
use crate::math::{LambertMath, LogExpMath, Math, FIXED_1, MAX_PRECISION};

/// Largest magnitude that can still be multiplied by MAX_WEIGHT without leaving 256 bits.
pub const MAX_UNF_WEIGHT: U256 = U256([
    0x834d26fa3fcc9ea9,
    0x3621fafc8b0079a2,
    0x8d36b4c7f3493858,
    0x000010c6f7a0b5ed,
]);

/// Maps two magnitudes onto a pair of weights proportional to them and summing to MAX_WEIGHT.
pub fn normalized_weights(a: U256, b: U256) -> Result<(u32, u32)> {
    if a <= b {
        return accurate_weights(a, b);
    }
    let (y, x) = accurate_weights(b, a)?;
    Ok((x, y))
}

/// Same as `normalized_weights` for `a <= b`: `a` is rounded half up and `b` takes the remainder.
pub fn accurate_weights(a: U256, b: U256) -> Result<(u32, u32)> {
    let (mut a, mut b) = (a, b);
    if a > MAX_UNF_WEIGHT {
        let c = Math::add(a / Math::add(MAX_UNF_WEIGHT, U256::one())?, U256::one())?;
        a = a / c;
        b = b / c;
    }

    let weight = U256::from(MAX_WEIGHT);
    let x = round_div(Math::mul(a, weight)?, Math::add(a, b)?)?;
    let y = Math::sub(weight, x)?;
    // both are at most MAX_WEIGHT here
    Ok((x.low_u32(), y.low_u32()))
}

/// `n / d` rounded half up, without computing `n + d / 2`.
pub fn round_div(n: U256, d: U256) -> Result<U256> {
    require!(!d.is_zero(), ErrorCode::DivideByZero);
    let half_up = d - (d >> 1usize);
    Ok(n / d + (n % d) / half_up)
}

// 2^120. ln(hi / lo) stays below 2^134 at MAX_PRECISION, so scaling it by a factor up to this bound fits.
const MAX_FACTOR: U256 = U256([0, 0x0100000000000000, 0, 0]);

/**
 * Weights for a two-reserve pool whose primary reserve is to move from `primary_balance` to
 * `primary_staked` through a cross-reserve conversion, chosen so that after the move the pool quotes
 * `rate_n / rate_d` secondary units per primary unit.
 *
 * With t, s, r the staked, primary and secondary balances and q / p the rate, the weight ratio is
 * W(x * t*q / (r*p)) / x for x = ln(s / t), where W is the Lambert W function.
 */
pub fn balanced_weights(
    primary_staked: U256,
    primary_balance: U256,
    secondary_balance: U256,
    rate_n: U256,
    rate_d: U256,
) -> Result<(u32, u32)> {
    if primary_staked == primary_balance {
        require!(
            !primary_staked.is_zero() || !secondary_balance.is_zero(),
            ErrorCode::InvalidInput
        );
    } else {
        require!(
            !primary_staked.is_zero() && !primary_balance.is_zero() && !secondary_balance.is_zero(),
            ErrorCode::InvalidInput
        );
    }
    require!(!rate_n.is_zero() && !rate_d.is_zero(), ErrorCode::InvalidInput);

    let tq = Math::mul(primary_staked, rate_n)?;
    let rp = Math::mul(secondary_balance, rate_d)?;

    match primary_staked.cmp(&primary_balance) {
        Ordering::Less => weights_by_stake(primary_balance, primary_staked, tq, rp, LambertMath::positive_ratio),
        Ordering::Greater => weights_by_stake(primary_staked, primary_balance, tq, rp, LambertMath::negative_ratio),
        Ordering::Equal => normalized_weights(tq, rp),
    }
}

// `ratio` is W(z) / z for z = ln(hi / lo) * tq / rp, with the sign of z carried by the choice of function
fn weights_by_stake(
    hi: U256,
    lo: U256,
    tq: U256,
    rp: U256,
    ratio: fn(U256) -> Result<U256>,
) -> Result<(u32, u32)> {
    let (tq, rp) = safe_factors(tq, rp)?;
    let f = Math::div(Math::mul(hi, FIXED_1)?, lo)?;
    let g = LogExpMath::fixed_loge(f, MAX_PRECISION)?;
    let x = Math::div(Math::mul(g, tq)?, rp)?;
    let y = ratio(x)?;
    normalized_weights(Math::mul(y, tq)?, Math::mul(rp, FIXED_1)?)
}

/// Scales `a` and `b` down to at most MAX_FACTOR, keeping their ratio.
fn safe_factors(a: U256, b: U256) -> Result<(U256, U256)> {
    if a <= MAX_FACTOR && b <= MAX_FACTOR {
        return Ok((a, b));
    }
    if a < MAX_FACTOR {
        return Ok((Math::div(Math::mul(a, MAX_FACTOR)?, b)?, MAX_FACTOR));
    }
    if b < MAX_FACTOR {
        return Ok((MAX_FACTOR, Math::div(Math::mul(b, MAX_FACTOR)?, a)?));
    }
    let shift = LogExpMath::floor_log2(a.max(b) / (MAX_FACTOR >> 1usize))? as usize;
    Ok((a >> shift, b >> shift))
}
