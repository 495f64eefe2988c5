use anchor_lang::prelude::*;
use primitive_types::U256;

use super::{decay_down, growth_down, growth_up, require_nonzero, Reserves, MAX_WEIGHT};
use crate::error::ErrorCode;
use crate::math::Math;

// `ratio` below is the sum of the reserve weights of a two-reserve pool, in (1, 2 * MAX_WEIGHT].

/// Reserve tokens a caller has to deposit to receive `amount` new pool tokens. The final division rounds up:
/// `balance * (((supply + amount) / supply) ^ (MAX_WEIGHT / ratio) - 1)`.
pub fn fund_cost(supply: U256, balance: U256, ratio: u32, amount: U256) -> Result<U256> {
    require_nonzero(supply, balance)?;
    Reserves::Two.validate(ratio)?;

    if amount.is_zero() {
        return Ok(U256::zero());
    }

    if ratio == MAX_WEIGHT {
        return Math::div_up(Math::mul(amount, balance)?, supply);
    }

    growth_up(balance, Math::add(supply, amount)?, supply, MAX_WEIGHT, ratio)
}

/// Pool tokens issued for depositing `amount` of the reserve, the inverse of `fund_cost`:
/// `supply * ((1 + amount / balance) ^ (ratio / MAX_WEIGHT) - 1)`.
pub fn fund_supply_amount(supply: U256, balance: U256, ratio: u32, amount: U256) -> Result<U256> {
    require_nonzero(supply, balance)?;
    Reserves::Two.validate(ratio)?;

    if amount.is_zero() {
        return Ok(U256::zero());
    }

    if ratio == MAX_WEIGHT {
        return Math::div(Math::mul(amount, supply)?, balance);
    }

    growth_down(supply, Math::add(balance, amount)?, balance, ratio, MAX_WEIGHT)
}

/// Reserve tokens returned for burning `amount` pool tokens:
/// `balance * (1 - ((supply - amount) / supply) ^ (MAX_WEIGHT / ratio))`.
pub fn liquidate_return(supply: U256, balance: U256, ratio: u32, amount: U256) -> Result<U256> {
    require_nonzero(supply, balance)?;
    Reserves::Two.validate(ratio)?;
    require!(amount <= supply, ErrorCode::InvalidInput);

    if amount.is_zero() {
        return Ok(U256::zero());
    }

    if amount == supply {
        return Ok(balance);
    }

    if ratio == MAX_WEIGHT {
        return Math::div(Math::mul(amount, balance)?, supply);
    }

    decay_down(balance, supply, supply - amount, MAX_WEIGHT, ratio)
}
