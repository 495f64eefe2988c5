use anchor_lang::prelude::*;
use primitive_types::U256;

use super::{decay_down, growth_down, require_nonzero, Reserves, MAX_WEIGHT};
use crate::error::ErrorCode;
use crate::math::Math;

/// Smart tokens issued for depositing `amount` of a reserve with the given weight:
/// `supply * ((1 + amount / balance) ^ (weight / MAX_WEIGHT) - 1)`.
pub fn purchase_return(supply: U256, balance: U256, weight: u32, amount: U256) -> Result<U256> {
    require_nonzero(supply, balance)?;
    Reserves::One.validate(weight)?;

    if amount.is_zero() {
        return Ok(U256::zero());
    }

    if weight == MAX_WEIGHT {
        return Math::div(Math::mul(supply, amount)?, balance);
    }

    growth_down(supply, Math::add(balance, amount)?, balance, weight, MAX_WEIGHT)
}

/// Reserve tokens paid out for selling `amount` smart tokens back:
/// `balance * (1 - (1 - amount / supply) ^ (MAX_WEIGHT / weight))`.
pub fn sale_return(supply: U256, balance: U256, weight: u32, amount: U256) -> Result<U256> {
    require_nonzero(supply, balance)?;
    Reserves::One.validate(weight)?;
    require!(amount <= supply, ErrorCode::InvalidInput);

    if amount.is_zero() {
        return Ok(U256::zero());
    }

    // selling the entire supply drains the reserve
    if amount == supply {
        return Ok(balance);
    }

    if weight == MAX_WEIGHT {
        return Math::div(Math::mul(balance, amount)?, supply);
    }

    decay_down(balance, supply, supply - amount, MAX_WEIGHT, weight)
}

/// Target reserve tokens received for depositing `amount` into the source reserve of the same converter:
/// `target_balance * (1 - (source_balance / (source_balance + amount)) ^ (source_weight / target_weight))`.
pub fn cross_reserve_return(
    source_balance: U256,
    source_weight: u32,
    target_balance: U256,
    target_weight: u32,
    amount: U256,
) -> Result<U256> {
    require_nonzero(source_balance, target_balance)?;
    Reserves::One.validate(source_weight)?;
    Reserves::One.validate(target_weight)?;

    if amount.is_zero() {
        return Ok(U256::zero());
    }

    let new_source_balance = Math::add(source_balance, amount)?;
    if source_weight == target_weight {
        return Math::div(Math::mul(target_balance, amount)?, new_source_balance);
    }

    decay_down(target_balance, new_source_balance, source_balance, source_weight, target_weight)
}
