use anchor_lang::prelude::*;
use primitive_types::U256;

use super::quote::{to_u64, Quote};
use crate::curve;

/// Smart tokens issued for a reserve deposit
pub fn purchase_return(
    _ctx: Context<Quote>,
    supply: u64,
    balance: u64,
    weight: u32,
    amount: u64,
) -> Result<u64> {
    let result = quote_purchase_return(supply, balance, weight, amount)?;
    msg!("purchase_return: {} for {} deposited", result, amount);
    Ok(result)
}

/// Reserve tokens paid out for selling smart tokens
pub fn sale_return(
    _ctx: Context<Quote>,
    supply: u64,
    balance: u64,
    weight: u32,
    amount: u64,
) -> Result<u64> {
    let result = quote_sale_return(supply, balance, weight, amount)?;
    msg!("sale_return: {} for {} sold", result, amount);
    Ok(result)
}

/// Target reserve tokens received for a source reserve deposit
pub fn cross_reserve_return(
    _ctx: Context<Quote>,
    source_balance: u64,
    source_weight: u32,
    target_balance: u64,
    target_weight: u32,
    amount: u64,
) -> Result<u64> {
    let result = quote_cross_reserve_return(source_balance, source_weight, target_balance, target_weight, amount)?;
    msg!("cross_reserve_return: {} for {} deposited", result, amount);
    Ok(result)
}

pub fn quote_purchase_return(supply: u64, balance: u64, weight: u32, amount: u64) -> Result<u64> {
    to_u64(curve::purchase_return(
        U256::from(supply),
        U256::from(balance),
        weight,
        U256::from(amount),
    )?)
}

pub fn quote_sale_return(supply: u64, balance: u64, weight: u32, amount: u64) -> Result<u64> {
    to_u64(curve::sale_return(
        U256::from(supply),
        U256::from(balance),
        weight,
        U256::from(amount),
    )?)
}

pub fn quote_cross_reserve_return(
    source_balance: u64,
    source_weight: u32,
    target_balance: u64,
    target_weight: u32,
    amount: u64,
) -> Result<u64> {
    to_u64(curve::cross_reserve_return(
        U256::from(source_balance),
        source_weight,
        U256::from(target_balance),
        target_weight,
        U256::from(amount),
    )?)
}
