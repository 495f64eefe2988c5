use anchor_lang::prelude::*;
use primitive_types::U256;

use super::quote::{to_u64, Quote};
use crate::curve;

/// Reserve tokens required to mint `amount` pool tokens, rounded up
pub fn fund_cost(_ctx: Context<Quote>, supply: u64, balance: u64, ratio: u32, amount: u64) -> Result<u64> {
    let result = quote_fund_cost(supply, balance, ratio, amount)?;
    msg!("fund_cost: {} for {} minted", result, amount);
    Ok(result)
}

/// Pool tokens minted for a reserve deposit of `amount`
pub fn fund_supply_amount(
    _ctx: Context<Quote>,
    supply: u64,
    balance: u64,
    ratio: u32,
    amount: u64,
) -> Result<u64> {
    let result = quote_fund_supply_amount(supply, balance, ratio, amount)?;
    msg!("fund_supply_amount: {} for {} deposited", result, amount);
    Ok(result)
}

/// Reserve tokens returned for burning `amount` pool tokens
pub fn liquidate_return(
    _ctx: Context<Quote>,
    supply: u64,
    balance: u64,
    ratio: u32,
    amount: u64,
) -> Result<u64> {
    let result = quote_liquidate_return(supply, balance, ratio, amount)?;
    msg!("liquidate_return: {} for {} burned", result, amount);
    Ok(result)
}

pub fn quote_fund_cost(supply: u64, balance: u64, ratio: u32, amount: u64) -> Result<u64> {
    to_u64(curve::fund_cost(U256::from(supply), U256::from(balance), ratio, U256::from(amount))?)
}

pub fn quote_fund_supply_amount(supply: u64, balance: u64, ratio: u32, amount: u64) -> Result<u64> {
    to_u64(curve::fund_supply_amount(U256::from(supply), U256::from(balance), ratio, U256::from(amount))?)
}

pub fn quote_liquidate_return(supply: u64, balance: u64, ratio: u32, amount: u64) -> Result<u64> {
    to_u64(curve::liquidate_return(U256::from(supply), U256::from(balance), ratio, U256::from(amount))?)
}
