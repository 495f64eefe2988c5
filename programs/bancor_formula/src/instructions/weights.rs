use anchor_lang::prelude::*;
use primitive_types::U256;

use super::quote::Quote;
use crate::curve;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightsOutput {
    pub a: u32,
    pub b: u32,
}

/// Splits MAX_WEIGHT between two reserves in proportion to `a` and `b`
pub fn normalized_weights(_ctx: Context<Quote>, a: u128, b: u128) -> Result<WeightsOutput> {
    let output = quote_normalized_weights(a, b)?;
    msg!("normalized_weights: {}/{}", output.a, output.b);
    Ok(output)
}

/// Primary and secondary weights that restore the reserve rate once the primary reserve is back at its staked balance
pub fn balanced_weights(
    _ctx: Context<Quote>,
    primary_staked: u128,
    primary_balance: u128,
    secondary_balance: u128,
    rate_n: u128,
    rate_d: u128,
) -> Result<WeightsOutput> {
    let output = quote_balanced_weights(primary_staked, primary_balance, secondary_balance, rate_n, rate_d)?;
    msg!("balanced_weights: {}/{}", output.a, output.b);
    Ok(output)
}

pub fn quote_normalized_weights(a: u128, b: u128) -> Result<WeightsOutput> {
    let (a, b) = curve::normalized_weights(U256::from(a), U256::from(b))?;
    Ok(WeightsOutput { a, b })
}

pub fn quote_balanced_weights(
    primary_staked: u128,
    primary_balance: u128,
    secondary_balance: u128,
    rate_n: u128,
    rate_d: u128,
) -> Result<WeightsOutput> {
    let (a, b) = curve::balanced_weights(
        U256::from(primary_staked),
        U256::from(primary_balance),
        U256::from(secondary_balance),
        U256::from(rate_n),
        U256::from(rate_d),
    )?;
    Ok(WeightsOutput { a, b })
}
