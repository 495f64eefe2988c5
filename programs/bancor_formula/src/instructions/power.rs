use anchor_lang::prelude::*;
use primitive_types::U256;

use super::quote::Quote;
use crate::math::LogExpMath;

/// `result / 2^precision`, with `result` as little-endian 64-bit limbs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerOutput {
    pub result: [u64; 4],
    pub precision: u8,
}

/// (base_n / base_d) ^ (exp_n / exp_d) at the highest precision that does not overflow
pub fn power(_ctx: Context<Quote>, base_n: u128, base_d: u128, exp_n: u32, exp_d: u32) -> Result<PowerOutput> {
    let output = quote_power(base_n, base_d, exp_n, exp_d)?;
    msg!("power: {} at precision {}", U256(output.result), output.precision);
    Ok(output)
}

pub fn quote_power(base_n: u128, base_d: u128, exp_n: u32, exp_d: u32) -> Result<PowerOutput> {
    let (result, precision) = LogExpMath::power(U256::from(base_n), U256::from(base_d), exp_n, exp_d)?;
    Ok(PowerOutput {
        result: result.0,
        precision,
    })
}
