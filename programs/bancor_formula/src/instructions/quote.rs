use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::ErrorCode;

/// Formula instructions are read-only: they touch no accounts and hand their answer back as return data.
#[derive(Accounts)]
pub struct Quote {}

/// Narrows a formula result to the u64 token amount an SPL account can hold.
pub fn to_u64(value: U256) -> Result<u64> {
    require!(value.bits() <= 64, ErrorCode::Overflow);
    Ok(value.low_u64())
}
