// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::ErrorCode;

/**
 * @dev Checked arithmetic over the 256-bit unsigned domain, mirroring how the EVM formula reverts.
 * Nothing here wraps: a result that does not fit in 256 bits (or would be negative) is an error.
 */
pub struct Math;

impl Math {
    /**
     * @dev Returns the addition of two unsigned integers of 256 bits, reverting on overflow.
     */
    pub fn add(a: U256, b: U256) -> Result<U256> {
        Ok(a.checked_add(b).ok_or(ErrorCode::Overflow)?)
    }

    /**
     * @dev Returns the subtraction of two unsigned integers of 256 bits, reverting on underflow.
     */
    pub fn sub(a: U256, b: U256) -> Result<U256> {
        Ok(a.checked_sub(b).ok_or(ErrorCode::Underflow)?)
    }

    pub fn mul(a: U256, b: U256) -> Result<U256> {
        Ok(a.checked_mul(b).ok_or(ErrorCode::Overflow)?)
    }

    pub fn div(a: U256, b: U256) -> Result<U256> {
        require!(!b.is_zero(), ErrorCode::DivideByZero);
        Ok(a / b)
    }

    pub fn div_up(a: U256, b: U256) -> Result<U256> {
        require!(!b.is_zero(), ErrorCode::DivideByZero);

        // Equivalent to:
        // result = a == 0 ? 0 : 1 + (a - 1) / b;
        if a.is_zero() {
            Ok(U256::zero())
        } else {
            Self::add((a - U256::one()) / b, U256::one())
        }
    }

    /**
     * @dev Returns `a << shift`, reverting if any set bit would be shifted out of the 256-bit word.
     */
    pub fn shl(a: U256, shift: u32) -> Result<U256> {
        if a.is_zero() {
            return Ok(a);
        }
        require!(a.bits() + shift as usize <= 256, ErrorCode::Overflow);
        Ok(a << shift as usize)
    }
}
