//! Bonding-curve conversion and liquidity formulas.
//!
//! Amounts and reserve balances are plain integers in token base units. Weights are parts per million
//! of MAX_WEIGHT. Returns never exceed the exact curve value: `power` only underestimates and the final
//! division rounds down. Costs take their final division rounded up, but the underestimate from `power`
//! can still leave them slightly below the exact value.

use anchor_lang::prelude::*;
use primitive_types::U256;
use static_assertions::const_assert;

use crate::error::ErrorCode;
use crate::math::{LogExpMath, Math};

pub mod conversion;
pub mod liquidity;
pub mod weights;
#[cfg(test)]
mod proptests;

pub use conversion::*;
pub use liquidity::*;
pub use weights::*;

/// 100% expressed in parts per million.
pub const MAX_WEIGHT: u32 = 1_000_000;

// a two-reserve ratio is the sum of two weights and must still fit in u32
const_assert!(MAX_WEIGHT as u64 * 2 <= u32::MAX as u64);

/// How many reserve weights a formula's weight argument spans.
///
/// Conversions take the weight of one reserve, in (0, MAX_WEIGHT]. Funding and liquidation take the
/// combined ratio of all reserves of a two-reserve pool, in (1, 2 * MAX_WEIGHT].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reserves {
    One,
    Two,
}

impl Reserves {
    pub fn max_weight(self) -> u32 {
        match self {
            Reserves::One => MAX_WEIGHT,
            Reserves::Two => 2 * MAX_WEIGHT,
        }
    }

    fn min_weight_exclusive(self) -> u32 {
        match self {
            Reserves::One => 0,
            Reserves::Two => 1,
        }
    }

    pub fn validate(self, weight: u32) -> Result<()> {
        require!(
            weight > self.min_weight_exclusive() && weight <= self.max_weight(),
            ErrorCode::InvalidInput
        );
        Ok(())
    }
}

pub(crate) fn require_nonzero(supply: U256, balance: U256) -> Result<()> {
    require!(!supply.is_zero(), ErrorCode::InvalidInput);
    require!(!balance.is_zero(), ErrorCode::InvalidInput);
    Ok(())
}

/// `scale * ((base_n / base_d) ^ (exp_n / exp_d) - 1)`, rounded down.
pub(crate) fn growth_down(scale: U256, base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Result<U256> {
    let (result, precision) = LogExpMath::power(base_n, base_d, exp_n, exp_d)?;
    let grown = Math::mul(scale, result)? >> precision as usize;
    Math::sub(grown, scale)
}

/// `scale * ((base_n / base_d) ^ (exp_n / exp_d) - 1)`, with the final division rounded up.
pub(crate) fn growth_up(scale: U256, base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Result<U256> {
    let (result, precision) = LogExpMath::power(base_n, base_d, exp_n, exp_d)?;
    // result >= 2^precision and scale > 0, so the product is never zero
    let grown = Math::add(Math::sub(Math::mul(scale, result)?, U256::one())? >> precision as usize, U256::one())?;
    Math::sub(grown, scale)
}

/// `scale * (1 - (base_d / base_n) ^ (exp_n / exp_d))`, rounded down.
///
/// With r / 2^p = (base_n / base_d) ^ (exp_n / exp_d) this is `scale * (r - 2^p) / r`.
pub(crate) fn decay_down(scale: U256, base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Result<U256> {
    let (result, precision) = LogExpMath::power(base_n, base_d, exp_n, exp_d)?;
    let kept = Math::sub(Math::mul(scale, result)?, Math::shl(scale, precision as u32)?)?;
    Math::div(kept, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(code: ErrorCode) -> anchor_lang::error::Error {
        code.into()
    }

    #[test]
    fn test_weight_ranges() {
        assert!(Reserves::One.validate(1).is_ok());
        assert!(Reserves::One.validate(MAX_WEIGHT).is_ok());
        assert_eq!(Reserves::One.validate(0).unwrap_err(), err(ErrorCode::InvalidInput));
        assert_eq!(Reserves::One.validate(MAX_WEIGHT + 1).unwrap_err(), err(ErrorCode::InvalidInput));

        assert!(Reserves::Two.validate(2).is_ok());
        assert!(Reserves::Two.validate(2 * MAX_WEIGHT).is_ok());
        assert_eq!(Reserves::Two.validate(1).unwrap_err(), err(ErrorCode::InvalidInput));
        assert_eq!(Reserves::Two.validate(2 * MAX_WEIGHT + 1).unwrap_err(), err(ErrorCode::InvalidInput));
    }

    #[test]
    fn test_kernels_bracket_each_other() {
        let scale = U256::from(10u64).pow(U256::from(22u64));
        let base_n = U256::from(10_100u64);
        let base_d = U256::from(10_000u64);
        let down = growth_down(scale, base_n, base_d, MAX_WEIGHT, 1_500_000).unwrap();
        let up = growth_up(scale, base_n, base_d, MAX_WEIGHT, 1_500_000).unwrap();
        assert!(up >= down && up - down <= U256::one());

        // decaying by the same factor never gives back more than the growth took
        let decayed = decay_down(scale, base_n, base_d, MAX_WEIGHT, 1_500_000).unwrap();
        assert!(decayed < down);
    }
}
