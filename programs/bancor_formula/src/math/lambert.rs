// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::U256;

use super::logexpmath::{LogExpMath, FIXED_1, MAX_PRECISION};
use super::math::Math;
use super::tables::{
    LAMBERT_ASYMPTOTIC_MAX, LAMBERT_COEFFICIENTS, LAMBERT_LOOKUP, LAMBERT_LOOKUP_MAX, LAMBERT_LOOKUP_STEP,
    LAMBERT_SERIES_RADIUS,
};
use crate::error::ErrorCode;

/**
 * @dev The ratio W(x) / x of the Lambert W function, at MAX_PRECISION.
 *
 * The ratio stays within (0, e] on the whole domain, so it can be scaled by a 128-bit factor without overflow.
 * Every branch rounds down.
 */
pub struct LambertMath;

impl LambertMath {
    /**
     * @dev W(x) / x for x >= 0.
     * The series covers [0, e^-1], the lookup table the next 3 units, and the asymptotic expansion
     * W(x) ~ ln x - ln ln x + ln ln x / ln x everything above, up to LAMBERT_ASYMPTOTIC_MAX.
     */
    pub fn positive_ratio(x: U256) -> Result<U256> {
        if x <= LAMBERT_SERIES_RADIUS {
            return Self::positive_series(x);
        }
        if x <= LAMBERT_LOOKUP_MAX {
            return Self::positive_lookup(x);
        }
        require!(x <= LAMBERT_ASYMPTOTIC_MAX, ErrorCode::Overflow);
        Self::positive_asymptotic(x)
    }

    /**
     * @dev W(-x) / -x for x >= 0.
     * Below -1/e the equation has no real solution. W is then taken as -1, which gives 1 / x.
     */
    pub fn negative_ratio(x: U256) -> Result<U256> {
        if x <= LAMBERT_SERIES_RADIUS {
            return Self::negative_series(x);
        }
        Math::div(Math::mul(FIXED_1, FIXED_1)?, x)
    }

    // sum of (-n)^(n-1) / n! * x^(n-1); odd powers accumulate apart so neither sum wraps
    fn positive_series(x: U256) -> Result<U256> {
        let scale = LAMBERT_COEFFICIENTS[0];
        let mut added = Math::mul(FIXED_1, scale)?;
        let mut subtracted = Math::mul(x, LAMBERT_COEFFICIENTS[1])?;

        let mut xi = x;
        for (n, &coefficient) in LAMBERT_COEFFICIENTS.iter().enumerate().skip(2) {
            xi = Math::mul(xi, x)? >> (MAX_PRECISION as usize);
            let term = Math::mul(xi, coefficient)?;
            if n % 2 == 0 {
                added = Math::add(added, term)?;
            } else {
                subtracted = Math::add(subtracted, term)?;
            }
        }
        Ok(Math::sub(added, subtracted)? / scale)
    }

    // sum of n^(n-1) / n! * x^(n-1), all terms positive
    fn negative_series(x: U256) -> Result<U256> {
        let mut sum = U256::zero();
        let mut xi = x;
        for &coefficient in LAMBERT_COEFFICIENTS.iter().skip(2) {
            xi = Math::mul(xi, x)? >> (MAX_PRECISION as usize);
            sum = Math::add(sum, Math::mul(xi, coefficient)?)?;
        }
        Math::add(Math::add(sum / LAMBERT_COEFFICIENTS[0], x)?, FIXED_1)
    }

    fn positive_lookup(x: U256) -> Result<U256> {
        let offset = Math::sub(x, Math::add(LAMBERT_SERIES_RADIUS, U256::one())?)?;
        // offset < 127 * LAMBERT_LOOKUP_STEP, so index + 1 is still inside the table
        let index = (offset / LAMBERT_LOOKUP_STEP).low_u64() as usize;
        let lo = Math::mul(LAMBERT_LOOKUP_STEP, U256::from(index))?;
        let hi = Math::add(lo, LAMBERT_LOOKUP_STEP)?;

        let left = Math::mul(LAMBERT_LOOKUP[index], hi - offset)?;
        let right = Math::mul(LAMBERT_LOOKUP[index + 1], offset - lo)?;
        Ok(Math::add(left, right)? / LAMBERT_LOOKUP_STEP)
    }

    pub(crate) fn positive_asymptotic(x: U256) -> Result<U256> {
        let l1 = LogExpMath::fixed_loge(x, MAX_PRECISION)?;
        let l2 = LogExpMath::fixed_loge(l1, MAX_PRECISION)?;
        let w = Math::add(Math::sub(l1, l2)?, Math::div(Math::mul(l2, FIXED_1)?, l1)?)?;
        Math::div(Math::mul(w, FIXED_1)?, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(code: ErrorCode) -> anchor_lang::error::Error {
        code.into()
    }

    fn dec(s: &str) -> U256 {
        U256::from_dec_str(s).unwrap()
    }

    fn fixed(v: u64) -> U256 {
        FIXED_1 * U256::from(v)
    }

    #[test]
    fn test_positive_ratio_values() {
        let quarter = FIXED_1 >> 2usize;
        // W(1/4) * 4 = 138759223851388273509023104302885700128 / 2^127
        assert_eq!(
            LambertMath::positive_ratio(quarter).unwrap(),
            dec("138759222787115764916443908810388100640")
        );
        // W(2) / 2 = 72531654568761368908707414430142903414 / 2^127
        assert_eq!(
            LambertMath::positive_ratio(fixed(2)).unwrap(),
            dec("72531882944035590856220537322008278190")
        );
        // W(10) / 10 = 29698620014969177367178820931660779963 / 2^127
        assert_eq!(
            LambertMath::positive_ratio(fixed(10)).unwrap(),
            dec("31148909140480090805001525641919883885")
        );
        assert_eq!(LambertMath::positive_ratio(U256::zero()).unwrap(), FIXED_1);
    }

    #[test]
    fn test_positive_ratio_branch_edges() {
        assert_eq!(
            LambertMath::positive_ratio(LAMBERT_SERIES_RADIUS).unwrap(),
            dec("128333556894381088861179825525900031465")
        );
        assert_eq!(
            LambertMath::positive_ratio(LAMBERT_SERIES_RADIUS + U256::one()).unwrap(),
            LAMBERT_LOOKUP[0]
        );
        assert_eq!(
            LambertMath::positive_ratio(LAMBERT_LOOKUP_MAX).unwrap(),
            dec("56073814572073085295245695095569469498")
        );
        assert_eq!(
            LambertMath::positive_ratio(LAMBERT_LOOKUP_MAX + U256::one()).unwrap(),
            dec("59613236541651017092939686624489185053")
        );
        assert_eq!(
            LambertMath::positive_ratio(LAMBERT_ASYMPTOTIC_MAX).unwrap(),
            dec("3176170518450502987576302003992886157")
        );
        assert_eq!(
            LambertMath::positive_ratio(LAMBERT_ASYMPTOTIC_MAX + U256::one()).unwrap_err(),
            err(ErrorCode::Overflow)
        );
    }

    #[test]
    fn test_lookup_hits_samples_exactly() {
        let first = LAMBERT_SERIES_RADIUS + U256::one();
        for i in 0..LAMBERT_LOOKUP.len() - 1 {
            let x = first + LAMBERT_LOOKUP_STEP * U256::from(i);
            assert_eq!(LambertMath::positive_ratio(x).unwrap(), LAMBERT_LOOKUP[i], "sample {}", i);
        }
    }

    #[test]
    fn test_lookup_samples_solve_w_equation() {
        // w * e^w = x, checked at precision 124 where e^w cannot overflow for w < 9
        let first = LAMBERT_SERIES_RADIUS + U256::one();
        for (i, &ratio) in LAMBERT_LOOKUP.iter().enumerate() {
            let x = first + LAMBERT_LOOKUP_STEP * U256::from(i);
            let w = (ratio * x) >> 127usize;
            let exp = LogExpMath::fixed_exp(w >> 3usize, 124).unwrap();
            let lhs = ((w >> 3usize) * exp) >> 124usize;
            let rhs = x >> 3usize;
            let diff = if lhs > rhs { lhs - rhs } else { rhs - lhs };
            assert!(diff < U256::from(256u64), "sample {}: {} vs {}", i, lhs, rhs);
        }
    }

    #[test]
    fn test_negative_ratio_values() {
        let quarter = FIXED_1 >> 2usize;
        // W(-1/4) * -4 = 243235847747886940810711606816333771937 / 2^127
        assert_eq!(
            LambertMath::negative_ratio(quarter).unwrap(),
            dec("243235842686572530132931896112750184570")
        );
        assert_eq!(LambertMath::negative_ratio(U256::zero()).unwrap(), FIXED_1);
        assert_eq!(
            LambertMath::negative_ratio(LAMBERT_SERIES_RADIUS).unwrap(),
            dec("399718594707817584708840442587832487988")
        );
        // past the branch point W is -1
        assert_eq!(LambertMath::negative_ratio(FIXED_1).unwrap(), FIXED_1);
        assert_eq!(LambertMath::negative_ratio(fixed(2)).unwrap(), FIXED_1 >> 1usize);
        assert_eq!(
            LambertMath::negative_ratio(LAMBERT_SERIES_RADIUS + U256::one()).unwrap(),
            dec("462491687273110168575455517921668397539")
        );
    }

    #[test]
    fn test_series_never_exceeds_w() {
        let quarter = FIXED_1 >> 2usize;
        assert!(LambertMath::positive_ratio(quarter).unwrap() <= dec("138759223851388273509023104302885700128"));
        assert!(LambertMath::negative_ratio(quarter).unwrap() <= dec("243235847747886940810711606816333771937"));
    }
}
