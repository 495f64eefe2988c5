//! Property-based tests for the curve formulas
//!
//! Inputs stay within 18-decimal token magnitudes. Exponents are kept where `power` cannot overflow,
//! so every call below is expected to succeed.

use super::*;
use dashu_float::DBig;
use proptest::prelude::*;

mod strategies {
    use super::*;

    pub fn balance() -> impl Strategy<Value = u64> {
        1..1_000_000_000_000_000_000u64
    }

    pub fn amount() -> impl Strategy<Value = u64> {
        0..1_000_000_000_000_000_000u64
    }

    pub fn weight() -> impl Strategy<Value = u32> {
        1..=MAX_WEIGHT
    }

    /// Weights whose inverse keeps `MAX_WEIGHT / weight` at most 10.
    pub fn heavy_weight() -> impl Strategy<Value = u32> {
        100_000..=MAX_WEIGHT
    }

    pub fn ratio() -> impl Strategy<Value = u32> {
        200_000..=2 * MAX_WEIGHT
    }

    pub fn staked() -> impl Strategy<Value = u128> {
        10u128.pow(24)..10u128.pow(27)
    }

    pub fn rate() -> impl Strategy<Value = u128> {
        10u128.pow(18)..10u128.pow(21)
    }

    /// A percentage used to spread a base value over [75%, 150%).
    pub fn spread() -> impl Strategy<Value = u128> {
        75u128..150
    }
}

/// The closed forms evaluated in 100-digit decimal floating point.
mod reference {
    use std::str::FromStr;

    use dashu_float::DBig;

    use super::MAX_WEIGHT;

    const DIGITS: usize = 100;

    pub fn num(v: impl ToString) -> DBig {
        DBig::from_str(&v.to_string()).unwrap().with_precision(DIGITS).value()
    }

    /// `(base_n / base_d) ^ (exp_n / exp_d)`
    pub fn pow(base_n: &DBig, base_d: &DBig, exp_n: u32, exp_d: u32) -> DBig {
        ((base_n / base_d).ln() * num(exp_n) / num(exp_d)).exp()
    }

    pub fn purchase_return(supply: u64, balance: u64, weight: u32, amount: u64) -> DBig {
        let grown = pow(&(num(balance) + num(amount)), &num(balance), weight, MAX_WEIGHT);
        num(supply) * (grown - num(1))
    }

    pub fn sale_return(supply: u64, balance: u64, weight: u32, amount: u64) -> DBig {
        let left = pow(&(num(supply) - num(amount)), &num(supply), MAX_WEIGHT, weight);
        num(balance) * (num(1) - left)
    }

    pub fn cross_reserve_return(
        source_balance: u64,
        source_weight: u32,
        target_balance: u64,
        target_weight: u32,
        amount: u64,
    ) -> DBig {
        let source = num(source_balance);
        let left = pow(&source, &(num(source_balance) + num(amount)), source_weight, target_weight);
        num(target_balance) * (num(1) - left)
    }

    pub fn fund_supply_amount(supply: u64, balance: u64, ratio: u32, amount: u64) -> DBig {
        let grown = pow(&(num(balance) + num(amount)), &num(balance), ratio, MAX_WEIGHT);
        num(supply) * (grown - num(1))
    }

    pub fn liquidate_return(supply: u64, balance: u64, ratio: u32, amount: u64) -> DBig {
        let left = pow(&(num(supply) - num(amount)), &num(supply), MAX_WEIGHT, ratio);
        num(balance) * (num(1) - left)
    }

    /// `result <= exact` and `exact - result <= exact * 5e-9 + 1`
    pub fn is_close_below(result: primitive_types::U256, exact: &DBig) -> bool {
        let result = num(result);
        let tolerance = exact * num("0.000000005") + num(1);
        &result <= exact && exact - &result <= tolerance
    }
}

fn u(v: u64) -> U256 {
    U256::from(v)
}

fn ordered(a: u64, b: u64) -> (U256, U256) {
    (u(a.min(b)), u(a.max(b)))
}

proptest! {
    #[test]
    fn test_purchase_return_is_monotonic(
        supply in strategies::balance(),
        balance in strategies::balance(),
        weight in strategies::weight(),
        a in strategies::amount(),
        b in strategies::amount(),
    ) {
        let (small, large) = ordered(a, b);
        let low = purchase_return(u(supply), u(balance), weight, small).unwrap();
        let high = purchase_return(u(supply), u(balance), weight, large).unwrap();
        prop_assert!(low <= high);
    }

    #[test]
    fn test_sale_return_is_monotonic(
        supply in strategies::balance(),
        balance in strategies::balance(),
        weight in strategies::heavy_weight(),
        a in strategies::amount(),
        b in strategies::amount(),
    ) {
        // at most half the supply, so the base stays below 2
        let (small, large) = ordered(a % (supply / 2 + 1), b % (supply / 2 + 1));
        let low = sale_return(u(supply), u(balance), weight, small).unwrap();
        let high = sale_return(u(supply), u(balance), weight, large).unwrap();
        prop_assert!(low <= high);
        prop_assert!(high <= u(balance));
    }

    #[test]
    fn test_cross_reserve_return_is_monotonic(
        source_balance in strategies::balance(),
        source_weight in strategies::heavy_weight(),
        target_balance in strategies::balance(),
        target_weight in strategies::heavy_weight(),
        a in strategies::amount(),
        b in strategies::amount(),
    ) {
        let (small, large) = ordered(a % (source_balance + 1), b % (source_balance + 1));
        let low = cross_reserve_return(u(source_balance), source_weight, u(target_balance), target_weight, small).unwrap();
        let high = cross_reserve_return(u(source_balance), source_weight, u(target_balance), target_weight, large).unwrap();
        prop_assert!(low <= high);
        prop_assert!(high <= u(target_balance));
    }

    #[test]
    fn test_liquidity_is_monotonic(
        supply in strategies::balance(),
        balance in strategies::balance(),
        ratio in strategies::ratio(),
        a in strategies::amount(),
        b in strategies::amount(),
    ) {
        let (small, large) = ordered(a % (supply / 2 + 1), b % (supply / 2 + 1));
        prop_assert!(
            liquidate_return(u(supply), u(balance), ratio, small).unwrap()
                <= liquidate_return(u(supply), u(balance), ratio, large).unwrap()
        );

        let (small, large) = ordered(a % (balance + 1), b % (balance + 1));
        prop_assert!(
            fund_supply_amount(u(supply), u(balance), ratio, small).unwrap()
                <= fund_supply_amount(u(supply), u(balance), ratio, large).unwrap()
        );
    }

    #[test]
    fn test_sell_after_purchase_never_returns_more(
        supply in strategies::balance(),
        balance in strategies::balance(),
        weight in strategies::weight(),
        amount in strategies::amount(),
    ) {
        let issued = purchase_return(u(supply), u(balance), weight, u(amount)).unwrap();
        let new_supply = u(supply) + issued;
        let new_balance = u(balance) + u(amount);
        let returned = sale_return(new_supply, new_balance, weight, issued).unwrap();
        prop_assert!(returned <= u(amount));
    }

    #[test]
    fn test_zero_amount_returns_zero(
        supply in strategies::balance(),
        balance in strategies::balance(),
        weight in strategies::weight(),
        other_weight in strategies::weight(),
        ratio in strategies::ratio(),
    ) {
        let zero = U256::zero();
        prop_assert_eq!(purchase_return(u(supply), u(balance), weight, zero).unwrap(), zero);
        prop_assert_eq!(sale_return(u(supply), u(balance), weight, zero).unwrap(), zero);
        prop_assert_eq!(cross_reserve_return(u(supply), weight, u(balance), other_weight, zero).unwrap(), zero);
        prop_assert_eq!(fund_cost(u(supply), u(balance), ratio, zero).unwrap(), zero);
        prop_assert_eq!(fund_supply_amount(u(supply), u(balance), ratio, zero).unwrap(), zero);
        prop_assert_eq!(liquidate_return(u(supply), u(balance), ratio, zero).unwrap(), zero);
    }

    #[test]
    fn test_full_weight_is_exact(
        supply in strategies::balance(),
        balance in strategies::balance(),
        amount in strategies::amount(),
    ) {
        let (s, b, a) = (supply as u128, balance as u128, amount as u128);
        prop_assert_eq!(
            purchase_return(u(supply), u(balance), MAX_WEIGHT, u(amount)).unwrap(),
            U256::from(s * a / b)
        );
        prop_assert_eq!(
            fund_cost(u(supply), u(balance), MAX_WEIGHT, u(amount)).unwrap(),
            U256::from((a * b).div_ceil(s))
        );

        let sold = amount % (supply + 1);
        prop_assert_eq!(
            sale_return(u(supply), u(balance), MAX_WEIGHT, u(sold)).unwrap(),
            U256::from(b * sold as u128 / s)
        );
        prop_assert_eq!(
            liquidate_return(u(supply), u(balance), MAX_WEIGHT, u(sold)).unwrap(),
            U256::from(b * sold as u128 / s)
        );
    }

    #[test]
    fn test_full_sale_drains_the_reserve(
        supply in strategies::balance(),
        balance in strategies::balance(),
        weight in strategies::weight(),
        ratio in strategies::ratio(),
    ) {
        prop_assert_eq!(sale_return(u(supply), u(balance), weight, u(supply)).unwrap(), u(balance));
        prop_assert_eq!(liquidate_return(u(supply), u(balance), ratio, u(supply)).unwrap(), u(balance));
    }

    #[test]
    fn test_returns_stay_below_exact_value(
        supply in strategies::balance(),
        balance in strategies::balance(),
        weight in strategies::weight(),
        source_weight in strategies::heavy_weight(),
        target_weight in strategies::heavy_weight(),
        ratio in strategies::ratio(),
        amount in strategies::amount(),
    ) {
        let result = purchase_return(u(supply), u(balance), weight, u(amount)).unwrap();
        let exact = reference::purchase_return(supply, balance, weight, amount);
        prop_assert!(reference::is_close_below(result, &exact), "purchase {} vs {}", result, exact);

        let sold = amount % (supply / 2 + 1);
        let result = sale_return(u(supply), u(balance), source_weight, u(sold)).unwrap();
        let exact = reference::sale_return(supply, balance, source_weight, sold);
        prop_assert!(reference::is_close_below(result, &exact), "sale {} vs {}", result, exact);

        let result = liquidate_return(u(supply), u(balance), ratio, u(sold)).unwrap();
        let exact = reference::liquidate_return(supply, balance, ratio, sold);
        prop_assert!(reference::is_close_below(result, &exact), "liquidate {} vs {}", result, exact);

        let deposit = amount % (balance + 1);
        let result = cross_reserve_return(u(balance), source_weight, u(supply), target_weight, u(deposit)).unwrap();
        let exact = reference::cross_reserve_return(balance, source_weight, supply, target_weight, deposit);
        prop_assert!(reference::is_close_below(result, &exact), "cross {} vs {}", result, exact);

        let result = fund_supply_amount(u(supply), u(balance), ratio, u(deposit)).unwrap();
        let exact = reference::fund_supply_amount(supply, balance, ratio, deposit);
        prop_assert!(reference::is_close_below(result, &exact), "fund supply {} vs {}", result, exact);
    }

    #[test]
    fn test_balanced_weights_restore_the_rate(
        rate in strategies::rate(),
        staked in strategies::staked(),
        primary_spread in strategies::spread(),
        secondary_spread in strategies::spread(),
        rate_n_spread in strategies::spread(),
        rate_d_spread in strategies::spread(),
    ) {
        let primary = staked * primary_spread / 100;
        let secondary = staked * secondary_spread / 100;
        let rate_n = rate * rate_n_spread / 100;
        let rate_d = rate * rate_d_spread / 100;

        let (t, s, r, q, p) = (
            reference::num(staked),
            reference::num(primary),
            reference::num(secondary),
            reference::num(rate_n),
            reference::num(rate_d),
        );
        // W has no real solution below -1/e
        let z = (&s / &t).ln() * &t * &q / (&r * &p);
        prop_assume!(z >= -reference::num(-1).exp());

        let (w1, w2) = balanced_weights(
            U256::from(staked),
            U256::from(primary),
            U256::from(secondary),
            U256::from(rate_n),
            U256::from(rate_d),
        ).unwrap();
        prop_assert_eq!(w1 + w2, MAX_WEIGHT);

        let low = reference::num("0.99");
        let high = reference::num("1.02");

        // secondary balance once the primary reserve has been moved to `staked`
        let moved = &r * reference::pow(&s, &t, w1, w2);
        let rate_ratio = &t * reference::num(w2) * &q / (moved * reference::num(w1) * &p);
        prop_assert!(rate_ratio >= low && rate_ratio <= high, "rate ratio {}", rate_ratio);

        if staked > primary {
            let paid = cross_reserve_return(
                U256::from(primary),
                w1,
                U256::from(secondary),
                w2,
                U256::from(staked - primary),
            ).unwrap();
            let left = &r - reference::num(paid);
            let rate_ratio = &t * reference::num(w2) * &q / (left * reference::num(w1) * &p);
            prop_assert!(rate_ratio >= low && rate_ratio <= high, "rate ratio after conversion {}", rate_ratio);
        }
    }
}
