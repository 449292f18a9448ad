//! Exact combinatorics on arbitrary-precision integers.
//!
//! Deck and hand sizes are small, but the products formed while counting
//! hands overflow `u64` quickly, so every count in this crate is a
//! [`BigUint`]. Conversion to floating point happens once, in
//! [`ratio_to_f64`].

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Operands wider than this are shifted down before conversion to `f64`.
const F64_SAFE_BITS: u64 = 1000;

/// Returns the binomial coefficient `C(n, k)`.
///
/// Choosing more items than exist is an impossible selection and yields `0`
/// rather than an error.
///
/// # Examples
///
/// ```
/// use drawcalc_engine::combinatorics::combinations;
/// use num_bigint::BigUint;
///
/// assert_eq!(combinations(40, 5), BigUint::from(658_008u32));
/// assert_eq!(combinations(3, 4), BigUint::from(0u32));
/// ```
pub fn combinations(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    if k == 0 || k == n {
        return BigUint::one();
    }
    let k = k.min(n - k);
    let mut res = BigUint::one();
    for i in 1..=k {
        // res * (n - i + 1) is always divisible by i here
        res *= n - i + 1;
        res /= i;
    }
    res
}

/// Converts the exact ratio `numerator / denominator` to `f64`.
///
/// A zero denominator yields `0.0`. Operands too wide for `f64` are shifted
/// right by the same amount first, so the result stays finite.
pub fn ratio_to_f64(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if denominator.is_zero() {
        return 0.0;
    }
    let excess = denominator.bits().saturating_sub(F64_SAFE_BITS);
    let num = (numerator >> excess).to_f64().unwrap_or(f64::INFINITY);
    let den = (denominator >> excess).to_f64().unwrap_or(f64::INFINITY);
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_coefficients() {
        assert_eq!(combinations(5, 2), BigUint::from(10u32));
        assert_eq!(combinations(10, 5), BigUint::from(252u32));
        assert_eq!(combinations(7, 4), BigUint::from(35u32));
        assert_eq!(combinations(12, 3), BigUint::from(220u32));
        assert_eq!(combinations(20, 10), BigUint::from(184_756u32));
    }

    #[test]
    fn test_edges_return_one() {
        assert_eq!(combinations(0, 0), BigUint::one());
        assert_eq!(combinations(9, 0), BigUint::one());
        assert_eq!(combinations(9, 9), BigUint::one());
    }

    #[test]
    fn test_impossible_selection_is_zero() {
        assert!(combinations(3, 4).is_zero());
        assert!(combinations(0, 1).is_zero());
    }

    #[test]
    fn test_symmetry() {
        for n in 0..30u64 {
            for k in 0..=n {
                assert_eq!(combinations(n, k), combinations(n, n - k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1..40u64 {
            for k in 1..n {
                assert_eq!(
                    combinations(n, k),
                    combinations(n - 1, k - 1) + combinations(n - 1, k)
                );
            }
        }
    }

    #[test]
    fn test_exceeds_u64() {
        // C(200, 100) ~ 9.05e58
        let c = combinations(200, 100);
        assert!(c.bits() > 64);
        let expected: BigUint = "90548514656103281165404177077484163874504589675413336841320"
            .parse()
            .unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_ratio_basic() {
        let r = ratio_to_f64(&BigUint::from(1u32), &BigUint::from(20u32));
        assert!((r - 0.05).abs() < 1e-15);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio_to_f64(&BigUint::from(5u32), &BigUint::zero()), 0.0);
    }

    #[test]
    fn test_ratio_huge_operands_stay_finite() {
        let den = combinations(3000, 1500);
        assert!(den.bits() > 1024);
        let num = &den >> 1u32;
        let r = ratio_to_f64(&num, &den);
        assert!(r.is_finite());
        assert!((r - 0.5).abs() < 1e-12);
        assert_eq!(ratio_to_f64(&den, &den), 1.0);
    }
}
