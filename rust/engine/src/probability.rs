//! Multivariate hypergeometric draw probabilities.
//!
//! For a deck of `N` cards, a hand of `n` cards and disjoint target groups
//! `(K_i, k_i)`:
//!
//! ```text
//! P(X_1 = k_1, ..., X_m = k_m) = [ Π C(K_i, k_i) * C(N - ΣK_i, n - Σk_i) ] / C(N, n)
//! ```
//!
//! The "at least" probability sums the same numerator over every admissible
//! vector `k'_i >= k_i`. Impossible configurations yield `0.0`; nothing here
//! returns an error.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::combinatorics::{combinations, ratio_to_f64};
use crate::model::{CalculationInput, CalculationResult, TargetGroup};

/// Returns `(Σ count_in_deck, Σ desired_count)`.
fn totals(groups: &[TargetGroup]) -> (u64, u64) {
    groups.iter().fold((0, 0), |(count, desired), g| {
        (
            count + u64::from(g.count_in_deck),
            desired + u64::from(g.desired_count),
        )
    })
}

/// Probability that every group is drawn exactly `desired_count` times.
///
/// # Examples
///
/// ```
/// use drawcalc_engine::model::TargetGroup;
/// use drawcalc_engine::probability::probability_exactly;
///
/// // one specific card in a 20-card deck, one card drawn
/// let p = probability_exactly(20, 1, &[TargetGroup::new(1, 1)]);
/// assert!((p - 0.05).abs() < 1e-12);
/// ```
pub fn probability_exactly(deck_size: u32, hand_size: u32, groups: &[TargetGroup]) -> f64 {
    let deck = u64::from(deck_size);
    let hand = u64::from(hand_size);
    let (sum_count, sum_desired) = totals(groups);

    if hand < sum_desired || deck < sum_count || deck - sum_count < hand - sum_desired {
        return 0.0;
    }

    let denominator = combinations(deck, hand);
    if denominator.is_zero() {
        return 0.0;
    }

    let others = combinations(deck - sum_count, hand - sum_desired);
    let numerator = groups.iter().fold(others, |acc, g| {
        acc * combinations(g.count_in_deck.into(), g.desired_count.into())
    });
    ratio_to_f64(&numerator, &denominator)
}

/// Depth-first walk over per-group draw counts.
struct AtLeastSearch<'a> {
    groups: &'a [TargetGroup],
    hand_size: u64,
    /// Non-target cards in the deck
    others: u64,
    /// `min_after[i]` = Σ desired_count of groups after `i`
    min_after: Vec<u64>,
    total: BigUint,
}

impl AtLeastSearch<'_> {
    fn visit(&mut self, index: usize, drawn: u64, ways: &BigUint) {
        let Some(group) = self.groups.get(index) else {
            self.accept(drawn, ways);
            return;
        };

        // leave room for the minimums of every later group
        let Some(room) = self.hand_size.checked_sub(drawn + self.min_after[index]) else {
            return;
        };
        let lower = u64::from(group.desired_count);
        let upper = u64::from(group.count_in_deck).min(room);
        for k in lower..=upper {
            let next = ways * combinations(group.count_in_deck.into(), k);
            self.visit(index + 1, drawn + k, &next);
        }
    }

    fn accept(&mut self, drawn: u64, ways: &BigUint) {
        let Some(rest) = self.hand_size.checked_sub(drawn) else {
            return;
        };
        if self.others < rest {
            return;
        }
        self.total += ways * combinations(self.others, rest);
    }
}

/// Probability that every group is drawn at least `desired_count` times.
///
/// # Examples
///
/// ```
/// use drawcalc_engine::model::TargetGroup;
/// use drawcalc_engine::probability::probability_at_least;
///
/// // at least one of a 4-of in a 40-card deck with a 5-card hand
/// let p = probability_at_least(40, 5, &[TargetGroup::new(4, 1)]);
/// assert!((p - 0.4271).abs() < 1e-4);
/// ```
pub fn probability_at_least(deck_size: u32, hand_size: u32, groups: &[TargetGroup]) -> f64 {
    let deck = u64::from(deck_size);
    let hand = u64::from(hand_size);

    let denominator = combinations(deck, hand);
    if denominator.is_zero() {
        return 0.0;
    }
    let (sum_count, _) = totals(groups);
    // more target cards than the deck holds: no hand can be formed
    let Some(others) = deck.checked_sub(sum_count) else {
        return 0.0;
    };

    let mut min_after = vec![0u64; groups.len()];
    for i in (0..groups.len().saturating_sub(1)).rev() {
        min_after[i] = min_after[i + 1] + u64::from(groups[i + 1].desired_count);
    }

    let mut search = AtLeastSearch {
        groups,
        hand_size: hand,
        others,
        min_after,
        total: BigUint::zero(),
    };
    search.visit(0, 0, &BigUint::one());
    ratio_to_f64(&search.total, &denominator)
}

/// Computes both probabilities for `input`.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let groups = input.target_groups.as_slice();
    CalculationResult {
        probability_exactly: probability_exactly(input.deck_size, input.hand_size, groups),
        probability_at_least: probability_at_least(input.deck_size, input.hand_size, groups),
    }
}
