use serde::{Deserialize, Serialize};

use crate::probability;

/// One category of cards the player wants to draw.
///
/// Groups passed together describe disjoint card identities: no card
/// belongs to two groups.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetGroup {
    /// Copies of this card in the deck (K)
    pub count_in_deck: u32,
    /// Minimum copies the player wants in hand (k)
    pub desired_count: u32,
}

impl TargetGroup {
    pub fn new(count_in_deck: u32, desired_count: u32) -> Self {
        Self {
            count_in_deck,
            desired_count,
        }
    }
}

/// A target group with the label a player gave it.
///
/// The name is display metadata only; probability computations read
/// [`NamedTarget::group`] and nothing else.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NamedTarget {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub group: TargetGroup,
}

impl NamedTarget {
    /// Display label, falling back to the 1-based position when unnamed.
    pub fn label(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Card {}", index + 1),
        }
    }
}

/// Everything needed for one draw calculation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Cards in the deck (N)
    pub deck_size: u32,
    /// Cards drawn into the hand (n)
    pub hand_size: u32,
    /// Ordered target groups
    pub target_groups: Vec<TargetGroup>,
}

impl CalculationInput {
    pub fn new(deck_size: u32, hand_size: u32, target_groups: Vec<TargetGroup>) -> Self {
        Self {
            deck_size,
            hand_size,
            target_groups,
        }
    }

    /// Computes both probabilities for this input.
    ///
    /// ```
    /// use drawcalc_engine::model::{CalculationInput, TargetGroup};
    ///
    /// let input = CalculationInput::new(10, 3, vec![TargetGroup::new(2, 1), TargetGroup::new(1, 1)]);
    /// let result = input.calculate();
    /// assert!((result.probability_exactly - 14.0 / 120.0).abs() < 1e-12);
    /// assert!((result.probability_at_least - 0.125).abs() < 1e-12);
    /// ```
    pub fn calculate(&self) -> CalculationResult {
        probability::calculate(self)
    }
}

/// Probabilities returned from a single calculation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// P(every group drawn exactly its desired count)
    pub probability_exactly: f64,
    /// P(every group drawn at least its desired count)
    pub probability_at_least: f64,
}
