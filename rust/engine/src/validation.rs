//! Opt-in boundary checks for calculation inputs.
//!
//! The probability functions accept anything and report impossible
//! configurations as zero probability. Callers that take input from people
//! run [`CalculationInput::validate`] first so mistakes surface as messages
//! instead of a silent 0%.

use crate::errors::InputError;
use crate::games::MAX_TARGET_GROUPS;
use crate::model::CalculationInput;

/// Limits applied on top of the structural rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Limits {
    pub max_groups: usize,
    /// Per-card copy limit, usually taken from a game template
    pub max_copies: Option<u32>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_groups: MAX_TARGET_GROUPS,
            max_copies: None,
        }
    }
}

impl CalculationInput {
    /// Checks the input against `limits`, reporting the first violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawcalc_engine::errors::InputError;
    /// use drawcalc_engine::model::{CalculationInput, TargetGroup};
    /// use drawcalc_engine::validation::Limits;
    ///
    /// let ok = CalculationInput::new(40, 5, vec![TargetGroup::new(3, 1)]);
    /// assert!(ok.validate(&Limits::default()).is_ok());
    ///
    /// let bad = CalculationInput::new(40, 5, vec![TargetGroup::new(3, 4)]);
    /// assert!(matches!(
    ///     bad.validate(&Limits::default()),
    ///     Err(InputError::DesiredExceedsCopies { index: 0, .. })
    /// ));
    /// ```
    pub fn validate(&self, limits: &Limits) -> Result<(), InputError> {
        if self.deck_size == 0 {
            return Err(InputError::EmptyDeck);
        }
        let groups = self.target_groups.len();
        if groups == 0 {
            return Err(InputError::NoTargetGroups);
        }
        if groups > limits.max_groups {
            return Err(InputError::TooManyTargetGroups {
                count: groups,
                max: limits.max_groups,
            });
        }
        if groups > self.deck_size as usize {
            return Err(InputError::MoreGroupsThanCards {
                groups,
                deck_size: self.deck_size,
            });
        }
        if self.hand_size > self.deck_size {
            return Err(InputError::HandExceedsDeck {
                hand_size: self.hand_size,
                deck_size: self.deck_size,
            });
        }

        for (index, g) in self.target_groups.iter().enumerate() {
            if let Some(max) = limits.max_copies.filter(|&max| g.count_in_deck > max) {
                return Err(InputError::CopiesExceedLimit {
                    index,
                    count: g.count_in_deck,
                    max,
                });
            }
            if g.desired_count > g.count_in_deck {
                return Err(InputError::DesiredExceedsCopies {
                    index,
                    desired: g.desired_count,
                    count: g.count_in_deck,
                });
            }
            if g.desired_count > self.hand_size {
                return Err(InputError::DesiredExceedsHand {
                    index,
                    desired: g.desired_count,
                    hand_size: self.hand_size,
                });
            }
        }

        let wanted: u64 = self
            .target_groups
            .iter()
            .map(|g| u64::from(g.desired_count))
            .sum();
        if wanted > u64::from(self.hand_size) {
            return Err(InputError::DesiredTotalExceedsHand {
                total: wanted,
                hand_size: self.hand_size,
            });
        }

        let total: u64 = self
            .target_groups
            .iter()
            .map(|g| u64::from(g.count_in_deck))
            .sum();
        if total > u64::from(self.deck_size) {
            return Err(InputError::TargetsExceedDeck {
                total,
                deck_size: self.deck_size,
            });
        }
        Ok(())
    }
}
