use thiserror::Error;

/// Reasons a [`crate::model::CalculationInput`] fails boundary validation.
///
/// Group indices are 0-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Deck size must be greater than 0")]
    EmptyDeck,
    #[error("At least one target card is required")]
    NoTargetGroups,
    #[error("Too many target cards: {count} (maximum: {max})")]
    TooManyTargetGroups { count: usize, max: usize },
    #[error("Target cards ({groups}) cannot outnumber the deck ({deck_size})")]
    MoreGroupsThanCards { groups: usize, deck_size: u32 },
    #[error("Hand size {hand_size} exceeds deck size {deck_size}")]
    HandExceedsDeck { hand_size: u32, deck_size: u32 },
    #[error("Target card {index}: wants {desired} but the deck holds only {count}")]
    DesiredExceedsCopies { index: usize, desired: u32, count: u32 },
    #[error("Target card {index}: wants {desired} but the hand holds only {hand_size}")]
    DesiredExceedsHand {
        index: usize,
        desired: u32,
        hand_size: u32,
    },
    #[error("Target cards want {total} cards in total but the hand holds only {hand_size}")]
    DesiredTotalExceedsHand { total: u64, hand_size: u32 },
    #[error("Target card {index}: {count} copies exceeds the limit of {max}")]
    CopiesExceedLimit { index: usize, count: u32, max: u32 },
    #[error("Target cards total {total} copies but the deck holds only {deck_size}")]
    TargetsExceedDeck { total: u64, deck_size: u32 },
}
