//! # drawcalc-engine: Card Draw Probability Core
//!
//! Exact draw statistics for trading card game decks. Given a deck size, a
//! hand size and one or more target card groups, the engine computes the
//! multivariate hypergeometric probability of drawing exactly, and at
//! least, the desired copies of every group at once.
//!
//! All counting uses arbitrary-precision integers; a probability is
//! converted to `f64` only at the final division.
//!
//! ## Core Modules
//!
//! - [`combinatorics`] - Binomial coefficients and exact ratio conversion
//! - [`probability`] - "Exactly" and "at least" probabilities
//! - [`model`] - Target groups, calculation input and result
//! - [`games`] - Preset deck rules for popular games
//! - [`validation`] - Opt-in checks for user-supplied inputs
//! - [`errors`] - Validation error type
//!
//! ## Quick Start
//!
//! ```rust
//! use drawcalc_engine::model::{CalculationInput, TargetGroup};
//!
//! // 40-card deck, 5-card hand, at least one copy of a 4-of and of a 3-of
//! let input = CalculationInput::new(40, 5, vec![TargetGroup::new(4, 1), TargetGroup::new(3, 1)]);
//! let result = input.calculate();
//!
//! assert!(result.probability_exactly <= result.probability_at_least);
//! println!("at least: {:.2}%", result.probability_at_least * 100.0);
//! ```
//!
//! ## Impossible Inputs
//!
//! Impossible configurations are data, not errors:
//!
//! ```rust
//! use drawcalc_engine::probability::{probability_at_least, probability_exactly};
//! use drawcalc_engine::model::TargetGroup;
//!
//! // more target copies than the deck holds
//! let groups = [TargetGroup::new(30, 1), TargetGroup::new(15, 1)];
//! assert_eq!(probability_exactly(40, 5, &groups), 0.0);
//! assert_eq!(probability_at_least(40, 5, &groups), 0.0);
//! ```
//!
//! ## Presets
//!
//! ```rust
//! use drawcalc_engine::games::{GameTemplate, Seat};
//!
//! let mtg = GameTemplate::find("mtg").unwrap();
//! assert_eq!(mtg.effective_hand_size(Seat::Second), 8);
//! ```

pub mod combinatorics;
pub mod errors;
pub mod games;
pub mod model;
pub mod probability;
pub mod validation;
