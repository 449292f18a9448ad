//! Probability, target and template formatters for terminal display.
//!
//! Pure functions that turn engine values into the strings the CLI prints.
//!
//! ## Example
//!
//! ```rust
//! use drawcalc_cli::formatters::format_percent;
//!
//! assert_eq!(format_percent(0.125, 2), "12.50%");
//! assert_eq!(format_percent(1.0, 0), "100%");
//! ```

use drawcalc_engine::games::GameTemplate;
use drawcalc_engine::model::NamedTarget;

/// Format a probability in `[0, 1]` as a percentage with `precision` decimals.
pub fn format_percent(probability: f64, precision: u8) -> String {
    format!("{:.*}%", usize::from(precision), probability * 100.0)
}

/// Format one target card as `"<label>: at least k of K"`.
///
/// # Example
///
/// ```rust
/// use drawcalc_engine::model::{NamedTarget, TargetGroup};
/// # use drawcalc_cli::formatters::format_target;
///
/// let t = NamedTarget { name: None, group: TargetGroup::new(3, 1) };
/// assert_eq!(format_target(&t, 0), "Card 1: at least 1 of 3");
/// ```
pub fn format_target(target: &NamedTarget, index: usize) -> String {
    format!(
        "{}: at least {} of {}",
        target.label(index),
        target.group.desired_count,
        target.group.count_in_deck
    )
}

/// Format the preset list as an aligned text table.
pub fn format_templates_table(templates: &[GameTemplate]) -> String {
    let key_width = templates
        .iter()
        .map(|t| t.key.len())
        .max()
        .unwrap_or(0)
        .max("KEY".len());
    let mut table = format!(
        "{:<key_width$}  {:>4}  {:>4}  {:>4}  {:>4}  {:>6}  NAME\n",
        "KEY", "DECK", "HAND", "1ST", "2ND", "COPIES"
    );
    for t in templates {
        table.push_str(&format!(
            "{:<key_width$}  {:>4}  {:>4}  {:>4}  {:>4}  {:>6}  {}\n",
            t.key,
            t.deck_size,
            t.base_hand_size,
            format!("+{}", t.first_player_turn_draw),
            format!("+{}", t.second_player_turn_draw),
            t.max_copies,
            t.name
        ));
    }
    table
}
