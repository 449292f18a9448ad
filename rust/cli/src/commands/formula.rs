//! Formula command handler.
//!
//! Prints the hypergeometric formulas `calc` evaluates, with the meaning of
//! each symbol.

use crate::error::CliError;
use std::io::Write;

const FORMULA_LINES: &[&str] = &[
    "Hypergeometric distribution",
    "  Single card:     P(X = k) = C(K, k) * C(N - K, n - k) / C(N, n)",
    "  Several cards:   P(X1 = k1, ...) = [ prod C(Ki, ki) * C(N - sum Ki, n - sum ki) ] / C(N, n)",
    "  At least:        sum of the above over every (k1' >= k1, ...) with sum ki' <= n",
    "",
    "  N: cards in deck   n: cards in hand",
    "  K: copies of the target card   k: copies wanted",
];

/// Handle the formula command.
pub fn handle_formula_command(out: &mut dyn Write) -> Result<(), CliError> {
    for line in FORMULA_LINES {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
