//! Command handler modules for the drawcalc CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod calc;
mod cfg;
mod formula;
mod templates;

pub use calc::handle_calc_command;
pub use cfg::handle_cfg_command;
pub use formula::handle_formula_command;
pub use templates::handle_templates_command;
