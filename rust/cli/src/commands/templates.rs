//! Templates command handler.
//!
//! Lists the preset game rules that `calc --template` accepts.

use crate::error::CliError;
use crate::formatters::format_templates_table;
use crate::OutputFormat;
use drawcalc_engine::games::GAME_TEMPLATES;
use std::io::Write;

/// Handle the templates command.
///
/// # Arguments
///
/// * `format` - `Text` prints an aligned table, `Json` a pretty JSON array
/// * `out` - Output stream for command output
pub fn handle_templates_command(format: OutputFormat, out: &mut dyn Write) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            write!(out, "{}", format_templates_table(GAME_TEMPLATES))?;
        }
        OutputFormat::Json => {
            let json_str =
                serde_json::to_string_pretty(GAME_TEMPLATES).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json_str)?;
        }
    }
    Ok(())
}
