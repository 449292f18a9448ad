//! # drawcalc CLI Library
//!
//! Command-line front end for the draw probability engine. It resolves game
//! presets, parses target cards, validates input and prints the
//! probability of drawing the cards a player wants in their opening hand.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["drawcalc", "calc", "--deck", "40", "--hand", "5", "--target", "4:1"];
//! let code = drawcalc_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `calc`: Probability of drawing the target cards exactly / at least
//! - `templates`: List preset game rules
//! - `formula`: Show the hypergeometric formulas in use
//! - `cfg`: Display current configuration settings

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, DrawcalcCli};
use commands::{
    handle_calc_command, handle_cfg_command, handle_formula_command, handle_templates_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["calc", "templates", "formula", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["drawcalc", "templates"];
/// let code = drawcalc_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DrawcalcCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err);
            write_or_exit!(err, "Deck Draw Probability CLI");
            write_or_exit!(err, "Usage: drawcalc <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: drawcalc --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Formula => handle_formula_command(out),
        Commands::Templates { format } => handle_templates_command(format, out),
        Commands::Calc(args) => match config::load() {
            Ok(cfg) => handle_calc_command(&args, &cfg, out, err),
            Err(e) => Err(CliError::Config(e.to_string())),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Io(_)) => exit_code::ERROR,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Output format for commands that print results.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawcalc_cli::OutputFormat;
    /// assert_eq!(OutputFormat::Json.as_str(), "json");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Turn order used to pick a template's opening hand size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum SeatArg {
    /// Going first
    #[default]
    First,
    /// Going second
    Second,
}

impl From<SeatArg> for drawcalc_engine::games::Seat {
    fn from(seat: SeatArg) -> Self {
        match seat {
            SeatArg::First => drawcalc_engine::games::Seat::First,
            SeatArg::Second => drawcalc_engine::games::Seat::Second,
        }
    }
}
