//! Calc command handler.
//!
//! Resolves deck and hand size from flags, the chosen template and the
//! configuration, parses the target cards, validates the input and prints
//! the probability of drawing the targets exactly and at least.

use crate::cli::CalcArgs;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_percent, format_target};
use crate::ui;
use crate::validation::parse_targets;
use crate::OutputFormat;
use drawcalc_engine::games::{GameTemplate, Seat};
use drawcalc_engine::model::{CalculationInput, CalculationResult, NamedTarget};
use drawcalc_engine::validation::Limits;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    template: &'a str,
    seat: Seat,
    deck_size: u32,
    hand_size: u32,
    targets: &'a [NamedTarget],
    result: CalculationResult,
}

/// Handle the calc command.
///
/// Explicit `--deck`/`--hand` win over the template; without `--hand` the
/// hand size is the template's opening hand plus the first-turn draw of
/// `--seat`.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for an unknown template, a malformed
/// `--target`, or (unless `--permissive`) an input that fails validation.
/// Returns `CliError::Io` if writing to an output stream fails.
pub fn handle_calc_command(
    args: &CalcArgs,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let template_key = args.template.as_deref().unwrap_or(&config.template);
    let template = GameTemplate::find(template_key).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown template '{}' (see `drawcalc templates`)",
            template_key
        ))
    })?;
    let seat = Seat::from(args.seat);
    let deck_size = args.deck.unwrap_or(template.deck_size);
    let hand_size = args
        .hand
        .unwrap_or_else(|| template.effective_hand_size(seat));
    let targets = parse_targets(&args.targets).map_err(CliError::InvalidInput)?;

    let input = CalculationInput::new(
        deck_size,
        hand_size,
        targets.iter().map(|t| t.group).collect(),
    );
    debug!(
        template = template.key,
        deck_size,
        hand_size,
        groups = input.target_groups.len(),
        "resolved calculation input"
    );

    let limits = Limits {
        max_groups: config.max_groups,
        max_copies: template.copy_limit(),
    };
    if let Err(e) = input.validate(&limits) {
        if !args.permissive {
            return Err(e.into());
        }
        warn!(error = %e, "invalid input accepted in permissive mode");
        ui::display_warning(err, &format!("{} (continuing with --permissive)", e))?;
    }

    let result = input.calculate();
    info!(
        exactly = result.probability_exactly,
        at_least = result.probability_at_least,
        "calculation finished"
    );

    let report = CalcReport {
        template: template.key,
        seat,
        deck_size,
        hand_size,
        targets: &targets,
        result,
    };
    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            write_text_report(&report, template, args.precision.unwrap_or(config.precision), out)
        }
        OutputFormat::Json => {
            let json_str = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json_str)?;
            Ok(())
        }
    }
}

fn write_text_report(
    report: &CalcReport<'_>,
    template: &GameTemplate,
    precision: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seat = match report.seat {
        Seat::First => "first",
        Seat::Second => "second",
    };
    writeln!(out, "Template: {} (seat: {})", template.name, seat)?;
    writeln!(out, "Deck: {}  Hand: {}", report.deck_size, report.hand_size)?;
    writeln!(out, "Targets:")?;
    for (i, target) in report.targets.iter().enumerate() {
        writeln!(out, "  {}", format_target(target, i))?;
    }
    writeln!(
        out,
        "Exactly:  {}",
        format_percent(report.result.probability_exactly, precision)
    )?;
    writeln!(
        out,
        "At least: {}",
        format_percent(report.result.probability_at_least, precision)
    )?;
    Ok(())
}
