//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::{OutputFormat, SeatArg};

#[derive(Debug, Parser)]
#[command(
    name = "drawcalc",
    version,
    about = "Opening hand draw probabilities for trading card game decks"
)]
pub struct DrawcalcCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probability of drawing the target cards exactly / at least
    Calc(CalcArgs),
    /// List preset game rules
    Templates {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the hypergeometric formulas used by `calc`
    Formula,
    /// Display current configuration settings and their sources
    Cfg,
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Cards in the deck (defaults to the template's deck size)
    #[arg(long, short = 'd')]
    pub deck: Option<u32>,
    /// Cards in hand (defaults to the template's opening hand plus the seat's first draw)
    #[arg(long, short = 'n')]
    pub hand: Option<u32>,
    /// Preset game rules, see `drawcalc templates`
    #[arg(long)]
    pub template: Option<String>,
    /// Turn order; the hand grows by the template's first-turn draw for this seat.
    /// Going first adds no card in most presets (see `drawcalc templates`)
    #[arg(long, value_enum, default_value_t = SeatArg::First)]
    pub seat: SeatArg,
    /// Target card as COPIES:WANTED[:NAME]; repeat for several cards
    #[arg(long = "target", short = 't', value_name = "K:k[:NAME]")]
    pub targets: Vec<String>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Decimal places for percentages
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub precision: Option<u8>,
    /// Skip input validation; impossible inputs report 0%
    #[arg(long)]
    pub permissive: bool,
}
