//! CLI subcommand modules.
//!
//! This module contains the implementations for all shihyo CLI subcommands.

pub(crate) mod calc;
pub(crate) mod fetch;
pub(crate) mod indicators;
pub(crate) mod output;
pub(crate) mod reverse;

use clap::{Args, ValueEnum};
use shihyo_core::BaseValues;

/// Output format shared by the solving commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned table, summary line and highlights
    Text,
    /// Raw record plus formatted strings
    Json,
}

/// Base values given on the command line.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct BaseArgs {
    /// Earnings per share
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) eps: Option<f64>,

    /// Book value per share
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) bps: Option<f64>,

    /// Share price
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) price: Option<f64>,
}

impl From<BaseArgs> for BaseValues {
    fn from(args: BaseArgs) -> Self {
        Self::new(args.eps, args.bps, args.price)
    }
}
