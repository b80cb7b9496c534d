//! Command line interface definition

use std::path::PathBuf;

use allocforge_config::TieBreak;
use allocforge_core::Item;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// allocforge - greedy fractional knapsack allocator
#[derive(Debug, Parser)]
#[command(name = "allocforge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Allocate a divisible capacity across valued items, highest value-density first")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log detail (-v items taken, -vv fill order)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use alternate config file (defaults to ./allocforge.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Default `tracing` directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "allocforge_solver=info",
            1 => "allocforge_solver=debug",
            _ => "allocforge_solver=trace",
        }
    }
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solve one allocation problem
    Solve(SolveArgs),

    /// Solve every request in a JSON, TOML or YAML file
    Batch {
        /// File holding a `requests` list
        file: PathBuf,
    },

    /// Solve the classic example (capacity 50, weights 10/20/30, values 60/100/120)
    Demo,
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Capacity to allocate
    #[arg(short, long, allow_negative_numbers = true)]
    pub capacity: Option<f64>,

    /// Item as WEIGHT:VALUE (repeatable)
    #[arg(short, long = "item", value_name = "WEIGHT:VALUE", value_parser = parse_item)]
    pub items: Vec<Item>,

    /// Comma separated weights, paired with --values
    #[arg(long, value_delimiter = ',', requires = "values", allow_negative_numbers = true)]
    pub weights: Vec<f64>,

    /// Comma separated values, paired with --weights
    #[arg(long, value_delimiter = ',', requires = "weights", allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Read the request (capacity and items) from a JSON, TOML or YAML file
    #[arg(long, value_name = "FILE", conflicts_with_all = ["items", "weights", "values"])]
    pub input: Option<PathBuf>,

    /// Override the configured tie-break policy
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreakArg>,
}

/// Tie-break policy as a command line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Keep input order among equal ratios
    InputOrder,
    /// Prefer heavier, then more valuable items among equal ratios
    HeavierFirst,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::InputOrder => TieBreak::InputOrder,
            TieBreakArg::HeavierFirst => TieBreak::HeavierFirst,
        }
    }
}

/// Parses `WEIGHT:VALUE` into an unvalidated item.
pub fn parse_item(s: &str) -> Result<Item, String> {
    let (weight, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected WEIGHT:VALUE, got `{}`", s))?;
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight `{}`: {}", weight, e))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value `{}`: {}", value, e))?;
    Ok(Item::new(weight, value))
}
