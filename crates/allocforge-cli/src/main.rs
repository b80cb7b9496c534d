//! allocforge - greedy fractional knapsack allocator
//!
//! Command line front end: collects capacity and items from flags or files,
//! runs the allocator, and renders the result as a table or JSON.

mod cli;
mod display;
mod error;
mod input;

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

use allocforge_config::{AllocatorConfig, DEFAULT_CONFIG_FILE};
use allocforge_core::AllocationRequest;
use allocforge_solver::{BatchAllocator, GreedyAllocator};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;

/// Capacity of the built-in demo.
const DEMO_CAPACITY: f64 = 50.0;
const DEMO_WEIGHTS: [f64; 3] = [10.0, 20.0, 30.0];
const DEMO_VALUES: [f64; 3] = [60.0, 100.0, 120.0];

fn main() {
    let cli = Cli::parse();

    if !cli.global.quiet {
        allocforge_console::init_with_directive(cli.global.log_directive());
    }

    if let Err(e) = run(cli, &mut io::stdout().lock()) {
        if io::stderr().is_terminal() {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
        } else {
            eprintln!("error: {}", e);
        }
        process::exit(1);
    }
}

fn run(cli: Cli, out: &mut impl io::Write) -> Result<(), CliError> {
    let config = load_config(cli.global.config.as_deref())?;
    let color = !cli.global.json && io::stdout().is_terminal();
    let renderer = OutputRenderer::new(cli.global.json, color);

    match cli.command {
        Commands::Solve(args) => {
            let request = input::request_from_args(&args)?;
            let config = match args.tie_break {
                Some(tie_break) => config.with_tie_break(tie_break.into()),
                None => config,
            };
            solve(&GreedyAllocator::new(config), &renderer, out, &request)
        }
        Commands::Batch { file } => {
            let requests = input::read_batch(&file)?;
            let outcomes = BatchAllocator::new(config).allocate_batch(&requests)?;
            renderer.render_batch(out, &requests, &outcomes)?;

            let failed = outcomes.iter().filter(|o| o.is_err()).count();
            if failed > 0 {
                return Err(CliError::BatchFailures {
                    failed,
                    total: outcomes.len(),
                });
            }
            Ok(())
        }
        Commands::Demo => {
            let request = AllocationRequest::from_parallel(DEMO_CAPACITY, &DEMO_WEIGHTS, &DEMO_VALUES)?;
            solve(&GreedyAllocator::new(config), &renderer, out, &request)
        }
    }
}

fn solve(
    allocator: &GreedyAllocator,
    renderer: &OutputRenderer,
    out: &mut impl io::Write,
    request: &AllocationRequest,
) -> Result<(), CliError> {
    let result = allocator.allocate_request(request)?;
    renderer.render_result(out, request, &result)
}

/// Loads the explicit config, or `allocforge.toml` from the working
/// directory if present, or defaults.
fn load_config(path: Option<&Path>) -> Result<AllocatorConfig, CliError> {
    match path {
        Some(path) => Ok(AllocatorConfig::from_file(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            debug!(path = DEFAULT_CONFIG_FILE, "Loading default config file");
            Ok(AllocatorConfig::load(DEFAULT_CONFIG_FILE)?)
        }
        None => Ok(AllocatorConfig::default()),
    }
}
