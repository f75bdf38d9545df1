//! # stagetable CLI Module
//!
//! This module implements the CLI interface for stagetable.
//!
//! ## Available Commands
//!
//! - `run` - Dispatch every stage of the standard table (default)
//! - `describe` - Show the layout of the standard table
//!
//! Both accept `--stages <N>` to size the table; more than 256 stages is an error.

mod commands;

use clap::{Parser, Subcommand};
use stagetable_core::{DispatchError, STAGE_COUNT};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// stagetable - Stage Dispatcher
///
/// Walks a fixed jump table of setup/run/teardown callbacks,
/// stage by stage, and prints a trace line per call.
#[derive(Parser, Debug)]
#[command(name = "stagetable")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Dispatch every stage of the standard table
    Run {
        /// Run stages concurrently (phase order is kept within each stage)
        #[arg(long)]
        parallel: bool,

        /// Number of stages in the table
        #[arg(long, default_value_t = STAGE_COUNT)]
        stages: usize,
    },

    /// Show the layout of the standard table
    Describe {
        /// Output in JSON format (for programmatic access)
        #[arg(long)]
        json: bool,

        /// Number of stages in the table
        #[arg(long, default_value_t = STAGE_COUNT)]
        stages: usize,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), DispatchError> {
    match cli.command {
        Some(Commands::Run { parallel, stages }) => cmd_run(parallel, stages),
        Some(Commands::Describe { json, stages }) => cmd_describe(json, stages),
        None => {
            // No subcommand - run the standard table by default
            cmd_run(false, STAGE_COUNT)
        }
    }
}
