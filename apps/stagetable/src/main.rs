//! # stagetable - Stage Dispatcher
//!
//! The binary for the stagetable jump-table dispatcher.
//!
//! ## Usage
//!
//! ```bash
//! # Dispatch the standard table (same as `stagetable run`)
//! stagetable
//!
//! # Run stages concurrently, phases still ordered per stage
//! stagetable run --parallel
//!
//! # Inspect the table
//! stagetable describe --json
//! ```
//!
//! stdout carries only the trace. Logs go to stderr; `RUST_LOG` overrides the
//! filter and `STAGETABLE_LOG_FORMAT=json` switches to machine-parseable logs.

use clap::Parser;
use stagetable::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr.
fn init_tracing(verbose: bool) {
    let log_format =
        std::env::var("STAGETABLE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "stagetable=debug,stagetable_core=debug"
    } else {
        "stagetable=warn,stagetable_core=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
