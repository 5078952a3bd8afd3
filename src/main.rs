//! battbar — one-shot battery status line for status bars and prompts.
//!
//! Run with:  `battbar -c -s`

mod args;

use anyhow::Result;
use batt_acpi::SystemSource;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: warn).
    // Diagnostics go to stderr so the stdout status line stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("battbar v{} starting", env!("CARGO_PKG_VERSION"));

    let opts = args::Args::parse_lenient(std::env::args().skip(1)).display_options();

    // A failed state query surfaces here as an error, which prints one
    // diagnostic to stderr and exits with status 1.
    let source = SystemSource::new();
    batt_indicator::report(&source, opts, &mut std::io::stdout().lock())?;
    Ok(())
}
