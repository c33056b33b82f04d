mod collectors;
mod error;
mod render;
mod report;
mod snapshot;
mod units;

use clap::Parser;
use report::ReportBuilder;
use std::io;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Print a point-in-time snapshot of host machine state: OS identity, boot
/// time, CPU, GPU, memory, disks, and network.
#[derive(Parser, Debug)]
#[command(name = "sysreport")]
#[command(version)]
struct Cli {}

fn main() {
    init_tracing();
    let _cli = Cli::parse();

    let stdout = io::stdout();
    if let Err(err) = ReportBuilder::new().write_report(&mut stdout.lock()) {
        error!(error = %err, "report aborted");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Diagnostics go to stderr; stdout belongs to the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
