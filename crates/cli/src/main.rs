//! bench-tracker CLI entry point.

use bench_tracker_cli::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    bench_tracker_cli::init_logging(&cli.log_level);

    if let Err(e) = bench_tracker_cli::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
