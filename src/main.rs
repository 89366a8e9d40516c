use clap::Parser;
use pyclient_gen::cli::{report, run_cli, Cli};
use pyclient_gen::logging::{init_logging, LogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: {e:#}");
    }

    let result = run_cli(&cli);
    ExitCode::from(report(&result))
}
