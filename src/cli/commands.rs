use crate::config::GeneratorConfig;
use crate::error::{GenerateError, EXIT_SUCCESS};
use crate::invoker::{self, Mode, Outcome};
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for the Python client generator
///
/// Runs `openapi-generator` in a container against a local spec file or a
/// URL and writes the client into `<root>/client`.
#[derive(Parser, Debug)]
#[command(name = "pyclient-gen", version)]
#[command(about = "Generate python client", long_about = None)]
pub struct Cli {
    /// Input OpenAPI specification file path or URL
    pub file: String,

    /// Generate async code (`--library asyncio`)
    #[arg(long, default_value_t = false)]
    pub asyncio: bool,

    /// Installation root holding `client/` and `tools/client_generator/`
    /// (default: current directory)
    #[arg(long, env = "PYGEN_ROOT")]
    pub root: Option<PathBuf>,

    /// Generator container image
    #[arg(long, env = "PYGEN_IMAGE")]
    pub image: Option<String>,

    /// Settings file (default: <root>/tools/client_generator/client-generator.toml)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Print the container command instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::from_asyncio_flag(self.asyncio)
    }
}

/// Execute the parsed command line
///
/// # Errors
///
/// Returns an error if:
/// - The settings file is present but invalid
/// - The source is blank or the local file cannot be staged
/// - The container runtime cannot be started
/// - The generator exits non-zero or is interrupted
pub fn run_cli(cli: &Cli) -> Result<Outcome, GenerateError> {
    let config = GeneratorConfig::resolve(
        cli.root.as_deref(),
        cli.image.as_deref(),
        cli.settings.as_deref(),
    )?;
    tracing::debug!(?config, "resolved configuration");

    if cli.dry_run {
        invoker::dry_run(&config, &cli.file, cli.mode())
    } else {
        invoker::run(&config, &cli.file, cli.mode())
    }
}

/// Print the outcome for the user and pick the process exit code
pub fn report(result: &Result<Outcome, GenerateError>) -> u8 {
    match result {
        Ok(Outcome::Generated { output }) => {
            println!("Successfully finished: client written to {}", output.display());
            EXIT_SUCCESS
        }
        Ok(Outcome::DryRun { command_line }) => {
            println!("{command_line}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
