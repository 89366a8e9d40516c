//! # Generator Invoker
//!
//! Turns a specification source and a [`Mode`] into exactly one blocking
//! container-runtime invocation of `openapi-generator`, producing a Python
//! client in the configured output directory.
//!
//! ## Flow
//!
//! ```text
//! NOT_STARTED ─▶ STAGING (local files only) ─▶ INVOKING ─▶ SUCCEEDED | FAILED ─▶ CLEANED_UP
//! ```
//!
//! 1. [`SpecSource::parse`] trims and classifies the raw value.
//! 2. [`InputSource::prepare`] stages local files as `openapi.yaml` in a
//!    fresh directory; URLs pass through untouched.
//! 3. [`Invocation::compose`] builds the fixed mounts (project, templates,
//!    config), the optional staging mount, and the generator arguments.
//! 4. [`execute`] runs it with stdout discarded and waits.
//! 5. The staging directory is removed whether or not the generator succeeded.
//!
//! ## Composed command
//!
//! ```bash
//! docker run --rm \
//!     -v <root>/client:/project \
//!     -v <root>/tools/client_generator/templates:/templates \
//!     -v <root>/tools/client_generator/config.json:/config.json \
//!     -v <staging>:/openapi \
//!     openapitools/openapi-generator-cli:v7.3.0 generate \
//!     -g python -t /templates -c /config.json -o /project \
//!     -i /openapi/openapi.yaml --library asyncio
//! ```
//!
//! The staging mount appears only for local files, `--library asyncio` only
//! for [`Mode::Async`].
//!
//! ## Concurrency
//!
//! None. Two runs against the same output directory are not coordinated and
//! may interleave their writes.

mod command;
mod execute;
mod signal;

pub use command::{
    generator_args, mounts, InputSource, Invocation, Mode, Mount, ASYNC_LIBRARY,
    CONTAINER_CONFIG_PATH, CONTAINER_PROJECT_DIR, CONTAINER_STAGING_DIR, CONTAINER_TEMPLATES_DIR,
    GENERATOR_KIND,
};
pub use execute::execute;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::source::SpecSource;
use std::path::PathBuf;
use tracing::{info, warn};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The generator succeeded; the client is in `output`
    Generated { output: PathBuf },
    /// Nothing was executed; `command_line` is what would have run
    DryRun { command_line: String },
}

/// Generate a client from `source` (path or URL) in the given mode.
///
/// # Errors
///
/// - [`GenerateError::EmptySource`] for blank input (nothing is staged)
/// - [`GenerateError::Staging`] if a local file can't be copied
/// - [`GenerateError::RuntimeUnavailable`] if the container runtime can't be spawned
/// - [`GenerateError::GeneratorFailed`] on a non-zero exit
/// - [`GenerateError::Interrupted`] on SIGINT/SIGTERM during the wait
pub fn run(config: &GeneratorConfig, source: &str, mode: Mode) -> Result<Outcome, GenerateError> {
    run_with(config, source, mode, false)
}

/// Stage and compose as [`run`] would, but execute nothing.
pub fn dry_run(
    config: &GeneratorConfig,
    source: &str,
    mode: Mode,
) -> Result<Outcome, GenerateError> {
    run_with(config, source, mode, true)
}

fn run_with(
    config: &GeneratorConfig,
    source: &str,
    mode: Mode,
    dry_run: bool,
) -> Result<Outcome, GenerateError> {
    let source = SpecSource::parse(source)?;
    let input = InputSource::prepare(&source)?;
    let invocation = Invocation::compose(config, &input, mode);

    let result = if dry_run {
        Ok(Outcome::DryRun {
            command_line: invocation.command_line(),
        })
    } else {
        info!(
            %source,
            remote = source.is_remote(),
            ?mode,
            image = %config.image,
            output = %config.client_dir.display(),
            "generating python client"
        );
        execute(&invocation).map(|()| Outcome::Generated {
            output: config.client_dir.clone(),
        })
    };

    if let Err(e) = input.finish() {
        warn!(error = %e, "failed to remove staging directory");
    }
    result
}
