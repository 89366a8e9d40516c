//! Error taxonomy for a generation run.
//!
//! Every failure a run can hit is a [`GenerateError`]. The binary maps each
//! variant onto a process exit code with [`GenerateError::exit_code`]:
//!
//! | Variant | Exit code |
//! |---------|-----------|
//! | `GeneratorFailed`, `RuntimeUnavailable` | `1` |
//! | `EmptySource`, `Staging`, `Settings` | `2` |
//! | `Interrupted` | `130` |

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code when the generator (or the tooling needed to start it) failed.
pub const EXIT_GENERATOR_FAILED: u8 = 1;
/// Exit code for invalid input: bad source, unreadable file, bad settings.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code when the run was interrupted by SIGINT/SIGTERM.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Errors produced while staging, composing or running a generator invocation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The specification source was empty after trimming whitespace
    #[error("input specification must be a non-empty file path or URL")]
    EmptySource,

    /// The local specification could not be copied into the staging directory
    #[error("failed to stage {}: {source}", path.display())]
    Staging {
        /// Local path the caller supplied
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The settings file exists but could not be read or parsed
    #[error("invalid settings file {}: {message}", path.display())]
    Settings {
        /// Settings file path
        path: PathBuf,
        /// Parser or I/O diagnostic
        message: String,
    },

    /// The container runtime binary could not be spawned at all
    #[error("container runtime `{runtime}` is unavailable: {source}")]
    RuntimeUnavailable {
        /// Runtime binary that was invoked (e.g. `docker`)
        runtime: String,
        #[source]
        source: io::Error,
    },

    /// The generator container ran and exited non-zero
    #[error("generator invocation failed ({status})")]
    GeneratorFailed {
        /// Exit status reported by the container runtime
        status: ExitStatus,
    },

    /// A termination signal arrived while waiting for the generator
    #[error("interrupted while waiting for the generator")]
    Interrupted,
}

impl GenerateError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::GeneratorFailed { .. } | GenerateError::RuntimeUnavailable { .. } => {
                EXIT_GENERATOR_FAILED
            }
            GenerateError::EmptySource
            | GenerateError::Staging { .. }
            | GenerateError::Settings { .. } => EXIT_INVALID_INPUT,
            GenerateError::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(GenerateError::EmptySource.exit_code(), EXIT_INVALID_INPUT);
        assert_eq!(GenerateError::Interrupted.exit_code(), EXIT_INTERRUPTED);
        let unavailable = GenerateError::RuntimeUnavailable {
            runtime: "docker".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(unavailable.exit_code(), EXIT_GENERATOR_FAILED);
        let staging = GenerateError::Staging {
            path: PathBuf::from("missing.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(staging.exit_code(), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_messages_name_the_culprit() {
        let err = GenerateError::Staging {
            path: PathBuf::from("specs/missing.yaml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("specs/missing.yaml"));

        let err = GenerateError::RuntimeUnavailable {
            runtime: "podman".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("`podman`"));
    }
}
