//! Staging of local specification files.
//!
//! The generator container cannot see arbitrary host paths, so a local spec is
//! copied into a fresh scratch directory under the fixed name `openapi.yaml`
//! and that directory is bind-mounted into the container.
//!
//! [`StagedSpec`] owns the directory through [`tempfile::TempDir`]. Dropping it
//! removes the directory and its contents, so cleanup happens on every exit
//! path that unwinds the run: success, generator failure, interruption.

use crate::error::GenerateError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// File name the staged spec is stored under
pub const STAGED_FILE_NAME: &str = "openapi.yaml";

/// Prefix for staging directories created in the system temp dir
const STAGING_PREFIX: &str = "pyclient-gen-";

/// A local spec copied into a private, self-deleting directory
#[derive(Debug)]
pub struct StagedSpec {
    dir: TempDir,
}

impl StagedSpec {
    /// Create a fresh staging directory in the system temp dir and copy `source` into it.
    pub fn stage(source: &Path) -> Result<Self, GenerateError> {
        Self::stage_in(&std::env::temp_dir(), source)
    }

    /// Same as [`StagedSpec::stage`] but under an explicit parent directory.
    pub fn stage_in(parent: &Path, source: &Path) -> Result<Self, GenerateError> {
        let staging_err = |err| GenerateError::Staging {
            path: source.to_path_buf(),
            source: err,
        };

        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)
            .map_err(staging_err)?;
        let staged = Self { dir };
        let target = staged.file();
        let bytes = fs::copy(source, &target).map_err(staging_err)?;
        debug!(
            source = %source.display(),
            staged = %target.display(),
            bytes,
            "staged local specification"
        );
        Ok(staged)
    }

    /// Host directory to bind-mount into the container
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Host path of the staged copy
    pub fn file(&self) -> PathBuf {
        self.dir.path().join(STAGED_FILE_NAME)
    }

    /// Remove the staging directory now, reporting any I/O error.
    ///
    /// Dropping does the same but swallows the error.
    pub fn close(self) -> std::io::Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!(staging = %path.display(), "removed staging directory");
        Ok(())
    }
}
