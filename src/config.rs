//! # Generator Configuration
//!
//! [`GeneratorConfig`] is the explicit configuration record every run is handed.
//! It is resolved once in the binary and threaded through; nothing in the
//! library reads ambient global state.
//!
//! ## Layout
//!
//! All host paths hang off an installation root (default: the current
//! working directory):
//!
//! ```text
//! <root>/
//! ├── client/                                   # generated client lands here
//! └── tools/client_generator/
//!     ├── templates/                            # custom generator templates
//!     ├── config.json                           # generator config file
//!     └── client-generator.toml                 # optional settings (below)
//! ```
//!
//! The paths are passed through to the container runtime as bind mounts; they
//! are not created or validated here.
//!
//! ## Resolution order
//!
//! 1. CLI flags (`--root`, `--image`)
//! 2. Environment (`PYGEN_ROOT`, `PYGEN_IMAGE`, `PYGEN_CONTAINER_BIN`)
//! 3. Settings file (`client-generator.toml`)
//! 4. Built-in defaults
//!
//! ## Settings file
//!
//! ```toml
//! image = "openapitools/openapi-generator-cli:v7.3.0"
//! runtime = "podman"
//! client_dir = "sdk/python"
//! templates_dir = "tools/client_generator/templates"
//! config_path = "tools/client_generator/config.json"
//! ```
//!
//! Relative paths are resolved against the root. Every key is optional.

use crate::error::GenerateError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default generator image (pinned)
pub const DEFAULT_IMAGE: &str = "openapitools/openapi-generator-cli:v7.3.0";
/// Default container runtime binary
pub const DEFAULT_RUNTIME: &str = "docker";
/// Environment override for the container runtime binary
pub const RUNTIME_ENV: &str = "PYGEN_CONTAINER_BIN";

/// Output directory, relative to the root
pub const CLIENT_DIR: &str = "client";
/// Generator tool directory, relative to the root
pub const TOOL_DIR: &str = "tools/client_generator";
/// Settings file name inside [`TOOL_DIR`]
pub const SETTINGS_FILE: &str = "client-generator.toml";

/// Resolved configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Installation root everything else is relative to
    pub root: PathBuf,
    /// Host directory the generated client is written into
    pub client_dir: PathBuf,
    /// Host directory holding custom templates
    pub templates_dir: PathBuf,
    /// Host path of the generator's JSON config
    pub config_path: PathBuf,
    /// Generator container image reference
    pub image: String,
    /// Container runtime binary (`docker`, `podman`, or a path)
    pub runtime: String,
}

/// On-disk settings; every field optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub image: Option<String>,
    pub runtime: Option<String>,
    pub client_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Default layout under `root`.
    ///
    /// A relative root is made absolute against the current directory so the
    /// bind-mount sources handed to the runtime are absolute.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = absolutize(root.as_ref());
        let tool_dir = root.join(TOOL_DIR);
        Self {
            client_dir: root.join(CLIENT_DIR),
            templates_dir: tool_dir.join("templates"),
            config_path: tool_dir.join("config.json"),
            image: DEFAULT_IMAGE.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
            root,
        }
    }

    /// Default location of the settings file for this root
    pub fn default_settings_path(&self) -> PathBuf {
        self.root.join(TOOL_DIR).join(SETTINGS_FILE)
    }

    /// Overlay settings onto this config. Relative paths resolve against the root.
    pub fn apply_settings(&mut self, settings: Settings) {
        if let Some(image) = settings.image {
            self.image = image;
        }
        if let Some(runtime) = settings.runtime {
            self.runtime = runtime;
        }
        if let Some(dir) = settings.client_dir {
            self.client_dir = self.root.join(dir);
        }
        if let Some(dir) = settings.templates_dir {
            self.templates_dir = self.root.join(dir);
        }
        if let Some(path) = settings.config_path {
            self.config_path = self.root.join(path);
        }
    }

    /// Resolve the full configuration.
    ///
    /// `root` and `image` are the already-merged CLI/env values (clap handles
    /// `PYGEN_ROOT` / `PYGEN_IMAGE`). `settings_path` overrides the default
    /// settings location; an explicitly named file must exist.
    pub fn resolve(
        root: Option<&Path>,
        image: Option<&str>,
        settings_path: Option<&Path>,
    ) -> Result<Self, GenerateError> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir().map_err(|e| GenerateError::Settings {
                path: PathBuf::from("."),
                message: format!("cannot determine current directory: {e}"),
            })?,
        };
        let mut config = Self::from_root(root);

        let settings = match settings_path {
            Some(path) => Some(load_settings(path)?.ok_or_else(|| GenerateError::Settings {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            })?),
            None => load_settings(&config.default_settings_path())?,
        };
        if let Some(settings) = settings {
            config.apply_settings(settings);
        }

        if let Ok(runtime) = std::env::var(RUNTIME_ENV) {
            if !runtime.trim().is_empty() {
                config.runtime = runtime;
            }
        }
        if let Some(image) = image {
            config.image = image.to_string();
        }
        Ok(config)
    }
}

/// Load a settings file.
///
/// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
/// cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<Option<Settings>, GenerateError> {
    if !path.exists() {
        return Ok(None);
    }
    let settings_err = |message: String| GenerateError::Settings {
        path: path.to_path_buf(),
        message,
    };
    let contents = std::fs::read_to_string(path).map_err(|e| settings_err(e.to_string()))?;
    let settings: Settings = toml::from_str(&contents).map_err(|e| settings_err(e.to_string()))?;
    Ok(Some(settings))
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
