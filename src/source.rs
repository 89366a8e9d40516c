//! Classification of the specification source the caller passes on the command line.
//!
//! A source is either a URL (handed to the generator untouched) or a local file
//! path (staged into a scratch directory first, see [`crate::staging`]). The
//! classification is purely lexical: anything starting with `http://` or
//! `https://` is a URL, everything else is a path. Paths are not checked for
//! existence here; a missing file surfaces when staging copies it.

use crate::error::GenerateError;
use std::fmt;
use std::path::PathBuf;

const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Where the OpenAPI document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    /// Remote document, passed to the generator as-is
    Url(String),
    /// Local document, staged before invocation
    File(PathBuf),
}

impl SpecSource {
    /// Parse a raw command-line value.
    ///
    /// Surrounding whitespace is trimmed. Returns [`GenerateError::EmptySource`]
    /// if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, GenerateError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(GenerateError::EmptySource);
        }
        if is_url(value) {
            Ok(SpecSource::Url(value.to_string()))
        } else {
            Ok(SpecSource::File(PathBuf::from(value)))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SpecSource::Url(_))
    }
}

impl fmt::Display for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecSource::Url(url) => write!(f, "{url}"),
            SpecSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// True if `value` starts with `http://` or `https://`
pub fn is_url(value: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| value.starts_with(prefix))
}
