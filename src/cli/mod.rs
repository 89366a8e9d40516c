//! # CLI Module
//!
//! Command-line surface of `pyclient-gen`.
//!
//! ## Usage
//!
//! ```bash
//! pyclient-gen <FILE|URL> [--asyncio] [--root DIR] [--image IMAGE]
//!              [--settings FILE] [--dry-run] [-v]
//! ```
//!
//! - `FILE|URL` - OpenAPI document; `http://` / `https://` values go to the
//!   generator unchanged, anything else is staged from disk
//! - `--asyncio` - generate the asyncio client library variant
//! - `--root` / `PYGEN_ROOT` - installation root (default: current directory)
//! - `--image` / `PYGEN_IMAGE` - override the pinned generator image
//! - `--settings` - explicit settings file
//! - `--dry-run` - print the composed container command and exit
//!
//! ## Exit codes
//!
//! `0` success, `1` generator failed or container runtime unavailable,
//! `2` invalid input, `130` interrupted.
//!
//! ## Examples
//!
//! ```bash
//! # Synchronous client from a local spec
//! pyclient-gen ./openapi.yaml
//!
//! # Asyncio client from a running service
//! pyclient-gen https://api.example.com/openapi.json --asyncio
//! ```

mod commands;


pub use commands::{report, run_cli, Cli};
