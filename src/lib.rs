//! # pyclient-gen
//!
//! Generates a Python API client from an OpenAPI document by running the
//! containerized [`openapi-generator`](https://openapi-generator.tech) once,
//! with fixed mounts and flags.
//!
//! ## Architecture
//!
//! - **[`source`]** - classify the input as URL or local path
//! - **[`staging`]** - copy a local spec into a self-deleting directory as `openapi.yaml`
//! - **[`invoker`]** - compose and run the container invocation
//! - **[`config`]** - installation root, host paths, image and runtime
//! - **[`error`]** - failure taxonomy and exit codes
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - `clap` front end
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(pyclient-gen)
//!     participant Source as source::SpecSource
//!     participant Staging as staging::StagedSpec
//!     participant Invoker as invoker::Invocation
//!     participant Docker as docker run
//!
//!     User->>CLI: pyclient-gen ./openapi.yaml --asyncio
//!     CLI->>Source: parse("./openapi.yaml")
//!     Source-->>CLI: File(path)
//!     CLI->>Staging: stage(path)
//!     Staging-->>CLI: <tmp>/openapi.yaml
//!     CLI->>Invoker: compose(config, Local, Async)
//!     Invoker->>Docker: run --rm -v ... generate -g python ... --library asyncio
//!     Docker-->>Invoker: exit status
//!     Invoker-->>CLI: Outcome / GenerateError
//!     CLI->>Staging: drop (remove <tmp>)
//!     CLI-->>User: Successfully finished / Error
//! ```
//!
//! ## Programmatic usage
//!
//! ```rust,no_run
//! use pyclient_gen::config::GeneratorConfig;
//! use pyclient_gen::invoker::{self, Mode};
//!
//! let config = GeneratorConfig::from_root("/srv/my-api");
//! invoker::run(&config, "https://example.com/openapi.yaml", Mode::Async)?;
//! # Ok::<(), pyclient_gen::error::GenerateError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod source;
pub mod staging;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use invoker::{run, Mode, Outcome};
pub use source::SpecSource;
