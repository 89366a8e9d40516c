use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::source::SpecSource;
use crate::staging::{StagedSpec, STAGED_FILE_NAME};
use std::path::PathBuf;
use std::process::Command;

/// In-container output directory
pub const CONTAINER_PROJECT_DIR: &str = "/project";
/// In-container templates directory
pub const CONTAINER_TEMPLATES_DIR: &str = "/templates";
/// In-container generator config file
pub const CONTAINER_CONFIG_PATH: &str = "/config.json";
/// In-container mount point of the staging directory
pub const CONTAINER_STAGING_DIR: &str = "/openapi";

/// Generator target language
pub const GENERATOR_KIND: &str = "python";
/// Library variant selected for asynchronous clients
pub const ASYNC_LIBRARY: &str = "asyncio";

/// Which flavour of Python client to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Generator's default (synchronous) library
    #[default]
    Sync,
    /// `--library asyncio`
    Async,
}

impl Mode {
    pub fn from_asyncio_flag(asyncio: bool) -> Self {
        if asyncio {
            Mode::Async
        } else {
            Mode::Sync
        }
    }
}

/// A host path bound to a fixed path inside the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    pub host: PathBuf,
    pub container: &'static str,
}

impl Mount {
    pub fn new(host: impl Into<PathBuf>, container: &'static str) -> Self {
        Self {
            host: host.into(),
            container,
        }
    }

    /// `-v` argument value: `<host>:<container>`
    pub fn volume_arg(&self) -> String {
        format!("{}:{}", self.host.display(), self.container)
    }
}

/// The generator's input, ready to be referenced from inside the container
#[derive(Debug)]
pub enum InputSource {
    /// URL handed to the generator unchanged; needs no mount
    Remote(String),
    /// Local file staged into a private directory that gets mounted
    Local(StagedSpec),
}

impl InputSource {
    /// Stage the source if it is a local file.
    pub fn prepare(source: &SpecSource) -> Result<Self, GenerateError> {
        match source {
            SpecSource::Url(url) => Ok(InputSource::Remote(url.clone())),
            SpecSource::File(path) => StagedSpec::stage(path).map(InputSource::Local),
        }
    }

    /// What the generator's `-i` flag receives
    pub fn reference(&self) -> String {
        match self {
            InputSource::Remote(url) => url.clone(),
            InputSource::Local(_) => format!("{CONTAINER_STAGING_DIR}/{STAGED_FILE_NAME}"),
        }
    }

    /// Extra mount this input needs, if any
    pub fn mount(&self) -> Option<Mount> {
        match self {
            InputSource::Remote(_) => None,
            InputSource::Local(staged) => Some(Mount::new(staged.dir(), CONTAINER_STAGING_DIR)),
        }
    }

    /// Release the staging directory, if there is one.
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            InputSource::Remote(_) => Ok(()),
            InputSource::Local(staged) => staged.close(),
        }
    }
}

/// One fully composed container runtime invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Container runtime binary
    pub program: String,
    /// Everything after the program name
    pub args: Vec<String>,
}

impl Invocation {
    /// Compose `<runtime> run --rm -v ... <image> generate ...`.
    pub fn compose(config: &GeneratorConfig, input: &InputSource, mode: Mode) -> Self {
        let mut args = vec!["run".to_string(), "--rm".to_string()];
        for mount in mounts(config, input) {
            args.push("-v".to_string());
            args.push(mount.volume_arg());
        }
        args.push(config.image.clone());
        args.extend(generator_args(&input.reference(), mode));

        Self {
            program: config.runtime.clone(),
            args,
        }
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Shell-style rendering for `--dry-run` and logs
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fixed mounts (project, templates, config) followed by the input's own mount.
pub fn mounts(config: &GeneratorConfig, input: &InputSource) -> Vec<Mount> {
    let mut mounts = vec![
        Mount::new(&config.client_dir, CONTAINER_PROJECT_DIR),
        Mount::new(&config.templates_dir, CONTAINER_TEMPLATES_DIR),
        Mount::new(&config.config_path, CONTAINER_CONFIG_PATH),
    ];
    mounts.extend(input.mount());
    mounts
}

/// Arguments passed to the generator itself (after the image name).
pub fn generator_args(input_reference: &str, mode: Mode) -> Vec<String> {
    let mut args: Vec<String> = [
        "generate",
        "-g",
        GENERATOR_KIND,
        "-t",
        CONTAINER_TEMPLATES_DIR,
        "-c",
        CONTAINER_CONFIG_PATH,
        "-o",
        CONTAINER_PROJECT_DIR,
        "-i",
        input_reference,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    if mode == Mode::Async {
        args.push("--library".to_string());
        args.push(ASYNC_LIBRARY.to_string());
    }
    args
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config() -> GeneratorConfig {
        GeneratorConfig::from_root("/opt/api")
    }

    #[test]
    fn test_remote_input_is_passed_through() {
        let input = InputSource::Remote("https://example.com/spec.yaml".to_string());
        assert_eq!(input.reference(), "https://example.com/spec.yaml");
        assert!(input.mount().is_none());
        assert_eq!(mounts(&config(), &input).len(), 3);
    }

    #[test]
    fn test_compose_remote_sync() {
        let input = InputSource::Remote("https://example.com/spec.yaml".to_string());
        let invocation = Invocation::compose(&config(), &input, Mode::Sync);
        assert_eq!(invocation.program, "docker");
        assert_eq!(
            invocation.args,
            vec![
                "run",
                "--rm",
                "-v",
                "/opt/api/client:/project",
                "-v",
                "/opt/api/tools/client_generator/templates:/templates",
                "-v",
                "/opt/api/tools/client_generator/config.json:/config.json",
                "openapitools/openapi-generator-cli:v7.3.0",
                "generate",
                "-g",
                "python",
                "-t",
                "/templates",
                "-c",
                "/config.json",
                "-o",
                "/project",
                "-i",
                "https://example.com/spec.yaml",
            ]
        );
    }

    #[test]
    fn test_compose_local_async() {
        let scratch = tempfile::tempdir().unwrap();
        let spec = scratch.path().join("spec.yaml");
        fs::write(&spec, "openapi: 3.0.0\n").unwrap();

        let input = InputSource::prepare(&SpecSource::File(spec)).unwrap();
        let staging_dir = match &input {
            InputSource::Local(staged) => staged.dir().to_path_buf(),
            InputSource::Remote(_) => panic!("expected local input"),
        };
        let invocation = Invocation::compose(&config(), &input, Mode::Async);

        let staging_volume = format!("{}:/openapi", staging_dir.display());
        let volume_pos = invocation
            .args
            .iter()
            .position(|a| *a == staging_volume)
            .expect("staging mount present");
        let image_pos = invocation
            .args
            .iter()
            .position(|a| a == "openapitools/openapi-generator-cli:v7.3.0")
            .unwrap();
        // The staging mount is the last runtime flag before the image
        assert_eq!(volume_pos + 1, image_pos);
        assert_eq!(invocation.args[volume_pos - 1], "-v");

        let tail = &invocation.args[invocation.args.len() - 4..];
        assert_eq!(tail, ["-i", "/openapi/openapi.yaml", "--library", "asyncio"]);

        input.finish().unwrap();
        assert!(!staging_dir.exists());
    }

    #[test]
    fn test_generator_args_mode() {
        let sync = generator_args("/openapi/openapi.yaml", Mode::Sync);
        assert!(!sync.iter().any(|a| a == "--library"));
        assert_eq!(sync.last().map(String::as_str), Some("/openapi/openapi.yaml"));

        let asyncio = generator_args("/openapi/openapi.yaml", Mode::Async);
        assert_eq!(asyncio.len(), sync.len() + 2);
        assert_eq!(&asyncio[sync.len()..], ["--library", "asyncio"]);
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(Mode::from_asyncio_flag(false), Mode::Sync);
        assert_eq!(Mode::from_asyncio_flag(true), Mode::Async);
        assert_eq!(Mode::default(), Mode::Sync);
    }

    #[test]
    fn test_command_line_quotes_odd_arguments() {
        let invocation = Invocation {
            program: "docker".to_string(),
            args: vec![
                "-v".to_string(),
                "/home/me/My Project/client:/project".to_string(),
                "-i".to_string(),
                "https://example.com/spec.yaml?v=1&x=it's".to_string(),
            ],
        };
        assert_eq!(
            invocation.command_line(),
            "docker -v '/home/me/My Project/client:/project' -i 'https://example.com/spec.yaml?v=1&x=it'\\''s'"
        );
    }
}
