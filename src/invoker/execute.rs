use super::command::Invocation;
use super::signal::InterruptGuard;
use crate::error::GenerateError;
use std::process::Stdio;
use tracing::{debug, info, warn};

/// Run the invocation to completion, blocking the caller.
///
/// Standard output of the container is discarded; standard error stays
/// attached so generator diagnostics reach the terminal. No timeout and no
/// retry: one non-zero exit is final.
pub fn execute(invocation: &Invocation) -> Result<(), GenerateError> {
    let guard = match InterruptGuard::install() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!(error = %e, "could not install signal handlers; interrupts will not clean up");
            None
        }
    };
    execute_guarded(invocation, guard.as_ref())
}

fn execute_guarded(
    invocation: &Invocation,
    guard: Option<&InterruptGuard>,
) -> Result<(), GenerateError> {
    let interrupted = || guard.is_some_and(InterruptGuard::triggered);

    // A signal that lands before the spawn would never reach the child.
    if interrupted() {
        warn!("interrupted before the generator started");
        return Err(GenerateError::Interrupted);
    }

    debug!(command = %invocation.command_line(), "spawning generator");
    let status = invocation
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .map_err(|source| GenerateError::RuntimeUnavailable {
            runtime: invocation.program.clone(),
            source,
        })?;

    if interrupted() {
        warn!(%status, "generator interrupted");
        return Err(GenerateError::Interrupted);
    }
    if !status.success() {
        return Err(GenerateError::GeneratorFailed { status });
    }
    info!(%status, "generator finished");
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_stub(dir: &Path, body: &str) -> String {
        let stub = dir.join("runtime-stub");
        fs::write(&stub, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&stub, perms).unwrap();
        stub.to_string_lossy().into_owned()
    }

    fn invocation(program: String) -> Invocation {
        Invocation {
            program,
            args: vec!["run".to_string(), "--rm".to_string()],
        }
    }

    #[test]
    fn test_execute_success() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "echo generated files\nexit 0");
        assert!(execute(&invocation(stub)).is_ok());
    }

    #[test]
    fn test_execute_nonzero_is_generator_failure() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "exit 3");
        let err = execute(&invocation(stub)).unwrap_err();
        match err {
            GenerateError::GeneratorFailed { status } => assert_eq!(status.code(), Some(3)),
            other => panic!("expected GeneratorFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_missing_runtime_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-runtime");
        let err = execute(&invocation(missing.to_string_lossy().into_owned())).unwrap_err();
        assert!(matches!(err, GenerateError::RuntimeUnavailable { .. }));
        assert_eq!(err.exit_code(), crate::error::EXIT_GENERATOR_FAILED);
    }

    #[test]
    fn test_pending_interrupt_skips_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("argv");
        let stub = write_stub(
            dir.path(),
            &format!("printf '%s\\n' \"$@\" > '{}'", record.display()),
        );
        let guard = InterruptGuard::install().unwrap();
        guard.trigger();

        let err = execute_guarded(&invocation(stub), Some(&guard)).unwrap_err();
        assert!(matches!(err, GenerateError::Interrupted));
        assert_eq!(err.exit_code(), crate::error::EXIT_INTERRUPTED);
        assert!(!record.exists());
    }

    #[test]
    fn test_execute_passes_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("argv");
        let stub = write_stub(
            dir.path(),
            &format!("printf '%s\\n' \"$@\" > '{}'", record.display()),
        );
        execute(&invocation(stub)).unwrap();
        assert_eq!(fs::read_to_string(&record).unwrap(), "run\n--rm\n");
    }
}
