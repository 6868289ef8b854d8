//! Process execution seam.
//!
//! Every dirac run goes through a [`CommandExecutor`], so the formatting logic
//! can be exercised without a dirac build on the machine:
//!
//! - **Production**: [`RealCommandExecutor`] uses `std::process::Command`
//! - **Testing**: `MockCommandExecutor` returns pre-configured outputs and
//!   records what it was asked to run
//!
//! [`LaunchMode`] decides whether the command line goes through the platform
//! shell (the historical behaviour) or straight to the executable.

use crate::error::{InvokeError, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Trait for executing system commands.
/// This allows us to mock `std::process::Command` in tests.
pub trait CommandExecutor: Send + Sync + std::fmt::Debug {
    /// Executes `program` with `args` and waits for it to finish.
    ///
    /// # Returns
    ///
    /// The output of the command (stdout and exit status).
    ///
    /// # Errors
    ///
    /// [`InvokeError::Launch`] if the process could not be started. A process
    /// that starts and exits with a failure status is still `Ok`.
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output>;
}

/// Default implementation of [`CommandExecutor`] using `std::process::Command`.
///
/// stdout is captured; stderr goes straight to the terminal.
#[derive(Debug, Default)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| InvokeError::Launch {
                program: program.to_path_buf(),
                source,
            })
    }
}

/// How a dirac command is handed to the operating system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LaunchMode {
    /// Run the full command line through `sh -c` (`cmd /C` on Windows).
    ///
    /// The expression is only protected by the surrounding double quotes, so
    /// an expression containing `"`, `$` or backticks is interpreted by the
    /// shell. Only use this mode with trusted input.
    #[default]
    Shell,
    /// Spawn the executable directly with one argument per flag value.
    Direct,
}

impl LaunchMode {
    /// The shell program and the flag that makes it read a command string.
    pub(crate) fn shell() -> (&'static str, &'static str) {
        if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        }
    }
}

/// A mocked executor for testing that doesn't actually run system commands.
///
/// Every call is recorded so tests can assert on the exact program and
/// arguments that would have been launched.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockCommandExecutor {
    /// The string to return as standard output.
    pub stdout: String,
    /// The exit code to simulate (0 for success).
    pub status_code: i32,
    /// Calls received so far, as `(program, args)`.
    pub calls: std::sync::Mutex<Vec<(std::path::PathBuf, Vec<String>)>>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new(stdout: &str, status_code: i32) -> Self {
        Self {
            stdout: stdout.to_string(),
            status_code,
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<(std::path::PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl CommandExecutor for MockCommandExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output> {
        self.calls.lock().unwrap().push((
            program.to_path_buf(),
            args.iter().map(|a| a.to_string()).collect(),
        ));

        #[cfg(unix)]
        let status = {
            use std::os::unix::process::ExitStatusExt;
            std::process::ExitStatus::from_raw(self.status_code << 8)
        };
        #[cfg(windows)]
        let status = {
            use std::os::windows::process::ExitStatusExt;
            std::process::ExitStatus::from_raw(self.status_code as u32)
        };

        Ok(Output {
            status,
            stdout: self.stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_mode_defaults_to_shell() {
        assert_eq!(LaunchMode::default(), LaunchMode::Shell);
    }

    #[test]
    fn test_real_executor_reports_missing_program() {
        let err = RealCommandExecutor
            .execute(Path::new("/definitely/not/a/dirac/binary"), &[])
            .unwrap_err();
        assert!(matches!(err, InvokeError::Launch { .. }));
        assert!(err.to_string().contains("failed to launch"));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_executor_captures_stdout_and_status() {
        let output = RealCommandExecutor
            .execute(Path::new("sh"), &["-c", "echo hello; exit 3"])
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "hello\n");
        assert_eq!(output.status.code(), Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn test_real_executor_leaves_stderr_uncaptured() {
        let output = RealCommandExecutor
            .execute(Path::new("sh"), &["-c", "echo out; echo diag >&2; exit 1"])
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "out\n");
        assert!(output.stderr.is_empty());
        assert!(!output.status.success());
    }

    #[test]
    fn test_mock_executor_records_calls() {
        let mock = MockCommandExecutor::new("out", 0);
        let output = mock.execute(Path::new("dirac"), &["-e", "x"]).unwrap();
        assert!(output.status.success());
        assert_eq!(
            mock.recorded(),
            vec![(
                std::path::PathBuf::from("dirac"),
                vec!["-e".to_string(), "x".to_string()]
            )]
        );
    }
}
