use crate::error::Result;
use crate::executor::{CommandExecutor, LaunchMode, RealCommandExecutor};
use crate::invocation::{Invocation, InvocationResult};
use crate::render::render_equation;
use log::debug;
use std::path::{Path, PathBuf};

/// Runs invocations against one dirac executable.
///
/// Holds no state between runs: each call to [`run`](Self::run) spawns one
/// process, waits for it and renders its output.
#[derive(Debug)]
pub struct DiracRunner {
    executable: PathBuf,
    launch_mode: LaunchMode,
    executor: Box<dyn CommandExecutor>,
}

impl DiracRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self::with_executor(executable, Box::new(RealCommandExecutor))
    }

    /// Creates a runner with a custom executor (for testing).
    pub fn with_executor(executable: impl Into<PathBuf>, executor: Box<dyn CommandExecutor>) -> Self {
        Self {
            executable: executable.into(),
            launch_mode: LaunchMode::default(),
            executor,
        }
    }

    pub fn with_launch_mode(mut self, launch_mode: LaunchMode) -> Self {
        self.launch_mode = launch_mode;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn launch_mode(&self) -> LaunchMode {
        self.launch_mode
    }

    /// Runs dirac for `invocation` and renders the result.
    ///
    /// A non-zero exit status is reported through
    /// [`InvocationResult::exit_succeeded`] and rendered as verbatim text.
    ///
    /// # Errors
    ///
    /// Only if the process (or the shell) could not be launched.
    pub fn run(&self, invocation: &Invocation) -> Result<InvocationResult> {
        let output = match self.launch_mode {
            LaunchMode::Shell => {
                let line = invocation.command_line(&self.executable);
                debug!("Running `{}`", line);
                let (shell, flag) = LaunchMode::shell();
                self.executor.execute(Path::new(shell), &[flag, line.as_str()])?
            }
            LaunchMode::Direct => {
                let args = invocation.arguments();
                debug!("Running {:?} {:?}", self.executable, args);
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                self.executor.execute(&self.executable, &args)?
            }
        };

        let raw_output = String::from_utf8_lossy(&output.stdout).into_owned();
        let exit_succeeded = output.status.success();
        let rendered_equation = render_equation(
            invocation.display_lhs(),
            &raw_output,
            invocation.line_length(),
            exit_succeeded,
        );

        Ok(InvocationResult {
            raw_output,
            exit_succeeded,
            exit_code: output.status.code(),
            rendered_equation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::MockCommandExecutor;
    use std::sync::Arc;

    /// Lets a test keep a handle on the mock after the runner takes ownership.
    #[derive(Debug)]
    struct Shared(Arc<MockCommandExecutor>);

    impl CommandExecutor for Shared {
        fn execute(&self, program: &Path, args: &[&str]) -> Result<std::process::Output> {
            self.0.execute(program, args)
        }
    }

    fn runner(stdout: &str, code: i32) -> (DiracRunner, Arc<MockCommandExecutor>) {
        let mock = Arc::new(MockCommandExecutor::new(stdout, code));
        let runner = DiracRunner::with_executor("/opt/dirac", Box::new(Shared(mock.clone())));
        (runner, mock)
    }

    #[test]
    fn test_failed_run_scenario() {
        let (runner, _) = runner("parse error\n", 1);
        let result = runner.run(&Invocation::new("Invalid input", "foo")).unwrap();
        assert!(!result.exit_succeeded);
        assert_eq!(result.exit_code, Some(1));
        assert_eq!(result.raw_output, "parse error\n");
        assert_eq!(
            result.rendered_equation,
            "\\begin{equation}\nfoo = \\verb|parse error|\n\\end{equation}"
        );
    }

    #[test]
    fn test_successful_run_scenario() {
        let (runner, _) = runner("g^{\\mu\\nu}\n", 0);
        let inv = Invocation::new("", r"\gamma^\mu\gamma^\nu");
        let result = runner.run(&inv).unwrap();
        assert!(result.exit_succeeded);
        assert_eq!(
            result.rendered_equation,
            "\\begin{equation}\n\\gamma^\\mu\\gamma^\\nu = g^{\\mu\\nu}\n\\end{equation}"
        );

        let result = runner.run(&inv.with_line_length(4)).unwrap();
        assert_eq!(
            result.rendered_equation,
            "\\begin{equation}\n\\begin{split}\n\\gamma^\\mu\\gamma^\\nu = g^{\\mu\\nu}\n\\end{split}\n\\end{equation}"
        );
    }

    #[test]
    fn test_explicit_lhs_is_rendered() {
        let (runner, _) = runner("-\\gamma^5\\gamma^\\mu", 0);
        let inv = Invocation::new("", r"\gamma^\mu\gamma5").with_lhs(r"\gamma^\mu\gamma^5");
        let result = runner.run(&inv).unwrap();
        assert!(result
            .rendered_equation
            .contains(r"\gamma^\mu\gamma^5 = -\gamma^5\gamma^\mu"));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_mode_passes_command_line_to_sh() {
        let (runner, mock) = runner("1", 0);
        runner
            .run(&Invocation::new("", "x").with_line_length(2))
            .unwrap();
        let calls = mock.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("sh"));
        assert_eq!(calls[0].1, vec!["-c", r#"/opt/dirac -e "x" -l 2"#]);
    }

    #[test]
    fn test_direct_mode_passes_argv_to_executable() {
        let (runner, mock) = runner("1", 0);
        let runner = runner.with_launch_mode(LaunchMode::Direct);
        runner
            .run(&Invocation::new("", r#"a "quoted" b"#).with_dummy("k"))
            .unwrap();
        let calls = mock.recorded();
        assert_eq!(calls[0].0, PathBuf::from("/opt/dirac"));
        assert_eq!(calls[0].1, vec!["-e", r#"a "quoted" b"#, "-d", "k"]);
    }

    #[test]
    fn test_each_run_spawns_once() {
        let (runner, mock) = runner("1", 0);
        let inv = Invocation::new("", "x");
        runner.run(&inv).unwrap();
        runner.run(&inv).unwrap();
        assert_eq!(mock.recorded().len(), 2);
    }
}
