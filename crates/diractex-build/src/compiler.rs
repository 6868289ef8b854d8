use crate::document::TexTarget;
use anyhow::{Context, Result};
use log::{info, warn};
use std::process::Command;

/// Outcome of the final typesetting step. None of these stop the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypesetOutcome {
    Completed,
    /// The engine ran and exited unsuccessfully (`None` if killed by a signal).
    Failed(Option<i32>),
    /// The engine is not on `PATH`.
    EngineMissing,
}

/// Runs an external TeX engine on a generated document.
#[derive(Debug, Clone)]
pub struct Typesetter {
    pub engine: String, // e.g., "pdflatex", "xelatex"
    pub extra_args: Vec<String>,
}

impl Default for Typesetter {
    fn default() -> Self {
        Self::new("pdflatex")
    }
}

impl Typesetter {
    pub fn new(engine: &str) -> Self {
        Self {
            engine: engine.to_string(),
            extra_args: vec!["-halt-on-error".to_string()],
        }
    }

    /// The command as shown to the user, e.g. `pdflatex -halt-on-error tests`.
    pub fn command_line(&self, target: &TexTarget) -> String {
        let mut parts = vec![self.engine.as_str()];
        parts.extend(self.extra_args.iter().map(String::as_str));
        parts.push(&target.job_name);
        parts.join(" ")
    }

    /// Runs the engine on `target.job_name` inside `target.dir`.
    ///
    /// The engine's own output goes straight to the terminal. A failed run is
    /// only logged.
    pub fn typeset(&self, target: &TexTarget) -> Result<TypesetOutcome> {
        let engine = match which::which(&self.engine) {
            Ok(path) => path,
            Err(_) => {
                warn!("{} not found in PATH, skipping typesetting", self.engine);
                return Ok(TypesetOutcome::EngineMissing);
            }
        };

        info!("Running {}...", self.command_line(target));

        let status = Command::new(&engine)
            .args(&self.extra_args)
            .arg(&target.job_name)
            .current_dir(&target.dir)
            .status()
            .with_context(|| format!("Failed to spawn {}", self.engine))?;

        if status.success() {
            Ok(TypesetOutcome::Completed)
        } else {
            warn!("{} exited with {}", self.engine, status);
            Ok(TypesetOutcome::Failed(status.code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_line() {
        let target = TexTarget::from_name("tests.tex");
        assert_eq!(
            Typesetter::default().command_line(&target),
            "pdflatex -halt-on-error tests"
        );
    }

    #[test]
    fn test_custom_engine_keeps_halt_on_error() {
        let target = TexTarget::from_name("fierz6");
        assert_eq!(
            Typesetter::new("xelatex").command_line(&target),
            "xelatex -halt-on-error fierz6"
        );
    }

    #[test]
    fn test_missing_engine_is_skipped() {
        let target = TexTarget::from_name("tests");
        let outcome = Typesetter::new("definitely-not-a-tex-engine")
            .typeset(&target)
            .unwrap();
        assert_eq!(outcome, TypesetOutcome::EngineMissing);
    }

    #[cfg(unix)]
    #[test]
    fn test_engine_exit_status_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = TexTarget::in_dir(dir.path(), "tests");

        let outcome = Typesetter::new("true").typeset(&target).unwrap();
        assert_eq!(outcome, TypesetOutcome::Completed);

        let outcome = Typesetter::new("false").typeset(&target).unwrap();
        assert_eq!(outcome, TypesetOutcome::Failed(Some(1)));
    }
}
