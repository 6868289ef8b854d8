use crate::error::Result;
use crate::runner::DiracRunner;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Arithmetic mode requested from dirac with `-m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Float,
    Rational,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Float => f.write_str("float"),
            Mode::Rational => f.write_str("rational"),
        }
    }
}

/// One call to the dirac executable together with how its result is displayed.
///
/// Built once (usually from static suite data), turned into exactly one
/// command, run once. There are no setters: the `with_*` methods consume the
/// value and are meant to be chained right after [`Invocation::new`].
///
/// ```
/// use diractex_core::{Invocation, Mode};
/// use std::path::Path;
///
/// let inv = Invocation::new("Two gammas", r"\gamma^\mu\gamma^\nu")
///     .with_line_length(4)
///     .with_mode(Mode::Rational);
///
/// assert_eq!(
///     inv.command_line(Path::new("/opt/dirac")),
///     r#"/opt/dirac -e "\gamma^\mu\gamma^\nu" -l 4 -m rational"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Invocation {
    #[serde(default)]
    description: String,
    expression: String,
    /// Terms per output line; 0 leaves wrapping to dirac.
    #[serde(default)]
    line_length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lhs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dummy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    apply_symmetry: Option<bool>,
}

impl Invocation {
    pub fn new(description: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            expression: expression.into(),
            line_length: 0,
            lhs: None,
            mode: None,
            dummy: None,
            apply_symmetry: None,
        }
    }

    pub fn with_line_length(mut self, line_length: u32) -> Self {
        self.line_length = line_length;
        self
    }

    /// Sets the left-hand side shown in the document instead of the raw expression.
    pub fn with_lhs(mut self, lhs: impl Into<String>) -> Self {
        self.lhs = Some(lhs.into());
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the name dirac uses for generated dummy indices (`-d`).
    pub fn with_dummy(mut self, dummy: impl Into<String>) -> Self {
        self.dummy = Some(dummy.into());
        self
    }

    pub fn with_apply_symmetry(mut self, apply_symmetry: bool) -> Self {
        self.apply_symmetry = Some(apply_symmetry);
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn line_length(&self) -> u32 {
        self.line_length
    }

    pub fn lhs(&self) -> Option<&str> {
        self.lhs.as_deref()
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn dummy(&self) -> Option<&str> {
        self.dummy.as_deref()
    }

    pub fn apply_symmetry(&self) -> Option<bool> {
        self.apply_symmetry
    }

    /// Left-hand side of the rendered equation: the explicit `lhs`, or the expression.
    pub fn display_lhs(&self) -> &str {
        self.lhs.as_deref().unwrap_or(&self.expression)
    }

    /// Optional flags after `-e`, in their fixed order `-l`, `-m`, `-d`, `-s`.
    fn option_flags(&self) -> Vec<(&'static str, String)> {
        let mut flags = Vec::new();
        if self.line_length > 0 {
            flags.push(("-l", self.line_length.to_string()));
        }
        if let Some(mode) = self.mode {
            flags.push(("-m", mode.to_string()));
        }
        if let Some(dummy) = &self.dummy {
            flags.push(("-d", dummy.clone()));
        }
        if let Some(apply_symmetry) = self.apply_symmetry {
            flags.push(("-s", apply_symmetry.to_string()));
        }
        flags
    }

    /// Shell command line: `<executable> -e "<expression>" [-l n] [-m mode] [-d name] [-s bool]`.
    ///
    /// The expression is placed between double quotes verbatim. Nothing inside
    /// it is escaped.
    pub fn command_line(&self, executable: &Path) -> String {
        let mut line = format!("{} -e \"{}\"", executable.display(), self.expression);
        for (flag, value) in self.option_flags() {
            line.push(' ');
            line.push_str(flag);
            line.push(' ');
            line.push_str(&value);
        }
        line
    }

    /// The same flags as [`command_line`](Self::command_line), one argv entry each.
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec!["-e".to_string(), self.expression.clone()];
        for (flag, value) in self.option_flags() {
            args.push(flag.to_string());
            args.push(value);
        }
        args
    }

    /// Runs dirac once through the shell and renders the result.
    ///
    /// Shorthand for `DiracRunner::new(executable).run(self)`.
    pub fn run(&self, executable: &Path) -> Result<InvocationResult> {
        DiracRunner::new(executable).run(self)
    }
}

/// What one dirac run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    /// Standard output exactly as captured.
    pub raw_output: String,
    pub exit_succeeded: bool,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// The `equation` block ready to be written into a document.
    pub rendered_equation: String,
}
