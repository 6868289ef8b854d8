//! LaTeX rendering of dirac results.

/// Strips trailing ASCII whitespace, vertical tabs and NUL bytes. Other Unicode spaces
/// (e.g. U+00A0) are part of the output and stay.
fn trim_output(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_ascii_whitespace() || matches!(c, '\x0b' | '\0'))
}

/// Wraps raw tool output in a `\verb|...|` span with trailing whitespace removed.
///
/// Used for the output of failed runs, which is usually an error message and
/// not valid math-mode LaTeX.
pub fn verbatim(text: &str) -> String {
    format!("\\verb|{}|", trim_output(text))
}

/// Wraps `body` in `\begin{env}` / `\end{env}`, each on its own line.
pub fn environment(env: &str, body: &str) -> String {
    format!("\\begin{{{env}}}\n{body}\n\\end{{{env}}}")
}

/// Builds the `equation` block for one dirac run.
///
/// The right-hand side is the trimmed output on success and a verbatim span
/// on failure. A `split` environment is added only for successful runs that
/// asked for line wrapping; dirac's error text has no alignment points.
pub fn render_equation(lhs: &str, output: &str, line_length: u32, succeeded: bool) -> String {
    let rhs = if succeeded {
        trim_output(output).to_string()
    } else {
        verbatim(output)
    };

    let mut body = format!("{lhs} = {rhs}");
    if line_length > 0 && succeeded {
        body = environment("split", &body);
    }
    environment("equation", &body)
}
