use crate::document::DocumentWriter;
use anyhow::{Context, Result};
use diractex_core::{DiracRunner, Suite};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Counts collected while rendering a suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub cases: usize,
    /// Cases where dirac exited unsuccessfully and was rendered verbatim.
    pub failed: usize,
}

/// Runs every invocation of `suite` in order and writes a complete document to `out`.
///
/// Cases are processed one at a time; a failed dirac run is rendered and the
/// batch moves on. Errors from launching processes or writing `out` abort the
/// batch.
pub fn render_suite<W: Write>(
    suite: &Suite,
    runner: &DiracRunner,
    out: W,
) -> Result<(BatchSummary, W)> {
    let mut writer = DocumentWriter::begin(out).context("Failed to write the preamble")?;
    let mut summary = BatchSummary::default();

    for invocation in &suite.invocations {
        info!("Computing {}", invocation.expression());

        let result = runner
            .run(invocation)
            .with_context(|| format!("Failed to run dirac on {}", invocation.expression()))?;
        if !result.exit_succeeded {
            debug!(
                "dirac failed on {} ({:?})",
                invocation.expression(),
                result.exit_code
            );
            summary.failed += 1;
        }

        writer
            .write_entry(
                suite.layout,
                invocation.description(),
                &result.rendered_equation,
            )
            .context("Failed to write an equation")?;
    }

    summary.cases = writer.entries();
    let out = writer.finish().context("Failed to finish the document")?;
    Ok((summary, out))
}

/// [`render_suite`] into a freshly created file at `path`.
pub fn render_suite_to_file(
    suite: &Suite,
    runner: &DiracRunner,
    path: &Path,
) -> Result<BatchSummary> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let (summary, _) = render_suite(suite, runner, BufWriter::new(file))?;
    info!(
        "Wrote {} equations to {} ({} failed)",
        summary.cases,
        path.display(),
        summary.failed
    );
    Ok(summary)
}

/// Resolves a dirac path given on the command line against the working directory.
pub fn absolute_executable(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    Ok(cwd.join(path))
}
