use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while launching dirac or loading invocation suites.
///
/// A dirac run that exits with a non-zero status is *not* an error: it is
/// rendered into the document as verbatim text. Only failures to start the
/// process at all end up here.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The process could not be spawned (missing shell, permission denied, ...).
    #[error("failed to launch {program:?}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A suite file is not a valid JSON array of invocations.
    #[error("invalid suite description: {0}")]
    Suite(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvokeError>;
