//! # diractex Build
//!
//! Turns a [`Suite`](diractex_core::Suite) into a `revtex4-2` document and hands
//! it to a TeX engine.
//!
//! - [`document`] writes the preamble, one entry per case and `\end{document}`
//! - [`batch`] runs every case of a suite through a
//!   [`DiracRunner`](diractex_core::DiracRunner), strictly one after another
//! - [`compiler`] runs `pdflatex -halt-on-error <job>` (or another engine) on
//!   the result; its exit status is logged, never propagated
//!
//! ```no_run
//! use diractex_build::{render_suite_to_file, TexTarget, Typesetter};
//! use diractex_core::{suites, DiracRunner};
//!
//! let target = TexTarget::from_name("tests");
//! let runner = DiracRunner::new("/opt/dirac/bin/dirac");
//! render_suite_to_file(&suites::test_suite(), &runner, &target.tex_path())?;
//! Typesetter::default().typeset(&target)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod batch;
pub mod compiler;
pub mod document;

pub use batch::{absolute_executable, render_suite, render_suite_to_file, BatchSummary};
pub use compiler::{TypesetOutcome, Typesetter};
pub use document::{DocumentWriter, TexTarget, END_DOCUMENT, PREAMBLE};
