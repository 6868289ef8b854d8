//! # diractex Core
//!
//! Runs the `dirac` gamma-matrix calculator and turns its answers into LaTeX.
//!
//! ## Overview
//!
//! All symbolic work happens inside the external `dirac` executable. This crate
//! only knows how to talk to it:
//!
//! - [`Invocation`] describes one call: the expression, the optional `-l`,
//!   `-m`, `-d`, `-s` flags and how the left-hand side is displayed
//! - [`DiracRunner`] launches the process through a [`CommandExecutor`] and
//!   captures stdout and the exit status
//! - [`render`] wraps the answer in an `equation` (and, for wrapped output, a
//!   `split`) environment; failed runs become `\verb|...|` text so a broken
//!   case never stops a batch
//! - [`suites`] holds the built-in regression cases and the sixth-order Fierz
//!   table; [`Suite::load`] reads custom cases from JSON
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐ command_line() ┌─────────────┐ execute() ┌─────────────────┐
//! │ Invocation │ ─────────────► │ DiracRunner │ ────────► │ CommandExecutor │
//! └────────────┘  arguments()   └──────┬──────┘           └─────────────────┘
//!                                      │ render_equation()
//!                                      ▼
//!                              InvocationResult
//! ```
//!
//! ## Examples
//!
//! ```no_run
//! use diractex_core::Invocation;
//! use std::path::Path;
//!
//! let inv = Invocation::new("Product of two gamma matrices", r"\gamma^\mu\gamma^\nu");
//! let result = inv.run(Path::new("/opt/dirac/bin/dirac"))?;
//! println!("{}", result.rendered_equation);
//! # Ok::<(), diractex_core::InvokeError>(())
//! ```
//!
//! ## Shell quoting
//!
//! The default [`LaunchMode::Shell`] reproduces the historical
//! `dirac -e "<expr>"` command line, with the expression placed between double
//! quotes and nothing escaped. Use [`LaunchMode::Direct`] for expressions that
//! do not come from a trusted suite.

pub mod error;
pub mod executor;
pub mod invocation;
pub mod render;
pub mod runner;
pub mod suite;
pub mod suites;

pub use error::InvokeError;
pub use executor::{CommandExecutor, LaunchMode, RealCommandExecutor};
pub use invocation::{Invocation, InvocationResult, Mode};
pub use runner::DiracRunner;
pub use suite::{EntryLayout, Suite};
