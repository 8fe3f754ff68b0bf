//! Exhaustiveness analysis for Sable's `exhaustive switch`.
//!
//! Given a discriminant type's closed shape and the ordered case clauses of
//! a marked switch, this crate decides whether coverage is complete, names
//! the missing possibilities, flags unreachable clauses, and treats guarded
//! clauses conservatively.
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → Resolve types → **Exhaustiveness** → diagnostics to front-end
//! ```
//!
//! # Phases
//!
//! 1. **Shape resolution** (`shape`): a [`TypeDescriptor`] is flattened into
//!    a [`ShapeSet`] — the finite, ordered list of leaf possibilities plus
//!    an openness attribute. Results are memoized in a write-once
//!    [`ShapeCache`] shared across worker threads.
//!
//! 2. **Pattern decomposition** (`decompose`): case clauses are normalized
//!    into [`Pattern`]s indexed against the shape. Stale or intermediate
//!    targets are rejected here, before coverage runs.
//!
//! 3. **Coverage** (`coverage`): a single linear pass over the patterns in
//!    textual order computes a per-possibility coverage state and a
//!    [`Verdict`] plus plain-data [`SwitchProblem`]s.
//!
//! 4. **Reporting** (`report`): problems become [`sable_diagnostic`]
//!    diagnostics with severities from [`CheckConfig`].
//!
//! The [`Analyzer`] drives all four phases per switch and runs independent
//! switches in parallel.
//!
//! [`TypeDescriptor`]: sable_ir::TypeDescriptor

mod analyze;
mod cache;
mod config;
mod coverage;
mod decompose;
mod report;
mod shape;

pub use analyze::{Analyzer, CancelFlag, SwitchAnalysis};
pub use cache::ShapeCache;
pub use config::{CheckConfig, Strictness};
pub use coverage::{compute, CoverageState, SwitchProblem, Verdict, UNBOUNDED};
pub use decompose::{decompose, DecomposeError, Pattern, PatternKind};
pub use report::problems_to_diagnostics;
pub use shape::{resolve, Openness, ShapeError, ShapeSet};
