//! Coverage computation.
//!
//! A single linear pass over the decomposed patterns, in textual order,
//! maintains one [`CoverageState`] per shape possibility and produces the
//! switch's [`Verdict`] plus plain-data [`SwitchProblem`]s.
//!
//! # Rules
//!
//! - A guard is a runtime condition that cannot be statically discharged:
//!   a possibility matched only by guarded clauses stays `GuardedOnly` and
//!   counts as *not* covered in the verdict.
//! - A clause whose possibility was already fully covered by an earlier
//!   unguarded clause is dead code (`UnreachableCase`). A `GuardedOnly`
//!   possibility may legitimately be matched again, so no diagnostic there.
//! - `default` is only legal on open shapes; on a closed shape it is
//!   flagged (`InvalidDefaultContext`) because it defeats the construct,
//!   though it still covers for verdict purposes so the switch is not
//!   additionally reported as missing cases.
//! - Exactly one `MissingCases` problem is produced per switch, naming all
//!   uncovered possibilities together in shape order.
//!
//! Switches without the exhaustiveness marker are never checked: the pass
//! is a no-op that reports trivial exhaustiveness with no problems.

use sable_ir::Span;

use crate::config::{CheckConfig, Strictness};
use crate::decompose::{Pattern, PatternKind};
use crate::shape::{Openness, ShapeSet};

/// Synthetic possibility name standing for "any future extension" of an
/// open shape, reported as missing in strict mode.
pub const UNBOUNDED: &str = "<unbounded>";

/// Coverage of one possibility after some prefix of the clause list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CoverageState {
    /// No clause matches it yet.
    Uncovered,
    /// Only guarded clauses match it; may fail at runtime.
    GuardedOnly,
    /// An unguarded clause matches it.
    Covered,
}

impl CoverageState {
    /// Apply one clause that matches this possibility. Monotonic: never
    /// regresses from `Covered`.
    fn absorb(&mut self, guarded: bool) {
        *self = match (*self, guarded) {
            (CoverageState::Covered, _) | (_, false) => CoverageState::Covered,
            (CoverageState::Uncovered | CoverageState::GuardedOnly, true) => {
                CoverageState::GuardedOnly
            }
        };
    }
}

/// Outcome of coverage analysis for one switch.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Verdict {
    /// Every possibility is covered by an unguarded clause.
    Exhaustive,
    /// The named possibilities are not (fully) covered, in shape order.
    MissingCases(Vec<String>),
    /// Open shape in lenient mode: completeness cannot be decided.
    Unknown(String),
}

/// One problem found during coverage analysis, as plain data.
///
/// Problems carry everything a front-end or IDE needs (spans, possibility
/// names); conversion to renderable diagnostics lives in [`crate::report`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SwitchProblem {
    /// The switch does not cover every possibility.
    MissingCases {
        switch_span: Span,
        /// Uncovered possibility names in shape order — also the payload
        /// for an IDE's generate-missing-branches action.
        names: Vec<String>,
        /// Advisory reports (open shape, lenient mode) are capped at
        /// warning severity.
        advisory: bool,
    },
    /// A clause that can never match.
    UnreachableCase { case_span: Span, switch_span: Span },
    /// `default` on a closed exhaustive switch.
    InvalidDefaultContext { case_span: Span },
    /// Open shape, lenient mode: all known possibilities handled but the
    /// remainder cannot be verified.
    OpenShape { switch_span: Span, reason: String },
}

impl SwitchProblem {
    /// The missing possibility names, when this is a missing-cases report.
    pub fn missing_names(&self) -> Option<&[String]> {
        match self {
            SwitchProblem::MissingCases { names, .. } => Some(names),
            _ => None,
        }
    }
}

/// Compute the verdict and problems for one switch.
///
/// `patterns` must be in textual clause order. When `marker_present` is
/// false the construct was not opted into and nothing is checked.
pub fn compute(
    shape: &ShapeSet,
    patterns: &[Pattern],
    marker_present: bool,
    switch_span: Span,
    config: &CheckConfig,
) -> (Verdict, Vec<SwitchProblem>) {
    if !marker_present {
        return (Verdict::Exhaustive, Vec::new());
    }

    let mut states = vec![CoverageState::Uncovered; shape.len()];
    let mut problems = Vec::new();
    // Set once an unguarded catch-all has been seen; it also covers an
    // open shape's unknown remainder.
    let mut catch_all_seen = false;

    for pattern in patterns {
        match pattern.kind {
            PatternKind::Possibility(index) => {
                if states[index] == CoverageState::Covered {
                    problems.push(SwitchProblem::UnreachableCase {
                        case_span: pattern.span,
                        switch_span,
                    });
                } else {
                    states[index].absorb(pattern.has_guard);
                }
            }
            PatternKind::Wildcard | PatternKind::Default => {
                let invalid_default = pattern.kind == PatternKind::Default
                    && shape.openness() == Openness::Closed;
                if invalid_default {
                    problems.push(SwitchProblem::InvalidDefaultContext {
                        case_span: pattern.span,
                    });
                }

                let any_remaining = states.iter().any(|s| *s != CoverageState::Covered);
                let reaches_remainder = shape.is_open() && !catch_all_seen;
                // One report per clause: an invalid default is already
                // flagged, piling unreachability on top adds nothing.
                if !invalid_default && !any_remaining && !reaches_remainder {
                    problems.push(SwitchProblem::UnreachableCase {
                        case_span: pattern.span,
                        switch_span,
                    });
                }

                for state in &mut states {
                    state.absorb(pattern.has_guard);
                }
                if !pattern.has_guard {
                    catch_all_seen = true;
                }
            }
        }
    }

    // Guarded-only coverage cannot be statically discharged.
    let missing: Vec<String> = states
        .iter()
        .enumerate()
        .filter(|(_, state)| **state != CoverageState::Covered)
        .map(|(index, _)| shape.name(index).to_string())
        .collect();

    let verdict = match shape.openness() {
        Openness::Closed => {
            if missing.is_empty() {
                Verdict::Exhaustive
            } else {
                problems.push(SwitchProblem::MissingCases {
                    switch_span,
                    names: missing.clone(),
                    advisory: false,
                });
                Verdict::MissingCases(missing)
            }
        }
        Openness::Open => open_verdict(missing, catch_all_seen, switch_span, config, &mut problems),
    };

    (verdict, problems)
}

/// Verdict for an open shape. An unguarded catch-all is the only thing that
/// can cover the unknown remainder.
fn open_verdict(
    missing: Vec<String>,
    catch_all_seen: bool,
    switch_span: Span,
    config: &CheckConfig,
    problems: &mut Vec<SwitchProblem>,
) -> Verdict {
    if catch_all_seen {
        // The catch-all covered every known possibility and the remainder.
        return Verdict::Exhaustive;
    }

    let strict = config.strictness == Strictness::Strict;
    if missing.is_empty() && !strict {
        let reason = "open shape; extension types cannot be statically verified".to_string();
        problems.push(SwitchProblem::OpenShape {
            switch_span,
            reason: reason.clone(),
        });
        return Verdict::Unknown(reason);
    }

    let mut names = missing;
    if strict {
        names.push(UNBOUNDED.to_string());
    }
    problems.push(SwitchProblem::MissingCases {
        switch_span,
        names: names.clone(),
        advisory: !strict,
    });
    Verdict::MissingCases(names)
}
