//! Pattern decomposition.
//!
//! Normalizes a switch's case clauses into patterns indexed against the
//! resolved shape. Targets that are not possibilities are rejected here,
//! before the coverage pass runs:
//!
//! - a name the shape has never heard of is a stale reference (the variant
//!   or subtype was removed) — distinct from a *missing* case;
//! - an intermediate sealed node is not a leaf; the policy here is to
//!   reject it and surface the leaves it would expand to, so a front-end
//!   can offer the expansion as a fix.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{CaseDescriptor, CaseKind, Span};

use crate::shape::ShapeSet;

/// One normalized case clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    /// What the clause matches, resolved against the shape.
    pub kind: PatternKind,
    /// Whether a dynamic guard constrains the clause.
    pub has_guard: bool,
    /// Span of the source clause.
    pub span: Span,
}

/// Resolved match target of a pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// Matches the shape possibility at this index.
    Possibility(usize),
    /// Language-level catch-all.
    Wildcard,
    /// The `default` keyword.
    Default,
}

/// Failure to map a case clause onto the shape.
///
/// Fatal for the enclosing switch's analysis.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DecomposeError {
    /// The clause targets a name the shape does not contain.
    UnknownPossibility { name: String, span: Span },
    /// The clause targets an intermediate sealed node rather than a leaf.
    IntermediateTarget {
        name: String,
        /// The leaves the node resolves to, in shape order.
        leaves: Vec<String>,
        span: Span,
    },
}

impl std::fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecomposeError::UnknownPossibility { name, .. } => {
                write!(f, "unknown possibility `{name}`")
            }
            DecomposeError::IntermediateTarget { name, .. } => {
                write!(f, "`{name}` is an intermediate sealed type, not a leaf")
            }
        }
    }
}

impl std::error::Error for DecomposeError {}

impl DecomposeError {
    /// Convert to a diagnostic at the offending clause.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DecomposeError::UnknownPossibility { name, span } => {
                Diagnostic::error(ErrorCode::E3006)
                    .with_message(format!("unknown possibility `{name}`"))
                    .with_label(*span, "not a possibility of the discriminant type")
                    .with_note(
                        "the referenced variant or subtype may have been renamed or removed",
                    )
            }
            DecomposeError::IntermediateTarget { name, leaves, span } => {
                Diagnostic::error(ErrorCode::E3007)
                    .with_message(format!(
                        "`{name}` is an intermediate sealed type, not a leaf possibility"
                    ))
                    .with_label(*span, "cannot be matched directly")
                    .with_suggestion(format!(
                        "match its leaves instead: {}",
                        leaves.join(", ")
                    ))
            }
        }
    }
}

/// Normalize case clauses against a resolved shape, preserving textual
/// order.
pub fn decompose(
    cases: &[CaseDescriptor],
    shape: &ShapeSet,
) -> Result<Vec<Pattern>, DecomposeError> {
    cases
        .iter()
        .map(|case| {
            let kind = match &case.kind {
                CaseKind::Possibility(name) => match shape.position(name) {
                    Some(index) => PatternKind::Possibility(index),
                    None => {
                        if let Some(leaves) = shape.intermediate_leaves(name) {
                            return Err(DecomposeError::IntermediateTarget {
                                name: name.clone(),
                                leaves: leaves.to_vec(),
                                span: case.span,
                            });
                        }
                        return Err(DecomposeError::UnknownPossibility {
                            name: name.clone(),
                            span: case.span,
                        });
                    }
                },
                CaseKind::Wildcard => PatternKind::Wildcard,
                CaseKind::Default => PatternKind::Default,
            };
            Ok(Pattern {
                kind,
                has_guard: case.has_guard,
                span: case.span,
            })
        })
        .collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
