//! Switch statement descriptors.
//!
//! One `SwitchDescriptor` is produced by the front-end per switch statement.
//! Case clauses keep their textual order; the coverage engine depends on it
//! for unreachable-case detection.

use crate::{Span, TypeId};

/// One switch statement as seen by the analyzer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchDescriptor {
    /// Identity of the discriminant type.
    pub scrutinee: TypeId,
    /// Whether the opt-in exhaustiveness marker is present. Switches
    /// without it are never checked.
    pub exhaustive_marker: bool,
    /// Case clauses in textual order.
    pub cases: Vec<CaseDescriptor>,
    /// Span of the whole switch statement.
    pub span: Span,
}

/// One case clause of a switch.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseDescriptor {
    /// What the clause matches.
    pub kind: CaseKind,
    /// Whether the clause carries a dynamic side condition beyond the
    /// possibility test. Guards can never be statically discharged.
    pub has_guard: bool,
    /// Span of this clause.
    pub span: Span,
}

/// Classification of a case clause's match target.
///
/// The front-end distinguishes the language-level catch-all (`Wildcard`)
/// from the `default` keyword; their legality differs by shape openness and
/// is decided by the coverage engine, not here.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CaseKind {
    /// Matches one named possibility of the discriminant's shape.
    Possibility(String),
    /// Matches anything not matched by earlier clauses.
    Wildcard,
    /// The `default` keyword; only legal on open shapes.
    Default,
}

impl CaseDescriptor {
    /// An unguarded clause matching one possibility.
    pub fn possibility(name: impl Into<String>, span: Span) -> Self {
        CaseDescriptor {
            kind: CaseKind::Possibility(name.into()),
            has_guard: false,
            span,
        }
    }

    /// A guarded clause matching one possibility.
    pub fn guarded(name: impl Into<String>, span: Span) -> Self {
        CaseDescriptor {
            kind: CaseKind::Possibility(name.into()),
            has_guard: true,
            span,
        }
    }

    /// An unguarded catch-all clause.
    pub fn wildcard(span: Span) -> Self {
        CaseDescriptor {
            kind: CaseKind::Wildcard,
            has_guard: false,
            span,
        }
    }

    /// A `default` clause.
    pub fn default_case(span: Span) -> Self {
        CaseDescriptor {
            kind: CaseKind::Default,
            has_guard: false,
            span,
        }
    }
}
