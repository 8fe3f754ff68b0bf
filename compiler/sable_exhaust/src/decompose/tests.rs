use pretty_assertions::assert_eq;
use sable_ir::{CaseDescriptor, Span, TypeDescriptor, TypeId, TypeTable};

use super::*;
use crate::shape;

fn span(n: u32) -> Span {
    Span::new(n * 10, n * 10 + 10)
}

/// Shape of `Base` = sealed { X = sealed { X1, X2 }, Y }.
fn nested_shape() -> ShapeSet {
    let mut table = TypeTable::new();
    table.insert(TypeDescriptor::sealed(
        TypeId::new(1),
        "Base",
        [TypeId::new(2), TypeId::new(3)],
    ));
    table.insert(TypeDescriptor::sealed(
        TypeId::new(2),
        "X",
        [TypeId::new(4), TypeId::new(5)],
    ));
    table.insert(TypeDescriptor::leaf(TypeId::new(3), "Y"));
    table.insert(TypeDescriptor::leaf(TypeId::new(4), "X1"));
    table.insert(TypeDescriptor::leaf(TypeId::new(5), "X2"));
    shape::resolve(TypeId::new(1), &table).unwrap()
}

#[test]
fn clauses_resolve_to_shape_indices_in_textual_order() {
    let shape = nested_shape();
    let cases = [
        CaseDescriptor::possibility("Y", span(0)),
        CaseDescriptor::guarded("X1", span(1)),
        CaseDescriptor::wildcard(span(2)),
    ];

    let patterns = decompose(&cases, &shape).unwrap();
    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns[0].kind, PatternKind::Possibility(2));
    assert!(!patterns[0].has_guard);
    assert_eq!(patterns[1].kind, PatternKind::Possibility(0));
    assert!(patterns[1].has_guard);
    assert_eq!(patterns[2].kind, PatternKind::Wildcard);
}

#[test]
fn default_passes_through() {
    let shape = nested_shape();
    let cases = [CaseDescriptor::default_case(span(0))];

    let patterns = decompose(&cases, &shape).unwrap();
    assert_eq!(patterns[0].kind, PatternKind::Default);
}

#[test]
fn stale_name_is_rejected_distinctly() {
    let shape = nested_shape();
    let cases = [CaseDescriptor::possibility("Removed", span(3))];

    let err = decompose(&cases, &shape).unwrap_err();
    assert_eq!(
        err,
        DecomposeError::UnknownPossibility {
            name: "Removed".to_string(),
            span: span(3),
        }
    );
}

#[test]
fn intermediate_target_is_rejected_with_its_leaves() {
    let shape = nested_shape();
    let cases = [CaseDescriptor::possibility("X", span(1))];

    let err = decompose(&cases, &shape).unwrap_err();
    let DecomposeError::IntermediateTarget { name, leaves, .. } = err else {
        panic!("expected IntermediateTarget, got {err:?}");
    };
    assert_eq!(name, "X");
    assert_eq!(leaves, ["X1", "X2"]);
}

#[test]
fn intermediate_diagnostic_suggests_the_leaves() {
    let err = DecomposeError::IntermediateTarget {
        name: "X".to_string(),
        leaves: vec!["X1".to_string(), "X2".to_string()],
        span: span(1),
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, sable_diagnostic::ErrorCode::E3007);
    assert!(diag.suggestions.iter().any(|s| s.contains("X1, X2")));
}
