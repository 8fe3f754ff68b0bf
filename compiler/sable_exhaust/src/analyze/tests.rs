use pretty_assertions::assert_eq;
use sable_diagnostic::ErrorCode;
use sable_ir::{CaseDescriptor, Span, SwitchDescriptor, TypeDescriptor, TypeId, TypeTable};

use super::*;
use crate::config::Strictness;
use crate::coverage::UNBOUNDED;

fn span(n: u32) -> Span {
    Span::new(n * 10, n * 10 + 10)
}

fn marked_switch(scrutinee: TypeId, cases: Vec<CaseDescriptor>) -> SwitchDescriptor {
    SwitchDescriptor {
        scrutinee,
        exhaustive_marker: true,
        cases,
        span: Span::new(0, 100),
    }
}

/// `Base` = sealed { `X` = sealed { `X1`, `X2` }, `Y` } plus the enum
/// `Choice { A, B }` and the unbounded `int`.
fn fixture() -> TypeTable {
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
    table.insert(TypeDescriptor::enumeration(TypeId::new(6), "Choice", ["A", "B"]));
    table.insert(TypeDescriptor::unbounded(TypeId::new(7), "int"));
    table
}

// ── End-to-end single switches ────────────────────────────────

#[test]
fn covered_enum_switch_is_exhaustive() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = marked_switch(
        TypeId::new(6),
        vec![
            CaseDescriptor::possibility("A", span(0)),
            CaseDescriptor::possibility("B", span(1)),
        ],
    );

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(analysis.verdict, Some(Verdict::Exhaustive));
    assert!(analysis.diagnostics.is_empty());
    assert!(!analysis.has_errors());
}

#[test]
fn missing_case_produces_one_error_with_names() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = marked_switch(
        TypeId::new(6),
        vec![CaseDescriptor::possibility("A", span(0))],
    );

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(
        analysis.verdict,
        Some(Verdict::MissingCases(vec!["B".to_string()]))
    );
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].code, ErrorCode::E3001);
    assert!(analysis.has_errors());
    assert_eq!(analysis.missing_names(), Some(["B".to_string()].as_slice()));
}

#[test]
fn hierarchy_switch_over_all_leaves_is_exhaustive() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = marked_switch(
        TypeId::new(1),
        vec![
            CaseDescriptor::possibility("X1", span(0)),
            CaseDescriptor::possibility("X2", span(1)),
            CaseDescriptor::possibility("Y", span(2)),
        ],
    );

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(analysis.verdict, Some(Verdict::Exhaustive));
    assert!(analysis.diagnostics.is_empty());
}

#[test]
fn intermediate_target_is_fatal_for_the_switch() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = marked_switch(
        TypeId::new(1),
        vec![
            CaseDescriptor::possibility("X", span(0)),
            CaseDescriptor::possibility("Y", span(1)),
        ],
    );

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(analysis.verdict, None);
    assert_eq!(analysis.diagnostics.len(), 1);
    assert_eq!(analysis.diagnostics[0].code, ErrorCode::E3007);
    assert!(analysis.has_errors());
}

#[test]
fn marker_on_unbounded_type_is_a_configuration_error() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = marked_switch(TypeId::new(7), vec![]);

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(analysis.verdict, None);
    assert_eq!(analysis.diagnostics[0].code, ErrorCode::E3005);
}

#[test]
fn unmarked_switch_over_unbounded_type_is_fine() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = SwitchDescriptor {
        scrutinee: TypeId::new(7),
        exhaustive_marker: false,
        cases: vec![CaseDescriptor::wildcard(span(0))],
        span: Span::new(0, 100),
    };

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(analysis.verdict, Some(Verdict::Exhaustive));
    assert!(analysis.diagnostics.is_empty());
}

#[test]
fn strict_open_shape_reports_unbounded_missing() {
    let mut table = TypeTable::new();
    table.insert(TypeDescriptor::sealed(
        TypeId::new(1),
        "Handler",
        [TypeId::new(2), TypeId::new(3)],
    ));
    table.insert(TypeDescriptor::leaf(TypeId::new(2), "Builtin"));
    table.insert(TypeDescriptor::extensible(TypeId::new(3), "Loaded"));

    let analyzer = Analyzer::with_config(CheckConfig {
        strictness: Strictness::Strict,
        ..CheckConfig::default()
    });
    let switch = marked_switch(
        TypeId::new(1),
        vec![
            CaseDescriptor::possibility("Builtin", span(0)),
            CaseDescriptor::possibility("Loaded", span(1)),
        ],
    );

    let analysis = analyzer.analyze(&table, &switch);
    assert_eq!(
        analysis.verdict,
        Some(Verdict::MissingCases(vec![UNBOUNDED.to_string()]))
    );
    assert_eq!(analysis.diagnostics[0].code, ErrorCode::E3001);
    assert!(analysis.has_errors());
}

// ── Batch analysis ────────────────────────────────────────────

#[test]
fn fatal_switch_does_not_block_others() {
    let mut table = fixture();
    // A cyclic hierarchy alongside the healthy ones.
    table.insert(TypeDescriptor::sealed(TypeId::new(8), "Loop", [TypeId::new(8)]));

    let analyzer = Analyzer::new();
    let switches = vec![
        marked_switch(TypeId::new(8), vec![]),
        marked_switch(
            TypeId::new(6),
            vec![
                CaseDescriptor::possibility("A", span(0)),
                CaseDescriptor::possibility("B", span(1)),
            ],
        ),
    ];

    let analyses = analyzer.analyze_all(&table, &switches, &CancelFlag::new());
    assert_eq!(analyses.len(), 2);
    let cyclic = analyses
        .iter()
        .find(|a| a.verdict.is_none())
        .unwrap();
    assert_eq!(cyclic.diagnostics[0].code, ErrorCode::E3004);
    assert!(analyses.iter().any(|a| a.verdict == Some(Verdict::Exhaustive)));
}

#[test]
fn shapes_are_resolved_once_per_type() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switch = marked_switch(
        TypeId::new(6),
        vec![
            CaseDescriptor::possibility("A", span(0)),
            CaseDescriptor::possibility("B", span(1)),
        ],
    );
    let switches = vec![switch.clone(), switch.clone(), switch];

    analyzer.analyze_all(&table, &switches, &CancelFlag::new());
    assert_eq!(analyzer.cache().len(), 1);
}

#[test]
fn cancelled_pass_produces_no_partial_results() {
    let table = fixture();
    let analyzer = Analyzer::new();
    let switches = vec![marked_switch(TypeId::new(6), vec![])];

    let cancel = CancelFlag::new();
    cancel.cancel();
    let analyses = analyzer.analyze_all(&table, &switches, &cancel);
    assert!(analyses.is_empty());
}
