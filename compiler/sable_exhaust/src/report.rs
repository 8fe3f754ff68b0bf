//! Problem-to-diagnostic conversion.
//!
//! [`SwitchProblem`]s are plain data; this module packages them for the
//! front-end, applying the severities from [`CheckConfig`]. Severity policy
//! lives entirely here so every consumer (batch check, test runner, IDE)
//! reports identically.

use sable_diagnostic::{Diagnostic, ErrorCode, Severity};

use crate::config::CheckConfig;
use crate::coverage::SwitchProblem;

/// Convert each problem into a diagnostic, preserving order.
pub fn problems_to_diagnostics(
    problems: &[SwitchProblem],
    config: &CheckConfig,
) -> Vec<Diagnostic> {
    problems
        .iter()
        .map(|problem| problem_to_diagnostic(problem, config))
        .collect()
}

#[cold]
fn problem_to_diagnostic(problem: &SwitchProblem, config: &CheckConfig) -> Diagnostic {
    match problem {
        SwitchProblem::MissingCases {
            switch_span,
            names,
            advisory,
        } => {
            // Advisory reports (open shape, lenient mode) never escalate
            // past warning regardless of configuration.
            let severity = if *advisory {
                Severity::Warning
            } else {
                config.missing_cases
            };
            let missing = names.join(", ");
            Diagnostic::new(ErrorCode::E3001, severity)
                .with_message("switch is not exhaustive")
                .with_label(*switch_span, "not all possibilities are handled")
                .with_note(format!("missing: {missing}"))
                .with_suggestion("add a case for each missing possibility")
        }

        SwitchProblem::UnreachableCase {
            case_span,
            switch_span,
        } => Diagnostic::new(ErrorCode::E3002, config.unreachable_case)
            .with_message("unreachable case")
            .with_label(*case_span, "this case can never match")
            .with_secondary_label(*switch_span, "within this switch"),

        SwitchProblem::InvalidDefaultContext { case_span } => {
            Diagnostic::new(ErrorCode::E3003, config.invalid_default)
                .with_message("`default` on a closed exhaustive switch")
                .with_label(*case_span, "defeats the exhaustiveness guarantee")
                .with_suggestion(
                    "handle each possibility explicitly; \
                     a new possibility should be a compile-time error here",
                )
        }

        SwitchProblem::OpenShape {
            switch_span,
            reason,
        } => Diagnostic::warning(ErrorCode::E3008)
            .with_message("exhaustiveness of this switch cannot be verified")
            .with_label(*switch_span, reason.clone())
            .with_suggestion("add a `default` case, or seal the open branches"),
    }
}
