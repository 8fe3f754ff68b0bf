//! Analysis configuration.

use sable_diagnostic::Severity;

/// How open shapes are judged.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Strictness {
    /// Open-shape verdicts are advisory: a fully covered open shape with no
    /// catch-all yields an `Unknown` warning, never an error.
    #[default]
    Lenient,
    /// The open remainder is treated as a synthetic always-missing
    /// possibility (`"<unbounded>"`) and reported as a missing case.
    Strict,
}

/// Configuration for one analysis pass.
///
/// Severities apply to the non-fatal diagnostic categories; fatal errors
/// (cyclic hierarchy, not-exhaustible, unknown possibility) are always
/// errors and not configurable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CheckConfig {
    /// Open-shape policy.
    pub strictness: Strictness,
    /// Severity of missing-case reports on closed shapes (and on open
    /// shapes in strict mode). Defaults to error.
    pub missing_cases: Severity,
    /// Severity of unreachable-case reports. Defaults to warning.
    pub unreachable_case: Severity,
    /// Severity of `default`-on-closed-shape reports. Defaults to warning.
    pub invalid_default: Severity,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            strictness: Strictness::Lenient,
            missing_cases: Severity::Error,
            unreachable_case: Severity::Warning,
            invalid_default: Severity::Warning,
        }
    }
}

impl CheckConfig {
    /// Default configuration with strict open-shape policy.
    pub fn strict() -> Self {
        CheckConfig {
            strictness: Strictness::Strict,
            ..Self::default()
        }
    }
}
