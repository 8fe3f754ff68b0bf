//! Per-switch analysis driver.
//!
//! Chains the four phases for one switch (shape resolution via the cache,
//! decomposition, coverage, reporting) and runs independent switches in
//! parallel. Fatal errors — cyclic hierarchy, not-exhaustible discriminant,
//! unknown or intermediate case target — abort only the enclosing switch;
//! other switches proceed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use sable_diagnostic::Diagnostic;
use sable_ir::{SwitchDescriptor, TypeProvider};

use crate::cache::ShapeCache;
use crate::config::CheckConfig;
use crate::coverage::{self, SwitchProblem, Verdict};
use crate::decompose;
use crate::report;

/// Everything the analyzer produced for one switch.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SwitchAnalysis {
    /// The coverage verdict. `None` when a fatal error aborted analysis
    /// before coverage could run.
    pub verdict: Option<Verdict>,
    /// Diagnostics ready for front-end rendering.
    pub diagnostics: Vec<Diagnostic>,
    /// The underlying problems as plain data (IDE consumers read the
    /// missing possibility names from here).
    pub problems: Vec<SwitchProblem>,
}

impl SwitchAnalysis {
    fn fatal(diagnostic: Diagnostic) -> Self {
        SwitchAnalysis {
            verdict: None,
            diagnostics: vec![diagnostic],
            problems: Vec::new(),
        }
    }

    /// Missing possibility names, when a missing-cases problem was found.
    /// Ordered as the shape orders its possibilities.
    pub fn missing_names(&self) -> Option<&[String]> {
        self.problems.iter().find_map(SwitchProblem::missing_names)
    }

    /// Whether any produced diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Cooperative cancellation for a compilation pass.
///
/// Checked between independent switch analyses, never mid-switch: a single
/// switch's pass is short and must produce a complete diagnostic set or
/// none at all.
#[derive(Clone, Default, Debug)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    /// A flag that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Exhaustiveness analyzer for one compilation pass.
///
/// Shares a write-once [`ShapeCache`] across all switches of the pass, so
/// each discriminant type is resolved at most once no matter how many
/// switches scrutinize it or on which threads.
#[derive(Default)]
pub struct Analyzer {
    cache: ShapeCache,
    config: CheckConfig,
}

impl Analyzer {
    /// Analyzer with the default (lenient) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with an explicit configuration.
    pub fn with_config(config: CheckConfig) -> Self {
        Analyzer {
            cache: ShapeCache::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// The shared shape cache.
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    /// Analyze one switch statement.
    #[tracing::instrument(level = "debug", skip_all, fields(scrutinee = %switch.scrutinee))]
    pub fn analyze(
        &self,
        provider: &dyn TypeProvider,
        switch: &SwitchDescriptor,
    ) -> SwitchAnalysis {
        // Ordinary switches are never held to exhaustiveness; skip before
        // shape resolution so a switch over an int is not rejected.
        if !switch.exhaustive_marker {
            return SwitchAnalysis {
                verdict: Some(Verdict::Exhaustive),
                diagnostics: Vec::new(),
                problems: Vec::new(),
            };
        }

        let shape = match self.cache.resolve(switch.scrutinee, provider) {
            Ok(shape) => shape,
            Err(err) => return SwitchAnalysis::fatal(err.to_diagnostic(switch.span)),
        };

        let patterns = match decompose::decompose(&switch.cases, &shape) {
            Ok(patterns) => patterns,
            Err(err) => return SwitchAnalysis::fatal(err.to_diagnostic()),
        };

        let (verdict, problems) =
            coverage::compute(&shape, &patterns, true, switch.span, &self.config);
        let diagnostics = report::problems_to_diagnostics(&problems, &self.config);

        SwitchAnalysis {
            verdict: Some(verdict),
            diagnostics,
            problems,
        }
    }

    /// Analyze a batch of independent switches in parallel.
    ///
    /// Cancellation is checked before each switch; cancelled switches
    /// contribute nothing to the result (no partial diagnostics).
    #[tracing::instrument(level = "debug", skip_all, fields(switches = switches.len()))]
    pub fn analyze_all(
        &self,
        provider: &(dyn TypeProvider + Sync),
        switches: &[SwitchDescriptor],
        cancel: &CancelFlag,
    ) -> Vec<SwitchAnalysis> {
        let analyses: Vec<SwitchAnalysis> = switches
            .par_iter()
            .filter_map(|switch| {
                if cancel.is_cancelled() {
                    return None;
                }
                Some(self.analyze(provider, switch))
            })
            .collect();
        tracing::debug!(
            analyzed = analyses.len(),
            cancelled = switches.len() - analyses.len(),
            "switch analysis pass complete"
        );
        analyses
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
