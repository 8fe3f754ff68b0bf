//! Diagnostic types for switch analysis results.
//!
//! The analyzer does not render diagnostics; it packages them as structured
//! data for the front-end:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//! - Suggestions (how to fix)

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
