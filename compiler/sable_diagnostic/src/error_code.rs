use std::fmt;

/// Error codes for exhaustiveness diagnostics.
///
/// The E3xxx block is reserved for pattern/coverage problems; every
/// diagnostic the analyzer can emit has exactly one code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Marked switch does not cover every possibility
    E3001,
    /// Case clause can never be reached
    E3002,
    /// `default` on a closed exhaustive switch
    E3003,
    /// Cycle in the sealing hierarchy of the discriminant type
    E3004,
    /// Exhaustiveness marker on a type that is not exhaustible
    E3005,
    /// Case targets a possibility the shape does not contain
    E3006,
    /// Case targets an intermediate sealed node instead of its leaves
    E3007,
    /// Open shape cannot be statically verified (advisory)
    E3008,
}

impl ErrorCode {
    /// Code as a display string.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
        }
    }

    /// One-line description of what the code means.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E3001 => "non-exhaustive switch",
            ErrorCode::E3002 => "unreachable case",
            ErrorCode::E3003 => "default clause on a closed exhaustive switch",
            ErrorCode::E3004 => "cyclic sealed hierarchy",
            ErrorCode::E3005 => "type is not exhaustible",
            ErrorCode::E3006 => "unknown possibility",
            ErrorCode::E3007 => "case targets an intermediate sealed type",
            ErrorCode::E3008 => "open shape cannot be statically verified",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
