//! Type identity.
//!
//! The front-end assigns each declared type a stable `TypeId` for the
//! lifetime of a compilation unit. The analyzer uses it only as a cache key
//! and for cycle detection; it never dereferences the id itself.

use std::fmt;

/// Identity of a declared type within one compilation unit.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a `TypeId` from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeId(index)
    }

    /// Raw index as usize.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw underlying value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
