//! Sable IR - boundary types for the exhaustiveness analyzer.
//!
//! This crate defines the data the front-end hands to the analysis core:
//! - Spans for source locations
//! - `TypeId` for type identity
//! - `TypeDescriptor` exposing a discriminant type's sealing/enumeration
//!   metadata
//! - `SwitchDescriptor` describing one switch statement and its case clauses
//!
//! None of these types perform analysis; they are plain data with the traits
//! needed for concurrent, memoized processing (Clone, Eq, Hash, Debug).

mod descriptor;
mod span;
mod switch;
mod type_id;

pub use descriptor::{TypeDescriptor, TypeKind, TypeProvider, TypeTable};
pub use span::Span;
pub use switch::{CaseDescriptor, CaseKind, SwitchDescriptor};
pub use type_id::TypeId;
