//! Discriminant type descriptors.
//!
//! A `TypeDescriptor` exposes exactly the sealing/enumeration metadata the
//! shape resolver needs: whether a type is a closed enumeration, a sealed
//! node with permitted subtypes, a terminal leaf, an extensible type, or an
//! unbounded domain. Subtypes are referenced by [`TypeId`] rather than owned
//! inline so that a malformed sealing graph (including a cycle) can be
//! represented and detected instead of being unrepresentable.

use rustc_hash::FxHashMap;

use crate::TypeId;

/// Sealing/enumeration metadata for one declared type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    /// Stable identity within the compilation unit.
    pub id: TypeId,
    /// Display name, used verbatim in possibility lists and diagnostics.
    pub name: String,
    /// What kind of shape this type contributes.
    pub kind: TypeKind,
}

/// The closed-shape classification of a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// A true enumeration: the ordered variant names are the complete set
    /// of possibilities.
    Enum { variants: Vec<String> },
    /// A sealed node: only the listed subtypes are permitted to extend it.
    Sealed { subtypes: Vec<TypeId> },
    /// A terminal, non-sealed, non-extensible type. Contributes itself as
    /// one leaf possibility.
    Leaf,
    /// A type that code outside the current compilation visibility may
    /// extend (an unsealed base class, an externally loadable type).
    Extensible,
    /// An unbounded domain (numeric, string, or any type without closed
    /// metadata). Never a legal discriminant for an exhaustive switch.
    Unbounded,
}

impl TypeDescriptor {
    /// A closed enumeration with the given variant names.
    pub fn enumeration(
        id: TypeId,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        TypeDescriptor {
            id,
            name: name.into(),
            kind: TypeKind::Enum {
                variants: variants.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// A sealed node permitting exactly the given subtypes.
    pub fn sealed(
        id: TypeId,
        name: impl Into<String>,
        subtypes: impl IntoIterator<Item = TypeId>,
    ) -> Self {
        TypeDescriptor {
            id,
            name: name.into(),
            kind: TypeKind::Sealed {
                subtypes: subtypes.into_iter().collect(),
            },
        }
    }

    /// A terminal leaf type.
    pub fn leaf(id: TypeId, name: impl Into<String>) -> Self {
        TypeDescriptor {
            id,
            name: name.into(),
            kind: TypeKind::Leaf,
        }
    }

    /// An extensible (open) type.
    pub fn extensible(id: TypeId, name: impl Into<String>) -> Self {
        TypeDescriptor {
            id,
            name: name.into(),
            kind: TypeKind::Extensible,
        }
    }

    /// An unbounded domain.
    pub fn unbounded(id: TypeId, name: impl Into<String>) -> Self {
        TypeDescriptor {
            id,
            name: name.into(),
            kind: TypeKind::Unbounded,
        }
    }
}

/// Source of type descriptors during shape resolution.
///
/// The front-end owns type declarations; the analyzer only looks them up by
/// identity. A `None` return means the type has no metadata visible to the
/// current compilation, which the resolver treats as not exhaustible.
pub trait TypeProvider {
    /// Look up the descriptor for a type identity.
    fn descriptor(&self, id: TypeId) -> Option<&TypeDescriptor>;
}

/// Simple in-memory [`TypeProvider`] backed by a hash map.
///
/// Front-ends with their own symbol tables implement [`TypeProvider`]
/// directly; this table exists for tests and small embeddings.
#[derive(Default, Debug, Clone)]
pub struct TypeTable {
    types: FxHashMap<TypeId, TypeDescriptor>,
}

impl TypeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, keyed by its own id. Returns the previous
    /// descriptor if the id was already present.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types.insert(descriptor.id, descriptor)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeProvider for TypeTable {
    fn descriptor(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_lookup_by_identity() {
        let mut table = TypeTable::new();
        let id = TypeId::new(7);
        table.insert(TypeDescriptor::enumeration(id, "Color", ["Red", "Green"]));

        let desc = table.descriptor(id).map(|d| d.name.as_str());
        assert_eq!(desc, Some("Color"));
        assert!(table.descriptor(TypeId::new(8)).is_none());
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut table = TypeTable::new();
        let id = TypeId::new(1);
        table.insert(TypeDescriptor::leaf(id, "First"));
        let previous = table.insert(TypeDescriptor::leaf(id, "Second"));

        assert_eq!(previous.map(|d| d.name), Some("First".to_string()));
        assert_eq!(table.len(), 1);
    }
}
