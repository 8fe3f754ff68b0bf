//! Shape cache.
//!
//! Shapes are resolved once per distinct discriminant type and shared
//! read-mostly across concurrent switch analyses. The cache is write-once:
//! an existing entry is never overwritten, so concurrent resolvers of the
//! same type converge on whichever result was inserted first (both computed
//! the same immutable value). Failed resolutions are never cached —
//! invalidation on declaration change is the front-end's job and applies
//! only to successful entries.

use std::sync::Arc;

use dashmap::DashMap;
use sable_ir::{TypeId, TypeProvider};

use crate::shape::{self, ShapeError, ShapeSet};

/// Write-once, read-many store of resolved shapes, keyed by type identity.
#[derive(Default)]
pub struct ShapeCache {
    shapes: DashMap<TypeId, Arc<ShapeSet>>,
}

impl ShapeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a type's shape, reusing the cached result if present.
    pub fn resolve(
        &self,
        id: TypeId,
        provider: &dyn TypeProvider,
    ) -> Result<Arc<ShapeSet>, ShapeError> {
        if let Some(entry) = self.shapes.get(&id) {
            return Ok(Arc::clone(entry.value()));
        }

        let resolved = Arc::new(shape::resolve(id, provider)?);
        // First writer wins; a racing resolver's identical result is dropped.
        let entry = self.shapes.entry(id).or_insert(resolved);
        Ok(Arc::clone(entry.value()))
    }

    /// Whether a shape for `id` is already cached.
    pub fn contains(&self, id: TypeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Number of cached shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
