//! In-memory resolver for tests and embedded hosts.

use crate::error::ResolveError;
use crate::resolver::SourceResolver;
use std::collections::HashMap;
use std::sync::RwLock;

/// Resolves identifiers against an in-memory map of artifacts.
///
/// Artifacts can be inserted, rewritten, and removed while a cell is
/// bound to them, which makes this the natural editable-source double
/// for exercising refresh behavior without touching the filesystem.
#[derive(Default)]
pub struct MemoryResolver {
    artifacts: RwLock<HashMap<String, String>>,
}

impl MemoryResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the artifact for `identifier`.
    pub fn insert(&self, identifier: impl Into<String>, source: impl Into<String>) {
        self.artifacts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(identifier.into(), source.into());
    }

    /// Removes the artifact for `identifier`, if present.
    pub fn remove(&self, identifier: &str) {
        self.artifacts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(identifier);
    }
}

impl SourceResolver for MemoryResolver {
    fn locate(&self, identifier: &str) -> Result<(), ResolveError> {
        let map = self.artifacts.read().unwrap_or_else(|e| e.into_inner());
        if map.contains_key(identifier) {
            Ok(())
        } else {
            Err(ResolveError::not_found(identifier))
        }
    }

    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        let map = self.artifacts.read().unwrap_or_else(|e| e.into_inner());
        map.get(identifier)
            .cloned()
            .ok_or_else(|| ResolveError::not_found(identifier))
    }
}
