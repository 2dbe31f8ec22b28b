//! Filesystem-backed resolver rooted at a directory.

use crate::error::ResolveError;
use crate::resolver::SourceResolver;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves identifiers as paths relative to a root directory.
///
/// An identifier like `scripts/pricing.expr` maps to
/// `<root>/scripts/pricing.expr`. The file is re-read on every
/// [`resolve`](SourceResolver::resolve) call, so external edits are
/// picked up on the next refresh.
pub struct DirResolver {
    root: PathBuf,
}

impl DirResolver {
    /// Creates a resolver rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory this resolver reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, identifier: &str) -> PathBuf {
        self.root.join(identifier)
    }

    fn map_io(identifier: &str, err: io::Error) -> ResolveError {
        if err.kind() == io::ErrorKind::NotFound {
            ResolveError::not_found(identifier)
        } else {
            ResolveError::Io {
                identifier: identifier.to_string(),
                source: err,
            }
        }
    }
}

impl SourceResolver for DirResolver {
    fn locate(&self, identifier: &str) -> Result<(), ResolveError> {
        let path = self.path_for(identifier);
        std::fs::metadata(&path)
            .map(|_| ())
            .map_err(|e| Self::map_io(identifier, e))
    }

    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        let path = self.path_for(identifier);
        std::fs::read_to_string(&path).map_err(|e| Self::map_io(identifier, e))
    }
}
