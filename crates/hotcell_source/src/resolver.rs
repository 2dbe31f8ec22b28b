//! The resolver boundary between the cell and wherever source lives.

use crate::error::ResolveError;

/// Maps logical identifiers to current source text.
///
/// The cell calls [`locate`](SourceResolver::locate) once at bind time to
/// fail fast on a misconfigured identifier, and
/// [`resolve`](SourceResolver::resolve) at every refresh to fetch the text
/// it compares against the committed snapshot. Implementations decide what
/// an identifier means — a relative path, a registry key, anything.
pub trait SourceResolver {
    /// Checks that an artifact exists for `identifier` without fetching it.
    ///
    /// Returns [`ResolveError::NotFound`] if the identifier cannot be
    /// located. Used by the cell's fail-fast bind.
    fn locate(&self, identifier: &str) -> Result<(), ResolveError>;

    /// Fetches the current source text for `identifier`.
    ///
    /// Returns [`ResolveError::NotFound`] if the artifact has disappeared
    /// since bind time.
    fn resolve(&self, identifier: &str) -> Result<String, ResolveError>;
}

impl<R: SourceResolver + ?Sized> SourceResolver for &R {
    fn locate(&self, identifier: &str) -> Result<(), ResolveError> {
        (**self).locate(identifier)
    }

    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        (**self).resolve(identifier)
    }
}

impl<R: SourceResolver + ?Sized> SourceResolver for std::sync::Arc<R> {
    fn locate(&self, identifier: &str) -> Result<(), ResolveError> {
        (**self).locate(identifier)
    }

    fn resolve(&self, identifier: &str) -> Result<String, ResolveError> {
        (**self).resolve(identifier)
    }
}
