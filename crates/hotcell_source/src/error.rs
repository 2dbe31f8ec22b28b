//! Error types for source resolution.

/// Errors that can occur while locating or fetching source text.
///
/// Resolution failures are never swallowed by the cell: they propagate
/// to whichever accessor triggered the lookup.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No artifact exists for the given identifier.
    #[error("source artifact '{identifier}' not found")]
    NotFound {
        /// The identifier that could not be located.
        identifier: String,
    },

    /// The artifact exists but could not be read.
    #[error("failed to read source artifact '{identifier}': {source}")]
    Io {
        /// The identifier whose artifact failed to read.
        identifier: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl ResolveError {
    /// Creates a `NotFound` error for the given identifier.
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }
}
