//! Error taxonomy for the recompilation cell.
//!
//! Every failure surfaces directly to the caller of the accessor that
//! triggered the refresh. Nothing is logged-and-swallowed, nothing is
//! retried internally, and a failed refresh never disturbs the previously
//! committed snapshot/unit/instance.

use hotcell_source::ResolveError;

/// The source text failed to compile into a unit.
#[derive(Debug, thiserror::Error)]
#[error("compilation of '{identifier}' failed: {reason}")]
pub struct CompileError {
    /// The identifier whose source failed to compile.
    pub identifier: String,
    /// Description of the compilation failure.
    pub reason: String,
}

impl CompileError {
    /// Creates a new compilation error.
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }
}

/// A compiled unit could not be constructed into an instance.
#[derive(Debug, thiserror::Error)]
#[error("instantiation failed: {reason}")]
pub struct InstantiateError {
    /// Description of the construction failure.
    pub reason: String,
}

impl InstantiateError {
    /// Creates a new instantiation error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The registered post-instantiation hook failed.
///
/// The instance that triggered the hook is discarded, not committed.
#[derive(Debug, thiserror::Error)]
#[error("post-instantiation hook failed: {reason}")]
pub struct HookError {
    /// Description of the hook failure.
    pub reason: String,
    /// The underlying error raised by the hook, if it carried one.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HookError {
    /// Creates a hook error from a plain reason string.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }

    /// Creates a hook error wrapping an arbitrary underlying error.
    pub fn from_source(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            reason: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

/// Any failure an accessor can surface.
///
/// Each variant is transparent: the collaborator's error passes through
/// unmodified, the cell adds nothing.
#[derive(Debug, thiserror::Error)]
pub enum CellError {
    /// The source artifact was missing or unreadable.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The source text failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The compiled unit could not be instantiated.
    #[error(transparent)]
    Instantiate(#[from] InstantiateError),

    /// The post-instantiation hook failed.
    #[error(transparent)]
    Hook(#[from] HookError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_display() {
        let err = CompileError::new("rules/pricing.expr", "unexpected token ')'");
        assert_eq!(
            format!("{err}"),
            "compilation of 'rules/pricing.expr' failed: unexpected token ')'"
        );
    }

    #[test]
    fn instantiate_error_display() {
        let err = InstantiateError::new("no parameterless construction path");
        assert_eq!(
            format!("{err}"),
            "instantiation failed: no parameterless construction path"
        );
    }

    #[test]
    fn hook_error_display() {
        let err = HookError::new("listener rejected instance");
        assert_eq!(
            format!("{err}"),
            "post-instantiation hook failed: listener rejected instance"
        );
    }

    #[test]
    fn hook_error_from_source_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "warmup failed");
        let err = HookError::from_source(io);
        assert!(err.reason.contains("warmup failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn cell_error_is_transparent() {
        let err: CellError = ResolveError::not_found("gone.expr").into();
        assert_eq!(format!("{err}"), "source artifact 'gone.expr' not found");

        let err: CellError = CompileError::new("a", "bad").into();
        assert_eq!(format!("{err}"), "compilation of 'a' failed: bad");
    }
}
