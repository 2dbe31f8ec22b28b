//! The post-instantiation hook type.

use crate::error::HookError;

/// A caller-supplied callback run with each newly constructed instance,
/// strictly after construction and strictly before the accessor returns.
///
/// At most one hook is registered per cell; registering a new one replaces
/// the old. A hook failure propagates as [`HookError`] and the instance
/// that triggered it is discarded without being committed.
pub type Hook<I> = Box<dyn FnMut(&I) -> Result<(), HookError> + Send>;
