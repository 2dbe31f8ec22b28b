//! Opt-in synchronization for concurrently shared cells.
//!
//! The baseline [`HotCell`](crate::cell::HotCell) is single-threaded.
//! [`SharedCell`] is the explicit strengthening for concurrent hosts: one
//! mutex around the entire refresh algorithm, so at most one
//! compile/instantiate/hook cycle is in flight per cell at a time and a
//! losing racer observes the winner's commit instead of redoing it.

use std::sync::{Arc, Mutex};

use hotcell_source::SourceResolver;

use crate::backend::{Compiler, Instantiator};
use crate::cell::HotCell;
use crate::error::CellError;

/// A [`HotCell`] behind a mutex, shareable across threads.
pub struct SharedCell<R, C, N>
where
    C: Compiler,
    N: Instantiator<C::Unit>,
{
    inner: Mutex<HotCell<R, C, N>>,
}

impl<R, C, N> SharedCell<R, C, N>
where
    R: SourceResolver,
    C: Compiler,
    N: Instantiator<C::Unit>,
{
    /// Wraps an already-bound cell.
    pub fn new(cell: HotCell<R, C, N>) -> Self {
        Self {
            inner: Mutex::new(cell),
        }
    }

    /// Returns the current compiled unit; see [`HotCell::unit`].
    ///
    /// The whole refresh runs under the lock.
    pub fn unit(&self) -> Result<Arc<C::Unit>, CellError> {
        self.lock().unit()
    }

    /// Returns the current instance; see [`HotCell::instance`].
    ///
    /// The whole refresh runs under the lock.
    pub fn instance(&self) -> Result<Arc<N::Instance>, CellError> {
        self.lock().instance()
    }

    /// Registers the post-instantiation hook, replacing any previous one.
    pub fn set_hook<F>(&self, hook: F)
    where
        F: FnMut(&N::Instance) -> Result<(), crate::error::HookError> + Send + 'static,
    {
        self.lock().set_hook(hook);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HotCell<R, C, N>> {
        // A panicked refresh left no partial commit behind (commit is a
        // single assignment), so the cell state is still consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
