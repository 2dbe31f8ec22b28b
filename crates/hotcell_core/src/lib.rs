//! The recompilation cell: one externally editable source artifact treated
//! as a live, hot-swappable unit of behavior.
//!
//! A [`HotCell`] binds an identifier to a [`SourceResolver`](hotcell_source::SourceResolver),
//! a [`Compiler`], and an [`Instantiator`]. Every accessor call re-resolves
//! the source text, detects whether it changed since the last committed
//! snapshot, and only on a change recompiles, re-instantiates, runs the
//! optional post-instantiation hook, and commits the new triple atomically.
//! Unchanged content always returns the committed instance, reference-stable.
//!
//! The baseline cell is single-threaded (`&mut self` accessors); hosts that
//! share a cell across threads wrap it in [`shared::SharedCell`], which puts
//! the whole refresh cycle under one mutex.

#![warn(missing_docs)]

pub mod backend;
pub mod cell;
pub mod error;
pub mod hook;
pub mod shared;
pub mod snapshot;

pub use backend::{Compiler, DefaultInstantiator, Instantiator};
pub use cell::HotCell;
pub use error::{CellError, CompileError, HookError, InstantiateError};
pub use hook::Hook;
pub use shared::SharedCell;
pub use snapshot::Snapshot;
