//! Shared primitives for the hotcell workspace.
//!
//! Currently this is just [`ContentHash`], the content fingerprint used by
//! the recompilation cell to short-circuit snapshot comparison.

#![warn(missing_docs)]

pub mod hash;

pub use hash::ContentHash;
