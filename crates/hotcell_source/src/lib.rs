//! Source resolution for the recompilation cell.
//!
//! This crate defines the [`SourceResolver`] boundary the cell talks to —
//! how an identifier becomes current source text — along with the two
//! resolvers the workspace ships: [`DirResolver`] for filesystem-backed
//! artifacts and [`MemoryResolver`] for in-memory ones.

#![warn(missing_docs)]

pub mod dir_resolver;
pub mod error;
pub mod memory_resolver;
pub mod resolver;

pub use dir_resolver::DirResolver;
pub use error::ResolveError;
pub use memory_resolver::MemoryResolver;
pub use resolver::SourceResolver;
