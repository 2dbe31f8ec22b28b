//! The compiler and instantiator capabilities the cell composes with.
//!
//! Both are opaque to the cell: it neither inspects units nor instances,
//! it only sequences compile → instantiate → hook → commit.

use crate::error::{CompileError, InstantiateError};
use std::marker::PhantomData;

/// Turns source text into an executable unit.
///
/// The identifier is passed through for error reporting and for backends
/// that key toolchain state by artifact name.
pub trait Compiler {
    /// The opaque compiled artifact this backend produces.
    type Unit;

    /// Compiles `source` into a unit, or fails with a [`CompileError`].
    fn compile(&self, source: &str, identifier: &str) -> Result<Self::Unit, CompileError>;
}

/// Constructs a fresh instance from a compiled unit.
pub trait Instantiator<U> {
    /// The instance type this backend constructs.
    type Instance;

    /// Constructs a new instance from `unit`, or fails with an
    /// [`InstantiateError`].
    fn instantiate(&self, unit: &U) -> Result<Self::Instance, InstantiateError>;
}

/// Instantiator for instance types with parameterless construction.
///
/// The Rust rendering of reflective default construction: the unit is not
/// consulted, the instance is built via [`Default`]. A unit whose instance
/// needs data from the unit itself takes a custom [`Instantiator`] instead;
/// "no construction path exists" is a missing `Default` bound here, caught
/// at compile time rather than surfaced as an [`InstantiateError`].
pub struct DefaultInstantiator<I> {
    _marker: PhantomData<fn() -> I>,
}

impl<I> DefaultInstantiator<I> {
    /// Creates the instantiator.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> Default for DefaultInstantiator<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U, I: Default> Instantiator<U> for DefaultInstantiator<I> {
    type Instance = I;

    fn instantiate(&self, _unit: &U) -> Result<I, InstantiateError> {
        Ok(I::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, PartialEq, Debug)]
    struct Widget {
        clicks: u32,
    }

    #[test]
    fn default_instantiator_builds_fresh_instances() {
        let inst: DefaultInstantiator<Widget> = DefaultInstantiator::new();
        let unit = "ignored unit";
        let a = inst.instantiate(&unit).unwrap();
        assert_eq!(a, Widget { clicks: 0 });
    }
}
