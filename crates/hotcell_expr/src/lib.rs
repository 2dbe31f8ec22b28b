//! Arithmetic-expression backing for the recompilation cell.
//!
//! One concrete answer to the "what does the compiler actually compile"
//! question: a small expression language over one free variable `x`
//! (integers, `+ - * /`, unary minus, parentheses). [`ExprCompiler`]
//! parses source text into an [`ExprProgram`] unit, [`ExprInstantiator`]
//! constructs an [`Evaluator`] instance from it. Hot-swapping a cell
//! bound to an expression artifact swaps the arithmetic a host observes.

#![warn(missing_docs)]

pub mod ast;
pub mod compiler;
pub mod eval;
pub mod parser;

pub use ast::{BinaryOp, Expr};
pub use compiler::{ExprCompiler, ExprProgram};
pub use eval::{EvalError, Evaluator, ExprInstantiator};
pub use parser::{parse, ParseError};
