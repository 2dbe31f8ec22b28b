//! The expression language's `Compiler` implementation.

use hotcell_core::{CompileError, Compiler};

use crate::ast::Expr;
use crate::parser;

/// The compiled unit for an expression artifact: the parsed tree plus
/// the identifier it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprProgram {
    /// The parsed expression.
    pub expr: Expr,
    /// The identifier of the artifact this program was compiled from.
    pub identifier: String,
}

/// Compiles expression source text into an [`ExprProgram`].
#[derive(Debug, Default)]
pub struct ExprCompiler;

impl Compiler for ExprCompiler {
    type Unit = ExprProgram;

    fn compile(&self, source: &str, identifier: &str) -> Result<ExprProgram, CompileError> {
        let expr = parser::parse(source)
            .map_err(|e| CompileError::new(identifier, e.to_string()))?;
        Ok(ExprProgram {
            expr,
            identifier: identifier.to_string(),
        })
    }
}
