//! The expression evaluator instance and its `Instantiator`.

use hotcell_core::{InstantiateError, Instantiator};

use crate::ast::{BinaryOp, Expr};
use crate::compiler::ExprProgram;

/// Errors that can occur while evaluating an expression.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate result overflowed `i64`.
    #[error("arithmetic overflow")]
    Overflow,
}

/// A live instance constructed from an [`ExprProgram`].
///
/// Evaluation is pure: the same `x` always yields the same result for
/// the same program.
#[derive(Debug, Clone)]
pub struct Evaluator {
    expr: Expr,
}

impl Evaluator {
    /// Evaluates the expression with the given value for `x`.
    pub fn eval(&self, x: i64) -> Result<i64, EvalError> {
        eval_expr(&self.expr, x)
    }
}

fn eval_expr(expr: &Expr, x: i64) -> Result<i64, EvalError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Var => Ok(x),
        Expr::Neg(inner) => eval_expr(inner, x)?
            .checked_neg()
            .ok_or(EvalError::Overflow),
        Expr::Binary { op, lhs, rhs } => {
            let l = eval_expr(lhs, x)?;
            let r = eval_expr(rhs, x)?;
            match op {
                BinaryOp::Add => l.checked_add(r).ok_or(EvalError::Overflow),
                BinaryOp::Sub => l.checked_sub(r).ok_or(EvalError::Overflow),
                BinaryOp::Mul => l.checked_mul(r).ok_or(EvalError::Overflow),
                BinaryOp::Div => {
                    if r == 0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        l.checked_div(r).ok_or(EvalError::Overflow)
                    }
                }
            }
        }
    }
}

/// Constructs [`Evaluator`] instances from compiled programs.
///
/// Construction takes nothing beyond the unit itself and cannot fail for
/// a well-formed program, but the fallible [`Instantiator`] contract is
/// kept so hosts can substitute construction paths that do.
#[derive(Debug, Default)]
pub struct ExprInstantiator;

impl Instantiator<ExprProgram> for ExprInstantiator {
    type Instance = Evaluator;

    fn instantiate(&self, unit: &ExprProgram) -> Result<Evaluator, InstantiateError> {
        Ok(Evaluator {
            expr: unit.expr.clone(),
        })
    }
}
