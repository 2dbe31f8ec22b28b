//! Hand-written recursive-descent parser for the expression language.
//!
//! Grammar (usual precedence, left associative):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := NUMBER | 'x' | '-' factor | '(' expr ')'
//! ```

use crate::ast::{BinaryOp, Expr};

/// Maximum nesting depth before parsing fails instead of recursing further.
const MAX_DEPTH: usize = 256;

/// A parse failure with the byte position it occurred at.
#[derive(Debug, thiserror::Error)]
#[error("{message} at byte {position}")]
pub struct ParseError {
    /// Byte offset into the source where the error was detected.
    pub position: usize,
    /// Description of the failure.
    pub message: String,
}

/// Parses a complete expression from `source`.
///
/// The whole input must be consumed; trailing non-whitespace input is an
/// error, as is empty input.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser {
        source: source.as_bytes(),
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;
    parser.skip_whitespace();
    if parser.pos < parser.source.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(expr)
}

struct Parser<'a> {
    source: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        loop {
            self.skip_whitespace();
            let op = match self.peek() {
                b'+' => BinaryOp::Add,
                b'-' => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.factor()?;
        loop {
            self.skip_whitespace();
            let op = match self.peek() {
                b'*' => BinaryOp::Mul,
                b'/' => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.skip_whitespace();
        if self.depth >= MAX_DEPTH {
            return Err(self.error("expression nesting too deep"));
        }
        self.depth += 1;
        let result = match self.peek() {
            b'(' => {
                self.pos += 1;
                let inner = self.expr()?;
                self.skip_whitespace();
                if self.peek() != b')' {
                    return Err(self.error("expected ')'"));
                }
                self.pos += 1;
                Ok(inner)
            }
            b'-' => {
                self.pos += 1;
                Ok(Expr::Neg(Box::new(self.factor()?)))
            }
            b'0'..=b'9' => self.number(),
            b'x' => {
                if self.source.get(self.pos + 1).is_some_and(|b| b.is_ascii_alphanumeric()) {
                    return Err(self.error("unknown identifier"));
                }
                self.pos += 1;
                Ok(Expr::Var)
            }
            0 => Err(self.error("expected expression, found end of input")),
            _ => Err(self.error("expected expression")),
        };
        self.depth -= 1;
        result
    }

    fn number(&mut self) -> Result<Expr, ParseError> {
        let start = self.pos;
        while self.peek().is_ascii_digit() {
            self.pos += 1;
        }
        // Bytes in start..pos are ASCII digits, so this is valid UTF-8.
        let digits = std::str::from_utf8(&self.source[start..self.pos])
            .map_err(|_| self.error_at(start, "invalid literal"))?;
        let value: i64 = digits
            .parse()
            .map_err(|_| self.error_at(start, "integer literal too large"))?;
        Ok(Expr::Number(value))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> u8 {
        if self.pos < self.source.len() {
            self.source[self.pos]
        } else {
            0
        }
    }

    fn error(&self, message: &str) -> ParseError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, position: usize, message: &str) -> ParseError {
        ParseError {
            position,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_literal() {
        assert_eq!(parse("42").unwrap(), Expr::Number(42));
    }

    #[test]
    fn variable() {
        assert_eq!(parse("x").unwrap(), Expr::Var);
    }

    #[test]
    fn precedence() {
        // 1 + 2 * 3 parses as 1 + (2 * 3)
        let expr = parse("1 + 2 * 3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Add,
                Expr::Number(1),
                Expr::binary(BinaryOp::Mul, Expr::Number(2), Expr::Number(3)),
            )
        );
    }

    #[test]
    fn left_associativity() {
        // 10 - 3 - 2 parses as (10 - 3) - 2
        let expr = parse("10 - 3 - 2").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Sub,
                Expr::binary(BinaryOp::Sub, Expr::Number(10), Expr::Number(3)),
                Expr::Number(2),
            )
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse("(1 + 2) * 3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                BinaryOp::Mul,
                Expr::binary(BinaryOp::Add, Expr::Number(1), Expr::Number(2)),
                Expr::Number(3),
            )
        );
    }

    #[test]
    fn unary_minus() {
        assert_eq!(parse("-x").unwrap(), Expr::Neg(Box::new(Expr::Var)));
        assert_eq!(
            parse("--5").unwrap(),
            Expr::Neg(Box::new(Expr::Neg(Box::new(Expr::Number(5)))))
        );
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(parse("  x+1 ").unwrap(), parse("x + 1").unwrap());
    }

    #[test]
    fn empty_input_rejected() {
        let err = parse("").unwrap_err();
        assert!(err.message.contains("end of input"));
    }

    #[test]
    fn trailing_input_rejected() {
        let err = parse("x + 1 garbage").unwrap_err();
        assert!(err.message.contains("trailing"));
    }

    #[test]
    fn unknown_identifier_rejected() {
        assert!(parse("y + 1").is_err());
        assert!(parse("xy").is_err());
    }

    #[test]
    fn unclosed_paren_rejected() {
        let err = parse("(x + 1").unwrap_err();
        assert!(err.message.contains("')'"));
    }

    #[test]
    fn dangling_operator_rejected() {
        assert!(parse("x +").is_err());
        assert!(parse("* 2").is_err());
    }

    #[test]
    fn deeply_nested_parens_fail_cleanly() {
        // Far past the depth limit; must come back as a parse error, not
        // a stack overflow.
        let source = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("too deep"));
    }

    #[test]
    fn long_unary_minus_chain_fails_cleanly() {
        let source = format!("{}1", "-".repeat(50_000));
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("too deep"));
    }

    #[test]
    fn moderate_nesting_accepted() {
        let source = format!("{}x{}", "(".repeat(64), ")".repeat(64));
        assert_eq!(parse(&source).unwrap(), Expr::Var);
    }

    #[test]
    fn overflowing_literal_rejected() {
        let err = parse("99999999999999999999").unwrap_err();
        assert!(err.message.contains("too large"));
    }
}
