//! Parsed infix expressions in one real variable `x`.
//!
//! The grammar covers what a student types into a numerical-methods exercise:
//! `+ - * / ^` (with `**` as an alias for `^`), unary signs, parentheses,
//! implicit multiplication (`2x`), the constants `pi` and `e`, and the
//! functions `sin cos tan asin acos atan sinh cosh tanh exp ln log log10 log2
//! sqrt abs` (`log` is the natural logarithm).

mod ast;
mod error;
mod lexer;
mod parser;

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

pub use error::{EvalError, SyntaxError};

use crate::Function;

/// A parsed expression in the variable `x`.
///
/// Parsing happens once, up front, so syntax errors surface when the
/// expression is supplied rather than when a solver first evaluates it.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    root: ast::Node,
}

impl Expression {
    /// Parses an expression from its textual form.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if the text is not a well-formed expression.
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let tokens = lexer::tokenize(source)?;
        let root = parser::parse(&tokens)?;
        Ok(Self {
            source: source.trim().to_owned(),
            root,
        })
    }

    /// Returns the source text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Function for Expression {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = self.root.eval(x)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { x, value })
        }
    }
}

/// Two expressions are equal when they parse to the same tree,
/// regardless of whitespace or operator spelling.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl FromStr for Expression {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}
