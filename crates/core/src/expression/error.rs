use thiserror::Error;

/// Errors that can occur when parsing an expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number `{text}` at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier `{name}` at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("function `{name}` at position {pos} must be followed by '('")]
    MissingArgument { name: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unclosed '(' at position {pos}")]
    UnclosedParen { pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Errors that can occur when evaluating a function.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("division by zero at x = {x}")]
    DivisionByZero { x: f64 },

    #[error("{function}({arg}) is undefined (at x = {x})")]
    Domain {
        function: &'static str,
        arg: f64,
        x: f64,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}
