use thiserror::Error;

use tabula_core::EvalError;

use super::bracket::BracketError;

/// Errors that can occur during a root-finding run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid bracket [{}, {}]: {source}", .bracket[0], .bracket[1])]
    InvalidBracket {
        bracket: [f64; 2],
        #[source]
        source: BracketError,
    },

    #[error("function evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: EvalError,
    },
}
