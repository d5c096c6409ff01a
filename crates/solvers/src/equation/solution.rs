use serde::Serialize;

use tabula_core::MethodKind;

use super::Iteration;

/// How a root-finding run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    /// The error measure fell below the tolerance, or an exact root was hit.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// A derivative or secant denominator vanished, so no further step is
    /// defined.
    ZeroDenominator,

    /// Incremental search found an interval across which the function
    /// changes sign.
    Bracketed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding run: the final estimate plus the full trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Method that produced the solution.
    pub method: MethodKind,

    /// Final solver status.
    pub status: Status,

    /// Final estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Final bracket, for methods that maintain one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket: Option<[f64; 2]>,

    /// Every iteration record, in order.
    pub iterations: Vec<Iteration>,
}
