use serde::Serialize;

/// One row of a root-finding procedure table.
///
/// Which optional columns are filled depends on the method: bracketing
/// methods record the interval that produced `x`, derivative-based methods
/// record the derivative values at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Iteration {
    /// Iteration index; the seed row of open methods is iteration 0.
    pub iter: usize,

    /// Estimate produced by this iteration.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Error measure of this iteration, absent on seed rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,

    /// Interval that produced `x`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket: Option<[f64; 2]>,

    /// First derivative at `x`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfx: Option<f64>,

    /// Second derivative at `x`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d2fx: Option<f64>,
}

impl Iteration {
    pub(crate) fn new(iter: usize, x: f64, fx: f64) -> Self {
        Self {
            iter,
            x,
            fx,
            error: None,
            bracket: None,
            dfx: None,
            d2fx: None,
        }
    }

    pub(crate) fn with_error(self, error: f64) -> Self {
        Self {
            error: Some(error),
            ..self
        }
    }

    pub(crate) fn with_bracket(self, bracket: [f64; 2]) -> Self {
        Self {
            bracket: Some(bracket),
            ..self
        }
    }

    pub(crate) fn with_dfx(self, dfx: f64) -> Self {
        Self {
            dfx: Some(dfx),
            ..self
        }
    }

    pub(crate) fn with_d2fx(self, d2fx: f64) -> Self {
        Self {
            d2fx: Some(d2fx),
            ..self
        }
    }
}
