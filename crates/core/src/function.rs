use crate::EvalError;

/// A real-valued function of one real variable.
///
/// Solvers only ever see a function through this trait, so an evaluation can
/// fail (division by zero, a domain error, a non-finite result) and the
/// failure travels back to the caller unchanged.
///
/// Closures of type `Fn(f64) -> f64` implement `Function`; a non-finite return
/// value is reported as [`EvalError::NonFinite`].
pub trait Function {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the function is undefined at `x`.
    fn eval(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = self(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { x, value })
        }
    }
}
