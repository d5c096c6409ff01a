use tabula_core::Function;

use super::Error;

/// Evaluates `f` at `x`, attaching the point to any failure.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if the function is undefined at `x`.
pub(super) fn evaluate<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Function + ?Sized,
{
    f.eval(x).map_err(|source| Error::Evaluation { x, source })
}
