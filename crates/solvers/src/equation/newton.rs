//! Newton–Raphson iteration `x_{n+1} = x_n − f(x_n) / f'(x_n)`.
//!
//! The error measure is `|x_n − x_{n−1}|`. A derivative whose magnitude is at
//! or below [`DENOMINATOR_EPSILON`] stops the run with
//! [`Status::ZeroDenominator`] before any step is taken from that point.
//!
//! When no derivative is supplied, [`solve_estimated`] uses a
//! [`CentralDifference`] of `f` in its place.
//!
//! [`DENOMINATOR_EPSILON`]: super::DENOMINATOR_EPSILON

use tabula_core::{EvalError, Function, MethodKind, Observer};

use super::{
    Action, Config, DENOMINATOR_EPSILON, Error, Iteration, Solution, Status, evaluate::evaluate,
    trace::Trace,
};

/// Finds a root of `f` from `x0` using the derivative `df`.
///
/// # Errors
///
/// Returns an error if `f` or `df` cannot be evaluated at an iterate.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    let mut trace = Trace::new(MethodKind::Newton, observer);

    let mut x = x0;
    let mut fx = evaluate(f, x)?;
    let mut dfx = evaluate(df, x)?;
    let flow = trace.record(Iteration::new(0, x, fx).with_dfx(dfx));
    if fx == 0.0 {
        return Ok(trace.finish(Status::Converged, 0));
    }
    if flow.is_break() {
        return Ok(trace.finish(Status::StoppedByObserver, 0));
    }

    for iter in 1..=config.max_iters() {
        if dfx.abs() <= DENOMINATOR_EPSILON {
            return Ok(trace.finish(Status::ZeroDenominator, iter - 1));
        }

        let next = x - fx / dfx;
        fx = evaluate(f, next)?;
        dfx = evaluate(df, next)?;
        let error = (next - x).abs();
        x = next;

        let flow = trace.record(
            Iteration::new(iter, x, fx)
                .with_error(error)
                .with_dfx(dfx),
        );

        if config.is_converged(fx, error) {
            return Ok(trace.finish(Status::Converged, iter));
        }
        if flow.is_break() {
            return Ok(trace.finish(Status::StoppedByObserver, iter));
        }
    }

    Ok(trace.finish(Status::MaxIters, config.max_iters()))
}

/// Finds a root of `f` from `x0`, estimating the derivative numerically.
///
/// # Errors
///
/// Returns an error if `f` cannot be evaluated at an iterate or at one of
/// the points used to estimate its derivative.
pub fn solve_estimated<F, Obs>(
    f: &F,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    solve(f, &CentralDifference::new(f), x0, config, observer)
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, x0, config, &mut ())
}

/// Central-difference estimate of a function's first derivative.
///
/// The step scales with `|x|` so that the estimate keeps its relative
/// accuracy away from the origin.
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<'a, F: ?Sized> {
    f: &'a F,
}

impl<'a, F: Function + ?Sized> CentralDifference<'a, F> {
    /// Relative step size.
    pub const STEP: f64 = 1e-6;

    /// Wraps `f`.
    #[must_use]
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }

    fn step_at(x: f64) -> f64 {
        Self::STEP * x.abs().max(1.0)
    }
}

impl<F: Function + ?Sized> Function for CentralDifference<'_, F> {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let h = Self::step_at(x);
        let ahead = self.f.eval(x + h)?;
        let behind = self.f.eval(x - h)?;
        Ok((ahead - behind) / (2.0 * h))
    }
}
