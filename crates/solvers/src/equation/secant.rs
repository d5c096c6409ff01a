//! Secant iteration from two starting points.
//!
//! Each step replaces the derivative in Newton's update with the slope of
//! the line through the two most recent iterates. The seeds are recorded as
//! rows 0 and 1 without an error; the error measure `|x_n − x_{n−1}|` starts
//! with the first computed iterate. Only computed iterates count against
//! `max_iters`, so `Solution::iters` is one less than the last row index.

use tabula_core::{Function, MethodKind, Observer};

use super::{
    Action, Config, DENOMINATOR_EPSILON, Error, Iteration, Solution, Status, evaluate::evaluate,
    trace::Trace,
};

/// Finds a root of `f` starting from `x0` and `x1`.
///
/// # Errors
///
/// Returns an error if `f` cannot be evaluated at an iterate.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    x1: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    let mut trace = Trace::new(MethodKind::Secant, observer);

    let mut prev = x0;
    let mut f_prev = evaluate(f, prev)?;
    let flow = trace.record(Iteration::new(0, prev, f_prev));
    if f_prev == 0.0 {
        return Ok(trace.finish(Status::Converged, 0));
    }
    if flow.is_break() {
        return Ok(trace.finish(Status::StoppedByObserver, 0));
    }

    let mut x = x1;
    let mut fx = evaluate(f, x)?;
    let flow = trace.record(Iteration::new(1, x, fx));
    if fx == 0.0 {
        return Ok(trace.finish(Status::Converged, 0));
    }
    if flow.is_break() {
        return Ok(trace.finish(Status::StoppedByObserver, 0));
    }

    for step in 1..=config.max_iters() {
        let denominator = fx - f_prev;
        if denominator.abs() <= DENOMINATOR_EPSILON {
            return Ok(trace.finish(Status::ZeroDenominator, step - 1));
        }

        let next = x - fx * (x - prev) / denominator;
        let f_next = evaluate(f, next)?;
        let error = (next - x).abs();
        (prev, f_prev) = (x, fx);
        (x, fx) = (next, f_next);

        let flow = trace.record(Iteration::new(step + 1, x, fx).with_error(error));

        if config.is_converged(fx, error) {
            return Ok(trace.finish(Status::Converged, step));
        }
        if flow.is_break() {
            return Ok(trace.finish(Status::StoppedByObserver, step));
        }
    }

    Ok(trace.finish(Status::MaxIters, config.max_iters()))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: &F, x0: f64, x1: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, x0, x1, config, &mut ())
}
