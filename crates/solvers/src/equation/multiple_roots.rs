//! Modified Newton iteration for roots of multiplicity greater than one.
//!
//! The update `x − f·f' / (f'² − f·f'')` restores quadratic convergence at
//! repeated roots, where plain Newton slows to linear. Rows record both
//! derivatives; the error measure is `|x_n − x_{n−1}|`.

use tabula_core::{Function, MethodKind, Observer};

use super::{
    Action, Config, DENOMINATOR_EPSILON, Error, Iteration, Solution, Status, evaluate::evaluate,
    trace::Trace,
};

/// Finds a possibly repeated root of `f` from `x0`.
///
/// # Errors
///
/// Returns an error if `f`, `df`, or `d2f` cannot be evaluated at an iterate.
pub fn solve<F, D, D2, Obs>(
    f: &F,
    df: &D,
    d2f: &D2,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    D2: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    let mut trace = Trace::new(MethodKind::MultipleRoots, observer);

    let mut x = x0;
    let (mut fx, mut dfx, mut d2fx) = (evaluate(f, x)?, evaluate(df, x)?, evaluate(d2f, x)?);
    let flow = trace.record(Iteration::new(0, x, fx).with_dfx(dfx).with_d2fx(d2fx));
    if fx == 0.0 {
        return Ok(trace.finish(Status::Converged, 0));
    }
    if flow.is_break() {
        return Ok(trace.finish(Status::StoppedByObserver, 0));
    }

    for iter in 1..=config.max_iters() {
        let denominator = dfx * dfx - fx * d2fx;
        if denominator.abs() <= DENOMINATOR_EPSILON {
            return Ok(trace.finish(Status::ZeroDenominator, iter - 1));
        }

        let next = x - fx * dfx / denominator;
        (fx, dfx, d2fx) = (evaluate(f, next)?, evaluate(df, next)?, evaluate(d2f, next)?);
        let error = (next - x).abs();
        x = next;

        let flow = trace.record(
            Iteration::new(iter, x, fx)
                .with_error(error)
                .with_dfx(dfx)
                .with_d2fx(d2fx),
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

/// Runs the multiple-roots method without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, D, D2>(
    f: &F,
    df: &D,
    d2f: &D2,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    D2: Function + ?Sized,
{
    solve(f, df, d2f, x0, config, &mut ())
}
