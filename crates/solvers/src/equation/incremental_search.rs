//! Incremental search for a sign change.
//!
//! Starting at `x0`, the search steps by `delta` until `f` changes sign
//! between consecutive points, then reports that interval as a bracket for
//! the bracketing methods. There is no error measure; the search stops at the
//! first sign change, at an exact root, or after `max_iters` steps.

use tabula_core::{Function, MethodKind, Observer};

use super::{
    Action, Error, Iteration, Solution, Status, bracket::opposite_signs, evaluate::evaluate,
    trace::Trace,
};

/// Steps from `x0` by `delta` looking for a sign change of `f`.
///
/// # Errors
///
/// Returns an error if `f` cannot be evaluated at a visited point.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    delta: f64,
    max_iters: usize,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    let mut trace = Trace::new(MethodKind::IncrementalSearch, observer);

    let mut x = x0;
    let mut fx = evaluate(f, x)?;
    let flow = trace.record(Iteration::new(0, x, fx));
    if fx == 0.0 {
        return Ok(trace.finish(Status::Converged, 0));
    }
    if flow.is_break() {
        return Ok(trace.finish(Status::StoppedByObserver, 0));
    }

    for iter in 1..=max_iters {
        let next = x + delta;
        let f_next = evaluate(f, next)?;
        let interval = [x.min(next), x.max(next)];

        let flow = trace.record(Iteration::new(iter, next, f_next).with_bracket(interval));

        if f_next == 0.0 {
            return Ok(trace.finish(Status::Converged, iter));
        }
        if opposite_signs(fx, f_next) {
            return Ok(trace.finish_with_bracket(Status::Bracketed, iter, Some(interval)));
        }
        if flow.is_break() {
            return Ok(trace.finish(Status::StoppedByObserver, iter));
        }

        x = next;
        fx = f_next;
    }

    Ok(trace.finish(Status::MaxIters, max_iters))
}

/// Runs incremental search without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(
    f: &F,
    x0: f64,
    delta: f64,
    max_iters: usize,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, x0, delta, max_iters, &mut ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tabula_core::Expression;

    #[test]
    fn brackets_first_sign_change() {
        let f = Expression::parse("x^2 - 2").expect("valid expression");

        let solution = solve_unobserved(&f, 0.0, 0.5, 100).expect("should search");

        assert_eq!(solution.status, Status::Bracketed);
        assert_eq!(solution.bracket, Some([1.0, 1.5]));
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.iterations.len(), 4);
    }

    #[test]
    fn tiny_function_values_still_change_sign() {
        let f = |x: f64| 1e-200 * (x - 0.75);

        let solution = solve_unobserved(&f, 0.0, 0.5, 10).expect("should search");

        assert_eq!(solution.status, Status::Bracketed);
        assert_eq!(solution.bracket, Some([0.5, 1.0]));
        assert_eq!(solution.iters, 2);
    }

    #[test]
    fn negative_step_walks_left() {
        let f = |x: f64| x + 2.3;

        let solution = solve_unobserved(&f, 0.0, -1.0, 10).expect("should search");

        assert_eq!(solution.status, Status::Bracketed);
        assert_eq!(solution.bracket, Some([-3.0, -2.0]));
    }

    #[test]
    fn stops_on_exact_root() {
        let f = |x: f64| x - 1.5;

        let solution = solve_unobserved(&f, 0.0, 0.5, 10).expect("should search");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 1.5);
        assert_eq!(solution.bracket, None);
    }

    #[test]
    fn seed_root_needs_no_steps() {
        let f = |x: f64| x;

        let solution = solve_unobserved(&f, 0.0, 0.5, 10).expect("should search");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn reports_iteration_limit() {
        let f = |x: f64| x * x + 1.0;

        let solution = solve_unobserved(&f, 0.0, 0.1, 20).expect("should search");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iterations.len(), 21);
    }
}
