//! Fixed-point iteration `x_{n+1} = g(x_n)`.
//!
//! The iteration function `g` is chosen so that its fixed points are roots
//! of `f`. The error measure is `|x_n − x_{n−1}|`. Convergence is never
//! assumed: a diverging or cycling iteration ends with [`Status::MaxIters`].

use tabula_core::{Function, MethodKind, Observer};

use super::{
    Action, Config, Error, Iteration, Solution, Status, evaluate::evaluate, trace::Trace,
};

/// Iterates `g` from `x0`, recording `f` at each iterate.
///
/// # Errors
///
/// Returns an error if `f` or `g` cannot be evaluated at a required point.
pub fn solve<F, G, Obs>(
    f: &F,
    g: &G,
    x0: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    G: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    let mut trace = Trace::new(MethodKind::FixedPoint, observer);

    let mut x = x0;
    let fx = evaluate(f, x)?;
    let flow = trace.record(Iteration::new(0, x, fx));
    if fx == 0.0 {
        return Ok(trace.finish(Status::Converged, 0));
    }
    if flow.is_break() {
        return Ok(trace.finish(Status::StoppedByObserver, 0));
    }

    for iter in 1..=config.max_iters() {
        let next = evaluate(g, x)?;
        let fx = evaluate(f, next)?;
        let error = (next - x).abs();
        x = next;

        let flow = trace.record(Iteration::new(iter, x, fx).with_error(error));

        if config.is_converged(fx, error) {
            return Ok(trace.finish(Status::Converged, iter));
        }
        if flow.is_break() {
            return Ok(trace.finish(Status::StoppedByObserver, iter));
        }
    }

    Ok(trace.finish(Status::MaxIters, config.max_iters()))
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, G>(f: &F, g: &G, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    G: Function + ?Sized,
{
    solve(f, g, x0, config, &mut ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tabula_core::Expression;

    #[test]
    fn converges_when_g_is_a_contraction() {
        // x = cos(x) has |g'(x*)| = sin(0.739…) ≈ 0.67 < 1.
        let f = Expression::parse("x - cos(x)").expect("valid expression");
        let g = Expression::parse("cos(x)").expect("valid expression");
        let config = Config::new(200, 1e-10).expect("valid config");

        let solution = solve_unobserved(&f, &g, 1.0, &config).expect("should iterate");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-9);
        assert!(solution.iters < 200);
    }

    #[test]
    fn errors_are_successive_differences() {
        let f = |x: f64| x - 0.5 * x - 1.0;
        let g = |x: f64| 0.5 * x + 1.0;
        let config = Config::new(3, 1e-12).expect("valid config");

        let solution = solve_unobserved(&f, &g, 0.0, &config).expect("should iterate");

        let xs: Vec<f64> = solution.iterations.iter().map(|it| it.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 1.5, 1.75]);

        let errors: Vec<Option<f64>> = solution.iterations.iter().map(|it| it.error).collect();
        assert_eq!(errors, vec![None, Some(1.0), Some(0.5), Some(0.25)]);
    }

    #[test]
    fn diverging_iteration_hits_the_limit() {
        // g(x) = 2x + 1 has |g'| = 2 and repels from its fixed point x = -1.
        let f = |x: f64| x + 1.0;
        let g = |x: f64| 2.0 * x + 1.0;
        let config = Config::new(25, 1e-6).expect("valid config");

        let solution = solve_unobserved(&f, &g, 0.0, &config).expect("should iterate");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 25);
    }

    #[test]
    fn cycling_iteration_hits_the_limit() {
        // g(x) = 1 - x flips between 0 and 1 around its fixed point 0.5.
        let f = |x: f64| x - 0.5;
        let g = |x: f64| -x + 1.0;
        let config = Config::new(10, 1e-6).expect("valid config");

        let solution = solve_unobserved(&f, &g, 0.0, &config).expect("should iterate");

        assert_eq!(solution.status, Status::MaxIters);
    }
}
