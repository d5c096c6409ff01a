//! False position (regula falsi) on a bracketing interval.
//!
//! Each iteration evaluates where the secant through the bracket endpoints
//! crosses zero and keeps the sub-interval across which `f` changes sign.
//! The error measure is the residual `|f(x_n)|`.

use tabula_core::{Function, MethodKind, Observer};

use super::{Action, Config, Error, Iteration, Solution, bracketing::search};

/// Finds a root of `f` in `bracket` by linear interpolation.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// satisfy `f(a)·f(b) < 0`, or if `f` cannot be evaluated at a required point.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    search(
        MethodKind::FalsePosition,
        f,
        bracket,
        config,
        observer,
        super::Bracket::secant_root,
    )
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, &mut ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tabula_core::Expression;

    use crate::equation::Status;

    #[test]
    fn finds_cubic_root() {
        let f = Expression::parse("x^3 - x - 2").expect("valid expression");
        let config = Config::new(100, 1e-12).expect("valid config");

        let solution = solve_unobserved(&f, [1.0, 2.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 1.521_379_706_804_567_6, epsilon = 1e-10);
    }

    #[test]
    fn first_iterate_is_the_secant_crossing() {
        // f(1) = -2 and f(2) = 4, so the first crossing is 2 - 4·1/6 = 4/3.
        let f = |x: f64| x * x * x - x - 2.0;

        let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_relative_eq!(solution.iterations[0].x, 4.0 / 3.0);
        assert_eq!(solution.iterations[0].bracket, Some([1.0, 2.0]));
    }

    #[test]
    fn converges_faster_than_bisection_on_a_line() {
        let f = |x: f64| 3.0 * x - 1.0;

        let solution = solve_unobserved(&f, [-5.0, 5.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn keeps_every_iterate_inside_the_initial_bracket() {
        let f = Expression::parse("ln(sin(x)^2 + 1) - 1/2").expect("valid expression");
        let config = Config::new(50, 1e-10).expect("valid config");

        let solution = solve_unobserved(&f, [0.0, 1.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        for iteration in &solution.iterations {
            assert!((0.0..=1.0).contains(&iteration.x));
        }
    }
}
