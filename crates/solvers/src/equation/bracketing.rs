use tabula_core::{Function, MethodKind, Observer};

use super::{
    Action, Config, Error, Iteration, Solution, Status,
    bracket::{Bounds, Bracket},
    evaluate::evaluate,
    trace::Trace,
};

/// Shared loop for the bracketing methods.
///
/// `next` picks the interior point to evaluate from the current bracket.
/// The error measure is the residual magnitude `|f(x)|`.
pub(super) fn search<F, Obs, N>(
    method: MethodKind,
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: &mut Obs,
    next: N,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
    N: Fn(&Bracket) -> f64,
{
    let invalid = |source| Error::InvalidBracket { bracket, source };

    let bounds = Bounds::new(bracket).map_err(invalid)?;
    let f_left = evaluate(f, bounds.left())?;
    let f_right = evaluate(f, bounds.right())?;
    let mut current = Bracket::new(bounds, f_left, f_right).map_err(invalid)?;

    let mut trace = Trace::new(method, observer);

    for iter in 1..=config.max_iters() {
        let interval = current.as_array();
        let x = next(&current);
        let fx = evaluate(f, x)?;
        let error = fx.abs();

        let flow = trace.record(
            Iteration::new(iter, x, fx)
                .with_error(error)
                .with_bracket(interval),
        );

        if config.is_converged(fx, error) {
            return Ok(trace.finish_with_bracket(Status::Converged, iter, Some(interval)));
        }
        if flow.is_break() {
            return Ok(trace.finish_with_bracket(
                Status::StoppedByObserver,
                iter,
                Some(interval),
            ));
        }

        current.shrink(x, fx);
    }

    Ok(trace.finish_with_bracket(
        Status::MaxIters,
        config.max_iters(),
        Some(current.as_array()),
    ))
}
