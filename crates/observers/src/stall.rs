use tabula_core::Observer;

use crate::traits::{CanStopEarly, HasError};

/// Stops a run once the error measure stops improving.
///
/// An event counts as a stall when its error is not strictly below the best
/// error seen so far. After `patience` consecutive stalls the guard requests
/// a stop. Events without an error measure are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallGuard {
    patience: usize,
    best: f64,
    stalls: usize,
}

impl StallGuard {
    /// Creates a guard that tolerates `patience - 1` consecutive stalls.
    #[must_use]
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            best: f64::INFINITY,
            stalls: 0,
        }
    }

    /// Returns the smallest error observed so far.
    #[must_use]
    pub fn best(&self) -> Option<f64> {
        self.best.is_finite().then_some(self.best)
    }
}

impl<E: HasError, A: CanStopEarly> Observer<E, A> for StallGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        let error = event.error()?;

        if error < self.best {
            self.best = error;
            self.stalls = 0;
            return None;
        }

        self.stalls += 1;
        (self.stalls >= self.patience).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tabula_solvers::equation::{Config, Status, fixed_point, newton};

    #[test]
    fn stops_a_cycling_iteration() {
        // g(x) = 1 - x alternates 0, 1, 0, ... with a constant step of 1.
        let f = |x: f64| x - 0.5;
        let g = |x: f64| 1.0 - x;
        let mut guard = StallGuard::new(3);

        let solution =
            fixed_point::solve(&f, &g, 0.0, &Config::default(), &mut guard).expect("iterates");

        assert_eq!(solution.status, Status::StoppedByObserver);
        // One improving step, then three stalls.
        assert_eq!(solution.iters, 4);
        assert_eq!(guard.best(), Some(1.0));
    }

    #[test]
    fn leaves_converging_runs_alone() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let mut guard = StallGuard::new(2);

        let solution =
            newton::solve(&f, &df, 1.0, &Config::default(), &mut guard).expect("converges");

        assert_eq!(solution.status, Status::Converged);
    }
}
