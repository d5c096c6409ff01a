use tabula_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a run after a fixed number of observed events.
///
/// Useful for showing the first few rows of a procedure table without
/// changing the method's own iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget {
    limit: usize,
    seen: usize,
}

impl IterationBudget {
    /// Creates a budget that requests a stop on the `limit`-th event.
    ///
    /// A zero limit stops on the first event.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns how many events have been observed.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for IterationBudget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tabula_solvers::equation::{Action, Config, Status, bisection};

    #[test]
    fn stops_on_the_limit() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::new(100, 1e-14).expect("valid config");
        let mut budget = IterationBudget::new(5);

        let solution = bisection::solve(&f, [0.0, 2.0], &config, &mut budget).expect("brackets");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iterations.len(), 5);
        assert_eq!(budget.seen(), 5);
    }

    #[test]
    fn zero_limit_stops_immediately() {
        let mut budget = IterationBudget::new(0);
        let action: Option<Action> = budget.observe(&0_u8);
        assert_eq!(action, Some(Action::StopEarly));
    }
}
