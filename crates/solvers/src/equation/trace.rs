use std::ops::ControlFlow;

use tabula_core::{MethodKind, Observer};

use super::{Action, Iteration, Solution, Status};

/// Collects iteration records and forwards each one to the observer.
///
/// A record is appended before the observer sees it, so the trace always
/// holds every iteration that ran, including the one an observer stopped on.
pub(super) struct Trace<'a, Obs: ?Sized> {
    method: MethodKind,
    observer: &'a mut Obs,
    iterations: Vec<Iteration>,
}

impl<'a, Obs> Trace<'a, Obs>
where
    Obs: Observer<Iteration, Action> + ?Sized,
{
    pub(super) fn new(method: MethodKind, observer: &'a mut Obs) -> Self {
        Self {
            method,
            observer,
            iterations: Vec::new(),
        }
    }

    /// Appends a record and returns whether the observer asked to stop.
    pub(super) fn record(&mut self, iteration: Iteration) -> ControlFlow<()> {
        self.iterations.push(iteration);
        match self.observer.observe(&iteration) {
            Some(Action::StopEarly) => ControlFlow::Break(()),
            None => ControlFlow::Continue(()),
        }
    }

    /// Finishes the run at the most recent record.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution {
        self.finish_with_bracket(status, iters, None)
    }

    /// Finishes the run at the most recent record, reporting a final bracket.
    pub(super) fn finish_with_bracket(
        self,
        status: Status,
        iters: usize,
        bracket: Option<[f64; 2]>,
    ) -> Solution {
        let (x, fx) = self
            .iterations
            .last()
            .map_or((f64::NAN, f64::NAN), |last| (last.x, last.fx));

        Solution {
            method: self.method,
            status,
            x,
            fx,
            iters,
            bracket,
            iterations: self.iterations,
        }
    }
}
