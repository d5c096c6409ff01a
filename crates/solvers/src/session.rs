use serde::Serialize;
use serde_json::Value as Json;
use tracing::{debug, info, instrument, warn};

use tabula_core::{MethodKind, Observer, Parameter, ParameterSet};

use crate::{
    Error, Report,
    equation::{Action, Iteration},
    method::{self, Method},
};

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum State {
    /// No parameters have been supplied and no run has been attempted.
    Constructed,

    /// Parameters changed since the last run, or no run has happened.
    ///
    /// A run refused for missing parameters also lands here, including on a
    /// session that was never set up.
    Configured,

    /// The last run succeeded and its result is current.
    Executed,

    /// The last run failed.
    Failed,
}

/// One method, its accumulated parameters, and the result of its last run.
///
/// Configuration is additive: every [`setup`](Self::setup) merges into the
/// current parameters and never clears unrelated ones.
///
/// # Result invalidation
///
/// A setup that changes the value of any parameter the method reads,
/// required or optional, discards the last result. A setup that changes
/// nothing the method reads keeps it.
#[derive(Debug)]
pub struct Session {
    method: Box<dyn Method>,
    parameters: ParameterSet,
    last_result: Option<Report>,
    state: State,
}

impl Session {
    /// Creates an unconfigured session for `kind`.
    #[must_use]
    pub fn new(kind: MethodKind) -> Self {
        Self {
            method: method::build(kind),
            parameters: ParameterSet::new(),
            last_result: None,
            state: State::Constructed,
        }
    }

    /// Creates a session for `kind` and applies an initial configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail the method's validation.
    pub fn with_parameters(kind: MethodKind, parameters: ParameterSet) -> Result<Self, Error> {
        let mut session = Self::new(kind);
        session.setup(parameters)?;
        Ok(session)
    }

    /// Returns the method this session runs.
    #[must_use]
    pub fn kind(&self) -> MethodKind {
        self.method.kind()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the accumulated parameters.
    #[must_use]
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Merges `parameters` into the current configuration.
    ///
    /// The merged set is validated before it replaces the current one, so a
    /// failed setup changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the merged set violates a
    /// constraint of the method.
    pub fn setup(&mut self, parameters: ParameterSet) -> Result<(), Error> {
        let kind = self.kind();
        let changed: Vec<Parameter> = parameters
            .iter()
            .filter(|&(parameter, value)| {
                kind.reads(parameter) && self.parameters.get(parameter) != Some(value)
            })
            .map(|(parameter, _)| parameter)
            .collect();

        let mut merged = self.parameters.clone();
        merged.merge(parameters);
        self.method.validate(&merged)?;

        let names: Vec<Parameter> = merged.iter().map(|(name, _)| name).collect();
        debug!(method = %kind, parameters = ?names, "merged parameters");
        self.parameters = merged;

        if !changed.is_empty() {
            if self.last_result.take().is_some() {
                debug!(method = %kind, ?changed, "discarded last result");
            }
            self.state = State::Configured;
        } else if self.state == State::Constructed {
            self.state = State::Configured;
        }
        Ok(())
    }

    /// Reads a JSON parameter document and merges it as in
    /// [`setup`](Self::setup).
    ///
    /// Keys that do not name a parameter are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocument`] if the document is not an object,
    /// or [`Error::InvalidParameter`] if a recognized value is rejected.
    pub fn setup_json(&mut self, document: &Json) -> Result<(), Error> {
        let parameters = ParameterSet::from_json(document)?;
        self.setup(parameters)
    }

    /// Returns the parameters the method needs before it can run.
    #[must_use]
    pub fn required_parameters(&self) -> &'static [Parameter] {
        self.method.required_parameters()
    }

    /// Returns the parameters the method reads when present.
    #[must_use]
    pub fn optional_parameters(&self) -> &'static [Parameter] {
        self.method.optional_parameters()
    }

    /// Returns the required parameters not yet supplied.
    #[must_use]
    pub fn missing_parameters(&self) -> Vec<Parameter> {
        self.parameters.missing(self.required_parameters())
    }

    /// Returns true if every required parameter is present.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.missing_parameters().is_empty()
    }

    /// Runs the method without observation.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as
    /// [`run_observed`](Self::run_observed).
    pub fn run(&mut self) -> Result<&Report, Error> {
        self.run_observed(&mut ())
    }

    /// Checks for missing parameters, then runs the method.
    ///
    /// A successful run replaces the last result. A failed run leaves it
    /// untouched and moves the session to [`State::Failed`]. Missing
    /// parameters are reported before any numerical work and move a
    /// [`State::Constructed`] session to [`State::Configured`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameters`] if required parameters are absent,
    /// or the error the method failed with.
    #[instrument(skip_all, fields(method = %self.kind()))]
    pub fn run_observed(
        &mut self,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<&Report, Error> {
        if let Err(error) = self.method.check_parameters(&self.parameters) {
            warn!(%error, "cannot run");
            if self.state == State::Constructed {
                self.state = State::Configured;
            }
            return Err(error);
        }

        match self.method.solve(&self.parameters, observer) {
            Ok(report) => {
                log_outcome(&report);
                self.state = State::Executed;
                Ok(&*self.last_result.insert(report))
            }
            Err(error) => {
                warn!(%error, "run failed");
                self.state = State::Failed;
                Err(error)
            }
        }
    }

    /// Returns the result of the last successful run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoResultAvailable`] if no run has succeeded since the
    /// session was created or since a setup invalidated the result.
    pub fn last_result(&self) -> Result<&Report, Error> {
        self.last_result.as_ref().ok_or(Error::NoResultAvailable)
    }
}

fn log_outcome(report: &Report) {
    match report {
        Report::Root(solution) => info!(
            status = ?solution.status,
            x = solution.x,
            fx = solution.fx,
            iters = solution.iters,
            "root search finished"
        ),
        Report::LinearSystem(solution) => info!(
            strategy = %solution.strategy,
            stages = solution.stages.len(),
            "linear system solved"
        ),
    }
}
