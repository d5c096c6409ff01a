use serde_json::Value as Json;

use tabula_core::{MethodKind, Observer, Parameter, ParameterSet};

use crate::{
    Error, Report, Session,
    equation::{Action, Iteration},
};

/// Facade over a single [`Session`] selected by method.
///
/// Selecting a method starts a fresh session; parameters and results of a
/// previous selection are dropped. Every other call fails with
/// [`Error::NoMethodSelected`] until a method is selected.
#[derive(Debug, Default)]
pub struct Solver {
    session: Option<Session>,
}

impl Solver {
    /// Creates a solver with no method selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `kind` with an empty configuration.
    pub fn select(&mut self, kind: MethodKind) -> &mut Session {
        self.session.insert(Session::new(kind))
    }

    /// Selects a method by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] if `name` does not identify a method;
    /// the current selection is kept.
    pub fn select_named(&mut self, name: &str) -> Result<&mut Session, Error> {
        let kind: MethodKind = name.parse()?;
        Ok(self.select(kind))
    }

    /// Selects `kind` and applies an initial configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail the method's validation; the
    /// current selection is kept.
    pub fn select_with(
        &mut self,
        kind: MethodKind,
        parameters: ParameterSet,
    ) -> Result<&mut Session, Error> {
        let session = Session::with_parameters(kind, parameters)?;
        Ok(self.session.insert(session))
    }

    /// Returns the selected session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMethodSelected`] if nothing is selected.
    pub fn session(&self) -> Result<&Session, Error> {
        self.session.as_ref().ok_or(Error::NoMethodSelected)
    }

    fn session_mut(&mut self) -> Result<&mut Session, Error> {
        self.session.as_mut().ok_or(Error::NoMethodSelected)
    }

    /// Merges parameters into the selected session.
    ///
    /// # Errors
    ///
    /// See [`Session::setup`].
    pub fn setup(&mut self, parameters: ParameterSet) -> Result<(), Error> {
        self.session_mut()?.setup(parameters)
    }

    /// Merges a JSON parameter document into the selected session.
    ///
    /// # Errors
    ///
    /// See [`Session::setup_json`].
    pub fn setup_json(&mut self, document: &Json) -> Result<(), Error> {
        self.session_mut()?.setup_json(document)
    }

    /// Returns the parameters the selected method requires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMethodSelected`] if nothing is selected.
    pub fn required_parameters(&self) -> Result<&'static [Parameter], Error> {
        Ok(self.session()?.required_parameters())
    }

    /// Returns the required parameters not yet supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMethodSelected`] if nothing is selected.
    pub fn missing_parameters(&self) -> Result<Vec<Parameter>, Error> {
        Ok(self.session()?.missing_parameters())
    }

    /// Runs the selected method.
    ///
    /// # Errors
    ///
    /// See [`Session::run`].
    pub fn solve(&mut self) -> Result<&Report, Error> {
        self.session_mut()?.run()
    }

    /// Runs the selected method, reporting iterations to `observer`.
    ///
    /// # Errors
    ///
    /// See [`Session::run_observed`].
    pub fn solve_observed(
        &mut self,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<&Report, Error> {
        self.session_mut()?.run_observed(observer)
    }

    /// Returns the result of the last successful run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMethodSelected`] if nothing is selected, or
    /// [`Error::NoResultAvailable`] if the selected session has no result.
    pub fn last_result(&self) -> Result<&Report, Error> {
        self.session()?.last_result()
    }
}
