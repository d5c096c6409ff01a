use std::collections::BTreeMap;

use ndarray::{Array1, Array2};
use serde_json::Value as Json;

use crate::{Expression, MethodKind, PivotingStrategy};

use super::{DocumentError, InvalidParameter, Parameter, Value};

/// A validated mapping from parameter names to values.
///
/// Mutation is additive: [`set`](Self::set) and [`merge`](Self::merge)
/// overwrite the named entries and never clear unrelated ones, so a method can
/// be configured across any number of partial updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<Parameter, Value>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parameters `kind` needs before it can run.
    #[must_use]
    pub fn required_for(kind: MethodKind) -> &'static [Parameter] {
        kind.required_parameters()
    }

    /// Stores a value, replacing any previous value for `parameter`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if the value has the wrong kind for
    /// `parameter` or lies outside its domain: a non-finite real, a
    /// non-positive tolerance, a zero step, a zero iteration limit, or an
    /// empty, non-square, or non-finite matrix or vector.
    pub fn set(
        &mut self,
        parameter: Parameter,
        value: impl Into<Value>,
    ) -> Result<(), InvalidParameter> {
        let value = value.into();
        value.check(parameter)?;
        self.values.insert(parameter, value);
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] under the same conditions as `set`.
    pub fn with(
        mut self,
        parameter: Parameter,
        value: impl Into<Value>,
    ) -> Result<Self, InvalidParameter> {
        self.set(parameter, value)?;
        Ok(self)
    }

    /// Parses `source` and stores it as an expression parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if the source does not parse or
    /// `parameter` does not hold an expression.
    pub fn set_expression(
        &mut self,
        parameter: Parameter,
        source: &str,
    ) -> Result<(), InvalidParameter> {
        let expression = Expression::parse(source)
            .map_err(|error| InvalidParameter::new(parameter, source, error.to_string()))?;
        self.set(parameter, expression)
    }

    /// Reads a parameter set from a string-keyed JSON object.
    ///
    /// Keys that do not name a parameter are ignored. Recognized keys are
    /// converted and validated as in [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] if the document is not an
    /// object, or [`DocumentError::Invalid`] for the first recognized key whose
    /// value is rejected.
    pub fn from_json(document: &Json) -> Result<Self, DocumentError> {
        let object = document.as_object().ok_or(DocumentError::NotAnObject)?;

        let mut set = Self::new();
        for (key, json) in object {
            let Ok(parameter) = key.parse::<Parameter>() else {
                continue;
            };
            let value = Value::from_json(parameter, json)?;
            set.set(parameter, value)?;
        }
        Ok(set)
    }

    /// Overwrites entries with those present in `other`.
    ///
    /// Entries of `self` that `other` does not name are kept.
    pub fn merge(&mut self, other: ParameterSet) {
        self.values.extend(other.values);
    }

    /// Returns the parameters in `required` that are not present, in the order
    /// they appear in `required`.
    #[must_use]
    pub fn missing(&self, required: &[Parameter]) -> Vec<Parameter> {
        required
            .iter()
            .copied()
            .filter(|parameter| !self.contains(*parameter))
            .collect()
    }

    /// Returns the required parameters of `kind` that are not present.
    #[must_use]
    pub fn missing_for(&self, kind: MethodKind) -> Vec<Parameter> {
        self.missing(kind.required_parameters())
    }

    /// Returns the value stored for `parameter`.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> Option<&Value> {
        self.values.get(&parameter)
    }

    /// Returns true if a value is stored for `parameter`.
    #[must_use]
    pub fn contains(&self, parameter: Parameter) -> bool {
        self.values.contains_key(&parameter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored entries in parameter declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &Value)> {
        self.values.iter().map(|(parameter, value)| (*parameter, value))
    }

    #[must_use]
    pub fn expression(&self, parameter: Parameter) -> Option<&Expression> {
        match self.get(parameter)? {
            Value::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    #[must_use]
    pub fn real(&self, parameter: Parameter) -> Option<f64> {
        match self.get(parameter)? {
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn count(&self, parameter: Parameter) -> Option<usize> {
        match self.get(parameter)? {
            Value::Count(count) => Some(*count),
            _ => None,
        }
    }

    #[must_use]
    pub fn strategy(&self, parameter: Parameter) -> Option<PivotingStrategy> {
        match self.get(parameter)? {
            Value::Strategy(strategy) => Some(*strategy),
            _ => None,
        }
    }

    #[must_use]
    pub fn matrix(&self, parameter: Parameter) -> Option<&Array2<f64>> {
        match self.get(parameter)? {
            Value::Matrix(matrix) => Some(matrix),
            _ => None,
        }
    }

    #[must_use]
    pub fn vector(&self, parameter: Parameter) -> Option<&Array1<f64>> {
        match self.get(parameter)? {
            Value::Vector(vector) => Some(vector),
            _ => None,
        }
    }
}
