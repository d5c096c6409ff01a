use serde::Serialize;
use serde_json::Value as Json;

use crate::{equation, linear};

/// The result document of one successful run.
///
/// Serializes as a JSON object tagged by `"kind"`: `"root"` documents carry
/// the final estimate, status, and iteration table; `"linearSystem"`
/// documents carry the stage matrices and the solution vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Report {
    Root(equation::Solution),
    LinearSystem(linear::Solution),
}

impl Report {
    /// Returns the root-finding solution, if this is one.
    #[must_use]
    pub fn as_root(&self) -> Option<&equation::Solution> {
        match self {
            Self::Root(solution) => Some(solution),
            Self::LinearSystem(_) => None,
        }
    }

    /// Returns the linear-system solution, if this is one.
    #[must_use]
    pub fn as_linear_system(&self) -> Option<&linear::Solution> {
        match self {
            Self::LinearSystem(solution) => Some(solution),
            Self::Root(_) => None,
        }
    }

    /// Renders the report as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if a number cannot be represented in JSON.
    pub fn to_json(&self) -> Result<Json, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl From<equation::Solution> for Report {
    fn from(solution: equation::Solution) -> Self {
        Self::Root(solution)
    }
}

impl From<linear::Solution> for Report {
    fn from(solution: linear::Solution) -> Self {
        Self::LinearSystem(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::equation::{Config, bisection};

    #[test]
    fn root_reports_are_tagged() {
        let f = |x: f64| x - 1.0;
        let config = Config::new(50, 1e-9).expect("valid config");
        let solution = bisection::solve_unobserved(&f, [0.0, 4.0], &config).expect("brackets");

        let json = Report::from(solution).to_json().expect("serializable");

        assert_eq!(json["kind"], "root");
        assert_eq!(json["method"], "bisection");
        assert_eq!(json["status"], "converged");
        assert_eq!(json["x"], json!(1.0));
        assert_eq!(json["iterations"][0]["bracket"], json!([0.0, 4.0]));
        assert!(json["iterations"][0].get("dfx").is_none());
    }

    #[test]
    fn accessors_match_the_variant() {
        let solution = crate::linear::solve(
            &ndarray::array![[2.0]],
            &ndarray::array![4.0],
            tabula_core::PivotingStrategy::Partial,
        )
        .expect("regular");
        let report = Report::from(solution);

        assert!(report.as_root().is_none());
        assert_eq!(report.as_linear_system().map(|s| s.x[0]), Some(2.0));
        assert_eq!(report.to_json().expect("serializable")["kind"], "linearSystem");
    }
}
