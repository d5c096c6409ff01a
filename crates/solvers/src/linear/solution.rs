use ndarray::Array1;
use serde::{Serialize, Serializer};

use tabula_core::PivotingStrategy;

use super::Stage;

/// The result of Gaussian elimination: the stage trace and the solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Pivoting strategy used.
    pub strategy: PivotingStrategy,

    /// One snapshot per stage, in order.
    pub stages: Vec<Stage>,

    /// Solution vector in the original variable order.
    #[serde(serialize_with = "serialize_vector")]
    pub x: Array1<f64>,
}

impl Solution {
    /// Returns the last stage that performed elimination, which holds the
    /// upper-triangular system.
    ///
    /// A 1×1 system has no such stage.
    #[must_use]
    pub fn triangular(&self) -> Option<&Stage> {
        self.stages.len().checked_sub(2).map(|index| &self.stages[index])
    }
}

fn serialize_vector<S: Serializer>(vector: &Array1<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(vector.iter())
}
