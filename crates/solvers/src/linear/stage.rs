use ndarray::Array2;
use serde::{Serialize, Serializer};

/// Snapshot of the augmented matrix after one elimination stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Stage number, starting at 1.
    pub stage: usize,

    /// Augmented matrix `[A | b]` after this stage, serialized as rows.
    #[serde(serialize_with = "serialize_rows")]
    pub matrix: Array2<f64>,

    /// Original variable index of each coefficient column.
    ///
    /// This is the identity order unless total pivoting swapped columns.
    pub columns: Vec<usize>,
}

impl Stage {
    /// Returns the entries of one row of the augmented matrix.
    #[must_use]
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.matrix.row(index).to_vec()
    }
}

fn serialize_rows<S: Serializer>(matrix: &Array2<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(matrix.rows().into_iter().map(|row| row.to_vec()))
}
