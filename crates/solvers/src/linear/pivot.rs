use ndarray::Array2;

use tabula_core::PivotingStrategy;

/// Location and value of the pivot chosen for a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Pivot {
    pub(super) row: usize,
    pub(super) col: usize,
    pub(super) value: f64,
}

/// Chooses the pivot for elimination column `k` of an augmented matrix.
///
/// Candidates are restricted to rows and columns at or after `k`. Ties keep
/// the first candidate in row-major order.
pub(super) fn select(matrix: &Array2<f64>, k: usize, strategy: PivotingStrategy) -> Pivot {
    let n = matrix.nrows();
    let at = |row: usize, col: usize| Pivot {
        row,
        col,
        value: matrix[[row, col]],
    };

    match strategy {
        PivotingStrategy::None => at(k, k),
        PivotingStrategy::Partial => (k + 1..n)
            .map(|row| at(row, k))
            .fold(at(k, k), larger),
        PivotingStrategy::Total => (k..n)
            .flat_map(|row| (k..n).map(move |col| (row, col)))
            .map(|(row, col)| at(row, col))
            .fold(at(k, k), larger),
    }
}

fn larger(best: Pivot, candidate: Pivot) -> Pivot {
    if candidate.value.abs() > best.value.abs() {
        candidate
    } else {
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn none_uses_the_diagonal() {
        let m = array![[1.0, 2.0, 0.0], [9.0, 3.0, 0.0]];
        let pivot = select(&m, 0, PivotingStrategy::None);
        assert_eq!((pivot.row, pivot.col), (0, 0));
    }

    #[test]
    fn partial_searches_the_column() {
        let m = array![[1.0, 2.0, 0.0], [-9.0, 3.0, 0.0]];
        let pivot = select(&m, 0, PivotingStrategy::Partial);
        assert_eq!((pivot.row, pivot.col, pivot.value), (1, 0, -9.0));
    }

    #[test]
    fn total_searches_the_submatrix() {
        let m = array![
            [1.0, 2.0, 3.0, 100.0],
            [4.0, 5.0, -8.0, 100.0],
            [7.0, 6.0, 2.0, 100.0],
        ];
        let pivot = select(&m, 0, PivotingStrategy::Total);
        assert_eq!((pivot.row, pivot.col), (1, 2));

        // The right-hand side column is never a candidate.
        let pivot = select(&m, 1, PivotingStrategy::Total);
        assert_eq!((pivot.row, pivot.col), (1, 2));
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let m = array![[2.0, 0.0], [-2.0, 0.0]];
        let pivot = select(&m, 0, PivotingStrategy::Partial);
        assert_eq!(pivot.row, 0);
    }
}
