use ndarray::{Array1, Array2, s};
use tracing::debug;

use tabula_core::PivotingStrategy;

use super::{Error, PIVOT_EPSILON, Stage, pivot};

/// Forward elimination followed by back substitution.
///
/// Dimensions must already be checked.
pub(super) fn run(
    a: &Array2<f64>,
    b: &Array1<f64>,
    strategy: PivotingStrategy,
) -> Result<(Vec<Stage>, Array1<f64>), Error> {
    let n = a.nrows();

    let mut matrix = Array2::<f64>::zeros((n, n + 1));
    matrix.slice_mut(s![.., ..n]).assign(a);
    matrix.column_mut(n).assign(b);

    let mut columns: Vec<usize> = (0..n).collect();
    let mut stages = Vec::with_capacity(n);

    for k in 0..n {
        let pivot = pivot::select(&matrix, k, strategy);
        if pivot.value.abs() <= PIVOT_EPSILON {
            debug!(stage = k + 1, pivot = pivot.value, "no usable pivot");
            return Err(Error::Singular {
                stage: k + 1,
                stages,
            });
        }

        if pivot.row != k {
            swap_rows(&mut matrix, k, pivot.row);
        }
        if pivot.col != k {
            swap_columns(&mut matrix, k, pivot.col);
            columns.swap(k, pivot.col);
        }

        debug!(
            stage = k + 1,
            pivot_row = pivot.row,
            pivot_col = pivot.col,
            pivot = pivot.value,
            "elimination stage"
        );

        let pivot_row = matrix.row(k).to_owned();
        for i in k + 1..n {
            let factor = matrix[[i, k]] / pivot_row[k];
            if factor != 0.0 {
                matrix.row_mut(i).scaled_add(-factor, &pivot_row);
            }
            matrix[[i, k]] = 0.0;
        }

        stages.push(Stage {
            stage: k + 1,
            matrix: matrix.clone(),
            columns: columns.clone(),
        });
    }

    let x = back_substitute(&matrix, &columns);
    Ok((stages, x))
}

fn swap_rows(matrix: &mut Array2<f64>, first: usize, second: usize) {
    for j in 0..matrix.ncols() {
        matrix.swap([first, j], [second, j]);
    }
}

fn swap_columns(matrix: &mut Array2<f64>, first: usize, second: usize) {
    for i in 0..matrix.nrows() {
        matrix.swap([i, first], [i, second]);
    }
}

/// Solves the upper-triangular augmented system and restores the original
/// variable order.
fn back_substitute(matrix: &Array2<f64>, columns: &[usize]) -> Array1<f64> {
    let n = matrix.nrows();

    let mut z = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let known: f64 = (i + 1..n).map(|j| matrix[[i, j]] * z[j]).sum();
        z[i] = (matrix[[i, n]] - known) / matrix[[i, i]];
    }

    let mut x = Array1::<f64>::zeros(n);
    for (position, &variable) in columns.iter().enumerate() {
        x[variable] = z[position];
    }
    x
}
