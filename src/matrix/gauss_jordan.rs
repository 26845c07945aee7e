use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::matrix::row::Row;
use crate::rings::field::Field;
use log::trace;

/// Output of [`Matrix::gauss_jordan`].
#[derive(Debug, Clone)]
pub struct Elimination<T> {
    /// Row operations applied during the reduction, accumulated on an identity.
    pub augmenting: Matrix<T>,
    /// Reduced row-echelon form of the input.
    pub reduced: Matrix<T>,
    /// Columns that never got a pivot, in increasing order.
    pub frees: Vec<usize>,
}

impl<T> Elimination<T> {
    pub fn rank(&self) -> usize {
        let cols = self.reduced.rows.first().map_or(0, |r| r.0.len());
        cols - self.frees.len()
    }
}

impl<T: Field> Matrix<T> {
    /// Reduces the matrix with the Gauss-Jordan method.
    ///
    /// The first nonzero entry found scanning down a column is the pivot. Every
    /// other row is cleared in that column, above and below, so the result is
    /// fully reduced without a back substitution pass.
    pub fn gauss_jordan(&self) -> Elimination<T> {
        let (out, cols) = self.size();

        let mut aug = Matrix {
            rows: (0..out)
                .map(|i| {
                    if i < cols {
                        Row::unit(cols, i)
                    } else {
                        Row::zero(cols)
                    }
                })
                .collect(),
        };
        let mut f = self.clone();
        let mut frees = Vec::new();

        let (mut row, mut col) = (0, 0);
        while row < out && col < cols {
            let pivot = match f.find_pivot(row, col) {
                Some(i) => i,
                None => {
                    trace!("column {} is free", col);
                    frees.push(col);
                    col += 1;
                    continue;
                }
            };

            f.rows.swap(row, pivot);
            aug.rows.swap(row, pivot);

            let s = f.rows[row][col].inv();
            f.rows[row] = f.rows[row].scalar_mul(&s);
            aug.rows[row] = aug.rows[row].scalar_mul(&s);

            // Everything left of `col` is zero in `f.rows[row]`, so its height is `col`.
            for j in 0..out {
                if j != row && f.rows[row].cancels(&f.rows[j]) {
                    let s = -f.rows[j][col].clone();
                    f.rows[j] = &f.rows[j] + &f.rows[row].scalar_mul(&s);
                    aug.rows[j] = &aug.rows[j] + &aug.rows[row].scalar_mul(&s);
                }
            }

            row += 1;
            col += 1;
        }

        // Rows ran out before these columns were reached.
        frees.extend(col..cols);

        Elimination {
            augmenting: aug,
            reduced: f,
            frees,
        }
    }

    pub fn invert(&self) -> Result<Matrix<T>, MatrixError> {
        let (rows, cols) = self.size();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }

        let elimination = self.gauss_jordan();
        if !elimination.frees.is_empty() {
            return Err(MatrixError::Singular {
                frees: elimination.frees,
            });
        }
        Ok(elimination.augmenting)
    }

    /// Basis of the right nullspace, one vector per free column.
    pub fn null_space(&self) -> Vec<Row<T>> {
        let (out, cols) = self.size();
        if out == 0 {
            return vec![];
        }

        let Elimination { reduced, frees, .. } = self.gauss_jordan();

        frees
            .into_iter()
            .map(|free| {
                let mut input = Row::unit(cols, free);
                for r in &reduced.rows {
                    if r[free].is_zero() {
                        continue;
                    }
                    if let Some(h) = r.height() {
                        input[h] = -r[free].clone();
                    }
                }
                input
            })
            .collect()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
