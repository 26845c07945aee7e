use crate::matrix::row::Row;
use crate::rings::field::Field;
use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;
use std::ops;

/// Rectangular matrix stored as a list of rows.
///
/// Rows all have the same length. Outside the crate a matrix can only be built
/// through `from_list`/`from_rows` or a generator, which check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: Vec<Row<T>>,
}

impl<T: Field> Matrix<T> {
    pub fn from_list(lines: Vec<Vec<T>>) -> Self {
        Matrix::from_rows(lines.into_iter().map(Row).collect())
    }

    pub fn from_rows(rows: Vec<Row<T>>) -> Self {
        if let Some(first) = rows.first() {
            let cols = first.len();
            assert!(
                rows.iter().all(|r| r.len() == cols),
                "rows of a matrix must all have the same length"
            );
        }
        Matrix { rows }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|r| r.0.clone()).collect()
    }

    pub fn rows(&self) -> std::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    /// Dimensions in (rows, columns) order.
    pub fn size(&self) -> (usize, usize) {
        match self.rows.first() {
            None => (0, 0),
            Some(first) => (self.rows.len(), first.len()),
        }
    }

    pub fn is_square(&self) -> bool {
        let (rows, cols) = self.size();
        rows == cols
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.rows[row][col].clone()
    }

    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.size();
        Matrix {
            rows: (0..cols)
                .map(|c| Row((0..rows).map(|r| self.at(r, c)).collect()))
                .collect(),
        }
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        assert!(self.is_square(), "trace of a non-square matrix");
        self.rows.iter().enumerate().map(|(i, r)| r[i].clone()).sum()
    }

    /// First row at or below `row` with a nonzero entry in column `col`.
    pub fn find_pivot(&self, row: usize, col: usize) -> Option<usize> {
        self.rows
            .iter()
            .skip(row)
            .position(|r| !r[col].is_zero())
            .map(|i| row + i)
    }

    pub fn is_rref(&self) -> bool {
        let mut lead = None;

        for (i, row) in self.rows.iter().enumerate() {
            match row.height() {
                None => {
                    if self.rows[i + 1..].iter().any(|r| !r.is_zero()) {
                        return false;
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !row[pivot_col].is_one() {
                        return false;
                    }

                    if self
                        .rows
                        .iter()
                        .enumerate()
                        .any(|(r, other)| r != i && !other[pivot_col].is_zero())
                    {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Pads with zero rows until there are `n` of them.
    pub(crate) fn pad_rows(mut self, n: usize, cols: usize) -> Matrix<T> {
        while self.rows.len() < n {
            self.rows.push(Row::zero(cols));
        }
        self
    }
}

/// Products evaluate rows on the rayon pool, hence the `Send + Sync` bound on
/// top of `Field`. Each row is computed independently, so the result does not
/// depend on scheduling.
impl<T: Field + Send + Sync> Matrix<T> {
    /// Right-multiplies the matrix by a column vector.
    pub fn mul_vector(&self, v: &Row<T>) -> Row<T> {
        let (_, cols) = self.size();
        assert_eq!(cols, v.len(), "Can't multiply by row that is wrong size!");

        Row(self.rows.par_iter().map(|r| r.dot_product(v)).collect())
    }

    /// `self * rhs`.
    pub fn compose(&self, rhs: &Matrix<T>) -> Matrix<T> {
        let (_, m) = self.size();
        let (p, _) = rhs.size();
        assert_eq!(m, p, "Can't multiply matrices of wrong size!");

        let rot = rhs.transpose();

        Matrix {
            rows: self
                .rows
                .par_iter()
                .map(|r| Row(rot.rows.iter().map(|c| r.dot_product(c)).collect()))
                .collect(),
        }
    }
}

impl<T: Field> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(self.size(), rhs.size(), "Dimensions not compatible");

        Matrix {
            rows: self
                .rows
                .iter()
                .zip(rhs.rows.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl<T: Field + Send + Sync> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        self.compose(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
