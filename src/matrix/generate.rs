use crate::matrix::ignore::{NoRows, RowIgnore};
use crate::matrix::matrix::Matrix;
use crate::matrix::row::Row;
use crate::rings::field::Field;
use rand::seq::SliceRandom;
use rand::Rng;

impl<T: Field> Matrix<T> {
    pub fn identity(n: usize) -> Matrix<T> {
        Matrix::partial_identity(n, NoRows)
    }

    /// `n`-by-`n` identity, except the rows selected by `ignore` are left zero.
    pub fn partial_identity(n: usize, ignore: impl RowIgnore) -> Matrix<T> {
        Matrix {
            rows: (0..n)
                .map(|i| {
                    if ignore.ignores(i) {
                        Row::zero(n)
                    } else {
                        Row::unit(n, i)
                    }
                })
                .collect(),
        }
    }

    /// `rows`-by-`cols` matrix of ones.
    pub fn full(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows: (0..rows).map(|_| Row(vec![T::one(); cols])).collect(),
        }
    }

    pub fn empty(rows: usize, cols: usize) -> Matrix<T> {
        Matrix {
            rows: (0..rows).map(|_| Row::zero(cols)).collect(),
        }
    }

    /// Permutation matrix of a permutation of `{0, ..., n-1}`: row `perm[i]`
    /// has its 1 in column `i`.
    pub fn permutation(perm: &[usize]) -> Matrix<T> {
        let n = perm.len();
        let mut out = Matrix::empty(n, n);
        for (i, &j) in perm.iter().enumerate() {
            assert!(j < n, "{} is out of range for a permutation of {}", j, n);
            assert!(out.rows[j].is_zero(), "{} appears twice in permutation", j);
            out.rows[j][i] = T::one();
        }
        out
    }
}

/// Uniformly random permutation of `{0, ..., n-1}`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
