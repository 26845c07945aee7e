use crate::matrix::matrix::Matrix;
use crate::matrix::row::Row;
use crate::rings::field::Field;
use itertools::Itertools;
use log::debug;

/// Invertible matrix discovered one row at a time.
///
/// In a cryptanalysis we might recover rows of an unknown linear map one by
/// one. We want to stop as soon as the map is fully defined, but we can't just
/// stop after `n` rows because some of the recovered rows may be duplicates or
/// linear combinations of others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementalMatrix<T> {
    /// Dimension of the matrix.
    n: usize,
    /// Accepted rows, in the order they were accepted.
    raw: Vec<Row<T>>,
    /// Gauss-Jordan reduced basis of the accepted rows: pivots are 1, distinct,
    /// and zero in every other row.
    simplest: Vec<Row<T>>,
    /// `simplest[i]` is `inverse[i]` applied to `raw`.
    inverse: Vec<Row<T>>,
    /// Columns not yet used as a pivot, sorted.
    frees: Vec<usize>,
}

impl<T: Field> IncrementalMatrix<T> {
    /// Empty `n`-by-`n` incremental matrix.
    pub fn new(n: usize) -> Self {
        IncrementalMatrix {
            n,
            raw: Vec::new(),
            simplest: Vec::new(),
            inverse: Vec::new(),
            frees: (0..n).collect(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of accepted rows.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn frees(&self) -> &[usize] {
        &self.frees
    }

    /// Reduces `raw` against the current basis. Returns the reduced row and the
    /// combination of accepted rows (with `raw` at the next index) it equals.
    fn reduce(&self, raw: &Row<T>) -> (Row<T>, Row<T>) {
        assert_eq!(
            raw.len(),
            self.n,
            "Tried to reduce incorrectly sized row with incremental matrix!"
        );

        let mut reduced = raw.clone();
        let mut inverse = if self.raw.len() < self.n {
            Row::unit(self.n, self.raw.len())
        } else {
            Row::zero(self.n)
        };

        for (s, inv) in self.simplest.iter().zip(&self.inverse) {
            if !s.cancels(&reduced) {
                continue;
            }
            if let Some(height) = s.height() {
                let k = -reduced[height].clone();
                reduced = &reduced + &s.scalar_mul(&k);
                inverse = &inverse + &inv.scalar_mul(&k);
            }
        }

        (reduced, inverse)
    }

    /// Appends a reduced row and restores the mutual reduction of `simplest`.
    fn add_rows(&mut self, raw: &Row<T>, reduced: Row<T>, inverse: Row<T>, height: usize) {
        let s = reduced[height].inv();
        let reduced = reduced.scalar_mul(&s);
        let inverse = inverse.scalar_mul(&s);

        for (row, inv) in self.simplest.iter_mut().zip(self.inverse.iter_mut()) {
            if reduced.cancels(row) {
                let k = -row[height].clone();
                *row = &*row + &reduced.scalar_mul(&k);
                *inv = &*inv + &inverse.scalar_mul(&k);
            }
        }

        self.raw.push(raw.clone());
        self.simplest.push(reduced);
        self.inverse.push(inverse);

        if let Ok(idx) = self.frees.binary_search(&height) {
            self.frees.remove(idx);
        }
    }

    /// Tries to add a row. Returns `false`, leaving the matrix untouched, if the
    /// row is a linear combination of the rows already accepted.
    pub fn add(&mut self, raw: &Row<T>) -> bool {
        let (reduced, inverse) = self.reduce(raw);

        let height = match reduced.height() {
            Some(h) => h,
            None => {
                debug!("rejected dependent row {}", raw);
                return false;
            }
        };

        self.add_rows(raw, reduced, inverse, height);
        debug!(
            "accepted row {} with pivot {} ({} / {})",
            raw,
            height,
            self.raw.len(),
            self.n
        );
        if self.fully_defined() {
            debug!("matrix of dimension {} is fully defined", self.n);
        }
        true
    }

    /// Whether the row is a linear combination of the accepted rows.
    pub fn is_in(&self, row: &Row<T>) -> bool {
        self.reduce(row).0.is_zero()
    }

    pub fn fully_defined(&self) -> bool {
        self.raw.len() == self.n
    }

    /// A unit row that is not a linear combination of the accepted rows, or
    /// `None` once the matrix is fully defined.
    pub fn novel_row(&self) -> Option<Row<T>> {
        if self.fully_defined() {
            return None;
        }
        self.frees.first().map(|&free| Row::unit(self.n, free))
    }

    /// The accepted rows, padded with zero rows up to `n`.
    pub fn matrix(&self) -> Matrix<T> {
        Matrix {
            rows: self.raw.clone(),
        }
        .pad_rows(self.n, self.n)
    }

    /// Inverse of [`IncrementalMatrix::matrix`], padded with zero rows up to `n`.
    ///
    /// Rows come out ordered by the pivot of their basis row, which does not
    /// depend on the order rows were accepted in.
    pub fn inverse(&self) -> Matrix<T> {
        Matrix {
            rows: self
                .simplest
                .iter()
                .zip(&self.inverse)
                .sorted_by_key(|(s, _)| s.height())
                .map(|(_, inv)| inv.clone())
                .collect(),
        }
        .pad_rows(self.n, self.n)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::generate::random_permutation;
    use crate::rings::fraction::Fraction;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn row(values: &[i64]) -> Row<Fraction> {
        Row(values.iter().map(|&v| Fraction::from(v)).collect())
    }

    fn test_m() -> Vec<Row<Fraction>> {
        vec![row(&[1, 2, 0]), row(&[0, 3, 1]), row(&[4, 0, 1])]
    }

    fn test_singular() -> Vec<Row<Fraction>> {
        vec![row(&[1, 2, 1]), row(&[0, 3, 1]), row(&[1, 5, 2])]
    }

    fn random_invertible(n: usize, rng: &mut StdRng) -> Matrix<Fraction> {
        loop {
            let m = Matrix::from_list(
                (0..n)
                    .map(|_| (0..n).map(|_| Fraction::from(rng.gen_range(-5..=5))).collect())
                    .collect(),
            );
            if m.invert().is_ok() {
                return m;
            }
        }
    }

    #[test_log::test]
    fn test_incremental_matrix() {
        let rows = test_m();
        let mut im = IncrementalMatrix::new(3);

        assert!(im.add(&rows[0]));
        assert!(im.add(&rows[1]));
        assert!(!im.fully_defined());
        assert!(im.add(&rows[2]));
        assert!(im.fully_defined());

        assert_eq!(im.matrix(), Matrix::from_rows(rows));
        assert_eq!(im.matrix().compose(&im.inverse()), Matrix::identity(3));
        assert_eq!(im.inverse().compose(&im.matrix()), Matrix::identity(3));
        assert_eq!(im.inverse(), im.matrix().invert().unwrap());
        assert_eq!(im.novel_row(), None);
    }

    #[test_log::test]
    fn test_incremental_matrix_singular() {
        let rows = test_singular();
        let mut im = IncrementalMatrix::new(3);

        assert!(im.add(&rows[0]));
        assert!(im.add(&rows[1]));
        assert!(!im.add(&rows[2]));
        assert!(im.is_in(&rows[2]));
        assert!(!im.fully_defined());
        assert_eq!(im.len(), 2);

        let m = Matrix::from_rows(rows);
        let basis = m.null_space();
        assert_eq!(basis.len(), 1);
        assert!(!basis[0].is_zero());
        assert!(m.mul_vector(&basis[0]).is_zero());
    }

    #[test_log::test]
    fn test_incremental_dependent_row_leaves_state() {
        let rows = test_singular();
        let mut im = IncrementalMatrix::new(3);
        im.add(&rows[0]);
        im.add(&rows[1]);

        let before = im.clone();
        assert!(!im.add(&rows[2]));
        assert!(!im.add(&rows[0]));
        assert!(!im.add(&row(&[2, -2, 0])));
        assert!(!im.add(&row(&[0, 0, 0])));
        assert_eq!(im, before);
        assert_eq!(im.frees(), before.frees());
    }

    #[test_log::test]
    fn test_incremental_novel() {
        let rows = test_singular();
        let mut im = IncrementalMatrix::new(3);
        assert_eq!(im.novel_row(), Some(row(&[1, 0, 0])));

        im.add(&rows[0]);
        im.add(&rows[1]);

        let r = im.novel_row().unwrap();
        assert!(!im.is_in(&r));
        assert!(im.add(&r));
        assert!(im.fully_defined());
        assert_eq!(im.matrix().compose(&im.inverse()), Matrix::identity(3));
    }

    #[test_log::test]
    fn test_incremental_novel_rows_complete_any_prefix() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = random_invertible(5, &mut rng);

        for k in 0..=5 {
            let mut im = IncrementalMatrix::new(5);
            for r in &m.rows[..k] {
                assert!(im.add(r));
            }
            while let Some(r) = im.novel_row() {
                assert!(im.add(&r));
            }
            assert!(im.fully_defined());
            assert_eq!(im.matrix().compose(&im.inverse()), Matrix::identity(5));
        }
    }

    #[test_log::test]
    fn test_incremental_frees() {
        let mut im = IncrementalMatrix::new(3);
        assert_eq!(im.dimension(), 3);
        assert!(im.is_empty());
        assert_eq!(im.frees(), &[0, 1, 2]);

        im.add(&row(&[0, 3, 1]));
        assert_eq!(im.frees(), &[0, 2]);
        assert_eq!(im.novel_row(), Some(row(&[1, 0, 0])));

        im.add(&row(&[1, 2, 0]));
        assert_eq!(im.frees(), &[2]);
        assert_eq!(im.len(), 2);
        assert_eq!(im.dimension(), 3);
        assert_eq!(im.matrix().size(), (im.dimension(), im.dimension()));
    }

    #[test_log::test]
    fn test_incremental_any_order() {
        for order in (0..3).permutations(3) {
            let rows = test_m();
            let mut im = IncrementalMatrix::new(3);
            for &i in &order {
                assert!(im.add(&rows[i]));
            }

            assert!(im.fully_defined());
            let permuted = Matrix::from_rows(order.iter().map(|&i| rows[i].clone()).collect());
            assert_eq!(im.matrix(), permuted);
            assert_eq!(im.matrix().compose(&im.inverse()), Matrix::identity(3));
            assert_eq!(im.inverse().compose(&im.matrix()), Matrix::identity(3));
        }
    }

    #[test_log::test]
    fn test_incremental_random_stream() {
        let mut rng = StdRng::seed_from_u64(42);

        for n in 1..7 {
            let m = random_invertible(n, &mut rng);
            let perm = random_permutation(n, &mut rng);

            // Interleave every row with a duplicate and a combination of earlier rows.
            let mut im = IncrementalMatrix::new(n);
            let mut accepted = 0;
            for (step, &i) in perm.iter().enumerate() {
                assert!(!im.fully_defined());
                assert!(im.add(&m.rows[i]));
                accepted += 1;
                assert_eq!(im.len(), accepted);

                assert!(!im.add(&m.rows[i]));
                let combination = perm[..=step]
                    .iter()
                    .map(|&j| m.rows[j].scalar_mul(&Fraction::from_ratio(j as i64 + 1, 3)))
                    .reduce(|a, b| &a + &b)
                    .unwrap();
                assert!(im.is_in(&combination));
                assert!(!im.add(&combination));
            }

            assert!(im.fully_defined());
            assert_eq!(im.matrix().compose(&im.inverse()), Matrix::identity(n));
            assert_eq!(im.inverse(), im.matrix().invert().unwrap());
        }
    }

    #[test_log::test]
    fn test_incremental_partial_inverse_reduces() {
        let rows = test_m();
        let mut im = IncrementalMatrix::new(3);
        im.add(&rows[1]);
        im.add(&rows[0]);

        assert_eq!(im.matrix().size(), (3, 3));
        assert_eq!(im.inverse().size(), (3, 3));
        assert_eq!(
            im.inverse().compose(&im.matrix()),
            im.matrix().gauss_jordan().reduced
        );
    }

    #[test_log::test]
    fn test_incremental_dup() {
        let rows = test_m();
        let mut im = IncrementalMatrix::new(3);
        im.add(&rows[0]);

        let mut trial = im.clone();
        assert!(trial.add(&rows[1]));
        assert_eq!(trial.len(), 2);
        assert_eq!(im.len(), 1);
        assert!(!im.is_in(&rows[1]));
    }

    #[test]
    #[should_panic(expected = "incorrectly sized row")]
    fn test_incremental_wrong_size() {
        let mut im = IncrementalMatrix::<Fraction>::new(3);
        im.add(&row(&[1, 2]));
    }
}
