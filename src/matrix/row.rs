use crate::rings::field::Field;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt;
use std::ops;

/// Fixed length vector of field elements, also used as a matrix row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T>(pub Vec<T>);

impl<T: Field> Row<T> {
    pub fn zero(n: usize) -> Row<T> {
        Row(vec![T::zero(); n])
    }

    /// Unit vector of length `n` along dimension `i`.
    pub fn unit(n: usize, i: usize) -> Row<T> {
        let mut out = Row::zero(n);
        out[i] = T::one();
        out
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn component_mul(&self, rhs: &Row<T>) -> Row<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "can't multiply rows that are different sizes"
        );

        Row(self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.clone() * b.clone())
            .collect())
    }

    pub fn scalar_mul(&self, s: &T) -> Row<T> {
        Row(self.iter().map(|a| a.clone() * s.clone()).collect())
    }

    /// Sum of the components.
    pub fn weight(&self) -> T {
        self.iter().cloned().sum()
    }

    pub fn dot_product(&self, rhs: &Row<T>) -> T {
        self.component_mul(rhs).weight()
    }

    /// Position of the first nonzero component, `None` for the zero vector.
    pub fn height(&self) -> Option<usize> {
        self.iter().position(|x| !x.is_zero())
    }

    /// Whether `self` should be used to cancel a column out of `rhs`.
    ///
    /// Only the leading column of `self` is looked at, so `self` must already be
    /// a reduced row whose pivot is the only place it can clash with the
    /// basis it belongs to.
    pub fn cancels(&self, rhs: &Row<T>) -> bool {
        match self.height() {
            Some(h) => !rhs[h].is_zero(),
            None => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|x| x.is_zero())
    }
}

impl<T> From<Vec<T>> for Row<T> {
    fn from(cells: Vec<T>) -> Row<T> {
        Row(cells)
    }
}

impl<T> ops::Index<usize> for Row<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> ops::IndexMut<usize> for Row<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Field> ops::Add<&Row<T>> for &Row<T> {
    type Output = Row<T>;

    fn add(self, rhs: &Row<T>) -> Row<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "can't add rows that are different sizes"
        );

        Row(self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.clone() + b.clone())
            .collect())
    }
}

/// Lexicographic, component by component.
impl<T: Field> Ord for Row<T> {
    fn cmp(&self, rhs: &Row<T>) -> Ordering {
        assert_eq!(
            self.len(),
            rhs.len(),
            "can't compare rows that are different sizes"
        );

        self.iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T: Field> PartialOrd for Row<T> {
    fn partial_cmp(&self, rhs: &Row<T>) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<T: fmt::Display> fmt::Display for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;

    fn row(values: &[i64]) -> Row<Fraction> {
        Row(values.iter().map(|&v| Fraction::from(v)).collect())
    }

    #[test]
    fn test_row_arithmetic() {
        let a = row(&[1, 2, 3]);
        let b = row(&[4, -5, 6]);

        assert_eq!(&a + &b, row(&[5, -3, 9]));
        assert_eq!(a.component_mul(&b), row(&[4, -10, 18]));
        assert_eq!(a.scalar_mul(&Fraction::from_ratio(1, 2)).to_string(), "[1 / 2, 1, 3 / 2]");
        assert_eq!(a.weight(), 6);
        assert_eq!(a.dot_product(&b), 12);
    }

    #[test]
    #[should_panic(expected = "different sizes")]
    fn test_row_add_size_mismatch() {
        let _ = &row(&[1, 2]) + &row(&[1, 2, 3]);
    }

    #[test]
    fn test_row_height_and_cancels() {
        assert_eq!(row(&[0, 0, 3, 1]).height(), Some(2));
        assert_eq!(row(&[0, 0, 0]).height(), None);
        assert!(row(&[0, 0, 0]).is_zero());
        assert!(!row(&[0, 0, 1]).is_zero());

        let pivot = row(&[0, 1, 0, 2]);
        assert!(pivot.cancels(&row(&[5, 7, 0, 0])));
        assert!(!pivot.cancels(&row(&[5, 0, 0, 9])));
        assert!(!row(&[0, 0, 0, 0]).cancels(&row(&[1, 1, 1, 1])));
    }

    #[test]
    fn test_row_ordering() {
        assert!(row(&[0, 0, 1]) < row(&[0, 1, 0]));
        assert!(row(&[1, 2, 3]) < row(&[1, 2, 4]));
        assert_eq!(row(&[1, 2, 3]).cmp(&row(&[1, 2, 3])), Ordering::Equal);
        assert_ne!(row(&[1, 2]), row(&[1, 2, 0]));
    }

    #[test]
    fn test_row_unit() {
        assert_eq!(Row::<Fraction>::unit(4, 2), row(&[0, 0, 1, 0]));
        assert_eq!(Row::<Fraction>::zero(2), row(&[0, 0]));
    }
}
