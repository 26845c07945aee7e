use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg};

/// Exact field element. Everything in `matrix` is generic over it.
///
/// Operations are value returning: elimination never reads and writes the same
/// cell through two handles.
pub trait Field:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + Ord
    + Neg<Output = Self>
    + Add<Output = Self>
    + Mul<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
    /// Multiplicative inverse. Undefined at zero; implementations may panic.
    fn inv(&self) -> Self;

    fn sign(&self) -> Ordering {
        self.cmp(&Self::zero())
    }
}
