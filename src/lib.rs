//! Exact linear algebra over a field: Gauss-Jordan elimination, inversion,
//! nullspaces, and incremental recovery of an invertible matrix from a stream
//! of rows.

pub mod matrix {
    pub mod gauss_jordan;
    pub mod generate;
    pub mod ignore;
    pub mod incremental;
    pub mod matrix;
    pub mod row;
}
pub mod rings {
    pub mod field;
    pub mod fraction;
}

pub mod error;

pub use crate::error::MatrixError;
pub use crate::matrix::gauss_jordan::Elimination;
pub use crate::matrix::incremental::IncrementalMatrix;
pub use crate::matrix::matrix::Matrix;
pub use crate::matrix::row::Row;
pub use crate::rings::field::Field;
pub use crate::rings::fraction::Fraction;
