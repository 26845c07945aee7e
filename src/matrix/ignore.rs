/// Rows to leave out of an operation, e.g. the zero rows of a partial identity.
pub trait RowIgnore {
    fn ignores(&self, row: usize) -> bool;
}

/// Ignores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRows;

impl RowIgnore for NoRows {
    fn ignores(&self, _row: usize) -> bool {
        false
    }
}

impl<F: Fn(usize) -> bool> RowIgnore for F {
    fn ignores(&self, row: usize) -> bool {
        self(row)
    }
}

/// Ignores exactly the given positions.
pub fn ignore_rows(positions: &[usize]) -> impl RowIgnore + '_ {
    move |row: usize| positions.contains(&row)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
