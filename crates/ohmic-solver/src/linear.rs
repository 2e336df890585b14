//! Dense linear system solver.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Solve a linear system Ax = b using LU decomposition.
///
/// The determinant is checked before factoring: a singular MNA matrix
/// means the circuit itself is inconsistent or under-constrained, and
/// callers want that surfaced as an error rather than `inf`/`NaN` leaking
/// into results. An LU solve failure maps to the same error.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    if a.nrows() == 0 {
        return Ok(DVector::zeros(0));
    }

    if a.determinant() == 0.0 {
        return Err(Error::SingularMatrix);
    }

    a.clone().lu().solve(b).ok_or(Error::SingularMatrix)
}
