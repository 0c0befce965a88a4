//! Dense linear system solve, shared by DC and AC analysis.

use nalgebra::{ComplexField, DMatrix, DVector};

use crate::error::{Error, Result};

/// Solve Ax = b by LU decomposition with partial pivoting.
///
/// Generic over the scalar field: `f64` for DC, `Complex<f64>` for AC.
/// Returns [`Error::SingularSystem`] (without a frequency; the sweep
/// driver attaches one) when the factorization fails or the solution
/// contains non-finite entries.
pub fn solve_dense<T: ComplexField>(a: &DMatrix<T>, b: &DVector<T>) -> Result<DVector<T>> {
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

    let x = a
        .clone()
        .lu()
        .solve(b)
        .ok_or(Error::SingularSystem { frequency: None })?;

    // A near-singular matrix can factor but still produce garbage.
    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::SingularSystem { frequency: None });
    }

    Ok(x)
}
