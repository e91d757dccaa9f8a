//! Small dense matrices used as linear maps and as candidate bases.
//!
//! `Matrix` wraps an `nalgebra` [`DMatrix`] so determinant, eigen and SVD run on the
//! stored value directly. Only construction (ragged-row checks) lives here.

use nalgebra::DMatrix;

use super::vector::Vector;
use super::BASIS_TOLERANCE;
use crate::error::{Error, Result};

/// An `m × n` real matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    inner: DMatrix<f64>,
}

impl Matrix {
    /// Build a matrix from rows. Ragged rows fail with `DimensionMismatch`.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(Error::mismatch("matrix", cols, bad.len()));
        }
        Ok(Self {
            inner: DMatrix::from_row_iterator(rows.len(), cols, rows.into_iter().flatten()),
        })
    }

    /// Build a matrix whose rows are the given vectors.
    pub fn from_vectors(vectors: &[Vector]) -> Result<Self> {
        Self::new(vectors.iter().map(|v| v.components().to_vec()).collect())
    }

    /// Build a matrix from fixed-size row literals.
    pub fn from_rows<const N: usize>(rows: &[[f64; N]]) -> Self {
        Self {
            inner: DMatrix::from_row_iterator(rows.len(), N, rows.iter().flatten().copied()),
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    /// The underlying `nalgebra` matrix.
    #[inline]
    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.inner
    }

    /// Fail with `DimensionMismatch` unless the matrix is square and non-empty.
    pub(crate) fn ensure_square(&self, op: &'static str) -> Result<()> {
        if self.nrows() == 0 {
            return Err(Error::mismatch(op, 1, 0));
        }
        if !self.is_square() {
            return Err(Error::mismatch(op, self.nrows(), self.ncols()));
        }
        Ok(())
    }
}

/// Determinant of a square matrix.
pub fn determinant(matrix: &Matrix) -> Result<f64> {
    matrix.ensure_square("determinant")?;
    Ok(matrix.inner.determinant())
}

/// Matrix-vector product `matrix · v`.
///
/// Fails with `DimensionMismatch` when `matrix.ncols() != v.len()`.
pub fn apply_linear_map(matrix: &Matrix, v: &Vector) -> Result<Vector> {
    if matrix.ncols() != v.len() {
        return Err(Error::mismatch(
            "apply_linear_map",
            matrix.ncols(),
            v.len(),
        ));
    }
    let out = Vector::from_dvector(&matrix.inner * v.as_dvector());
    Ok(match v.label() {
        Some(l) => out.with_label(format!("A{l}")),
        None => out,
    })
}

/// True iff `vectors` form a square matrix with `|det| > 1e-10`.
///
/// Non-square or ragged input is simply not a basis.
pub fn is_basis(vectors: &[Vector]) -> bool {
    let Ok(matrix) = Matrix::from_vectors(vectors) else {
        return false;
    };
    match determinant(&matrix) {
        Ok(det) => {
            log::debug!("is_basis: n={} det={det:e}", matrix.nrows());
            det.abs() > BASIS_TOLERANCE
        }
        Err(_) => false,
    }
}
