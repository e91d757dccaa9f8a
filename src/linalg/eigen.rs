//! Eigen-decomposition of small square matrices.
//!
//! The solver is `nalgebra`:
//! - symmetric input goes through `symmetric_eigen` (real eigenpairs, orthonormal vectors)
//! - anything else gets its eigenvalues from the Schur form (`complex_eigenvalues`) and its
//!   eigenvectors from the null space of `A - λI`: an eigenvalue repeated `k` times gets the
//!   right singular vectors of the `k` smallest singular values, one per copy.
//!
//! No ordering is imposed on the result; pairs come out in solver order.
//!
//! Each pair is tagged `Real` or `Complex`. Diagrams only consume the `Real` ones, so the
//! distinction is explicit instead of silently dropping imaginary parts.

use nalgebra::{ComplexField, DMatrix};

use super::matrix::Matrix;
use super::vector::Vector;
use crate::error::{Error, Result};

pub use nalgebra::Complex;

/// Complex scalar used for non-real eigenvalues and eigenvector components.
pub type Complex64 = Complex<f64>;

/// An eigenvalue whose imaginary part is within this (relative) tolerance is real.
pub const REAL_TOLERANCE: f64 = 1e-10;

/// Relative tolerance for treating the input as symmetric.
const SYMMETRY_TOLERANCE: f64 = 1e-12;

/// Eigenvalues closer than this (relative) are one repeated eigenvalue.
const MULTIPLICITY_TOLERANCE: f64 = 1e-8;

/// Singular values at or below this (relative to the matrix scale) span the null space.
const NULL_SPACE_TOLERANCE: f64 = 1e-8;

/// One eigenvalue with its unit-length eigenvector.
#[derive(Debug, Clone, PartialEq)]
pub enum Eigenpair {
    Real {
        value: f64,
        vector: Vector,
    },
    Complex {
        value: Complex64,
        vector: Vec<Complex64>,
    },
}

impl Eigenpair {
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, Eigenpair::Real { .. })
    }

    /// The eigenvalue as a complex number (zero imaginary part for real pairs).
    #[inline]
    pub fn value(&self) -> Complex64 {
        match self {
            Eigenpair::Real { value, .. } => Complex::new(*value, 0.0),
            Eigenpair::Complex { value, .. } => *value,
        }
    }

    /// `(λ, v)` for real pairs, `None` otherwise.
    #[inline]
    pub fn as_real(&self) -> Option<(f64, &Vector)> {
        match self {
            Eigenpair::Real { value, vector } => Some((*value, vector)),
            Eigenpair::Complex { .. } => None,
        }
    }
}

/// Eigenpairs indexed by their position in solver output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EigenResult {
    pairs: Vec<Eigenpair>,
}

impl EigenResult {
    #[inline]
    pub fn pairs(&self) -> &[Eigenpair] {
        &self.pairs
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Eigenpair> {
        self.pairs.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Real pairs with their original index.
    pub fn real_pairs(&self) -> impl Iterator<Item = (usize, f64, &Vector)> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.as_real().map(|(value, vector)| (i, value, vector)))
    }

    /// Number of pairs that cannot be drawn.
    pub fn complex_count(&self) -> usize {
        self.pairs.iter().filter(|p| !p.is_real()).count()
    }
}

/// Eigen-decompose a square matrix.
///
/// Fails with `DimensionMismatch` for empty or non-square input.
pub fn eigen(matrix: &Matrix) -> Result<EigenResult> {
    matrix.ensure_square("eigen")?;
    let a = matrix.as_dmatrix();

    let pairs = if is_symmetric(a) {
        symmetric_pairs(a.clone())
    } else {
        general_pairs(a)?
    };

    log::debug!(
        "eigen: n={} real={} complex={}",
        matrix.nrows(),
        pairs.iter().filter(|p| p.is_real()).count(),
        pairs.iter().filter(|p| !p.is_real()).count()
    );
    Ok(EigenResult { pairs })
}

fn is_symmetric(a: &DMatrix<f64>) -> bool {
    let scale = a.amax().max(1.0);
    (a - a.transpose()).amax() <= SYMMETRY_TOLERANCE * scale
}

fn eigen_label(i: usize) -> String {
    format!("v_{}", i + 1)
}

fn symmetric_pairs(a: DMatrix<f64>) -> Vec<Eigenpair> {
    let n = a.nrows();
    let se = a.symmetric_eigen();
    (0..n)
        .map(|i| Eigenpair::Real {
            value: se.eigenvalues[i],
            vector: real_vector(se.eigenvectors.column(i).iter().copied().collect())
                .with_label(eigen_label(i)),
        })
        .collect()
}

#[inline]
fn is_real_value(lambda: Complex64) -> bool {
    lambda.im.abs() <= REAL_TOLERANCE * lambda.norm().max(1.0)
}

/// Indices of eigenvalues grouped by (numerical) equality, each group in solver order.
fn multiplicity_groups(values: &[Complex64]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (i, &lambda) in values.iter().enumerate() {
        let same = |j: &usize| {
            (values[*j] - lambda).norm() <= MULTIPLICITY_TOLERANCE * lambda.norm().max(1.0)
        };
        match groups.iter_mut().find(|g| g.first().is_some_and(same)) {
            Some(group) => group.push(i),
            None => groups.push(vec![i]),
        }
    }
    groups
}

fn general_pairs(a: &DMatrix<f64>) -> Result<Vec<Eigenpair>> {
    let n = a.nrows();
    let values: Vec<Complex64> = a.complex_eigenvalues().iter().copied().collect();
    let scale = a.amax().max(1.0);

    let mut slots: Vec<Option<Eigenpair>> = vec![None; values.len()];
    for group in multiplicity_groups(&values) {
        let Some(&leader) = group.first() else {
            continue;
        };
        let lambda = values[leader];
        if group.len() > 1 {
            log::debug!("eigen: eigenvalue {lambda} has multiplicity {}", group.len());
        }

        if is_real_value(lambda) {
            let shifted = a - DMatrix::from_diagonal_element(n, n, lambda.re);
            let directions = eigenspace(shifted, group.len(), scale)?;
            for (&i, direction) in group.iter().zip(directions) {
                slots[i] = Some(Eigenpair::Real {
                    value: values[i].re,
                    vector: real_vector(direction).with_label(eigen_label(i)),
                });
            }
        } else {
            let ac: DMatrix<Complex64> = a.map(|x| Complex::new(x, 0.0));
            let shifted = ac - DMatrix::from_diagonal_element(n, n, lambda);
            let directions = eigenspace(shifted, group.len(), scale)?;
            for (&i, direction) in group.iter().zip(directions) {
                slots[i] = Some(Eigenpair::Complex {
                    value: values[i],
                    vector: complex_vector(direction),
                });
            }
        }
    }

    slots
        .into_iter()
        .map(|slot| slot.ok_or_else(|| Error::Solver("eigenvalue left without a vector".into())))
        .collect()
}

/// `k` unit vectors spanning (numerically) the null space of `m`.
///
/// These are the right singular vectors of the `k` smallest singular values. When the
/// null space is thinner than `k` (a defective eigenvalue), the missing directions
/// repeat the smallest one.
fn eigenspace<T>(m: DMatrix<T>, k: usize, scale: f64) -> Result<Vec<Vec<T>>>
where
    T: ComplexField<RealField = f64>,
{
    let svd = m.svd(false, true);
    let v_t = svd
        .v_t
        .ok_or_else(|| Error::Solver("SVD did not return right singular vectors".into()))?;

    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&i, &j| svd.singular_values[i].total_cmp(&svd.singular_values[j]));
    let Some(&smallest) = order.first() else {
        return Err(Error::Solver("SVD returned no singular values".into()));
    };

    let threshold = NULL_SPACE_TOLERANCE * scale;
    let picked: Vec<usize> = order
        .iter()
        .take(k)
        .map(|&i| {
            if svd.singular_values[i] <= threshold {
                i
            } else {
                smallest
            }
        })
        .collect();
    if picked.iter().filter(|&&i| i == smallest).count() > 1 {
        log::debug!("eigen: defective eigenvalue, eigenvector repeated");
    }

    // Rows of V^H are conjugated right singular vectors.
    Ok(picked
        .into_iter()
        .map(|idx| v_t.row(idx).iter().map(|x| x.clone().conjugate()).collect())
        .collect())
}

/// Flip sign so the largest-magnitude component is positive.
fn real_vector(mut components: Vec<f64>) -> Vector {
    let pivot = components
        .iter()
        .copied()
        .fold(0.0f64, |best, c| if c.abs() > best.abs() { c } else { best });
    if pivot < 0.0 {
        components.iter_mut().for_each(|c| *c = -*c);
    }
    Vector::new(components)
}

/// Rotate the phase so the largest-magnitude component is real and positive.
fn complex_vector(components: Vec<Complex64>) -> Vec<Complex64> {
    let pivot = components
        .iter()
        .copied()
        .fold(Complex::new(0.0, 0.0), |best: Complex64, c| {
            if c.norm() > best.norm() { c } else { best }
        });
    if pivot.norm() == 0.0 {
        return components;
    }
    let phase = pivot.conj() / pivot.norm();
    components.into_iter().map(|c| c * phase).collect()
}
