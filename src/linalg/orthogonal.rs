//! Orthogonalization and projection onto subspaces.
//!
//! Notes:
//! - `gram_schmidt` is the *classical* variant: each input vector's projections are
//!   computed from the original input vector, not from the running residual.
//! - `project_onto_subspace` sums independent single-vector projections. That is only the
//!   orthogonal projection when the basis is mutually orthogonal. This is a caller
//!   precondition; a non-orthogonal basis is reported with `log::warn!` and the sum is
//!   still returned as computed.

use super::BASIS_TOLERANCE;
use super::vector::{Vector, dot, norm, normalize, scale, subtract};
use crate::error::{Error, Result};

/// Tolerance used when checking mutual orthogonality for diagnostics.
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-9;

/// Projection of `v` onto the line spanned by `onto`.
fn project_onto_vector(op: &'static str, v: &Vector, onto: &Vector) -> Result<Vector> {
    let denom = dot(onto, onto)?;
    if denom == 0.0 {
        return Err(Error::degenerate(op, "cannot project onto a zero vector"));
    }
    Ok(scale(&Vector::new(onto.components().to_vec()), dot(v, onto)? / denom))
}

fn sum_into(acc: &mut [f64], v: &Vector, sign: f64) {
    for (a, c) in acc.iter_mut().zip(v.components()) {
        *a += sign * c;
    }
}

/// Classical Gram-Schmidt: returns one unit vector per input, in input order.
///
/// A residual that collapses to zero relative to `BASIS_TOLERANCE` (linearly dependent
/// input) fails fast with `DegenerateInput` naming the offending index.
/// Output vectors are labelled `u_{i+1}`.
pub fn gram_schmidt(vectors: &[Vector]) -> Result<Vec<Vector>> {
    let Some(first) = vectors.first() else {
        return Ok(Vec::new());
    };
    let n = first.len();

    let mut orthonormal: Vec<Vector> = Vec::with_capacity(vectors.len());
    for (i, v) in vectors.iter().enumerate() {
        if v.len() != n {
            return Err(Error::mismatch("gram_schmidt", n, v.len()));
        }

        let mut residual = v.components().to_vec();
        for o in &orthonormal {
            let proj = project_onto_vector("gram_schmidt", v, o)?;
            sum_into(&mut residual, &proj, -1.0);
        }

        let residual = Vector::new(residual);
        if norm(&residual) <= BASIS_TOLERANCE * norm(v).max(1.0) {
            return Err(Error::degenerate(
                "gram_schmidt",
                format!("vector {i} is linearly dependent on its predecessors"),
            ));
        }

        let u = normalize(&residual).with_label(format!("u_{}", i + 1));
        log::trace!("gram_schmidt: u_{} = {:?}", i + 1, u.components());
        orthonormal.push(u);
    }
    Ok(orthonormal)
}

/// True when every pair in `vectors` has `|dot| <= tol`.
pub fn is_orthogonal_set(vectors: &[Vector], tol: f64) -> Result<bool> {
    for (i, a) in vectors.iter().enumerate() {
        for b in &vectors[i + 1..] {
            if dot(a, b)?.abs() > tol {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Project `v` onto the span of `basis`, returning `(projection, orthogonal_complement)`.
///
/// The basis is expected to be mutually orthogonal (see module docs). A zero basis
/// vector fails with `DegenerateInput`; mismatched lengths with `DimensionMismatch`.
pub fn project_onto_subspace(v: &Vector, basis: &[Vector]) -> Result<(Vector, Vector)> {
    let mut projection = vec![0.0; v.len()];
    for b in basis {
        let p = project_onto_vector("project_onto_subspace", v, b)?;
        sum_into(&mut projection, &p, 1.0);
    }

    if !is_orthogonal_set(basis, ORTHOGONALITY_TOLERANCE)? {
        log::warn!(
            "project_onto_subspace: basis of {} vectors is not mutually orthogonal; \
             result is the sum of individual projections",
            basis.len()
        );
    }

    let projection = Vector::new(projection);
    let complement = subtract(v, &projection)?;

    let (projection, complement) = match v.label() {
        Some(l) => (
            projection.with_label(format!("\\mathrm{{proj}}_W {l}")),
            complement.with_label(format!("{l}^\\perp")),
        ),
        None => (projection, complement),
    };
    Ok((projection, complement))
}
