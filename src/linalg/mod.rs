//! Vector algebra: the numeric half of the core.
//!
//! Everything here is a pure function over immutable values:
//! - `vector`: element-wise algebra, norms, angles
//! - `matrix`: linear maps, determinant, basis check
//! - `orthogonal`: Gram-Schmidt and subspace projection
//! - `eigen`: eigen-decomposition with explicit real/complex pairs
//!
//! Shapes are checked on every call; mismatches surface as `Error::DimensionMismatch`
//! and are never coerced.

pub mod eigen;
pub mod matrix;
pub mod orthogonal;
pub mod vector;

pub use eigen::{Complex64, EigenResult, Eigenpair, eigen};
pub use matrix::{Matrix, apply_linear_map, determinant, is_basis};
pub use orthogonal::{gram_schmidt, is_orthogonal_set, project_onto_subspace};
pub use vector::{
    Vector, add, angle_between, angle_to_axis, cross, dot, heading_2d, norm, normalize, scale,
    subtract,
};

/// `|det|` must exceed this for a square set of vectors to count as a basis.
pub const BASIS_TOLERANCE: f64 = 1e-10;
