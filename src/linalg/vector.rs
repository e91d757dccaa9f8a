//! Immutable n-component vectors and the element-wise algebra on them.
//!
//! Conventions:
//! - Components are `f64`. Diagrams only ever use 2 or 3 components, but the algebra
//!   itself accepts any non-zero length.
//! - Every operation is a named pure function returning a new `Vector`; nothing mutates
//!   its operands.
//! - Labels are display-only. When both operands carry a label, the result gets a derived
//!   LaTeX-flavoured label (`u+v`, `\hat{u}`, `u\times v`, ...); otherwise it has none.

use nalgebra::DVector;

use crate::error::{Error, Result};

/// A fixed-length real vector with an optional display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: DVector<f64>,
    label: Option<String>,
}

impl Vector {
    /// Build an unlabelled vector from its components.
    #[inline]
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Self::from_dvector(DVector::from_vec(components.into()))
    }

    /// Build a labelled vector.
    #[inline]
    pub fn labeled(label: impl Into<String>, components: impl Into<Vec<f64>>) -> Self {
        Self::new(components).with_label(label)
    }

    /// The zero vector of length `n`.
    #[inline]
    pub fn zeros(n: usize) -> Self {
        Self::from_dvector(DVector::zeros(n))
    }

    /// The standard basis vector `e_axis` of length `n`.
    ///
    /// Fails with `DimensionMismatch` when `axis >= n`.
    pub fn unit_axis(n: usize, axis: usize) -> Result<Self> {
        if axis >= n {
            return Err(Error::mismatch("unit_axis", n, axis + 1));
        }
        Ok(Self::from_dvector(DVector::from_fn(n, |i, _| {
            if i == axis { 1.0 } else { 0.0 }
        })))
    }

    #[inline]
    pub(crate) fn from_dvector(components: DVector<f64>) -> Self {
        Self {
            components,
            label: None,
        }
    }

    #[inline]
    pub(crate) fn as_dvector(&self) -> &DVector<f64> {
        &self.components
    }

    /// Return a copy of this vector carrying `label`.
    #[inline]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub fn components(&self) -> &[f64] {
        self.components.as_slice()
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component `i`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.components.get(i).copied()
    }

    /// True when every component is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&c| c == 0.0)
    }

    /// Largest absolute component (0 for an empty vector).
    #[inline]
    pub fn max_abs(&self) -> f64 {
        self.components.iter().fold(0.0f64, |m, c| m.max(c.abs()))
    }

    /// Element-wise map producing an unlabelled vector.
    #[inline]
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_dvector(self.components.map(f))
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

fn derived_label(a: &Vector, b: &Vector, join: &str) -> Option<String> {
    match (a.label(), b.label()) {
        (Some(la), Some(lb)) => Some(format!("{la}{join}{lb}")),
        _ => None,
    }
}

#[inline]
fn ensure_same_len(op: &'static str, a: &Vector, b: &Vector) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::mismatch(op, a.len(), b.len()));
    }
    Ok(())
}

/// Element-wise sum.
pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
    ensure_same_len("add", a, b)?;
    Ok(Vector {
        components: &a.components + &b.components,
        label: derived_label(a, b, "+"),
    })
}

/// Element-wise difference `a - b`.
pub fn subtract(a: &Vector, b: &Vector) -> Result<Vector> {
    ensure_same_len("subtract", a, b)?;
    Ok(Vector {
        components: &a.components - &b.components,
        label: derived_label(a, b, "-"),
    })
}

/// Multiply every component by `k`.
pub fn scale(v: &Vector, k: f64) -> Vector {
    let mut out = v.map(|c| c * k);
    out.label = v.label().map(|l| format!("{k}{l}"));
    out
}

/// Sum of element-wise products.
pub fn dot(a: &Vector, b: &Vector) -> Result<f64> {
    ensure_same_len("dot", a, b)?;
    Ok(a.components.dot(&b.components))
}

/// Right-handed cross product; both operands must have exactly 3 components.
pub fn cross(a: &Vector, b: &Vector) -> Result<Vector> {
    for v in [a, b] {
        if v.len() != 3 {
            return Err(Error::mismatch("cross", 3, v.len()));
        }
    }
    Ok(Vector {
        components: a.components.cross(&b.components),
        label: derived_label(a, b, "\\times "),
    })
}

/// Euclidean norm.
#[inline]
pub fn norm(v: &Vector) -> f64 {
    v.components.norm()
}

/// Unit vector in the direction of `v`.
///
/// The zero vector is returned unchanged (not an error).
pub fn normalize(v: &Vector) -> Vector {
    let n = norm(v);
    if n == 0.0 {
        return v.clone();
    }
    let mut out = v.map(|c| c / n);
    out.label = v.label().map(|l| format!("\\hat{{{l}}}"));
    out
}

/// Clamp a cosine into `[-1, 1]` before `acos`.
#[inline]
pub(crate) fn clamp_cosine(cos: f64) -> f64 {
    if !(-1.0..=1.0).contains(&cos) {
        log::trace!("clamping cosine {cos:e} into [-1, 1]");
    }
    cos.clamp(-1.0, 1.0)
}

/// Angle between `a` and `b` in degrees, in `[0, 180]`.
///
/// Fails with `DegenerateInput` when either operand has zero norm.
pub fn angle_between(a: &Vector, b: &Vector) -> Result<f64> {
    let d = dot(a, b)?;
    let (na, nb) = (norm(a), norm(b));
    if na == 0.0 || nb == 0.0 {
        return Err(Error::degenerate(
            "angle_between",
            "zero-length operand has no direction",
        ));
    }
    Ok(clamp_cosine(d / (na * nb)).acos().to_degrees())
}

/// Angle in degrees between `v` and the positive coordinate axis `axis` (0 = x).
pub fn angle_to_axis(v: &Vector, axis: usize) -> Result<f64> {
    let e = Vector::unit_axis(v.len(), axis)?;
    angle_between(v, &e)
}

/// Signed polar angle of a 2D vector in degrees, `atan2(y, x)`, in `(-180, 180]`.
pub fn heading_2d(v: &Vector) -> Result<f64> {
    if v.len() != 2 {
        return Err(Error::mismatch("heading_2d", 2, v.len()));
    }
    Ok(v.components[1].atan2(v.components[0]).to_degrees())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    pub(crate) fn assert_components(v: &Vector, expected: &[f64]) {
        assert_eq!(v.len(), expected.len(), "length of {v:?}");
        for (got, want) in v.components().iter().zip(expected) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn add_and_subtract_are_elementwise() {
        let a = Vector::labeled("u", [3.0, 2.0]);
        let b = Vector::labeled("v", [1.0, 3.0]);

        let s = add(&a, &b).unwrap();
        assert_components(&s, &[4.0, 5.0]);
        assert_eq!(s.label(), Some("u+v"));

        let d = subtract(&a, &b).unwrap();
        assert_components(&d, &[2.0, -1.0]);
        assert_eq!(d.label(), Some("u-v"));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([1.0, 2.0, 3.0]);
        assert!(matches!(
            add(&a, &b),
            Err(Error::DimensionMismatch { op: "add", .. })
        ));
        assert!(matches!(
            dot(&a, &b),
            Err(Error::DimensionMismatch { op: "dot", .. })
        ));
    }

    #[test]
    fn scale_keeps_label_prefix() {
        let u = Vector::labeled("u", [4.0, 2.0]);
        let s = scale(&u, 1.5);
        assert_components(&s, &[6.0, 3.0]);
        assert_eq!(s.label(), Some("1.5u"));
    }

    #[test]
    fn cross_requires_three_components() {
        let a = Vector::from([1.0, 0.0]);
        let b = Vector::from([0.0, 1.0]);
        assert_eq!(cross(&a, &b), Err(Error::mismatch("cross", 3, 2)));
    }

    #[test]
    fn cross_of_unit_axes() {
        let x = Vector::from([1.0, 0.0, 0.0]);
        let y = Vector::from([0.0, 1.0, 0.0]);
        assert_components(&cross(&x, &y).unwrap(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_of_demo_vectors() {
        let a = Vector::labeled("a", [3.0, 2.0, 2.0]);
        let b = Vector::labeled("b", [1.0, 3.0, 1.0]);
        let c = cross(&a, &b).unwrap();
        assert_components(&c, &[-4.0, -1.0, 7.0]);
        assert_eq!(c.label(), Some("a\\times b"));
    }

    #[test]
    fn normalize_zero_is_identity() {
        let z = Vector::zeros(3);
        assert_eq!(normalize(&z), z);
    }

    #[test]
    fn normalize_has_unit_norm() {
        let v = Vector::labeled("w", [3.0, 4.0]);
        let n = normalize(&v);
        assert_abs_diff_eq!(norm(&n), 1.0, epsilon = 1e-12);
        assert_eq!(n.label(), Some("\\hat{w}"));
    }

    #[test]
    fn angle_between_known_vectors() {
        let p = Vector::from([1.0, 0.0]);
        let q = Vector::from([0.0, 2.0]);
        assert_abs_diff_eq!(angle_between(&p, &q).unwrap(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_between_zero_vector_is_degenerate() {
        let p = Vector::from([1.0, 0.0]);
        let z = Vector::zeros(2);
        assert!(matches!(
            angle_between(&p, &z),
            Err(Error::DegenerateInput { op: "angle_between", .. })
        ));
    }

    #[test]
    fn near_parallel_vectors_do_not_produce_nan() {
        let v = Vector::from([0.1, 0.2, 0.3]);
        let w = scale(&v, 3.0);
        let angle = angle_between(&v, &w).unwrap();
        assert!(angle.is_finite());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn heading_and_axis_angles() {
        let v = Vector::from([1.0, 1.0]);
        assert_abs_diff_eq!(heading_2d(&v).unwrap(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angle_to_axis(&v, 1).unwrap(), 45.0, epsilon = 1e-9);

        let down = Vector::from([0.0, -2.0]);
        assert_abs_diff_eq!(heading_2d(&down).unwrap(), -90.0, epsilon = 1e-9);

        assert!(angle_to_axis(&v, 2).is_err());
        assert!(heading_2d(&Vector::zeros(3)).is_err());
    }
}
