//! `vectorspace` library crate root.
//!
//! Vector algebra plus diagram geometry for typeset linear-algebra material. The crate is
//! primarily a **library**; the binary target stays thin and calls into the entrypoints
//! exported here.
//!
//! Layers:
//! - `linalg`: pure vector/matrix algebra (norms, angles, Gram-Schmidt, eigen, ...)
//! - `scene`: turns vectors and results into a renderer-agnostic `GeometryDescription`
//! - `markup`: formats geometry and numbers as TikZ / LaTeX fragments
//!
//! Public API philosophy:
//! - Keep modules public so callers can assemble their own pipelines (e.g. lay out a scene,
//!   inspect `screen_bounds`, then render it with custom `TikzOptions`).
//! - Provide a few one-call entrypoints (`vector_diagram`, `sum_diagram`, ...) that mirror
//!   the demo scenes and return `anyhow::Result` with context attached.
//!
//! Note: the library never initializes logging; it only emits through the `log` facade.

pub mod error;
pub mod linalg;
pub mod markup;
pub mod scene;

pub use error::{Error, Result};

use anyhow::Context as _;

use crate::linalg::{Matrix, Vector};
use crate::markup::{TikzOptions, render_picture};
use crate::scene::{DiagramGeometryBuilder, DiagramOptions, Dimension, GeometryDescription};

fn builder(options: &DiagramOptions) -> anyhow::Result<DiagramGeometryBuilder> {
    DiagramGeometryBuilder::new(options.clone()).context("invalid diagram options")
}

fn picture(geometry: &GeometryDescription) -> String {
    render_picture(geometry, &TikzOptions::default())
}

/// Lay out and render plain vectors from the origin.
///
/// Two-component input gives a 2D picture; three-component input a 3D one seen from
/// `options.viewpoint`.
pub fn vector_diagram(vectors: &[Vector], options: &DiagramOptions) -> anyhow::Result<String> {
    let b = builder(options)?;
    let first = vectors.first().context("vector_diagram needs at least one vector")?;
    let geometry = match Dimension::of_len("vector_diagram", first.len())? {
        Dimension::Two => b.layout_2d(vectors),
        Dimension::Three => b.layout_3d(vectors, options.viewpoint),
    }
    .with_context(|| format!("failed to lay out {} vectors", vectors.len()))?;
    Ok(picture(&geometry))
}

/// Render `a`, `b` and `a + b` with the parallelogram construction.
pub fn sum_diagram(a: &Vector, b: &Vector, options: &DiagramOptions) -> anyhow::Result<String> {
    let geometry = builder(options)?
        .layout_sum(a, b)
        .context("failed to lay out vector sum")?;
    Ok(picture(&geometry))
}

/// Render `a`, `b`, `a × b` and the spanned parallelogram (3D only).
pub fn cross_product_diagram(
    a: &Vector,
    b: &Vector,
    options: &DiagramOptions,
) -> anyhow::Result<String> {
    let geometry = builder(options)?
        .layout_cross_product(a, b)
        .context("failed to lay out cross product")?;
    Ok(picture(&geometry))
}

/// Render `vectors` next to their images under `matrix`.
pub fn linear_map_diagram(
    matrix: &Matrix,
    vectors: &[Vector],
    options: &DiagramOptions,
) -> anyhow::Result<String> {
    let geometry = builder(options)?
        .layout_linear_map(matrix, vectors)
        .with_context(|| {
            format!(
                "failed to lay out a {}x{} linear map",
                matrix.nrows(),
                matrix.ncols()
            )
        })?;
    Ok(picture(&geometry))
}

/// Render `v`, its projection onto `span(basis)` and the orthogonal complement.
pub fn projection_diagram(
    v: &Vector,
    basis: &[Vector],
    options: &DiagramOptions,
) -> anyhow::Result<String> {
    let geometry = builder(options)?
        .layout_projection(v, basis)
        .context("failed to lay out projection")?;
    Ok(picture(&geometry))
}

/// Eigen-decompose `matrix` and render its real eigenvectors.
///
/// `Ok(None)` when the matrix has no real eigenpair (e.g. a plane rotation).
pub fn eigenvector_diagram(
    matrix: &Matrix,
    options: &DiagramOptions,
) -> anyhow::Result<Option<String>> {
    let result = linalg::eigen(matrix).context("eigen decomposition failed")?;
    let geometry = builder(options)?
        .layout_eigenvectors(&result)
        .context("failed to lay out eigenvectors")?;
    Ok(geometry.as_ref().map(picture))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrypoints_attach_context() {
        let err = sum_diagram(
            &Vector::from([1.0, 2.0]),
            &Vector::from([1.0, 2.0, 3.0]),
            &DiagramOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "failed to lay out vector sum");
        assert!(err.downcast_ref::<Error>().is_some());

        let err = vector_diagram(&[], &DiagramOptions::default()).unwrap_err();
        assert!(err.to_string().contains("at least one vector"));
    }

    #[test]
    fn rotation_has_no_eigenvector_picture() {
        let rotation = Matrix::from_rows(&[[0.0, -1.0], [1.0, 0.0]]);
        assert_eq!(
            eigenvector_diagram(&rotation, &DiagramOptions::default()).unwrap(),
            None
        );
    }

    #[test]
    fn dimension_picks_the_picture_kind() {
        let opts = DiagramOptions::default();
        let flat = vector_diagram(&[Vector::from([3.0, 2.0])], &opts).unwrap();
        let solid = vector_diagram(&[Vector::from([2.0, 3.0, 1.0])], &opts).unwrap();
        assert!(!flat.contains("tdplot"));
        assert!(solid.starts_with("\\tdplotsetmaincoords{70}{120}"));
    }
}
