//! Example binary: linear maps, orthogonalization and eigenvectors.
//!
//! Run:
//! - `RUST_LOG=info cargo run --example advanced`

use anyhow::Context as _;

use vectorspace::linalg::{self, Matrix, Vector};
use vectorspace::markup::math;
use vectorspace::scene::DiagramOptions;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = DiagramOptions::default();

    let a = Matrix::from_rows(&[[2.0, -1.0], [1.0, 2.0]]);
    log::info!("A = {}, det A = {}", math::matrix_bmatrix(&a), linalg::determinant(&a)?);
    println!(
        "{}\n",
        vectorspace::linear_map_diagram(
            &a,
            &[Vector::labeled("e_1", [1.0, 0.0]), Vector::labeled("e_2", [0.0, 1.0])],
            &options,
        )?
    );

    let basis = linalg::gram_schmidt(&[Vector::from([3.0, 1.0]), Vector::from([2.0, 2.0])])
        .context("orthonormalizing demo basis")?;
    for u in &basis {
        log::info!("{} = {}", u.label().unwrap_or("?"), math::vector_pmatrix(u));
    }

    println!(
        "{}\n",
        vectorspace::projection_diagram(
            &Vector::labeled("v", [5.0, 3.0, 1.0]),
            &[Vector::from([1.0, 0.0, 0.0]), Vector::from([0.0, 1.0, 0.0])],
            &options,
        )?
    );

    let symmetric = Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]);
    let result = linalg::eigen(&symmetric)?;
    for (i, pair) in result.pairs().iter().enumerate() {
        log::info!("{}", math::eigenvalue(i, pair));
    }
    match vectorspace::eigenvector_diagram(&symmetric, &options)? {
        Some(tex) => println!("{tex}"),
        None => log::info!("no real eigenvectors to draw"),
    }
    Ok(())
}
