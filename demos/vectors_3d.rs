//! Example binary: vectors in space.
//!
//! Prints the three demo vectors seen from `(65, 115)` and the cross product
//! `a × b` with the parallelogram it is normal to. Norms, the dot product and the
//! angle between `a` and `b` go to the log (`RUST_LOG=info`).
//!
//! Run:
//! - `RUST_LOG=info cargo run --example vectors_3d`

use anyhow::Context as _;

use vectorspace::linalg::{self, Vector};
use vectorspace::markup::math;
use vectorspace::scene::{DiagramOptions, Viewpoint};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let space = [
        Vector::labeled("a", [2.0, 3.0, 1.0]),
        Vector::labeled("b", [1.0, -1.0, 2.0]),
        Vector::labeled("c", [-1.0, 2.0, 2.0]),
    ];
    for v in &space {
        let name = v.label().unwrap_or("?");
        log::info!("{name} = {}, |{name}| = {:.3}", math::vector_pmatrix(v), linalg::norm(v));
    }

    let (a, b) = (&space[0], &space[1]);
    log::info!(
        "a . b = {}, angle = {:.2} deg",
        linalg::dot(a, b)?,
        linalg::angle_between(a, b).context("angle between a and b")?
    );

    let options = DiagramOptions::default().with_viewpoint(Viewpoint::new(65.0, 115.0));
    println!("{}\n", vectorspace::vector_diagram(&space, &options)?);

    println!(
        "{}",
        vectorspace::cross_product_diagram(
            &Vector::labeled("a", [3.0, 2.0, 2.0]),
            &Vector::labeled("b", [1.0, 3.0, 1.0]),
            &DiagramOptions::default(),
        )?
    );
    Ok(())
}
