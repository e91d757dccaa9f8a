//! Example binary: vectors in the plane.
//!
//! Prints two `tikzpicture`s on stdout:
//! - three vectors from the origin with their dashed component projections
//! - the parallelogram construction of `u + v`
//!
//! Run:
//! - `cargo run --example vectors_2d`

use vectorspace::linalg::{self, Vector};
use vectorspace::markup::{TikzOptions, math, render_picture};
use vectorspace::scene::{DiagramGeometryBuilder, DiagramOptions};

fn main() -> anyhow::Result<()> {
    // Keep logging setup in the example binary (library stays unopinionated).
    env_logger::init();

    let vectors = [
        Vector::labeled("u", [3.0, 2.0]),
        Vector::labeled("v", [-1.0, 4.0]),
        Vector::labeled("w", [2.0, -1.0]),
    ];
    for v in &vectors {
        log::info!(
            "{} = {}, heading {:.2} deg",
            v.label().unwrap_or("?"),
            math::vector_tuple(v),
            linalg::heading_2d(v)?
        );
    }

    let builder = DiagramGeometryBuilder::new(DiagramOptions::default().with_components(true))?;
    let picture = render_picture(
        &builder.layout_2d(&vectors)?,
        &TikzOptions::default().with_scale_2d(1.2),
    );
    println!("{picture}\n");

    println!(
        "{}",
        vectorspace::sum_diagram(
            &Vector::labeled("u", [4.0, 2.0]),
            &Vector::labeled("v", [-1.0, 3.0]),
            &DiagramOptions::default(),
        )?
    );
    Ok(())
}
