//! Thin binary wrapper for local development.
//!
//! `vectorspace` is primarily a **library**. This binary prints one default scene so
//! `cargo run` shows something; the full demos live in `demos/` and run as examples:
//! - `cargo run --example vectors_2d`
//! - `cargo run --example vectors_3d`
//! - `cargo run --example advanced`

use vectorspace::linalg::Vector;
use vectorspace::scene::DiagramOptions;

fn main() -> anyhow::Result<()> {
    // Keep logging setup in the binary so the library remains unopinionated.
    env_logger::init();

    let vectors = [
        Vector::labeled("u", [3.0, 2.0]),
        Vector::labeled("v", [-1.0, 4.0]),
    ];
    println!(
        "{}",
        vectorspace::vector_diagram(&vectors, &DiagramOptions::default())?
    );
    Ok(())
}
