//! Markup adapter: computed geometry and numbers in, LaTeX fragments out.
//!
//! This layer holds no numeric logic. It only formats what `linalg` and `scene` computed:
//! - `tikz`: a `tikzpicture` for one [`crate::scene::GeometryDescription`]
//! - `math`: inline math for vectors, matrices and eigenvalues
//!
//! Fragments are meant to be pasted into a document that loads `tikz`, `tikz-3dplot`
//! and `amsmath`. Nothing here builds a whole document or runs a compiler.

pub mod math;
pub mod tikz;

pub use tikz::{TikzOptions, render_picture};

/// Print `x` with at most four decimals, trailing zeros trimmed.
///
/// `-0` prints as `0`, integral values have no decimal point.
pub fn format_number(x: f64) -> String {
    let mut s = format!("{x:.4}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { "0".to_owned() } else { s }
}

/// Wrap identifier-like labels in `\vec{..}`; anything else is assumed to be math already.
pub(crate) fn label_math(label: &str) -> String {
    let plain = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("\\vec{{{label}}}")
    } else {
        label.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(1.0 / 3.0), "0.3333");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(120.0), "120");
    }

    #[test]
    fn labels() {
        assert_eq!(label_math("u"), "\\vec{u}");
        assert_eq!(label_math("v_1"), "\\vec{v_1}");
        assert_eq!(label_math("u+v"), "u+v");
    }
}
