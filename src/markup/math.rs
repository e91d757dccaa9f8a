//! Inline math for numeric results.

use crate::linalg::{Eigenpair, Matrix, Vector};

use super::format_number;

/// Column vector: `\begin{pmatrix} 3 \\ 2 \end{pmatrix}`.
pub fn vector_pmatrix(v: &Vector) -> String {
    let body = v
        .components()
        .iter()
        .map(|&c| format_number(c))
        .collect::<Vec<_>>()
        .join(" \\\\ ");
    format!("\\begin{{pmatrix}} {body} \\end{{pmatrix}}")
}

/// Row tuple: `(3, 2)`.
pub fn vector_tuple(v: &Vector) -> String {
    let body = v
        .components()
        .iter()
        .map(|&c| format_number(c))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({body})")
}

pub fn matrix_bmatrix(m: &Matrix) -> String {
    let body = m
        .as_dmatrix()
        .row_iter()
        .map(|row| {
            row.iter()
                .map(|&c| format_number(c))
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect::<Vec<_>>()
        .join(" \\\\ ");
    format!("\\begin{{bmatrix}} {body} \\end{{bmatrix}}")
}

/// `\lambda_{i} = x` for real pairs, `\lambda_{i} = a + bi` for complex ones.
///
/// `index` is zero-based; the subscript is one-based.
pub fn eigenvalue(index: usize, pair: &Eigenpair) -> String {
    let value = pair.value();
    let value = if pair.is_real() {
        format_number(value.re)
    } else {
        let sign = if value.im < 0.0 { '-' } else { '+' };
        format!(
            "{} {sign} {}i",
            format_number(value.re),
            format_number(value.im.abs())
        )
    };
    format!("\\lambda_{{{}}} = {value}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::{Complex64, eigen};

    #[test]
    fn vectors() {
        let v = Vector::from([3.0, -2.5]);
        assert_eq!(vector_pmatrix(&v), "\\begin{pmatrix} 3 \\\\ -2.5 \\end{pmatrix}");
        assert_eq!(vector_tuple(&v), "(3, -2.5)");
    }

    #[test]
    fn matrices() {
        let m = Matrix::from_rows(&[[2.0, -1.0], [1.0, 2.0]]);
        assert_eq!(
            matrix_bmatrix(&m),
            "\\begin{bmatrix} 2 & -1 \\\\ 1 & 2 \\end{bmatrix}"
        );
    }

    #[test]
    fn eigenvalues() {
        let result = eigen(&Matrix::from_rows(&[[2.0, 0.0], [0.0, 3.0]])).unwrap();
        let rendered: Vec<String> = result
            .pairs()
            .iter()
            .enumerate()
            .map(|(i, p)| eigenvalue(i, p))
            .collect();
        assert_eq!(rendered.len(), 2);
        assert!(rendered.iter().any(|s| s.ends_with(" = 2")));
        assert!(rendered.iter().any(|s| s.ends_with(" = 3")));
        assert!(rendered[0].starts_with("\\lambda_{1} = "));

        let pair = Eigenpair::Complex {
            value: Complex64::new(0.0, -1.0),
            vector: Vec::new(),
        };
        assert_eq!(eigenvalue(1, &pair), "\\lambda_{2} = 0 - 1i");
    }
}
