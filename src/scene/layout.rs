//! Layout functions: vectors in, [`GeometryDescription`] out.
//!
//! Conventions shared by every layout:
//! - vectors are drawn from the origin
//! - record `i` takes `colors[i % colors.len()]`
//! - a vector without a label gets a positional one (`v_1`, `v_2`, ...)
//! - 2D axes span `[-extent, extent]`; 3D axes run from the origin to `extent`

use super::options::{DiagramOptions, Viewpoint};
use super::{
    AxisLine, Dimension, FillRegion, GeometryDescription, Grid, LabelAnchor, LabelPlacement,
    Point, RenderRecord, Segment, StrokeStyle,
};
use crate::error::{Error, Result};
use crate::linalg::{self, EigenResult, Matrix, Vector};

/// The 3D ground plane covers this fraction of the axis extent.
const GROUND_PLANE_FRACTION: f64 = 0.8;
const GROUND_PLANE_OPACITY: f64 = 0.05;
const SPAN_FILL_OPACITY: f64 = 0.15;
const NEUTRAL_COLOR: &str = "gray";

/// `margin * max |component|` over all vectors.
///
/// When that is zero (empty or all-zero input) the caller-supplied `fallback` is returned
/// instead; it is the caller's job to pass something non-zero.
pub fn compute_extent<'a>(
    vectors: impl IntoIterator<Item = &'a Vector>,
    margin: f64,
    fallback: f64,
) -> f64 {
    let max_abs = vectors
        .into_iter()
        .map(Vector::max_abs)
        .fold(0.0f64, f64::max);
    let extent = margin * max_abs;
    if extent == 0.0 { fallback } else { extent }
}

/// Check that every vector has the same 2- or 3-component shape.
fn common_dimension<'a>(
    op: &'static str,
    vectors: impl IntoIterator<Item = &'a Vector>,
) -> Result<Dimension> {
    let mut vectors = vectors.into_iter();
    let Some(first) = vectors.next() else {
        return Err(Error::degenerate(op, "nothing to lay out"));
    };
    let dim = Dimension::of_len(op, first.len())?;
    for v in vectors {
        if v.len() != dim.len() {
            return Err(Error::mismatch(op, dim.len(), v.len()));
        }
    }
    Ok(dim)
}

fn label_or(v: &Vector, fallback: impl FnOnce() -> String) -> String {
    v.label().map_or_else(fallback, str::to_owned)
}

fn dashed(from: Point, to: Point, color: &str) -> Segment {
    Segment {
        from,
        to,
        color: color.to_owned(),
    }
}

/// Stateless builder holding validated presentation options.
#[derive(Debug, Clone, Default)]
pub struct DiagramGeometryBuilder {
    options: DiagramOptions,
}

impl DiagramGeometryBuilder {
    /// Validate `options` and wrap them.
    pub fn new(options: DiagramOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    #[inline]
    fn color(&self, i: usize) -> &str {
        &self.options.colors[i % self.options.colors.len()]
    }

    fn extent<'a>(&self, vectors: impl IntoIterator<Item = &'a Vector>) -> f64 {
        compute_extent(vectors, self.options.margin, self.options.fallback_extent)
    }

    /// Axes, grid and ground plane for an empty scene.
    fn frame(&self, dimension: Dimension, extent: f64) -> GeometryDescription {
        let e = extent;
        let (axes, grid, ground_plane, viewpoint) = match dimension {
            Dimension::Two => {
                let axes = vec![
                    AxisLine {
                        name: 'x',
                        from: Point::xy(-e, 0.0),
                        to: Point::xy(e, 0.0),
                    },
                    AxisLine {
                        name: 'y',
                        from: Point::xy(0.0, -e),
                        to: Point::xy(0.0, e),
                    },
                ];
                let grid = self.options.show_grid.then_some(Grid {
                    min: Point::xy(-e, -e),
                    max: Point::xy(e, e),
                });
                (axes, grid, None, None)
            }
            Dimension::Three => {
                let axes = vec![
                    AxisLine {
                        name: 'x',
                        from: Point::ORIGIN,
                        to: Point::new(e, 0.0, 0.0),
                    },
                    AxisLine {
                        name: 'y',
                        from: Point::ORIGIN,
                        to: Point::new(0.0, e, 0.0),
                    },
                    AxisLine {
                        name: 'z',
                        from: Point::ORIGIN,
                        to: Point::new(0.0, 0.0, e),
                    },
                ];
                let g = GROUND_PLANE_FRACTION * e;
                let ground = self.options.show_grid.then(|| FillRegion {
                    vertices: vec![
                        Point::ORIGIN,
                        Point::xy(g, 0.0),
                        Point::xy(g, g),
                        Point::xy(0.0, g),
                    ],
                    color: NEUTRAL_COLOR.to_owned(),
                    opacity: GROUND_PLANE_OPACITY,
                });
                (axes, None, ground, Some(self.options.viewpoint))
            }
        };

        GeometryDescription {
            dimension,
            extent,
            axes,
            grid,
            ground_plane,
            records: Vec::new(),
            auxiliary: Vec::new(),
            fills: Vec::new(),
            viewpoint,
        }
    }

    /// A plain arrow from the origin with the given label anchor.
    fn arrow(
        &self,
        v: &Vector,
        label: String,
        color: &str,
        stroke: StrokeStyle,
        anchor: LabelAnchor,
    ) -> RenderRecord {
        RenderRecord {
            label,
            color: color.to_owned(),
            origin: Point::ORIGIN,
            endpoint: Point::of(v),
            stroke,
            anchor,
            projections: Vec::new(),
            ground_point: None,
        }
    }

    fn midway(v: &Vector, placement: LabelPlacement) -> LabelAnchor {
        LabelAnchor {
            point: Point::ORIGIN.midpoint(Point::of(v)),
            placement,
        }
    }

    fn at_tip(v: &Vector, placement: LabelPlacement) -> LabelAnchor {
        LabelAnchor {
            point: Point::of(v),
            placement,
        }
    }

    fn record_2d(&self, i: usize, v: &Vector) -> RenderRecord {
        let color = self.color(i);
        let mut record = self.arrow(
            v,
            label_or(v, || format!("v_{}", i + 1)),
            color,
            StrokeStyle::Principal,
            Self::midway(v, LabelPlacement::AboveLeft),
        );
        if self.options.show_components {
            let tip = record.endpoint;
            record.projections = vec![
                dashed(Point::xy(tip.x, 0.0), tip, color),
                dashed(Point::xy(0.0, tip.y), tip, color),
            ];
        }
        record
    }

    fn record_3d(&self, i: usize, v: &Vector) -> RenderRecord {
        let color = self.color(i);
        let mut record = self.arrow(
            v,
            label_or(v, || format!("v_{}", i + 1)),
            color,
            StrokeStyle::Principal,
            Self::at_tip(v, LabelPlacement::AboveRight),
        );
        let tip = record.endpoint;
        let ground = tip.on_ground();
        record.projections.push(dashed(tip, ground, color));
        if self.options.show_components {
            record
                .projections
                .push(dashed(Point::new(tip.x, 0.0, 0.0), ground, NEUTRAL_COLOR));
            record
                .projections
                .push(dashed(Point::new(0.0, tip.y, 0.0), ground, NEUTRAL_COLOR));
        }
        record.ground_point = Some(ground);
        record
    }

    /// Lay out 2D vectors from the origin.
    pub fn layout_2d(&self, vectors: &[Vector]) -> Result<GeometryDescription> {
        let dim = common_dimension("layout_2d", vectors)?;
        if dim != Dimension::Two {
            return Err(Error::mismatch("layout_2d", 2, dim.len()));
        }

        let mut geometry = self.frame(dim, self.extent(vectors));
        geometry.records = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| self.record_2d(i, v))
            .collect();

        log::debug!(
            "layout_2d: {} vectors, extent={:.3}",
            vectors.len(),
            geometry.extent
        );
        Ok(geometry)
    }

    /// Lay out 3D vectors with ground projections; `viewpoint` is stored as given.
    pub fn layout_3d(
        &self,
        vectors: &[Vector],
        viewpoint: Viewpoint,
    ) -> Result<GeometryDescription> {
        let dim = common_dimension("layout_3d", vectors)?;
        if dim != Dimension::Three {
            return Err(Error::mismatch("layout_3d", 3, dim.len()));
        }

        let mut geometry = self.frame(dim, self.extent(vectors));
        geometry.viewpoint = Some(viewpoint);
        geometry.records = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| self.record_3d(i, v))
            .collect();

        log::debug!(
            "layout_3d: {} vectors, extent={:.3}, view=({}, {})",
            vectors.len(),
            geometry.extent,
            viewpoint.theta_deg,
            viewpoint.phi_deg
        );
        Ok(geometry)
    }

    /// `a`, `b` and `a + b` with the two dashed parallelogram sides.
    pub fn layout_sum(&self, a: &Vector, b: &Vector) -> Result<GeometryDescription> {
        let dim = common_dimension("layout_sum", [a, b])?;
        let sum = linalg::add(a, b)?;

        let la = label_or(a, || "u".into());
        let lb = label_or(b, || "v".into());
        let ls = label_or(&sum, || format!("{la}+{lb}"));

        let mut geometry = self.frame(dim, self.extent([a, b, &sum]));
        let (ca, cb, cs) = (self.color(0), self.color(1), self.color(2));
        geometry.records = vec![
            self.arrow(
                a,
                la,
                ca,
                StrokeStyle::Principal,
                Self::midway(a, LabelPlacement::BelowLeft),
            ),
            self.arrow(
                b,
                lb,
                cb,
                StrokeStyle::Principal,
                Self::midway(b, LabelPlacement::AboveRight),
            ),
            self.arrow(
                &sum,
                ls,
                cs,
                StrokeStyle::Emphasis,
                Self::midway(&sum, LabelPlacement::Above),
            ),
        ];

        let tip = Point::of(&sum);
        geometry.auxiliary = vec![
            dashed(Point::of(a), tip, cb),
            dashed(Point::of(b), tip, ca),
        ];
        Ok(geometry)
    }

    /// `a`, `b`, `a × b` and the parallelogram spanned by `a` and `b`.
    pub fn layout_cross_product(&self, a: &Vector, b: &Vector) -> Result<GeometryDescription> {
        let product = linalg::cross(a, b)?;
        let corner = linalg::add(a, b)?;

        let la = label_or(a, || "u".into());
        let lb = label_or(b, || "v".into());
        let lc = label_or(&product, || format!("{la}\\times {lb}"));

        let mut geometry = self.frame(
            Dimension::Three,
            self.extent([a, b, &product, &corner]),
        );
        let (ca, cb, cc) = (self.color(0), self.color(1), self.color(2));
        geometry.records = vec![
            self.arrow(
                a,
                la,
                ca,
                StrokeStyle::Principal,
                Self::at_tip(a, LabelPlacement::BelowRight),
            ),
            self.arrow(
                b,
                lb,
                cb,
                StrokeStyle::Principal,
                Self::at_tip(b, LabelPlacement::AboveLeft),
            ),
            self.arrow(
                &product,
                lc,
                cc,
                StrokeStyle::Emphasis,
                Self::at_tip(&product, LabelPlacement::Above),
            ),
        ];
        geometry.fills.push(FillRegion {
            vertices: vec![Point::ORIGIN, Point::of(a), Point::of(&corner), Point::of(b)],
            color: NEUTRAL_COLOR.to_owned(),
            opacity: SPAN_FILL_OPACITY,
        });
        Ok(geometry)
    }

    /// Each input vector faded, next to its image under `matrix` in the same color.
    pub fn layout_linear_map(
        &self,
        matrix: &Matrix,
        vectors: &[Vector],
    ) -> Result<GeometryDescription> {
        let dim = common_dimension("layout_linear_map", vectors)?;
        let images = vectors
            .iter()
            .map(|v| linalg::apply_linear_map(matrix, v))
            .collect::<Result<Vec<_>>>()?;
        common_dimension("layout_linear_map", images.iter().chain(vectors))?;

        let mut geometry = self.frame(dim, self.extent(vectors.iter().chain(&images)));
        for (i, (v, image)) in vectors.iter().zip(&images).enumerate() {
            let color = self.color(i);
            let label = label_or(v, || format!("e_{}", i + 1));
            let image_label = label_or(image, || format!("A{label}"));
            geometry.records.push(self.arrow(
                v,
                label,
                color,
                StrokeStyle::Faded,
                Self::midway(v, LabelPlacement::BelowRight),
            ));
            geometry.records.push(self.arrow(
                image,
                image_label,
                color,
                StrokeStyle::Emphasis,
                Self::at_tip(image, LabelPlacement::AboveRight),
            ));
        }
        Ok(geometry)
    }

    /// `v`, its projection onto `span(basis)` and the orthogonal complement.
    ///
    /// Palette slots 0, 2, 1 (blue, green, red by default); a dashed line joins the
    /// projection's tip to `v`'s tip.
    pub fn layout_projection(&self, v: &Vector, basis: &[Vector]) -> Result<GeometryDescription> {
        let dim = common_dimension("layout_projection", std::iter::once(v).chain(basis))?;
        let (projection, complement) = linalg::project_onto_subspace(v, basis)?;

        let lv = label_or(v, || "v".into());
        let lp = label_or(&projection, || format!("\\mathrm{{proj}}_W {lv}"));
        let lc = label_or(&complement, || format!("{lv}^\\perp"));

        let mut geometry = self.frame(dim, self.extent([v, &projection, &complement]));
        let anchor = |x: &Vector, placement| match dim {
            Dimension::Two => Self::midway(x, placement),
            Dimension::Three => Self::at_tip(x, placement),
        };
        geometry.records = vec![
            self.arrow(
                v,
                lv,
                self.color(0),
                StrokeStyle::Principal,
                anchor(v, LabelPlacement::AboveLeft),
            ),
            self.arrow(
                &projection,
                lp,
                self.color(2),
                StrokeStyle::Emphasis,
                anchor(&projection, LabelPlacement::BelowRight),
            ),
            self.arrow(
                &complement,
                lc,
                self.color(1),
                StrokeStyle::Principal,
                anchor(&complement, LabelPlacement::Left),
            ),
        ];
        geometry.auxiliary.push(dashed(
            Point::of(&projection),
            Point::of(v),
            self.color(1),
        ));
        Ok(geometry)
    }

    /// Real eigenvectors only; complex pairs are skipped.
    ///
    /// Returns `Ok(None)` when the result has no real pair to draw.
    pub fn layout_eigenvectors(
        &self,
        result: &EigenResult,
    ) -> Result<Option<GeometryDescription>> {
        let skipped = result.complex_count();
        if skipped > 0 {
            log::debug!("layout_eigenvectors: skipping {skipped} complex eigenpair(s)");
        }

        let vectors: Vec<Vector> = result
            .real_pairs()
            .map(|(i, _, v)| match v.label() {
                Some(_) => v.clone(),
                None => v.clone().with_label(format!("v_{}", i + 1)),
            })
            .collect();
        if vectors.is_empty() {
            return Ok(None);
        }

        let geometry = match common_dimension("layout_eigenvectors", &vectors)? {
            Dimension::Two => self.layout_2d(&vectors)?,
            Dimension::Three => self.layout_3d(&vectors, self.options.viewpoint)?,
        };
        Ok(Some(geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn builder() -> DiagramGeometryBuilder {
        DiagramGeometryBuilder::default()
    }

    #[test]
    fn extent_uses_margin_and_largest_component() {
        let vs = [Vector::from([3.0, 2.0]), Vector::from([-1.0, 4.0])];
        assert_abs_diff_eq!(compute_extent(&vs, 1.2, 1.0), 4.8, epsilon = 1e-12);
    }

    #[test]
    fn extent_falls_back_for_zero_input() {
        assert_eq!(compute_extent(&[Vector::zeros(2)], 1.2, 2.5), 2.5);
        assert_eq!(compute_extent(std::iter::empty(), 1.2, 2.5), 2.5);
    }

    #[test]
    fn layout_2d_records_follow_input_order() {
        let vs = [
            Vector::labeled("u", [3.0, 2.0]),
            Vector::labeled("v", [-1.0, 4.0]),
            Vector::from([2.0, -3.0]),
        ];
        let g = builder().layout_2d(&vs).unwrap();

        assert_eq!(g.dimension, Dimension::Two);
        assert_eq!(g.records.len(), 3);
        assert_eq!(g.records[0].label, "u");
        assert_eq!(g.records[2].label, "v_3");
        assert_eq!(g.records[1].color, "red");
        assert_eq!(g.records[1].endpoint, Point::xy(-1.0, 4.0));
        assert_eq!(g.records[0].anchor.point, Point::xy(1.5, 1.0));
        assert!(g.grid.is_some());
        assert!(g.viewpoint.is_none());
        assert_eq!(g.axes[0].from, Point::xy(-g.extent, 0.0));
    }

    #[test]
    fn layout_2d_component_projections_are_optional() {
        let v = [Vector::from([3.0, 2.0])];
        let plain = builder().layout_2d(&v).unwrap();
        assert!(plain.records[0].projections.is_empty());

        let b = DiagramGeometryBuilder::new(DiagramOptions::default().with_components(true))
            .unwrap();
        let g = b.layout_2d(&v).unwrap();
        let p = &g.records[0].projections;
        assert_eq!(p.len(), 2);
        assert_eq!(p[0].from, Point::xy(3.0, 0.0));
        assert_eq!(p[1].from, Point::xy(0.0, 2.0));
        assert!(p.iter().all(|s| s.color == "blue"));
    }

    #[test]
    fn palette_cycles() {
        let b = DiagramGeometryBuilder::new(DiagramOptions::default().with_colors(["black"]))
            .unwrap();
        let g = b
            .layout_2d(&[Vector::from([1.0, 0.0]), Vector::from([0.0, 1.0])])
            .unwrap();
        assert!(g.records.iter().all(|r| r.color == "black"));
    }

    #[test]
    fn layouts_reject_wrong_dimensions() {
        let b = builder();
        let v2 = Vector::from([1.0, 2.0]);
        let v3 = Vector::from([1.0, 2.0, 3.0]);

        assert_eq!(
            b.layout_2d(&[v2.clone(), v3.clone()]),
            Err(Error::mismatch("layout_2d", 2, 3))
        );
        assert_eq!(
            b.layout_3d(&[v2.clone()], Viewpoint::default()),
            Err(Error::mismatch("layout_3d", 3, 2))
        );
        assert!(b.layout_cross_product(&v2, &v2).is_err());
        assert!(b.layout_2d(&[Vector::from([1.0])]).is_err());
        assert!(b.layout_2d(&[]).is_err());
    }

    #[test]
    fn layout_3d_projects_to_ground_and_keeps_viewpoint() {
        let vp = Viewpoint::new(65.0, 115.0);
        let g = builder()
            .layout_3d(&[Vector::labeled("a", [2.0, 3.0, 1.0])], vp)
            .unwrap();

        assert_eq!(g.viewpoint, Some(vp));
        assert_eq!(g.axes.len(), 3);
        let r = &g.records[0];
        assert_eq!(r.ground_point, Some(Point::new(2.0, 3.0, 0.0)));
        assert_eq!(r.projections[0].from, Point::new(2.0, 3.0, 1.0));
        assert_eq!(r.projections[0].to, Point::new(2.0, 3.0, 0.0));
        assert_eq!(r.anchor.point, r.endpoint);

        let plane = g.ground_plane.as_ref().unwrap();
        assert_abs_diff_eq!(plane.vertices[2].x, 0.8 * g.extent, epsilon = 1e-12);
    }

    #[test]
    fn sum_has_parallelogram_sides() {
        let g = builder()
            .layout_sum(&Vector::labeled("u", [4.0, 2.0]), &Vector::labeled("v", [-1.0, 3.0]))
            .unwrap();

        assert_eq!(g.records.len(), 3);
        let sum = g.record("u+v").unwrap();
        assert_eq!(sum.endpoint, Point::xy(3.0, 5.0));
        assert_eq!(sum.stroke, StrokeStyle::Emphasis);

        assert_eq!(g.auxiliary.len(), 2);
        assert_eq!(g.auxiliary[0].from, Point::xy(4.0, 2.0));
        assert_eq!(g.auxiliary[1].from, Point::xy(-1.0, 3.0));
        assert!(g.auxiliary.iter().all(|s| s.to == Point::xy(3.0, 5.0)));
        assert_abs_diff_eq!(g.extent, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn cross_product_fills_the_spanned_parallelogram() {
        let a = Vector::labeled("a", [3.0, 2.0, 2.0]);
        let b = Vector::labeled("b", [1.0, 3.0, 1.0]);
        let g = builder().layout_cross_product(&a, &b).unwrap();

        assert_eq!(g.dimension, Dimension::Three);
        assert_eq!(g.records[2].endpoint, Point::new(-4.0, -1.0, 7.0));
        assert_eq!(
            g.fills[0].vertices,
            vec![
                Point::ORIGIN,
                Point::new(3.0, 2.0, 2.0),
                Point::new(4.0, 5.0, 3.0),
                Point::new(1.0, 3.0, 1.0),
            ]
        );
        assert_abs_diff_eq!(g.extent, 1.2 * 7.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_map_pairs_originals_with_images() {
        let m = Matrix::from_rows(&[[2.0, -1.0], [1.0, 3.0]]);
        let g = builder()
            .layout_linear_map(&m, &[Vector::from([1.0, 0.0]), Vector::from([0.0, 1.0])])
            .unwrap();

        assert_eq!(g.records.len(), 4);
        assert_eq!(g.records[0].stroke, StrokeStyle::Faded);
        assert_eq!(g.records[1].endpoint, Point::xy(2.0, 1.0));
        assert_eq!(g.records[1].label, "Ae_1");
        assert_eq!(g.records[3].endpoint, Point::xy(-1.0, 3.0));
        assert_eq!(g.records[2].color, g.records[3].color);
    }

    #[test]
    fn projection_layout_in_space() {
        let v = Vector::labeled("v", [5.0, 3.0, 1.0]);
        let basis = [Vector::from([1.0, 0.0, 0.0]), Vector::from([0.0, 1.0, 0.0])];
        let g = builder().layout_projection(&v, &basis).unwrap();

        let colors: Vec<&str> = g.records.iter().map(|r| r.color.as_str()).collect();
        assert_eq!(colors, ["blue", "green", "red"]);
        assert_eq!(g.records[1].endpoint, Point::new(5.0, 3.0, 0.0));
        assert_eq!(g.records[2].endpoint, Point::new(0.0, 0.0, 1.0));
        assert_eq!(g.auxiliary[0].to, Point::new(5.0, 3.0, 1.0));
    }

    #[test]
    fn eigenvector_layout_skips_complex_pairs() {
        let rotation = Matrix::from_rows(&[[0.0, -1.0], [1.0, 0.0]]);
        let result = linalg::eigen(&rotation).unwrap();
        assert_eq!(builder().layout_eigenvectors(&result).unwrap(), None);

        let symmetric = Matrix::from_rows(&[[2.0, 1.0], [1.0, 2.0]]);
        let result = linalg::eigen(&symmetric).unwrap();
        let g = builder().layout_eigenvectors(&result).unwrap().unwrap();
        assert_eq!(g.records.len(), 2);
        assert_eq!(g.dimension, Dimension::Two);
    }

    #[test]
    fn layouts_are_pure() {
        let b = builder();
        let a = Vector::from([3.0, 4.0, 2.0]);
        let c = Vector::from([1.0, -2.0, 5.0]);
        assert_eq!(
            b.layout_cross_product(&a, &c).unwrap(),
            b.layout_cross_product(&a, &c).unwrap()
        );
        assert_eq!(b.layout_sum(&a, &c).unwrap(), b.layout_sum(&a, &c).unwrap());
    }

    #[test]
    fn screen_bounds_cover_the_picture() {
        let g = builder()
            .layout_2d(&[Vector::from([3.0, 2.0])])
            .unwrap();
        let bounds = g.screen_bounds();
        assert_abs_diff_eq!(bounds.min[0], -g.extent, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.max[1], g.extent, epsilon = 1e-12);
    }
}
