//! `tikzpicture` output for a [`GeometryDescription`].
//!
//! Drawing order, back to front: grid, ground plane, axes, fill regions, auxiliary
//! segments, per-vector projections, arrows, endpoint dots, labels.
//! 3D scenes are emitted in `tdplot_main_coords` so TikZ applies the same view as
//! [`crate::scene::ViewProjection`].

use crate::scene::{
    Dimension, FillRegion, GeometryDescription, LabelPlacement, Point, Segment, StrokeStyle,
};

use super::{format_number, label_math};

/// Picture-level options.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TikzOptions {
    /// `scale=` for 2D pictures.
    pub scale_2d: f64,
    /// `scale=` for 3D pictures.
    pub scale_3d: f64,
}

impl Default for TikzOptions {
    fn default() -> Self {
        Self {
            scale_2d: 1.5,
            scale_3d: 1.2,
        }
    }
}

impl TikzOptions {
    #[inline]
    pub fn with_scale_2d(mut self, scale: f64) -> Self {
        self.scale_2d = scale;
        self
    }

    #[inline]
    pub fn with_scale_3d(mut self, scale: f64) -> Self {
        self.scale_3d = scale;
        self
    }
}

fn placement_key(p: LabelPlacement) -> &'static str {
    match p {
        LabelPlacement::Above => "above",
        LabelPlacement::Below => "below",
        LabelPlacement::Left => "left",
        LabelPlacement::Right => "right",
        LabelPlacement::AboveLeft => "above left",
        LabelPlacement::AboveRight => "above right",
        LabelPlacement::BelowLeft => "below left",
        LabelPlacement::BelowRight => "below right",
    }
}

/// Accumulates picture lines with the coordinate syntax of one dimension.
struct Picture {
    dimension: Dimension,
    lines: Vec<String>,
}

impl Picture {
    fn coord(&self, p: Point) -> String {
        match self.dimension {
            Dimension::Two => format!("({},{})", format_number(p.x), format_number(p.y)),
            Dimension::Three => format!(
                "({},{},{})",
                format_number(p.x),
                format_number(p.y),
                format_number(p.z)
            ),
        }
    }

    fn push(&mut self, line: String) {
        self.lines.push(format!("  {line}"));
    }

    fn segment(&mut self, s: &Segment, arrow: bool, opacity: f64) {
        let tip = if arrow { "->, " } else { "" };
        let line = format!(
            "\\draw[{tip}dashed, {}, opacity={}] {} -- {};",
            s.color,
            format_number(opacity),
            self.coord(s.from),
            self.coord(s.to)
        );
        self.push(line);
    }

    fn fill(&mut self, region: &FillRegion) {
        let path = region
            .vertices
            .iter()
            .map(|&p| self.coord(p))
            .collect::<Vec<_>>()
            .join(" -- ");
        let line = format!(
            "\\fill[{}, opacity={}] {path} -- cycle;",
            region.color,
            format_number(region.opacity)
        );
        self.push(line);
    }
}

/// Render `geometry` as a complete `tikzpicture` environment.
pub fn render_picture(geometry: &GeometryDescription, options: &TikzOptions) -> String {
    let mut pic = Picture {
        dimension: geometry.dimension,
        lines: Vec::new(),
    };

    let mut out = Vec::new();
    match (geometry.dimension, geometry.viewpoint) {
        (Dimension::Three, Some(vp)) => {
            out.push(format!(
                "\\tdplotsetmaincoords{{{}}}{{{}}}",
                format_number(vp.theta_deg),
                format_number(vp.phi_deg)
            ));
            out.push(format!(
                "\\begin{{tikzpicture}}[tdplot_main_coords, scale={}]",
                format_number(options.scale_3d)
            ));
        }
        (Dimension::Three, None) => out.push(format!(
            "\\begin{{tikzpicture}}[scale={}]",
            format_number(options.scale_3d)
        )),
        (Dimension::Two, _) => out.push(format!(
            "\\begin{{tikzpicture}}[scale={}]",
            format_number(options.scale_2d)
        )),
    }

    if let Some(grid) = &geometry.grid {
        let line = format!(
            "\\draw[gray!30, very thin] {} grid {};",
            pic.coord(grid.min),
            pic.coord(grid.max)
        );
        pic.push(line);
    }
    if let Some(plane) = &geometry.ground_plane {
        pic.fill(plane);
    }

    for axis in &geometry.axes {
        let placement = if axis.name == 'x' { "right" } else { "above" };
        let line = format!(
            "\\draw[->, thick, gray] {} -- {} node[{placement}] {{${}$}};",
            pic.coord(axis.from),
            pic.coord(axis.to),
            axis.name
        );
        pic.push(line);
    }

    for region in &geometry.fills {
        pic.fill(region);
    }
    for s in &geometry.auxiliary {
        pic.segment(s, true, 0.7);
    }
    for r in &geometry.records {
        for s in &r.projections {
            pic.segment(s, false, 0.5);
        }
    }

    for r in &geometry.records {
        let style = match r.stroke {
            StrokeStyle::Principal => format!("thick, {}", r.color),
            StrokeStyle::Emphasis => format!("ultra thick, {}", r.color),
            StrokeStyle::Faded => format!("thick, {}!60", r.color),
        };
        let line = format!(
            "\\draw[->, {style}] {} -- {};",
            pic.coord(r.origin),
            pic.coord(r.endpoint)
        );
        pic.push(line);

        let radius = if r.stroke == StrokeStyle::Emphasis { 3 } else { 2 };
        let line = format!(
            "\\fill[{}] {} circle ({radius}pt);",
            r.color,
            pic.coord(r.endpoint)
        );
        pic.push(line);
    }

    for r in &geometry.records {
        let line = format!(
            "\\node[{}, {}] at {} {{${}$}};",
            placement_key(r.anchor.placement),
            r.color,
            pic.coord(r.anchor.point),
            label_math(&r.label)
        );
        pic.push(line);
    }

    log::debug!(
        "render_picture: {:?} scene, {} records, {} lines",
        geometry.dimension,
        geometry.records.len(),
        pic.lines.len()
    );

    out.append(&mut pic.lines);
    out.push("\\end{tikzpicture}".to_owned());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Vector;
    use crate::scene::{DiagramGeometryBuilder, Viewpoint};

    #[test]
    fn two_dimensional_picture() {
        let g = DiagramGeometryBuilder::default()
            .layout_2d(&[Vector::labeled("u", [3.0, 2.0])])
            .unwrap();
        let tex = render_picture(&g, &TikzOptions::default());

        assert!(tex.starts_with("\\begin{tikzpicture}[scale=1.5]"));
        assert!(tex.ends_with("\\end{tikzpicture}"));
        assert!(tex.contains("\\draw[gray!30, very thin] (-3.6,-3.6) grid (3.6,3.6);"));
        assert!(tex.contains("\\draw[->, thick, blue] (0,0) -- (3,2);"));
        assert!(tex.contains("\\node[above left, blue] at (1.5,1) {$\\vec{u}$};"));
        assert!(!tex.contains("tdplot"));

        let tex = render_picture(&g, &TikzOptions::default().with_scale_2d(1.2));
        assert!(tex.starts_with("\\begin{tikzpicture}[scale=1.2]"));
    }

    #[test]
    fn three_dimensional_picture_uses_tdplot() {
        let g = DiagramGeometryBuilder::default()
            .layout_3d(
                &[Vector::labeled("a", [2.0, 3.0, 1.0])],
                Viewpoint::new(65.0, 115.0),
            )
            .unwrap();
        let tex = render_picture(&g, &TikzOptions::default().with_scale_3d(2.0));

        assert!(tex.starts_with("\\tdplotsetmaincoords{65}{115}\n"));
        assert!(tex.contains("[tdplot_main_coords, scale=2]"));
        assert!(tex.contains("\\draw[dashed, blue, opacity=0.5] (2,3,1) -- (2,3,0);"));
        assert!(tex.contains("node[above] {$z$};"));
        assert!(tex.contains("-- cycle;"));
    }

    #[test]
    fn sum_picture_has_dashed_sides_and_emphasis() {
        let g = DiagramGeometryBuilder::default()
            .layout_sum(&Vector::labeled("u", [4.0, 2.0]), &Vector::labeled("v", [-1.0, 3.0]))
            .unwrap();
        let tex = render_picture(&g, &TikzOptions::default());

        assert!(tex.contains("\\draw[->, dashed, red, opacity=0.7] (4,2) -- (3,5);"));
        assert!(tex.contains("\\draw[->, ultra thick, green] (0,0) -- (3,5);"));
        assert!(tex.contains("\\fill[green] (3,5) circle (3pt);"));
        assert!(tex.contains("{$u+v$}"));
    }
}
