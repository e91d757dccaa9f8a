//! Diagram geometry: the second half of the core.
//!
//! This module turns vectors (and results computed from them) into a renderer-agnostic
//! [`GeometryDescription`]:
//! - axis segments sized from the data (`margin * max |component|`)
//! - one [`RenderRecord`] per drawn vector (endpoint, color, label anchor, projections)
//! - auxiliary dashed segments and translucent fill regions
//! - the viewpoint of 3D scenes, passed through untouched
//!
//! Design goals:
//! - Pure: the same inputs always give the same geometry (`PartialEq` on the output makes
//!   this checkable).
//! - Scene coordinates are the vectors' own coordinates. Page mapping is a separate step
//!   (`view::ViewProjection`) so layouts never bake a camera into their output.
//! - No markup here. Formatting into TikZ lives in `crate::markup`.

pub mod layout;
pub mod options;
pub mod view;

pub use layout::{DiagramGeometryBuilder, compute_extent};
pub use options::{DiagramOptions, Viewpoint};
pub use view::{Aabb2, ViewProjection};

use crate::error::{Error, Result};
use crate::linalg::Vector;

/// Dimensionality of a diagram. Every vector in one diagram shares it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// Dimension of a vector of length `n`; anything but 2 or 3 is a mismatch.
    pub fn of_len(op: &'static str, n: usize) -> Result<Self> {
        match n {
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            _ => Err(Error::mismatch(op, if n < 2 { 2 } else { 3 }, n)),
        }
    }

    #[inline]
    pub fn len(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

/// A point in scene space. 2D scenes keep `z == 0`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Endpoint of a 2- or 3-component vector; missing components are zero.
    #[inline]
    pub fn of(v: &Vector) -> Self {
        let c = |i| v.get(i).unwrap_or(0.0);
        Self::new(c(0), c(1), c(2))
    }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            (self.x + other.x) * 0.5,
            (self.y + other.y) * 0.5,
            (self.z + other.z) * 0.5,
        )
    }

    /// Drop onto the `z = 0` plane.
    #[inline]
    pub fn on_ground(self) -> Self {
        Self::new(self.x, self.y, 0.0)
    }
}

/// How a vector arrow should look. Renderers pick the concrete line widths.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StrokeStyle {
    /// A regular vector arrow.
    Principal,
    /// A result vector drawn heavier than its inputs.
    Emphasis,
    /// A "before" vector shown behind its transformed counterpart.
    Faded,
}

/// Where a label sits relative to its anchor point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelPlacement {
    Above,
    Below,
    Left,
    Right,
    AboveLeft,
    AboveRight,
    BelowLeft,
    BelowRight,
}

/// Anchor point plus placement for a vector label.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelAnchor {
    pub point: Point,
    pub placement: LabelPlacement,
}

/// A dashed helper line between two scene points (projections, parallelogram sides).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: String,
}

/// A closed, translucent polygon (parallelograms, ground planes).
#[derive(Debug, Clone, PartialEq)]
pub struct FillRegion {
    pub vertices: Vec<Point>,
    pub color: String,
    pub opacity: f64,
}

/// One coordinate axis drawn from `from` to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLine {
    pub name: char,
    pub from: Point,
    pub to: Point,
}

/// Everything a renderer needs to draw a single vector.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRecord {
    pub label: String,
    pub color: String,
    pub origin: Point,
    pub endpoint: Point,
    pub stroke: StrokeStyle,
    pub anchor: LabelAnchor,
    /// Dashed helper lines attached to this vector (component / ground projections).
    pub projections: Vec<Segment>,
    /// `(x, y, 0)` for vectors in 3D scenes.
    pub ground_point: Option<Point>,
}

/// Square grid spanning `min..max` in the xy plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grid {
    pub min: Point,
    pub max: Point,
}

/// The renderer-agnostic output of every layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDescription {
    pub dimension: Dimension,
    /// Axis half-length (2D) or length (3D).
    pub extent: f64,
    pub axes: Vec<AxisLine>,
    pub grid: Option<Grid>,
    pub ground_plane: Option<FillRegion>,
    pub records: Vec<RenderRecord>,
    pub auxiliary: Vec<Segment>,
    pub fills: Vec<FillRegion>,
    pub viewpoint: Option<Viewpoint>,
}

impl GeometryDescription {
    /// Record by label, if present.
    pub fn record(&self, label: &str) -> Option<&RenderRecord> {
        self.records.iter().find(|r| r.label == label)
    }

    /// Page projection for this scene (identity for 2D).
    pub fn view(&self) -> ViewProjection {
        match (self.dimension, self.viewpoint) {
            (Dimension::Three, Some(vp)) => ViewProjection::from_viewpoint(vp),
            _ => ViewProjection::IDENTITY,
        }
    }

    /// Page-space bounds of every point in the picture.
    pub fn screen_bounds(&self) -> Aabb2 {
        let view = self.view();
        let mut bounds = Aabb2::empty();
        let mut add = |p: Point| bounds.include_point(view.project(p));

        for axis in &self.axes {
            add(axis.from);
            add(axis.to);
        }
        if let Some(grid) = &self.grid {
            add(grid.min);
            add(grid.max);
        }
        for fill in self.fills.iter().chain(self.ground_plane.as_ref()) {
            fill.vertices.iter().copied().for_each(&mut add);
        }
        for r in &self.records {
            add(r.origin);
            add(r.endpoint);
            for s in &r.projections {
                add(s.from);
                add(s.to);
            }
        }
        for s in &self.auxiliary {
            add(s.from);
            add(s.to);
        }
        bounds
    }
}
