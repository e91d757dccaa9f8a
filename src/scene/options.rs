//! Presentation options consumed by the layout functions.

use crate::error::{Error, Result};

/// Camera angles for 3D scenes, in degrees.
///
/// These follow the tikz-3dplot "main coords" convention: `theta` tilts the view away
/// from looking straight down the z axis, `phi` spins the scene around z.
/// Layouts store the viewpoint unmodified; only [`super::view::ViewProjection`] computes
/// anything from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewpoint {
    pub theta_deg: f64,
    pub phi_deg: f64,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self {
            theta_deg: 70.0,
            phi_deg: 120.0,
        }
    }
}

impl Viewpoint {
    #[inline]
    pub const fn new(theta_deg: f64, phi_deg: f64) -> Self {
        Self { theta_deg, phi_deg }
    }
}

/// Default palette, in the order the demos assign it.
pub const DEFAULT_COLORS: [&str; 5] = ["blue", "red", "green", "orange", "purple"];

/// Configuration record for diagram layout.
///
/// - `margin`: axis extent is `margin * max |component|`; must be `>= 1.0`.
/// - `show_grid`: 2D grid / 3D ground plane.
/// - `show_components`: dashed component projections onto the axes.
/// - `viewpoint`: used by layouts that produce 3D scenes without an explicit viewpoint.
/// - `colors`: palette cycled by vector index.
/// - `fallback_extent`: extent used when every component is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramOptions {
    pub margin: f64,
    pub show_grid: bool,
    pub show_components: bool,
    pub viewpoint: Viewpoint,
    pub colors: Vec<String>,
    pub fallback_extent: f64,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            margin: 1.2,
            show_grid: true,
            show_components: false,
            viewpoint: Viewpoint::default(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            fallback_extent: 1.0,
        }
    }
}

impl DiagramOptions {
    #[inline]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[inline]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[inline]
    pub fn with_components(mut self, show_components: bool) -> Self {
        self.show_components = show_components;
        self
    }

    #[inline]
    pub fn with_viewpoint(mut self, viewpoint: Viewpoint) -> Self {
        self.viewpoint = viewpoint;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn with_fallback_extent(mut self, fallback_extent: f64) -> Self {
        self.fallback_extent = fallback_extent;
        self
    }

    /// Reject options no layout can honour.
    pub fn validate(&self) -> Result<()> {
        if !(self.margin >= 1.0) {
            return Err(Error::InvalidOptions(format!(
                "margin must be >= 1.0, got {}",
                self.margin
            )));
        }
        if !(self.fallback_extent > 0.0) {
            return Err(Error::InvalidOptions(format!(
                "fallback extent must be positive, got {}",
                self.fallback_extent
            )));
        }
        if self.colors.is_empty() {
            return Err(Error::InvalidOptions("color palette is empty".into()));
        }
        Ok(())
    }
}
