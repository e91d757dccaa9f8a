//! Mapping scene coordinates onto the 2D page.
//!
//! 2D scenes are already in page space. 3D scenes are seen through a [`ViewProjection`]
//! built from a [`Viewpoint`], matching the tikz-3dplot main-coords convention:
//!
//! ```text
//! screen_x =  cos φ · x + sin φ · y
//! screen_y = -cos θ sin φ · x + cos θ cos φ · y + sin θ · z
//! ```
//!
//! i.e. `R = Rx(-θ) · Rz(-φ)`, keeping the first two rows.

use glam::{DMat3, DVec3};

use super::options::Viewpoint;
use super::Point;

/// Orthographic view of a 3D scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewProjection {
    rotation: DMat3,
}

impl Default for ViewProjection {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewProjection {
    /// Looking straight down the z axis: `(x, y, z) -> (x, y)`.
    pub const IDENTITY: Self = Self {
        rotation: DMat3::IDENTITY,
    };

    pub fn from_viewpoint(vp: Viewpoint) -> Self {
        let theta = vp.theta_deg.to_radians();
        let phi = vp.phi_deg.to_radians();
        Self {
            rotation: DMat3::from_rotation_x(-theta) * DMat3::from_rotation_z(-phi),
        }
    }

    #[inline]
    fn rotate(&self, p: Point) -> DVec3 {
        self.rotation * DVec3::new(p.x, p.y, p.z)
    }

    /// Page coordinates of `p`.
    #[inline]
    pub fn project(&self, p: Point) -> [f64; 2] {
        let r = self.rotate(p);
        [r.x, r.y]
    }
}

/// Axis-aligned bounding box in page space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb2 {
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: [f64::INFINITY, f64::INFINITY],
            max: [f64::NEG_INFINITY, f64::NEG_INFINITY],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    #[inline]
    pub fn include_point(&mut self, p: [f64; 2]) {
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }

    #[inline]
    pub fn size(&self) -> [f64; 2] {
        [self.max[0] - self.min[0], self.max[1] - self.min[1]]
    }
}
