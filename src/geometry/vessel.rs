use std::{f64::consts::TAU, sync::Arc};

use kurbo::{CircleSegment, Shape};

use crate::{
    config::series::SeriesConfig,
    foundation::core::{Affine, BezPath, Canvas, Circle, Point},
};

/// Flattening tolerance for circle outlines, in pixels.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Vessel measurements shared by every wave and the label within one render pass.
///
/// Shapes are described in vessel-local coordinates; [`VesselGeometry::transform`] places them
/// on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VesselGeometry {
    pub center: Point,
    pub outer_radius: f64,
    pub border_width: f64,
    pub inner_radius: f64,
    /// Gap between the border ring and the liquid.
    pub padding: f64,
    /// Radius available to the liquid; never negative.
    pub radius: f64,
}

impl VesselGeometry {
    pub fn resolve(cfg: &SeriesConfig, canvas: Canvas) -> Self {
        let size = canvas.min_side();
        let center = Point::new(
            cfg.center[0].resolve(f64::from(canvas.width)),
            cfg.center[1].resolve(f64::from(canvas.height)),
        );
        let border_width = cfg.outline.border_width.resolve(size);
        let outer_radius = cfg.radius.resolve(size) / 2.0;
        let inner_radius = outer_radius - border_width;
        let padding = cfg.outline.border_distance.resolve(size);

        let usable = inner_radius - padding;
        let radius = if usable > 0.0 {
            usable
        } else {
            tracing::warn!(
                outer_radius,
                border_width,
                padding,
                "vessel has no room for liquid"
            );
            0.0
        };

        Self {
            center,
            outer_radius,
            border_width,
            inner_radius,
            padding,
            radius,
        }
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Vessel-local to canvas coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2())
    }

    /// The clip circle for this pass. Call once and share the `Arc`.
    pub fn clip(&self) -> Arc<VesselClip> {
        Arc::new(VesselClip::new(self.radius))
    }

    /// Ring between the inner and outer radius.
    pub fn border_path(&self) -> BezPath {
        let outer = self.outer_radius.max(0.0);
        let inner = self.inner_radius.clamp(0.0, outer);
        if outer <= 0.0 {
            return BezPath::new();
        }
        CircleSegment::new(Point::ZERO, outer, inner, 0.0, TAU).to_path(PATH_TOLERANCE)
    }

    /// Disc behind the liquid.
    pub fn background_path(&self) -> BezPath {
        Circle::new(Point::ZERO, self.radius).to_path(PATH_TOLERANCE)
    }
}

/// Circular clip region in vessel-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct VesselClip {
    circle: Circle,
}

impl VesselClip {
    pub fn new(radius: f64) -> Self {
        Self {
            circle: Circle::new(Point::ZERO, radius.max(0.0)),
        }
    }

    pub fn circle(&self) -> Circle {
        self.circle
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius
    }

    pub fn contains(&self, p: Point) -> bool {
        self.circle.contains(p)
    }

    pub fn to_path(&self) -> BezPath {
        self.circle.to_path(PATH_TOLERANCE)
    }

    /// Pair `path` with this clip. The path itself is left untouched.
    pub fn attach(self: &Arc<Self>, path: BezPath) -> ClippedPath {
        ClippedPath {
            path,
            clip: Arc::clone(self),
        }
    }
}

/// A path whose visible region is limited to a shared vessel clip.
#[derive(Clone, Debug)]
pub struct ClippedPath {
    pub path: BezPath,
    pub clip: Arc<VesselClip>,
}

impl ClippedPath {
    pub fn shares_clip_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.clip, &other.clip)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/vessel.rs"]
mod tests;
