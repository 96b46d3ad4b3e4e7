//! Drawing-surface contact detection and coordinate conversion.
//!
//! Models the virtual sheet of paper as a bounded rectangular plane:
//! a rigid pose (position + orientation) plus half extents and a thin
//! slab tolerance. A fingertip is "in contact" when it lies inside
//! the slab and inside the rectangle; the reported contact point is
//! the fingertip projected onto the plane, never the raw input.
//!
//! Conversion between world space and the plane's local frame is also
//! exposed: persisted drawings store surface-local points so they
//! survive the plane being moved or re-oriented between sessions.

use crate::math;

// ── Config ─────────────────────────────────────────────────

/// Geometry of the drawing area, fixed at setup.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Half extent of the drawing rectangle along local X (meters).
    pub half_width: f32,
    /// Half extent of the drawing rectangle along local Y (meters).
    pub half_height: f32,
    /// Slab thickness: maximum distance from the plane (along local Z)
    /// that still counts as touching (meters).
    pub surface_offset: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            half_width: 0.5,
            half_height: 0.5,
            surface_offset: 0.01,
        }
    }
}

// ── Surface ────────────────────────────────────────────────

/// A bounded planar drawing surface with a world-space pose.
///
/// Read-only during drawing; the host scene owns the pose.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    /// World-space position of the plane origin.
    position: [f32; 3],
    /// World-space orientation quaternion (x, y, z, w). Local Z is
    /// the plane normal.
    orientation: [f32; 4],
    /// Drawing area geometry.
    config: SurfaceConfig,
}

impl DrawingSurface {
    /// Create a surface with an explicit pose.
    pub fn new(position: [f32; 3], orientation: [f32; 4], config: SurfaceConfig) -> Self {
        Self {
            position,
            orientation,
            config,
        }
    }

    /// Surface at the world origin with identity orientation.
    pub fn identity(config: SurfaceConfig) -> Self {
        Self::new([0.0; 3], [0.0, 0.0, 0.0, 1.0], config)
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Express a world-space point in the plane's local frame.
    pub fn world_to_surface(&self, point: [f32; 3]) -> [f32; 3] {
        math::rotate_inverse(self.orientation, math::sub(point, self.position))
    }

    /// Express a surface-local point in world space.
    pub fn surface_to_world(&self, point: [f32; 3]) -> [f32; 3] {
        math::add(math::rotate(self.orientation, point), self.position)
    }

    /// Test whether a world-space point touches the drawing area.
    ///
    /// Returns the point projected onto the plane (in world space) on
    /// contact, `None` otherwise. Rectangle bounds are inclusive; the
    /// slab depth test is strict.
    pub fn contact_test(&self, point: [f32; 3]) -> Option<[f32; 3]> {
        let local = self.world_to_surface(point);
        if local[2].abs() < self.config.surface_offset
            && local[0].abs() <= self.config.half_width
            && local[1].abs() <= self.config.half_height
        {
            Some(self.surface_to_world([local[0], local[1], 0.0]))
        } else {
            None
        }
    }
}

// ── Tests ──────────────────────────────────────────────────
