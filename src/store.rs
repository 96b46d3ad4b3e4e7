//! The drawing store: canonical owner of the active stroke set.
//!
//! Holds the ordered set of visible strokes (oldest first), the
//! current drawing color, and the surface transform used to convert
//! strokes to and from the surface-local snapshot form used for
//! persistence. Capacity is bounded: beginning a stroke at the cap
//! evicts the oldest one, so the set never exceeds `max_strokes`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::stroke::{Color, StrokePool, StrokeRef};
use crate::surface::DrawingSurface;

// ── Snapshot (wire) types ──────────────────────────────────

/// A 3D point with named fields, as written to the drawing file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for PointData {
    fn from(p: [f32; 3]) -> Self {
        Self {
            x: p[0],
            y: p[1],
            z: p[2],
        }
    }
}

impl From<PointData> for [f32; 3] {
    fn from(p: PointData) -> Self {
        [p.x, p.y, p.z]
    }
}

/// Serialized form of one stroke: a color and its path in
/// surface-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    #[serde(rename = "Color")]
    pub color: Color,
    #[serde(rename = "Positions")]
    pub positions: Vec<PointData>,
}

/// Serialized form of a whole drawing, in stroke creation order.
///
/// Points are surface-local, so a saved drawing stays valid if the
/// surface is moved or re-oriented between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawingSnapshot {
    #[serde(rename = "Lines")]
    pub lines: Vec<LineData>,
}

// ── Config ─────────────────────────────────────────────────

/// Drawing limits and cosmetics, fixed at setup.
#[derive(Debug, Clone)]
pub struct DrawingConfig {
    /// Maximum number of simultaneously visible strokes. Beginning a
    /// stroke at the cap evicts the oldest one.
    pub max_strokes: usize,
    /// Line width handed to the external renderer (meters). Purely
    /// cosmetic; the core never reads it back.
    pub line_width: f32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            max_strokes: 100,
            line_width: 0.01,
        }
    }
}

// ── Store ──────────────────────────────────────────────────

/// Owner of the active stroke set and the current drawing color.
///
/// Single-threaded by design: engines driving it must be ticked
/// sequentially within a frame.
#[derive(Debug)]
pub struct DrawingStore {
    surface: DrawingSurface,
    config: DrawingConfig,
    pool: StrokePool,
    /// Live strokes in creation order; index 0 is the eviction victim.
    active: Vec<StrokeRef>,
    current_color: Color,
}

impl DrawingStore {
    pub fn new(surface: DrawingSurface, config: DrawingConfig) -> Self {
        let pool = StrokePool::new(config.max_strokes);
        Self {
            surface,
            config,
            pool,
            active: Vec::new(),
            current_color: Color::default(),
        }
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    /// Set the color applied to subsequently created strokes.
    /// Existing strokes keep their color.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Number of visible strokes.
    pub fn stroke_count(&self) -> usize {
        self.active.len()
    }

    /// Start a new stroke at `point` (world space) with the current
    /// color. Evicts the oldest stroke first when at capacity.
    pub fn begin_stroke(&mut self, point: [f32; 3]) -> StrokeRef {
        if self.active.len() >= self.config.max_strokes {
            let oldest = self.active.remove(0);
            self.pool.release(oldest);
            debug!(
                "evicted oldest stroke to stay within the {}-stroke cap",
                self.config.max_strokes,
            );
        }

        // Cannot fail: the eviction above guarantees a free slot.
        let handle = self
            .pool
            .acquire()
            .expect("stroke pool exhausted despite eviction");
        let stroke = self.pool.get_mut(handle);
        stroke.color = self.current_color;
        stroke.points.clear();
        stroke.points.push(point);
        self.active.push(handle);
        handle
    }

    /// Append a point (world space) to a live stroke.
    ///
    /// Panics if the handle refers to a released or evicted stroke;
    /// that indicates a bug in the calling state machine.
    pub fn extend_stroke(&mut self, handle: StrokeRef, point: [f32; 3]) {
        self.pool.get_mut(handle).points.push(point);
    }

    /// Remove every stroke and return their slots to the pool.
    pub fn clear_all(&mut self) {
        for handle in self.active.drain(..) {
            self.pool.release(handle);
        }
    }

    /// Visible strokes in creation order, for the external renderer:
    /// each entry is the stroke color and its world-space path.
    pub fn strokes(&self) -> impl Iterator<Item = (Color, &[[f32; 3]])> + '_ {
        self.active.iter().map(|handle| {
            let stroke = self.pool.get(*handle);
            (stroke.color, stroke.points.as_slice())
        })
    }

    /// Export the drawing as a snapshot with surface-local points.
    pub fn export(&self) -> DrawingSnapshot {
        let lines = self
            .active
            .iter()
            .map(|handle| {
                let stroke = self.pool.get(*handle);
                LineData {
                    color: stroke.color,
                    positions: stroke
                        .points
                        .iter()
                        .map(|p| PointData::from(self.surface.world_to_surface(*p)))
                        .collect(),
                }
            })
            .collect();
        DrawingSnapshot { lines }
    }

    /// Replace the drawing with a snapshot's contents.
    ///
    /// Clears the current drawing first, then rebuilds strokes in
    /// snapshot order, converting points back to world space. Entries
    /// beyond `max_strokes` are dropped; loading never evicts.
    pub fn import(&mut self, snapshot: DrawingSnapshot) {
        self.clear_all();

        let total = snapshot.lines.len();
        for (index, line) in snapshot.lines.into_iter().enumerate() {
            if self.active.len() >= self.config.max_strokes {
                warn!(
                    "drawing has {} lines but only {} fit; dropping the rest",
                    total, self.config.max_strokes,
                );
                break;
            }
            if line.positions.is_empty() {
                debug!("skipping empty line {} in loaded drawing", index);
                continue;
            }

            let handle = self
                .pool
                .acquire()
                .expect("stroke pool exhausted below the stroke cap");
            let stroke = self.pool.get_mut(handle);
            stroke.color = line.color;
            stroke.points = line
                .positions
                .into_iter()
                .map(|p| self.surface.surface_to_world(p.into()))
                .collect();
            self.active.push(handle);
        }
    }
}

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
pub(crate) fn test_store(max_strokes: usize) -> DrawingStore {
    use crate::surface::SurfaceConfig;

    DrawingStore::new(
        DrawingSurface::identity(SurfaceConfig::default()),
        DrawingConfig {
            max_strokes,
            ..DrawingConfig::default()
        },
    )
}

// ── Tests ──────────────────────────────────────────────────
