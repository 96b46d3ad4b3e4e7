//! Per-hand draw state machine.
//!
//! One `StrokeEngine` per tracked hand consumes a fingertip sample
//! each frame and drives the idle/drawing transitions against a
//! shared [`DrawingStore`]. Contact with the surface begins or
//! extends a stroke; leaving the surface (or losing hand tracking)
//! ends it. A minimum point spacing keeps a resting fingertip from
//! flooding the stroke with near-duplicate points.
//!
//! Engines hold only their own transient state, so several hands can
//! share one store as long as they are ticked sequentially within a
//! frame.

use tracing::debug;

use crate::math;
use crate::store::DrawingStore;
use crate::stroke::StrokeRef;

// ── Hand enum ──────────────────────────────────────────────

/// Which hand drives an engine. Used for event attribution and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

// ── Events ─────────────────────────────────────────────────

/// Events emitted by the draw state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEvent {
    /// A new stroke was begun on the surface.
    StrokeStarted { hand: Hand },
    /// The current stroke was ended (contact or tracking lost). The
    /// stroke itself stays visible in the store.
    StrokeEnded { hand: Hand },
}

// ── Config ─────────────────────────────────────────────────

/// Configuration for the draw state machine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Enable drawing input for this hand.
    pub enabled: bool,
    /// Minimum distance (meters) between consecutive stroke points.
    /// Samples closer than this to the last appended point are
    /// dropped; the comparison is strict.
    pub min_point_distance: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_point_distance: 0.003,
        }
    }
}

// ── Engine ─────────────────────────────────────────────────

/// The stroke currently being extended, plus the last appended point
/// for the spacing filter.
#[derive(Debug, Clone, Copy)]
struct ActiveDraw {
    stroke: StrokeRef,
    last_point: [f32; 3],
}

/// Per-hand idle/drawing state machine.
#[derive(Debug)]
pub struct StrokeEngine {
    hand: Hand,
    config: EngineConfig,
    /// `Some` while drawing; holds the handle being extended.
    draw: Option<ActiveDraw>,
}

impl StrokeEngine {
    pub fn new(hand: Hand) -> Self {
        Self::with_config(hand, EngineConfig::default())
    }

    pub fn with_config(hand: Hand, config: EngineConfig) -> Self {
        Self {
            hand,
            config,
            draw: None,
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn is_drawing(&self) -> bool {
        self.draw.is_some()
    }

    /// Consume one fingertip sample and advance the state machine.
    ///
    /// `tracked` is the hand-tracking flag from the XR host;
    /// `fingertip` is the world-space index fingertip position, or
    /// `None` when the bone pose is unavailable this frame. Losing
    /// tracking mid-stroke ends the stroke rather than leaving it
    /// dangling.
    pub fn update(
        &mut self,
        store: &mut DrawingStore,
        tracked: bool,
        fingertip: Option<[f32; 3]>,
    ) -> Vec<DrawEvent> {
        if !self.config.enabled {
            return Vec::new();
        }

        let position = match fingertip {
            Some(p) if tracked => p,
            _ => return self.end_stroke(),
        };

        match store.surface().contact_test(position) {
            Some(projected) => match &mut self.draw {
                None => {
                    let stroke = store.begin_stroke(projected);
                    self.draw = Some(ActiveDraw {
                        stroke,
                        last_point: projected,
                    });
                    debug!("stroke started on {} hand", self.hand.as_str());
                    vec![DrawEvent::StrokeStarted { hand: self.hand }]
                }
                Some(active) => {
                    if math::distance(active.last_point, projected) > self.config.min_point_distance
                    {
                        store.extend_stroke(active.stroke, projected);
                        active.last_point = projected;
                    }
                    Vec::new()
                }
            },
            None => self.end_stroke(),
        }
    }

    /// End the current stroke, if any. The stroke stays in the store;
    /// only the extension handle is dropped.
    fn end_stroke(&mut self) -> Vec<DrawEvent> {
        if self.draw.take().is_some() {
            debug!("stroke ended on {} hand", self.hand.as_str());
            vec![DrawEvent::StrokeEnded { hand: self.hand }]
        } else {
            Vec::new()
        }
    }
}

// ── Tests ──────────────────────────────────────────────────
