//! Stroke data and the bounded stroke pool.
//!
//! A stroke is one continuous drawn line: an append-only point path
//! plus a single color. Strokes live in a fixed-capacity slot arena
//! (`StrokePool`) and are addressed through generation-tagged handles
//! so that a handle to a released or evicted stroke is detected
//! instead of silently aliasing a reused slot.

use serde::{Deserialize, Serialize};

// ── Color ──────────────────────────────────────────────────

/// RGBA color, applied uniformly to a whole stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

// ── Stroke ─────────────────────────────────────────────────

/// One continuous drawn line.
///
/// Points are world-space and appended only at the tail; path order
/// is meaningful. A live stroke always has at least one point (the
/// store initializes it on creation).
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    pub color: Color,
    pub points: Vec<[f32; 3]>,
}

// ── Pool ───────────────────────────────────────────────────

/// Handle to a pooled stroke slot.
///
/// Carries the generation the slot had when acquired; after the slot
/// is released the generation advances, so stale handles fail the
/// liveness check loudly rather than reading a recycled stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeRef {
    index: usize,
    generation: u32,
}

#[derive(Debug)]
struct Slot {
    stroke: Stroke,
    generation: u32,
    in_use: bool,
}

/// Fixed-capacity arena of reusable strokes.
///
/// Slots are allocated lazily up to the hard cap and then recycled
/// through a free list. The pool does not track ordering of live
/// strokes; that belongs to the [`DrawingStore`](crate::DrawingStore).
#[derive(Debug)]
pub struct StrokePool {
    slots: Vec<Slot>,
    free: Vec<usize>,
    capacity: usize,
}

impl StrokePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently handed out.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Acquire a stroke slot, reusing a free one or allocating up to
    /// the capacity cap.
    ///
    /// Returns `None` when every slot is live; the caller is expected
    /// to release (evict) a stroke first. The returned stroke is
    /// empty with the default color; the caller initializes it.
    pub fn acquire(&mut self) -> Option<StrokeRef> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.in_use = true;
            slot.stroke.points.clear();
            return Some(StrokeRef {
                index,
                generation: slot.generation,
            });
        }
        if self.slots.len() < self.capacity {
            let index = self.slots.len();
            self.slots.push(Slot {
                stroke: Stroke::default(),
                generation: 0,
                in_use: true,
            });
            return Some(StrokeRef {
                index,
                generation: 0,
            });
        }
        None
    }

    /// Return a stroke slot to the free list.
    ///
    /// Releasing the same handle twice without an intervening acquire
    /// is a contract violation and panics.
    pub fn release(&mut self, handle: StrokeRef) {
        let slot = &mut self.slots[handle.index];
        assert!(
            slot.in_use && slot.generation == handle.generation,
            "release of a stale stroke handle (slot {})",
            handle.index,
        );
        slot.in_use = false;
        slot.generation += 1;
        slot.stroke.points.clear();
        self.free.push(handle.index);
    }

    /// Whether a handle still refers to a live stroke.
    pub fn is_live(&self, handle: StrokeRef) -> bool {
        self.slots
            .get(handle.index)
            .map(|s| s.in_use && s.generation == handle.generation)
            .unwrap_or(false)
    }

    /// Borrow the stroke behind a handle. Panics on a stale handle.
    pub fn get(&self, handle: StrokeRef) -> &Stroke {
        let slot = &self.slots[handle.index];
        assert!(
            slot.in_use && slot.generation == handle.generation,
            "stale stroke handle (slot {}): stroke was released or evicted",
            handle.index,
        );
        &slot.stroke
    }

    /// Mutably borrow the stroke behind a handle. Panics on a stale
    /// handle.
    pub fn get_mut(&mut self, handle: StrokeRef) -> &mut Stroke {
        let slot = &mut self.slots[handle.index];
        assert!(
            slot.in_use && slot.generation == handle.generation,
            "stale stroke handle (slot {}): stroke was released or evicted",
            handle.index,
        );
        &mut slot.stroke
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_up_to_capacity() {
        let mut pool = StrokePool::new(3);
        let a = pool.acquire();
        let b = pool.acquire();
        let c = pool.acquire();
        assert!(a.is_some() && b.is_some() && c.is_some());
        assert!(pool.acquire().is_none(), "acquire past the cap must fail");
        assert_eq!(pool.live_count(), 3);
    }

    #[test]
    fn test_release_and_reuse() {
        let mut pool = StrokePool::new(1);
        let a = pool.acquire().unwrap();
        pool.get_mut(a).points.push([1.0, 2.0, 3.0]);
        pool.release(a);
        assert_eq!(pool.live_count(), 0);

        let b = pool.acquire().unwrap();
        assert!(pool.get(b).points.is_empty(), "recycled stroke must be empty");
        assert_ne!(a, b, "recycled handle must carry a new generation");
    }

    #[test]
    fn test_stale_handle_detected() {
        let mut pool = StrokePool::new(2);
        let a = pool.acquire().unwrap();
        assert!(pool.is_live(a));
        pool.release(a);
        assert!(!pool.is_live(a));

        // The slot is reused but the old handle stays dead.
        let b = pool.acquire().unwrap();
        assert!(pool.is_live(b));
        assert!(!pool.is_live(a));
    }

    #[test]
    #[should_panic(expected = "stale stroke handle")]
    fn test_get_released_handle_panics() {
        let mut pool = StrokePool::new(1);
        let a = pool.acquire().unwrap();
        pool.release(a);
        let _ = pool.get(a);
    }

    #[test]
    #[should_panic(expected = "stale stroke handle")]
    fn test_double_release_panics() {
        let mut pool = StrokePool::new(1);
        let a = pool.acquire().unwrap();
        pool.release(a);
        pool.release(a);
    }

    #[test]
    fn test_default_color_is_red() {
        assert_eq!(Color::default(), Color::RED);
    }
}
