//! Finger-painting core for VR hand tracking.
//!
//! A tracked index fingertip draws colored polylines onto a bounded
//! planar surface (a virtual sheet of paper). This crate is the
//! engine-agnostic core of that feature:
//!
//! - `surface`: fingertip-to-surface contact detection and
//!   world ↔ surface-local coordinate conversion
//! - `stroke`: stroke data and the bounded stroke pool
//! - `store`: the canonical active stroke set with oldest-first
//!   eviction and snapshot export/import
//! - `engine`: the per-hand idle/drawing state machine
//! - `persistence`: JSON save/load of drawings
//!
//! Rendering, the XR hand skeleton, and UI wiring are external
//! collaborators: the host feeds one fingertip sample per hand per
//! frame into a [`StrokeEngine`] and reads the resulting polylines
//! back out of the [`DrawingStore`].

pub mod engine;
pub mod math;
pub mod persistence;
pub mod store;
pub mod stroke;
pub mod surface;

pub use engine::{DrawEvent, EngineConfig, Hand, StrokeEngine};
pub use persistence::{DrawingSaver, PersistenceError};
pub use store::{DrawingConfig, DrawingSnapshot, DrawingStore, LineData, PointData};
pub use stroke::{Color, Stroke, StrokePool, StrokeRef};
pub use surface::{DrawingSurface, SurfaceConfig};
