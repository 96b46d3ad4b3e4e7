//! JSON save/load for drawings.
//!
//! One drawing per file, human-readable, at a path fixed when the
//! saver is constructed. Points are stored surface-local (the store's
//! snapshot form), so drawings stay valid if the surface moves
//! between sessions.
//!
//! Failure isolation: a missing file on load is a warning and a
//! no-op; a read or parse failure is reported without touching the
//! in-memory drawing. The snapshot is fully parsed before the store
//! is mutated.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::store::{DrawingSnapshot, DrawingStore};

/// Errors surfaced by drawing save/load.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read or write drawing file: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Saves and loads a drawing at a fixed path.
#[derive(Debug, Clone)]
pub struct DrawingSaver {
    path: PathBuf,
}

impl DrawingSaver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the store's current drawing to the file as pretty JSON.
    pub fn save(&self, store: &DrawingStore) -> Result<(), PersistenceError> {
        let snapshot = store.export();
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, json)?;
        info!(
            "drawing saved to {} ({} lines)",
            self.path.display(),
            snapshot.lines.len(),
        );
        Ok(())
    }

    /// Load the file and replace the store's drawing with it.
    ///
    /// Returns `Ok(false)` when there is no file to load (the store
    /// is untouched). Any read or parse error leaves the store
    /// untouched as well.
    pub fn load(&self, store: &mut DrawingStore) -> Result<bool, PersistenceError> {
        if !self.path.exists() {
            warn!("no drawing file to load at {}", self.path.display());
            return Ok(false);
        }

        let json = fs::read_to_string(&self.path)?;
        let snapshot: DrawingSnapshot = serde_json::from_str(&json)?;
        let lines = snapshot.lines.len();
        store.import(snapshot);
        info!(
            "drawing loaded from {} ({} lines)",
            self.path.display(),
            lines,
        );
        Ok(true)
    }
}

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fingerpaint-{}-{}.json", name, std::process::id()))
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_store;
    use crate::stroke::Color;

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_file("round-trip");
        let saver = DrawingSaver::new(&path);

        let mut store = test_store(100);
        let s = store.begin_stroke([0.0, 0.0, 0.0]);
        store.extend_stroke(s, [0.1, 0.0, 0.0]);
        store.set_color(Color::BLUE);
        store.begin_stroke([0.2, 0.2, 0.0]);

        saver.save(&store).expect("save must succeed");

        let mut restored = test_store(100);
        let loaded = saver.load(&mut restored).expect("load must succeed");
        assert!(loaded);

        let before: Vec<(Color, usize)> =
            store.strokes().map(|(c, pts)| (c, pts.len())).collect();
        let after: Vec<(Color, usize)> =
            restored.strokes().map(|(c, pts)| (c, pts.len())).collect();
        assert_eq!(before, after);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_a_noop() {
        let path = temp_file("missing");
        let _ = fs::remove_file(&path);
        let saver = DrawingSaver::new(&path);

        let mut store = test_store(100);
        store.begin_stroke([0.1, 0.1, 0.0]);

        let loaded = saver.load(&mut store).expect("missing file is not an error");
        assert!(!loaded);
        assert_eq!(store.stroke_count(), 1, "existing drawing must be untouched");
    }

    #[test]
    fn test_corrupt_file_leaves_drawing_unchanged() {
        let path = temp_file("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let saver = DrawingSaver::new(&path);

        let mut store = test_store(100);
        let s = store.begin_stroke([0.1, 0.1, 0.0]);
        store.extend_stroke(s, [0.2, 0.1, 0.0]);

        let result = saver.load(&mut store);
        assert!(matches!(result, Err(PersistenceError::Parse(_))));
        assert_eq!(store.stroke_count(), 1);
        let (_, points) = store.strokes().next().unwrap();
        assert_eq!(points.len(), 2, "drawing must survive a failed load intact");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_wire_format_key_names() {
        let mut store = test_store(100);
        store.begin_stroke([0.1, 0.2, 0.0]);

        let value = serde_json::to_value(store.export()).unwrap();
        let lines = value
            .get("Lines")
            .and_then(|v| v.as_array())
            .expect("top-level \"Lines\" array");
        let line = &lines[0];
        let color = line.get("Color").expect("\"Color\" object per line");
        for key in ["r", "g", "b", "a"] {
            assert!(color.get(key).is_some(), "color field {} missing", key);
        }
        let positions = line
            .get("Positions")
            .and_then(|v| v.as_array())
            .expect("\"Positions\" array per line");
        for key in ["x", "y", "z"] {
            assert!(positions[0].get(key).is_some(), "position field {} missing", key);
        }
    }

    #[test]
    fn test_load_accepts_hand_written_file() {
        let path = temp_file("hand-written");
        fs::write(
            &path,
            r#"{
  "Lines": [
    {
      "Color": { "r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0 },
      "Positions": [
        { "x": 0.0, "y": 0.0, "z": 0.0 },
        { "x": 0.1, "y": 0.0, "z": 0.0 }
      ]
    }
  ]
}"#,
        )
        .unwrap();
        let saver = DrawingSaver::new(&path);

        let mut store = test_store(100);
        assert!(saver.load(&mut store).unwrap());
        assert_eq!(store.stroke_count(), 1);
        let (color, points) = store.strokes().next().unwrap();
        assert_eq!(color, Color::BLUE);
        assert_eq!(points.len(), 2);

        let _ = fs::remove_file(&path);
    }
}
