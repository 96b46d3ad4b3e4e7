//! fingerpaint - command-line harness for the VR finger-painting core.
//!
//! Runs a synthetic two-hand drawing session through the real
//! engine/store/saver stack and writes the JSON drawing file, or
//! loads an existing file and summarizes it. Useful for inspecting
//! saved drawings and for exercising the core outside a headset.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use fingerpaint::{
    Color, DrawingConfig, DrawingSaver, DrawingStore, DrawingSurface, Hand, StrokeEngine,
    SurfaceConfig,
};

#[derive(Parser, Debug)]
#[command(name = "fingerpaint", about = "VR finger-painting core harness")]
struct Cli {
    /// Drawing file to write or read
    #[arg(long, default_value = "drawing.json")]
    file: PathBuf,

    /// Load and summarize an existing drawing instead of generating one
    #[arg(long)]
    load: bool,

    /// Number of synthetic strokes to draw per hand
    #[arg(long, default_value_t = 2)]
    strokes: usize,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("fingerpaint {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fingerpaint=info".into()),
        )
        .init();

    let surface = DrawingSurface::identity(SurfaceConfig::default());
    let mut store = DrawingStore::new(surface, DrawingConfig::default());
    let saver = DrawingSaver::new(&cli.file);

    if cli.load {
        if !saver.load(&mut store)? {
            anyhow::bail!("nothing to load at {}", cli.file.display());
        }
        summarize(&store);
        return Ok(());
    }

    info!("generating {} synthetic strokes per hand", cli.strokes);
    draw_session(&mut store, cli.strokes);
    summarize(&store);
    saver.save(&store)?;
    Ok(())
}

/// Sweep each hand's fingertip across the surface a few times,
/// alternating colors, with a lift between strokes.
fn draw_session(store: &mut DrawingStore, strokes_per_hand: usize) {
    let mut left = StrokeEngine::new(Hand::Left);
    let mut right = StrokeEngine::new(Hand::Right);
    let palette = [Color::RED, Color::BLUE];

    for stroke in 0..strokes_per_hand {
        store.set_color(palette[stroke % palette.len()]);
        let y = -0.3 + 0.15 * stroke as f32;

        // Horizontal sweep while touching (z well inside the slab),
        // engines ticked sequentially as in a real frame loop.
        for step in 0..=20 {
            let x = -0.4 + 0.04 * step as f32;
            left.update(store, true, Some([x, y, 0.005]));
            right.update(store, true, Some([x, y + 0.4, 0.005]));
        }

        // Lift both fingertips off the surface to end the strokes.
        left.update(store, true, Some([0.0, y, 0.2]));
        right.update(store, true, Some([0.0, y + 0.4, 0.2]));
    }
}

fn summarize(store: &DrawingStore) {
    println!("{} strokes:", store.stroke_count());
    for (index, (color, points)) in store.strokes().enumerate() {
        println!(
            "  #{:<3} {:>4} points  rgba({:.1}, {:.1}, {:.1}, {:.1})",
            index,
            points.len(),
            color.r,
            color.g,
            color.b,
            color.a,
        );
    }
}
