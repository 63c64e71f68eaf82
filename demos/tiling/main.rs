//! Tiling demo: builds a regular {p,q} tessellation and a right-angled
//! hexagon, draws both into a recording renderer and prints a summary.
//!
//! Usage:
//! ```text
//! cargo run --example tiling               # {7,3}
//! cargo run --example tiling -- 5 4        # {5,4}
//! RUST_LOG=hyperdisk=trace cargo run --example tiling
//! ```

use hyperdisk::hyperbolic::PointedVector;
use hyperdisk::operations::{RightAngledHexagon, EQUILATERAL_HEXAGON_SIDE};
use hyperdisk::render::{Command, CommandRecorder, HyperbolicContext, Model};
use hyperdisk::tessellation::{RegularTessellation, TessellationParams};
use hyperdisk::HyperbolicError;

fn arg_or(args: &[String], index: usize, default: usize) -> usize {
    args.get(index).and_then(|a| a.parse().ok()).unwrap_or(default)
}

fn summarize(name: &str, recorder: &CommandRecorder) {
    let strokes = recorder.count(|c| matches!(c, Command::Stroke));
    let arcs = recorder.count(|c| matches!(c, Command::Arc { .. }));
    let fills = recorder.count(|c| matches!(c, Command::Fill));
    println!("{name}: {} commands ({strokes} strokes, {arcs} arcs, {fills} fills)", recorder.commands().len());
}

fn main() -> Result<(), HyperbolicError> {
    // Default: WARN for everything, INFO for hyperdisk.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hyperdisk=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hyperdisk=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sides = arg_or(&args, 0, 7);
    let valence = arg_or(&args, 1, 3);

    let tiling = RegularTessellation::new(sides, valence, PointedVector::origin(), TessellationParams::default())
        .execute()?;
    let depth = tiling.iter().map(|(_, tile)| tile.depth).max().unwrap_or(0);
    println!("{{{sides},{valence}}}: {} tiles, max depth {depth}", tiling.len());

    let mut recorder = CommandRecorder::new();
    {
        let mut ctx = HyperbolicContext::new(&mut recorder);
        ctx.draw_boundary();
        tiling.draw(&mut ctx)?;
    }
    summarize("klein", &recorder);

    recorder.clear();
    {
        let mut ctx = HyperbolicContext::new(&mut recorder).with_model(Model::Poincare);
        ctx.draw_boundary();
        tiling.draw(&mut ctx)?;
    }
    summarize("poincare", &recorder);

    let s = EQUILATERAL_HEXAGON_SIDE;
    let hexagon = RightAngledHexagon::build(&PointedVector::origin(), s, s, s)?;
    recorder.clear();
    hexagon.draw(&mut HyperbolicContext::new(&mut recorder).with_model(Model::Poincare))?;
    summarize("hexagon", &recorder);

    Ok(())
}
