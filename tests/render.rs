#![allow(clippy::unwrap_used)]

use hyperdisk::hyperbolic::{Isometry, PointedVector};
use hyperdisk::operations::{RightAngledHexagon, EQUILATERAL_HEXAGON_SIDE};
use hyperdisk::render::{Color, Command, CommandRecorder, HyperbolicContext, Model};
use hyperdisk::tessellation::{RegularTessellation, TessellationParams};

fn small_tiling() -> hyperdisk::tessellation::Tiling {
    let params = TessellationParams {
        far_field_epsilon: 1e-2,
        ..TessellationParams::default()
    };
    RegularTessellation::new(7, 3, PointedVector::origin(), params).execute().unwrap()
}

fn points_of(commands: &[Command]) -> impl Iterator<Item = (f64, f64)> + '_ {
    commands.iter().filter_map(|c| match *c {
        Command::MoveTo { x, y } | Command::LineTo { x, y } => Some((x, y)),
        _ => None,
    })
}

#[test]
fn klein_tiling_is_one_chord_per_side() {
    let tiling = small_tiling();
    let mut rec = CommandRecorder::new();
    tiling.draw(&mut HyperbolicContext::new(&mut rec)).unwrap();

    assert_eq!(rec.count(|c| matches!(c, Command::Stroke)), 7 * tiling.len());
    assert_eq!(rec.count(|c| matches!(c, Command::LineTo { .. })), 7 * tiling.len());
    assert_eq!(rec.count(|c| matches!(c, Command::Arc { .. })), 0);
    for (x, y) in points_of(rec.commands()) {
        assert!(x * x + y * y < 1.0);
    }
}

#[test]
fn poincare_tiling_is_drawn_with_arcs() {
    let tiling = small_tiling();
    let mut rec = CommandRecorder::new();
    tiling
        .draw(&mut HyperbolicContext::new(&mut rec).with_model(Model::Poincare))
        .unwrap();

    // Only sides lying on diameters stay straight.
    let arcs = rec.count(|c| matches!(c, Command::Arc { .. }));
    let chords = rec.count(|c| matches!(c, Command::LineTo { .. }));
    assert_eq!(arcs + chords, 7 * tiling.len());
    assert!(arcs > chords);
    for command in rec.commands() {
        if let Command::Arc { a0, a1, .. } = *command {
            assert!(a1 >= a0 && a1 - a0 <= std::f64::consts::PI + 1e-12);
        }
    }
}

#[test]
fn view_moves_every_vertex() {
    let tiling = small_tiling();
    let view = Isometry::translation(0.0, 0.0, 0.3, 0.1).unwrap();

    let mut plain = CommandRecorder::new();
    tiling.draw(&mut HyperbolicContext::new(&mut plain)).unwrap();
    let mut moved = CommandRecorder::new();
    tiling
        .draw(&mut HyperbolicContext::new(&mut moved).with_view(view))
        .unwrap();

    assert_eq!(plain.commands().len(), moved.commands().len());
    let (x0, y0) = points_of(plain.commands()).next().unwrap();
    let (x1, y1) = points_of(moved.commands()).next().unwrap();
    assert!((x0 - x1).abs() + (y0 - y1).abs() > 1e-3);
}

#[test]
fn hexagon_uses_the_palette_then_black() {
    let s = EQUILATERAL_HEXAGON_SIDE;
    let hexagon = RightAngledHexagon::build(&PointedVector::origin(), s, s, s).unwrap();
    let mut rec = CommandRecorder::new();
    hexagon
        .draw(&mut HyperbolicContext::new(&mut rec).with_model(Model::Poincare))
        .unwrap();

    let colors: Vec<_> = rec
        .commands()
        .iter()
        .filter_map(|c| match *c {
            Command::SetColor { r, g, b } => Some(Color::new(r, g, b)),
            _ => None,
        })
        .collect();
    assert_eq!(colors.len(), 7);
    assert_eq!(colors[0], Color::from_rgb8(155, 0, 0));
    assert_eq!(colors[6], Color::BLACK);
    // Complete geodesics are clipped to the disk.
    assert_eq!(
        rec.count(|c| matches!(c, Command::Clip)),
        rec.count(|c| matches!(c, Command::Restore))
    );
}
