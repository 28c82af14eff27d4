// Fibonacci quarter-arc spiral.
//
// A structural curve: pure mathematics, no seed input at all. The same
// `size_budget` always yields the identical command list, so the motif is
// recognizable wherever it appears — that sameness is the point.
//
// Construction: the short Fibonacci prefix [1, 1, 2, 3, 5, 8, 13, 21]
// supplies the growth ratios. Each segment is one quarter-arc whose radius
// is `sequence[i] * scale`, where `scale = size_budget / 21` (the largest
// term is the reference unit, so the final arc's radius equals the budget).
// The heading rotates 90° per segment in a fixed cyclic order; no
// trigonometry is needed because quarter-arc endpoints displace by exactly
// `radius * (tangent + normal)`.

use crate::error::MotifError;
use crate::types::{PathCommand, PathDescriptor};

/// Fibonacci growth ratios for the arc radii.
const SEQUENCE: [f64; 8] = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0];

/// The largest sequence term — `scale = size_budget / REFERENCE_UNIT`.
const REFERENCE_UNIT: f64 = 21.0;

/// Unit headings cycling 90° per segment (y-down screen coordinates).
const DIRS: [(f64, f64); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

/// Build a golden spiral whose final arc radius equals `size_budget`.
///
/// Starts at the origin. Doubling the budget produces the same shape
/// uniformly scaled ×2. `size_budget` must be positive and finite.
pub fn golden_spiral(size_budget: f64) -> Result<PathDescriptor, MotifError> {
    if !(size_budget.is_finite() && size_budget > 0.0) {
        return Err(MotifError::invalid(
            "size_budget",
            format!("{size_budget} must be positive"),
        ));
    }
    let scale = size_budget / REFERENCE_UNIT;

    let mut commands = Vec::with_capacity(SEQUENCE.len() + 1);
    commands.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });

    let mut x = 0.0;
    let mut y = 0.0;
    for (i, ratio) in SEQUENCE.iter().enumerate() {
        let r = ratio * scale;
        let (tx, ty) = DIRS[i % 4];
        let (nx, ny) = DIRS[(i + 1) % 4];
        // Quarter-arc endpoint: one radius along the tangent, one along the
        // normal toward the next heading.
        x += r * (tx + nx);
        y += r * (ty + ny);
        commands.push(PathCommand::ArcTo {
            rx: r,
            ry: r,
            large_arc: false,
            sweep: true,
            x,
            y,
        });
    }
    Ok(PathDescriptor { commands })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_across_calls() {
        let a = golden_spiral(300.0).unwrap();
        let b = golden_spiral(300.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn one_arc_per_sequence_term() {
        let path = golden_spiral(300.0).unwrap();
        assert_eq!(path.len(), SEQUENCE.len() + 1);
        assert!(matches!(path.commands[0], PathCommand::MoveTo { .. }));
        for cmd in &path.commands[1..] {
            assert!(matches!(cmd, PathCommand::ArcTo { .. }));
        }
    }

    #[test]
    fn final_radius_equals_budget() {
        let path = golden_spiral(300.0).unwrap();
        match path.commands[path.len() - 1] {
            PathCommand::ArcTo { rx, ry, .. } => {
                assert!((rx - 300.0).abs() < 1e-9);
                assert!((ry - 300.0).abs() < 1e-9);
            }
            _ => panic!("spiral must end in an arc"),
        }
    }

    #[test]
    fn doubled_budget_scales_uniformly() {
        let small = golden_spiral(300.0).unwrap();
        let big = golden_spiral(600.0).unwrap();
        for (a, b) in small.commands.iter().zip(&big.commands) {
            match (*a, *b) {
                (
                    PathCommand::MoveTo { x: ax, y: ay },
                    PathCommand::MoveTo { x: bx, y: by },
                ) => {
                    assert_eq!((ax * 2.0, ay * 2.0), (bx, by));
                }
                (
                    PathCommand::ArcTo {
                        rx: arx,
                        ry: ary,
                        x: ax,
                        y: ay,
                        ..
                    },
                    PathCommand::ArcTo {
                        rx: brx,
                        ry: bry,
                        x: bx,
                        y: by,
                        ..
                    },
                ) => {
                    assert!((arx * 2.0 - brx).abs() < 1e-9);
                    assert!((ary * 2.0 - bry).abs() < 1e-9);
                    assert!((ax * 2.0 - bx).abs() < 1e-9);
                    assert!((ay * 2.0 - by).abs() < 1e-9);
                }
                _ => panic!("command kinds must line up"),
            }
        }
    }

    #[test]
    fn rejects_non_positive_budget() {
        assert!(golden_spiral(0.0).is_err());
        assert!(golden_spiral(-5.0).is_err());
        assert!(golden_spiral(f64::NAN).is_err());
    }
}
