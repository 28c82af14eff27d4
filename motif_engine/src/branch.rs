// Crystalline branch structures.
//
// A set of straight arms radiating from a center at evenly spaced angles,
// each with two pairs of sub-branches at a fixed angular offset — the frost
// crystal / snowflake motif. The base geometry is a pure function of
// `(arm_count, arm_length)`: the seed never bends an arm. The one seed-
// sensitive aspect is cosmetic, deciding which arms carry a terminal
// ornament (a short cross-tick at the tip) via value derivation.
//
// See also: `spiral.rs` for the other structural curve, `motif_seed` for
// the ornament decision.

use crate::error::MotifError;
use crate::types::{PathCommand, PathDescriptor};
use motif_seed::{hash_seed, unit_float, Seed, Stream};

/// Angular offset of sub-branches from their arm, in radians (±35°).
const SUB_ANGLE: f64 = 35.0 * std::f64::consts::PI / 180.0;

/// Sub-branch attachment points along each arm: (fraction along the arm,
/// sub-branch length as a fraction of the arm).
const SUB_POINTS: [(f64, f64); 2] = [(0.4, 0.30), (0.7, 0.20)];

/// Half-length of the terminal cross-tick, as a fraction of the arm.
const ORNAMENT_HALF: f64 = 0.08;

/// Probability that an arm receives a terminal ornament.
const ORNAMENT_CHANCE: f64 = 0.5;

/// Generate `arm_count` branch arms of `arm_length`, one descriptor per arm.
///
/// `arm_count == 0` yields an empty list. `arm_length` must be positive
/// and finite.
pub fn crystal_branches(
    arm_count: u32,
    arm_length: f64,
    seed: &Seed,
) -> Result<Vec<PathDescriptor>, MotifError> {
    if !(arm_length.is_finite() && arm_length > 0.0) {
        return Err(MotifError::invalid(
            "arm_length",
            format!("{arm_length} must be positive"),
        ));
    }
    if arm_count == 0 {
        return Ok(Vec::new());
    }

    let h = hash_seed(seed);
    let step = std::f64::consts::TAU / f64::from(arm_count);

    let mut arms = Vec::with_capacity(arm_count as usize);
    for i in 0..arm_count {
        let angle = f64::from(i) * step;
        let (dir_x, dir_y) = (angle.cos(), angle.sin());
        let tip = (dir_x * arm_length, dir_y * arm_length);

        let mut path = PathDescriptor::new();
        path.commands.push(PathCommand::MoveTo { x: 0.0, y: 0.0 });
        path.commands.push(PathCommand::LineTo { x: tip.0, y: tip.1 });

        // Two sub-branch pairs at fixed fractional points along the arm.
        for (frac, sub_frac) in SUB_POINTS {
            let base = (dir_x * arm_length * frac, dir_y * arm_length * frac);
            let sub_len = arm_length * sub_frac;
            for side in [SUB_ANGLE, -SUB_ANGLE] {
                let a = angle + side;
                path.commands.push(PathCommand::MoveTo {
                    x: base.0,
                    y: base.1,
                });
                path.commands.push(PathCommand::LineTo {
                    x: base.0 + a.cos() * sub_len,
                    y: base.1 + a.sin() * sub_len,
                });
            }
        }

        // Cosmetic terminal ornament — the only seed-sensitive part.
        if unit_float(h, i, Stream::Ornament) < ORNAMENT_CHANCE {
            let half = arm_length * ORNAMENT_HALF;
            // Perpendicular cross-tick through the tip.
            let (px, py) = (-dir_y, dir_x);
            path.commands.push(PathCommand::MoveTo {
                x: tip.0 - px * half,
                y: tip.1 - py * half,
            });
            path.commands.push(PathCommand::LineTo {
                x: tip.0 + px * half,
                y: tip.1 + py * half,
            });
        }

        arms.push(path);
    }
    Ok(arms)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Commands per arm before any ornament: main segment + 2 sub-pairs.
    const BASE_COMMANDS: usize = 2 + 4 * 2;

    #[test]
    fn one_descriptor_per_arm() {
        let arms = crystal_branches(6, 40.0, &Seed::from("frost")).unwrap();
        assert_eq!(arms.len(), 6);
    }

    #[test]
    fn zero_arms_yields_empty() {
        let arms = crystal_branches(0, 40.0, &Seed::from("frost")).unwrap();
        assert!(arms.is_empty());
    }

    #[test]
    fn rejects_non_positive_length() {
        assert!(crystal_branches(6, 0.0, &Seed::from("x")).is_err());
        assert!(crystal_branches(6, -3.0, &Seed::from("x")).is_err());
    }

    #[test]
    fn tips_sit_at_arm_length() {
        let arms = crystal_branches(5, 40.0, &Seed::from("frost")).unwrap();
        for arm in &arms {
            match arm.commands[1] {
                PathCommand::LineTo { x, y } => {
                    let dist = (x * x + y * y).sqrt();
                    assert!((dist - 40.0).abs() < 1e-9, "tip at distance {dist}");
                }
                _ => panic!("second command must be the main segment"),
            }
        }
    }

    #[test]
    fn base_geometry_is_seed_independent() {
        let a = crystal_branches(6, 40.0, &Seed::from("seed-A")).unwrap();
        let b = crystal_branches(6, 40.0, &Seed::from("seed-B")).unwrap();
        for (arm_a, arm_b) in a.iter().zip(&b) {
            assert_eq!(
                &arm_a.commands[..BASE_COMMANDS],
                &arm_b.commands[..BASE_COMMANDS],
                "seed must never move the base geometry"
            );
        }
    }

    #[test]
    fn ornaments_only_extend_the_arm() {
        let arms = crystal_branches(8, 40.0, &Seed::from("ornamented")).unwrap();
        for arm in &arms {
            assert!(
                arm.len() == BASE_COMMANDS || arm.len() == BASE_COMMANDS + 2,
                "unexpected command count {}",
                arm.len()
            );
        }
    }

    #[test]
    fn deterministic_across_passes() {
        let a = crystal_branches(6, 40.0, &Seed::from("frost")).unwrap();
        let b = crystal_branches(6, 40.0, &Seed::from("frost")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn arms_are_evenly_spaced() {
        let arms = crystal_branches(4, 10.0, &Seed::from("quad")).unwrap();
        let mut tips = Vec::new();
        for arm in &arms {
            match arm.commands[1] {
                PathCommand::LineTo { x, y } => tips.push((x, y)),
                _ => panic!("second command must be the main segment"),
            }
        }
        // Four arms: east, south, west, north (y-down screen coordinates).
        assert!((tips[0].0 - 10.0).abs() < 1e-9 && tips[0].1.abs() < 1e-9);
        assert!(tips[1].0.abs() < 1e-9 && (tips[1].1 - 10.0).abs() < 1e-9);
        assert!((tips[2].0 + 10.0).abs() < 1e-9 && tips[2].1.abs() < 1e-9);
        assert!(tips[3].0.abs() < 1e-9 && (tips[3].1 + 10.0).abs() < 1e-9);
    }
}
