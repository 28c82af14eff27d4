// Jittered "hand-drawn" outlines.
//
// Starts from an ideal control-point skeleton (a rounded rectangle, or the
// evenly spaced points of a divider line) and perturbs each control point by
// a smooth, bounded, seed-determined offset:
//
//   dx_k = sin(phase + k * C2) * jitter
//   dy_k = cos(phase + k * C3) * jitter
//
// where `phase` is reduced from the seed hash. The sine/cosine pair with
// different per-index constants gives each point an independent-looking
// two-axis nudge while guaranteeing |offset| <= jitter on each axis.
//
// The outline is always closed: the final curve lands exactly on the first
// `MoveTo` point (the same jittered value, not a recomputation). Callers
// should keep `jitter` at or below ~10% of `min(width, height)`; larger
// values are accepted but may self-overlap, which is a cosmetic degradation
// rather than an error.
//
// **Critical constraint: determinism.** Trigonometry appears here only with
// small, bounded arguments derived from fixed-width integers, so repeated
// passes agree to the last bit.

use crate::error::MotifError;
use crate::types::{PathCommand, PathDescriptor};
use motif_seed::{hash_seed, unit_float, Seed, Stream};

/// Per-index phase stride for the x offsets.
const C2: f64 = 1.7;
/// Per-index phase stride for the y offsets. Different from `C2` so the two
/// axes never jitter in lockstep.
const C3: f64 = 2.3;

/// Reduce a seed hash to a phase in [0, 2π).
///
/// Goes through `unit_float` so the full hash width feeds the phase — a
/// coarser reduction (a small modulus) would collapse unrelated seeds onto
/// the same outline far more often than the hash's dispersion allows.
fn seed_phase(seed: &Seed) -> f64 {
    unit_float(hash_seed(seed), 0, Stream::WobblePhase) * std::f64::consts::TAU
}

/// Offset for control point `k`: bounded by `jitter` on each axis.
fn jitter_offset(phase: f64, k: u32, jitter: f64) -> (f64, f64) {
    let fk = f64::from(k);
    (
        (phase + fk * C2).sin() * jitter,
        (phase + fk * C3).cos() * jitter,
    )
}

/// Build a wobbly rounded-rectangle outline for a `width` × `height` box
/// anchored at the origin.
///
/// The skeleton runs through the four edge midpoints with the four corners
/// as quadratic control points; all eight get jittered. `jitter == 0`
/// reproduces the ideal skeleton exactly.
pub fn wobbly_outline(
    width: f64,
    height: f64,
    seed: &Seed,
    jitter: f64,
) -> Result<PathDescriptor, MotifError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(MotifError::invalid(
            "width",
            format!("{width} must be positive"),
        ));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(MotifError::invalid(
            "height",
            format!("{height} must be positive"),
        ));
    }
    if !(jitter.is_finite() && jitter >= 0.0) {
        return Err(MotifError::invalid(
            "jitter",
            format!("{jitter} must be non-negative"),
        ));
    }

    // Skeleton: anchors at edge midpoints (k = 0..3, clockwise from top),
    // quadratic controls at corners (k = 4..7, clockwise from top-right).
    let skeleton: [(f64, f64); 8] = [
        (width / 2.0, 0.0),
        (width, height / 2.0),
        (width / 2.0, height),
        (0.0, height / 2.0),
        (width, 0.0),
        (width, height),
        (0.0, height),
        (0.0, 0.0),
    ];

    let phase = seed_phase(seed);
    let mut pts = [(0.0f64, 0.0f64); 8];
    for k in 0u32..8 {
        let (sx, sy) = skeleton[k as usize];
        let (dx, dy) = jitter_offset(phase, k, jitter);
        pts[k as usize] = (sx + dx, sy + dy);
    }

    let commands = vec![
        PathCommand::MoveTo {
            x: pts[0].0,
            y: pts[0].1,
        },
        PathCommand::QuadTo {
            cx: pts[4].0,
            cy: pts[4].1,
            x: pts[1].0,
            y: pts[1].1,
        },
        PathCommand::QuadTo {
            cx: pts[5].0,
            cy: pts[5].1,
            x: pts[2].0,
            y: pts[2].1,
        },
        PathCommand::QuadTo {
            cx: pts[6].0,
            cy: pts[6].1,
            x: pts[3].0,
            y: pts[3].1,
        },
        PathCommand::QuadTo {
            cx: pts[7].0,
            cy: pts[7].1,
            // Land exactly on the MoveTo point — closed by construction.
            x: pts[0].0,
            y: pts[0].1,
        },
        PathCommand::Close,
    ];
    Ok(PathDescriptor { commands })
}

/// Build a wobbly divider line from `(x1, y1)` to `(x2, y2)` with `segments`
/// straight pieces.
///
/// Endpoints stay pinned; interior points get the same bounded jitter as
/// the outline. `segments` must be at least 1.
pub fn wobbly_line(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    seed: &Seed,
    jitter: f64,
    segments: u32,
) -> Result<PathDescriptor, MotifError> {
    if segments == 0 {
        return Err(MotifError::invalid("segments", "must be at least 1"));
    }
    if !(jitter.is_finite() && jitter >= 0.0) {
        return Err(MotifError::invalid(
            "jitter",
            format!("{jitter} must be non-negative"),
        ));
    }
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return Err(MotifError::invalid(
            "endpoints",
            "coordinates must be finite",
        ));
    }

    let phase = seed_phase(seed);
    let mut commands = Vec::with_capacity(segments as usize + 1);
    commands.push(PathCommand::MoveTo { x: x1, y: y1 });
    for k in 1..=segments {
        let t = f64::from(k) / f64::from(segments);
        let bx = x1 + (x2 - x1) * t;
        let by = y1 + (y2 - y1) * t;
        // Endpoints pinned; only interior points wobble.
        let (dx, dy) = if k == segments {
            (0.0, 0.0)
        } else {
            jitter_offset(phase, k, jitter)
        };
        commands.push(PathCommand::LineTo {
            x: bx + dx,
            y: by + dy,
        });
    }
    Ok(PathDescriptor { commands })
}
