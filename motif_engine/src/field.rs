// Golden-angle chip field generation.
//
// Scatters `count` decorative chips across a square field so that they
// spread evenly instead of clustering. Placement uses irrational-multiplier
// recurrences: x advances by the golden angle (137.508°-as-units) per index,
// y by a second irrational stride, both offset by seed-derived phases. The
// strides are irrational relative to any practical field size, so the walk
// never falls into a periodic overlap for any realistic count.
//
// Size, rotation, shape kind, and opacity are independent derived scalars
// keyed by `(seed, i)` on distinct streams, and color indices cycle the full
// palette rather than letting one seed-favored color dominate large fields.
//
// See also: `config.rs` for the style parameters, `types.rs` for `ChipSpec`,
// `motif_seed` for the derivation functions.
//
// **Critical constraint: determinism.** Same `(count, seed, style)` in,
// bit-identical chip list out, on every platform.

use crate::config::StyleConfig;
use crate::error::MotifError;
use crate::types::{ChipKind, ChipSpec};
use motif_seed::{angle_deg, derive_range_f64, derive_u32, hash_seed, Seed, Stream};

/// Per-index x stride in field units — the golden angle. Irrational relative
/// to any small-integer field extent, which is what prevents periodic
/// overlap in the placement walk.
pub const GOLDEN_ANGLE: f64 = 137.508;

/// Per-index y stride. A second irrational-looking constant, deliberately
/// unrelated to `GOLDEN_ANGLE` so x and y never advance in lockstep.
const Y_STRIDE: f64 = 73.113;

/// Generate `count` chips scattered across the configured field.
///
/// `count == 0` yields an empty list. An out-of-domain `style` is rejected
/// with `InvalidParameter` before any derivation runs.
pub fn generate_field(
    count: u32,
    seed: &Seed,
    style: &StyleConfig,
) -> Result<Vec<ChipSpec>, MotifError> {
    style.validate()?;
    let h = hash_seed(seed);

    // Seed-derived starting phases: the walk pattern is fixed, but where it
    // starts on each axis is what distinguishes one seed from another.
    let x_phase = derive_range_f64(h, 0, Stream::PositionX, 0.0, style.field_extent);
    let y_phase = derive_range_f64(h, 0, Stream::PositionY, 0.0, style.field_extent);
    let color_shift = derive_u32(h, 0, Stream::ColorShift);

    let (size_lo, size_hi) = style.size_range;
    let (op_lo, op_hi) = style.opacity_range;

    let mut chips = Vec::with_capacity(count as usize);
    for i in 0..count {
        let fi = f64::from(i);
        chips.push(ChipSpec {
            x: (x_phase + fi * GOLDEN_ANGLE) % style.field_extent,
            y: (y_phase + fi * Y_STRIDE) % style.field_extent,
            size: derive_range_f64(h, i, Stream::Size, size_lo, size_hi),
            rotation: angle_deg(h, i, Stream::Rotation),
            color_index: color_shift.wrapping_add(i) % style.palette_size,
            kind: ChipKind::from_index(derive_u32(h, i, Stream::ShapeKind)),
            opacity: derive_range_f64(h, i, Stream::Opacity, op_lo, op_hi),
        });
    }
    Ok(chips)
}
