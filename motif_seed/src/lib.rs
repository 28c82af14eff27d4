// Deterministic seed hashing and stateless value derivation.
//
// This crate is the single source of pseudo-randomness for the entire motif
// workspace: `motif_engine` (chip fields, wobble paths, branch ornaments,
// chart series) derives every bounded scalar it needs through the functions
// here. It is a hand-rolled implementation with zero external dependencies
// beyond serde, chosen for portability and to guarantee identical output
// across all platforms.
//
// Unlike a conventional PRNG there is no generator object and no internal
// state: every value is a pure function of `(hash, index, stream)`. A stateful
// generator would make output depend on call order, which is exactly the
// hazard this design exists to avoid — a server render pass and a later
// independent client pass must converge on bit-identical output without
// coordinating how many values each has drawn.
//
// **Critical constraint: determinism.** Every function here must produce
// identical output given the same arguments, regardless of platform, compiler
// version, or optimization level. All mixing is pure fixed-width integer
// arithmetic; floats appear only in the final normalization step.

use serde::{Deserialize, Serialize};

/// An opaque generation seed: a text label or a small integer.
///
/// Immutable once constructed. The same seed hashes to the same value on
/// every platform, forever — there is no dependency on memory addresses,
/// time, or iteration order of any container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    /// A text seed (label, theme name, section title).
    Text(String),
    /// A numeric seed. Hashes identically to its decimal text form, so
    /// `Seed::from(7)` and `Seed::from("7")` agree.
    Number(i64),
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Seed::Number(n)
    }
}

/// Call-site purpose tag for value derivation.
///
/// Each stream maps to a distinct fixed odd multiplier, so values derived
/// for the same `(hash, index)` across different attributes are decorrelated
/// rather than literal repeats: position-x for chip 3 is unrelated to the
/// rotation of chip 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    /// Horizontal placement phase.
    PositionX,
    /// Vertical placement phase.
    PositionY,
    /// Element size.
    Size,
    /// Element rotation.
    Rotation,
    /// Palette cycling offset.
    ColorShift,
    /// Element opacity.
    Opacity,
    /// Shape-kind selection.
    ShapeKind,
    /// Terminal ornament placement on branch arms.
    Ornament,
    /// Outline wobble phase.
    WobblePhase,
    /// Sparkline point values.
    Sparkline,
    /// Bar-cluster heights.
    Bars,
    /// Donut ring percentages.
    Donut,
}

impl Stream {
    /// The fixed odd multiplier for this stream. Constants chosen once and
    /// never varied; all odd so the multiplication is a bijection mod 2^32.
    fn multiplier(self) -> u32 {
        match self {
            Stream::PositionX => 0x9e37_79b1,
            Stream::PositionY => 0x85eb_ca77,
            Stream::Size => 0xc2b2_ae3d,
            Stream::Rotation => 0x27d4_eb2f,
            Stream::ColorShift => 0x1656_67b1,
            Stream::Opacity => 0xd251_1f53,
            Stream::ShapeKind => 0xca01_f9dd,
            Stream::Ornament => 0x68e3_1da5,
            Stream::WobblePhase => 0x51ed_270b,
            Stream::Sparkline => 0xb529_7a4d,
            Stream::Bars => 0x3c6e_f373,
            Stream::Donut => 0xa136_aaad,
        }
    }
}

/// Hash a seed into a well-distributed 32-bit integer.
///
/// Collisions across different seeds are acceptable (this is a layout aid,
/// not a cryptographic primitive), but adjacent seeds like `"item-1"` and
/// `"item-2"` must produce unrelated-looking placements — the avalanche
/// finalizer in `mix32` takes care of that.
///
/// Total function: every input has a defined result. The empty string
/// hashes to 0.
pub fn hash_seed(seed: &Seed) -> u32 {
    match seed {
        Seed::Text(s) => hash_str(s),
        Seed::Number(n) => hash_str(&n.to_string()),
    }
}

/// Accumulate `h = h * 31 + char`, wrapping to 32 bits at every step to
/// bound growth, then avalanche. 31 is the fixed odd multiplier K.
fn hash_str(s: &str) -> u32 {
    let mut h: u32 = 0;
    for c in s.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as u32);
    }
    mix32(h)
}

/// 32-bit avalanche finalizer (xor-shift multiply, in the style of
/// splitmix64's finalizer ported down to u32). Small input changes flip
/// roughly half the output bits. `mix32(0) == 0`, which keeps the empty
/// seed's hash at the documented fixed value.
fn mix32(mut z: u32) -> u32 {
    z = (z ^ (z >> 16)).wrapping_mul(0x7feb_352d);
    z = (z ^ (z >> 15)).wrapping_mul(0x846c_a68b);
    z ^ (z >> 16)
}

/// Core mixer: derive a 32-bit value from `(hash, index, stream)`.
///
/// `index + 1` rather than `index` so the stream multiplier contributes even
/// at index 0 — otherwise every stream would collapse to `mix32(hash)` for
/// the first element.
pub fn derive_u32(hash: u32, index: u32, stream: Stream) -> u32 {
    mix32(hash ^ stream.multiplier().wrapping_mul(index.wrapping_add(1)))
}

/// Derive a uniform value in [0, 1).
///
/// Uses the upper 24 bits of the mix divided by 2^24 — full f32-mantissa
/// precision, and strictly below 1.0 by construction.
pub fn unit_float(hash: u32, index: u32, stream: Stream) -> f64 {
    f64::from(derive_u32(hash, index, stream) >> 8) / f64::from(1u32 << 24)
}

/// Derive a value in `[lo, hi)`.
///
/// Panics if `lo >= hi` — callers with externally supplied ranges validate
/// before calling (see `motif_engine::config`).
pub fn derive_range_f64(hash: u32, index: u32, stream: Stream, lo: f64, hi: f64) -> f64 {
    assert!(lo < hi, "derive_range_f64: lo must be less than hi");
    lo + unit_float(hash, index, stream) * (hi - lo)
}

/// Derive an integer in `[lo, hi)` via modulo reduction.
///
/// Modulo bias is acceptable here: the result picks palette slots and shape
/// kinds, not statistics. Panics if `lo >= hi`.
pub fn derive_range_u32(hash: u32, index: u32, stream: Stream, lo: u32, hi: u32) -> u32 {
    assert!(lo < hi, "derive_range_u32: lo must be less than hi");
    lo + derive_u32(hash, index, stream) % (hi - lo)
}

/// Derive an angle in degrees, in [0, 360).
pub fn angle_deg(hash: u32, index: u32, stream: Stream) -> f64 {
    unit_float(hash, index, stream) * 360.0
}
