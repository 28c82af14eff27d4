// motif_engine — pure Rust decorative motif generation library.
//
// This crate contains all geometry and series synthesis for the motif
// system: scattered chip fields, hand-drawn wobble outlines, golden spirals,
// crystalline branch structures, and reproducible chart data. It has zero
// rendering dependencies and can be tested and benchmarked headless; a
// renderer consumes the plain data records it emits.
//
// Module overview:
// - `config.rs`: StyleConfig — palette size, size/opacity ranges, field
//                extent. Explicit parameters, never module-level globals.
// - `types.rs`:  ChipSpec, ChipKind, PathCommand, PathDescriptor.
// - `field.rs`:  Golden-angle chip field generator.
// - `wobble.rs`: Jittered rounded-rectangle outlines and divider lines.
// - `spiral.rs`: Fibonacci quarter-arc spiral (seed-independent).
// - `branch.rs`: Fixed-angle crystalline branch arms with seeded ornaments.
// - `series.rs`: Label-keyed sparkline/bar/donut series.
// - `error.rs`:  MotifError — the single InvalidParameter taxonomy.
// - `seed`:      Re-exported from `motif_seed` — hashing and value derivation.
//
// **Critical constraint: determinism.** Every generator is a pure function:
// `(seed, parameters) -> data`. Content is produced once on a server and
// re-produced independently in a browser; both passes must converge on
// bit-identical output. No system randomness, no time, no shared state, no
// `HashMap` iteration anywhere in a generation path.

pub mod branch;
pub mod config;
pub mod error;
pub mod field;
pub use motif_seed as seed;
pub mod series;
pub mod spiral;
pub mod types;
pub mod wobble;

pub use branch::crystal_branches;
pub use config::StyleConfig;
pub use error::MotifError;
pub use field::generate_field;
pub use series::{bars, donut_percent, donut_percent_actual, sparkline};
pub use spiral::golden_spiral;
pub use types::{ChipKind, ChipSpec, PathCommand, PathDescriptor};
pub use wobble::{wobbly_line, wobbly_outline};
