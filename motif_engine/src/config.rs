// Style configuration for the generators.
//
// All tunable appearance parameters live here in `StyleConfig`, passed
// explicitly into each generator call. The generators never read module-level
// globals — a theme is just a value, and two themes can generate side by side
// in the same process without interfering.
//
// Named preset constructors (`StyleConfig::studio()`, `::blueprint()`)
// produce different visual registers by tuning the same parameter set,
// and a JSON form is supported so themes can ship as data.
//
// **Critical constraint: determinism.** Config values feed directly into
// generation. A server pass and a client pass must use identical configs
// for identical output.

use crate::error::MotifError;
use serde::{Deserialize, Serialize};

/// Appearance parameters for field generation. Never mutated at runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Number of entries in the renderer's palette. Color indices emitted by
    /// the field generator are always below this. Must be at least 1.
    pub palette_size: u32,

    /// Chip size range `(min, max)` in field units. `min < max` required.
    pub size_range: (f64, f64),

    /// Chip opacity range `(min, max)`. Must satisfy `0 <= min < max <= 1`.
    pub opacity_range: (f64, f64),

    /// Side length of the square placement field. Positions are in
    /// `[0, field_extent)` on both axes. Must be positive.
    pub field_extent: f64,
}

impl StyleConfig {
    /// The default studio theme: five palette slots, mid-size chips,
    /// moderately translucent.
    pub fn studio() -> Self {
        Self {
            palette_size: 5,
            size_range: (6.0, 22.0),
            opacity_range: (0.45, 0.85),
            field_extent: 100.0,
        }
    }

    /// Blueprint theme: smaller, fainter chips for line-art backdrops.
    pub fn blueprint() -> Self {
        Self {
            palette_size: 3,
            size_range: (4.0, 12.0),
            opacity_range: (0.2, 0.5),
            field_extent: 100.0,
        }
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that every field is inside its documented domain.
    ///
    /// Called by the generators before any derivation, so a bad theme fails
    /// fast rather than producing out-of-range output.
    pub fn validate(&self) -> Result<(), MotifError> {
        if self.palette_size == 0 {
            return Err(MotifError::invalid("palette_size", "must be at least 1"));
        }
        let (size_lo, size_hi) = self.size_range;
        if !(size_lo.is_finite() && size_hi.is_finite()) || size_lo >= size_hi {
            return Err(MotifError::invalid(
                "size_range",
                format!("({size_lo}, {size_hi}) is not an ordered finite range"),
            ));
        }
        let (op_lo, op_hi) = self.opacity_range;
        if !(op_lo >= 0.0 && op_lo < op_hi && op_hi <= 1.0) {
            return Err(MotifError::invalid(
                "opacity_range",
                format!("({op_lo}, {op_hi}) must satisfy 0 <= min < max <= 1"),
            ));
        }
        if !(self.field_extent.is_finite() && self.field_extent > 0.0) {
            return Err(MotifError::invalid(
                "field_extent",
                format!("{} must be positive", self.field_extent),
            ));
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::studio()
    }
}
