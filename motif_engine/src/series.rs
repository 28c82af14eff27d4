// Label-keyed reproducible chart series.
//
// Supplies the "random-looking" numbers behind sparklines, bar clusters,
// and donut rings. Every series derives from `hash(label)`, so the chart
// next to "Projects Shipped" shows the same shape on every page load, on
// the server and in the browser, forever.
//
// Real metrics are never synthesized: `donut_percent_actual` passes a
// caller-supplied percentage through with validation only, and is a
// separate function from the generated `donut_percent` so the two can
// never be confused.
//
// Each generator derives on its own stream. A page often shows a sparkline
// and a bar cluster for the same label side by side; on a shared stream the
// bars would be an exact affine copy of the sparkline — the same shape
// drawn twice.

use crate::error::MotifError;
use motif_seed::{hash_seed, unit_float, Seed, Stream};

/// Bar heights never drop below this fraction, so no bar renders at
/// zero height.
const BAR_FLOOR: f64 = 0.2;

/// Generate `point_count` sparkline values in [0, 1), keyed by `label`.
pub fn sparkline(label: &str, point_count: u32) -> Vec<f64> {
    let h = hash_seed(&Seed::from(label));
    (0..point_count)
        .map(|i| unit_float(h, i, Stream::Sparkline))
        .collect()
}

/// Generate `bar_count` bar heights in [0.2, 1.0), keyed by `label`.
pub fn bars(label: &str, bar_count: u32) -> Vec<f64> {
    let h = hash_seed(&Seed::from(label));
    (0..bar_count)
        .map(|i| BAR_FLOOR + unit_float(h, i, Stream::Bars) * (1.0 - BAR_FLOOR))
        .collect()
}

/// Generate a donut percentage in [0, 100), keyed by `label`.
pub fn donut_percent(label: &str) -> f64 {
    let h = hash_seed(&Seed::from(label));
    unit_float(h, 0, Stream::Donut) * 100.0
}

/// Validate and pass through a real percentage for a donut ring.
///
/// This is the identity on `[0, 100]` and `InvalidParameter` outside it —
/// real metrics are rejected loudly, never clamped or silently replaced by
/// a synthetic value.
pub fn donut_percent_actual(percent: f64) -> Result<f64, MotifError> {
    if percent.is_finite() && (0.0..=100.0).contains(&percent) {
        Ok(percent)
    } else {
        Err(MotifError::invalid(
            "percent",
            format!("{percent} is outside [0, 100]"),
        ))
    }
}
