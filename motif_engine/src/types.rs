// Output records shared across the generators.
//
// Everything here is a plain value object: created in batch by a generator
// call, handed to the renderer, and regenerated from the same seed on the
// next pass. Nothing is persisted and nothing is mutated after construction.
//
// All records derive serde so a server render pass can ship them to an
// independent consumer — and so the determinism tests can byte-compare two
// passes through a JSON round trip.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Shape of one decorative chip. Fixed declaration order — shape selection
/// cycles through this list deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChipKind {
    /// Axis-aligned square (rotated by `ChipSpec::rotation` at render time).
    Square,
    /// Filled circle.
    Circle,
    /// Equilateral triangle.
    Triangle,
    /// Irregular quadrilateral sliver.
    Shard,
}

impl ChipKind {
    /// Number of kinds, for deterministic cycling.
    pub const COUNT: u32 = 4;

    /// Map an arbitrary derived value onto a kind by cycling the fixed order.
    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => ChipKind::Square,
            1 => ChipKind::Circle,
            2 => ChipKind::Triangle,
            _ => ChipKind::Shard,
        }
    }
}

/// One positioned, sized, colored decorative element.
///
/// Positions live in a normalized square field `[0, field_extent)`; the
/// renderer maps field units onto its own coordinate system. `color_index`
/// indexes the renderer's palette and is always below the configured
/// palette size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChipSpec {
    /// Horizontal position in field units.
    pub x: f64,
    /// Vertical position in field units.
    pub y: f64,
    /// Side length / diameter in field units, inside the configured range.
    pub size: f64,
    /// Rotation in degrees, always in [0, 360).
    pub rotation: f64,
    /// Palette slot, always below the configured palette size.
    pub color_index: u32,
    /// Which shape to draw.
    pub kind: ChipKind,
    /// Opacity, inside the configured range.
    pub opacity: f64,
}

/// One vector path command. Mirrors the SVG path mini-language so the
/// renderer can emit descriptors without translation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Begin a subpath at `(x, y)`.
    MoveTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Straight segment to `(x, y)`.
    LineTo {
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Quadratic curve through control point `(cx, cy)` to `(x, y)`.
    QuadTo {
        /// Control point x.
        cx: f64,
        /// Control point y.
        cy: f64,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Elliptical arc to `(x, y)` with radii `(rx, ry)`. The x-axis rotation
    /// is always zero for the shapes this engine produces.
    ArcTo {
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
        /// SVG large-arc flag.
        large_arc: bool,
        /// SVG sweep flag.
        sweep: bool,
        /// Target x.
        x: f64,
        /// Target y.
        y: f64,
    },
    /// Close the current subpath back to its `MoveTo` point.
    Close,
}

/// An ordered sequence of path commands — one drawable outline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDescriptor {
    /// The commands, in draw order.
    pub commands: Vec<PathCommand>,
}

impl PathDescriptor {
    /// An empty descriptor to push commands into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the descriptor holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Format as an SVG path `d` attribute string.
    ///
    /// Coordinates are written with two decimal places — enough for
    /// rendering, and stable across passes because the underlying values
    /// are already bit-identical.
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo { x, y } => {
                    let _ = write!(d, "M {x:.2} {y:.2}");
                }
                PathCommand::LineTo { x, y } => {
                    let _ = write!(d, "L {x:.2} {y:.2}");
                }
                PathCommand::QuadTo { cx, cy, x, y } => {
                    let _ = write!(d, "Q {cx:.2} {cy:.2} {x:.2} {y:.2}");
                }
                PathCommand::ArcTo {
                    rx,
                    ry,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => {
                    let _ = write!(
                        d,
                        "A {rx:.2} {ry:.2} 0 {} {} {x:.2} {y:.2}",
                        u8::from(large_arc),
                        u8::from(sweep)
                    );
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}
