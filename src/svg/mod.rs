//! SVG Generation Module
//!
//! Shape primitives, color palette, typography, and a document builder.
//! Chart pipelines construct shape descriptors here and never touch the
//! output string directly.

pub mod builder;
pub mod palette;
pub mod shapes;
pub mod typography;

pub use builder::{SvgBuilder, SvgElement};
pub use palette::{ChartPalette, Color};
pub use shapes::{Circle, Line, Path, PathCommand, Point, Rect, Text};
pub use typography::{FontFamily, FontWeight, TextAlign, TextStyle};
