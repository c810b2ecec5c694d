//! Typography Styles
//!
//! Text styling for tick labels, axis titles, and legend entries.

use super::palette::Color;
use std::fmt;

/// Font family options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// System sans-serif
    #[default]
    SansSerif,
    /// System monospace
    Monospace,
}

impl FontFamily {
    /// Get the CSS font-family value
    pub fn as_css(self) -> &'static str {
        match self {
            Self::SansSerif => "system-ui, -apple-system, sans-serif",
            Self::Monospace => "ui-monospace, 'Cascadia Code', monospace",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_css())
    }
}

/// Font weight options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular (400)
    #[default]
    Regular,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// Get the numeric weight value
    pub fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Bold => 700,
        }
    }
}

/// Text alignment (SVG text-anchor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAlign {
    /// Get the SVG text-anchor value
    pub fn as_svg_anchor(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A text style definition
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub family: FontFamily,
    /// Font size in pixels
    pub size: f64,
    pub weight: FontWeight,
    pub align: TextAlign,
    pub color: Color,
}

impl TextStyle {
    /// Create a style with the given size and weight
    pub fn new(size: f64, weight: FontWeight) -> Self {
        Self {
            family: FontFamily::default(),
            size,
            weight,
            align: TextAlign::default(),
            color: Color::default(),
        }
    }

    /// Tick label style (11px regular)
    pub fn tick_label(color: Color) -> Self {
        Self::new(11.0, FontWeight::Regular).with_color(color)
    }

    /// Axis title style (13px medium, centered)
    pub fn axis_title(color: Color) -> Self {
        Self::new(13.0, FontWeight::Medium)
            .with_color(color)
            .with_align(TextAlign::Middle)
    }

    /// Legend entry style (12px regular)
    pub fn legend(color: Color) -> Self {
        Self::new(12.0, FontWeight::Regular).with_color(color)
    }

    /// Set the color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Render as SVG text attributes
    pub fn to_svg_attrs(&self) -> String {
        format!(
            "font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" text-anchor=\"{}\" fill=\"{}\"",
            self.family.as_css(),
            self.size,
            self.weight.value(),
            self.align.as_svg_anchor(),
            self.color.to_css_hex()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0, FontWeight::Regular)
    }
}
