//! Chart Color Palette
//!
//! RGB color handling plus the fixed chart roles: axis ink, box fill, and the
//! categorical series ramp used for grouped bars and legends.

use std::fmt;

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color with full opacity
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create from hex string (e.g., "#1F77B4" or "1F77B4")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to CSS hex string (with #)
    pub fn to_css_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Lighten the color by a fraction (0.0 - 1.0)
    pub fn lighten(&self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 + (255.0 - self.r as f64) * amount) as u8,
            g: (self.g as f64 + (255.0 - self.g as f64) * amount) as u8,
            b: (self.b as f64 + (255.0 - self.b as f64) * amount) as u8,
            a: self.a,
        }
    }

    /// Darken the color by a fraction (0.0 - 1.0)
    pub fn darken(&self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 * (1.0 - amount)) as u8,
            g: (self.g as f64 * (1.0 - amount)) as u8,
            b: (self.b as f64 * (1.0 - amount)) as u8,
            a: self.a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_hex())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

/// Colors for the fixed chart roles
#[derive(Debug, Clone)]
pub struct ChartPalette {
    /// Axis lines, whiskers, medians, tick labels
    pub ink: Color,
    /// Boxplot box interior
    pub box_fill: Color,
    /// Line chart stroke and markers
    pub line: Color,
    /// Document background
    pub background: Color,
    /// Categorical ramp for sub-group series (bars, legend)
    pub series: Vec<Color>,
}

impl ChartPalette {
    /// Light theme: near-black ink on white
    pub fn light() -> Self {
        Self {
            ink: Color::rgb(0x11, 0x11, 0x11),
            box_fill: Color::rgb(0xDD, 0xDD, 0xDD),
            line: Color::rgb(0x11, 0x11, 0x11),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            series: Self::category_ramp(),
        }
    }

    /// Dark theme: light ink on near-black
    pub fn dark() -> Self {
        Self {
            ink: Color::rgb(0xE6, 0xE6, 0xE6),
            box_fill: Color::rgb(0x3A, 0x3A, 0x3A),
            line: Color::rgb(0xE6, 0xE6, 0xE6),
            background: Color::rgb(0x12, 0x12, 0x12),
            series: Self::category_ramp(),
        }
    }

    /// Look up a palette by theme name, defaulting to light
    pub fn for_theme(theme: &str) -> Self {
        match theme {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Color for the i-th series, cycling past the end of the ramp
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }

    /// The standard categorical ramp
    fn category_ramp() -> Vec<Color> {
        vec![
            Color::rgb(0x1F, 0x77, 0xB4),
            Color::rgb(0xFF, 0x7F, 0x0E),
            Color::rgb(0x2C, 0xA0, 0x2C),
            Color::rgb(0xD6, 0x27, 0x28),
            Color::rgb(0x94, 0x67, 0xBD),
            Color::rgb(0x8C, 0x56, 0x4B),
        ]
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#1F77B4").unwrap();
        assert_eq!(color, Color::rgb(0x1F, 0x77, 0xB4));

        let color = Color::from_hex("FF7F0E").unwrap();
        assert_eq!(color.to_css_hex(), "#FF7F0E");
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn test_color_lighten_darken() {
        let color = Color::rgb(100, 100, 100);
        let lighter = color.lighten(0.5);
        assert!(lighter.r > color.r);

        let darker = color.darken(0.5);
        assert_eq!(darker.r, 50);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", Color::rgb(17, 17, 17)), "#111111");
    }

    #[test]
    fn test_palette_light() {
        let palette = ChartPalette::light();
        assert_eq!(palette.ink.to_css_hex(), "#111111");
        assert_eq!(palette.box_fill.to_css_hex(), "#DDDDDD");
    }

    #[test]
    fn test_series_color_cycles() {
        let palette = ChartPalette::light();
        let n = palette.series.len();
        assert_eq!(palette.series_color(0), palette.series_color(n));
        assert_eq!(palette.series_color(1).to_css_hex(), "#FF7F0E");
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(
            ChartPalette::for_theme("dark").background.to_css_hex(),
            "#121212"
        );
        assert_eq!(
            ChartPalette::for_theme("anything").background.to_css_hex(),
            "#FFFFFF"
        );
    }
}
