//! SVG Shape Primitives
//!
//! The chart pipelines emit these descriptors; `SvgBuilder` turns them into
//! markup. Shapes carry their own styling so a rendered chart is just a flat
//! list of shapes inside a margin-translated group.

use super::palette::Color;
use super::typography::TextStyle;

/// Point in 2D chart space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle (bars, boxplot boxes, legend swatches)
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color
    pub fill: Option<Color>,
    /// Stroke color
    pub stroke: Option<Color>,
    /// Stroke width
    pub stroke_width: f64,
    /// Hover text, rendered as a child `<title>` element
    pub tooltip: Option<String>,
}

impl Rect {
    /// Create a new rectangle from its top-left corner
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            tooltip: None,
        }
    }

    /// Set fill color
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set stroke
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    /// Set hover text
    pub fn with_tooltip(mut self, text: &str) -> Self {
        self.tooltip = Some(text.to_string());
        self
    }

    /// Render to SVG element
    pub fn to_svg(&self) -> String {
        let mut attrs = format!(
            "x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.width),
            fmt_num(self.height)
        );

        match &self.fill {
            Some(fill) => attrs.push_str(&format!(" fill=\"{}\"", fill.to_css_hex())),
            None => attrs.push_str(" fill=\"none\""),
        }

        if let Some(stroke) = &self.stroke {
            attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.to_css_hex(),
                fmt_num(self.stroke_width)
            ));
        }

        match &self.tooltip {
            Some(tip) => format!(
                "<rect {}><title>{}</title></rect>",
                attrs,
                xml_escape(tip)
            ),
            None => format!("<rect {}/>", attrs),
        }
    }
}

/// A circle (line chart point markers)
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub tooltip: Option<String>,
}

impl Circle {
    /// Create a new circle
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            tooltip: None,
        }
    }

    /// Set fill color
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set stroke
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    /// Set hover text
    pub fn with_tooltip(mut self, text: &str) -> Self {
        self.tooltip = Some(text.to_string());
        self
    }

    /// Render to SVG element
    pub fn to_svg(&self) -> String {
        let mut attrs = format!(
            "cx=\"{}\" cy=\"{}\" r=\"{}\"",
            fmt_num(self.cx),
            fmt_num(self.cy),
            fmt_num(self.r)
        );

        match &self.fill {
            Some(fill) => attrs.push_str(&format!(" fill=\"{}\"", fill.to_css_hex())),
            None => attrs.push_str(" fill=\"none\""),
        }

        if let Some(stroke) = &self.stroke {
            attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.to_css_hex(),
                fmt_num(self.stroke_width)
            ));
        }

        match &self.tooltip {
            Some(tip) => format!(
                "<circle {}><title>{}</title></circle>",
                attrs,
                xml_escape(tip)
            ),
            None => format!("<circle {}/>", attrs),
        }
    }
}

/// A line segment (whiskers, caps, medians, axis ticks)
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Line {
    /// Create a new line
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            stroke: Color::rgb(0, 0, 0),
            stroke_width: 1.0,
        }
    }

    /// Set stroke color
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    /// Set stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Render to SVG element
    pub fn to_svg(&self) -> String {
        format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            fmt_num(self.start.x),
            fmt_num(self.start.y),
            fmt_num(self.end.x),
            fmt_num(self.end.y),
            self.stroke.to_css_hex(),
            fmt_num(self.stroke_width)
        )
    }
}

/// SVG path commands
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Move to (x, y)
    MoveTo(f64, f64),
    /// Line to (x, y)
    LineTo(f64, f64),
    /// Cubic curve to (x, y) with two control points
    CubicTo {
        cx1: f64,
        cy1: f64,
        cx2: f64,
        cy2: f64,
        x: f64,
        y: f64,
    },
    /// Close path
    Close,
}

impl PathCommand {
    /// Convert to SVG path data
    pub fn to_svg(&self) -> String {
        match self {
            Self::MoveTo(x, y) => format!("M {} {}", fmt_num(*x), fmt_num(*y)),
            Self::LineTo(x, y) => format!("L {} {}", fmt_num(*x), fmt_num(*y)),
            Self::CubicTo {
                cx1,
                cy1,
                cx2,
                cy2,
                x,
                y,
            } => format!(
                "C {} {} {} {} {} {}",
                fmt_num(*cx1),
                fmt_num(*cy1),
                fmt_num(*cx2),
                fmt_num(*cy2),
                fmt_num(*x),
                fmt_num(*y)
            ),
            Self::Close => "Z".to_string(),
        }
    }
}

/// A path (the smoothed line-chart curve)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(x, y));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(x, y));
        self
    }

    /// Cubic curve to a point
    pub fn cubic_to(mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::CubicTo {
            cx1,
            cy1,
            cx2,
            cy2,
            x,
            y,
        });
        self
    }

    /// Set stroke
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    /// Get the path data string
    pub fn to_path_data(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_svg())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render to SVG element
    pub fn to_svg(&self) -> String {
        let mut attrs = format!("d=\"{}\"", self.to_path_data());

        match &self.fill {
            Some(fill) => attrs.push_str(&format!(" fill=\"{}\"", fill.to_css_hex())),
            None => attrs.push_str(" fill=\"none\""),
        }

        if let Some(stroke) = &self.stroke {
            attrs.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                stroke.to_css_hex(),
                fmt_num(self.stroke_width)
            ));
        }

        format!("<path {}/>", attrs)
    }
}

/// A text element (tick labels, axis titles, legend entries)
#[derive(Debug, Clone)]
pub struct Text {
    pub position: Point,
    pub content: String,
    pub style: TextStyle,
    /// Raw SVG transform, used for the rotated y-axis title
    pub transform: Option<String>,
}

impl Text {
    /// Create a new text element
    pub fn new(x: f64, y: f64, content: &str) -> Self {
        Self {
            position: Point::new(x, y),
            content: content.to_string(),
            style: TextStyle::default(),
            transform: None,
        }
    }

    /// Set the text style
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a transform (e.g. "rotate(-90)")
    pub fn with_transform(mut self, transform: &str) -> Self {
        self.transform = Some(transform.to_string());
        self
    }

    /// Render to SVG element
    pub fn to_svg(&self) -> String {
        let mut attrs = format!(
            "x=\"{}\" y=\"{}\" {}",
            fmt_num(self.position.x),
            fmt_num(self.position.y),
            self.style.to_svg_attrs()
        );
        if let Some(transform) = &self.transform {
            attrs.push_str(&format!(" transform=\"{}\"", transform));
        }
        format!("<text {}>{}</text>", attrs, xml_escape(&self.content))
    }
}

/// Format a coordinate with up to two decimal places, trimming trailing zeros
pub(crate) fn fmt_num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Escape XML special characters
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_to_svg() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0)
            .with_fill(Color::rgb(255, 0, 0))
            .with_stroke(Color::rgb(0, 0, 0), 2.0);

        let svg = rect.to_svg();
        assert!(svg.contains("x=\"10\""));
        assert!(svg.contains("fill=\"#FF0000\""));
        assert!(svg.contains("stroke=\"#000000\""));
    }

    #[test]
    fn test_rect_no_fill() {
        let svg = Rect::new(0.0, 0.0, 50.0, 50.0).to_svg();
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_rect_tooltip() {
        let svg = Rect::new(0.0, 0.0, 10.0, 10.0)
            .with_tooltip("X / video: 92.5")
            .to_svg();
        assert!(svg.contains("<title>X / video: 92.5</title>"));
        assert!(svg.ends_with("</rect>"));
    }

    #[test]
    fn test_circle_to_svg() {
        let svg = Circle::new(50.0, 50.0, 3.0)
            .with_fill(Color::rgb(0, 255, 0))
            .to_svg();
        assert!(svg.contains("cx=\"50\""));
        assert!(svg.contains("r=\"3\""));
        assert!(svg.contains("fill=\"#00FF00\""));
    }

    #[test]
    fn test_circle_tooltip_escaped() {
        let svg = Circle::new(0.0, 0.0, 3.0).with_tooltip("a < b").to_svg();
        assert!(svg.contains("<title>a &lt; b</title>"));
    }

    #[test]
    fn test_line_to_svg() {
        let svg = Line::new(10.0, 20.0, 30.0, 40.0).to_svg();
        assert!(svg.contains("x1=\"10\""));
        assert!(svg.contains("y2=\"40\""));
    }

    #[test]
    fn test_path_builder() {
        let path = Path::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 0.0)
            .cubic_to(110.0, 0.0, 120.0, 10.0, 130.0, 20.0);

        let data = path.to_path_data();
        assert!(data.starts_with("M 0 0"));
        assert!(data.contains("L 100 0"));
        assert!(data.contains("C 110 0 120 10 130 20"));
    }

    #[test]
    fn test_path_no_fill_by_default() {
        let svg = Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0).to_svg();
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_text_escaping() {
        let svg = Text::new(0.0, 0.0, "<script>").to_svg();
        assert!(svg.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_text_transform() {
        let svg = Text::new(-100.0, -44.0, "Average Likes")
            .with_transform("rotate(-90)")
            .to_svg();
        assert!(svg.contains("transform=\"rotate(-90)\""));
    }

    #[test]
    fn test_fmt_num_trims_zeros() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(10.256), "10.26");
        assert_eq!(fmt_num(-0.5), "-0.5");
    }
}
