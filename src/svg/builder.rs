//! SVG Builder
//!
//! Fluent API for assembling a standalone SVG document from shape
//! descriptors. Chart pipelines place their shapes inside a group translated
//! by the chart margins, so shape coordinates are in plot space.

use super::palette::Color;
use super::shapes::{fmt_num, xml_escape, Circle, Line, Path, Rect, Text};

/// SVG element tree
#[derive(Debug, Clone)]
pub enum SvgElement {
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    Path(Path),
    Text(Text),
    Group {
        transform: Option<String>,
        elements: Vec<SvgElement>,
    },
}

impl SvgElement {
    /// Render to SVG string
    pub fn to_svg(&self) -> String {
        match self {
            Self::Rect(r) => r.to_svg(),
            Self::Circle(c) => c.to_svg(),
            Self::Line(l) => l.to_svg(),
            Self::Path(p) => p.to_svg(),
            Self::Text(t) => t.to_svg(),
            Self::Group {
                transform,
                elements,
            } => {
                let children: String = elements.iter().map(|e| e.to_svg()).collect();
                match transform {
                    Some(t) => format!("<g transform=\"{}\">{}</g>", t, children),
                    None => format!("<g>{}</g>", children),
                }
            }
        }
    }
}

/// SVG document builder
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: Option<String>,
    description: Option<String>,
    background: Option<Color>,
    elements: Vec<SvgElement>,
}

impl SvgBuilder {
    /// Create a builder for a document of the given outer size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: None,
            description: None,
            background: None,
            elements: Vec::new(),
        }
    }

    /// Set the document title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document description
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Set the background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Add an element
    pub fn element(mut self, element: SvgElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a group translated to (x, y)
    pub fn translated_group(mut self, x: f64, y: f64, elements: Vec<SvgElement>) -> Self {
        self.elements.push(SvgElement::Group {
            transform: Some(format!("translate({},{})", fmt_num(x), fmt_num(y))),
            elements,
        });
        self
    }

    /// Build the SVG document
    pub fn build(self) -> String {
        let mut svg = String::new();

        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">\n",
            fmt_num(self.width),
            fmt_num(self.height),
            fmt_num(self.width),
            fmt_num(self.height)
        ));

        if let Some(title) = &self.title {
            svg.push_str(&format!("  <title>{}</title>\n", xml_escape(title)));
        }
        if let Some(desc) = &self.description {
            svg.push_str(&format!("  <desc>{}</desc>\n", xml_escape(desc)));
        }

        if let Some(background) = &self.background {
            svg.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                background.to_css_hex()
            ));
        }

        for element in &self.elements {
            svg.push_str(&format!("  {}\n", element.to_svg()));
        }

        svg.push_str("</svg>\n");

        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_root_element() {
        let svg = SvgBuilder::new(760.0, 420.0).build();
        assert!(svg.contains("viewBox=\"0 0 760 420\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_builder_title_and_desc() {
        let svg = SvgBuilder::new(100.0, 100.0)
            .title("Likes by Age Group")
            .description("Boxplot of likes per post")
            .build();
        assert!(svg.contains("<title>Likes by Age Group</title>"));
        assert!(svg.contains("<desc>Boxplot of likes per post</desc>"));
    }

    #[test]
    fn test_builder_background() {
        let svg = SvgBuilder::new(100.0, 100.0)
            .background(Color::rgb(255, 255, 255))
            .build();
        assert!(svg.contains("width=\"100%\" height=\"100%\" fill=\"#FFFFFF\""));
    }

    #[test]
    fn test_translated_group() {
        let svg = SvgBuilder::new(100.0, 100.0)
            .translated_group(
                60.0,
                24.0,
                vec![SvgElement::Line(Line::new(0.0, 0.0, 10.0, 0.0))],
            )
            .build();
        assert!(svg.contains("<g transform=\"translate(60,24)\">"));
        assert!(svg.contains("<line"));
    }

    #[test]
    fn test_nested_group() {
        let inner = SvgElement::Group {
            transform: None,
            elements: vec![SvgElement::Text(crate::svg::Text::new(0.0, 0.0, "hi"))],
        };
        let svg = SvgBuilder::new(50.0, 50.0).element(inner).build();
        assert!(svg.contains("<g><text"));
    }
}
