//! Axis Emission
//!
//! Bottom category/time axes and left value axes shared by the three
//! chart pipelines. Coordinates are in plot space (inside the margin
//! group), with the x axis sitting on the plot's bottom edge.

use crate::config::ChartConfig;
use crate::scale::{BandScale, LinearScale, TimeScale};
use crate::svg::{Color, Line, SvgElement, Text, TextStyle};

/// Tick mark length in pixels
const TICK_SIZE: f64 = 6.0;

/// Gap between the plot edge and tick label baselines
const TICK_LABEL_OFFSET: f64 = 18.0;

/// Bottom axis over a band scale: domain line, one tick per category
/// centered in its band
pub fn bottom_band_axis(
    scale: &BandScale,
    inner_width: f64,
    inner_height: f64,
    ink: Color,
) -> Vec<SvgElement> {
    let mut elements = vec![domain_line(0.0, inner_height, inner_width, inner_height, ink)];

    for key in scale.keys() {
        // Key came from the scale's own domain
        let Some(cx) = scale.center(key) else {
            continue;
        };
        elements.push(SvgElement::Line(
            Line::new(cx, inner_height, cx, inner_height + TICK_SIZE).with_stroke(ink),
        ));
        elements.push(tick_label(cx, inner_height + TICK_LABEL_OFFSET, key, ink));
    }

    elements
}

/// Bottom axis over a time scale, ticks formatted `M/D`
pub fn bottom_time_axis(
    scale: &TimeScale,
    inner_width: f64,
    inner_height: f64,
    ink: Color,
) -> Vec<SvgElement> {
    let mut elements = vec![domain_line(0.0, inner_height, inner_width, inner_height, ink)];

    for date in scale.ticks(10) {
        let x = scale.scale(date);
        elements.push(SvgElement::Line(
            Line::new(x, inner_height, x, inner_height + TICK_SIZE).with_stroke(ink),
        ));
        let label = date.format("%-m/%-d").to_string();
        elements.push(tick_label(x, inner_height + TICK_LABEL_OFFSET, &label, ink));
    }

    elements
}

/// Left axis over a linear scale: domain line plus value ticks
pub fn left_linear_axis(scale: &LinearScale, inner_height: f64, ink: Color) -> Vec<SvgElement> {
    let mut elements = vec![domain_line(0.0, 0.0, 0.0, inner_height, ink)];

    for value in scale.ticks(10) {
        let y = scale.scale(value);
        elements.push(SvgElement::Line(
            Line::new(-TICK_SIZE, y, 0.0, y).with_stroke(ink),
        ));
        elements.push(SvgElement::Text(
            Text::new(-TICK_SIZE - 3.0, y + 3.5, &format_tick(value)).with_style(
                TextStyle::tick_label(ink).with_align(crate::svg::TextAlign::End),
            ),
        ));
    }

    elements
}

/// Centered x-axis title below the tick labels
pub fn x_axis_title(config: &ChartConfig, ink: Color) -> SvgElement {
    SvgElement::Text(
        Text::new(
            config.inner_width() / 2.0,
            config.inner_height() + config.margin.bottom - 12.0,
            &config.x_title,
        )
        .with_style(TextStyle::axis_title(ink)),
    )
}

/// Rotated y-axis title left of the tick labels
pub fn y_axis_title(config: &ChartConfig, ink: Color) -> SvgElement {
    SvgElement::Text(
        Text::new(
            -config.inner_height() / 2.0,
            -(config.margin.left - 16.0),
            &config.y_title,
        )
        .with_style(TextStyle::axis_title(ink))
        .with_transform("rotate(-90)"),
    )
}

fn domain_line(x1: f64, y1: f64, x2: f64, y2: f64, ink: Color) -> SvgElement {
    SvgElement::Line(Line::new(x1, y1, x2, y2).with_stroke(ink))
}

fn tick_label(x: f64, y: f64, content: &str, ink: Color) -> SvgElement {
    SvgElement::Text(
        Text::new(x, y, content)
            .with_style(TextStyle::tick_label(ink).with_align(crate::svg::TextAlign::Middle)),
    )
}

/// Trim trailing zeros off tick values, absorbing float noise first
fn format_tick(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
