//! Boxplot Pipeline
//!
//! Likes per post, grouped by audience age group. One five-number summary
//! per group becomes a whisker line, min/max caps, a Q1-Q3 box, and a
//! median line.

use crate::config::ChartConfig;
use crate::data::LikesRow;
use crate::scale::{BandScale, LinearScale};
use crate::stats::{group_by, FiveNumberSummary};
use crate::svg::{ChartPalette, Line, Rect, SvgBuilder, SvgElement};

use super::axis;

/// Minimum whisker cap width in pixels
const MIN_CAP_WIDTH: f64 = 18.0;

/// Render the boxplot chart to an SVG document
pub fn render(rows: &[LikesRow], config: &ChartConfig, palette: &ChartPalette) -> String {
    let inner_w = config.inner_width();
    let inner_h = config.inner_height();

    let groups = group_by(rows, |r| r.age_group.clone());
    let keys: Vec<String> = groups.keys().cloned().collect();

    let x = BandScale::new(&keys, (0.0, inner_w), 0.35);
    let y = y_scale(rows, inner_h);

    let mut elements = Vec::new();
    elements.extend(axis::bottom_band_axis(&x, inner_w, inner_h, palette.ink));
    elements.extend(axis::left_linear_axis(&y, inner_h, palette.ink));
    elements.push(axis::x_axis_title(config, palette.ink));
    elements.push(axis::y_axis_title(config, palette.ink));

    for (age_group, group_rows) in &groups {
        let likes: Vec<f64> = group_rows.iter().map(|r| r.likes).collect();
        let Some(stats) = FiveNumberSummary::from_unsorted(&likes) else {
            continue;
        };
        let Some(band_x) = x.position(age_group) else {
            continue;
        };
        elements.extend(box_shapes(&stats, band_x, x.bandwidth(), &y, palette));
    }

    SvgBuilder::new(config.width, config.height)
        .title("Likes by Age Group")
        .background(palette.background)
        .translated_group(config.margin.left, config.margin.top, elements)
        .build()
}

/// Likes axis: data extent with 10% headroom, floored at zero, niced
fn y_scale(rows: &[LikesRow], inner_h: f64) -> LinearScale {
    let extent = rows
        .iter()
        .map(|r| r.likes)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 1.0));

    LinearScale::new(extent)
        .with_headroom(0.10)
        .floor_at(0.0)
        .nice(10)
        .range((inner_h, 0.0))
}

/// Shapes for one group's summary
fn box_shapes(
    stats: &FiveNumberSummary,
    band_x: f64,
    bandwidth: f64,
    y: &LinearScale,
    palette: &ChartPalette,
) -> Vec<SvgElement> {
    let cx = band_x + bandwidth / 2.0;
    let cap_width = MIN_CAP_WIDTH.max(bandwidth * 0.45);

    let mut shapes = Vec::new();

    // Whisker from min to max
    shapes.push(SvgElement::Line(
        Line::new(cx, y.scale(stats.min), cx, y.scale(stats.max)).with_stroke(palette.ink),
    ));

    // Min and max caps
    for value in [stats.min, stats.max] {
        let cap_y = y.scale(value);
        shapes.push(SvgElement::Line(
            Line::new(cx - cap_width / 2.0, cap_y, cx + cap_width / 2.0, cap_y)
                .with_stroke(palette.ink),
        ));
    }

    // Box from Q1 to Q3, height clamped so a flat group stays visible
    let box_top = y.scale(stats.q3);
    let box_height = (y.scale(stats.q1) - box_top).max(1.0);
    shapes.push(SvgElement::Rect(
        Rect::new(band_x + bandwidth * 0.1, box_top, bandwidth * 0.8, box_height)
            .with_fill(palette.box_fill)
            .with_stroke(palette.ink, 1.0),
    ));

    // Median line
    let median_y = y.scale(stats.median);
    shapes.push(SvgElement::Line(
        Line::new(
            band_x + bandwidth * 0.1,
            median_y,
            band_x + bandwidth * 0.9,
            median_y,
        )
        .with_stroke(palette.ink)
        .with_stroke_width(2.0),
    ));

    shapes
}
