//! Grouped Bar Pipeline
//!
//! Average likes by platform, sub-grouped by post type. An outer band
//! scale positions each platform, an inner band scale positions the post
//! types within a platform band, and a legend keys the post-type colors.

use crate::config::ChartConfig;
use crate::data::AvgLikesRow;
use crate::scale::{BandScale, LinearScale};
use crate::stats::distinct;
use crate::svg::{ChartPalette, Rect, SvgBuilder, SvgElement, Text, TextStyle};

use super::axis;

/// Legend block offset from the plot's right edge
const LEGEND_WIDTH: f64 = 150.0;

/// Vertical spacing between legend rows
const LEGEND_ROW_HEIGHT: f64 = 20.0;

/// Render the grouped bar chart to an SVG document
pub fn render(rows: &[AvgLikesRow], config: &ChartConfig, palette: &ChartPalette) -> String {
    let inner_w = config.inner_width();
    let inner_h = config.inner_height();

    let platforms = distinct(rows, |r| r.platform.clone());
    let post_types = distinct(rows, |r| r.post_type.clone());

    let x0 = BandScale::new(&platforms, (0.0, inner_w), 0.2);
    let x1 = BandScale::new(&post_types, (0.0, x0.bandwidth()), 0.15);

    let max_likes = rows.iter().map(|r| r.avg_likes).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max_likes.max(1.0)))
        .with_headroom(0.15)
        .floor_at(0.0)
        .nice(10)
        .range((inner_h, 0.0));

    let mut elements = Vec::new();
    elements.extend(axis::bottom_band_axis(&x0, inner_w, inner_h, palette.ink));
    elements.extend(axis::left_linear_axis(&y, inner_h, palette.ink));
    elements.push(axis::x_axis_title(config, palette.ink));
    elements.push(axis::y_axis_title(config, palette.ink));

    for row in rows {
        let (Some(platform_x), Some(type_x)) =
            (x0.position(&row.platform), x1.position(&row.post_type))
        else {
            continue;
        };
        let bar_x = platform_x + type_x;
        let bar_y = y.scale(row.avg_likes);
        let series = post_types
            .iter()
            .position(|t| t == &row.post_type)
            .unwrap_or(0);

        elements.push(SvgElement::Rect(
            Rect::new(bar_x, bar_y, x1.bandwidth(), inner_h - bar_y)
                .with_fill(palette.series_color(series))
                .with_tooltip(&format!(
                    "{} / {}: {}",
                    row.platform, row.post_type, row.avg_likes
                )),
        ));
    }

    elements.push(legend(&post_types, inner_w, palette));

    SvgBuilder::new(config.width, config.height)
        .title("Average Likes by Platform and Post Type")
        .background(palette.background)
        .translated_group(config.margin.left, config.margin.top, elements)
        .build()
}

/// Color-keyed legend in the top-right corner of the plot
fn legend(post_types: &[String], inner_w: f64, palette: &ChartPalette) -> SvgElement {
    let mut entries = Vec::new();

    for (i, post_type) in post_types.iter().enumerate() {
        let row_y = i as f64 * LEGEND_ROW_HEIGHT;
        entries.push(SvgElement::Rect(
            Rect::new(0.0, row_y - 10.0, 12.0, 12.0).with_fill(palette.series_color(i)),
        ));
        entries.push(SvgElement::Text(
            Text::new(18.0, row_y, post_type).with_style(TextStyle::legend(palette.ink)),
        ));
    }

    SvgElement::Group {
        transform: Some(format!("translate({},0)", inner_w - LEGEND_WIDTH)),
        elements: entries,
    }
}
