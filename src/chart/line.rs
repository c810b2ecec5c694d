//! Time-Series Line Pipeline
//!
//! Average likes per day, drawn as a natural cubic spline through the
//! points (in file order) with a circle marker per observation.

use crate::config::ChartConfig;
use crate::data::DailyLikesRow;
use crate::scale::{LinearScale, TimeScale};
use crate::svg::{ChartPalette, Circle, Path, Point, SvgBuilder, SvgElement};

use super::axis;

/// Marker radius in pixels
const MARKER_RADIUS: f64 = 3.0;

/// Render the time-series line chart to an SVG document
pub fn render(rows: &[DailyLikesRow], config: &ChartConfig, palette: &ChartPalette) -> String {
    let inner_w = config.inner_width();
    let inner_h = config.inner_height();

    let date_extent = rows
        .iter()
        .map(|r| r.date)
        .fold(
            None,
            |acc: Option<(chrono::NaiveDate, chrono::NaiveDate)>, d| match acc {
                Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
                None => Some((d, d)),
            },
        );

    let max_likes = rows.iter().map(|r| r.avg_likes).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max_likes.max(1.0)))
        .with_headroom(0.15)
        .floor_at(0.0)
        .nice(10)
        .range((inner_h, 0.0));

    let mut elements = Vec::new();

    if let Some(extent) = date_extent {
        let x = TimeScale::new(extent, (0.0, inner_w));

        elements.extend(axis::bottom_time_axis(&x, inner_w, inner_h, palette.ink));
        elements.extend(axis::left_linear_axis(&y, inner_h, palette.ink));
        elements.push(axis::x_axis_title(config, palette.ink));
        elements.push(axis::y_axis_title(config, palette.ink));

        let points: Vec<Point> = rows
            .iter()
            .map(|r| Point::new(x.scale(r.date), y.scale(r.avg_likes)))
            .collect();

        elements.push(SvgElement::Path(
            natural_spline(&points).with_stroke(palette.line, 2.0),
        ));

        for (row, point) in rows.iter().zip(&points) {
            elements.push(SvgElement::Circle(
                Circle::new(point.x, point.y, MARKER_RADIUS)
                    .with_fill(palette.line)
                    .with_tooltip(&format!(
                        "{}: {}",
                        row.date.format("%-m/%-d/%Y"),
                        row.avg_likes
                    )),
            ));
        }
    } else {
        // No rows: axes only, over an empty day
        elements.extend(axis::left_linear_axis(&y, inner_h, palette.ink));
        elements.push(axis::x_axis_title(config, palette.ink));
        elements.push(axis::y_axis_title(config, palette.ink));
    }

    SvgBuilder::new(config.width, config.height)
        .title("Average Likes Over Time")
        .background(palette.background)
        .translated_group(config.margin.left, config.margin.top, elements)
        .build()
}

/// Natural cubic spline through the points as a cubic Bezier path.
///
/// Control points come from the standard tridiagonal system for a spline
/// with zero second derivative at both ends. One point degenerates to a
/// bare move, two points to a straight segment.
pub fn natural_spline(points: &[Point]) -> Path {
    match points {
        [] => Path::new(),
        [p] => Path::new().move_to(p.x, p.y),
        [p0, p1] => Path::new().move_to(p0.x, p0.y).line_to(p1.x, p1.y),
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let (cx1, cx2) = control_points(&xs);
            let (cy1, cy2) = control_points(&ys);

            let mut path = Path::new().move_to(points[0].x, points[0].y);
            for i in 0..points.len() - 1 {
                path = path.cubic_to(
                    cx1[i],
                    cy1[i],
                    cx2[i],
                    cy2[i],
                    points[i + 1].x,
                    points[i + 1].y,
                );
            }
            path
        }
    }
}

/// First and second Bezier control coordinates for one axis of a natural
/// spline through `k`, solved with the Thomas algorithm.
fn control_points(k: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = k.len() - 1;
    debug_assert!(n >= 2);

    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];
    let mut r = vec![0.0; n];

    // Zero-curvature boundary at both ends
    a[0] = 0.0;
    b[0] = 2.0;
    c[0] = 1.0;
    r[0] = k[0] + 2.0 * k[1];

    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        c[i] = 1.0;
        r[i] = 4.0 * k[i] + 2.0 * k[i + 1];
    }

    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    c[n - 1] = 0.0;
    r[n - 1] = 8.0 * k[n - 1] + k[n];

    // Forward elimination
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] -= m * r[i - 1];
    }

    // Back substitution
    let mut p1 = vec![0.0; n];
    p1[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        p1[i] = (r[i] - c[i] * p1[i + 1]) / b[i];
    }

    let mut p2 = vec![0.0; n];
    for i in 0..n - 1 {
        p2[i] = 2.0 * k[i + 1] - p1[i + 1];
    }
    p2[n - 1] = (k[n] + p1[n - 1]) / 2.0;

    (p1, p2)
}
