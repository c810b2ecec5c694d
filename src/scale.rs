//! Scale Derivation
//!
//! Maps data domains to pixel ranges: padded category bands, linear numeric
//! scales with proportional headroom and "nice" tick boundaries, and a
//! day-granularity time scale. Scales are plain values recomputed per render.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

/// Categorical scale mapping distinct keys to evenly spaced, padded bands.
///
/// Padding is a fraction of one step, applied both between bands and at the
/// outer edges, with the bands centered in the range.
#[derive(Debug, Clone)]
pub struct BandScale {
    index: IndexMap<String, usize>,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    /// Create a band scale over the given keys
    pub fn new(keys: &[String], range: (f64, f64), padding: f64) -> Self {
        let n = keys.len().max(1) as f64;
        let padding = padding.clamp(0.0, 1.0);
        let span = range.1 - range.0;
        let step = span / (n + padding);
        let bandwidth = step * (1.0 - padding);
        let offset = range.0 + step * padding;

        let index = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), i))
            .collect();

        Self {
            index,
            step,
            bandwidth,
            offset,
        }
    }

    /// Left edge of the band for a key, or `None` for an unknown key
    pub fn position(&self, key: &str) -> Option<f64> {
        self.index
            .get(key)
            .map(|&i| self.offset + self.step * i as f64)
    }

    /// Horizontal center of the band for a key
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }

    /// Width of one band
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Keys in domain order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Number of bands
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the domain is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Linear scale from a numeric domain to a pixel range.
///
/// The range may be inverted (e.g. `(height, 0)` for a y axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale with an identity range; call `range()` to set pixels
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            range: (0.0, 1.0),
        }
    }

    /// Set the pixel range
    pub fn range(mut self, range: (f64, f64)) -> Self {
        self.range = range;
        self
    }

    /// Extend both domain ends by a fraction of the current span
    pub fn with_headroom(mut self, fraction: f64) -> Self {
        let pad = (self.domain.1 - self.domain.0) * fraction;
        self.domain.0 -= pad;
        self.domain.1 += pad;
        self
    }

    /// Clamp the lower domain bound to at least `floor`
    pub fn floor_at(mut self, floor: f64) -> Self {
        if self.domain.0 < floor {
            self.domain.0 = floor;
        }
        self
    }

    /// Round the domain outward to nice tick boundaries (1/2/5 x 10^k)
    pub fn nice(mut self, count: usize) -> Self {
        // Two passes, since rounding can change the step magnitude
        for _ in 0..2 {
            let step = tick_step(self.domain.0, self.domain.1, count);
            if step > 0.0 {
                self.domain.0 = (self.domain.0 / step).floor() * step;
                self.domain.1 = (self.domain.1 / step).ceil() * step;
            }
        }
        self
    }

    /// Map a domain value to pixels
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Nice tick values inside the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return vec![d0];
        }
        let step = tick_step(d0, d1, count);
        if step <= 0.0 {
            return vec![d0];
        }
        let first = (d0 / step).ceil() as i64;
        let last = (d1 / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }

    /// The current domain
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The domain span
    pub fn span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }
}

/// Temporal scale over calendar days, backed by a linear day-number mapping
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    inner: LinearScale,
    domain: (NaiveDate, NaiveDate),
}

impl TimeScale {
    /// Create a time scale over a date extent
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let inner = LinearScale::new((day_number(domain.0), day_number(domain.1))).range(range);
        Self { inner, domain }
    }

    /// Map a date to pixels
    pub fn scale(&self, date: NaiveDate) -> f64 {
        self.inner.scale(day_number(date))
    }

    /// Tick dates at whole-day granularity
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let span_days = (self.domain.1 - self.domain.0).num_days();
        if span_days <= 0 {
            return vec![self.domain.0];
        }
        let step = ((span_days as f64 / count.max(1) as f64).ceil() as i64).max(1);

        let mut ticks = Vec::new();
        let mut current = self.domain.0;
        while current <= self.domain.1 {
            ticks.push(current);
            current = current + chrono::Duration::days(step);
        }
        ticks
    }
}

/// Day number used as the linear domain for time scales
fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Tick step for a span and target count, snapped to 1/2/5 x 10^k
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if span == 0.0 || count == 0 {
        return 0.0;
    }

    let step0 = span / count as f64;
    let power = step0.log10().floor();
    let error = step0 / 10f64.powf(power);

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * 10f64.powf(power)
}
