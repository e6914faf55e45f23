// File: crates/scatter-core/src/scale.rs
// Summary: Linear (year) and time (clock) scales mapping a data domain onto a pixel range, with tick generation.

use crate::record::{ClockValue, RideRecord};

/// Common scale operations shared by the axis and mark layout.
pub trait ScaleTransform {
    type Value: Copy;
    fn to_px(&self, v: Self::Value) -> f32;
    fn from_px(&self, px: f32) -> Self::Value;
    fn domain(&self) -> (Self::Value, Self::Value);
    fn range(&self) -> (f32, f32);
    /// Roughly `count` round values inside the domain, ascending.
    fn ticks(&self, count: usize) -> Vec<Self::Value>;
}

/// Normalized position of `v` in `[d0, d1]`; a collapsed domain maps to the middle.
#[inline]
fn normalize(v: f64, d0: f64, d1: f64) -> f64 {
    let span = d1 - d0;
    if span.abs() < 1e-12 { 0.5 } else { (v - d0) / span }
}

#[inline]
fn interpolate(t: f64, r0: f32, r1: f32) -> f32 {
    r0 + (t as f32) * (r1 - r0)
}

/// Power of ten and 1-2-5 factor for about `count` steps over `[start, stop]`.
fn step_parts(start: f64, stop: f64, count: usize) -> Option<(f64, f64)> {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return None;
    }
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some((power, factor))
}

/// Step between round ticks using the 1-2-5 × 10^k rule.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    step_parts(start, stop, count).map(|(power, factor)| factor * 10f64.powf(power)).unwrap_or(0.0)
}

/// Round ticks between `start` and `stop` (inclusive).
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if (hi - lo).abs() < 1e-12 {
        return vec![lo];
    }
    let Some((power, factor)) = step_parts(lo, hi, count) else {
        return Vec::new();
    };
    // Integer multiples (or fractions) of the step keep float error off the labels.
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        let first = (lo * inv).ceil() as i64;
        let last = (hi * inv).floor() as i64;
        (first..=last).map(|i| i as f64 / inv).collect()
    } else {
        let step = 10f64.powf(power) * factor;
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Horizontal year scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Year domain padded by one on each side: `[min - 1, max + 1]`.
    pub fn for_years(records: &[RideRecord], range: (f32, f32)) -> Option<Self> {
        let min = records.iter().map(|r| r.year).min()?;
        let max = records.iter().map(|r| r.year).max()?;
        Some(Self::new((f64::from(min) - 1.0, f64::from(max) + 1.0), range))
    }
}

impl ScaleTransform for LinearScale {
    type Value = f64;

    #[inline]
    fn to_px(&self, v: f64) -> f32 {
        interpolate(normalize(v, self.domain.0, self.domain.1), self.range.0, self.range.1)
    }

    fn from_px(&self, px: f32) -> f64 {
        let t = normalize(px as f64, self.range.0 as f64, self.range.1 as f64);
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    fn domain(&self) -> (f64, f64) { self.domain }

    fn range(&self) -> (f32, f32) { self.range }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Calendar-aligned tick intervals a clock axis may use.
const TIME_INTERVALS_MS: [i64; 13] = [
    SECOND_MS,
    5 * SECOND_MS,
    15 * SECOND_MS,
    30 * SECOND_MS,
    MINUTE_MS,
    5 * MINUTE_MS,
    15 * MINUTE_MS,
    30 * MINUTE_MS,
    HOUR_MS,
    3 * HOUR_MS,
    6 * HOUR_MS,
    12 * HOUR_MS,
    DAY_MS,
];

/// Pick the tick interval (ms) for a clock span: the standard interval closest to `span / count`.
pub fn time_tick_interval(span_ms: i64, count: usize) -> i64 {
    let target = span_ms.max(0) as f64 / count.max(1) as f64;
    let i = TIME_INTERVALS_MS.partition_point(|&iv| (iv as f64) <= target);
    if i == 0 {
        return (tick_step(0.0, span_ms as f64, count) as i64).max(1);
    }
    if i == TIME_INTERVALS_MS.len() {
        let days = tick_step(0.0, span_ms as f64 / DAY_MS as f64, count).max(1.0);
        return (days * DAY_MS as f64) as i64;
    }
    let below = TIME_INTERVALS_MS[i - 1] as f64;
    let above = TIME_INTERVALS_MS[i] as f64;
    if target / below < above / target {
        TIME_INTERVALS_MS[i - 1]
    } else {
        TIME_INTERVALS_MS[i]
    }
}

/// Vertical clock scale; domain is exactly the clock extent, unpadded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (ClockValue, ClockValue),
    pub range: (f32, f32),
}

impl TimeScale {
    pub fn new(domain: (ClockValue, ClockValue), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn for_clocks(records: &[RideRecord], range: (f32, f32)) -> Option<Self> {
        let min = records.iter().map(|r| r.time).min()?;
        let max = records.iter().map(|r| r.time).max()?;
        Some(Self::new((min, max), range))
    }

    fn domain_ms(&self) -> (f64, f64) {
        (self.domain.0.timestamp_millis() as f64, self.domain.1.timestamp_millis() as f64)
    }
}

impl ScaleTransform for TimeScale {
    type Value = ClockValue;

    #[inline]
    fn to_px(&self, v: ClockValue) -> f32 {
        let (d0, d1) = self.domain_ms();
        interpolate(normalize(v.timestamp_millis() as f64, d0, d1), self.range.0, self.range.1)
    }

    fn from_px(&self, px: f32) -> ClockValue {
        let (d0, d1) = self.domain_ms();
        let t = normalize(px as f64, self.range.0 as f64, self.range.1 as f64);
        let ms = (d0 + t * (d1 - d0)).round() as i64;
        ClockValue::from_timestamp_millis(ms).unwrap_or(self.domain.0)
    }

    fn domain(&self) -> (ClockValue, ClockValue) { self.domain }

    fn range(&self) -> (f32, f32) { self.range }

    fn ticks(&self, count: usize) -> Vec<ClockValue> {
        let (lo, hi) = (self.domain.0.timestamp_millis(), self.domain.1.timestamp_millis());
        if lo == hi {
            return vec![self.domain.0];
        }
        let step = time_tick_interval(hi - lo, count);
        let first = lo.div_euclid(step) + i64::from(lo.rem_euclid(step) != 0);
        let last = hi.div_euclid(step);
        (first..=last)
            .filter_map(|k| ClockValue::from_timestamp_millis(k * step))
            .collect()
    }
}
