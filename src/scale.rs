//! Linear scales and "nice" axis rounding
//!
//! A [`LinearScale`] maps a data interval (the domain) onto a pixel interval
//! (the range). [`LinearScale::nice`] widens the domain so both ends land on
//! a tick boundary, and [`LinearScale::ticks`] produces the tick values.
//!
//! Tick steps are always 1, 2 or 5 times a power of ten. The band a raw step
//! falls into is decided by the geometric midpoints √2, √10 and √50.

/// Default number of ticks requested per axis
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Upper bound on ticks requested per axis
pub const MAX_TICK_COUNT: usize = 100;

/// Keep a configured tick count within `1..=MAX_TICK_COUNT`
pub fn clamp_tick_count(count: usize) -> usize {
    count.clamp(1, MAX_TICK_COUNT)
}

/// Maximum refinement passes for [`LinearScale::nice`]
const MAX_NICE_ITERATIONS: usize = 10;

const E10: f64 = 7.0710678118654755; // √50
const E5: f64 = 3.1622776601683795; // √10
const E2: f64 = std::f64::consts::SQRT_2;

/// A linear mapping from a data domain to a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: [0.0, 1.0],
            range: [0.0, 1.0],
        }
    }
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range
    ///
    /// A degenerate domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let t = normalize(self.domain, value);
        lerp(self.range, t)
    }

    /// Map a range value back into the domain
    pub fn invert(&self, pixel: f64) -> f64 {
        let t = normalize(self.range, pixel);
        lerp(self.domain, t)
    }

    /// Lower and upper domain bound, regardless of orientation
    pub fn domain_extent(&self) -> (f64, f64) {
        let [d0, d1] = self.domain;
        (d0.min(d1), d0.max(d1))
    }

    /// Whether the domain collapses to a single value
    pub fn is_degenerate(&self) -> bool {
        self.domain[0] == self.domain[1]
    }

    /// Extend the domain outward to the nearest tick boundaries
    ///
    /// The domain is left unchanged when it is degenerate or non-finite, or
    /// when the step does not settle within a few passes.
    pub fn nice(mut self, count: usize) -> Self {
        let [d0, d1] = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };

        if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
            return self;
        }

        let count = count.min(MAX_TICK_COUNT) as f64;
        let mut prestep: Option<f64> = None;

        for _ in 0..MAX_NICE_ITERATIONS {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                self.domain = if reversed { [stop, start] } else { [start, stop] };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        self
    }

    /// Tick values inside the domain, in domain order
    ///
    /// Counts above [`MAX_TICK_COUNT`] are treated as `MAX_TICK_COUNT`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.min(MAX_TICK_COUNT);
        let [start, stop] = self.domain;
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reversed = stop < start;
        let (i1, i2, inc) = if reversed {
            tick_spec(stop, start, count as f64)
        } else {
            tick_spec(start, stop, count as f64)
        };
        if !(i2 >= i1) {
            return Vec::new();
        }

        let n = (i2 - i1) as usize + 1;
        (0..n)
            .map(|i| {
                let i = i as f64;
                match (reversed, inc < 0.0) {
                    (true, true) => (i2 - i) / -inc,
                    (true, false) => (i2 - i) * inc,
                    (false, true) => (i1 + i) / -inc,
                    (false, false) => (i1 + i) * inc,
                }
            })
            .collect()
    }

    /// Distance between consecutive ticks
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = self.domain_extent();
        let inc = tick_increment(lo, hi, count.min(MAX_TICK_COUNT) as f64);
        if inc < 0.0 {
            -1.0 / inc
        } else {
            inc
        }
    }
}

/// Upper end for a zero-based axis: the largest plottable value, or zero
///
/// NaN and infinite values are skipped. An empty input, or a maximum of
/// exactly zero, yields `0.0`.
pub fn domain_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .unwrap_or(0.0)
}

/// Tick increment for `[start, stop]`
///
/// Positive results are the step itself; negative results encode a step
/// below one as `-1 / step`, which keeps the arithmetic on integers.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

/// Returns `(i1, i2, inc)`: the first and last tick index and the increment
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * scale);
        i2 = round_half_up(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powf(power) * factor;
        i1 = round_half_up(start / scale);
        i2 = round_half_up(stop / scale);
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Round to the nearest integer, halves towards positive infinity
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn normalize([a, b]: [f64; 2], v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        0.5
    } else {
        (v - a) / span
    }
}

fn lerp([a, b]: [f64; 2], t: f64) -> f64 {
    a + (b - a) * t
}
