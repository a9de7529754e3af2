// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Fraction of the span moved by a keyboard step on a continuous range.
const CONTINUOUS_KEY_FRACTION: f64 = 0.01;

/// Upper bound on the decimal places quantized values are rounded to.
const MAX_DECIMALS: u32 = 12;

/// Bounds and step size of a numeric range.
///
/// Construct with [`RangeSpec::new`], which normalizes malformed input, so
/// every `RangeSpec` satisfies `min <= max` and `step >= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeSpec {
    min: f64,
    max: f64,
    step: f64,
}

impl Default for RangeSpec {
    /// The `0..=100` range with unit steps.
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl RangeSpec {
    /// Creates a range, normalizing malformed input.
    ///
    /// - A non-finite `min` becomes `0`.
    /// - A non-finite `max`, or one below `min`, collapses to `min`.
    /// - A negative or non-finite `step` becomes `0` (continuous).
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() { max.max(min) } else { min };
        let step = if step.is_finite() && step > 0.0 { step } else { 0.0 };
        Self { min, max, step }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Step size; zero for continuous ranges.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if values are not quantized.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.step == 0.0
    }

    /// The value halfway between `min` and `max`, on the step grid.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.constrain(self.min + self.span() / 2.0)
    }

    /// Clamps `value` into `[min, max]`. `NaN` maps to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Rounds `value` to the nearest `min + k * step`, half-up. Does not clamp.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        if self.is_continuous() || !value.is_finite() {
            return value;
        }
        let steps = ((value - self.min) / self.step + 0.5).floor();
        let snapped = self.min + steps * self.step;
        match (decimal_places(self.step), decimal_places(self.min)) {
            (Some(a), Some(b)) => round_to(snapped, a.max(b)),
            _ => snapped,
        }
    }

    /// Quantizes and then clamps `value`.
    ///
    /// This is the constraint applied after every mutation.
    #[must_use]
    pub fn constrain(&self, value: f64) -> f64 {
        self.clamp(self.quantize(value))
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    ///
    /// An empty range reports `0`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / span
    }

    /// The constrained value at `fraction` of the way from `min` to `max`.
    ///
    /// Fractions outside `[0, 1]` clamp to the bounds.
    #[must_use]
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        if fraction.is_nan() {
            return self.min;
        }
        self.constrain(self.min + fraction * self.span())
    }

    /// Moves `value` by `steps` keyboard steps and constrains the result.
    ///
    /// Continuous ranges move by one percent of the span per step.
    #[must_use]
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        let unit = if self.is_continuous() {
            self.span() * CONTINUOUS_KEY_FRACTION
        } else {
            self.step
        };
        self.constrain(self.clamp(value) + f64::from(steps) * unit)
    }
}

/// Decimal places needed to write `x`, or `None` if it needs more than
/// [`MAX_DECIMALS`].
fn decimal_places(x: f64) -> Option<u32> {
    let mut scaled = x.abs();
    for places in 0..=MAX_DECIMALS {
        if (scaled - (scaled + 0.5).floor()).abs() <= scaled.max(1.0) * 1e-9 {
            return Some(places);
        }
        scaled *= 10.0;
    }
    None
}

/// Rounds `x` half-up to `places` decimal places.
fn round_to(x: f64, places: u32) -> f64 {
    let mut factor = 1.0;
    for _ in 0..places {
        factor *= 10.0;
    }
    let rounded = (x * factor + 0.5).floor() / factor;
    if rounded.is_finite() { rounded } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_malformed_bounds() {
        let r = RangeSpec::new(10.0, 5.0, -1.0);
        assert_eq!(r.min(), 10.0);
        assert_eq!(r.max(), 10.0);
        assert!(r.is_continuous());

        let r = RangeSpec::new(f64::NAN, f64::INFINITY, f64::NAN);
        assert_eq!((r.min(), r.max(), r.step()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn quantizes_relative_to_min() {
        let r = RangeSpec::new(1.0, 11.0, 2.0);
        assert_eq!(r.constrain(4.0), 5.0);
        assert_eq!(r.constrain(3.9), 3.0);
        assert_eq!(r.constrain(2.0), 3.0);
    }

    #[test]
    fn rounds_half_up() {
        let r = RangeSpec::new(-10.0, 10.0, 1.0);
        assert_eq!(r.constrain(2.5), 3.0);
        assert_eq!(r.constrain(-2.5), -2.0);
        assert_eq!(r.constrain(-2.51), -3.0);
    }

    #[test]
    fn clamps_after_rounding() {
        // 10 is 2.5 steps of 4, which rounds up to 12 and is pulled back.
        let r = RangeSpec::new(0.0, 10.0, 4.0);
        assert_eq!(r.constrain(10.0), 10.0);
        assert_eq!(r.constrain(50.0), 10.0);
        assert_eq!(r.constrain(-50.0), 0.0);
        assert_eq!(r.constrain(f64::NAN), 0.0);
    }

    #[test]
    fn continuous_ranges_do_not_round() {
        let r = RangeSpec::new(0.0, 20.0, 0.0);
        assert_eq!(r.constrain(7.25), 7.25);
        assert!((r.step_by(10.0, 1) - 10.2).abs() < 1e-12);
    }

    #[test]
    fn keyboard_steps() {
        let r = RangeSpec::new(0.0, 20.0, 1.0);
        assert_eq!(r.step_by(10.0, -1), 9.0);
        assert_eq!(r.step_by(10.0, 10), 20.0);
        assert_eq!(r.step_by(19.0, 5), 20.0);
        assert_eq!(r.step_by(0.0, -1), 0.0);
    }

    #[test]
    fn fraction_and_midpoint() {
        let r = RangeSpec::new(0.0, 20.0, 1.0);
        assert_eq!(r.midpoint(), 10.0);
        assert_eq!(r.fraction(5.0), 0.25);
        assert_eq!(r.value_at_fraction(0.5), 10.0);
        assert_eq!(RangeSpec::new(3.0, 3.0, 1.0).fraction(3.0), 0.0);
    }

    #[test]
    fn decimal_steps_stay_decimal() {
        let r = RangeSpec::new(0.0, 1.0, 0.1);
        let mut v = 0.2;
        for _ in 0..5 {
            v = r.step_by(v, 1);
        }
        assert_eq!(v, 0.7);
        assert_eq!(r.constrain(0.30000000000000004), 0.3);
        assert_eq!(r.value_at_fraction(0.7), 0.7);

        let r = RangeSpec::new(0.25, 2.0, 0.05);
        assert_eq!(r.constrain(0.25 + 3.0 * 0.05), 0.4);
    }

    #[test]
    fn counts_decimal_places() {
        assert_eq!(decimal_places(1.0), Some(0));
        assert_eq!(decimal_places(0.1), Some(1));
        assert_eq!(decimal_places(-0.25), Some(2));
        assert_eq!(decimal_places(1e-3), Some(3));
        assert_eq!(decimal_places(core::f64::consts::PI), None);
        assert_eq!(round_to(0.7000000000000001, 1), 0.7);
    }
}
