// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for pointer/value mapping.

use proptest::prelude::*;
use thicket_range::{RangeSpec, position_to_value, value_to_position};

fn step() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.01_f64..100.0, (1_u32..20).prop_map(f64::from)]
}

fn track_length() -> impl Strategy<Value = f64> {
    prop_oneof![1.0_f64..5_000.0, -5_000.0_f64..-1.0]
}

proptest! {
    #[test]
    fn never_leaves_range(
        min in -1.0e6_f64..1.0e6,
        span in 0.0_f64..1.0e6,
        step in step(),
        position in -1.0e7_f64..1.0e7,
        start in -1.0e4_f64..1.0e4,
        length in track_length(),
    ) {
        let max = min + span;
        let value = position_to_value(position, start, length, min, max, step);
        prop_assert!(value >= min && value <= max, "{value} outside [{min}, {max}]");
    }

    #[test]
    fn round_trips_within_half_a_step(
        min in -1.0e4_f64..1.0e4,
        span in 1.0_f64..1.0e4,
        step in step(),
        raw in -2.0e4_f64..2.0e4,
        start in -1.0e3_f64..1.0e3,
        length in track_length(),
    ) {
        let max = min + span;
        let value = RangeSpec::new(min, max, step).constrain(raw);
        let position = value_to_position(value, start, length, min, max);
        let back = position_to_value(position, start, length, min, max, step);
        let tolerance = step / 2.0 + 1.0e-9 * (span + min.abs());
        prop_assert!(
            (back - value).abs() <= tolerance,
            "{value} -> {position} -> {back} (tolerance {tolerance})"
        );
    }

    #[test]
    fn quantized_values_sit_on_the_grid_or_a_bound(
        min in -100.0_f64..100.0,
        span in 1.0_f64..500.0,
        step in 0.5_f64..10.0,
        raw in -1_000.0_f64..1_000.0,
    ) {
        let spec = RangeSpec::new(min, min + span, step);
        let value = spec.constrain(raw);
        let steps = (value - min) / step;
        let on_grid = (steps - steps.round()).abs() < 1.0e-6;
        prop_assert!(on_grid || value == spec.max() || value == spec.min());
    }

    #[test]
    fn decimal_steps_render_without_float_noise(
        units in 1_u32..50,
        places in 1_i32..4,
        min_units in -1_000_i32..1_000,
        span_steps in 1_u32..200,
        raw in -1.0e4_f64..1.0e4,
    ) {
        let scale = 10.0_f64.powi(places);
        let step = f64::from(units) / scale;
        let min = f64::from(min_units) / scale;
        let spec = RangeSpec::new(min, min + f64::from(span_steps) * step, step);
        let value = spec.constrain(raw);
        prop_assume!(value != spec.max());
        let text = value.to_string();
        let decimals = text.split('.').nth(1).map_or(0, str::len);
        prop_assert!(
            decimals <= places.unsigned_abs() as usize,
            "{value} rendered with {decimals} decimals for step {step}"
        );
    }
}

#[test]
fn half_way_on_a_twenty_step_slider_is_ten() {
    assert_eq!(position_to_value(0.5, 0.0, 1.0, 0.0, 20.0, 1.0), 10.0);
}
