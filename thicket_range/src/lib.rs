// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Range: stepped numeric ranges and pointer-track mapping.
//!
//! Slider-like widgets need two small pieces of arithmetic:
//!
//! - Constraining a value to `[min, max]` and to the nearest multiple of a
//!   `step` (see [`RangeSpec`]).
//! - Mapping between a pointer coordinate on a track and a value, and back
//!   again to place the handle (see [`position_to_value`],
//!   [`value_to_position`], and [`ValueMapper`]).
//!
//! ## Semantics
//!
//! - Values are quantized relative to `min`: the representable values are
//!   `min`, `min + step`, `min + 2 * step`, … A `step` of zero means the
//!   range is continuous.
//! - Rounding is round-half-up (`floor(x + 0.5)`), so `2.5` steps round to
//!   `3` and `-2.5` steps round to `-2`.
//! - Clamping happens *after* rounding: a value that rounds just past `max`
//!   is pulled back to `max` even if `max` is not itself on the step grid.
//! - Malformed configuration degrades instead of failing: `max < min`
//!   collapses the range to `min`, and negative or non-finite steps are
//!   treated as continuous.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_range::{position_to_value, value_to_position};
//!
//! // A 0..=20 slider with unit steps on a track from x = 0 to x = 100.
//! assert_eq!(position_to_value(50.0, 0.0, 100.0, 0.0, 20.0, 1.0), 10.0);
//! // Pointer positions outside the track clamp to the range.
//! assert_eq!(position_to_value(-30.0, 0.0, 100.0, 0.0, 20.0, 1.0), 0.0);
//! assert_eq!(position_to_value(130.0, 0.0, 100.0, 0.0, 20.0, 1.0), 20.0);
//!
//! // The inverse places the handle for a value.
//! assert_eq!(value_to_position(5.0, 0.0, 100.0, 0.0, 20.0), 25.0);
//! ```
//!
//! Geometry uses [`kurbo`], matching the rest of the Thicket crates; a
//! [`Track`] can be derived directly from the track's [`kurbo::Rect`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

mod spec;
mod track;

pub use spec::RangeSpec;
pub use track::{Axis, Track, ValueMapper};

/// Maps a pointer `position` on a track to a value in `[min, max]`.
///
/// The position is linearly interpolated into the range, rounded to the
/// nearest `step` (unless `step` is zero) and then clamped.
///
/// A zero or non-finite `track_length`, or a non-finite `position`, yields
/// `min`.
#[must_use]
pub fn position_to_value(
    position: f64,
    track_start: f64,
    track_length: f64,
    min: f64,
    max: f64,
    step: f64,
) -> f64 {
    let spec = RangeSpec::new(min, max, step);
    Track::new(track_start, track_length).value_at(&spec, position)
}

/// Maps a value in `[min, max]` to a position on a track.
///
/// This is the inverse of [`position_to_value`] for values already on the
/// step grid; values outside the range are clamped first so the handle never
/// leaves the track.
#[must_use]
pub fn value_to_position(
    value: f64,
    track_start: f64,
    track_length: f64,
    min: f64,
    max: f64,
) -> f64 {
    let spec = RangeSpec::new(min, max, 0.0);
    Track::new(track_start, track_length).position_of(&spec, value)
}
