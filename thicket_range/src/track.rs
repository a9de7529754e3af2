// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::RangeSpec;

/// Orientation of a slider track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Values grow left to right.
    #[default]
    Horizontal,
    /// Values grow bottom to top.
    Vertical,
}

/// A one-dimensional track that pointer coordinates are projected onto.
///
/// `start` is the coordinate that maps to `min`, and `start + length` the
/// coordinate that maps to `max`. A negative `length` describes a track that
/// grows toward smaller coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Track {
    /// Axis that pointer positions are read from.
    pub axis: Axis,
    /// Coordinate of the `min` end.
    pub start: f64,
    /// Signed distance from the `min` end to the `max` end.
    pub length: f64,
}

impl Track {
    /// Creates a horizontal track.
    #[must_use]
    pub const fn new(start: f64, length: f64) -> Self {
        Self {
            axis: Axis::Horizontal,
            start,
            length,
        }
    }

    /// Derives a track from the bounds of the track element.
    ///
    /// Horizontal tracks run from the left edge to the right edge; vertical
    /// tracks run from the bottom edge up to the top edge.
    #[must_use]
    pub fn from_rect(rect: Rect, axis: Axis) -> Self {
        let rect = rect.abs();
        match axis {
            Axis::Horizontal => Self {
                axis,
                start: rect.x0,
                length: rect.width(),
            },
            Axis::Vertical => Self {
                axis,
                start: rect.y1,
                length: -rect.height(),
            },
        }
    }

    /// Returns `true` if positions cannot be mapped onto this track.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0 || !self.length.is_finite() || !self.start.is_finite()
    }

    /// The coordinate of `point` along this track's axis.
    #[must_use]
    pub fn coordinate(&self, point: Point) -> f64 {
        match self.axis {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Fraction of the way along the track, unclamped.
    #[must_use]
    pub fn fraction_at(&self, position: f64) -> f64 {
        if self.is_degenerate() || !position.is_finite() {
            return 0.0;
        }
        (position - self.start) / self.length
    }

    /// Maps a coordinate to a constrained value in `spec`.
    #[must_use]
    pub fn value_at(&self, spec: &RangeSpec, position: f64) -> f64 {
        spec.value_at_fraction(self.fraction_at(position))
    }

    /// Maps a value in `spec` to a coordinate on this track.
    #[must_use]
    pub fn position_of(&self, spec: &RangeSpec, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.start;
        }
        self.start + spec.fraction(value) * self.length
    }
}

/// A [`RangeSpec`] paired with the [`Track`] it is laid out on.
///
/// This is what a slider consults when turning pointer events into values and
/// values into handle positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueMapper {
    /// Range constraints.
    pub spec: RangeSpec,
    /// Track geometry.
    pub track: Track,
}

impl ValueMapper {
    /// Creates a mapper.
    #[must_use]
    pub const fn new(spec: RangeSpec, track: Track) -> Self {
        Self { spec, track }
    }

    /// Value under a pointer at `point`.
    #[must_use]
    pub fn value_at_point(&self, point: Point) -> f64 {
        self.track.value_at(&self.spec, self.track.coordinate(point))
    }

    /// Value under a pointer at `position` along the track's axis.
    #[must_use]
    pub fn value_at(&self, position: f64) -> f64 {
        self.track.value_at(&self.spec, position)
    }

    /// Coordinate of the handle for `value`.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        self.track.position_of(&self.spec, value)
    }

    /// Fraction in `[0, 1]` used to lay out the handle and fill, for example
    /// as a CSS percentage.
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        self.spec.fraction(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_track_from_rect() {
        let track = Track::from_rect(Rect::new(8.0, 0.0, 508.0, 20.0), Axis::Horizontal);
        assert_eq!(track.start, 8.0);
        assert_eq!(track.length, 500.0);

        let spec = RangeSpec::new(0.0, 20.0, 0.0);
        let mapper = ValueMapper::new(spec, track);
        assert_eq!(mapper.value_at_point(Point::new(208.0, 10.0)), 8.0);
        assert_eq!(mapper.value_at_point(Point::new(133.0, 10.0)), 5.0);
        assert_eq!(mapper.position_of(5.0), 133.0);
    }

    #[test]
    fn vertical_track_grows_upward() {
        let track = Track::from_rect(Rect::new(0.0, 0.0, 10.0, 100.0), Axis::Vertical);
        let mapper = ValueMapper::new(RangeSpec::new(0.0, 10.0, 1.0), track);
        assert_eq!(mapper.value_at_point(Point::new(5.0, 100.0)), 0.0);
        assert_eq!(mapper.value_at_point(Point::new(5.0, 0.0)), 10.0);
        assert_eq!(mapper.value_at_point(Point::new(5.0, 30.0)), 7.0);
        assert_eq!(mapper.position_of(10.0), 0.0);
    }

    #[test]
    fn degenerate_track_maps_to_min() {
        let spec = RangeSpec::new(2.0, 20.0, 1.0);
        let track = Track::new(10.0, 0.0);
        assert_eq!(track.value_at(&spec, 15.0), 2.0);
        assert_eq!(track.position_of(&spec, 15.0), 10.0);
        assert_eq!(Track::new(0.0, 10.0).value_at(&spec, f64::NAN), 2.0);
    }

    #[test]
    fn handle_fraction() {
        let mapper = ValueMapper::new(RangeSpec::new(-100.0, 100.0, 1.0), Track::new(0.0, 200.0));
        assert_eq!(mapper.fraction_of(0.0), 0.5);
        assert_eq!(mapper.fraction_of(500.0), 1.0);
    }
}
