// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Pointer: drag tracking and pointer streams.
//!
//! Two small state machines that slider-like widgets combine:
//!
//! - [`drag::DragState`] remembers which element a primary-button press
//!   started on, which pointer to capture, and where the pointer has moved
//!   since, until the press ends or is canceled.
//! - [`stream::PointerStream`] is the start → stream → end listener
//!   pattern: a start event switches the stream on (unless its default
//!   action was prevented), stream events are classified as inside or
//!   outside an active stream, and an end event switches it off again.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use thicket_pointer::drag::DragState;
//!
//! let mut drag: DragState<&str> = DragState::new();
//!
//! // A primary-button press on the handle starts a drag and names the
//! // pointer to capture.
//! let capture = drag.on_down(None, Some(0), "handle", Point::new(10.0, 5.0), 0);
//! assert!(capture.is_some());
//!
//! // Moves report the latest position while dragging.
//! let moved = drag.on_move(None, Point::new(40.0, 5.0));
//! assert_eq!(moved.map(|d| d.last_position.x), Some(40.0));
//!
//! // Releasing ends the drag and names the pointer to release.
//! let end = drag.on_up(capture, Point::new(40.0, 5.0));
//! assert_eq!(end.map(|e| e.target), Some("handle"));
//! assert!(!drag.is_dragging());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod stream;

pub use drag::{Button, PRIMARY_BUTTON, PointerId};
