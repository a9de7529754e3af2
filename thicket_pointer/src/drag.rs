// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for handle-style widgets.
//!
//! A drag starts when the primary button goes down over a draggable part of
//! a widget and lasts until the button is released or the press is
//! canceled. While it lasts, the widget holds pointer capture so that moves
//! outside its bounds are still delivered.
//!
//! ## Rules
//!
//! 1. **Primary button only**: presses with any other button are ignored
//!    (unless [`DragState::primary_only`] is turned off).
//! 2. **One drag at a time**: a new press replaces any drag in progress.
//! 3. **Moves**: reported only while dragging, and only for the dragging
//!    pointer when the move names one.
//! 4. **End**: a release or cancel from *any* pointer ends the drag, and
//!    that pointer is the one whose capture should be released.
//!
//! Pointer ids default to 1 when the host does not report one.

use core::num::NonZeroU64;
use kurbo::Point;

/// Pointer identifier used for capture.
pub type PointerId = NonZeroU64;

/// Mouse button identifier, using DOM numbering.
pub type Button = u8;

/// The primary (usually left) mouse button, also used by touch and pen.
pub const PRIMARY_BUTTON: Button = 0;

const DEFAULT_POINTER: PointerId = NonZeroU64::MIN;

/// An active drag.
#[derive(Clone, Debug, PartialEq)]
pub struct Drag<K> {
    /// Part of the widget the drag started on.
    pub target: K,
    /// Pointer holding capture for this drag.
    pub pointer_id: PointerId,
    /// Position of the initial press.
    pub down_position: Point,
    /// Most recently reported position.
    pub last_position: Point,
    /// Timestamp of the initial press, in milliseconds.
    pub down_time: u64,
}

impl<K> Drag<K> {
    /// Straight-line distance between the press and the latest position.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.down_position.distance(self.last_position)
    }
}

/// A finished drag, returned from [`DragState::on_up`] and [`DragState::on_cancel`].
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd<K> {
    /// Part of the widget the drag started on.
    pub target: K,
    /// Pointer whose capture should be released.
    pub release: PointerId,
    /// Position of the release, if the end was a release rather than a cancel.
    pub position: Option<Point>,
    /// Whether the drag was canceled rather than released.
    pub canceled: bool,
}

/// Drag state machine for a single widget.
#[derive(Clone, Debug)]
pub struct DragState<K> {
    active: Option<Drag<K>>,
    /// Ignore presses from buttons other than [`PRIMARY_BUTTON`].
    pub primary_only: bool,
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DragState<K> {
    /// Creates an idle drag state that only reacts to the primary button.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: None,
            primary_only: true,
        }
    }

    /// Records a pointer down event.
    ///
    /// # Arguments
    /// * `pointer_id` - Pointer identifier, defaults to 1 if None
    /// * `button` - Button that was pressed, defaults to [`PRIMARY_BUTTON`] if None
    /// * `target` - Part of the widget under the pointer
    /// * `position` - Pointer position at press time
    /// * `timestamp` - Event timestamp in milliseconds
    ///
    /// # Returns
    /// The pointer to capture if a drag started, `None` if the press was ignored.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        button: Option<Button>,
        target: K,
        position: Point,
        timestamp: u64,
    ) -> Option<PointerId> {
        let button = button.unwrap_or(PRIMARY_BUTTON);
        if self.primary_only && button != PRIMARY_BUTTON {
            tracing::trace!(button, "ignoring non-primary press");
            return None;
        }
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        self.active = Some(Drag {
            target,
            pointer_id,
            down_position: position,
            last_position: position,
            down_time: timestamp,
        });
        Some(pointer_id)
    }

    /// Records a pointer move.
    ///
    /// Returns the updated drag, or `None` if no drag is active or the move
    /// came from a different pointer.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<&Drag<K>> {
        let drag = self.active.as_mut()?;
        if pointer_id.is_some_and(|id| id != drag.pointer_id) {
            return None;
        }
        drag.last_position = position;
        Some(&*drag)
    }

    /// Records a pointer release, ending the active drag.
    pub fn on_up(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<DragEnd<K>> {
        let drag = self.active.take()?;
        Some(DragEnd {
            target: drag.target,
            release: pointer_id.unwrap_or(drag.pointer_id),
            position: Some(position),
            canceled: false,
        })
    }

    /// Records a pointer cancel, ending the active drag.
    pub fn on_cancel(&mut self, pointer_id: Option<PointerId>) -> Option<DragEnd<K>> {
        let drag = self.active.take()?;
        Some(DragEnd {
            target: drag.target,
            release: pointer_id.unwrap_or(drag.pointer_id),
            position: None,
            canceled: true,
        })
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The drag in progress, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&Drag<K>> {
        self.active.as_ref()
    }

    /// Drops any drag in progress without reporting an end.
    ///
    /// Returns the pointer that was captured, so the host can release it.
    pub fn clear(&mut self) -> Option<PointerId> {
        self.active.take().map(|drag| drag.pointer_id)
    }
}
