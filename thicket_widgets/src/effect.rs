// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects requested by reducers.

use smallvec::SmallVec;
use thicket_pointer::PointerId;

/// Something the host should do in response to an event.
///
/// Reducers never touch the host directly; they describe side effects and
/// leave executing them to whoever owns the real element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<K> {
    /// Derived state changed; schedule a render.
    RequestRender,
    /// Call `preventDefault()` on the native event.
    PreventDefault,
    /// Fire an `input` event.
    EmitInput,
    /// Fire a `change` event.
    EmitChange,
    /// Capture the pointer on the widget.
    SetPointerCapture(PointerId),
    /// Release a previously captured pointer.
    ReleasePointerCapture(PointerId),
    /// Scroll an item into view (nearest block).
    ScrollIntoView(K),
    /// Activate (click) an item.
    ActivateItem(K),
    /// Move the text caret / selection in the text field, in characters.
    SetSelectionRange {
        /// Selection start.
        start: usize,
        /// Selection end.
        end: usize,
    },
    /// Move keyboard focus into the widget's focusable element.
    Focus,
}

/// Effects produced by one event. Most events produce at most a handful.
pub type Effects<K> = SmallVec<[Effect<K>; 4]>;

/// The result of reducing one event: the next state and its effects.
#[derive(Clone, Debug)]
pub struct Transition<S, K> {
    /// Next state.
    pub state: S,
    /// Effects to run, in order.
    pub effects: Effects<K>,
}

impl<S, K> Transition<S, K> {
    /// A transition with the given effects.
    pub fn new(state: S, effects: Effects<K>) -> Self {
        Self { state, effects }
    }

    /// A transition that changes nothing observable.
    pub fn unchanged(state: S) -> Self {
        Self {
            state,
            effects: Effects::new(),
        }
    }

    /// Returns `true` if the effects include [`Effect::RequestRender`].
    pub fn wants_render(&self) -> bool
    where
        K: PartialEq,
    {
        self.effects.contains(&Effect::RequestRender)
    }
}
