// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::{Aria, Effects, InputEvent, Transition};

/// Coarse interaction phase of a widget.
///
/// `Closed` is both the initial state and the state each interaction cycle
/// returns to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Idle: popup closed, nothing highlighted, no drag.
    #[default]
    Closed,
    /// Popup open (or keyboard listening) with nothing highlighted.
    OpenIdle,
    /// Popup open with an active descendant.
    OpenNavigating,
    /// A pointer drag is in progress.
    Dragging,
}

/// A widget state record with a pure reducer.
///
/// Reducers consume the previous state and return the next one, so a state
/// value is never observed half-updated. The host (or a [`Router`](crate::Router))
/// owns the current value and treats rendering as a subscriber.
pub trait Widget: Default {
    /// Identifier of the widget's items.
    type Id: Clone + PartialEq + fmt::Debug;

    /// Applies one event.
    fn reduce(self, event: &InputEvent<Self::Id>) -> Transition<Self, Self::Id>;

    /// ARIA attributes for the current state.
    fn aria(&self) -> Aria<Self::Id>;

    /// Current interaction phase.
    fn phase(&self) -> Phase;

    /// Tears down in-flight interactions when the widget leaves the tree.
    ///
    /// The default does nothing.
    fn disconnect(self) -> Transition<Self, Self::Id> {
        Transition::new(self, Effects::new())
    }

    /// Resumes after [`disconnect`](Self::disconnect).
    ///
    /// The default returns the state unchanged.
    #[must_use]
    fn reconnect(self) -> Self {
        self
    }
}
