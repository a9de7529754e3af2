// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns a widget state record and batches renders.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::{Aria, Effect, Effects, InputEvent, Phase, Widget};

type Subscriber<W> = Box<dyn FnMut(&W, &Aria<<W as Widget>::Id>)>;

/// Routes input events through a widget's reducer.
///
/// This type:
/// - owns the current state record and replaces it on every event,
/// - marks itself dirty when a reducer requests a render,
/// - notifies subscribers once per [`flush`](Self::flush), however many
///   events arrived since the last one.
///
/// Between a dispatch and the next flush, subscribers have not yet seen the
/// new state. Hosts that need to observe a settled render check
/// [`update_complete`](Self::update_complete) or flush explicitly.
pub struct Router<W: Widget> {
    state: W,
    subscribers: Vec<Subscriber<W>>,
    dirty: bool,
    connected: bool,
    renders: u64,
}

impl<W: Widget + fmt::Debug> fmt::Debug for Router<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("dirty", &self.dirty)
            .field("connected", &self.connected)
            .field("renders", &self.renders)
            .finish()
    }
}

impl<W: Widget> Default for Router<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W: Widget> Router<W> {
    /// Creates a connected router around `state`. The first render is pending.
    #[must_use]
    pub fn new(state: W) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            dirty: true,
            connected: true,
            renders: 0,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &W {
        &self.state
    }

    /// Returns the current ARIA attributes.
    #[must_use]
    pub fn aria(&self) -> Aria<W::Id> {
        self.state.aria()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Number of completed renders.
    #[must_use]
    pub const fn renders(&self) -> u64 {
        self.renders
    }

    /// Returns `true` while the router is connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns `true` if no render is pending.
    #[must_use]
    pub const fn update_complete(&self) -> bool {
        !self.dirty
    }

    /// Registers a render subscriber.
    ///
    /// Subscribers run on every [`flush`](Self::flush) that has a render pending.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&W, &Aria<W::Id>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `event` and returns the effects the host should run.
    ///
    /// Events dispatched while disconnected are dropped.
    pub fn dispatch(&mut self, event: &InputEvent<W::Id>) -> Effects<W::Id> {
        if !self.connected {
            tracing::trace!("dropping event on disconnected widget");
            return Effects::new();
        }
        let before = self.state.phase();
        let transition = mem::take(&mut self.state).reduce(event);
        self.state = transition.state;
        let after = self.state.phase();
        if before != after {
            tracing::trace!(?before, ?after, "phase change");
        }
        if transition.effects.contains(&Effect::RequestRender) {
            self.dirty = true;
        }
        transition.effects
    }

    /// Applies several events in order and concatenates their effects.
    pub fn dispatch_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent<W::Id>>,
    ) -> Effects<W::Id>
    where
        W::Id: 'a,
    {
        let mut effects = Effects::new();
        for event in events {
            effects.extend(self.dispatch(event));
        }
        effects
    }

    /// Runs the pending render, if any.
    ///
    /// Returns `true` if subscribers were notified.
    pub fn flush(&mut self) -> bool {
        if !self.dirty || !self.connected {
            return false;
        }
        self.dirty = false;
        self.renders += 1;
        let aria = self.state.aria();
        for subscriber in &mut self.subscribers {
            subscriber(&self.state, &aria);
        }
        true
    }

    /// Detaches the widget: tears down in-flight interactions, drops
    /// subscribers, and ignores further events until [`reconnect`](Self::reconnect).
    ///
    /// Returns the teardown effects (for example releasing pointer capture).
    pub fn disconnect(&mut self) -> Effects<W::Id> {
        if !self.connected {
            return Effects::new();
        }
        let transition = mem::take(&mut self.state).disconnect();
        self.state = transition.state;
        self.subscribers.clear();
        self.connected = false;
        self.dirty = false;
        transition.effects
    }

    /// Reattaches a disconnected widget. A render is scheduled.
    pub fn reconnect(&mut self) {
        if !self.connected {
            self.state = mem::take(&mut self.state).reconnect();
            self.connected = true;
            self.dirty = true;
        }
    }

    /// Consumes the router, returning the state.
    #[must_use]
    pub fn into_state(self) -> W {
        self.state
    }
}
