// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start → stream → end pointer streams.
//!
//! Many pointer interactions are a bracketed stream: a start event
//! (`pointerdown`), any number of stream events (`pointermove`), and an end
//! event (`pointerup` / `pointercancel`). Hosts usually only want stream
//! events delivered to the "inside" handler while the stream is on, and to an
//! optional "outside" handler (for hover effects) otherwise.
//!
//! [`PointerStream`] tracks that bracket and classifies each incoming
//! [`StreamEvent`] into a [`Delivery`]:
//!
//! ```
//! use thicket_pointer::stream::{Delivery, PointerStream, StreamEvent};
//!
//! let mut stream = PointerStream::new();
//! assert_eq!(stream.classify(StreamEvent::Stream), Delivery::Outside);
//!
//! // A start whose default was prevented does not open the stream.
//! assert_eq!(stream.start(true), Delivery::Start);
//! assert!(!stream.is_on());
//!
//! assert_eq!(stream.start(false), Delivery::Start);
//! assert_eq!(stream.classify(StreamEvent::Stream), Delivery::Inside);
//! assert_eq!(stream.classify(StreamEvent::End), Delivery::End);
//! assert!(!stream.is_on());
//! ```
//!
//! Disconnecting a stream drops every event until it is reconnected; the
//! on/off state survives the round trip.

/// Kind of an incoming pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StreamEvent {
    /// Opens the stream, for example `pointerdown`.
    Start,
    /// Arrives between start and end, for example `pointermove`.
    Stream,
    /// Closes the stream, for example `pointerup` or `pointercancel`.
    End,
}

/// Which handler an event should be delivered to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// Run the start handler.
    Start,
    /// Run the in-stream handler.
    Inside,
    /// Run the out-of-stream handler.
    Outside,
    /// Run the end handler.
    End,
    /// No handler is listening for this event.
    Dropped,
}

/// Whether a stream is currently open.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// Waiting for a start event.
    #[default]
    Off,
    /// Between a start and an end event.
    On,
}

/// Start/stream/end state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerStream {
    state: StreamState,
    connected: bool,
}

impl Default for PointerStream {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerStream {
    /// Creates a connected stream in the [`StreamState::Off`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: StreamState::Off,
            connected: true,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> StreamState {
        self.state
    }

    /// Returns `true` while the stream is open.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self.state, StreamState::On)
    }

    /// Returns `true` unless the stream has been disconnected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Handles a start event.
    ///
    /// The start handler runs first; if it prevented the default action the
    /// stream stays off. Start events while the stream is already on are
    /// dropped.
    pub fn start(&mut self, default_prevented: bool) -> Delivery {
        if !self.connected || self.is_on() {
            return Delivery::Dropped;
        }
        if !default_prevented {
            self.state = StreamState::On;
        }
        Delivery::Start
    }

    /// Handles an end event. Ends while the stream is off are dropped.
    pub fn end(&mut self) -> Delivery {
        if !self.connected || !self.is_on() {
            return Delivery::Dropped;
        }
        self.state = StreamState::Off;
        Delivery::End
    }

    /// Classifies an event, updating the state for start and end events.
    ///
    /// Start events are treated as not default-prevented.
    pub fn classify(&mut self, event: StreamEvent) -> Delivery {
        match event {
            StreamEvent::Start => self.start(false),
            StreamEvent::End => self.end(),
            StreamEvent::Stream if !self.connected => Delivery::Dropped,
            StreamEvent::Stream if self.is_on() => Delivery::Inside,
            StreamEvent::Stream => Delivery::Outside,
        }
    }

    /// Stops delivering events, keeping the current state.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Resumes delivering events from the state held at disconnect.
    pub fn reconnect(&mut self) {
        self.connected = true;
    }

    /// Forces the stream off without delivering an end event.
    pub fn reset(&mut self) {
        self.state = StreamState::Off;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stream_end() {
        let mut s = PointerStream::new();
        assert_eq!(s.classify(StreamEvent::End), Delivery::Dropped);
        assert_eq!(s.classify(StreamEvent::Start), Delivery::Start);
        assert_eq!(s.classify(StreamEvent::Start), Delivery::Dropped);
        assert_eq!(s.classify(StreamEvent::Stream), Delivery::Inside);
        assert_eq!(s.classify(StreamEvent::End), Delivery::End);
        assert_eq!(s.classify(StreamEvent::Stream), Delivery::Outside);
    }

    #[test]
    fn prevented_start_keeps_stream_off() {
        let mut s = PointerStream::new();
        assert_eq!(s.start(true), Delivery::Start);
        assert_eq!(s.state(), StreamState::Off);
        assert_eq!(s.classify(StreamEvent::Stream), Delivery::Outside);
    }

    #[test]
    fn disconnected_streams_drop_everything() {
        let mut s = PointerStream::new();
        s.start(false);
        s.disconnect();
        assert_eq!(s.classify(StreamEvent::Stream), Delivery::Dropped);
        assert_eq!(s.classify(StreamEvent::End), Delivery::Dropped);
        assert!(s.is_on());

        s.reconnect();
        assert_eq!(s.classify(StreamEvent::Stream), Delivery::Inside);
    }

    #[test]
    fn reset_closes_silently() {
        let mut s = PointerStream::new();
        s.start(false);
        s.reset();
        assert!(!s.is_on());
        assert_eq!(s.end(), Delivery::Dropped);
    }
}
