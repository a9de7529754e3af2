// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events consumed by widget reducers.
//!
//! Hosts translate their native events (DOM events, winit events, terminal
//! key presses, …) into [`InputEvent`] values and hand them to
//! [`Router::dispatch`](crate::Router::dispatch). Every widget accepts the
//! same event type and ignores variants that do not apply to it.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use thicket_navigator::Item;
use thicket_pointer::{Button, PointerId};

/// Keys that widgets react to, named after DOM `KeyboardEvent.code` values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `PageUp`.
    PageUp,
    /// `PageDown`.
    PageDown,
    /// `Enter` or `NumpadEnter`.
    Enter,
    /// `Space`.
    Space,
    /// `Escape`.
    Escape,
    /// `Tab`.
    Tab,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.code` string to a [`Key`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Enter" | "NumpadEnter" => Self::Enter,
            "Space" => Self::Space,
            "Escape" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

/// Part of a widget a pointer event landed on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Part {
    /// The draggable handle.
    Handle,
    /// The track (or the controls container around it).
    Track,
    /// Anything else.
    #[default]
    Other,
}

/// Payload shared by pointer down/move/up events.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer identifier; hosts that do not track pointers pass `None`.
    pub pointer_id: Option<PointerId>,
    /// Button, using DOM numbering; `None` means primary.
    pub button: Option<Button>,
    /// Position in the same coordinate space as the widget's track.
    pub position: Point,
    /// Part of the widget under the pointer.
    pub part: Part,
    /// Event timestamp in milliseconds.
    pub timestamp: u64,
}

impl PointerInput {
    /// Primary-button input at `position` over `part`.
    #[must_use]
    pub fn at(position: Point, part: Part) -> Self {
        Self {
            pointer_id: None,
            button: None,
            position,
            part,
            timestamp: 0,
        }
    }

    /// Returns this input with the given pointer id.
    #[must_use]
    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }

    /// Returns this input with the given button.
    #[must_use]
    pub fn with_button(mut self, button: Button) -> Self {
        self.button = Some(button);
        self
    }
}

/// An input event, generic over the item id type `K`.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent<K> {
    /// A key went down.
    KeyDown {
        /// Which key.
        key: Key,
        /// Modifiers held at the time.
        modifiers: Modifiers,
    },
    /// A pointer button went down.
    PointerDown(PointerInput),
    /// A pointer moved.
    PointerMove(PointerInput),
    /// A pointer button was released.
    PointerUp(PointerInput),
    /// The platform canceled a pointer interaction.
    PointerCancel {
        /// Pointer identifier, if known.
        pointer_id: Option<PointerId>,
    },
    /// The pointer entered an item.
    PointerEnter(K),
    /// The pointer left the item list.
    PointerLeave,
    /// An item was clicked (or activated from the keyboard by the host).
    ItemClick(K),
    /// The open/closed toggle (trigger button, or a click in the text field) was pressed.
    Toggle,
    /// The text (or native range input) value changed.
    TextInput(String),
    /// Focus moved into the widget. `active` names the item that received
    /// focus, if focus landed on an item rather than the container.
    FocusIn {
        /// Item that received focus.
        active: Option<K>,
    },
    /// Focus left the widget.
    FocusOut,
    /// Focus moved somewhere outside the widget and its popup.
    FocusLost,
    /// The set of child items changed.
    ItemsChanged(Vec<Item<K>>),
    /// The `value` property was set programmatically.
    SetValue(f64),
    /// An attribute was set (`Some`) or removed (`None`).
    Attribute {
        /// Attribute name.
        name: String,
        /// New value.
        value: Option<String>,
    },
    /// The widget's track was laid out at new bounds.
    Resize(Rect),
}

impl<K> InputEvent<K> {
    /// A key press without modifiers.
    #[must_use]
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// An attribute being set.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// An attribute being removed.
    pub fn remove_attribute(name: impl Into<String>) -> Self {
        Self::Attribute {
            name: name.into(),
            value: None,
        }
    }
}
