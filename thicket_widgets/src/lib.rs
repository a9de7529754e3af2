// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Widgets: headless menu, combobox, and slider state.
//!
//! Each widget is a plain state record with a pure reducer. The host turns
//! its native events into [`InputEvent`]s, feeds them through
//! [`Widget::reduce`], runs the returned [`Effect`]s (prevent default,
//! capture the pointer, fire `input`/`change`, scroll an item into view, …),
//! and reflects [`Widget::aria`] onto its elements when it renders.
//!
//! - [`Menu`]: a roving cursor over menu items or listbox options, with
//!   role negotiation through [`role::query_role`].
//! - [`Combobox`]: an editable field whose popup filters options by prefix.
//! - [`Slider`]: a stepped value driven by the keyboard or a pointer drag.
//! - [`Router`]: owns one widget, batches render requests, and notifies
//!   subscribers once per [`Router::flush`].
//!
//! Widgets never fail. Malformed configuration falls back to defaults
//! (see [`config`]) and events that do not apply are ignored.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use thicket_range::Track;
//! use thicket_widgets::{Effect, InputEvent, Key, Part, PointerInput, Router, Slider};
//!
//! let slider = Slider::default().with_track(Track::new(0.0, 200.0));
//! let mut router = Router::new(slider);
//!
//! let effects = router.dispatch(&InputEvent::key(Key::ArrowRight));
//! assert!(effects.contains(&Effect::EmitChange));
//! assert_eq!(router.state().value(), 11.0);
//!
//! // Renders are batched until the host flushes.
//! router.dispatch(&InputEvent::PointerDown(PointerInput::at(
//!     Point::new(50.0, 0.0),
//!     Part::Track,
//! )));
//! assert!(!router.update_complete());
//! assert!(router.flush());
//! assert!(router.update_complete());
//! assert_eq!(router.aria().value_range, Some((0.0, 20.0, 5.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration records.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aria;
pub mod config;
pub mod effect;
pub mod event;
pub mod role;
pub mod router;

mod combobox;
mod menu;
mod slider;
mod widget;

pub use aria::{Aria, Role};
pub use combobox::Combobox;
pub use effect::{Effect, Effects, Transition};
pub use event::{InputEvent, Key, Modifiers, Part, PointerInput};
pub use menu::Menu;
pub use router::Router;
pub use slider::{Slider, ValueText};
pub use widget::{Phase, Widget};

pub use thicket_navigator::Item;
