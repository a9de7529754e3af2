// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Navigator: roving-focus and active-descendant cursors.
//!
//! Composite widgets such as menus, listboxes, and comboboxes highlight one
//! child at a time. Keyboard focus (or `aria-activedescendant`) moves between
//! children with the arrow keys, wraps at the ends, and never lands on a
//! disabled child. This crate models that cursor without knowing anything
//! about the widget that hosts it:
//!
//! - [`Item`] is a single entry: an id, a display value, and `disabled` /
//!   `selected` flags.
//! - [`ListNavigator`] owns the ordered items plus an optional cursor and
//!   implements the movement rules ([`ListNavigator::next`],
//!   [`ListNavigator::previous`], [`ListNavigator::move_by`], pointer
//!   activation, and so on).
//! - [`Wrap`] selects whether movement cycles at the ends or stops there.
//!
//! ## Minimal example
//!
//! ```rust
//! use thicket_navigator::{Item, ListNavigator};
//!
//! let mut nav = ListNavigator::with_items([
//!     Item::new("a", "Apple"),
//!     Item::new("b", "Banana").with_disabled(true),
//!     Item::new("c", "Cherry"),
//! ]);
//!
//! // Nothing is active until the first movement.
//! assert_eq!(nav.active_id(), None);
//!
//! nav.next();
//! assert_eq!(nav.active_id(), Some(&"a"));
//!
//! // The disabled item is skipped…
//! nav.next();
//! assert_eq!(nav.active_id(), Some(&"c"));
//!
//! // …and movement wraps back to the start.
//! nav.next();
//! assert_eq!(nav.active_id(), Some(&"a"));
//!
//! assert_eq!(nav.select_at_cursor().map(|item| item.value.as_str()), Ok("Apple"));
//! ```
//!
//! ## Disabled items
//!
//! Keyboard movement skips disabled items. If every item is disabled a
//! movement is a no-op and the cursor keeps its previous value (which for a
//! fresh navigator means it stays unset). Pointer activation is exempt: the
//! pointer always lands on a concrete item, so
//! [`ListNavigator::activate_by_pointer`] does not skip.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod item;
mod navigator;

pub use error::NavError;
pub use item::Item;
pub use navigator::{ListNavigator, Wrap};
