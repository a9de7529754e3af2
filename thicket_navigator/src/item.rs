// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// A single selectable entry in a [`ListNavigator`](crate::ListNavigator).
///
/// The host owns the lifetime of items: they are created and destroyed as
/// children are added to or removed from the container, and pushed into the
/// navigator accordingly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<K> {
    /// Identifier for this item, unique within its list.
    ///
    /// This is what a host reflects into `aria-activedescendant`.
    pub id: K,
    /// Display value.
    ///
    /// Comboboxes commit this string into their text field and filter on it.
    pub value: String,
    /// Whether keyboard navigation should skip this item.
    pub disabled: bool,
    /// Whether this item is currently selected (committed).
    pub selected: bool,
}

impl<K> Item<K> {
    /// Creates an enabled, unselected item.
    pub fn new(id: K, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            disabled: false,
            selected: false,
        }
    }

    /// Returns this item with its `disabled` flag set to `disabled`.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns this item with its `selected` flag set to `selected`.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Returns `true` if keyboard navigation may land on this item.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
