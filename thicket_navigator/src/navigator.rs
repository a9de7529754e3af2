// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`ListNavigator`] cursor and its movement rules.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::{Item, NavError};

/// Behavior when movement runs past either end of the list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Wrap {
    /// Wrap from the last item to the first and vice versa.
    #[default]
    Cycle,
    /// Stop at the first/last enabled item.
    Clamp,
}

/// An ordered list of [`Item`]s with an optional cursor.
///
/// The cursor is the "active descendant": the highlighted, not yet
/// committed, item. After any movement completes the cursor never rests on a
/// disabled item, unless every item is disabled, in which case movement is a
/// no-op.
#[derive(Clone, Debug)]
pub struct ListNavigator<K> {
    items: Vec<Item<K>>,
    positions: HashMap<K, usize>,
    cursor: Option<usize>,
    wrap: Wrap,
}

impl<K> Default for ListNavigator<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ListNavigator<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty navigator with [`Wrap::Cycle`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
            cursor: None,
            wrap: Wrap::Cycle,
        }
    }

    /// Creates a navigator over `items` with an unset cursor.
    pub fn with_items(items: impl IntoIterator<Item = Item<K>>) -> Self {
        let mut nav = Self::new();
        nav.set_items(items);
        nav
    }

    /// Returns this navigator using the given wrap behavior.
    #[must_use]
    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Returns the wrap behavior.
    #[must_use]
    pub const fn wrap(&self) -> Wrap {
        self.wrap
    }

    /// All items, in order.
    #[must_use]
    pub fn items(&self) -> &[Item<K>] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item under the cursor.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The item under the cursor.
    #[must_use]
    pub fn active(&self) -> Option<&Item<K>> {
        self.cursor.and_then(|i| self.items.get(i))
    }

    /// Id of the item under the cursor.
    #[must_use]
    pub fn active_id(&self) -> Option<&K> {
        self.active().map(|item| &item.id)
    }

    /// Index of the item with the given id.
    #[must_use]
    pub fn position(&self, id: &K) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// The item with the given id.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Item<K>> {
        self.position(id).and_then(|i| self.items.get(i))
    }

    /// Returns `true` if at least one item can receive keyboard movement.
    #[must_use]
    pub fn has_enabled(&self) -> bool {
        self.items.iter().any(Item::is_enabled)
    }

    /// Replaces all items.
    ///
    /// The cursor follows the id it pointed at if that id survives, and is
    /// unset otherwise. Later duplicates of an id replace earlier ones.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = Item<K>>) {
        let active = self.active_id().cloned();
        self.items.clear();
        self.positions.clear();
        for item in items {
            self.insert_or_replace(item);
        }
        self.cursor = active.and_then(|id| self.position(&id));
    }

    /// Appends an item, or replaces the existing item with the same id in place.
    ///
    /// Returns the item's index.
    pub fn push(&mut self, item: Item<K>) -> usize {
        self.insert_or_replace(item)
    }

    /// Removes the item with the given id.
    ///
    /// If the cursor pointed at it, the cursor is unset; otherwise the cursor
    /// keeps pointing at the same item.
    pub fn remove(&mut self, id: &K) -> Option<Item<K>> {
        let index = self.positions.remove(id)?;
        let removed = self.items.remove(index);
        for (i, item) in self.items.iter().enumerate().skip(index) {
            self.positions.insert(item.id.clone(), i);
        }
        self.cursor = match self.cursor {
            Some(c) if c == index => None,
            Some(c) if c > index => Some(c - 1),
            other => other,
        };
        Some(removed)
    }

    /// Sets the `disabled` flag of an item. Returns `false` for unknown ids.
    ///
    /// Disabling the active item does not move the cursor; the next movement
    /// will skip it.
    pub fn set_disabled(&mut self, id: &K, disabled: bool) -> bool {
        self.update(id, |item| item.disabled = disabled)
    }

    /// Sets the `selected` flag of an item. Returns `false` for unknown ids.
    pub fn set_selected(&mut self, id: &K, selected: bool) -> bool {
        self.update(id, |item| item.selected = selected)
    }

    /// Moves the cursor one item forward, skipping disabled items.
    ///
    /// From an unset cursor this lands on the first enabled item.
    pub fn next(&mut self) -> Option<usize> {
        self.move_by(1)
    }

    /// Moves the cursor one item backward, skipping disabled items.
    ///
    /// From an unset cursor this lands on the last enabled item.
    pub fn previous(&mut self) -> Option<usize> {
        self.move_by(-1)
    }

    /// Moves the cursor by `offset` positions, then keeps going in the
    /// direction of `offset` until it reaches an enabled item.
    ///
    /// An `offset` of zero re-focuses the current item, scanning forward if
    /// it is disabled. An unset cursor behaves as if it sat just before the
    /// first item (positive offsets), just after the last item (negative
    /// offsets), or on the first item (zero).
    ///
    /// Returns the cursor after the move. When the list is empty or every
    /// item is disabled the cursor is left unchanged.
    pub fn move_by(&mut self, offset: isize) -> Option<usize> {
        if self.items.is_empty() {
            return self.cursor;
        }
        if !self.has_enabled() {
            tracing::trace!(len = self.items.len(), "all items disabled; cursor unchanged");
            return self.cursor;
        }

        let len = self.signed_len();
        let step: isize = if offset < 0 { -1 } else { 1 };
        let origin = match self.cursor {
            Some(c) => to_signed(c),
            None if offset > 0 => -1,
            None if offset < 0 => len,
            None => 0,
        };

        let found = match self.wrap {
            Wrap::Cycle => {
                let start = (origin + offset.rem_euclid(len)).rem_euclid(len);
                self.scan_cycle(start, step)
            }
            Wrap::Clamp => {
                let start = origin.saturating_add(offset).clamp(0, len - 1);
                self.scan_clamped(start, step)
            }
        };
        if let Some(index) = found {
            self.cursor = Some(index);
            tracing::trace!(cursor = index, offset, "moved cursor");
        }
        self.cursor
    }

    /// Moves the cursor to the first enabled item.
    pub fn first(&mut self) -> Option<usize> {
        if let Some(index) = self.items.iter().position(Item::is_enabled) {
            self.cursor = Some(index);
        }
        self.cursor
    }

    /// Moves the cursor to the last enabled item.
    pub fn last(&mut self) -> Option<usize> {
        if let Some(index) = self.items.iter().rposition(Item::is_enabled) {
            self.cursor = Some(index);
        }
        self.cursor
    }

    /// Sets the cursor directly to the item with the given id, without
    /// skipping disabled items.
    ///
    /// Returns `false` (and leaves the cursor alone) for unknown ids.
    pub fn activate_by_pointer(&mut self, id: &K) -> bool {
        match self.position(id) {
            Some(index) => {
                self.cursor = Some(index);
                true
            }
            None => false,
        }
    }

    /// Sets the cursor directly to `index`. Out-of-range indices are ignored.
    pub fn activate_index(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.cursor = Some(index);
            true
        } else {
            false
        }
    }

    /// Unsets the cursor.
    pub fn clear(&mut self) {
        self.cursor = None;
    }

    /// Returns the item under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NoActiveItem`] if the cursor is unset.
    pub fn select_at_cursor(&self) -> Result<&Item<K>, NavError> {
        self.active().ok_or(NavError::NoActiveItem)
    }

    /// Moves the cursor to the last selected item, or to the first item when
    /// nothing is selected. Disabled items are not skipped.
    ///
    /// Menus call this after a selection settles so that the next keyboard
    /// entry starts from the committed item.
    pub fn sync_to_selected(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return self.cursor;
        }
        let index = self.items.iter().rposition(|item| item.selected).unwrap_or(0);
        self.cursor = Some(index);
        self.cursor
    }

    /// Items whose value starts with `prefix`, in order.
    pub fn matching_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Item<K>> + 'a {
        self.items
            .iter()
            .filter(move |item| item.value.starts_with(prefix))
    }

    fn insert_or_replace(&mut self, item: Item<K>) -> usize {
        if let Some(&index) = self.positions.get(&item.id) {
            self.items[index] = item;
            index
        } else {
            let index = self.items.len();
            self.positions.insert(item.id.clone(), index);
            self.items.push(item);
            index
        }
    }

    fn update(&mut self, id: &K, f: impl FnOnce(&mut Item<K>)) -> bool {
        match self.positions.get(id).and_then(|&i| self.items.get_mut(i)) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    fn signed_len(&self) -> isize {
        to_signed(self.items.len())
    }

    fn scan_cycle(&self, start: isize, step: isize) -> Option<usize> {
        let len = self.signed_len();
        let mut index = start;
        for _ in 0..self.items.len() {
            let i = to_unsigned(index);
            if self.items[i].is_enabled() {
                return Some(i);
            }
            index = (index + step).rem_euclid(len);
        }
        None
    }

    fn scan_clamped(&self, start: isize, step: isize) -> Option<usize> {
        let len = self.signed_len();
        let mut index = start;
        while (0..len).contains(&index) {
            let i = to_unsigned(index);
            if self.items[i].is_enabled() {
                return Some(i);
            }
            index += step;
        }
        None
    }
}

// Item counts beyond `isize::MAX` cannot be allocated, so these never saturate.
fn to_signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

fn to_unsigned(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}
