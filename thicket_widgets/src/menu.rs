// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menus and listboxes with a roving cursor.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use thicket_navigator::ListNavigator;

use crate::config::MenuConfig;
use crate::role::{Outcome, RoleQuery, query_role};
use crate::{Aria, Effect, Effects, InputEvent, Key, Phase, Role, Transition, Widget};

/// State of a menu (or a listbox, when negotiated into one).
///
/// While focus is inside the menu it listens to the keyboard: the arrow keys
/// move a wrapping cursor over the enabled items and `Enter`/`Space`
/// activate the item under it. When focus leaves after an item was clicked
/// or `Tab` was pressed, the cursor snaps back to the selected item so the
/// next visit starts there.
#[derive(Clone, Debug)]
pub struct Menu<K: Clone + Eq + Hash> {
    nav: ListNavigator<K>,
    config: MenuConfig,
    negotiated: Role,
    listening: bool,
    cleanup_pending: bool,
}

impl<K: Clone + Eq + Hash> Default for Menu<K> {
    fn default() -> Self {
        Self {
            nav: ListNavigator::new(),
            config: MenuConfig::default(),
            negotiated: Role::Menu,
            listening: false,
            cleanup_pending: false,
        }
    }
}

impl<K: Clone + Eq + Hash> Menu<K> {
    /// Creates an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this menu with the given configuration.
    #[must_use]
    pub fn with_config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    /// The item cursor.
    #[must_use]
    pub const fn navigator(&self) -> &ListNavigator<K> {
        &self.nav
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Returns `true` while the menu reacts to keys.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// The effective role: the configured one, else the negotiated one.
    #[must_use]
    pub fn role(&self) -> Role {
        self.config.role.unwrap_or(self.negotiated)
    }

    /// Asks `ancestors` (innermost first) which role this menu should take.
    ///
    /// An explicitly configured role wins and no query is sent.
    pub fn negotiate<T>(
        &mut self,
        ancestors: &[T],
        handler: impl FnMut(&T, &mut RoleQuery) -> Outcome,
    ) -> Role {
        if self.config.role.is_none() {
            self.negotiated = query_role(ancestors, handler);
        }
        self.role()
    }

    fn on_key(&mut self, key: Key, effects: &mut Effects<K>) {
        match key {
            Key::Tab => self.cleanup_pending = true,
            Key::Space | Key::Enter => {
                if let Some(id) = self.nav.active_id() {
                    effects.push(Effect::ActivateItem(id.clone()));
                }
            }
            Key::ArrowDown | Key::ArrowUp => {
                effects.push(Effect::PreventDefault);
                let offset = if key == Key::ArrowDown { 1 } else { -1 };
                let before = self.nav.cursor();
                self.nav.move_by(offset);
                if let Some(id) = self.nav.active_id() {
                    effects.push(Effect::ScrollIntoView(id.clone()));
                }
                if self.nav.cursor() != before {
                    effects.push(Effect::RequestRender);
                }
            }
            _ => {}
        }
    }

    fn select_only(&mut self, id: &K) {
        let selected: Vec<K> = self
            .nav
            .items()
            .iter()
            .filter(|item| item.selected && item.id != *id)
            .map(|item| item.id.clone())
            .collect();
        for other in &selected {
            self.nav.set_selected(other, false);
        }
        self.nav.set_selected(id, true);
    }
}

impl<K> Widget for Menu<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    type Id = K;

    fn reduce(mut self, event: &InputEvent<K>) -> Transition<Self, K> {
        let mut effects = Effects::new();
        match event {
            InputEvent::FocusIn { active } => {
                if self.nav.has_enabled() {
                    self.nav.move_by(0);
                    if let Some(id) = active
                        && self.nav.cursor() == Some(0)
                    {
                        self.nav.activate_by_pointer(id);
                    }
                }
                self.listening = true;
                effects.push(Effect::RequestRender);
            }
            InputEvent::KeyDown { key, .. } if self.listening => self.on_key(*key, &mut effects),
            InputEvent::ItemClick(id) => {
                self.cleanup_pending = true;
                let enabled = self.nav.get(id).is_some_and(|item| item.is_enabled());
                if self.config.selectable && enabled {
                    self.select_only(id);
                    effects.push(Effect::RequestRender);
                }
            }
            InputEvent::FocusOut => {
                self.listening = false;
                if self.cleanup_pending {
                    self.cleanup_pending = false;
                    self.nav.sync_to_selected();
                }
                effects.push(Effect::RequestRender);
            }
            InputEvent::ItemsChanged(items) => {
                self.nav.set_items(items.iter().cloned());
                self.nav.sync_to_selected();
                effects.push(Effect::RequestRender);
            }
            InputEvent::Attribute { name, value } => {
                if let Err(err) = self.config.apply_attribute(name, value.as_deref()) {
                    tracing::debug!(%err, "ignoring menu attribute");
                }
                effects.push(Effect::RequestRender);
            }
            _ => {}
        }
        Transition::new(self, effects)
    }

    fn aria(&self) -> Aria<K> {
        let role = self.role();
        let mut aria = Aria::new(role);
        if role == Role::Presentation {
            aria.tab_index = None;
        }
        if self.listening {
            aria.active_descendant = self.nav.active_id().cloned();
        }
        aria.selected = self
            .nav
            .items()
            .iter()
            .rev()
            .find(|item| item.selected)
            .map(|item| item.id.clone());
        aria
    }

    fn phase(&self) -> Phase {
        match (self.listening, self.nav.cursor()) {
            (false, _) => Phase::Closed,
            (true, None) => Phase::OpenIdle,
            (true, Some(_)) => Phase::OpenNavigating,
        }
    }
}
