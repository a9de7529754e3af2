// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An editable combobox with a prefix-filtered popup.

use alloc::string::{String, ToString};
use core::fmt;
use core::hash::Hash;

use thicket_navigator::ListNavigator;

use crate::config::ComboboxConfig;
use crate::{Aria, Effect, Effects, InputEvent, Key, Modifiers, Phase, Role, Transition, Widget};

/// State of a combobox.
///
/// The text field holds a free-form value. Options whose value starts with
/// the text are *available*; the arrow keys move an active option over the
/// available ones and `Enter` (or a click) commits it into the field.
/// Closing the popup always clears the active option.
#[derive(Clone, Debug)]
pub struct Combobox<K: Clone + Eq + Hash> {
    options: ListNavigator<K>,
    available: ListNavigator<K>,
    config: ComboboxConfig,
}

impl<K: Clone + Eq + Hash> Default for Combobox<K> {
    fn default() -> Self {
        Self {
            options: ListNavigator::new(),
            available: ListNavigator::new(),
            config: ComboboxConfig::default(),
        }
    }
}

impl<K: Clone + Eq + Hash> Combobox<K> {
    /// Creates an empty, closed combobox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this combobox with the given configuration.
    #[must_use]
    pub fn with_config(mut self, config: ComboboxConfig) -> Self {
        self.config = config;
        self.refilter();
        self
    }

    /// Text in the field.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.config.value
    }

    /// Returns `true` while the popup is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.config.open
    }

    /// All options, in order.
    #[must_use]
    pub const fn options(&self) -> &ListNavigator<K> {
        &self.options
    }

    /// Options matching the current text, with the active-option cursor.
    #[must_use]
    pub const fn available(&self) -> &ListNavigator<K> {
        &self.available
    }

    /// The active option's id.
    #[must_use]
    pub fn active_id(&self) -> Option<&K> {
        self.available.active_id()
    }

    fn refilter(&mut self) {
        let prefix = self.config.value.as_str();
        self.available
            .set_items(self.options.matching_prefix(prefix).cloned());
    }

    fn open(&mut self) {
        self.config.open = true;
    }

    fn close(&mut self) {
        self.config.open = false;
        self.available.clear();
    }

    fn set_value(&mut self, value: String) -> bool {
        if self.config.value == value {
            return false;
        }
        self.config.value = value;
        self.refilter();
        true
    }

    /// Commits the active option's value. Returns `false` if nothing is active.
    fn commit(&mut self, effects: &mut Effects<K>) -> bool {
        let Ok(option) = self.available.select_at_cursor() else {
            return false;
        };
        let value = option.value.clone();
        let end = value.chars().count();
        if self.set_value(value) {
            effects.push(Effect::EmitInput);
        }
        effects.push(Effect::EmitChange);
        effects.push(Effect::SetSelectionRange { start: end, end });
        true
    }

    fn on_key(&mut self, key: Key, modifiers: Modifiers, effects: &mut Effects<K>) {
        match key {
            Key::ArrowDown if modifiers.contains(Modifiers::ALT) => {
                effects.push(Effect::PreventDefault);
                self.open();
            }
            Key::ArrowDown | Key::ArrowUp => {
                effects.push(Effect::PreventDefault);
                self.open();
                if key == Key::ArrowDown {
                    self.available.next();
                } else {
                    self.available.previous();
                }
                if let Some(id) = self.available.active_id() {
                    effects.push(Effect::ScrollIntoView(id.clone()));
                }
            }
            Key::Escape => {
                if !self.config.open && self.set_value(String::new()) {
                    effects.push(Effect::EmitInput);
                }
                self.close();
            }
            Key::Enter => {
                if self.config.open {
                    effects.push(Effect::PreventDefault);
                }
                self.commit(effects);
                self.close();
            }
            Key::Home => {
                effects.push(Effect::SetSelectionRange { start: 0, end: 0 });
                self.available.clear();
            }
            Key::End => {
                let end = self.config.value.chars().count();
                effects.push(Effect::SetSelectionRange { start: end, end });
                self.available.clear();
            }
            Key::ArrowLeft | Key::ArrowRight => self.available.clear(),
            _ => return,
        }
        effects.push(Effect::RequestRender);
    }
}

impl<K> Widget for Combobox<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    type Id = K;

    fn reduce(mut self, event: &InputEvent<K>) -> Transition<Self, K> {
        let mut effects = Effects::new();
        if self.config.disabled && !matches!(event, InputEvent::Attribute { .. }) {
            return Transition::new(self, effects);
        }
        match event {
            InputEvent::KeyDown { key, modifiers } => self.on_key(*key, *modifiers, &mut effects),
            InputEvent::TextInput(text) => {
                self.set_value(text.clone());
                self.available.clear();
                self.open();
                effects.push(Effect::RequestRender);
            }
            InputEvent::PointerEnter(id) => {
                if self.available.activate_by_pointer(id) {
                    effects.push(Effect::RequestRender);
                }
            }
            InputEvent::PointerLeave => {
                self.available.clear();
                effects.push(Effect::RequestRender);
            }
            InputEvent::ItemClick(id) => {
                if self.available.activate_by_pointer(id) {
                    self.commit(&mut effects);
                }
                self.close();
                effects.push(Effect::RequestRender);
            }
            InputEvent::Toggle => {
                if self.config.open {
                    self.close();
                } else {
                    self.open();
                }
                effects.push(Effect::RequestRender);
            }
            InputEvent::FocusLost => {
                if self.config.open {
                    self.close();
                    effects.push(Effect::RequestRender);
                }
            }
            InputEvent::ItemsChanged(items) => {
                self.options.set_items(items.iter().cloned());
                self.refilter();
                effects.push(Effect::RequestRender);
            }
            InputEvent::Attribute { name, value } => {
                match self.config.apply_attribute(name, value.as_deref()) {
                    Ok(()) => {
                        self.refilter();
                        if !self.config.open {
                            self.available.clear();
                        }
                    }
                    Err(err) => tracing::debug!(%err, "ignoring combobox attribute"),
                }
                effects.push(Effect::RequestRender);
            }
            _ => {}
        }
        Transition::new(self, effects)
    }

    fn aria(&self) -> Aria<K> {
        let mut aria = Aria::new(Role::Combobox);
        aria.expanded = Some(self.config.open);
        aria.active_descendant = self.available.active_id().cloned();
        aria.selected = aria.active_descendant.clone();
        aria.disabled = self.config.disabled;
        if self.config.disabled {
            aria.tab_index = Some(-1);
        }
        aria
    }

    fn phase(&self) -> Phase {
        match (self.config.open, self.available.cursor()) {
            (false, _) => Phase::Closed,
            (true, None) => Phase::OpenIdle,
            (true, Some(_)) => Phase::OpenNavigating,
        }
    }
}

impl<K: Clone + Eq + Hash> fmt::Display for Combobox<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.value)
    }
}

impl<K: Clone + Eq + Hash> From<ComboboxConfig> for Combobox<K> {
    fn from(config: ComboboxConfig) -> Self {
        Self::new().with_config(config)
    }
}

impl<K: Clone + Eq + Hash> From<&str> for Combobox<K> {
    fn from(value: &str) -> Self {
        Self::from(ComboboxConfig {
            value: value.to_string(),
            ..ComboboxConfig::default()
        })
    }
}
