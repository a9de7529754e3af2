// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ARIA attributes derived from widget state.
//!
//! Hosts call [`Widget::aria`](crate::Widget::aria) on every render and
//! reflect the result onto the element, so assistive technology always sees
//! the state the reducer last produced.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use smallvec::SmallVec;

/// ARIA roles used by Thicket widgets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// `menu`.
    Menu,
    /// `menuitem`.
    MenuItem,
    /// `listbox`.
    Listbox,
    /// `option`.
    Option,
    /// `combobox`.
    Combobox,
    /// `slider`.
    Slider,
    /// `presentation`.
    Presentation,
}

impl Role {
    /// The attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::Listbox => "listbox",
            Self::Option => "option",
            Self::Combobox => "combobox",
            Self::Slider => "slider",
            Self::Presentation => "presentation",
        }
    }

    /// Parses an attribute value. Unknown roles yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "menu" => Self::Menu,
            "menuitem" => Self::MenuItem,
            "listbox" => Self::Listbox,
            "option" => Self::Option,
            "combobox" => Self::Combobox,
            "slider" => Self::Slider,
            "presentation" => Self::Presentation,
            _ => return None,
        })
    }

    /// Role of the items inside a container with this role.
    ///
    /// Menus contain `menuitem`s; every other container contains `option`s.
    #[must_use]
    pub const fn child_role(self) -> Self {
        match self {
            Self::Menu => Self::MenuItem,
            _ => Self::Option,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessibility state of a widget, ready to be reflected as attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Aria<K> {
    /// `role`.
    pub role: Role,
    /// `tabindex`; `None` when the element should not be tabbable.
    pub tab_index: Option<i32>,
    /// `aria-activedescendant`.
    pub active_descendant: Option<K>,
    /// `aria-expanded`, for widgets that own a popup.
    pub expanded: Option<bool>,
    /// The item that should carry `aria-selected="true"`.
    pub selected: Option<K>,
    /// `aria-disabled`.
    pub disabled: bool,
    /// `aria-valuemin`, `aria-valuemax`, `aria-valuenow`.
    pub value_range: Option<(f64, f64, f64)>,
    /// `aria-valuetext`.
    pub value_text: Option<String>,
}

impl<K> Aria<K> {
    /// Attributes for a container with `role` and nothing else set.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            tab_index: Some(0),
            active_descendant: None,
            expanded: None,
            selected: None,
            disabled: false,
            value_range: None,
            value_text: None,
        }
    }
}

impl<K: fmt::Display> Aria<K> {
    /// Attribute name/value pairs for the widget's own element.
    ///
    /// Attributes that should be absent are omitted. `aria-selected` belongs
    /// on the selected item rather than the widget and is not included.
    pub fn attributes(&self) -> SmallVec<[(&'static str, String); 8]> {
        let mut out = SmallVec::new();
        out.push(("role", self.role.as_str().to_string()));
        if let Some(tab_index) = self.tab_index {
            out.push(("tabindex", tab_index.to_string()));
        }
        if let Some(id) = &self.active_descendant {
            out.push(("aria-activedescendant", id.to_string()));
        }
        if let Some(expanded) = self.expanded {
            out.push(("aria-expanded", bool_str(expanded).to_string()));
        }
        if self.disabled {
            out.push(("aria-disabled", "true".to_string()));
        }
        if let Some((min, max, now)) = self.value_range {
            out.push(("aria-valuemin", format!("{min}")));
            out.push(("aria-valuemax", format!("{max}")));
            out.push(("aria-valuenow", format!("{now}")));
        }
        if let Some(text) = &self.value_text {
            out.push(("aria-valuetext", text.clone()));
        }
        out
    }
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}
