// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-driven configuration records.
//!
//! Each widget keeps its host-visible configuration in a plain record that
//! can be built in code, deserialized (with the `serde` feature), or updated
//! one attribute at a time with `apply_attribute`. Attribute values follow
//! HTML conventions: a boolean attribute is on when present, and removing an
//! attribute resets it.
//!
//! Invalid values never leave a record half-configured: the affected field
//! falls back to its default and the error is returned so the caller can log
//! it. Widgets do exactly that and carry on.
//!
//! ```
//! use thicket_widgets::config::{AttributeError, SliderConfig, Variant};
//!
//! let mut config = SliderConfig::default();
//! config.apply_attribute("max", Some("50")).unwrap();
//! config.apply_attribute("variant", Some("tick")).unwrap();
//! assert_eq!(config.max, 50.0);
//! assert_eq!(config.variant, Variant::Tick);
//!
//! let err = config.apply_attribute("variant", Some("other")).unwrap_err();
//! assert!(matches!(err, AttributeError::UnknownVariant(_)));
//! assert_eq!(config.variant, Variant::None);
//! ```

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thicket_range::RangeSpec;

use crate::Role;

/// Problems found while applying an attribute.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// A numeric attribute did not parse as a finite number.
    #[error("attribute `{name}` expects a number, got {value:?}")]
    InvalidNumber {
        /// Attribute name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
    /// `variant` named something other than a known variant.
    #[error("unknown variant {0:?}")]
    UnknownVariant(String),
    /// `role` named something other than a known role.
    #[error("unknown role {0:?}")]
    UnknownRole(String),
    /// The widget has no attribute with this name.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
}

/// Visual variant of a slider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// No variant; the plain track.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    None,
    /// Track filled from `min` to the handle.
    Filled,
    /// Track drawn as a ramp.
    Ramp,
    /// Two-handle range look.
    Range,
    /// Tick marks at each step.
    Tick,
}

impl Variant {
    /// The attribute value; empty for [`Variant::None`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Filled => "filled",
            Self::Ramp => "ramp",
            Self::Range => "range",
            Self::Tick => "tick",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::None),
            "filled" => Ok(Self::Filled),
            "ramp" => Ok(Self::Ramp),
            "range" => Ok(Self::Range),
            "tick" => Ok(Self::Tick),
            other => Err(AttributeError::UnknownVariant(other.to_string())),
        }
    }
}

/// Parses a finite number, tolerating surrounding whitespace.
///
/// # Errors
///
/// Returns [`AttributeError::InvalidNumber`] for anything that is not a
/// finite `f64`.
pub fn parse_number(name: &'static str, value: &str) -> Result<f64, AttributeError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(AttributeError::InvalidNumber {
            name,
            value: value.to_string(),
        }),
    }
}

fn number_or(
    name: &'static str,
    value: Option<&str>,
    slot: &mut f64,
    default: f64,
) -> Result<(), AttributeError> {
    *slot = default;
    if let Some(value) = value {
        *slot = parse_number(name, value)?;
    }
    Ok(())
}

/// Configuration of a [`Slider`](crate::Slider).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Step size; `0` for a continuous slider.
    pub step: f64,
    /// Initial value.
    pub value: f64,
    /// Visual variant.
    pub variant: Variant,
    /// Whether the slider ignores input.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
            step: 1.0,
            value: 10.0,
            variant: Variant::None,
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// The normalized range described by `min`, `max`, and `step`.
    #[must_use]
    pub fn range(&self) -> RangeSpec {
        RangeSpec::new(self.min, self.max, self.step)
    }

    /// Applies one attribute: `min`, `max`, `step`, `value`, `variant`, or
    /// `disabled`. `None` means the attribute was removed.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown attributes and unparsable values. In the
    /// latter case the field has already been reset to its default.
    pub fn apply_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), AttributeError> {
        let defaults = Self::default();
        match name {
            "min" => number_or("min", value, &mut self.min, defaults.min),
            "max" => number_or("max", value, &mut self.max, defaults.max),
            "step" => number_or("step", value, &mut self.step, defaults.step),
            "value" => number_or("value", value, &mut self.value, defaults.value),
            "variant" => {
                self.variant = Variant::None;
                self.variant = value.unwrap_or_default().parse()?;
                Ok(())
            }
            "disabled" => {
                self.disabled = value.is_some();
                Ok(())
            }
            other => Err(AttributeError::UnknownAttribute(other.to_string())),
        }
    }
}

/// Configuration of a [`Combobox`](crate::Combobox).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComboboxConfig {
    /// Text in the field.
    pub value: String,
    /// Whether the popup is open.
    pub open: bool,
    /// Whether the combobox ignores input.
    pub disabled: bool,
}

impl ComboboxConfig {
    /// Applies one attribute: `value`, `open`, or `disabled`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::UnknownAttribute`] for any other name.
    pub fn apply_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), AttributeError> {
        match name {
            "value" => self.value = value.unwrap_or_default().to_string(),
            "open" => self.open = value.is_some(),
            "disabled" => self.disabled = value.is_some(),
            other => return Err(AttributeError::UnknownAttribute(other.to_string())),
        }
        Ok(())
    }
}

/// Configuration of a [`Menu`](crate::Menu).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Explicit role; `None` means negotiate with ancestors.
    pub role: Option<Role>,
    /// Whether clicking an item selects it.
    pub selectable: bool,
}

impl MenuConfig {
    /// Applies one attribute: `role` or `selectable`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown attributes and roles. An unknown role
    /// leaves the role unset.
    pub fn apply_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), AttributeError> {
        match name {
            "role" => {
                self.role = None;
                if let Some(value) = value {
                    self.role = Some(
                        Role::parse(value)
                            .ok_or_else(|| AttributeError::UnknownRole(value.to_string()))?,
                    );
                }
            }
            "selectable" => self.selectable = value.is_some(),
            other => return Err(AttributeError::UnknownAttribute(other.to_string())),
        }
        Ok(())
    }
}
