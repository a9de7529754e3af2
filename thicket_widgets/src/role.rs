// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Role negotiation between nested widgets.
//!
//! A menu that is not given an explicit `role` asks its ancestors what it
//! should be: a picker or combobox wrapping it answers `listbox`, a menu
//! button answers `menu`, and nothing answering leaves it a `menu`. The
//! question travels as a bubbling [`RoleQuery`] from the innermost ancestor
//! outward; the first ancestor that answers stops propagation.
//!
//! ## Minimal example
//!
//! ```
//! use thicket_widgets::Role;
//! use thicket_widgets::role::{Outcome, RoleQuery, query_role};
//!
//! #[derive(Debug)]
//! enum Ancestor { Div, Picker, MenuButton }
//!
//! let path = [Ancestor::Div, Ancestor::Picker, Ancestor::MenuButton];
//! let role = query_role(&path, |node, query: &mut RoleQuery| match node {
//!     Ancestor::Picker => {
//!         query.role = Some(Role::Listbox);
//!         Outcome::Stop
//!     }
//!     Ancestor::MenuButton => {
//!         query.role = Some(Role::Menu);
//!         Outcome::Stop
//!     }
//!     Ancestor::Div => Outcome::Continue,
//! });
//!
//! // The picker is nearer than the menu button, so it wins.
//! assert_eq!(role, Role::Listbox);
//! ```

use crate::Role;

/// Propagation control returned by handlers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Keep bubbling.
    Continue,
    /// Stop at this node.
    Stop,
}

/// Payload of a role query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleQuery {
    /// The role an ancestor asked for, if any has answered.
    pub role: Option<Role>,
}

/// Runs `handler` over `path`, innermost first, and honors stop outcomes.
///
/// Returns the node propagation stopped at, or `None` if every node was
/// visited.
pub fn bubble<'a, T, E>(
    path: &'a [T],
    event: &mut E,
    mut handler: impl FnMut(&T, &mut E) -> Outcome,
) -> Option<&'a T> {
    for node in path {
        if handler(node, event) == Outcome::Stop {
            return Some(node);
        }
    }
    None
}

/// Bubbles a [`RoleQuery`] through `ancestors` (innermost first) and returns
/// the negotiated role, defaulting to [`Role::Menu`].
pub fn query_role<T>(ancestors: &[T], handler: impl FnMut(&T, &mut RoleQuery) -> Outcome) -> Role {
    let mut query = RoleQuery::default();
    let stopped = bubble(ancestors, &mut query, handler).is_some();
    let role = query.role.unwrap_or(Role::Menu);
    tracing::trace!(?role, stopped, "negotiated role");
    role
}
