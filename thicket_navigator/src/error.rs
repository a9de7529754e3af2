// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors reported by [`ListNavigator`](crate::ListNavigator) queries.
///
/// Movement never fails; only queries that need a concrete item do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The cursor is unset, so there is no item to select.
    #[error("no item is active")]
    NoActiveItem,
}
