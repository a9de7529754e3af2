// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type into a combobox, walk the filtered options, and commit one.
//!
//! Run:
//! - `cargo run -p thicket_demos --example combobox_filter`

use thicket_widgets::{Combobox, InputEvent, Item, Key, Router, Widget};
use tracing_subscriber::EnvFilter;

const STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
];

fn show(router: &Router<Combobox<&'static str>>) {
    let state = router.state();
    let available: Vec<&str> = state
        .available()
        .items()
        .iter()
        .map(|item| item.value.as_str())
        .collect();
    println!(
        "  value={:?} phase={:?} active={:?} available={available:?}",
        state.value(),
        state.phase(),
        state.active_id(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let mut router: Router<Combobox<&'static str>> = Router::default();
    let options = STATES
        .iter()
        .map(|&(id, name)| Item::new(id, name).with_disabled(id == "AK"))
        .collect();

    let script = [
        ("options", InputEvent::ItemsChanged(options)),
        ("type 'A'", InputEvent::TextInput("A".to_string())),
        ("ArrowDown", InputEvent::key(Key::ArrowDown)),
        ("ArrowDown", InputEvent::key(Key::ArrowDown)),
        ("ArrowUp", InputEvent::key(Key::ArrowUp)),
        ("Enter", InputEvent::key(Key::Enter)),
        ("Escape", InputEvent::key(Key::Escape)),
        ("open", InputEvent::Toggle),
        ("hover CO", InputEvent::PointerEnter("CO")),
        ("click CO", InputEvent::ItemClick("CO")),
    ];

    for (label, event) in script {
        let effects = router.dispatch(&event);
        println!("{label}: {effects:?}");
        show(&router);
    }
}
