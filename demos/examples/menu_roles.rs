// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A menu that becomes a listbox inside a picker.
//!
//! The menu asks its ancestors which role to take, then handles focus,
//! arrow keys and a selection.
//!
//! Run:
//! - `cargo run -p thicket_demos --example menu_roles`

use thicket_widgets::config::MenuConfig;
use thicket_widgets::role::Outcome;
use thicket_widgets::{InputEvent, Item, Key, Menu, Role, Router};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum Ancestor {
    Panel,
    Picker,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let mut menu: Menu<u32> = Menu::new().with_config(MenuConfig {
        role: None,
        selectable: true,
    });
    let role = menu.negotiate(&[Ancestor::Panel, Ancestor::Picker], |node, query| match node {
        Ancestor::Picker => {
            query.role = Some(Role::Listbox);
            Outcome::Stop
        }
        Ancestor::Panel => Outcome::Continue,
    });
    println!("negotiated role: {role} (items are {})", role.child_role());

    let mut router = Router::new(menu);
    router.subscribe(|_, aria| println!("  render: {:?}", aria.attributes()));

    let items = ["Small", "Medium", "Large", "Huge"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Item::new(id, name).with_disabled(name == "Large"))
        .collect();
    let script = [
        InputEvent::ItemsChanged(items),
        InputEvent::FocusIn { active: None },
        InputEvent::key(Key::ArrowDown),
        InputEvent::key(Key::ArrowDown),
        InputEvent::key(Key::Enter),
        InputEvent::ItemClick(4),
        InputEvent::FocusOut,
    ];
    for event in &script {
        let effects = router.dispatch(event);
        println!("{event:?} -> {effects:?}");
        router.flush();
    }
}
