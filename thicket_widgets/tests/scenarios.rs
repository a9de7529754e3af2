// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction scenarios driven through a [`Router`].

use kurbo::{Point, Rect};
use thicket_widgets::config::{MenuConfig, SliderConfig};
use thicket_widgets::role::Outcome;
use thicket_widgets::{
    Combobox, Effect, InputEvent, Item, Key, Menu, Modifiers, Part, Phase, PointerInput, Role,
    Router, Slider, Widget,
};

fn pointer_down(x: f64, part: Part) -> InputEvent<()> {
    InputEvent::PointerDown(PointerInput::at(Point::new(x, 10.0), part))
}

#[test]
fn continuous_slider_on_wide_track() {
    let config = SliderConfig {
        step: 0.0,
        ..SliderConfig::default()
    };
    let mut router = Router::new(Slider::new(config));
    router.dispatch(&InputEvent::Resize(Rect::new(0.0, 0.0, 500.0, 20.0)));

    router.dispatch(&pointer_down(200.0, Part::Track));
    assert_eq!(router.state().value(), 8.0);
    router.dispatch(&InputEvent::PointerMove(PointerInput::at(
        Point::new(125.0, 10.0),
        Part::Other,
    )));
    assert_eq!(router.state().value(), 5.0);

    let effects = router.dispatch(&InputEvent::PointerUp(PointerInput::at(
        Point::new(125.0, 10.0),
        Part::Other,
    )));
    assert!(effects.contains(&Effect::EmitChange));
    assert_eq!(router.phase(), Phase::Closed);
}

#[test]
fn slider_value_property_is_clamped() {
    let mut router: Router<Slider> = Router::default();
    let effects = router.dispatch(&InputEvent::SetValue(50.0));
    assert_eq!(router.state().value(), 20.0);
    assert!(!effects.contains(&Effect::EmitInput));
    router.flush();
    assert_eq!(router.aria().value_range, Some((0.0, 20.0, 20.0)));
}

#[test]
fn drag_outside_track_clamps() {
    let mut router = Router::new(Slider::default());
    router.dispatch(&InputEvent::Resize(Rect::new(0.0, 0.0, 100.0, 10.0)));
    router.dispatch(&pointer_down(50.0, Part::Handle));
    assert_eq!(router.phase(), Phase::Dragging);
    router.dispatch(&InputEvent::PointerMove(PointerInput::at(
        Point::new(-400.0, 0.0),
        Part::Other,
    )));
    assert_eq!(router.state().value(), 0.0);
    router.dispatch(&InputEvent::PointerMove(PointerInput::at(
        Point::new(900.0, 0.0),
        Part::Other,
    )));
    assert_eq!(router.state().value(), 20.0);
}

#[test]
fn disconnect_mid_drag_releases_capture() {
    let mut router = Router::new(Slider::default());
    router.dispatch(&InputEvent::Resize(Rect::new(0.0, 0.0, 100.0, 10.0)));
    let effects = router.dispatch(&pointer_down(10.0, Part::Track));
    let Some(Effect::SetPointerCapture(id)) = effects
        .iter()
        .find(|e| matches!(e, Effect::SetPointerCapture(_)))
        .cloned()
    else {
        panic!("no capture requested");
    };
    let teardown = router.disconnect();
    assert_eq!(teardown.as_slice(), &[Effect::ReleasePointerCapture(id)]);
    assert!(!router.state().is_dragging());
}

#[test]
fn combobox_type_navigate_commit() {
    let mut router: Router<Combobox<&'static str>> = Router::default();
    router.dispatch(&InputEvent::ItemsChanged(vec![
        Item::new("ca", "California"),
        Item::new("co", "Colorado"),
        Item::new("ct", "Connecticut"),
        Item::new("de", "Delaware"),
    ]));
    router.dispatch(&InputEvent::TextInput("Co".to_string()));
    assert_eq!(router.phase(), Phase::OpenIdle);
    assert_eq!(router.state().available().len(), 2);

    router.dispatch(&InputEvent::key(Key::ArrowDown));
    router.dispatch(&InputEvent::key(Key::ArrowDown));
    assert_eq!(router.aria().active_descendant, Some("ct"));
    assert_eq!(router.aria().selected, Some("ct"));

    let effects = router.dispatch(&InputEvent::key(Key::Enter));
    assert!(effects.contains(&Effect::EmitChange));
    assert_eq!(router.state().value(), "Connecticut");
    assert_eq!(router.phase(), Phase::Closed);
    assert_eq!(router.aria().active_descendant, None);
}

#[test]
fn combobox_alt_down_then_escape_twice() {
    let mut router: Router<Combobox<u8>> = Router::default();
    router.dispatch(&InputEvent::ItemsChanged(vec![Item::new(1, "one")]));
    router.dispatch(&InputEvent::TextInput("o".to_string()));
    router.dispatch(&InputEvent::key(Key::Escape));
    assert!(!router.state().is_open());
    router.dispatch(&InputEvent::KeyDown {
        key: Key::ArrowDown,
        modifiers: Modifiers::ALT,
    });
    assert_eq!(router.phase(), Phase::OpenIdle);
    router.dispatch(&InputEvent::key(Key::Escape));
    assert_eq!(router.state().value(), "o");
    router.dispatch(&InputEvent::key(Key::Escape));
    assert_eq!(router.state().value(), "");
}

#[test]
fn menu_negotiated_into_listbox() {
    #[derive(Debug)]
    enum Host {
        Picker,
    }

    let mut menu: Menu<u32> = Menu::new().with_config(MenuConfig {
        role: None,
        selectable: true,
    });
    let role = menu.negotiate(&[Host::Picker], |host, query| match host {
        Host::Picker => {
            query.role = Some(Role::Listbox);
            Outcome::Stop
        }
    });
    assert_eq!(role, Role::Listbox);

    let mut router = Router::new(menu);
    router.dispatch(&InputEvent::ItemsChanged(
        (1..=3).map(|n| Item::new(n, n.to_string())).collect(),
    ));
    router.dispatch(&InputEvent::FocusIn { active: None });
    router.dispatch(&InputEvent::key(Key::ArrowDown));
    router.dispatch(&InputEvent::key(Key::ArrowDown));
    let effects = router.dispatch(&InputEvent::key(Key::Space));
    assert_eq!(effects.as_slice(), &[Effect::ActivateItem(3)]);

    // The host turns the activation into a click.
    router.dispatch(&InputEvent::ItemClick(3));
    router.dispatch(&InputEvent::FocusOut);
    router.flush();
    let aria = router.aria();
    assert_eq!(aria.role.child_role(), Role::Option);
    assert_eq!(aria.selected, Some(3));
    assert_eq!(aria.active_descendant, None);
    assert_eq!(router.state().navigator().active_id(), Some(&3));
    assert_eq!(router.phase(), Phase::Closed);
}

#[test]
fn menu_items_replaced_keeps_selection_cursor() {
    let menu: Menu<u32> = Menu::new();
    let state = menu
        .reduce(&InputEvent::ItemsChanged(vec![
            Item::new(1, "a"),
            Item::new(2, "b").with_selected(true),
            Item::new(3, "c"),
        ]))
        .state;
    assert_eq!(state.navigator().active_id(), Some(&2));
}
