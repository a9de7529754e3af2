// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a slider through keyboard steps and a pointer drag.
//!
//! Prints each effect the host would run and the attributes it would reflect
//! after every render. Set `RUST_LOG=trace` to see the reducer's transitions.
//!
//! Run:
//! - `cargo run -p thicket_demos --example slider_drag`

use kurbo::{Point, Rect};
use thicket_widgets::config::{SliderConfig, Variant};
use thicket_widgets::{InputEvent, Key, Part, PointerInput, Router, Slider};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = SliderConfig {
        max: 100.0,
        step: 5.0,
        value: 50.0,
        variant: Variant::Filled,
        ..SliderConfig::default()
    };
    let slider = Slider::new(config).with_value_text(|v| format!("{v}%"));
    let mut router = Router::new(slider);
    router.subscribe(|slider, aria| {
        let attrs: Vec<String> = aria
            .attributes()
            .iter()
            .map(|(name, value)| format!("{name}={value:?}"))
            .collect();
        println!(
            "  render: handle at {:>5.1}px  {}",
            slider.handle_position(),
            attrs.join(" ")
        );
    });

    let at = |x: f64, part: Part| PointerInput::at(Point::new(x, 8.0), part);
    let script = [
        ("layout", InputEvent::Resize(Rect::new(20.0, 0.0, 420.0, 16.0))),
        ("ArrowRight", InputEvent::key(Key::ArrowRight)),
        ("PageDown", InputEvent::key(Key::PageDown)),
        ("press track", InputEvent::PointerDown(at(320.0, Part::Track))),
        ("drag", InputEvent::PointerMove(at(360.0, Part::Other))),
        ("drag past end", InputEvent::PointerMove(at(900.0, Part::Other))),
        ("release", InputEvent::PointerUp(at(900.0, Part::Other))),
        ("max=60", InputEvent::attribute("max", "60")),
        ("variant=other", InputEvent::attribute("variant", "other")),
    ];

    for (label, event) in &script {
        let effects = router.dispatch(event);
        println!("{label}: {effects:?}");
        router.flush();
    }
    println!("final value: {}", router.state().value());
}
