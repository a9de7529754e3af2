// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-handle slider over a stepped range.

use alloc::format;
use alloc::string::String;

use kurbo::Point;
use thicket_pointer::PointerId;
use thicket_pointer::drag::DragState;
use thicket_pointer::stream::{Delivery, PointerStream, StreamEvent};
use thicket_range::{RangeSpec, Track, ValueMapper};

use crate::config::{SliderConfig, Variant};
use crate::{
    Aria, Effect, Effects, InputEvent, Key, Part, Phase, PointerInput, Role, Transition, Widget,
};

/// Formats `aria-valuetext` from the current value.
pub type ValueText = fn(f64) -> String;

const PAGE_STEPS: i32 = 10;

/// State of a slider.
///
/// The value is always inside `[min, max]` and on the step grid. Keyboard
/// changes emit `input` and `change` together; a pointer drag emits `input`
/// for every move that changes the value and a single `change` when it ends.
#[derive(Clone, Debug)]
pub struct Slider {
    config: SliderConfig,
    track: Track,
    value: f64,
    handle_highlight: bool,
    drag: DragState<Part>,
    stream: PointerStream,
    value_text: Option<ValueText>,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl Slider {
    /// Creates a slider from `config`, constraining its initial value.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let value = config.range().constrain(config.value);
        Self {
            config,
            track: Track::new(0.0, 0.0),
            value,
            handle_highlight: false,
            drag: DragState::new(),
            stream: PointerStream::new(),
            value_text: None,
        }
    }

    /// Returns this slider laid out on `track`.
    #[must_use]
    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    /// Returns this slider with an `aria-valuetext` formatter.
    #[must_use]
    pub fn with_value_text(mut self, value_text: ValueText) -> Self {
        self.value_text = Some(value_text);
        self
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Visual variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Whether the handle shows its keyboard highlight.
    #[must_use]
    pub const fn handle_highlight(&self) -> bool {
        self.handle_highlight
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The normalized range.
    #[must_use]
    pub fn range(&self) -> RangeSpec {
        self.config.range()
    }

    /// The range paired with the current track.
    #[must_use]
    pub fn mapper(&self) -> ValueMapper {
        ValueMapper::new(self.range(), self.track)
    }

    /// Where the handle sits on the track.
    #[must_use]
    pub fn handle_position(&self) -> f64 {
        self.mapper().position_of(self.value)
    }

    /// Records `value` as the requested value and applies it constrained,
    /// returning `true` if the applied value changed.
    fn set_value(&mut self, value: f64) -> bool {
        self.config.value = value;
        let value = self.range().constrain(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    fn on_key(&mut self, key: Key, effects: &mut Effects<()>) {
        let range = self.range();
        let target = match key {
            Key::ArrowUp | Key::ArrowRight => range.step_by(self.value, 1),
            Key::ArrowDown | Key::ArrowLeft => range.step_by(self.value, -1),
            Key::PageUp => range.step_by(self.value, PAGE_STEPS),
            Key::PageDown => range.step_by(self.value, -PAGE_STEPS),
            Key::Home => range.min(),
            Key::End => range.max(),
            _ => return,
        };
        effects.push(Effect::PreventDefault);
        self.handle_highlight = true;
        if self.set_value(target) {
            effects.push(Effect::EmitInput);
            effects.push(Effect::EmitChange);
        }
        effects.push(Effect::RequestRender);
    }

    fn on_down(&mut self, input: &PointerInput, effects: &mut Effects<()>) {
        if !matches!(input.part, Part::Handle | Part::Track) {
            return;
        }
        let Some(pointer_id) = self.drag.on_down(
            input.pointer_id,
            input.button,
            input.part,
            input.position,
            input.timestamp,
        ) else {
            return;
        };
        self.stream.reset();
        if self.stream.start(false) == Delivery::Dropped {
            self.drag.clear();
            return;
        }
        effects.push(Effect::SetPointerCapture(pointer_id));
        self.handle_highlight = false;
        if input.part == Part::Track && self.move_to(input.position) {
            effects.push(Effect::EmitInput);
        }
        tracing::trace!(part = ?input.part, value = self.value, "drag started");
        effects.push(Effect::RequestRender);
    }

    fn on_move(&mut self, input: &PointerInput, effects: &mut Effects<()>) {
        if self.stream.classify(StreamEvent::Stream) != Delivery::Inside {
            return;
        }
        let Some(drag) = self.drag.on_move(input.pointer_id, input.position) else {
            return;
        };
        let position = drag.last_position;
        if self.move_to(position) {
            effects.push(Effect::EmitInput);
            effects.push(Effect::RequestRender);
        }
    }

    fn on_end(&mut self, release: Option<PointerId>, effects: &mut Effects<()>) {
        self.stream.end();
        if let Some(pointer_id) = release {
            effects.push(Effect::ReleasePointerCapture(pointer_id));
            effects.push(Effect::EmitChange);
            effects.push(Effect::RequestRender);
            tracing::trace!(value = self.value, "drag ended");
        }
    }

    fn move_to(&mut self, position: Point) -> bool {
        let value = self.mapper().value_at_point(position);
        self.set_value(value)
    }

    fn on_attribute(&mut self, name: &str, value: Option<&str>, effects: &mut Effects<()>) {
        if let Err(err) = self.config.apply_attribute(name, value) {
            tracing::debug!(%err, "ignoring slider attribute");
        }
        // The requested value survives bound changes; only the applied one is clamped.
        self.value = self.range().constrain(self.config.value);
        if self.config.disabled {
            if let Some(pointer_id) = self.drag.clear() {
                tracing::trace!(pointer_id = pointer_id.get(), "disabled mid-drag");
                effects.push(Effect::ReleasePointerCapture(pointer_id));
            }
            self.stream.reset();
        }
    }
}

impl Widget for Slider {
    type Id = ();

    fn reduce(mut self, event: &InputEvent<()>) -> Transition<Self, ()> {
        let mut effects = Effects::new();
        match event {
            InputEvent::Attribute { name, value } => {
                self.on_attribute(name, value.as_deref(), &mut effects);
                effects.push(Effect::RequestRender);
            }
            InputEvent::SetValue(value) => {
                if self.set_value(*value) {
                    effects.push(Effect::RequestRender);
                }
            }
            InputEvent::Resize(rect) => {
                self.track = Track::from_rect(*rect, self.track.axis);
                effects.push(Effect::RequestRender);
            }
            _ if self.config.disabled => {}
            InputEvent::KeyDown { key, .. } => self.on_key(*key, &mut effects),
            InputEvent::PointerDown(input) => self.on_down(input, &mut effects),
            InputEvent::PointerMove(input) => self.on_move(input, &mut effects),
            InputEvent::PointerUp(input) => {
                let end = self.drag.on_up(input.pointer_id, input.position);
                self.on_end(end.map(|end| end.release), &mut effects);
            }
            InputEvent::PointerCancel { pointer_id } => {
                let end = self.drag.on_cancel(*pointer_id);
                self.on_end(end.map(|end| end.release), &mut effects);
            }
            InputEvent::TextInput(text) => match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    if self.set_value(value) {
                        effects.push(Effect::EmitInput);
                        effects.push(Effect::RequestRender);
                    }
                }
                _ => tracing::debug!(%text, "ignoring unparsable slider input"),
            },
            InputEvent::FocusOut => {
                if self.handle_highlight {
                    self.handle_highlight = false;
                    effects.push(Effect::RequestRender);
                }
            }
            _ => {}
        }
        Transition::new(self, effects)
    }

    fn aria(&self) -> Aria<()> {
        let range = self.range();
        let mut aria = Aria::new(Role::Slider);
        aria.disabled = self.config.disabled;
        if self.config.disabled {
            aria.tab_index = Some(-1);
        }
        aria.value_range = Some((range.min(), range.max(), self.value));
        aria.value_text = Some(match self.value_text {
            Some(format_value) => format_value(self.value),
            None => format!("{}", self.value),
        });
        aria
    }

    fn phase(&self) -> Phase {
        if self.drag.is_dragging() {
            Phase::Dragging
        } else {
            Phase::Closed
        }
    }

    fn disconnect(mut self) -> Transition<Self, ()> {
        let mut effects = Effects::new();
        if let Some(pointer_id) = self.drag.clear() {
            effects.push(Effect::ReleasePointerCapture(pointer_id));
        }
        self.stream.reset();
        self.stream.disconnect();
        Transition::new(self, effects)
    }

    fn reconnect(mut self) -> Self {
        self.stream.reconnect();
        self
    }
}

impl From<SliderConfig> for Slider {
    fn from(config: SliderConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::num::NonZeroU64;
    use kurbo::Rect;
    use thicket_range::Axis;

    fn pointer(n: u64) -> PointerId {
        NonZeroU64::new(n).unwrap()
    }

    fn slider() -> Slider {
        Slider::default().with_track(Track::new(0.0, 200.0))
    }

    fn down(x: f64, part: Part) -> InputEvent<()> {
        InputEvent::PointerDown(PointerInput::at(Point::new(x, 5.0), part))
    }

    fn moved(x: f64) -> InputEvent<()> {
        InputEvent::PointerMove(PointerInput::at(Point::new(x, 5.0), Part::Other))
    }

    fn up(x: f64) -> InputEvent<()> {
        InputEvent::PointerUp(PointerInput::at(Point::new(x, 5.0), Part::Other))
    }

    #[test]
    fn defaults() {
        let s = Slider::default();
        assert_eq!(s.value(), 10.0);
        assert_eq!(s.variant(), Variant::None);
        assert_eq!(s.aria().value_range, Some((0.0, 20.0, 10.0)));
        assert_eq!(s.aria().value_text.as_deref(), Some("10"));
    }

    #[test]
    fn keyboard_steps() {
        let t = slider().reduce(&InputEvent::key(Key::ArrowRight));
        assert_eq!(t.state.value(), 11.0);
        assert!(t.state.handle_highlight());
        assert!(t.effects.contains(&Effect::EmitInput));
        assert!(t.effects.contains(&Effect::EmitChange));

        let s = t.state.reduce(&InputEvent::key(Key::PageDown)).state;
        assert_eq!(s.value(), 1.0);
        let s = s.reduce(&InputEvent::key(Key::End)).state;
        assert_eq!(s.value(), 20.0);

        let t = s.reduce(&InputEvent::key(Key::ArrowUp));
        assert_eq!(t.state.value(), 20.0);
        assert!(!t.effects.contains(&Effect::EmitInput));

        let s = t.state.reduce(&InputEvent::key(Key::Home)).state;
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn track_press_jumps_and_captures() {
        let t = slider().reduce(&down(50.0, Part::Track));
        assert_eq!(t.state.value(), 5.0);
        assert_eq!(t.state.phase(), Phase::Dragging);
        assert!(t.effects.contains(&Effect::SetPointerCapture(pointer(1))));
        assert!(t.effects.contains(&Effect::EmitInput));

        let t = t.state.reduce(&moved(100.0));
        assert_eq!(t.state.value(), 10.0);
        assert_eq!(t.effects.as_slice(), &[Effect::EmitInput, Effect::RequestRender]);

        let t = t.state.reduce(&up(100.0));
        assert_eq!(t.state.phase(), Phase::Closed);
        assert!(t.effects.contains(&Effect::ReleasePointerCapture(pointer(1))));
        assert!(t.effects.contains(&Effect::EmitChange));
    }

    #[test]
    fn handle_press_does_not_jump() {
        let s = slider().reduce(&InputEvent::key(Key::ArrowUp)).state;
        assert!(s.handle_highlight());
        let t = s.reduce(&down(190.0, Part::Handle));
        assert_eq!(t.state.value(), 11.0);
        assert!(!t.state.handle_highlight());
        assert!(!t.effects.contains(&Effect::EmitInput));
    }

    #[test]
    fn ignored_presses() {
        let secondary = InputEvent::PointerDown(
            PointerInput::at(Point::new(50.0, 0.0), Part::Track).with_button(2),
        );
        let t = slider().reduce(&secondary);
        assert!(t.effects.is_empty());
        assert!(!t.state.is_dragging());

        let t = slider().reduce(&down(50.0, Part::Other));
        assert!(t.effects.is_empty());

        let s = slider().reduce(&InputEvent::attribute("disabled", "")).state;
        let t = s.reduce(&down(50.0, Part::Track));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.value(), 10.0);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let t = slider().reduce(&moved(0.0));
        assert!(t.effects.is_empty());
        assert_eq!(t.state.value(), 10.0);
    }

    #[test]
    fn cancel_ends_drag() {
        let press = InputEvent::PointerDown(
            PointerInput::at(Point::new(20.0, 0.0), Part::Handle).with_pointer(pointer(7)),
        );
        let s = slider().reduce(&press).state;
        let t = s.reduce(&InputEvent::PointerCancel { pointer_id: None });
        assert!(!t.state.is_dragging());
        assert_eq!(
            t.effects.as_slice(),
            &[
                Effect::ReleasePointerCapture(pointer(7)),
                Effect::EmitChange,
                Effect::RequestRender
            ]
        );
    }

    #[test]
    fn set_value_clamps_silently() {
        let t = slider().reduce(&InputEvent::SetValue(50.0));
        assert_eq!(t.state.value(), 20.0);
        assert!(!t.effects.contains(&Effect::EmitInput));

        let t = t.state.reduce(&InputEvent::SetValue(3.4));
        assert_eq!(t.state.value(), 3.0);
    }

    #[test]
    fn text_input_applies_value() {
        let t = slider().reduce(&InputEvent::TextInput("7".to_string()));
        assert_eq!(t.state.value(), 7.0);
        assert!(t.effects.contains(&Effect::EmitInput));

        let t = t.state.reduce(&InputEvent::TextInput("seven".to_string()));
        assert_eq!(t.state.value(), 7.0);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn attributes_reconstrain() {
        let s = slider().reduce(&InputEvent::attribute("max", "5")).state;
        assert_eq!(s.value(), 5.0);
        let s = s.reduce(&InputEvent::attribute("max", "many")).state;
        assert_eq!(s.config().max, 20.0);
        let s = s.reduce(&InputEvent::attribute("value", "12")).state;
        assert_eq!(s.value(), 12.0);
        let s = s.reduce(&InputEvent::attribute("variant", "other")).state;
        assert_eq!(s.variant(), Variant::None);
    }

    #[test]
    fn value_before_bounds_settles_in_any_order() {
        let s = ["value", "min", "max"]
            .into_iter()
            .zip(["50", "0", "100"])
            .fold(Slider::default(), |s, (name, value)| {
                s.reduce(&InputEvent::attribute(name, value)).state
            });
        assert_eq!(s.value(), 50.0);
        assert_eq!(s.aria().value_range, Some((0.0, 100.0, 50.0)));

        let s = Slider::default().reduce(&InputEvent::SetValue(50.0)).state;
        assert_eq!(s.value(), 20.0);
        let s = s.reduce(&InputEvent::attribute("max", "100")).state;
        assert_eq!(s.value(), 50.0);
    }

    #[test]
    fn user_changes_replace_the_requested_value() {
        let s = slider().reduce(&InputEvent::attribute("max", "5")).state;
        let s = s.reduce(&InputEvent::key(Key::ArrowDown)).state;
        assert_eq!(s.value(), 4.0);
        let s = s.reduce(&InputEvent::attribute("max", "100")).state;
        assert_eq!(s.value(), 4.0);
    }

    #[test]
    fn decimal_steps_render_cleanly() {
        let config = SliderConfig {
            min: 0.0,
            max: 1.0,
            step: 0.1,
            value: 0.2,
            ..SliderConfig::default()
        };
        let s = (0..5).fold(Slider::new(config), |s, _| {
            s.reduce(&InputEvent::key(Key::ArrowUp)).state
        });
        assert_eq!(s.value(), 0.7);
        let aria = s.aria();
        assert_eq!(aria.value_text.as_deref(), Some("0.7"));
        assert!(aria.attributes().contains(&("aria-valuenow", "0.7".to_string())));
    }

    #[test]
    fn resize_relayouts_track() {
        let resize = InputEvent::Resize(Rect::new(100.0, 0.0, 300.0, 20.0));
        let s = Slider::default().reduce(&resize).state;
        assert_eq!(s.handle_position(), 200.0);
    }

    #[test]
    fn vertical_track_grows_upward() {
        let track = Track::from_rect(Rect::new(0.0, 0.0, 20.0, 200.0), Axis::Vertical);
        let s = Slider::default().with_track(track);
        let press = PointerInput::at(Point::new(10.0, 150.0), Part::Track);
        let t = s.reduce(&InputEvent::PointerDown(press));
        assert_eq!(t.state.value(), 5.0);
    }

    #[test]
    fn custom_value_text() {
        let s = slider().with_value_text(|v| format!("{v} dB"));
        assert_eq!(s.aria().value_text.as_deref(), Some("10 dB"));
    }

    #[test]
    fn disconnect_releases_capture() {
        let s = slider().reduce(&down(50.0, Part::Track)).state;
        let t = s.disconnect();
        assert_eq!(t.effects.as_slice(), &[Effect::ReleasePointerCapture(pointer(1))]);
        assert!(!t.state.is_dragging());

        let s = t.state.reconnect();
        let t = s.reduce(&down(100.0, Part::Track));
        assert_eq!(t.state.value(), 10.0);
        assert!(t.state.is_dragging());
    }
}
