// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events.
//!
//! Positions are logical client coordinates, the same space as the viewport
//! rect reported by the [`GeometryProvider`](crate::GeometryProvider). The
//! controller converts them into viewport-local offsets.
//!
//! Buttons, modifiers and scroll deltas are the [`ui_events`] types, and the
//! pointer, wheel and key events here convert from their `ui_events`
//! counterparts. Touches stay a list: a pinch needs every active contact in
//! one event.

use dpi::PhysicalPosition;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyboardEvent, Modifiers, NamedKey};
use ui_events::pointer::{PointerButton, PointerButtonEvent, PointerScrollEvent, PointerState};

use crate::config::key_codes;

/// Input family owning a gesture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Mouse or pen driven through pointer events.
    Mouse,
    /// Touch screen.
    Touch,
}

/// Pointer down/move/up or double-click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Client position.
    pub position: Point,
    /// Button that changed state. Ignored for moves.
    pub button: PointerButton,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates a primary-button event at `position` without modifiers.
    #[must_use]
    pub fn new(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// Builds an event from a pointer state.
    ///
    /// Contacts without a button, such as a pen tip, count as primary.
    #[must_use]
    pub fn from_state(state: &PointerState, button: Option<PointerButton>) -> Self {
        Self {
            position: state.logical_point(),
            button: button.unwrap_or(PointerButton::Primary),
            modifiers: state.modifiers,
        }
    }

    /// Returns this event with a different button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Returns this event with different modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl From<&PointerButtonEvent> for PointerEvent {
    fn from(event: &PointerButtonEvent) -> Self {
        Self::from_state(&event.state, event.button)
    }
}

/// A single finger on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Touch {
    /// Host identifier, stable for the lifetime of the contact.
    pub id: u64,
    /// Client position.
    pub position: Point,
}

impl Touch {
    /// Creates a touch.
    #[must_use]
    pub fn new(id: u64, position: impl Into<Point>) -> Self {
        Self {
            id,
            position: position.into(),
        }
    }
}

/// Touch start/move/end/cancel.
///
/// `touches` lists the contacts still on the surface after the event, in the
/// host's order; on a touch end it excludes the lifted finger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// Active touches.
    pub touches: SmallVec<[Touch; 2]>,
}

impl TouchEvent {
    /// Creates an event from the active touches.
    #[must_use]
    pub fn new(touches: impl IntoIterator<Item = Touch>) -> Self {
        Self {
            touches: touches.into_iter().collect(),
        }
    }

    /// Number of active touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Returns `true` when no finger remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// The first two touches, if there are at least two.
    #[must_use]
    pub fn pair(&self) -> Option<(Touch, Touch)> {
        match self.touches.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}

/// Wheel / scroll input.
#[derive(Clone, Debug)]
pub struct WheelEvent {
    /// Client position of the pointer.
    pub position: Point,
    /// Scroll delta; positive `y` scrolls down.
    pub delta: ScrollDelta,
    /// Physical pixels per logical pixel, applied to pixel deltas.
    pub scale_factor: f64,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Creates a vertical pixel-mode wheel event at `position`.
    #[must_use]
    pub fn new(position: impl Into<Point>, delta_y: f64) -> Self {
        Self {
            position: position.into(),
            delta: ScrollDelta::PixelDelta(PhysicalPosition::new(0.0, delta_y)),
            scale_factor: 1.0,
            modifiers: Modifiers::empty(),
        }
    }

    /// Creates a vertical line-mode wheel event at `position`.
    #[must_use]
    pub fn lines(position: impl Into<Point>, delta_y: f32) -> Self {
        Self {
            delta: ScrollDelta::LineDelta(0.0, delta_y),
            ..Self::new(position, 0.0)
        }
    }

    /// Creates a vertical page-mode wheel event at `position`.
    #[must_use]
    pub fn pages(position: impl Into<Point>, delta_y: f32) -> Self {
        Self {
            delta: ScrollDelta::PageDelta(0.0, delta_y),
            ..Self::new(position, 0.0)
        }
    }

    /// Returns this event with different modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The delta in logical pixels.
    ///
    /// Line deltas are multiplied by `line_size` and page deltas by `page_size`.
    #[must_use]
    pub fn resolve(&self, line_size: Vec2, page_size: Vec2) -> Vec2 {
        match &self.delta {
            ScrollDelta::PixelDelta(pos) => {
                let logical = pos.to_logical(self.scale_factor);
                Vec2::new(logical.x, logical.y)
            }
            ScrollDelta::LineDelta(x, y) => {
                Vec2::new(f64::from(*x) * line_size.x, f64::from(*y) * line_size.y)
            }
            ScrollDelta::PageDelta(x, y) => {
                Vec2::new(f64::from(*x) * page_size.x, f64::from(*y) * page_size.y)
            }
        }
    }
}

impl From<&PointerScrollEvent> for WheelEvent {
    fn from(event: &PointerScrollEvent) -> Self {
        Self {
            position: event.state.logical_point(),
            delta: event.delta.clone(),
            scale_factor: event.state.scale_factor,
            modifiers: event.state.modifiers,
        }
    }
}

/// Key press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// DOM-style numeric key code (37 is the left arrow, 187 is `=`/`+`).
    pub key_code: u32,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates an event for `key_code` without modifiers.
    #[must_use]
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns this event with different modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Converts a keyboard event to its numeric key code.
    ///
    /// Arrows, `=`/`+`, `-`, ASCII letters and digits have codes; other keys
    /// give `None`. Numpad `+`/`-` report the main keyboard codes.
    #[must_use]
    pub fn from_keyboard(event: &KeyboardEvent) -> Option<Self> {
        legacy_key_code(&event.key).map(|key_code| Self {
            key_code,
            modifiers: event.modifiers,
        })
    }
}

fn legacy_key_code(key: &Key) -> Option<u32> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(key_codes::ARROW_LEFT),
        Key::Named(NamedKey::ArrowUp) => Some(key_codes::ARROW_UP),
        Key::Named(NamedKey::ArrowRight) => Some(key_codes::ARROW_RIGHT),
        Key::Named(NamedKey::ArrowDown) => Some(key_codes::ARROW_DOWN),
        Key::Character(text) => match text.as_str() {
            "=" | "+" => Some(key_codes::EQUAL),
            "-" | "_" => Some(key_codes::MINUS),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    // Letters report their upper-case code point, digits their own.
                    (Some(c), None) if c.is_ascii_alphanumeric() => {
                        Some(u32::from(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        },
        _ => None,
    }
}

/// The event that drove a pan callback.
#[derive(Clone, Copy, Debug)]
pub enum GestureInput<'a> {
    /// Mouse-driven pan.
    Pointer(&'a PointerEvent),
    /// Touch-driven pan or pinch.
    Touch(&'a TouchEvent),
}

impl GestureInput<'_> {
    /// Input family of the event.
    #[must_use]
    pub fn modality(&self) -> Modality {
        match self {
            Self::Pointer(_) => Modality::Mouse,
            Self::Touch(_) => Modality::Touch,
        }
    }
}
