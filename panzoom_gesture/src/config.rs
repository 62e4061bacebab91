// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration and the keyboard mapping table.

use core::cmp::Ordering;

use hashbrown::HashMap;
use panzoom_transform::{BoundaryConfig, TransformState};

use crate::error::PanZoomError;

/// DOM key codes used by the default [`KeyMapping`].
pub mod key_codes {
    /// Left arrow.
    pub const ARROW_LEFT: u32 = 37;
    /// Up arrow.
    pub const ARROW_UP: u32 = 38;
    /// Right arrow.
    pub const ARROW_RIGHT: u32 = 39;
    /// Down arrow.
    pub const ARROW_DOWN: u32 = 40;
    /// Numpad `+`.
    pub const NUMPAD_ADD: u32 = 107;
    /// Numpad `-`.
    pub const NUMPAD_SUBTRACT: u32 = 109;
    /// `=` / `+` on the main keyboard.
    pub const EQUAL: u32 = 187;
    /// `-` on the main keyboard.
    pub const MINUS: u32 = 189;
}

/// What a mapped key does.
///
/// `x`/`y` pan by that many steps of `key_move_ratio * min(viewport width,
/// height)`; `z` is fed to [`scale_multiplier`](panzoom_transform::scale_multiplier)
/// around the viewport centre (negative zooms in).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyAction {
    /// Horizontal pan steps.
    pub x: f64,
    /// Vertical pan steps.
    pub y: f64,
    /// Zoom delta.
    pub z: f64,
}

impl KeyAction {
    /// Creates an action.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` when the action pans.
    #[must_use]
    pub fn pans(&self) -> bool {
        self.x != 0.0 || self.y != 0.0
    }

    /// Returns `true` when the action zooms.
    #[must_use]
    pub fn zooms(&self) -> bool {
        self.z != 0.0
    }
}

/// Table from key code to [`KeyAction`].
///
/// [`KeyMapping::default`] holds the arrow keys and the `+`/`-` keys of both
/// the main keyboard and the numpad. Entries added with
/// [`KeyMapping::insert`] or [`KeyMapping::extend`] override or extend it.
/// A deserialized mapping also starts from the defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "HashMap<u32, KeyAction>",
        into = "HashMap<u32, KeyAction>"
    )
)]
pub struct KeyMapping {
    actions: HashMap<u32, KeyAction>,
}

impl KeyMapping {
    /// Returns a mapping with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Adds or replaces the action for `key_code`.
    pub fn insert(&mut self, key_code: u32, action: KeyAction) -> Option<KeyAction> {
        self.actions.insert(key_code, action)
    }

    /// Removes the action for `key_code`.
    pub fn remove(&mut self, key_code: u32) -> Option<KeyAction> {
        self.actions.remove(&key_code)
    }

    /// Returns the action for `key_code`, if mapped.
    #[must_use]
    pub fn get(&self, key_code: u32) -> Option<KeyAction> {
        self.actions.get(&key_code).copied()
    }

    /// Number of mapped keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` when nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns a copy with `overrides` applied on top.
    #[must_use]
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (u32, KeyAction)>) -> Self {
        self.extend(overrides);
        self
    }
}

impl Default for KeyMapping {
    fn default() -> Self {
        use key_codes::*;

        let mut mapping = Self::empty();
        mapping.insert(ARROW_UP, KeyAction::new(0.0, -1.0, 0.0));
        mapping.insert(ARROW_DOWN, KeyAction::new(0.0, 1.0, 0.0));
        mapping.insert(ARROW_LEFT, KeyAction::new(-1.0, 0.0, 0.0));
        mapping.insert(ARROW_RIGHT, KeyAction::new(1.0, 0.0, 0.0));
        mapping.insert(MINUS, KeyAction::new(0.0, 0.0, 1.0));
        mapping.insert(NUMPAD_SUBTRACT, KeyAction::new(0.0, 0.0, 1.0));
        mapping.insert(EQUAL, KeyAction::new(0.0, 0.0, -1.0));
        mapping.insert(NUMPAD_ADD, KeyAction::new(0.0, 0.0, -1.0));
        mapping
    }
}

impl Extend<(u32, KeyAction)> for KeyMapping {
    fn extend<I: IntoIterator<Item = (u32, KeyAction)>>(&mut self, iter: I) {
        self.actions.extend(iter);
    }
}

impl From<HashMap<u32, KeyAction>> for KeyMapping {
    fn from(overrides: HashMap<u32, KeyAction>) -> Self {
        Self::default().with_overrides(overrides)
    }
}

impl From<KeyMapping> for HashMap<u32, KeyAction> {
    fn from(mapping: KeyMapping) -> Self {
        mapping.actions
    }
}

/// Options for a [`PanZoom`](crate::PanZoom) controller.
///
/// The defaults give a free (unbounded) view with deferred commits, wheel
/// and keyboard zoom, and double-click zoom.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanZoomConfig {
    /// Speed passed to the scale multiplier for wheel, key and discrete pinch zoom.
    pub zoom_speed: f64,
    /// Zoom ratio applied by a double-click.
    pub double_zoom_speed: f64,
    /// Ignore all input (host pass-through hooks still run).
    pub disabled: bool,
    /// Fit the content into the viewport when the controller is initialized.
    pub auto_center: bool,
    /// Zoom level used by the initial auto-centre.
    pub auto_center_zoom_level: f64,
    /// Ignore keyboard input.
    pub disable_key_interaction: bool,
    /// Ignore double-clicks.
    pub disable_double_click_zoom: bool,
    /// Ignore wheel input.
    pub disable_scroll_zoom: bool,
    /// Scale continuously with the finger distance ratio while pinching.
    pub real_pinch: bool,
    /// Keyboard mapping.
    pub key_mapping: KeyMapping,
    /// Smallest allowed scale.
    pub min_zoom: f64,
    /// Largest allowed scale; `f64::INFINITY` for no limit.
    #[cfg_attr(feature = "serde", serde(with = "unbounded"))]
    pub max_zoom: f64,
    /// Boundary clamping.
    pub boundary: BoundaryConfig,
    /// Keep drag deltas out of the authoritative state until the gesture ends.
    pub defer_commit: bool,
    /// Pixels panned per wheel pixel with shift/ctrl held.
    pub wheel_pan_speed: f64,
    /// Pixels per line for line-mode wheel deltas.
    pub wheel_line_size: f64,
    /// Fraction of the smaller viewport side panned per key step.
    pub key_move_ratio: f64,
}

impl PanZoomConfig {
    /// Default fraction used by keyboard and ratio-based moves.
    pub const DEFAULT_MOVE_RATIO: f64 = 0.05;

    /// Checks that the configuration can drive a controller.
    pub fn validate(&self) -> Result<(), PanZoomError> {
        match self.max_zoom.partial_cmp(&self.min_zoom) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            // NaN bounds are rejected as well.
            Some(Ordering::Less) | None => Err(PanZoomError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            }),
        }
    }

    /// The pose a controller starts from and [`reset`](crate::PanZoom::reset)
    /// returns to: the origin at scale 1, clamped into the zoom range.
    #[must_use]
    pub fn home(&self) -> TransformState {
        TransformState::new(0.0, 0.0, self.clamp_scale(1.0), 0.0)
    }

    /// Clamps `scale` into `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_zoom).min(self.max_zoom)
    }
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            zoom_speed: 1.0,
            double_zoom_speed: 1.75,
            disabled: false,
            auto_center: false,
            auto_center_zoom_level: 1.0,
            disable_key_interaction: false,
            disable_double_click_zoom: false,
            disable_scroll_zoom: false,
            real_pinch: false,
            key_mapping: KeyMapping::default(),
            min_zoom: 0.0,
            max_zoom: f64::INFINITY,
            boundary: BoundaryConfig::default(),
            defer_commit: true,
            wheel_pan_speed: 0.25,
            wheel_line_size: 20.0,
            key_move_ratio: Self::DEFAULT_MOVE_RATIO,
        }
    }
}

/// Serializes an infinite upper bound as `null`.
#[cfg(feature = "serde")]
mod unbounded {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        value.is_finite().then_some(*value).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
