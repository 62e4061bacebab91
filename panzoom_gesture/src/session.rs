// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture sessions.
//!
//! A session exists from the first press (or touch) that starts a gesture
//! until the matching release. It owns the input capture, so dropping the
//! session is enough to release global listeners.

use kurbo::{Point, Vec2};

use crate::capture::CaptureGuard;
use crate::input::Modality;

/// Observable gesture state of a [`PanZoom`](crate::PanZoom).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Single-pointer pan driven by the given modality.
    Panning(Modality),
    /// Two-finger pinch zoom.
    Pinching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GestureKind {
    MousePan,
    TouchPan,
    Pinch,
}

impl GestureKind {
    pub(crate) fn modality(self) -> Modality {
        match self {
            Self::MousePan => Modality::Mouse,
            Self::TouchPan | Self::Pinch => Modality::Touch,
        }
    }

    pub(crate) fn state(self) -> GestureState {
        match self {
            Self::MousePan => GestureState::Panning(Modality::Mouse),
            Self::TouchPan => GestureState::Panning(Modality::Touch),
            Self::Pinch => GestureState::Pinching,
        }
    }
}

/// Tracks the last sampled viewport-local position of a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PointerTrack {
    start: Point,
    last: Point,
}

impl PointerTrack {
    pub(crate) fn at(position: Point) -> Self {
        Self {
            start: position,
            last: position,
        }
    }

    /// Restarts tracking from `position`, as when the finger set changes.
    pub(crate) fn restart(&mut self, position: Point) {
        *self = Self::at(position);
    }

    /// Records `position` and returns the movement since the previous sample.
    pub(crate) fn update(&mut self, position: Point) -> Vec2 {
        let delta = position - self.last;
        self.last = position;
        delta
    }

    pub(crate) fn total_offset(&self) -> Vec2 {
        self.last - self.start
    }
}

#[derive(Debug)]
pub(crate) struct GestureSession {
    pub(crate) kind: GestureKind,
    pub(crate) track: PointerTrack,
    /// Finger distance at the last pinch sample.
    pub(crate) pinch_distance: f64,
    _capture: CaptureGuard,
}

impl GestureSession {
    pub(crate) fn new(kind: GestureKind, position: Point, capture: CaptureGuard) -> Self {
        debug_assert_eq!(
            kind.modality(),
            capture.modality(),
            "capture must match the session's modality"
        );
        Self {
            kind,
            track: PointerTrack::at(position),
            pinch_distance: 0.0,
            _capture: capture,
        }
    }

    pub(crate) fn pinch(midpoint: Point, distance: f64, capture: CaptureGuard) -> Self {
        let mut session = Self::new(GestureKind::Pinch, midpoint, capture);
        session.pinch_distance = distance;
        session
    }

    pub(crate) fn become_pinch(&mut self, midpoint: Point, distance: f64) {
        self.kind = GestureKind::Pinch;
        self.track.restart(midpoint);
        self.pinch_distance = distance;
    }

    pub(crate) fn become_touch_pan(&mut self, position: Point) {
        self.kind = GestureKind::TouchPan;
        self.track.restart(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_reports_deltas_and_total() {
        let mut track = PointerTrack::at(Point::new(10.0, 20.0));
        assert_eq!(track.update(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
        assert_eq!(track.update(Point::new(12.0, 30.0)), Vec2::new(-3.0, 5.0));
        assert_eq!(track.total_offset(), Vec2::new(2.0, 10.0));
    }

    #[test]
    fn restart_forgets_previous_samples() {
        let mut track = PointerTrack::at(Point::ZERO);
        track.update(Point::new(100.0, 0.0));
        track.restart(Point::new(-4.0, -4.0));
        assert_eq!(track.total_offset(), Vec2::ZERO);
        assert_eq!(track.update(Point::new(-4.0, 0.0)), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn kinds_map_to_modality_and_state() {
        assert_eq!(GestureKind::MousePan.modality(), Modality::Mouse);
        assert_eq!(GestureKind::Pinch.modality(), Modality::Touch);
        assert_eq!(
            GestureKind::TouchPan.state(),
            GestureState::Panning(Modality::Touch)
        );
        assert_eq!(GestureKind::Pinch.state(), GestureState::Pinching);
    }
}
