// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities consumed by the controller.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use kurbo::{Point, Rect};
use panzoom_transform::TransformState;

use crate::capture::{InputCapture, NoCapture, SharedCapture};
use crate::input::{GestureInput, KeyEvent, PointerEvent, TouchEvent};
use crate::scheduler::{FrameScheduler, RenderSink};

/// Measures the viewport and the content.
///
/// Either rect may be unavailable (for example before layout); operations that
/// need it then fail with [`PanZoomError::NotReady`](crate::PanZoomError::NotReady).
pub trait GeometryProvider {
    /// Viewport rect in client coordinates.
    fn viewport_rect(&self) -> Option<Rect>;

    /// Untransformed content box, in the content's own coordinates.
    fn content_rect(&self) -> Option<Rect>;
}

/// Geometry that never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticGeometry {
    /// Viewport rect in client coordinates.
    pub viewport: Rect,
    /// Untransformed content box.
    pub content: Rect,
}

impl StaticGeometry {
    /// Creates fixed geometry.
    #[must_use]
    pub const fn new(viewport: Rect, content: Rect) -> Self {
        Self { viewport, content }
    }
}

impl GeometryProvider for StaticGeometry {
    fn viewport_rect(&self) -> Option<Rect> {
        Some(self.viewport)
    }

    fn content_rect(&self) -> Option<Rect> {
        Some(self.content)
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for Rc<G> {
    fn viewport_rect(&self) -> Option<Rect> {
        (**self).viewport_rect()
    }

    fn content_rect(&self) -> Option<Rect> {
        (**self).content_rect()
    }
}

/// Observer callbacks. Every method has a no-op default.
#[allow(unused_variables, reason = "default bodies ignore their arguments")]
pub trait PanZoomHandler {
    /// The first non-zero movement of a pan gesture.
    fn pan_start(&mut self, input: GestureInput<'_>) {}

    /// Every pan movement, after the move was applied.
    fn pan(&mut self, input: GestureInput<'_>) {}

    /// End of a pan or pinch gesture.
    fn pan_end(&mut self, input: GestureInput<'_>) {}

    /// The committed pose changed.
    fn state_change(&mut self, state: TransformState) {}

    /// Returning `true` vetoes a pan starting at the viewport-local `offset`.
    fn prevent_pan(&mut self, input: GestureInput<'_>, offset: Point) -> bool {
        false
    }

    /// Raw pointer down, seen before any gesture logic.
    fn mouse_down(&mut self, event: &PointerEvent) {}

    /// Raw touch start, seen before any gesture logic.
    fn touch_start(&mut self, event: &TouchEvent) {}

    /// Raw double click, seen before zooming.
    fn double_click(&mut self, event: &PointerEvent) {}

    /// Raw key down; returning `false` stops the controller from handling it.
    fn key_down(&mut self, event: &KeyEvent) -> bool {
        true
    }

    /// Raw key up; returning `false` stops the controller from handling it.
    fn key_up(&mut self, event: &KeyEvent) -> bool {
        true
    }
}

impl PanZoomHandler for () {}

/// Everything a [`PanZoom`](crate::PanZoom) needs from its host, apart from
/// geometry which is bound later by [`PanZoom::init`](crate::PanZoom::init).
pub struct Host {
    /// Frame callbacks.
    pub frames: Box<dyn FrameScheduler>,
    /// Render target.
    pub sink: Box<dyn RenderSink>,
    /// Global listener and text-selection control.
    pub capture: SharedCapture,
    /// Observer callbacks.
    pub handler: Box<dyn PanZoomHandler>,
}

impl Host {
    /// Creates a host without capture control or observers.
    pub fn new(frames: impl FrameScheduler + 'static, sink: impl RenderSink + 'static) -> Self {
        Self {
            frames: Box::new(frames),
            sink: Box::new(sink),
            capture: Rc::new(RefCell::new(NoCapture)),
            handler: Box::new(()),
        }
    }

    /// Uses `capture` for gesture sessions.
    #[must_use]
    pub fn with_capture(mut self, capture: Rc<RefCell<impl InputCapture + 'static>>) -> Self {
        self.capture = capture;
        self
    }

    /// Reports to `handler`.
    #[must_use]
    pub fn with_handler(mut self, handler: impl PanZoomHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
