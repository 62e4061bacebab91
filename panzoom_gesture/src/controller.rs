// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom controller.

use core::fmt;

use kurbo::{Affine, Point, Rect, Vec2};
use panzoom_transform::{
    BoundCoordinates, TransformState, bound_coordinates, content_pivot, scale_multiplier,
    transform_matrix,
};
use ui_events::keyboard::{KeyboardEvent, Modifiers};
use ui_events::pointer::{PointerButton, PointerEvent as UiPointerEvent, PointerType};

use crate::capture::{CaptureGuard, SharedCapture};
use crate::config::PanZoomConfig;
use crate::error::PanZoomError;
use crate::host::{GeometryProvider, Host, PanZoomHandler};
use crate::input::{GestureInput, KeyEvent, Modality, PointerEvent, TouchEvent, WheelEvent};
use crate::scheduler::{FrameChannel, FrameHandle, RenderScheduler};
use crate::session::{GestureKind, GestureSession, GestureState};

/// Pan/zoom/rotate controller for one viewport.
///
/// The controller owns the committed [`TransformState`] and turns host input
/// into pose changes. It never touches the render target directly: every
/// transform goes through the [`RenderScheduler`] and lands when the host
/// reports the frame via [`PanZoom::on_frame`].
///
/// With `defer_commit` on (the default) a drag only moves a transient base
/// position; the committed state, and [`PanZoomHandler::state_change`], catch
/// up once when the gesture ends.
pub struct PanZoom {
    config: PanZoomConfig,
    state: TransformState,
    /// Base offset for deferred moves; equals the committed offset when idle.
    transient: Vec2,
    session: Option<GestureSession>,
    pan_started: bool,
    geometry: Option<Box<dyn GeometryProvider>>,
    capture: SharedCapture,
    renderer: RenderScheduler,
    handler: Box<dyn PanZoomHandler>,
}

impl PanZoom {
    /// Creates a controller.
    ///
    /// The initial pose is the origin at scale 1, clamped into the zoom range.
    /// Fails with [`PanZoomError::InvalidZoomRange`] if the configured zoom
    /// range is empty.
    pub fn new(config: PanZoomConfig, host: Host) -> Result<Self, PanZoomError> {
        config.validate()?;
        let state = config.home();
        let Host {
            frames,
            sink,
            capture,
            handler,
        } = host;
        Ok(Self {
            config,
            state,
            transient: Vec2::ZERO,
            session: None,
            pan_started: false,
            geometry: None,
            capture,
            renderer: RenderScheduler::new(frames, sink),
            handler,
        })
    }

    /// Binds geometry and, if configured, centres the content without animation.
    pub fn init(&mut self, geometry: impl GeometryProvider + 'static) -> Result<(), PanZoomError> {
        self.geometry = Some(Box::new(geometry));
        if self.config.auto_center {
            self.auto_center(self.config.auto_center_zoom_level, false)?;
        }
        Ok(())
    }

    /// Drops any gesture, releases capture and cancels pending frames.
    ///
    /// Pending deferred movement is discarded. Called automatically on drop.
    pub fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(kind = ?session.kind, "gesture dropped by teardown");
        }
        self.pan_started = false;
        self.transient = self.state.offset();
        self.renderer.cancel_all();
        self.geometry = None;
    }

    /// The committed pose.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Current gesture.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.session
            .as_ref()
            .map_or(GestureState::Idle, |session| session.kind.state())
    }

    /// Returns `true` while a pan or pinch is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.session.is_some()
    }

    /// Offset the next deferred move starts from.
    #[must_use]
    pub fn pending_offset(&self) -> Vec2 {
        self.transient
    }

    /// Matrix for the committed pose.
    #[must_use]
    pub fn transform_matrix(&self) -> Affine {
        self.matrix_for(&self.state)
    }

    /// Formatted matrix for the committed pose.
    #[must_use]
    pub fn transform_string(&self) -> String {
        self.renderer.format(self.transform_matrix())
    }

    /// Frame scheduling state, mainly for inspection.
    #[must_use]
    pub fn renderer(&self) -> &RenderScheduler {
        &self.renderer
    }

    /// Enables or disables input handling.
    ///
    /// Disabling during a gesture ends it: pending movement is committed and
    /// capture released, without a [`PanZoomHandler::pan_end`] callback.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled && self.session.is_some() {
            self.finish_session(None);
        }
    }

    /// Applies the frame identified by `handle`. Stale handles are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        self.renderer.run_frame(handle)
    }

    // --- Gesture input ---

    /// Pointer press. Starts a mouse pan for the primary button.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Result<(), PanZoomError> {
        self.handler.mouse_down(event);
        if self.config.disabled || event.button != PointerButton::Primary {
            return Ok(());
        }
        if let Some(session) = &self.session {
            tracing::debug!(active = ?session.kind, "ignoring pointer down during gesture");
            return Ok(());
        }
        let offset = self.local_offset(event.position)?;
        if self
            .handler
            .prevent_pan(GestureInput::Pointer(event), offset)
        {
            return Ok(());
        }
        let guard = self.acquire(Modality::Mouse);
        self.begin(GestureSession::new(GestureKind::MousePan, offset, guard));
        Ok(())
    }

    /// Pointer move. Pans while a mouse gesture is active.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Result<(), PanZoomError> {
        if self.active_kind() != Some(GestureKind::MousePan) {
            return Ok(());
        }
        let offset = self.local_offset(event.position)?;
        let delta = self.track(offset);
        self.pan_step(GestureInput::Pointer(event), delta)
    }

    /// Pointer release. Ends a mouse gesture.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        if self.active_kind() == Some(GestureKind::MousePan) {
            self.finish_session(Some(GestureInput::Pointer(event)));
        }
    }

    /// Routes a [`ui_events`] pointer event.
    ///
    /// Presses, moves, releases and cancels drive the mouse pan and scrolls go
    /// to [`PanZoom::wheel`]. A cancel commits the pan without a
    /// [`PanZoomHandler::pan_end`] callback. Touch presses, moves and releases
    /// are ignored: touches arrive as [`TouchEvent`] lists so a pinch sees
    /// both fingers. Returns `true` when the event was consumed.
    pub fn pointer_event(&mut self, event: &UiPointerEvent) -> Result<bool, PanZoomError> {
        match event {
            UiPointerEvent::Down(down) if down.pointer.pointer_type != PointerType::Touch => {
                self.pointer_down(&PointerEvent::from(down))?;
                Ok(self.active_kind() == Some(GestureKind::MousePan))
            }
            UiPointerEvent::Move(update) if update.pointer.pointer_type != PointerType::Touch => {
                if self.active_kind() != Some(GestureKind::MousePan) {
                    return Ok(false);
                }
                self.pointer_move(&PointerEvent::from_state(&update.current, None))?;
                Ok(true)
            }
            UiPointerEvent::Up(up) if up.pointer.pointer_type != PointerType::Touch => {
                let active = self.active_kind() == Some(GestureKind::MousePan);
                self.pointer_up(&PointerEvent::from(up));
                Ok(active)
            }
            UiPointerEvent::Cancel(_) => {
                if self.active_kind() != Some(GestureKind::MousePan) {
                    return Ok(false);
                }
                self.finish_session(None);
                Ok(true)
            }
            UiPointerEvent::Scroll(scroll) => self.wheel(&WheelEvent::from(scroll)),
            _ => Ok(false),
        }
    }

    /// Touch start. One finger pans, two pinch; a second finger upgrades a
    /// touch pan to a pinch.
    pub fn touch_start(&mut self, event: &TouchEvent) -> Result<(), PanZoomError> {
        self.handler.touch_start(event);
        if self.config.disabled {
            return Ok(());
        }
        match self.active_kind() {
            None => {}
            Some(GestureKind::TouchPan) => {
                if let Some((a, b)) = event.pair() {
                    let midpoint = self.local_offset(a.position.midpoint(b.position))?;
                    if let Some(session) = self.session.as_mut() {
                        session.become_pinch(midpoint, a.position.distance(b.position));
                    }
                }
                return Ok(());
            }
            Some(kind) => {
                tracing::debug!(active = ?kind, "ignoring touch start during gesture");
                return Ok(());
            }
        }

        if let Some((a, b)) = event.pair() {
            let midpoint = self.local_offset(a.position.midpoint(b.position))?;
            let guard = self.acquire(Modality::Touch);
            self.begin(GestureSession::pinch(
                midpoint,
                a.position.distance(b.position),
                guard,
            ));
        } else if let Some(touch) = event.touches.first() {
            let offset = self.local_offset(touch.position)?;
            if self.handler.prevent_pan(GestureInput::Touch(event), offset) {
                return Ok(());
            }
            let guard = self.acquire(Modality::Touch);
            self.begin(GestureSession::new(GestureKind::TouchPan, offset, guard));
        }
        Ok(())
    }

    /// Touch move. Pans with one finger or zooms with two.
    ///
    /// Moves whose finger count does not match the session are ignored until a
    /// start or end event brings them back in sync.
    pub fn touch_move(&mut self, event: &TouchEvent) -> Result<(), PanZoomError> {
        match (self.active_kind(), event.len()) {
            (Some(GestureKind::TouchPan), 1) => {
                let offset = self.local_offset(event.touches[0].position)?;
                let delta = self.track(offset);
                self.pan_step(GestureInput::Touch(event), delta)
            }
            (Some(GestureKind::Pinch), n) if n >= 2 => self.pinch_step(event),
            _ => Ok(()),
        }
    }

    /// Touch end. Lifting the last finger ends the gesture; lifting one of
    /// several keeps it going with the remaining fingers.
    pub fn touch_end(&mut self, event: &TouchEvent) -> Result<(), PanZoomError> {
        let Some(kind) = self.active_kind() else {
            return Ok(());
        };
        if kind.modality() != Modality::Touch {
            return Ok(());
        }

        if let Some((a, b)) = event.pair() {
            let midpoint = self.local_offset(a.position.midpoint(b.position))?;
            if let Some(session) = self.session.as_mut() {
                session.become_pinch(midpoint, a.position.distance(b.position));
            }
        } else if let Some(touch) = event.touches.first() {
            let offset = self.local_offset(touch.position)?;
            if let Some(session) = self.session.as_mut() {
                session.become_touch_pan(offset);
            }
        } else {
            self.finish_session(Some(GestureInput::Touch(event)));
        }
        Ok(())
    }

    /// Touch cancel, handled exactly like [`PanZoom::touch_end`].
    pub fn touch_cancel(&mut self, event: &TouchEvent) -> Result<(), PanZoomError> {
        self.touch_end(event)
    }

    /// Wheel input. Returns `true` when the event was consumed.
    ///
    /// Plain wheel zooms about the pointer, shift pans horizontally and ctrl
    /// pans vertically. Line deltas count `wheel_line_size` pixels per line
    /// and page deltas one viewport per page.
    pub fn wheel(&mut self, event: &WheelEvent) -> Result<bool, PanZoomError> {
        if self.config.disabled || self.config.disable_scroll_zoom {
            return Ok(false);
        }
        let line = Vec2::new(self.config.wheel_line_size, self.config.wheel_line_size);
        let page = self
            .viewport()
            .map_or(Vec2::ZERO, |viewport| viewport.size().to_vec2());
        let delta_y = event.resolve(line, page).y;
        let step = -delta_y * self.config.wheel_pan_speed;
        if event.modifiers.contains(Modifiers::SHIFT) {
            self.move_by(step, 0.0, false)?;
        } else if event.modifiers.contains(Modifiers::CONTROL) {
            self.move_by(0.0, step, false)?;
        } else {
            let offset = self.local_offset(event.position)?;
            let ratio = scale_multiplier(delta_y, self.config.zoom_speed);
            self.zoom_to(offset.x, offset.y, ratio)?;
        }
        Ok(true)
    }

    /// Key press. Returns `true` when the key was mapped and handled.
    pub fn key_down(&mut self, event: &KeyEvent) -> Result<bool, PanZoomError> {
        if !self.handler.key_down(event)
            || self.config.disabled
            || self.config.disable_key_interaction
        {
            return Ok(false);
        }
        let Some(action) = self.config.key_mapping.get(event.key_code) else {
            return Ok(false);
        };
        if action.pans() {
            let viewport = self.viewport()?;
            let step = viewport.width().min(viewport.height()) * self.config.key_move_ratio;
            self.move_by(action.x * step, action.y * step, self.config.defer_commit)?;
        }
        if action.zooms() {
            self.centered_zoom(action.z, None)?;
        }
        Ok(true)
    }

    /// Key release. Commits movement deferred by key presses.
    pub fn key_up(&mut self, event: &KeyEvent) {
        if !self.handler.key_up(event)
            || self.config.disabled
            || self.config.disable_key_interaction
        {
            return;
        }
        if self.session.is_none() && self.transient != self.state.offset() {
            self.flush();
        }
    }

    /// Routes a [`ui_events`] keyboard event to [`PanZoom::key_down`] or
    /// [`PanZoom::key_up`].
    ///
    /// Keys without a numeric code (see [`KeyEvent::from_keyboard`]) are not
    /// consumed. A release reports `true` whenever the key had a code.
    pub fn keyboard_event(&mut self, event: &KeyboardEvent) -> Result<bool, PanZoomError> {
        let Some(key) = KeyEvent::from_keyboard(event) else {
            return Ok(false);
        };
        if event.state.is_down() {
            self.key_down(&key)
        } else {
            self.key_up(&key);
            Ok(true)
        }
    }

    /// Double click. Zooms in about the click position.
    pub fn double_click(&mut self, event: &PointerEvent) -> Result<(), PanZoomError> {
        self.handler.double_click(event);
        if self.config.disabled || self.config.disable_double_click_zoom {
            return Ok(());
        }
        let offset = self.local_offset(event.position)?;
        self.zoom_to(offset.x, offset.y, self.config.double_zoom_speed)
    }

    // --- Programmatic operations ---

    /// Translates by `(dx, dy)`, clamped to the boundary.
    ///
    /// With `defer_commit` the committed state is left alone: a smoothed
    /// intermediate frame and the final frame are scheduled and only the
    /// transient base moves. Otherwise the state is committed immediately.
    pub fn move_by(&mut self, dx: f64, dy: f64, defer_commit: bool) -> Result<(), PanZoomError> {
        let candidate = self.state.with_offset(self.transient + Vec2::new(dx, dy));
        let bounded = self.bound(&candidate)?;

        if defer_commit {
            let previous = self.matrix_for(&self.state.with_offset(self.transient));
            let target = self
                .matrix_for(&candidate)
                .with_translation(bounded.bound);
            let midpoint = previous.translation().lerp(bounded.bound, 0.5);
            self.transient = bounded.offset;
            self.renderer
                .schedule_move(target, target.with_translation(midpoint));
        } else {
            self.commit(candidate.with_offset(bounded.offset));
        }
        Ok(())
    }

    /// Translates by fractions of the viewport's shorter side times `ratio`.
    pub fn move_by_ratio(&mut self, x: f64, y: f64, ratio: f64) -> Result<(), PanZoomError> {
        let viewport = self.viewport()?;
        let step = viewport.width().min(viewport.height()) * ratio;
        self.move_by(x * step, y * step, false)
    }

    /// Multiplies the scale by `ratio`, keeping the viewport-local point
    /// `(x, y)` fixed on screen.
    ///
    /// The new scale is clamped to the zoom range. Zooming further past a
    /// limit the scale already sits on does nothing. Non-finite or
    /// non-positive ratios are ignored.
    pub fn zoom_to(&mut self, x: f64, y: f64, ratio: f64) -> Result<(), PanZoomError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Ok(());
        }
        let scale = self.state.scale;
        let (min, max) = (self.config.min_zoom, self.config.max_zoom);
        let mut ratio = ratio;
        let mut new_scale = scale * ratio;
        if new_scale < min {
            if scale == min {
                return Ok(());
            }
            ratio = min / scale;
            new_scale = min;
        } else if new_scale > max {
            if scale == max {
                return Ok(());
            }
            ratio = max / scale;
            new_scale = max;
        }

        let pivot = Vec2::new(x, y);
        let offset = pivot - (pivot - self.transient) * ratio;
        let candidate = TransformState {
            x: offset.x,
            y: offset.y,
            scale: new_scale,
            angle: self.state.angle,
        };
        let bounded = self.bound(&candidate)?;
        self.commit(candidate.with_offset(bounded.offset));
        Ok(())
    }

    /// Zooms to the absolute scale `level` about `(x, y)`.
    pub fn zoom_abs(&mut self, x: f64, y: f64, level: f64) -> Result<(), PanZoomError> {
        self.zoom_to(x, y, level / self.state.scale)
    }

    /// Zooms about the viewport centre by [`scale_multiplier`]`(delta, speed)`.
    ///
    /// `speed` defaults to the configured zoom speed.
    pub fn centered_zoom(&mut self, delta: f64, speed: Option<f64>) -> Result<(), PanZoomError> {
        let viewport = self.viewport()?;
        let ratio = scale_multiplier(delta, speed.unwrap_or(self.config.zoom_speed));
        self.zoom_to(viewport.width() / 2.0, viewport.height() / 2.0, ratio)
    }

    /// Zooms in one step about the viewport centre.
    pub fn zoom_in(&mut self, speed: Option<f64>) -> Result<(), PanZoomError> {
        self.centered_zoom(-1.0, speed)
    }

    /// Zooms out one step about the viewport centre.
    pub fn zoom_out(&mut self, speed: Option<f64>) -> Result<(), PanZoomError> {
        self.centered_zoom(1.0, speed)
    }

    /// Sets the rotation angle, in degrees. No bounding is applied.
    pub fn rotate(&mut self, angle: f64) {
        let next = TransformState {
            angle,
            ..self.state.with_offset(self.transient)
        };
        self.commit(next);
    }

    /// Sets the rotation angle from the current one.
    pub fn rotate_with(&mut self, f: impl FnOnce(f64) -> f64) {
        self.rotate(f(self.state.angle));
    }

    /// Fits and centres the content in the viewport at `zoom_level` times the
    /// fitting scale, resetting rotation.
    ///
    /// With `animate` off the render target's transition is suppressed for
    /// the resulting frame.
    pub fn auto_center(&mut self, zoom_level: f64, animate: bool) -> Result<(), PanZoomError> {
        let viewport = self.viewport()?;
        let content = self.content()?;
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return Err(PanZoomError::NotReady);
        }

        let fit = (viewport.width() / content.width()).min(viewport.height() / content.height());
        let wanted = fit * zoom_level;
        let scale = self.config.clamp_scale(wanted);
        if scale != wanted {
            tracing::warn!(
                wanted,
                scale,
                min_zoom = self.config.min_zoom,
                max_zoom = self.config.max_zoom,
                "auto-center scale clamped to zoom range"
            );
        }

        let x = (viewport.width() - content.width() * scale) / 2.0;
        let y = (viewport.height() - content.height() * scale) / 2.0;
        if !animate {
            self.renderer.suppress_transition_once();
        }
        self.commit(TransformState::new(x, y, scale, 0.0));
        Ok(())
    }

    /// Restores the home pose: the origin at scale 1, clamped into the zoom
    /// range.
    pub fn reset(&mut self) {
        self.commit(self.config.home());
    }

    // --- Internals ---

    fn viewport(&self) -> Result<Rect, PanZoomError> {
        self.geometry
            .as_ref()
            .and_then(|geometry| geometry.viewport_rect())
            .ok_or(PanZoomError::NotReady)
    }

    fn content(&self) -> Result<Rect, PanZoomError> {
        self.geometry
            .as_ref()
            .and_then(|geometry| geometry.content_rect())
            .ok_or(PanZoomError::NotReady)
    }

    /// Rotation pivot; the origin until content has been measured.
    fn pivot(&self) -> Point {
        self.content().map_or(Point::ZERO, content_pivot)
    }

    fn matrix_for(&self, state: &TransformState) -> Affine {
        transform_matrix(state, self.pivot())
    }

    /// Converts a client position to a viewport-local offset.
    fn local_offset(&self, client: Point) -> Result<Point, PanZoomError> {
        let viewport = self.viewport()?;
        Ok((client - viewport.origin()).to_point())
    }

    fn bound(&self, candidate: &TransformState) -> Result<BoundCoordinates, PanZoomError> {
        let desired = self.matrix_for(candidate).translation();
        let boundary = &self.config.boundary;
        if !boundary.enabled {
            return Ok(BoundCoordinates {
                bound: desired,
                offset: candidate.offset(),
            });
        }
        let viewport = self.viewport()?;
        let content = self.content()?;
        Ok(bound_coordinates(
            desired,
            candidate,
            viewport.size(),
            content,
            boundary,
        ))
    }

    /// Makes `next` the committed pose and schedules it for rendering.
    fn commit(&mut self, next: TransformState) {
        let changed = next != self.state;
        self.state = next;
        self.transient = next.offset();
        self.renderer.cancel(FrameChannel::Intermediate);
        let matrix = self.matrix_for(&next);
        self.renderer.schedule_matrix(FrameChannel::Final, matrix);
        if changed {
            self.handler.state_change(next);
        }
    }

    /// Commits the transient base, replacing anything still queued.
    fn flush(&mut self) {
        self.renderer.cancel_all();
        self.commit(self.state.with_offset(self.transient));
    }

    fn acquire(&self, modality: Modality) -> CaptureGuard {
        CaptureGuard::acquire(&self.capture, modality)
    }

    fn begin(&mut self, session: GestureSession) {
        tracing::debug!(kind = ?session.kind, "gesture started");
        self.pan_started = false;
        self.session = Some(session);
    }

    fn active_kind(&self) -> Option<GestureKind> {
        self.session.as_ref().map(|session| session.kind)
    }

    fn track(&mut self, offset: Point) -> Vec2 {
        self.session
            .as_mut()
            .map_or(Vec2::ZERO, |session| session.track.update(offset))
    }

    fn pan_step(&mut self, input: GestureInput<'_>, delta: Vec2) -> Result<(), PanZoomError> {
        if !self.pan_started && delta != Vec2::ZERO {
            self.pan_started = true;
            self.handler.pan_start(input);
        }
        self.move_by(delta.x, delta.y, self.config.defer_commit)?;
        self.handler.pan(input);
        Ok(())
    }

    fn pinch_step(&mut self, event: &TouchEvent) -> Result<(), PanZoomError> {
        let Some((a, b)) = event.pair() else {
            return Ok(());
        };
        let midpoint = self.local_offset(a.position.midpoint(b.position))?;
        let distance = a.position.distance(b.position);
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let baseline = session.pinch_distance;
        session.pinch_distance = distance;
        session.track.update(midpoint);

        let ratio = if self.config.real_pinch {
            if baseline > 0.0 { distance / baseline } else { 1.0 }
        } else if distance < baseline {
            scale_multiplier(1.0, self.config.zoom_speed)
        } else if distance > baseline {
            scale_multiplier(-1.0, self.config.zoom_speed)
        } else {
            1.0
        };
        self.zoom_to(midpoint.x, midpoint.y, ratio)
    }

    /// Ends the current session: drops queued frames, commits once, reports
    /// the end and releases capture.
    fn finish_session(&mut self, input: Option<GestureInput<'_>>) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.flush();
        self.pan_started = false;
        tracing::debug!(
            kind = ?session.kind,
            moved = ?session.track.total_offset(),
            "gesture ended"
        );
        if let Some(input) = input {
            self.handler.pan_end(input);
        }
        drop(session);
    }
}

impl Drop for PanZoom {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for PanZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoom")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("transient", &self.transient)
            .field("session", &self.session)
            .field("pan_started", &self.pan_started)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticGeometry;
    use crate::scheduler::{FrameScheduler, RenderSink};

    #[derive(Default)]
    struct Counter(u64);

    impl FrameScheduler for Counter {
        fn request_frame(&mut self, _channel: FrameChannel) -> FrameHandle {
            self.0 += 1;
            FrameHandle(self.0)
        }

        fn cancel_frame(&mut self, _handle: FrameHandle) {}
    }

    struct Discard;

    impl RenderSink for Discard {
        fn apply_transform(&mut self, _transform: &str) {}
    }

    fn controller(config: PanZoomConfig) -> PanZoom {
        let host = Host::new(Counter::default(), Discard);
        let mut pz = PanZoom::new(config, host).unwrap();
        pz.init(StaticGeometry::new(
            Rect::new(10.0, 20.0, 810.0, 620.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
        ))
        .unwrap();
        pz
    }

    #[test]
    fn client_positions_become_viewport_local() {
        let pz = controller(PanZoomConfig::default());
        assert_eq!(
            pz.local_offset(Point::new(15.0, 25.0)).unwrap(),
            Point::new(5.0, 5.0)
        );
    }

    #[test]
    fn pivot_falls_back_to_origin_without_geometry() {
        let pz = PanZoom::new(
            PanZoomConfig::default(),
            Host::new(Counter::default(), Discard),
        )
        .unwrap();
        assert_eq!(pz.pivot(), Point::ZERO);
        assert_eq!(pz.transform_string(), "matrix(1, 0, 0, 1, 0, 0)");
    }

    #[test]
    fn deferred_move_leaves_state_until_flush() {
        let mut pz = controller(PanZoomConfig::default());
        pz.move_by(30.0, -10.0, true).unwrap();
        assert_eq!(pz.state(), TransformState::IDENTITY);
        assert_eq!(pz.pending_offset(), Vec2::new(30.0, -10.0));

        pz.flush();
        assert_eq!(pz.state().offset(), Vec2::new(30.0, -10.0));
        assert_eq!(pz.pending_offset(), pz.state().offset());
    }

    #[test]
    fn deferred_move_schedules_midpoint_intermediate() {
        let mut pz = controller(PanZoomConfig::default());
        pz.move_by(40.0, 0.0, true).unwrap();
        assert_eq!(
            pz.renderer().pending_transform(FrameChannel::Intermediate),
            Some("matrix(1, 0, 0, 1, 20, 0)")
        );
        assert_eq!(
            pz.renderer().pending_transform(FrameChannel::Final),
            Some("matrix(1, 0, 0, 1, 40, 0)")
        );
    }

    #[test]
    fn zero_and_negative_ratios_are_ignored() {
        let mut pz = controller(PanZoomConfig::default());
        pz.zoom_to(0.0, 0.0, 0.0).unwrap();
        pz.zoom_to(0.0, 0.0, -2.0).unwrap();
        pz.zoom_to(0.0, 0.0, f64::NAN).unwrap();
        assert_eq!(pz.state(), TransformState::IDENTITY);
    }
}
