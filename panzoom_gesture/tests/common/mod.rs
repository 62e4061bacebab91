// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording host shared by the integration tests.

#![allow(
    dead_code,
    missing_docs,
    reason = "Integration-test helper module; each test binary uses a different subset."
)]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use panzoom_gesture::{
    FrameChannel, FrameHandle, FrameScheduler, GestureInput, Host, InputCapture, KeyEvent,
    Modality, PanZoom, PanZoomConfig, PanZoomHandler, PointerEvent, RenderSink, StaticGeometry,
    TouchEvent,
};
use panzoom_transform::TransformState;

pub(crate) const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
pub(crate) const CONTENT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

/// Handler and capture activity, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    MouseDown,
    TouchStart,
    DoubleClick,
    KeyDown(u32),
    KeyUp(u32),
    PanStart(Modality),
    Pan(Modality),
    PanEnd(Modality),
    Attach(Modality),
    Detach(Modality),
    SuppressSelection,
    RestoreSelection,
}

#[derive(Debug, Default)]
pub(crate) struct Log {
    next_handle: u64,
    /// Requested frames that were neither cancelled nor run yet.
    live: Vec<FrameHandle>,
    pub(crate) requested: Vec<FrameChannel>,
    pub(crate) cancelled: Vec<FrameHandle>,
    pub(crate) applied: Vec<String>,
    pub(crate) transitions: Vec<bool>,
    pub(crate) events: Vec<Event>,
    pub(crate) states: Vec<TransformState>,
    /// Makes `prevent_pan` veto every pan.
    pub(crate) veto: bool,
    /// Makes the raw key callbacks swallow every key.
    pub(crate) swallow_keys: bool,
}

/// Implements every host capability on top of a shared [`Log`].
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder(pub(crate) Rc<RefCell<Log>>);

impl Recorder {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub(crate) fn count(&self, event: Event) -> usize {
        self.0.borrow().events.iter().filter(|e| **e == event).count()
    }

    pub(crate) fn states(&self) -> Vec<TransformState> {
        self.0.borrow().states.clone()
    }

    pub(crate) fn applied(&self) -> Vec<String> {
        self.0.borrow().applied.clone()
    }

    pub(crate) fn transitions(&self) -> Vec<bool> {
        self.0.borrow().transitions.clone()
    }

    pub(crate) fn requested(&self) -> Vec<FrameChannel> {
        self.0.borrow().requested.clone()
    }

    pub(crate) fn cancelled(&self) -> Vec<FrameHandle> {
        self.0.borrow().cancelled.clone()
    }

    pub(crate) fn set_veto(&self, veto: bool) {
        self.0.borrow_mut().veto = veto;
    }

    pub(crate) fn set_swallow_keys(&self, swallow: bool) {
        self.0.borrow_mut().swallow_keys = swallow;
    }

    pub(crate) fn clear(&self) {
        let mut log = self.0.borrow_mut();
        log.requested.clear();
        log.cancelled.clear();
        log.applied.clear();
        log.transitions.clear();
        log.events.clear();
        log.states.clear();
    }

    /// Runs every outstanding frame in request order; returns how many applied.
    pub(crate) fn fire_frames(&self, pz: &mut PanZoom) -> usize {
        let live = std::mem::take(&mut self.0.borrow_mut().live);
        live.into_iter().filter(|handle| pz.on_frame(*handle)).count()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().events.push(event);
    }
}

impl FrameScheduler for Recorder {
    fn request_frame(&mut self, channel: FrameChannel) -> FrameHandle {
        let mut log = self.0.borrow_mut();
        log.next_handle += 1;
        let handle = FrameHandle(log.next_handle);
        log.live.push(handle);
        log.requested.push(channel);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut log = self.0.borrow_mut();
        log.live.retain(|live| *live != handle);
        log.cancelled.push(handle);
    }
}

impl RenderSink for Recorder {
    fn apply_transform(&mut self, transform: &str) {
        self.0.borrow_mut().applied.push(transform.to_owned());
    }

    fn set_transition_suppressed(&mut self, suppressed: bool) {
        self.0.borrow_mut().transitions.push(suppressed);
    }
}

impl InputCapture for Recorder {
    fn attach(&mut self, modality: Modality) {
        self.push(Event::Attach(modality));
    }

    fn detach(&mut self, modality: Modality) {
        self.push(Event::Detach(modality));
    }

    fn suppress_text_selection(&mut self) {
        self.push(Event::SuppressSelection);
    }

    fn restore_text_selection(&mut self) {
        self.push(Event::RestoreSelection);
    }
}

impl PanZoomHandler for Recorder {
    fn pan_start(&mut self, input: GestureInput<'_>) {
        self.push(Event::PanStart(input.modality()));
    }

    fn pan(&mut self, input: GestureInput<'_>) {
        self.push(Event::Pan(input.modality()));
    }

    fn pan_end(&mut self, input: GestureInput<'_>) {
        self.push(Event::PanEnd(input.modality()));
    }

    fn state_change(&mut self, state: TransformState) {
        self.0.borrow_mut().states.push(state);
    }

    fn prevent_pan(&mut self, _input: GestureInput<'_>, _offset: kurbo::Point) -> bool {
        self.0.borrow().veto
    }

    fn mouse_down(&mut self, _event: &PointerEvent) {
        self.push(Event::MouseDown);
    }

    fn touch_start(&mut self, _event: &TouchEvent) {
        self.push(Event::TouchStart);
    }

    fn double_click(&mut self, _event: &PointerEvent) {
        self.push(Event::DoubleClick);
    }

    fn key_down(&mut self, event: &KeyEvent) -> bool {
        self.push(Event::KeyDown(event.key_code));
        !self.0.borrow().swallow_keys
    }

    fn key_up(&mut self, event: &KeyEvent) -> bool {
        self.push(Event::KeyUp(event.key_code));
        !self.0.borrow().swallow_keys
    }
}

/// A controller wired to a fresh recorder, without geometry.
pub(crate) fn controller(config: PanZoomConfig) -> (PanZoom, Recorder) {
    let recorder = Recorder::default();
    let host = Host::new(recorder.clone(), recorder.clone())
        .with_capture(Rc::new(RefCell::new(recorder.clone())))
        .with_handler(recorder.clone());
    let pz = PanZoom::new(config, host).expect("valid configuration");
    (pz, recorder)
}

/// A controller bound to `viewport` and `content`.
pub(crate) fn controller_with(
    config: PanZoomConfig,
    viewport: Rect,
    content: Rect,
) -> (PanZoom, Recorder) {
    let (mut pz, recorder) = controller(config);
    pz.init(StaticGeometry::new(viewport, content))
        .expect("geometry is available");
    (pz, recorder)
}

/// A controller bound to an 800x600 viewport showing 400x300 content.
pub(crate) fn ready(config: PanZoomConfig) -> (PanZoom, Recorder) {
    controller_with(config, VIEWPORT, CONTENT)
}

pub(crate) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
