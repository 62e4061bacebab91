// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Gesture: input handling and frame scheduling for pan/zoom/rotate views.
//!
//! [`PanZoom`] turns pointer, touch, wheel, keyboard and double-click input
//! into changes of a [`TransformState`](panzoom_transform::TransformState)
//! and renders them through a [`RenderScheduler`] that coalesces writes into
//! host frames.
//!
//! The host supplies capabilities rather than a platform:
//! - [`GeometryProvider`]: viewport and content rects.
//! - [`FrameScheduler`]: next-frame callbacks.
//! - [`RenderSink`]: where formatted transforms are written.
//! - [`InputCapture`]: global listeners and text-selection control for the
//!   duration of a gesture.
//! - [`PanZoomHandler`]: observer callbacks, including the pan veto.
//!
//! ## Gestures
//!
//! At most one gesture runs at a time. A primary-button press starts a mouse
//! pan; one finger starts a touch pan and two a pinch. While a gesture of one
//! modality is live, starts from the other are ignored. Every exit path
//! (release, last finger lifted, touch cancel, [`PanZoom::teardown`], drop)
//! releases the capture.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use panzoom_gesture::{
//!     FrameChannel, FrameHandle, FrameScheduler, Host, PanZoom, PanZoomConfig, PointerEvent,
//!     RenderSink, StaticGeometry,
//! };
//!
//! #[derive(Default)]
//! struct Frames(u64);
//! impl FrameScheduler for Frames {
//!     fn request_frame(&mut self, _channel: FrameChannel) -> FrameHandle {
//!         self.0 += 1;
//!         FrameHandle(self.0)
//!     }
//!     fn cancel_frame(&mut self, _handle: FrameHandle) {}
//! }
//!
//! struct Sink;
//! impl RenderSink for Sink {
//!     fn apply_transform(&mut self, _transform: &str) {}
//! }
//!
//! let host = Host::new(Frames::default(), Sink);
//! let mut pz = PanZoom::new(PanZoomConfig::default(), host).unwrap();
//! pz.init(StaticGeometry::new(
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     Rect::new(0.0, 0.0, 400.0, 300.0),
//! ))
//! .unwrap();
//!
//! // Drag by (40, 10). The committed state catches up on release.
//! pz.pointer_down(&PointerEvent::new((100.0, 100.0))).unwrap();
//! pz.pointer_move(&PointerEvent::new((140.0, 110.0))).unwrap();
//! assert_eq!(pz.state().x, 0.0);
//! pz.pointer_up(&PointerEvent::new((140.0, 110.0)));
//! assert_eq!((pz.state().x, pz.state().y), (40.0, 10.0));
//! assert_eq!(pz.transform_string(), "matrix(1, 0, 0, 1, 40, 10)");
//! ```

mod capture;
mod config;
mod controller;
mod error;
mod host;
mod input;
mod scheduler;
mod session;

pub use capture::{CaptureGuard, InputCapture, NoCapture, SharedCapture};
pub use config::{KeyAction, KeyMapping, PanZoomConfig, key_codes};
pub use controller::PanZoom;
pub use error::PanZoomError;
pub use host::{GeometryProvider, Host, PanZoomHandler, StaticGeometry};
pub use input::{GestureInput, KeyEvent, Modality, PointerEvent, Touch, TouchEvent, WheelEvent};
pub use scheduler::{FrameChannel, FrameHandle, FrameScheduler, RenderScheduler, RenderSink};
pub use session::GestureState;
