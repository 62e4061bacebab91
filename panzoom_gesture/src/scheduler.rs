// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-coalesced rendering.
//!
//! Transforms are never written to the render target directly. Each write is
//! queued on one of two [`FrameChannel`]s and applied when the host's frame
//! callback fires. A channel holds at most one pending frame: scheduling again
//! cancels the previous request and replaces it, so a burst of input between
//! two frames costs a single write.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Affine;
//! use panzoom_gesture::{FrameChannel, FrameHandle, FrameScheduler, RenderScheduler, RenderSink};
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
//! struct Print;
//! impl RenderSink for Print {
//!     fn apply_transform(&mut self, transform: &str) {
//!         println!("{transform}");
//!     }
//! }
//!
//! let mut renderer = RenderScheduler::new(Box::new(Frames::default()), Box::new(Print));
//! renderer.schedule_matrix(FrameChannel::Final, Affine::translate((1.0, 2.0)));
//! renderer.schedule_matrix(FrameChannel::Final, Affine::translate((3.0, 4.0)));
//! assert_eq!(
//!     renderer.pending_transform(FrameChannel::Final),
//!     Some("matrix(1, 0, 0, 1, 3, 4)")
//! );
//! assert!(renderer.run_pending(FrameChannel::Final));
//! assert!(!renderer.is_pending(FrameChannel::Final));
//! ```

use core::fmt;

use kurbo::Affine;
use panzoom_transform::matrix_string;

/// Independent render channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameChannel {
    /// The authoritative transform for the current pose.
    Final,
    /// Smoothing frame rendered between two committed positions.
    Intermediate,
}

impl FrameChannel {
    /// Both channels.
    pub const ALL: [Self; 2] = [Self::Final, Self::Intermediate];

    const fn index(self) -> usize {
        match self {
            Self::Final => 0,
            Self::Intermediate => 1,
        }
    }
}

/// Opaque token for a frame request issued by a [`FrameScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host frame callbacks.
///
/// When a requested frame comes due the host calls
/// [`PanZoom::on_frame`](crate::PanZoom::on_frame) (or
/// [`RenderScheduler::run_frame`]) with the returned handle.
pub trait FrameScheduler {
    /// Requests a callback on the next frame.
    fn request_frame(&mut self, channel: FrameChannel) -> FrameHandle;

    /// Cancels a request that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Render target receiving formatted transforms.
pub trait RenderSink {
    /// Formats a matrix for [`RenderSink::apply_transform`].
    fn format_matrix(&self, matrix: Affine) -> String {
        matrix_string(matrix)
    }

    /// Writes a transform to the render target.
    fn apply_transform(&mut self, transform: &str);

    /// Turns the target's transition animation off (`true`) or back on.
    fn set_transition_suppressed(&mut self, _suppressed: bool) {}
}

#[derive(Clone, Debug)]
struct PendingFrame {
    handle: FrameHandle,
    transform: String,
}

/// Coalesces transform writes into at most one pending frame per channel.
pub struct RenderScheduler {
    frames: Box<dyn FrameScheduler>,
    sink: Box<dyn RenderSink>,
    pending: [Option<PendingFrame>; 2],
    transition_suppressed: bool,
}

impl RenderScheduler {
    /// Creates a scheduler writing to `sink` on frames from `frames`.
    #[must_use]
    pub fn new(frames: Box<dyn FrameScheduler>, sink: Box<dyn RenderSink>) -> Self {
        Self {
            frames,
            sink,
            pending: [None, None],
            transition_suppressed: false,
        }
    }

    /// Formats `matrix` the way the sink expects it.
    #[must_use]
    pub fn format(&self, matrix: Affine) -> String {
        self.sink.format_matrix(matrix)
    }

    /// Queues `transform` on `channel`, replacing any pending frame there.
    pub fn schedule(&mut self, channel: FrameChannel, transform: String) {
        if let Some(stale) = self.pending[channel.index()].take() {
            self.frames.cancel_frame(stale.handle);
        }
        let handle = self.frames.request_frame(channel);
        tracing::trace!(?channel, ?handle, %transform, "frame scheduled");
        self.pending[channel.index()] = Some(PendingFrame { handle, transform });
    }

    /// Formats `matrix` and queues it on `channel`.
    pub fn schedule_matrix(&mut self, channel: FrameChannel, matrix: Affine) {
        let transform = self.format(matrix);
        self.schedule(channel, transform);
    }

    /// Queues a smoothed move: `intermediate` then `target`.
    ///
    /// The intermediate frame is skipped (and any stale one dropped) when it
    /// would render the same string as the target.
    pub fn schedule_move(&mut self, target: Affine, intermediate: Affine) {
        let target = self.format(target);
        let intermediate = self.format(intermediate);
        if intermediate == target {
            self.drop_slot(FrameChannel::Intermediate);
        } else {
            self.schedule(FrameChannel::Intermediate, intermediate);
        }
        self.schedule(FrameChannel::Final, target);
    }

    /// Applies the frame identified by `handle`.
    ///
    /// Returns `false` for handles that were cancelled, replaced or already
    /// ran.
    pub fn run_frame(&mut self, handle: FrameHandle) -> bool {
        let channel = FrameChannel::ALL.into_iter().find(|channel| {
            self.pending[channel.index()]
                .as_ref()
                .is_some_and(|frame| frame.handle == handle)
        });
        match channel {
            Some(channel) => self.run_pending(channel),
            None => {
                tracing::trace!(?handle, "ignoring stale frame");
                false
            }
        }
    }

    /// Applies whatever is pending on `channel`, if anything.
    pub fn run_pending(&mut self, channel: FrameChannel) -> bool {
        let Some(frame) = self.pending[channel.index()].take() else {
            return false;
        };
        self.sink.apply_transform(&frame.transform);
        if channel == FrameChannel::Final {
            self.restore_transition();
        }
        true
    }

    /// Cancels the pending frame on `channel`.
    pub fn cancel(&mut self, channel: FrameChannel) {
        self.drop_slot(channel);
        if channel == FrameChannel::Final {
            self.restore_transition();
        }
    }

    /// Cancels pending frames on both channels.
    pub fn cancel_all(&mut self) {
        for channel in FrameChannel::ALL {
            self.cancel(channel);
        }
    }

    /// Returns `true` if `channel` has a frame waiting.
    #[must_use]
    pub fn is_pending(&self, channel: FrameChannel) -> bool {
        self.pending[channel.index()].is_some()
    }

    /// The transform waiting on `channel`.
    #[must_use]
    pub fn pending_transform(&self, channel: FrameChannel) -> Option<&str> {
        self.pending[channel.index()]
            .as_ref()
            .map(|frame| frame.transform.as_str())
    }

    /// Disables the sink's transition until the next final frame is applied
    /// or cancelled.
    pub fn suppress_transition_once(&mut self) {
        if !self.transition_suppressed {
            self.transition_suppressed = true;
            self.sink.set_transition_suppressed(true);
        }
    }

    fn drop_slot(&mut self, channel: FrameChannel) {
        if let Some(frame) = self.pending[channel.index()].take() {
            tracing::trace!(?channel, handle = ?frame.handle, "frame cancelled");
            self.frames.cancel_frame(frame.handle);
        }
    }

    fn restore_transition(&mut self) {
        if self.transition_suppressed {
            self.transition_suppressed = false;
            self.sink.set_transition_suppressed(false);
        }
    }
}

impl fmt::Debug for RenderScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderScheduler")
            .field("pending", &self.pending)
            .field("transition_suppressed", &self.transition_suppressed)
            .finish_non_exhaustive()
    }
}
