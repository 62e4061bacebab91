// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped input capture.
//!
//! While a gesture runs, the host must deliver move/up (or touch move/end)
//! events from anywhere on the page and must stop the browser-style text
//! selection that a drag would otherwise start. [`CaptureGuard`] acquires both
//! when a gesture starts and gives them back when it is dropped, so every way
//! out of a gesture (release, cancel, teardown, controller drop) releases them.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use crate::input::Modality;

/// Host side of input capture.
pub trait InputCapture {
    /// Starts delivering global move/end events for `modality`.
    fn attach(&mut self, modality: Modality);

    /// Stops delivering global move/end events for `modality`.
    fn detach(&mut self, modality: Modality);

    /// Prevents text selection while a gesture runs.
    fn suppress_text_selection(&mut self);

    /// Allows text selection again.
    fn restore_text_selection(&mut self);
}

/// Shared handle to the host's [`InputCapture`].
pub type SharedCapture = Rc<RefCell<dyn InputCapture>>;

/// Capture implementation for hosts that route events themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl InputCapture for NoCapture {
    fn attach(&mut self, _modality: Modality) {}

    fn detach(&mut self, _modality: Modality) {}

    fn suppress_text_selection(&mut self) {}

    fn restore_text_selection(&mut self) {}
}

/// Live capture for one gesture session; released on drop.
pub struct CaptureGuard {
    capture: SharedCapture,
    modality: Modality,
}

impl CaptureGuard {
    /// Attaches listeners for `modality` and suppresses text selection.
    pub fn acquire(capture: &SharedCapture, modality: Modality) -> Self {
        {
            let mut host = capture.borrow_mut();
            host.attach(modality);
            host.suppress_text_selection();
        }
        Self {
            capture: Rc::clone(capture),
            modality,
        }
    }

    /// Input family this guard captured.
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        match self.capture.try_borrow_mut() {
            Ok(mut host) => {
                host.detach(self.modality);
                host.restore_text_selection();
            }
            Err(_) => tracing::error!(
                modality = ?self.modality,
                "input capture is borrowed during release; listeners were not detached"
            ),
        }
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("modality", &self.modality)
            .finish_non_exhaustive()
    }
}
