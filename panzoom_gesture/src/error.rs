// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the controller.

/// Errors produced by [`PanZoom`](crate::PanZoom).
///
/// Requests that cannot change anything (zooming past a bound that is already
/// reached, input while disabled) are not errors; they return `Ok(())`.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PanZoomError {
    /// The configured zoom range is empty (`max_zoom < min_zoom`).
    #[error("max_zoom ({max}) cannot be lower than min_zoom ({min})")]
    InvalidZoomRange {
        /// Configured minimum zoom.
        min: f64,
        /// Configured maximum zoom.
        max: f64,
    },
    /// Viewport or content geometry is not available yet.
    #[error("viewport or content geometry is not available yet")]
    NotReady,
}
