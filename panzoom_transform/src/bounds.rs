// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation-aware boundary clamping.
//!
//! Bounding keeps a minimum share of the content visible inside the viewport.
//! The check works on the *footprint* of the content: the axis-aligned box of
//! its four corners after rotation and scaling, so a rotated content rect is
//! clamped by what it actually covers on screen.

use kurbo::{Point, Rect, Size, Vec2};

use crate::matrix::{TransformState, transform_matrix};

/// Static boundary configuration supplied by the host.
///
/// Ratios are fractions of the content footprint that must overlap the
/// viewport on each axis. Values outside `[0, 1]` are clamped into range when
/// used.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoundaryConfig {
    /// Whether clamping is applied at all.
    pub enabled: bool,
    /// Minimum overlap on the vertical axis, as a fraction of the footprint height.
    pub vertical_ratio: f64,
    /// Minimum overlap on the horizontal axis, as a fraction of the footprint width.
    pub horizontal_ratio: f64,
}

impl BoundaryConfig {
    /// Default overlap ratio on both axes.
    pub const DEFAULT_RATIO: f64 = 0.2;

    /// Returns an enabled configuration with the given ratios.
    #[must_use]
    pub const fn enabled(horizontal_ratio: f64, vertical_ratio: f64) -> Self {
        Self {
            enabled: true,
            vertical_ratio,
            horizontal_ratio,
        }
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            vertical_ratio: Self::DEFAULT_RATIO,
            horizontal_ratio: Self::DEFAULT_RATIO,
        }
    }
}

/// Outcome of [`bound_coordinates`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundCoordinates {
    /// Clamped matrix translation (the `x`/`y` coefficients of the matrix).
    pub bound: Vec2,
    /// Pre-transform offset producing `bound`; the base for the next frame.
    pub offset: Vec2,
}

impl BoundCoordinates {
    /// The shift applied by clamping.
    #[must_use]
    pub fn correction(&self, desired: Vec2) -> Vec2 {
        self.bound - desired
    }
}

/// Returns the rotation pivot used for `content`: the centre of its box.
#[must_use]
pub fn content_pivot(content: Rect) -> Point {
    Point::new(content.width() / 2.0, content.height() / 2.0)
}

/// Returns the viewport-space footprint of `content` posed by `state`.
///
/// `content` is the content box in its own (untransformed) coordinates; its
/// origin is normally the border offset of the content element and is usually
/// zero.
#[must_use]
pub fn transformed_bounding_box(state: &TransformState, content: Rect) -> Rect {
    transform_matrix(state, content_pivot(content)).transform_rect_bbox(content)
}

/// Clamps a desired position so the content keeps overlapping the viewport.
///
/// - `desired` is the matrix translation the caller wants to render.
/// - `state` is the candidate pose; its offset is the pre-transform offset
///   that yields `desired`.
/// - `viewport` is the size of the viewport.
/// - `content` is the untransformed content box.
///
/// On each axis independently the footprint origin is moved into the window
/// where at least `min(ratio * footprint, viewport)` pixels overlap. The same
/// shift is applied to the matrix translation and to the offset. When bounding
/// is disabled the input is returned unchanged.
#[must_use]
pub fn bound_coordinates(
    desired: Vec2,
    state: &TransformState,
    viewport: Size,
    content: Rect,
    config: &BoundaryConfig,
) -> BoundCoordinates {
    if !config.enabled {
        return BoundCoordinates {
            bound: desired,
            offset: state.offset(),
        };
    }

    let footprint = transformed_bounding_box(state, content);
    let shift = Vec2::new(
        axis_shift(
            footprint.x0,
            footprint.width(),
            viewport.width,
            config.horizontal_ratio,
        ),
        axis_shift(
            footprint.y0,
            footprint.height(),
            viewport.height,
            config.vertical_ratio,
        ),
    );

    BoundCoordinates {
        bound: desired + shift,
        offset: state.offset() + shift,
    }
}

/// Shift needed along one axis for a footprint starting at `origin`.
///
/// The window `[required - extent, view - required]` is never empty for
/// `ratio` in `[0, 1]`; if rounding makes it so, the lower edge wins.
fn axis_shift(origin: f64, extent: f64, view: f64, ratio: f64) -> f64 {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    let required = (ratio * extent).min(view.max(0.0));
    let min = required - extent;
    let max = view - required;

    let clamped = if origin < min {
        min
    } else if origin > max {
        max
    } else {
        origin
    };
    clamped - origin
}
