// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Transform: pose math for pan/zoom/rotate views.
//!
//! This crate holds the pure, side-effect free half of a pan/zoom engine:
//! - [`TransformState`]: the authoritative pose (offset, scale, angle).
//! - [`transform_matrix`]: the affine matrix for a pose, rotating about a pivot.
//! - [`matrix_string`]: the `matrix(a, b, c, d, x, y)` rendering of a matrix.
//! - [`scale_multiplier`]: the zoom ratio for a wheel or step delta.
//! - [`bound_coordinates`]: rotation-aware clamping that keeps a share of the
//!   content visible in the viewport.
//!
//! Input handling, gesture sessions and frame scheduling live in
//! `panzoom_gesture`, which is built on top of this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use panzoom_transform::{
//!     BoundaryConfig, TransformState, bound_coordinates, content_pivot, matrix_string,
//!     transform_matrix,
//! };
//!
//! let content = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let viewport = Size::new(800.0, 600.0);
//!
//! // Drag the content far off the left edge.
//! let wanted = TransformState::new(-2_000.0, 0.0, 1.0, 0.0);
//! let desired = transform_matrix(&wanted, content_pivot(content)).translation();
//!
//! let config = BoundaryConfig::enabled(0.5, 0.5);
//! let bounded = bound_coordinates(desired, &wanted, viewport, content, &config);
//! assert_eq!(bounded.offset.x, -200.0);
//!
//! let pose = wanted.with_offset(bounded.offset);
//! assert_eq!(
//!     matrix_string(transform_matrix(&pose, content_pivot(content))),
//!     "matrix(1, 0, 0, 1, -200, 0)"
//! );
//! ```

mod bounds;
mod matrix;

pub use bounds::{
    BoundCoordinates, BoundaryConfig, bound_coordinates, content_pivot, transformed_bounding_box,
};
pub use matrix::{
    TransformState, ZOOM_SPEED_MULTIPLIER, matrix_string, scale_multiplier, transform_matrix,
};
