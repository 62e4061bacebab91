// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pose-to-matrix math and the zoom step curve.

use kurbo::{Affine, Point, Vec2};

/// Zoom step applied per unit of `speed` by [`scale_multiplier`].
pub const ZOOM_SPEED_MULTIPLIER: f64 = 0.065;

/// Authoritative pose of the content inside its viewport.
///
/// `x`/`y` are the pre-transform offset in viewport pixels, `scale` is the
/// uniform zoom factor and `angle` is a rotation in degrees. The angle is
/// never normalized modulo 360.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformState {
    /// Horizontal offset in viewport pixels.
    pub x: f64,
    /// Vertical offset in viewport pixels.
    pub y: f64,
    /// Uniform zoom factor.
    pub scale: f64,
    /// Rotation in degrees, clockwise in a y-down coordinate system.
    pub angle: f64,
}

impl TransformState {
    /// The identity pose: no offset, unit scale, no rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Creates a pose from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, scale: f64, angle: f64) -> Self {
        Self { x, y, scale, angle }
    }

    /// Returns the offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns a copy of this pose moved to `offset`.
    #[must_use]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            ..self
        }
    }

    /// Computes the matrix for this pose, rotating about `pivot`.
    ///
    /// See [`transform_matrix`].
    #[must_use]
    pub fn matrix(&self, pivot: Point) -> Affine {
        transform_matrix(self, pivot)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Builds the affine matrix for `state`.
///
/// Content-space points are rotated by `state.angle` degrees about `pivot`,
/// then scaled by `state.scale`, then translated by the offset. With a zero
/// offset, unit scale and no rotation this is [`Affine::IDENTITY`] for any
/// pivot.
///
/// ```
/// use kurbo::{Affine, Point};
/// use panzoom_transform::{TransformState, transform_matrix};
///
/// let m = transform_matrix(&TransformState::IDENTITY, Point::new(50.0, 20.0));
/// assert_eq!(m, Affine::IDENTITY);
/// ```
#[must_use]
pub fn transform_matrix(state: &TransformState, pivot: Point) -> Affine {
    Affine::translate(state.offset())
        * Affine::scale(state.scale)
        * Affine::rotate_about(state.angle.to_radians(), pivot)
}

/// Serializes `matrix` as a 2D affine `matrix(a, b, c, d, x, y)` string.
///
/// Negative zeros are printed as `0`, so the identity is always
/// `matrix(1, 0, 0, 1, 0, 0)`.
#[must_use]
pub fn matrix_string(matrix: Affine) -> String {
    let [a, b, c, d, x, y] = matrix.as_coeffs().map(|v| v + 0.0);
    format!("matrix({a}, {b}, {c}, {d}, {x}, {y})")
}

/// Returns the zoom ratio for a wheel/step `delta` at the given `speed`.
///
/// The curve is `exp(-2 * ZOOM_SPEED_MULTIPLIER * speed * delta / (1 + |delta|))`:
/// - `scale_multiplier(0.0, speed)` is exactly `1.0` for every `speed`.
/// - It is continuous and strictly monotonic in `delta` for `speed > 0`.
/// - Positive deltas zoom out (ratio below `1.0`), negative deltas zoom in.
/// - A unit step changes the scale by about `ZOOM_SPEED_MULTIPLIER * speed`;
///   large wheel deltas approach twice that, never more.
#[must_use]
pub fn scale_multiplier(delta: f64, speed: f64) -> f64 {
    if delta == 0.0 {
        return 1.0;
    }
    let softsign = delta / (1.0 + delta.abs());
    (-2.0 * ZOOM_SPEED_MULTIPLIER * speed * softsign).exp()
}
