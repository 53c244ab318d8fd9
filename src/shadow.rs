// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inset padding for shadows and rounded corners.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::Insets;

/// The vertical shadow inset is stretched relative to the horizontal one.
///
/// A drop shadow is drawn taller than it is wide, so the space reserved
/// below a shape must grow faster than the space at its sides.
pub const SHADOW_MULTIPLIER: f64 = 1.5;

// cos(45°); the deepest point of a corner arc sits this fraction of the
// radius inside the corner, leaving (1 - cos 45°) · r uncovered.
const COS_45: f64 = FRAC_1_SQRT_2;

/// Padding that keeps a shape's shadow and corners inside its bounds.
///
/// The horizontal and vertical insets are computed separately because
/// shadow rendering is not circularly symmetric: the vertical axis always
/// carries the [`SHADOW_MULTIPLIER`], the horizontal axis never does.
///
/// # Examples
///
/// ```
/// use roundrect::ShadowPadding;
///
/// let padding = ShadowPadding::new(4.0, 0.0, false);
/// assert_eq!(padding.horizontal(), 4.0);
/// assert_eq!(padding.vertical(), 6.0);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowPadding {
    /// The shadow size, in pixels.
    pub size: f64,
    /// The uniform corner radius the correction term is computed from.
    pub corner_radius: f64,
    /// Whether to additionally inset for corner rounding.
    pub add_corner_padding: bool,
}

impl ShadowPadding {
    /// Create a new padding description.
    #[inline]
    pub const fn new(size: f64, corner_radius: f64, add_corner_padding: bool) -> ShadowPadding {
        ShadowPadding {
            size,
            corner_radius,
            add_corner_padding,
        }
    }

    /// The inset to apply on each horizontal edge.
    pub fn horizontal(&self) -> f64 {
        if self.add_corner_padding {
            self.size + (1.0 - COS_45) * self.corner_radius
        } else {
            self.size
        }
    }

    /// The inset to apply on each vertical edge.
    pub fn vertical(&self) -> f64 {
        if self.add_corner_padding {
            self.size * SHADOW_MULTIPLIER + (1.0 - COS_45) * self.corner_radius
        } else {
            self.size * SHADOW_MULTIPLIER
        }
    }

    /// Both axes as per-edge insets.
    ///
    /// Consumers should apply [`Insets::ceil`] before subtracting from
    /// bounds so the inset lands on whole device pixels.
    pub fn insets(&self) -> Insets {
        Insets::uniform_xy(self.horizontal(), self.vertical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn vertical_is_stretched() {
        let padding = ShadowPadding::new(4.0, 0.0, false);
        assert_eq!(padding.horizontal(), 4.0);
        assert_eq!(padding.vertical(), 6.0);

        // Zero radius makes the corner flag a no-op.
        let with_corners = ShadowPadding::new(4.0, 0.0, true);
        assert_eq!(with_corners.horizontal(), 4.0);
        assert_eq!(with_corners.vertical(), 6.0);
    }

    #[test]
    fn corner_padding_adds_correction_term() {
        let radius = 8.0;
        let padding = ShadowPadding::new(4.0, radius, true);
        let correction = (1.0 - FRAC_1_SQRT_2) * radius;
        assert!((padding.horizontal() - (4.0 + correction)).abs() < 1e-12);
        assert!((padding.vertical() - (6.0 + correction)).abs() < 1e-12);
    }

    #[test]
    fn corner_padding_is_monotonic_in_radius() {
        for size in [0.0, 1.0, 2.5, 16.0] {
            for radius in [0.0, 0.5, 4.0, 100.0] {
                let with = ShadowPadding::new(size, radius, true);
                let without = ShadowPadding::new(size, radius, false);
                assert!(with.vertical() >= without.vertical());
                assert_eq!(
                    with.vertical() == without.vertical(),
                    radius == 0.0,
                    "equality only at zero radius"
                );
            }
        }
    }

    #[test]
    fn insets_ceil_to_device_pixels() {
        let padding = ShadowPadding::new(4.0, 0.0, false);
        assert_eq!(padding.insets().ceil(), Insets::uniform_xy(4.0, 6.0));

        let fractional = ShadowPadding::new(4.1, 0.0, false);
        assert_eq!(fractional.insets().ceil(), Insets::uniform_xy(5.0, 7.0));
    }
}
