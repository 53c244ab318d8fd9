// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A description of the radii for each corner of a rounded rectangle.

/// Radii for each corner of a rounded rectangle.
///
/// The radii are not required to be equal, and a radius may legitimately
/// exceed half of the adjacent edge length; no clamping against overlap is
/// performed, so extreme values can describe a self-intersecting outline.
/// Negative values are treated as zero at the point of use rather than
/// rejected.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadii {
    /// The radius of the top-left corner.
    pub top_left: f64,
    /// The radius of the top-right corner.
    pub top_right: f64,
    /// The radius of the bottom-right corner.
    pub bottom_right: f64,
    /// The radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Sharp corners on all four sides.
    pub const ZERO: CornerRadii = CornerRadii::from_single_radius(0.);

    /// Create a new `CornerRadii`. This function takes radius values for
    /// the four corners. The argument order is "top_left, top_right,
    /// bottom_right, bottom_left", or clockwise starting from top_left.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create a new `CornerRadii` from a single radius. The `radius`
    /// argument will be set as the radius for all four corners.
    pub const fn from_single_radius(radius: f64) -> Self {
        CornerRadii {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Replace any negative radius with zero.
    ///
    /// This is applied before geometry construction; negative radii are
    /// never an error.
    pub fn clamp_non_negative(self) -> Self {
        CornerRadii {
            top_left: self.top_left.max(0.),
            top_right: self.top_right.max(0.),
            bottom_right: self.bottom_right.max(0.),
            bottom_left: self.bottom_left.max(0.),
        }
    }

    /// Whether all four corners are sharp.
    pub fn is_zero(self) -> bool {
        self.top_left == 0. && self.top_right == 0. && self.bottom_right == 0. && self.bottom_left == 0.
    }
}

impl From<f64> for CornerRadii {
    fn from(radius: f64) -> Self {
        CornerRadii::from_single_radius(radius)
    }
}

impl From<(f64, f64, f64, f64)> for CornerRadii {
    fn from(radii: (f64, f64, f64, f64)) -> Self {
        CornerRadii::new(radii.0, radii.1, radii.2, radii.3)
    }
}

/// A corner rounding configuration.
///
/// Callers either set a single uniform radius or override each corner
/// independently; the variant is resolved to a concrete [`CornerRadii`]
/// before any geometry is built.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RadiusSpec {
    /// The same radius on all four corners.
    Uniform(f64),
    /// An independently configured radius per corner.
    PerCorner(CornerRadii),
}

impl RadiusSpec {
    /// The concrete per-corner radii this configuration describes.
    pub fn resolve(self) -> CornerRadii {
        match self {
            RadiusSpec::Uniform(radius) => CornerRadii::from_single_radius(radius),
            RadiusSpec::PerCorner(radii) => radii,
        }
    }
}

impl Default for RadiusSpec {
    fn default() -> Self {
        RadiusSpec::Uniform(0.)
    }
}

impl From<f64> for RadiusSpec {
    fn from(radius: f64) -> Self {
        RadiusSpec::Uniform(radius)
    }
}

impl From<CornerRadii> for RadiusSpec {
    fn from(radii: CornerRadii) -> Self {
        RadiusSpec::PerCorner(radii)
    }
}

impl From<(f64, f64, f64, f64)> for RadiusSpec {
    fn from(radii: (f64, f64, f64, f64)) -> Self {
        RadiusSpec::PerCorner(radii.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radii_clamp_to_zero() {
        let radii = CornerRadii::new(-4., 8., -0.5, 0.).clamp_non_negative();
        assert_eq!(radii, CornerRadii::new(0., 8., 0., 0.));
    }

    #[test]
    fn resolve_uniform() {
        assert_eq!(
            RadiusSpec::Uniform(6.).resolve(),
            CornerRadii::from_single_radius(6.)
        );
        assert_eq!(
            RadiusSpec::from((1., 2., 3., 4.)).resolve(),
            CornerRadii::new(1., 2., 3., 4.)
        );
    }
}
