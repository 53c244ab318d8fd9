// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner-radius animation frames.

use crate::CornerRadii;

/// Scales a set of corner radii by a shrinking time fraction.
///
/// This models the rounded-to-square half of a shared-element transition:
/// an external clock produces a fraction running from `1.0` down to `0.0`,
/// and each tick maps the starting radii to a frame of scaled radii. The
/// transition owns no timing, easing or scheduling; it is a pure function
/// of the starting radii and the fraction.
///
/// Frame radii are truncated toward zero to whole pixels, matching the
/// integer-cast semantics of pixel-snapped corner rendering (so `7.9`
/// becomes `7`, not `8`).
///
/// # Examples
///
/// ```
/// use roundrect::{CornerRadii, RadiusTransition};
///
/// let transition = RadiusTransition::new(8.0);
/// assert_eq!(transition.frame(1.0), CornerRadii::from_single_radius(8.0));
/// assert_eq!(transition.frame(0.5), CornerRadii::from_single_radius(4.0));
/// assert_eq!(transition.frame(0.0), CornerRadii::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusTransition {
    start: CornerRadii,
}

impl RadiusTransition {
    /// Create a transition from the fully rounded starting radii.
    pub fn new(start: impl Into<CornerRadii>) -> RadiusTransition {
        RadiusTransition {
            start: start.into().clamp_non_negative(),
        }
    }

    /// The starting radii, as clamped.
    pub fn start(&self) -> CornerRadii {
        self.start
    }

    /// The frame radii at the given fraction.
    ///
    /// The fraction is clamped to `[0, 1]`; `1.0` reproduces the starting
    /// radii and `0.0` is fully square.
    pub fn frame(&self, fraction: f64) -> CornerRadii {
        let f = fraction.clamp(0.0, 1.0);
        CornerRadii {
            top_left: (self.start.top_left * f).trunc(),
            top_right: (self.start.top_right * f).trunc(),
            bottom_right: (self.start.bottom_right * f).trunc(),
            bottom_left: (self.start.bottom_left * f).trunc(),
        }
    }

    /// Run the transition over an externally produced fraction sequence.
    ///
    /// Frames are delivered in strictly decreasing-fraction order;
    /// out-of-order ticks are dropped rather than replayed. The terminal
    /// `0.0` frame is always delivered last, even if the driver never
    /// produced it, so a consumer ends on the fully square state
    /// regardless of frame-rate variability.
    ///
    /// This represents a transition that runs to completion. A driver that
    /// is cancelled mid-sequence should call [`frame`](Self::frame) per
    /// tick instead and simply stop.
    pub fn drive<I, F>(&self, fractions: I, mut on_frame: F)
    where
        I: IntoIterator<Item = f64>,
        F: FnMut(CornerRadii),
    {
        let mut last = f64::INFINITY;
        for fraction in fractions {
            let fraction = fraction.clamp(0.0, 1.0);
            if fraction >= last {
                continue;
            }
            last = fraction;
            on_frame(self.frame(fraction));
        }
        if last != 0.0 {
            on_frame(self.frame(0.0));
        }
    }
}

impl From<CornerRadii> for RadiusTransition {
    fn from(start: CornerRadii) -> RadiusTransition {
        RadiusTransition::new(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let transition = RadiusTransition::new(8.0);
        let mut frames = Vec::new();
        transition.drive([1.0, 0.75, 0.5, 0.25, 0.0], |radii| frames.push(radii));
        assert_eq!(frames.first(), Some(&CornerRadii::from_single_radius(8.0)));
        assert_eq!(frames[2], CornerRadii::from_single_radius(4.0));
        assert_eq!(frames.last(), Some(&CornerRadii::ZERO));
        assert_eq!(frames.len(), 5);
    }

    #[test]
    fn truncates_toward_zero() {
        let transition = RadiusTransition::new((5.0, 5.0, 5.0, 5.0));
        // 5 * 0.5 = 2.5 casts down to 2.
        assert_eq!(transition.frame(0.5), CornerRadii::from_single_radius(2.0));
        // 5 * 0.99 = 4.95 casts down to 4, not 5.
        assert_eq!(transition.frame(0.99), CornerRadii::from_single_radius(4.0));
    }

    #[test]
    fn terminal_frame_is_never_skipped() {
        let transition = RadiusTransition::new(8.0);
        let mut frames = Vec::new();
        // Driver drops the final tick.
        transition.drive([1.0, 0.6, 0.3], |radii| frames.push(radii));
        assert_eq!(frames.last(), Some(&CornerRadii::ZERO));
        assert_eq!(frames.len(), 4);
    }

    #[test]
    fn out_of_order_ticks_are_dropped() {
        let transition = RadiusTransition::new(8.0);
        let mut frames = Vec::new();
        transition.drive([1.0, 0.4, 0.7, 0.2, 0.0], |radii| frames.push(radii));
        assert_eq!(
            frames,
            vec![
                CornerRadii::from_single_radius(8.0),
                CornerRadii::from_single_radius(3.0),
                CornerRadii::from_single_radius(1.0),
                CornerRadii::ZERO,
            ]
        );
    }

    #[test]
    fn zero_start_yields_zero_frames() {
        let transition = RadiusTransition::new(CornerRadii::ZERO);
        let mut frames = Vec::new();
        transition.drive([1.0, 0.5, 0.0], |radii| frames.push(radii));
        assert!(frames.iter().all(|radii| radii.is_zero()));
        assert_eq!(frames.len(), 3);
    }

    #[test]
    fn fraction_is_clamped() {
        let transition = RadiusTransition::new(8.0);
        assert_eq!(transition.frame(2.0), CornerRadii::from_single_radius(8.0));
        assert_eq!(transition.frame(-0.5), CornerRadii::ZERO);
    }
}
