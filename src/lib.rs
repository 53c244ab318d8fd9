// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded-rectangle geometry, shadow insets and corner-radius animation.
//!
//! This crate contains the geometry underneath a rounded image mask: the
//! boundary path of a rectangle with four independently configurable
//! corner radii, the inset padding that keeps a drawn shape's shadow and
//! corners inside its bounds, and the frame interpolation that animates a
//! rounded shape toward a square one. It produces geometry only — filling,
//! clipping and compositing belong to a rendering backend behind the
//! [`MaskSurface`] trait.
//!
//! # Examples
//!
//! Building the boundary path of a card with rounded top corners:
//! ```
//! use roundrect::{Point, RoundRect};
//!
//! let card = RoundRect::new(0.0, 0.0, 100.0, 50.0, (10.0, 10.0, 0.0, 0.0));
//! let path = card.to_mask_path();
//! assert!(path.is_closed());
//! assert_eq!(path.start_point(), Some(Point::new(100.0, 10.0)));
//! ```
//!
//! Keeping a shadow inside its bounds:
//! ```
//! use roundrect::{Rect, ShadowPadding};
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let padding = ShadowPadding::new(4.0, 0.0, false);
//! let content = bounds - padding.insets().ceil();
//! assert_eq!(content, Rect::new(4.0, 6.0, 96.0, 44.0));
//! ```
//!
//! Animating from rounded to square:
//! ```
//! use roundrect::{CornerRadii, RadiusTransition};
//!
//! let transition = RadiusTransition::new(8.0);
//! let mut last = None;
//! transition.drive([1.0, 0.5, 0.25], |radii| last = Some(radii));
//! assert_eq!(last, Some(CornerRadii::ZERO));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod insets;
mod line;
mod mask;
mod path;
mod point;
mod quadbez;
mod radii;
mod rect;
mod rounded_rect;
mod shadow;
mod size;
mod transition;
mod vec2;

pub use crate::insets::*;
pub use crate::line::*;
pub use crate::mask::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::radii::*;
pub use crate::rect::*;
pub use crate::rounded_rect::*;
pub use crate::shadow::*;
pub use crate::size::*;
pub use crate::transition::*;
pub use crate::vec2::*;
