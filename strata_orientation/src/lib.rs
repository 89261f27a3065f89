// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_orientation --heading-base-level=0

//! Strata Orientation: viewport orientation detection and scroll-axis selection.
//!
//! A parallax page lays its sections out vertically when the viewport is
//! taller than it is wide and horizontally otherwise, and every scroll
//! computation in the engine follows that choice. This crate holds the two
//! small types that encode it:
//!
//! - [`Orientation`]: portrait vs. landscape, derived from the viewport
//!   dimensions. Detection is a pure function of width and height; callers
//!   re-run it on resize and compare against the previously held value to
//!   decide whether anything needs rewiring.
//! - [`Axis`]: the scroll axis an orientation implies, with selectors that
//!   pick the matching component out of [`kurbo`] geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use strata_orientation::{Axis, Orientation};
//!
//! // A phone held upright.
//! let orientation = Orientation::from_viewport(390.0, 844.0);
//! assert_eq!(orientation, Orientation::Portrait);
//!
//! // Portrait pages scroll vertically, so axis selectors read Y/height.
//! let axis = orientation.axis();
//! assert_eq!(axis, Axis::Vertical);
//!
//! let section = Rect::new(0.0, 1200.0, 390.0, 2044.0);
//! assert_eq!(axis.start(section), 1200.0);
//! assert_eq!(axis.extent(section), 844.0);
//! ```
//!
//! Detection is intentionally strict: a square viewport is landscape, so a
//! resize that lands exactly on the threshold does not flip a landscape
//! layout into portrait.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Rect, Size};

/// Layout orientation of the viewport.
///
/// Governs whether scroll tracking, navigation, and progress computation act
/// on the vertical or horizontal axis. Re-evaluated only on resize; resizes
/// that do not cross the portrait/landscape threshold leave the held value
/// unchanged, which callers use to skip redundant listener rewiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Viewport is taller than it is wide; sections stack vertically and the
    /// page itself scrolls.
    Portrait,
    /// Viewport is at least as wide as it is tall; sections line up
    /// horizontally inside a scrolling container.
    Landscape,
}

impl Orientation {
    /// Detects the orientation from viewport dimensions.
    ///
    /// Portrait iff `height > width`; a square viewport is landscape. Pure
    /// and infallible: any pair of finite dimensions yields an orientation.
    #[must_use]
    pub fn from_viewport(width: f64, height: f64) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Detects the orientation from a viewport [`Size`].
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::from_viewport(size.width, size.height)
    }

    /// Returns the scroll axis this orientation implies.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Portrait => Axis::Vertical,
            Self::Landscape => Axis::Horizontal,
        }
    }
}

/// The active scroll axis.
///
/// Selectors on this type pick the axis component out of 2D geometry so the
/// rest of the engine can stay axis-agnostic: the same progress math serves
/// a vertically scrolling page and a horizontally scrolling container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Page scroll along Y (portrait layouts).
    Vertical,
    /// Container scroll along X (landscape layouts).
    Horizontal,
}

impl Axis {
    /// Returns the leading edge of `rect` along this axis.
    #[must_use]
    pub fn start(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y0,
            Self::Horizontal => rect.x0,
        }
    }

    /// Returns the extent of `rect` along this axis.
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.height(),
            Self::Horizontal => rect.width(),
        }
    }

    /// Returns the component of `size` along this axis.
    #[must_use]
    pub fn of_size(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }
}
