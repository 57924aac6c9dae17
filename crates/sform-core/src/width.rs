#![forbid(unsafe_code)]

//! Container width normalization.
//!
//! Widths arrive from the host as raw pixel measurements and can be
//! anything a layout engine reports: negative while a parent collapses,
//! `NaN` before the first layout pass, infinite in degenerate flex cases.
//! [`ContainerWidth`] clamps all of those to zero so the layout math never
//! has to care.

use std::fmt;

/// A non-negative, finite container width in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ContainerWidth(f64);

impl ContainerWidth {
    /// Zero width.
    pub const ZERO: Self = Self(0.0);

    /// Normalize a raw pixel width. Negative and non-finite values become 0.
    #[inline]
    #[must_use]
    pub fn from_px(px: f64) -> Self {
        if px.is_finite() && px > 0.0 {
            Self(px)
        } else {
            Self::ZERO
        }
    }

    /// Normalize an optional width; `None` is treated as 0.
    #[inline]
    #[must_use]
    pub fn from_opt(px: Option<f64>) -> Self {
        px.map_or(Self::ZERO, Self::from_px)
    }

    /// Content width of a padded box: `width - (left + right)`, clamped at 0.
    ///
    /// Each component is normalized first, so a `NaN` padding counts as no
    /// padding rather than poisoning the result.
    #[must_use]
    pub fn inner(width: f64, padding_left: f64, padding_right: f64) -> Self {
        let outer = Self::from_px(width).0;
        let padding = Self::from_px(padding_left).0 + Self::from_px(padding_right).0;
        Self::from_px(outer - padding)
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn px(self) -> f64 {
        self.0
    }
}

impl From<f64> for ContainerWidth {
    fn from(px: f64) -> Self {
        Self::from_px(px)
    }
}

impl From<u32> for ContainerWidth {
    fn from(px: u32) -> Self {
        Self(f64::from(px))
    }
}

impl fmt::Display for ContainerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
