#![forbid(unsafe_code)]

//! Width breakpoints and the fields-per-row table.

use std::fmt;

use sform_core::width::ContainerWidth;

use crate::config::{ConfigError, ConfigErrors};

/// Number of grid columns a form row is divided into.
pub const GRID_UNITS: u8 = 24;

/// Responsive breakpoint tiers for container widths.
///
/// Ordered from smallest to largest.
///
/// | Breakpoint | Default width range | Default fields per row |
/// |-----------|---------------------|------------------------|
/// | `Xs`      | < 768 px            | 1                      |
/// | `Sm`      | 768–997 px          | 2                      |
/// | `Md`      | 998–1199 px         | 3                      |
/// | `Lg`      | 1200+ px            | 4                      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    /// Extra small: one field per row by default.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large: the unbounded final tier.
    Lg,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
    ];

    /// Short label, also the configuration field name for this tier.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum container width (px) of each tier above `Xs`.
///
/// `Xs` implicitly starts at 0 and `Lg` has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    /// Minimum width for `Sm`.
    pub sm: u32,
    /// Minimum width for `Md`.
    pub md: u32,
    /// Minimum width for `Lg`.
    pub lg: u32,
}

impl Thresholds {
    /// 768 / 998 / 1200 px.
    pub const DEFAULT: Self = Self {
        sm: 768,
        md: 998,
        lg: 1200,
    };

    /// Classify a width into its tier.
    #[must_use]
    pub fn classify(self, width: ContainerWidth) -> Breakpoint {
        let px = width.px();
        if px < f64::from(self.sm) {
            Breakpoint::Xs
        } else if px < f64::from(self.md) {
            Breakpoint::Sm
        } else if px < f64::from(self.lg) {
            Breakpoint::Md
        } else {
            Breakpoint::Lg
        }
    }

    fn validate(self, errors: &mut Vec<ConfigError>) {
        let pairs = [
            ("sm", 0, self.sm),
            ("md", self.sm, self.md),
            ("lg", self.md, self.lg),
        ];
        for (field, previous, current) in pairs {
            // `sm` may not be 0 either: Xs would be an empty tier.
            if current <= previous {
                errors.push(ConfigError::UnorderedThresholds {
                    field,
                    previous,
                    current,
                });
            }
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fields per row for each tier. Every value must divide [`GRID_UNITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerRow {
    /// Fields per row below `sm`.
    pub xs: u8,
    /// Fields per row in `Sm`.
    pub sm: u8,
    /// Fields per row in `Md`.
    pub md: u8,
    /// Fields per row in `Lg`.
    pub lg: u8,
}

impl PerRow {
    /// 1 / 2 / 3 / 4.
    pub const DEFAULT: Self = Self {
        xs: 1,
        sm: 2,
        md: 3,
        lg: 4,
    };

    /// Count for a tier.
    #[must_use]
    pub const fn get(self, bp: Breakpoint) -> u8 {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
        }
    }

    fn validate(self, errors: &mut Vec<ConfigError>) {
        for bp in Breakpoint::ALL {
            let value = self.get(bp);
            if value == 0 {
                errors.push(ConfigError::ZeroPerRow { field: bp.label() });
            } else if GRID_UNITS % value != 0 {
                errors.push(ConfigError::NonDivisorPerRow {
                    field: bp.label(),
                    value,
                });
            }
        }
    }
}

impl Default for PerRow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A validated breakpoint table: tier thresholds plus the count for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointTable {
    thresholds: Thresholds,
    per_row: PerRow,
}

impl BreakpointTable {
    /// The default table: `<768 → 1`, `<998 → 2`, `<1200 → 3`, else `4`.
    pub const DEFAULT: Self = Self {
        thresholds: Thresholds::DEFAULT,
        per_row: PerRow::DEFAULT,
    };

    /// Build a table, reporting every configuration violation.
    pub fn new(thresholds: Thresholds, per_row: PerRow) -> Result<Self, ConfigErrors> {
        let mut errors = Vec::new();
        thresholds.validate(&mut errors);
        per_row.validate(&mut errors);
        match ConfigErrors::from_vec(errors) {
            None => Ok(Self {
                thresholds,
                per_row,
            }),
            Some(errors) => Err(errors),
        }
    }

    /// Default thresholds with custom per-row counts.
    pub fn with_per_row(per_row: PerRow) -> Result<Self, ConfigErrors> {
        Self::new(Thresholds::DEFAULT, per_row)
    }

    /// Tier thresholds.
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Per-row counts.
    #[must_use]
    pub const fn per_row(&self) -> PerRow {
        self.per_row
    }

    /// Tier a width falls in.
    #[must_use]
    pub fn classify(&self, width: ContainerWidth) -> Breakpoint {
        self.thresholds.classify(width)
    }

    /// Fields per row at `width`. Always at least 1.
    #[must_use]
    pub fn resolve(&self, width: ContainerWidth) -> u8 {
        self.per_row.get(self.classify(width)).max(1)
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fields per row for a raw pixel width.
///
/// Negative and non-finite widths resolve like 0, i.e. to the smallest tier.
#[must_use]
pub fn resolve(width: f64, table: &BreakpointTable) -> u8 {
    table.resolve(ContainerWidth::from_px(width))
}

/// Grid columns one field occupies when `fields_per_row` share a row.
#[inline]
#[must_use]
pub const fn grid_span(fields_per_row: u8) -> u8 {
    if fields_per_row == 0 {
        GRID_UNITS
    } else {
        GRID_UNITS / fields_per_row
    }
}
