#![forbid(unsafe_code)]

//! Search-form configuration and validation.
//!
//! Defaults mirror the stock search form: collapsed on first render,
//! 20 px gutter, 1/2/3/4 fields per row at the xs/sm/md/lg tiers, labels
//! sized automatically with a full-width colon suffix.

use std::fmt;

use crate::breakpoint::{BreakpointTable, GRID_UNITS, PerRow, Thresholds};

/// Where labels sit relative to their inputs. Passed through to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelPosition {
    /// Left of the input, left-aligned.
    Left,
    /// Left of the input, right-aligned.
    #[default]
    Right,
    /// Above the input.
    Top,
}

/// Construction-time options for a search form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchFormConfig {
    /// Start expanded (all fields visible) instead of collapsed.
    pub default_expand: bool,
    /// Horizontal space between columns, in px.
    pub gutter: u16,
    /// Fields per row at each tier. Each must divide 24.
    pub per_row: PerRow,
    /// Tier thresholds.
    pub thresholds: Thresholds,
    /// Fixed label column width (e.g. `"120px"`). Empty means "estimate".
    pub label_width: Option<String>,
    /// Text appended to every label. Empty means none.
    pub label_suffix: Option<String>,
    /// Label placement.
    pub label_position: LabelPosition,
    /// Control size forwarded to the form (`"small"`, `"mini"`, ...).
    pub size: Option<String>,
}

impl Default for SearchFormConfig {
    fn default() -> Self {
        Self {
            default_expand: false,
            gutter: 20,
            per_row: PerRow::DEFAULT,
            thresholds: Thresholds::DEFAULT,
            label_width: None,
            label_suffix: Some("：".to_owned()),
            label_position: LabelPosition::default(),
            size: None,
        }
    }
}

impl SearchFormConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the form starts expanded.
    #[must_use]
    pub fn default_expand(mut self, expand: bool) -> Self {
        self.default_expand = expand;
        self
    }

    /// Set the gutter in px.
    #[must_use]
    pub fn gutter(mut self, gutter: u16) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set fields per row for all four tiers.
    #[must_use]
    pub fn per_row(mut self, xs: u8, sm: u8, md: u8, lg: u8) -> Self {
        self.per_row = PerRow { xs, sm, md, lg };
        self
    }

    /// Set the tier thresholds.
    #[must_use]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Fix the label column width, bypassing estimation.
    #[must_use]
    pub fn label_width(mut self, width: impl Into<String>) -> Self {
        self.label_width = Some(width.into());
        self
    }

    /// Set the label suffix. An empty string removes it.
    #[must_use]
    pub fn label_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.label_suffix = Some(suffix.into());
        self
    }

    /// Set label placement.
    #[must_use]
    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    /// Set the control size.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Explicit label width, with the empty string treated as absent.
    #[must_use]
    pub fn explicit_label_width(&self) -> Option<&str> {
        non_empty(self.label_width.as_deref())
    }

    /// Label suffix, with the empty string treated as absent.
    #[must_use]
    pub fn effective_label_suffix(&self) -> Option<&str> {
        non_empty(self.label_suffix.as_deref())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), ConfigErrors> {
        self.breakpoint_table().map(|_| ())
    }

    /// Build the breakpoint table this configuration describes.
    pub fn breakpoint_table(&self) -> Result<BreakpointTable, ConfigErrors> {
        BreakpointTable::new(self.thresholds, self.per_row)
    }
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// A configuration defect. Fatal for the widget being constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A fields-per-row count that does not divide the grid.
    NonDivisorPerRow { field: &'static str, value: u8 },
    /// A fields-per-row count of zero.
    ZeroPerRow { field: &'static str },
    /// A tier threshold not strictly greater than the one below it.
    UnorderedThresholds {
        field: &'static str,
        previous: u32,
        current: u32,
    },
}

impl ConfigError {
    /// Name of the offending configuration field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonDivisorPerRow { field, .. }
            | Self::ZeroPerRow { field }
            | Self::UnorderedThresholds { field, .. } => field,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDivisorPerRow { field, value } => write!(
                f,
                "{field}={value}: fields per row must divide {GRID_UNITS}"
            ),
            Self::ZeroPerRow { field } => {
                write!(f, "{field}=0: fields per row must be at least 1")
            }
            Self::UnorderedThresholds {
                field,
                previous,
                current,
            } => write!(
                f,
                "threshold {field}={current} must be greater than {previous}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One or more configuration defects, in detection order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigErrors {
    first: ConfigError,
    rest: Vec<ConfigError>,
}

impl ConfigErrors {
    /// Wrap collected violations; `None` if there are none.
    #[must_use]
    pub fn from_vec(errors: Vec<ConfigError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = errors.next()?;
        Some(Self {
            first,
            rest: errors.collect(),
        })
    }

    /// The first violation found.
    #[must_use]
    pub fn first(&self) -> &ConfigError {
        &self.first
    }

    /// Consume and return the first violation.
    #[must_use]
    pub fn into_first(self) -> ConfigError {
        self.first
    }

    /// Number of violations. At least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All violations in order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        std::iter::once(&self.first).chain(&self.rest)
    }

    /// All violations as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ConfigError> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}
