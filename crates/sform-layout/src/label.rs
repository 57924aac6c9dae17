#![forbid(unsafe_code)]

//! Label column width estimation.
//!
//! Labels are sized in `em` without measuring glyphs: a character above
//! U+007F counts as one full em (CJK and other wide scripts), anything in
//! the ASCII range as half an em. Characters outside the Basic Multilingual
//! Plane cost one em per UTF-16 code unit, so an emoji counts as two.
//!
//! Costs are accumulated in half-em units to keep the arithmetic exact.

use crate::field::FieldDescriptor;

/// Width of `label` in half-em units.
fn half_ems(label: &str) -> u32 {
    label
        .chars()
        .map(|c| {
            if u32::from(c) > 127 {
                2 * c.len_utf16() as u32
            } else {
                1
            }
        })
        .sum()
}

/// Estimated width of `label` in em.
#[must_use]
pub fn label_em(label: &str) -> f64 {
    f64::from(half_ems(label)) / 2.0
}

/// Widest label among `fields`, in em. Fields without a label count as 0,
/// and an empty set yields 0.
#[must_use]
pub fn max_label_em<'a>(fields: impl IntoIterator<Item = &'a FieldDescriptor>) -> f64 {
    let widest = fields
        .into_iter()
        .filter_map(FieldDescriptor::label_text)
        .map(half_ems)
        .max()
        .unwrap_or(0);
    f64::from(widest) / 2.0
}

/// Label column width as a CSS length.
///
/// A non-empty `explicit` width is returned unchanged. Otherwise the result
/// is `label_em + suffix + 1` em, where the suffix counts as one em when
/// present and the trailing em is breathing room for the input.
#[must_use]
pub fn label_width(explicit: Option<&str>, suffix: Option<&str>, label_em: f64) -> String {
    if let Some(explicit) = explicit.filter(|s| !s.is_empty()) {
        return explicit.to_owned();
    }
    let suffix_em = if suffix.is_some_and(|s| !s.is_empty()) {
        1.0
    } else {
        0.0
    };
    format!("{}em", label_em + suffix_em + 1.0)
}
