#![forbid(unsafe_code)]

//! Field descriptors: what the layout engine knows about each child.

/// One child of the form as seen by the layout engine.
///
/// Hosts rebuild these from their current children on every change; the
/// controller never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldDescriptor {
    /// Label text, if the child has one.
    pub label: Option<String>,
    /// `true` for a renderable field, `false` for a placeholder (text node,
    /// comment, conditional gap) that takes no grid cell.
    pub has_tag: bool,
}

impl FieldDescriptor {
    /// A renderable field with a label.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            has_tag: true,
        }
    }

    /// A renderable field without a label.
    #[must_use]
    pub fn unlabeled() -> Self {
        Self {
            label: None,
            has_tag: true,
        }
    }

    /// A non-element placeholder.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Label text if present and non-empty.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        crate::config::non_empty(self.label.as_deref())
    }
}
