#![forbid(unsafe_code)]

//! Render plan: the controller's decisions flattened for a renderer.
//!
//! [`RenderPlan::build`] is a pure projection of a [`LayoutController`]. A
//! renderer walks `columns` (visible fields first, hidden ones after, flagged
//! so they can stay mounted but not displayed) and then the action column.

use crate::config::LabelPosition;
use crate::controller::LayoutController;

/// Props forwarded to the form element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormProps {
    /// Control size, if configured.
    pub size: Option<String>,
    /// Label placement.
    pub label_position: LabelPosition,
    /// Label column width as a CSS length.
    pub label_width: String,
    /// Label suffix, if any.
    pub label_suffix: Option<String>,
}

/// One grid cell holding a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldColumn {
    /// Index into [`LayoutController::fields`].
    pub index: usize,
    /// Grid columns out of 24.
    pub span: u8,
    /// Rendered but not displayed.
    pub hidden: bool,
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Filled primary button.
    Primary,
    /// Dashed outline button.
    Dashed,
    /// Borderless text button.
    Text,
}

/// Icon shown next to the collapse toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleIcon {
    /// Points down: more fields below.
    ArrowDown,
    /// Points up: fields can be folded away.
    ArrowUp,
}

/// What an action button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Call [`LayoutController::request_search`].
    Search,
    /// Call [`LayoutController::request_reset`].
    Reset,
    /// Call [`LayoutController::toggle_collapse`].
    ToggleCollapse,
}

/// A button in the action column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    /// Handler to invoke.
    pub action: Action,
    /// Caption.
    pub text: &'static str,
    /// Style.
    pub kind: ButtonKind,
    /// Outline-only variant.
    pub plain: bool,
    /// Trailing icon.
    pub icon: Option<ToggleIcon>,
}

impl ActionButton {
    const SEARCH: Self = Self {
        action: Action::Search,
        text: "查 询",
        kind: ButtonKind::Primary,
        plain: false,
        icon: None,
    };

    const RESET: Self = Self {
        action: Action::Reset,
        text: "重 置",
        kind: ButtonKind::Dashed,
        plain: true,
        icon: None,
    };

    const EXPAND: Self = Self {
        action: Action::ToggleCollapse,
        text: "展开",
        kind: ButtonKind::Text,
        plain: false,
        icon: Some(ToggleIcon::ArrowDown),
    };

    const COLLAPSE: Self = Self {
        action: Action::ToggleCollapse,
        text: "收起",
        kind: ButtonKind::Text,
        plain: false,
        icon: Some(ToggleIcon::ArrowUp),
    };
}

/// The trailing cell with search, reset, and (when needed) the toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionColumn {
    /// Grid columns out of 24; same as a field.
    pub span: u8,
    /// Label width for the action form item, so buttons align with inputs.
    pub label_width: &'static str,
    /// Buttons in display order.
    pub buttons: Vec<ActionButton>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Form element props.
    pub form: FormProps,
    /// Row gutter in px.
    pub gutter: u16,
    /// Field cells: visible first, then hidden.
    pub columns: Vec<FieldColumn>,
    /// Action cell.
    pub action: ActionColumn,
}

impl RenderPlan {
    /// Project the controller's current state.
    #[must_use]
    pub fn build(controller: &LayoutController) -> Self {
        let config = controller.config();
        let state = controller.state();
        let span = state.grid_span;
        let visible = state.visible_count();

        let columns = (0..state.total_field_count)
            .map(|index| FieldColumn {
                index,
                span,
                hidden: index >= visible,
            })
            .collect();

        let mut buttons = vec![ActionButton::SEARCH, ActionButton::RESET];
        if state.needs_collapse_control {
            buttons.push(if state.is_effectively_collapsed() {
                ActionButton::EXPAND
            } else {
                ActionButton::COLLAPSE
            });
        }

        Self {
            form: FormProps {
                size: config.size.clone(),
                label_position: config.label_position,
                label_width: controller.configured_label_width(),
                label_suffix: config.effective_label_suffix().map(str::to_owned),
            },
            gutter: config.gutter,
            columns,
            action: ActionColumn {
                span,
                label_width: "0",
                buttons,
            },
        }
    }

    /// Number of columns not flagged hidden.
    #[must_use]
    pub fn visible_columns(&self) -> usize {
        self.columns.iter().filter(|c| !c.hidden).count()
    }

    /// The collapse toggle, if shown.
    #[must_use]
    pub fn toggle(&self) -> Option<&ActionButton> {
        self.action
            .buttons
            .iter()
            .find(|b| b.action == Action::ToggleCollapse)
    }
}
