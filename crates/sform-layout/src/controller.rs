#![forbid(unsafe_code)]

//! The layout controller: per-row budget, collapse state, and label sizing.
//!
//! # Usage
//!
//! ```
//! use sform_layout::{FieldDescriptor, LayoutController, SearchFormConfig};
//!
//! let mut form = LayoutController::new(SearchFormConfig::default()).unwrap();
//! form.on_fields_changed((0..5).map(|i| FieldDescriptor::labeled(format!("f{i}"))));
//! form.on_resize(900.0);
//!
//! let state = form.state();
//! assert_eq!(state.fields_per_row, 2);
//! assert_eq!(state.budget(), 1);
//! assert!(state.needs_collapse_control);
//!
//! let (visible, hidden) = form.visible_partition();
//! assert_eq!((visible.len(), hidden.len()), (1, 4));
//! ```
//!
//! # Invariants
//!
//! 1. `grid_span * fields_per_row == 24`.
//! 2. `needs_collapse_control` iff `total_field_count > budget`.
//! 3. `visible ++ hidden` is exactly the tagged fields in document order.
//! 4. Fields are hidden only while collapsed *and* the control is needed.
//! 5. Re-applying the same width leaves the state unchanged.
//!
//! # Collapse state
//!
//! `collapsed` starts as `!default_expand` and changes only through
//! [`LayoutController::toggle_collapse`], or when `default_expand` is
//! switched on, which forces the form open. Losing the need for the control
//! does not clear `collapsed`; it only stops it from hiding anything, so the
//! user's choice is still there when the container narrows again.

use sform_core::event::{EventQueue, FormEvent};
use sform_core::width::ContainerWidth;

use crate::breakpoint::{Breakpoint, BreakpointTable, grid_span};
use crate::config::{ConfigError, SearchFormConfig};
use crate::field::FieldDescriptor;
use crate::label;

/// Snapshot of every layout decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    /// Last container width applied.
    pub container_width: ContainerWidth,
    /// Tier the width falls in.
    pub breakpoint: Breakpoint,
    /// Cells per row, action cell included. At least 1.
    pub fields_per_row: u8,
    /// Grid columns per field, `24 / fields_per_row`.
    pub grid_span: u8,
    /// Cells reserved for the action buttons: 0 on single-column rows, else 1.
    pub action_slot_count: u8,
    /// Number of renderable (tagged) fields.
    pub total_field_count: usize,
    /// Whether the expand/collapse toggle should be shown.
    pub needs_collapse_control: bool,
    /// Collapse state as chosen by the user.
    pub collapsed: bool,
    /// Widest label in em.
    pub label_width_em: f64,
}

impl LayoutState {
    fn initial(table: &BreakpointTable, collapsed: bool) -> Self {
        let mut state = Self {
            container_width: ContainerWidth::ZERO,
            breakpoint: Breakpoint::Xs,
            fields_per_row: 1,
            grid_span: grid_span(1),
            action_slot_count: 0,
            total_field_count: 0,
            needs_collapse_control: false,
            collapsed,
            label_width_em: 0.0,
        };
        state.apply_width(table, ContainerWidth::ZERO);
        state
    }

    /// Fields that fit in the first row alongside the action cell. At least 1.
    #[inline]
    #[must_use]
    pub fn budget(&self) -> usize {
        usize::from(self.fields_per_row.saturating_sub(self.action_slot_count).max(1))
    }

    /// Whether fields are actually being hidden right now.
    #[inline]
    #[must_use]
    pub fn is_effectively_collapsed(&self) -> bool {
        self.collapsed && self.needs_collapse_control
    }

    /// Number of fields rendered visibly.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        if self.is_effectively_collapsed() {
            self.budget().min(self.total_field_count)
        } else {
            self.total_field_count
        }
    }

    fn apply_width(&mut self, table: &BreakpointTable, width: ContainerWidth) {
        let fields_per_row = table.resolve(width);
        self.container_width = width;
        self.breakpoint = table.classify(width);
        self.fields_per_row = fields_per_row;
        self.grid_span = grid_span(fields_per_row);
        self.action_slot_count = u8::from(fields_per_row != 1);
        self.refresh_collapse_need();
    }

    fn refresh_collapse_need(&mut self) {
        self.needs_collapse_control = self.total_field_count > self.budget();
    }
}

/// Owns the layout state of one search form.
///
/// Single-threaded: the host calls it from its UI thread and drains
/// [`FormEvent`]s afterwards.
#[derive(Debug, Clone)]
pub struct LayoutController {
    config: SearchFormConfig,
    table: BreakpointTable,
    /// Tagged fields only, in document order.
    fields: Vec<FieldDescriptor>,
    state: LayoutState,
    events: EventQueue,
}

impl LayoutController {
    /// Validate `config` and build a controller sized for a zero-width container.
    ///
    /// Fails with the first configuration violation found.
    pub fn new(config: SearchFormConfig) -> Result<Self, ConfigError> {
        let table = build_table(&config)?;
        let state = LayoutState::initial(&table, !config.default_expand);
        sform_core::debug!(
            default_expand = config.default_expand,
            per_row = ?config.per_row,
            "search form layout created"
        );
        Ok(Self {
            config,
            table,
            fields: Vec::new(),
            state,
            events: EventQueue::new(),
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SearchFormConfig {
        &self.config
    }

    /// Active breakpoint table.
    #[must_use]
    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Snapshot of the current layout decisions.
    #[must_use]
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Tagged fields from the last [`on_fields_changed`](Self::on_fields_changed).
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The container's content width changed.
    ///
    /// Accepts anything convertible to [`ContainerWidth`]; raw `f64` widths
    /// are clamped (negative or non-finite become 0).
    pub fn on_resize(&mut self, width: impl Into<ContainerWidth>) {
        let width = width.into();
        let previous = self.state.fields_per_row;
        self.state.apply_width(&self.table, width);
        if previous != self.state.fields_per_row {
            sform_core::debug!(
                width = width.px(),
                breakpoint = %self.state.breakpoint,
                from = previous,
                to = self.state.fields_per_row,
                "breakpoint changed"
            );
        }
        sform_core::trace!(
            width = width.px(),
            needs_collapse_control = self.state.needs_collapse_control,
            "resize applied"
        );
        self.events.push(FormEvent::LayoutChanged);
    }

    /// The set, order, or labels of child fields changed.
    ///
    /// Placeholders (`has_tag == false`) are dropped.
    pub fn on_fields_changed<I>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        self.fields.clear();
        self.fields
            .extend(descriptors.into_iter().filter(|d| d.has_tag));
        self.state.total_field_count = self.fields.len();
        self.state.label_width_em = label::max_label_em(&self.fields);
        self.state.refresh_collapse_need();
        sform_core::trace!(
            total = self.state.total_field_count,
            label_width_em = self.state.label_width_em,
            "fields changed"
        );
        self.events.push(FormEvent::LayoutChanged);
    }

    /// Flip the collapse state and return the new value.
    ///
    /// Flips even when the toggle is hidden; that has no visible effect
    /// until the control is needed again.
    pub fn toggle_collapse(&mut self) -> bool {
        self.state.collapsed = !self.state.collapsed;
        let collapsed = self.state.collapsed;
        sform_core::debug!(
            collapsed,
            needs_collapse_control = self.state.needs_collapse_control,
            "collapse toggled"
        );
        self.events.push(FormEvent::CollapseToggled { collapsed });
        self.events.push(FormEvent::LayoutChanged);
        collapsed
    }

    /// Update the `default_expand` flag.
    ///
    /// Switching it on forces the form open. Switching it off changes
    /// nothing: the flag only chooses the initial state.
    pub fn set_default_expand(&mut self, default_expand: bool) {
        let switched_on = default_expand && !self.config.default_expand;
        self.config.default_expand = default_expand;
        if switched_on {
            self.force_expand();
        }
    }

    fn force_expand(&mut self) {
        if self.state.collapsed {
            sform_core::debug!("default_expand forced form open");
            self.state.collapsed = false;
            self.events.push(FormEvent::LayoutChanged);
        }
    }

    /// Replace the configuration, keeping the current width, fields, and
    /// collapse state.
    ///
    /// On error the controller is left untouched.
    pub fn reconfigure(&mut self, config: SearchFormConfig) -> Result<(), ConfigError> {
        self.table = build_table(&config)?;
        let switched_on = config.default_expand && !self.config.default_expand;
        self.config = config;
        let width = self.state.container_width;
        self.state.apply_width(&self.table, width);
        if switched_on {
            self.force_expand();
        }
        self.events.push(FormEvent::LayoutChanged);
        Ok(())
    }

    /// Split the tagged fields into the visible prefix and the hidden rest.
    #[must_use]
    pub fn visible_partition(&self) -> (&[FieldDescriptor], &[FieldDescriptor]) {
        self.fields.split_at(self.state.visible_count())
    }

    /// Label column width given an explicit override and a label suffix.
    #[must_use]
    pub fn label_width(&self, explicit: Option<&str>, suffix: Option<&str>) -> String {
        label::label_width(explicit, suffix, self.state.label_width_em)
    }

    /// Label column width from the configured override and suffix.
    #[must_use]
    pub fn configured_label_width(&self) -> String {
        self.label_width(
            self.config.explicit_label_width(),
            self.config.effective_label_suffix(),
        )
    }

    /// The search button was pressed.
    pub fn request_search(&mut self) {
        self.events.push(FormEvent::SearchRequested);
    }

    /// The reset button was pressed.
    pub fn request_reset(&mut self) {
        self.events.push(FormEvent::ResetRequested);
    }

    /// The form was submitted natively (e.g. Enter in an input). Same as search.
    pub fn submit(&mut self) {
        self.request_search();
    }

    /// Whether a render notification is pending.
    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.events.render_pending()
    }

    /// Take all pending events in order.
    pub fn drain_events(&mut self) -> Vec<FormEvent> {
        self.events.drain()
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn build_table(config: &SearchFormConfig) -> Result<BreakpointTable, ConfigError> {
    config.breakpoint_table().map_err(|errors| {
        for error in errors.iter() {
            sform_core::warn!(field = error.field(), %error, "invalid search form config");
        }
        errors.into_first()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(n: usize) -> Vec<FieldDescriptor> {
        (0..n)
            .map(|i| FieldDescriptor::labeled(format!("field{i}")))
            .collect()
    }

    fn controller(config: SearchFormConfig, n: usize, width: f64) -> LayoutController {
        let mut c = LayoutController::new(config).unwrap();
        c.on_fields_changed(fields(n));
        c.on_resize(width);
        c
    }

    #[test]
    fn initial_state_before_any_input() {
        let c = LayoutController::new(SearchFormConfig::default()).unwrap();
        let s = c.state();
        assert_eq!(s.fields_per_row, 1);
        assert_eq!(s.grid_span, 24);
        assert_eq!(s.action_slot_count, 0);
        assert_eq!(s.total_field_count, 0);
        assert!(!s.needs_collapse_control);
        assert!(s.collapsed);
        assert_eq!(s.label_width_em, 0.0);
        assert_eq!(c.configured_label_width(), "2em");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = LayoutController::new(SearchFormConfig::new().per_row(1, 5, 3, 4)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonDivisorPerRow {
                field: "sm",
                value: 5
            }
        );
    }

    #[test]
    fn sm_tier_with_five_fields() {
        let c = controller(SearchFormConfig::default(), 5, 900.0);
        let s = c.state();
        assert_eq!(s.breakpoint, Breakpoint::Sm);
        assert_eq!(s.fields_per_row, 2);
        assert_eq!(s.grid_span, 12);
        assert_eq!(s.action_slot_count, 1);
        assert_eq!(s.budget(), 1);
        assert!(s.needs_collapse_control);
        assert!(s.collapsed);

        let (visible, hidden) = c.visible_partition();
        assert_eq!(visible, &fields(5)[..1]);
        assert_eq!(hidden, &fields(5)[1..]);
    }

    #[test]
    fn single_column_shows_one_field_when_collapsed() {
        let c = controller(SearchFormConfig::default(), 3, 500.0);
        let s = c.state();
        assert_eq!(s.action_slot_count, 0);
        assert_eq!(s.budget(), 1);
        assert!(s.needs_collapse_control);
        assert_eq!(c.visible_partition().0.len(), 1);
    }

    #[test]
    fn lg_tier_budget_is_three() {
        let mut c = controller(SearchFormConfig::default(), 3, 1300.0);
        assert_eq!(c.state().budget(), 3);
        assert!(!c.state().needs_collapse_control);
        assert_eq!(c.visible_partition().1.len(), 0);

        c.on_fields_changed(fields(4));
        assert!(c.state().needs_collapse_control);
        let (visible, hidden) = c.visible_partition();
        assert_eq!((visible.len(), hidden.len()), (3, 1));
    }

    #[test]
    fn everything_visible_when_control_not_needed() {
        let mut c = controller(SearchFormConfig::default(), 2, 1300.0);
        assert!(c.state().collapsed);
        assert_eq!(c.visible_partition().0.len(), 2);
        c.toggle_collapse();
        assert_eq!(c.visible_partition().0.len(), 2);
    }

    #[test]
    fn toggle_reveals_hidden_fields() {
        let mut c = controller(SearchFormConfig::default(), 5, 900.0);
        assert!(!c.toggle_collapse());
        let (visible, hidden) = c.visible_partition();
        assert_eq!(visible.len(), 5);
        assert!(hidden.is_empty());
        assert!(c.toggle_collapse());
        assert_eq!(c.visible_partition().0.len(), 1);
    }

    #[test]
    fn toggle_while_hidden_still_flips() {
        let mut c = controller(SearchFormConfig::default(), 1, 1300.0);
        assert!(!c.state().needs_collapse_control);
        assert!(!c.toggle_collapse());
        assert!(!c.state().collapsed);
    }

    #[test]
    fn widening_keeps_collapse_choice() {
        let mut c = controller(SearchFormConfig::default(), 3, 900.0);
        assert!(c.state().is_effectively_collapsed());
        c.on_resize(1300.0);
        assert!(!c.state().needs_collapse_control);
        assert!(c.state().collapsed);
        assert!(!c.state().is_effectively_collapsed());
        c.on_resize(900.0);
        assert!(c.state().is_effectively_collapsed());
    }

    #[test]
    fn default_expand_starts_open() {
        let config = SearchFormConfig::new().default_expand(true).per_row(1, 2, 3, 4);
        let c = controller(config, 5, 300.0);
        assert!(c.state().needs_collapse_control);
        assert!(!c.state().collapsed);
        assert_eq!(c.visible_partition().0.len(), 5);
    }

    #[test]
    fn default_expand_forces_open_once() {
        let mut c = controller(SearchFormConfig::default(), 5, 900.0);
        c.set_default_expand(true);
        assert!(!c.state().collapsed);
        c.toggle_collapse();
        assert!(c.state().collapsed);
        c.set_default_expand(false);
        assert!(c.state().collapsed);
        c.set_default_expand(true);
        assert!(!c.state().collapsed);
    }

    #[test]
    fn placeholders_are_ignored() {
        let mut c = LayoutController::new(SearchFormConfig::default()).unwrap();
        c.on_fields_changed([
            FieldDescriptor::placeholder(),
            FieldDescriptor::labeled("姓名"),
            FieldDescriptor {
                label: Some("a very long placeholder label".into()),
                has_tag: false,
            },
            FieldDescriptor::labeled("Age"),
        ]);
        assert_eq!(c.state().total_field_count, 2);
        assert_eq!(c.state().label_width_em, 2.0);
        assert_eq!(c.label_width(None, Some("：")), "4em");
        assert_eq!(c.label_width(Some("90px"), Some("：")), "90px");
    }

    #[test]
    fn configured_label_width_uses_config() {
        let mut c = LayoutController::new(SearchFormConfig::new().label_suffix("")).unwrap();
        c.on_fields_changed([FieldDescriptor::labeled("Age")]);
        assert_eq!(c.configured_label_width(), "2.5em");

        let mut c = LayoutController::new(SearchFormConfig::new().label_width("8rem")).unwrap();
        c.on_fields_changed([FieldDescriptor::labeled("Age")]);
        assert_eq!(c.configured_label_width(), "8rem");
    }

    #[test]
    fn resize_is_idempotent() {
        let mut c = controller(SearchFormConfig::default(), 4, 1000.0);
        let before = c.state();
        c.on_resize(1000.0);
        assert_eq!(c.state(), before);
    }

    #[test]
    fn garbage_width_resolves_smallest_tier() {
        let mut c = controller(SearchFormConfig::default(), 2, 1300.0);
        c.on_resize(f64::NAN);
        assert_eq!(c.state().container_width, ContainerWidth::ZERO);
        assert_eq!(c.state().fields_per_row, 1);
        c.on_resize(-20.0);
        assert_eq!(c.state().fields_per_row, 1);
    }

    #[test]
    fn events_are_queued_in_order() {
        let mut c = controller(SearchFormConfig::default(), 5, 900.0);
        assert!(c.render_pending());
        assert_eq!(c.drain_events(), vec![FormEvent::LayoutChanged]);

        c.request_search();
        c.toggle_collapse();
        c.submit();
        c.request_reset();
        assert_eq!(
            c.drain_events(),
            vec![
                FormEvent::SearchRequested,
                FormEvent::CollapseToggled { collapsed: false },
                FormEvent::LayoutChanged,
                FormEvent::SearchRequested,
                FormEvent::ResetRequested,
            ]
        );
        assert!(!c.render_pending());
    }

    #[test]
    fn reconfigure_reapplies_width() {
        let mut c = controller(SearchFormConfig::default(), 5, 900.0);
        c.reconfigure(SearchFormConfig::new().per_row(1, 4, 4, 4)).unwrap();
        let s = c.state();
        assert_eq!(s.fields_per_row, 4);
        assert_eq!(s.budget(), 3);
        assert!(s.collapsed);
        assert_eq!(c.visible_partition().0.len(), 3);

        c.reconfigure(SearchFormConfig::new().default_expand(true)).unwrap();
        assert!(!c.state().collapsed);
    }

    #[test]
    fn reconfigure_error_leaves_state() {
        let mut c = controller(SearchFormConfig::default(), 5, 900.0);
        let before = c.state();
        assert!(c.reconfigure(SearchFormConfig::new().per_row(7, 2, 3, 4)).is_err());
        assert_eq!(c.state(), before);
        assert_eq!(c.config(), &SearchFormConfig::default());
    }
}
