#![forbid(unsafe_code)]

//! Layout decisions for responsive search forms.
//!
//! A search form lays its fields out on a 24-column grid, followed by one
//! cell of action buttons. This crate decides, from the container width and
//! the current fields:
//!
//! - [`breakpoint`] - how many cells fit per row ([`BreakpointTable`])
//! - [`controller`] - the per-row budget, whether overflow fields should be
//!   foldable, and which are hidden ([`LayoutController`])
//! - [`label`] - how wide the label column must be to align every label
//! - [`plan`] - a flattened [`RenderPlan`] for the rendering layer
//! - [`observe`] - a scoped guard for the host's resize feed
//!
//! Nothing here renders; hosts feed widths and fields in and read decisions
//! and [`FormEvent`]s out.

pub mod breakpoint;
pub mod config;
pub mod controller;
pub mod field;
pub mod label;
pub mod observe;
pub mod plan;

pub use breakpoint::{Breakpoint, BreakpointTable, GRID_UNITS, PerRow, Thresholds, resolve};
pub use config::{ConfigError, ConfigErrors, LabelPosition, SearchFormConfig};
pub use controller::{LayoutController, LayoutState};
pub use field::FieldDescriptor;
pub use observe::{Observation, ResizeSource};
pub use plan::RenderPlan;
pub use sform_core::event::FormEvent;
pub use sform_core::width::ContainerWidth;
