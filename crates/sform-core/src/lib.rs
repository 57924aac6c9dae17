#![forbid(unsafe_code)]

//! Core: logging, container-width normalization, and widget events.

pub mod event;
pub mod logging;
pub mod width;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
