#![forbid(unsafe_code)]

//! Scoped resize observation.
//!
//! The controller never watches the container itself. Hosts wire a width
//! feed (a DOM `ResizeObserver`, a window-resize callback, a test driver)
//! behind [`ResizeSource`] and hold an [`Observation`] for as long as the
//! form is mounted. Dropping the guard disconnects the source exactly once.

use crate::controller::LayoutController;

/// A host-side producer of container width changes.
pub trait ResizeSource {
    /// Start delivering width changes.
    fn observe(&mut self);

    /// Stop delivering width changes and release host resources.
    fn disconnect(&mut self);

    /// Current content width of the observed container, in px.
    fn current_width(&self) -> f64;
}

/// RAII guard for an active [`ResizeSource`].
#[derive(Debug)]
pub struct Observation<S: ResizeSource> {
    source: Option<S>,
}

impl<S: ResizeSource> Observation<S> {
    /// Begin observing and apply the current width to `controller`, like the
    /// first layout pass after mount.
    pub fn start(mut source: S, controller: &mut LayoutController) -> Self {
        controller.on_resize(source.current_width());
        source.observe();
        sform_core::debug!("resize observation started");
        Self {
            source: Some(source),
        }
    }

    /// Forward the source's current width to `controller`.
    pub fn sync(&self, controller: &mut LayoutController) {
        if let Some(source) = &self.source {
            controller.on_resize(source.current_width());
        }
    }

    /// Borrow the source.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Mutably borrow the source.
    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// Disconnect now and hand the source back.
    pub fn stop(mut self) -> Option<S> {
        let mut source = self.source.take()?;
        source.disconnect();
        Some(source)
    }
}

impl<S: ResizeSource> Drop for Observation<S> {
    fn drop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.disconnect();
            sform_core::debug!("resize observation dropped");
        }
    }
}
