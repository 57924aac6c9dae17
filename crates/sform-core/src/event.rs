#![forbid(unsafe_code)]

//! Events emitted by a search form to its host.
//!
//! The layout controller never calls back into the host. It pushes
//! [`FormEvent`]s into an [`EventQueue`] and the host drains them after each
//! interaction:
//!
//! ```
//! use sform_core::event::{EventQueue, FormEvent};
//!
//! let mut queue = EventQueue::new();
//! queue.push(FormEvent::LayoutChanged);
//! queue.push(FormEvent::LayoutChanged);
//! queue.push(FormEvent::SearchRequested);
//!
//! let events = queue.drain();
//! assert_eq!(events, vec![FormEvent::LayoutChanged, FormEvent::SearchRequested]);
//! assert!(queue.is_empty());
//! ```
//!
//! # Invariants
//!
//! 1. At most one [`FormEvent::LayoutChanged`] is pending at a time; it
//!    keeps the position of the first push.
//! 2. User-action events are never coalesced and keep their order.
//! 3. `drain()` empties the queue; events are not replayed.

/// Something the host should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    /// Layout state changed; the rendering collaborator should rebuild.
    LayoutChanged,
    /// The user asked to run the search (search button or form submit).
    SearchRequested,
    /// The user asked to clear the form.
    ResetRequested,
    /// The collapse toggle was activated. Carries the new state.
    CollapseToggled {
        /// `true` if the form is now collapsed.
        collapsed: bool,
    },
}

impl FormEvent {
    /// Whether this event is a render notification rather than a user action.
    #[inline]
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::LayoutChanged)
    }
}

/// FIFO of pending [`FormEvent`]s with render-notification coalescing.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<FormEvent>,
    render_pending: bool,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event. A second `LayoutChanged` is dropped while one is pending.
    pub fn push(&mut self, event: FormEvent) {
        if event.is_render() {
            if self.render_pending {
                return;
            }
            self.render_pending = true;
        }
        self.events.push(event);
    }

    /// Whether a render notification is waiting to be drained.
    #[inline]
    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.render_pending
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<FormEvent> {
        self.render_pending = false;
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_changed_coalesces_in_place() {
        let mut q = EventQueue::new();
        q.push(FormEvent::ResetRequested);
        q.push(FormEvent::LayoutChanged);
        q.push(FormEvent::CollapseToggled { collapsed: false });
        q.push(FormEvent::LayoutChanged);
        assert_eq!(q.len(), 3);
        assert!(q.render_pending());
        assert_eq!(
            q.drain(),
            vec![
                FormEvent::ResetRequested,
                FormEvent::LayoutChanged,
                FormEvent::CollapseToggled { collapsed: false },
            ]
        );
    }

    #[test]
    fn drain_resets_render_flag() {
        let mut q = EventQueue::new();
        q.push(FormEvent::LayoutChanged);
        let _ = q.drain();
        assert!(!q.render_pending());
        q.push(FormEvent::LayoutChanged);
        assert_eq!(q.drain(), vec![FormEvent::LayoutChanged]);
    }

    #[test]
    fn user_actions_are_not_coalesced() {
        let mut q = EventQueue::new();
        q.push(FormEvent::SearchRequested);
        q.push(FormEvent::SearchRequested);
        assert_eq!(q.drain().len(), 2);
        assert!(q.drain().is_empty());
    }
}
