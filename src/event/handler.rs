//! Event dispatch: notification queue and host fan-out.
//!
//! [`EventDispatcher`] maintains a queue of [`Envelope`]s posted by items and
//! by the sidenav itself. The dispatcher does not route messages: the
//! [`Sidenav`](crate::sidenav::Sidenav) drains the queue, reacts to each
//! envelope, and then hands it back via [`publish`](EventDispatcher::publish)
//! so the host sees it.

use std::collections::VecDeque;

use tokio::sync::mpsc;

use super::message::{Envelope, SidenavEvent};

// ---------------------------------------------------------------------------
// EventDispatcher
// ---------------------------------------------------------------------------

/// Queue-based event dispatcher with host listeners.
///
/// Published events are both kept in an outbox (for synchronous hosts, see
/// [`take_published`](Self::take_published)) and sent to every channel
/// created by [`subscribe`](Self::subscribe).
#[derive(Debug, Default)]
pub struct EventDispatcher {
    queue: VecDeque<Envelope>,
    outbox: Vec<SidenavEvent>,
    listeners: Vec<mpsc::UnboundedSender<SidenavEvent>>,
}

impl EventDispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message envelope for processing.
    pub fn push(&mut self, envelope: Envelope) {
        self.queue.push_back(envelope);
    }

    /// Take the oldest pending envelope.
    pub fn pop(&mut self) -> Option<Envelope> {
        self.queue.pop_front()
    }

    /// Number of pending messages.
    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Register a host listener. Every event published from now on is sent
    /// to the returned receiver. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<SidenavEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    /// Number of live listeners.
    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Publish a processed envelope to the host.
    ///
    /// Messages that are not sidenav notifications are dropped. Listeners
    /// whose receiver has been dropped are removed.
    pub fn publish(&mut self, envelope: &Envelope) {
        let Some(event) = SidenavEvent::from_envelope(envelope) else {
            return;
        };
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
        self.outbox.push(event);
    }

    /// Drain all published events. The outbox is empty after this call.
    pub fn take_published(&mut self) -> Vec<SidenavEvent> {
        std::mem::take(&mut self.outbox)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::NodeId;
    use crate::event::message::{ItemCollapsed, ItemExpanded};
    use slotmap::SlotMap;

    fn ids() -> (NodeId, NodeId) {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        (sm.insert(()), sm.insert(()))
    }

    #[test]
    fn new_dispatcher_is_empty() {
        let disp = EventDispatcher::new();
        assert!(disp.is_empty());
        assert_eq!(disp.pending_count(), 0);
        assert_eq!(disp.listener_count(), 0);
    }

    #[test]
    fn push_and_pop_preserve_order() {
        let (a, b) = ids();
        let mut disp = EventDispatcher::new();
        disp.push(Envelope::new(ItemExpanded { item: a }, a));
        disp.push(Envelope::new(ItemCollapsed { item: b }, b));
        assert_eq!(disp.pending_count(), 2);

        assert_eq!(disp.pop().unwrap().sender, a);
        assert_eq!(disp.pop().unwrap().sender, b);
        assert!(disp.pop().is_none());
    }

    #[test]
    fn publish_fills_outbox() {
        let (a, _) = ids();
        let mut disp = EventDispatcher::new();
        disp.publish(&Envelope::new(ItemExpanded { item: a }, a));
        let events = disp.take_published();
        assert_eq!(events, vec![SidenavEvent::ItemExpanded(ItemExpanded { item: a })]);
        assert!(disp.take_published().is_empty());
    }

    #[test]
    fn publish_reaches_listeners() {
        let (a, _) = ids();
        let mut disp = EventDispatcher::new();
        let mut rx = disp.subscribe();
        disp.publish(&Envelope::new(ItemCollapsed { item: a }, a));
        assert_eq!(
            rx.try_recv().unwrap(),
            SidenavEvent::ItemCollapsed(ItemCollapsed { item: a })
        );
    }

    #[test]
    fn dropped_listener_is_pruned() {
        let (a, _) = ids();
        let mut disp = EventDispatcher::new();
        let rx = disp.subscribe();
        let _keep = disp.subscribe();
        drop(rx);
        disp.publish(&Envelope::new(ItemExpanded { item: a }, a));
        assert_eq!(disp.listener_count(), 1);
    }
}
