//! Keyboard focus inside the sidenav.
//!
//! An item is never focusable as a whole: focus always lands on one of its
//! internal parts, the row or the rename field. [`FocusState`] tracks which
//! part holds focus and queues focus requests that must wait until the
//! current notification pass has settled.

use std::collections::VecDeque;

use crate::dom::node::NodeId;

/// The focusable part of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The item's row.
    Row(NodeId),
    /// The text field shown while the item is renaming.
    RenameField(NodeId),
}

impl FocusTarget {
    /// The item owning this focus target.
    pub fn item(self) -> NodeId {
        match self {
            FocusTarget::Row(id) | FocusTarget::RenameField(id) => id,
        }
    }
}

/// Current focus plus the deferred focus queue.
#[derive(Debug, Default)]
pub struct FocusState {
    current: Option<FocusTarget>,
    deferred: VecDeque<NodeId>,
}

impl FocusState {
    /// Create a state with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused target, if any.
    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    /// Replace the focused target, returning the previous one.
    pub fn replace(&mut self, target: Option<FocusTarget>) -> Option<FocusTarget> {
        std::mem::replace(&mut self.current, target)
    }

    /// Queue a row focus to run once pending re-renders have completed.
    pub fn defer_row(&mut self, id: NodeId) {
        self.deferred.push_back(id);
    }

    /// Take the next queued row focus.
    pub fn next_deferred(&mut self) -> Option<NodeId> {
        self.deferred.pop_front()
    }

    /// Whether any focus request is waiting.
    #[cfg(test)]
    pub(crate) fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn target_item() {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        let id = sm.insert(());
        assert_eq!(FocusTarget::Row(id).item(), id);
        assert_eq!(FocusTarget::RenameField(id).item(), id);
    }

    #[test]
    fn replace_returns_previous() {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        let a = sm.insert(());
        let mut state = FocusState::new();
        assert_eq!(state.replace(Some(FocusTarget::Row(a))), None);
        assert_eq!(state.current(), Some(FocusTarget::Row(a)));
        assert_eq!(state.replace(None), Some(FocusTarget::Row(a)));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn deferred_queue_is_fifo() {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        let a = sm.insert(());
        let b = sm.insert(());
        let mut state = FocusState::new();
        state.defer_row(a);
        state.defer_row(b);
        assert!(state.has_deferred());
        assert_eq!(state.next_deferred(), Some(a));
        assert_eq!(state.next_deferred(), Some(b));
        assert!(!state.has_deferred());
    }
}
