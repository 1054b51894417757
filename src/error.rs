//! Error type for item-addressed sidenav operations.

use thiserror::Error;

use crate::dom::node::NodeId;

/// Errors returned by [`Sidenav`](crate::sidenav::Sidenav) operations that
/// address a specific item.
///
/// Gesture and keyboard handlers never return these: a missing selection or
/// an inert (disabled) target is a silent no-op there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SidenavError {
    /// The id does not refer to an item in the tree (never inserted, or removed).
    #[error("no sidenav item with id {0:?}")]
    UnknownItem(NodeId),

    /// Moving `item` under `parent` would make it its own ancestor.
    #[error("cannot move item {item:?} under its own descendant {parent:?}")]
    CyclicMove { item: NodeId, parent: NodeId },

    /// Insertion index past the end of the target child list.
    #[error("index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The item has no open rename field.
    #[error("item {0:?} is not being renamed")]
    NotRenaming(NodeId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SidenavError>;

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn display_messages() {
        let mut sm: SlotMap<NodeId, ()> = SlotMap::with_key();
        let id = sm.insert(());
        assert!(SidenavError::UnknownItem(id)
            .to_string()
            .starts_with("no sidenav item"));
        assert_eq!(
            SidenavError::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 out of bounds for 2 children"
        );
        assert!(SidenavError::NotRenaming(id)
            .to_string()
            .ends_with("is not being renamed"));
    }
}
