//! Node handle type.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a sidenav item. Copy, lightweight (u64).
    ///
    /// Ids are never reused for a different item: a removed item's id stays
    /// stale forever and every lookup with it fails.
    pub struct NodeId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::{Key, SlotMap};

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }

    #[test]
    fn default_is_null() {
        assert!(NodeId::default().is_null());
    }

    #[test]
    fn removed_id_stays_stale() {
        let mut sm: SlotMap<NodeId, u8> = SlotMap::with_key();
        let a = sm.insert(1);
        sm.remove(a);
        let b = sm.insert(2);
        assert_ne!(a, b);
        assert!(!sm.contains_key(a));
    }
}
