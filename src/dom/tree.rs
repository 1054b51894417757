//! Tree operations: insert, remove, reparent, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::NodeId;
use crate::item::SidenavItem;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The item tree, backed by a slotmap arena.
///
/// All items live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that removal is O(subtree size) and lookup is O(1).
/// Items without a parent are top-level and kept, in order, in `top_level`.
///
/// `Dom` only maintains structure. It never touches item state; the
/// [`Sidenav`](crate::sidenav::Sidenav) that owns it runs the recomputation
/// that follows every structural change.
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, SidenavItem>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    top_level: Vec<NodeId>,
}

impl Dom {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            top_level: Vec::new(),
        }
    }

    /// Append a top-level item.
    pub fn insert(&mut self, item: SidenavItem) -> NodeId {
        let index = self.top_level.len();
        self.insert_at(None, index, item)
    }

    /// Append an item as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    #[cfg(test)]
    pub(crate) fn insert_child(&mut self, parent: NodeId, item: SidenavItem) -> NodeId {
        let index = self.children(parent).len();
        self.insert_at(Some(parent), index, item)
    }

    /// Insert an item at `index` in the child list of `parent` (or the
    /// top-level list when `parent` is `None`).
    ///
    /// The item's own id is assigned here. Pending nested children carried by
    /// the item are *not* inserted; see [`Sidenav`](crate::sidenav::Sidenav).
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist or `index` is past the end.
    pub fn insert_at(&mut self, parent: Option<NodeId>, index: usize, item: SidenavItem) -> NodeId {
        debug_assert!(
            parent.map_or(true, |p| self.nodes.contains_key(p)),
            "parent node does not exist"
        );
        let id = self.nodes.insert_with_key(|key| item.with_id(key));
        self.children.insert(id, Vec::new());
        self.attach(id, parent, index);
        id
    }

    /// Remove an item and all its descendants.
    ///
    /// Returns the removed item, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<SidenavItem> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        self.detach(id);

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let item = self.nodes.remove(current);
            if current == id {
                removed_root = item;
            }
        }

        removed_root
    }

    /// Move `node` (with its subtree) to `index` in the child list of
    /// `new_parent` (top-level when `None`).
    ///
    /// `index` is interpreted after `node` has been detached from its old place.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either node does not exist.
    pub fn reparent(&mut self, node: NodeId, new_parent: Option<NodeId>, index: usize) {
        debug_assert!(self.nodes.contains_key(node), "node does not exist");
        debug_assert!(
            new_parent.map_or(true, |p| self.nodes.contains_key(p)),
            "new_parent does not exist"
        );
        self.detach(node);
        self.attach(node, new_parent, index);
    }

    fn attach(&mut self, node: NodeId, parent: Option<NodeId>, index: usize) {
        let siblings = match parent {
            Some(p) => {
                self.parent.insert(node, p);
                match self.children.get_mut(p) {
                    Some(kids) => kids,
                    None => return,
                }
            }
            None => &mut self.top_level,
        };
        debug_assert!(index <= siblings.len(), "insertion index out of bounds");
        let index = index.min(siblings.len());
        siblings.insert(index, node);
    }

    fn detach(&mut self, node: NodeId) {
        match self.parent.remove(node) {
            Some(old_parent) => {
                if let Some(siblings) = self.children.get_mut(old_parent) {
                    siblings.retain(|&child| child != node);
                }
            }
            None => self.top_level.retain(|&top| top != node),
        }
    }

    /// Get the parent of a node, if it has one. Top-level items have none.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Children of `parent`, or the top-level items when `parent` is `None`.
    pub fn child_list(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(p) => self.children(p),
            None => &self.top_level,
        }
    }

    /// The ordered top-level items.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    /// Walk from `id` up to its top-level ancestor, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the top-level ancestor.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while let Some(p) = self.parent.get(current).copied() {
            if p == ancestor {
                return true;
            }
            current = p;
        }
        false
    }

    /// Immutable access to an item.
    pub fn get(&self, id: NodeId) -> Option<&SidenavItem> {
        self.nodes.get(id)
    }

    /// Mutable access to an item.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SidenavItem> {
        self.nodes.get_mut(id)
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains an item with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal of the subtree rooted at `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        self.drain_depth_first(&mut stack, &mut result);
        result
    }

    /// Pre-order depth-first traversal of the whole tree, top-level items in order.
    pub fn walk_all(&self) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.top_level.iter().rev().copied().collect();
        self.drain_depth_first(&mut stack, &mut result);
        result
    }

    fn drain_depth_first(&self, stack: &mut Vec<NodeId>, out: &mut Vec<NodeId>) {
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            out.push(current);
            // Push children in reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev());
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small test tree:
    /// ```text
    ///   a       b
    ///  / \
    /// c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let a = dom.insert(SidenavItem::new("a"));
        let b = dom.insert(SidenavItem::new("b"));
        let c = dom.insert_child(a, SidenavItem::new("c"));
        let d = dom.insert_child(a, SidenavItem::new("d"));
        (dom, a, b, c, d)
    }

    #[test]
    fn insert_assigns_item_id() {
        let mut dom = Dom::new();
        let id = dom.insert(SidenavItem::new("x"));
        assert_eq!(dom.get(id).unwrap().id(), id);
    }

    #[test]
    fn top_level_order() {
        let (dom, a, b, ..) = build_tree();
        assert_eq!(dom.top_level(), &[a, b]);
        assert_eq!(dom.child_list(None), &[a, b]);
    }

    #[test]
    fn parent_relationship() {
        let (dom, a, b, c, _d) = build_tree();
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(a), None);
        assert_eq!(dom.parent(b), None);
    }

    #[test]
    fn children_list() {
        let (dom, a, b, c, d) = build_tree();
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(b).is_empty());
    }

    #[test]
    fn insert_at_index() {
        let (mut dom, a, _b, c, d) = build_tree();
        let e = dom.insert_at(Some(a), 1, SidenavItem::new("e"));
        assert_eq!(dom.children(a), &[c, e, d]);
        let f = dom.insert_at(None, 0, SidenavItem::new("f"));
        assert_eq!(dom.top_level()[0], f);
    }

    #[test]
    fn ancestors_and_is_ancestor() {
        let (mut dom, a, b, c, _d) = build_tree();
        let g = dom.insert_child(c, SidenavItem::new("g"));
        assert_eq!(dom.ancestors(g), vec![c, a]);
        assert!(dom.is_ancestor(a, g));
        assert!(!dom.is_ancestor(g, a));
        assert!(!dom.is_ancestor(b, g));
        assert!(!dom.is_ancestor(g, g));
    }

    #[test]
    fn remove_leaf() {
        let (mut dom, a, _b, c, d) = build_tree();
        let removed = dom.remove(c).unwrap();
        assert_eq!(removed.label(), "c");
        assert!(!dom.contains(c));
        assert_eq!(dom.children(a), &[d]);
        assert_eq!(dom.len(), 3);
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, a, b, c, d) = build_tree();
        dom.remove(a);
        assert!(!dom.contains(a));
        assert!(!dom.contains(c));
        assert!(!dom.contains(d));
        assert_eq!(dom.top_level(), &[b]);
        assert_eq!(dom.len(), 1);
    }

    #[test]
    fn remove_stale_id() {
        let mut dom = Dom::new();
        let id = dom.insert(SidenavItem::new("x"));
        dom.remove(id);
        assert!(dom.remove(id).is_none());
        assert!(dom.is_empty());
    }

    #[test]
    fn reparent_to_item_and_top_level() {
        let (mut dom, a, b, c, d) = build_tree();
        dom.reparent(c, Some(b), 0);
        assert_eq!(dom.parent(c), Some(b));
        assert_eq!(dom.children(a), &[d]);
        assert_eq!(dom.children(b), &[c]);

        dom.reparent(d, None, 0);
        assert_eq!(dom.parent(d), None);
        assert_eq!(dom.top_level(), &[d, a, b]);
    }

    #[test]
    fn walk_depth_first_subtree() {
        let (dom, a, _b, c, d) = build_tree();
        assert_eq!(dom.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn walk_all_in_document_order() {
        let (dom, a, b, c, d) = build_tree();
        assert_eq!(dom.walk_all(), vec![a, c, d, b]);
    }

    #[test]
    fn default_impl() {
        let dom = Dom::default();
        assert!(dom.is_empty());
        assert!(dom.top_level().is_empty());
    }
}
