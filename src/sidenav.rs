//! Sidenav: the tree container and sole arbiter of tree-wide state.
//!
//! [`Sidenav`] owns the item arena, the notification queue, focus and the
//! navigation bindings. It enforces two invariants that no single item can:
//!
//! - at most one item is `enabled` (the active item),
//! - exactly one item has `tab_index == 0` whenever the tree is non-empty
//!   (roving tabindex; that item is the *selected* item).
//!
//! Items report changes by posting envelopes. Every public operation drains
//! the queue before returning, reacting to each envelope and then publishing
//! it to the host, so invariants hold at every observation point.

use tracing::{debug, trace};

use crate::config::SidenavConfig;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::error::{Result, SidenavError};
use crate::event::binding::{NavAction, NavBindings};
use crate::event::handler::EventDispatcher;
use crate::event::input::{KeyEvent, Modifiers};
use crate::event::message::{EnabledChanged, Envelope, ItemCollapsed, ItemEnabledChanged, SidenavEvent};
use crate::focus::{FocusState, FocusTarget};
use crate::item::{RenameKey, SidenavItem};

// ---------------------------------------------------------------------------
// DoubleClick
// ---------------------------------------------------------------------------

/// What a double-click on a row did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleClick {
    /// Not handled by the sidenav; the host may act on it.
    Ignored,
    /// The item's expansion was toggled.
    Toggled,
    /// The item is disabled: the gesture is swallowed (propagation stopped,
    /// default prevented).
    Suppressed,
}

// ---------------------------------------------------------------------------
// Sidenav
// ---------------------------------------------------------------------------

/// A keyboard-navigable, hierarchically expandable side-navigation tree.
///
/// # Examples
///
/// ```
/// use sidenav_tree::event::Key;
/// use sidenav_tree::item::SidenavItem;
/// use sidenav_tree::sidenav::Sidenav;
///
/// let mut nav = Sidenav::default();
/// let docs = nav.append_item(None, SidenavItem::new("Docs")).unwrap();
/// let photos = nav.append_item(None, SidenavItem::new("Photos")).unwrap();
/// assert_eq!(nav.selected_item(), Some(docs));
///
/// nav.handle_key(Key::Down.into());
/// assert_eq!(nav.selected_item(), Some(photos));
///
/// nav.handle_key(Key::Enter.into());
/// assert_eq!(nav.enabled_item(), Some(photos));
/// ```
pub struct Sidenav {
    /// Behaviour flags.
    pub config: SidenavConfig,
    /// Navigation key bindings.
    pub bindings: NavBindings,
    dom: Dom,
    dispatcher: EventDispatcher,
    focus: FocusState,
    /// The item the last enable operation settled on.
    last_enabled: Option<NodeId>,
    aria_set_size: usize,
    scroll_request: Option<NodeId>,
}

impl Sidenav {
    /// Create an empty sidenav with the given config and default bindings.
    pub fn new(config: SidenavConfig) -> Self {
        Self {
            config,
            bindings: NavBindings::with_defaults(),
            dom: Dom::new(),
            dispatcher: EventDispatcher::new(),
            focus: FocusState::new(),
            last_enabled: None,
            aria_set_size: 0,
            scroll_request: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The item arena.
    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Look up an item.
    pub fn item(&self, id: NodeId) -> Option<&SidenavItem> {
        self.dom.get(id)
    }

    /// Every item in the tree, depth-first in display order.
    pub fn items(&self) -> Vec<NodeId> {
        self.dom.walk_all()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.dom.len()
    }

    /// Whether the sidenav has no items.
    pub fn is_empty(&self) -> bool {
        self.dom.is_empty()
    }

    /// The first enabled item, if any.
    pub fn enabled_item(&self) -> Option<NodeId> {
        self.find_item(|item| item.enabled())
    }

    /// The item holding the roving tab stop.
    pub fn selected_item(&self) -> Option<NodeId> {
        self.find_item(|item| item.tab_index() == 0)
    }

    /// Items reachable by keyboard navigation, in display order.
    ///
    /// Excludes disabled items and anything under a collapsed or disabled
    /// ancestor. Computed from the live tree on every call.
    pub fn selectable_items(&self) -> Vec<NodeId> {
        self.dom
            .walk_all()
            .into_iter()
            .filter(|&id| self.is_selectable(id))
            .collect()
    }

    /// Whether an item is reachable by keyboard navigation.
    pub fn is_selectable(&self, id: NodeId) -> bool {
        let Some(item) = self.dom.get(id) else {
            return false;
        };
        !item.disabled()
            && self.dom.ancestors(id).into_iter().all(|a| {
                self.dom
                    .get(a)
                    .is_some_and(|anc| anc.expanded() && !anc.disabled())
            })
    }

    /// Direct children of `id` that are not disabled.
    pub fn selectable_children(&self, id: NodeId) -> Vec<NodeId> {
        self.dom
            .children(id)
            .iter()
            .copied()
            .filter(|&c| self.dom.get(c).is_some_and(|item| !item.disabled()))
            .collect()
    }

    /// The enclosing item, or `None` for top-level (or unknown) items.
    pub fn parent_item(&self, id: NodeId) -> Option<NodeId> {
        self.dom.parent(id)
    }

    /// Number of top-level items that are not disabled.
    pub fn aria_set_size(&self) -> usize {
        self.aria_set_size
    }

    /// Whether any item nests another or may load children.
    pub fn is_layered(&self) -> bool {
        self.dom
            .walk_all()
            .into_iter()
            .any(|id| self.dom.get(id).is_some_and(SidenavItem::has_children))
    }

    /// The focused part of an item, if focus is inside the sidenav.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus
            .current()
            .filter(|target| self.dom.contains(target.item()))
    }

    /// Whether keyboard focus is anywhere inside the sidenav.
    pub fn contains_focus(&self) -> bool {
        self.focused().is_some()
    }

    /// Take the pending request to scroll an item into view.
    pub fn take_scroll_request(&mut self) -> Option<NodeId> {
        self.scroll_request.take()
    }

    /// Drain every notification published since the last call.
    pub fn take_events(&mut self) -> Vec<SidenavEvent> {
        self.dispatcher.take_published()
    }

    /// Receive every notification published from now on.
    pub fn subscribe(&mut self) -> tokio::sync::mpsc::UnboundedReceiver<SidenavEvent> {
        self.dispatcher.subscribe()
    }

    // ── Structure ────────────────────────────────────────────────────

    /// Append an item (with its nested children) under `parent`, or at the
    /// top level when `parent` is `None`.
    pub fn append_item(&mut self, parent: Option<NodeId>, item: SidenavItem) -> Result<NodeId> {
        if let Some(p) = parent {
            self.require(p)?;
        }
        let index = self.dom.child_list(parent).len();
        self.insert_item(parent, index, item)
    }

    /// Insert an item (with its nested children) at `index` among the
    /// children of `parent`.
    pub fn insert_item(&mut self, parent: Option<NodeId>, index: usize, item: SidenavItem) -> Result<NodeId> {
        if let Some(p) = parent {
            self.require(p)?;
        }
        let len = self.dom.child_list(parent).len();
        if index > len {
            return Err(SidenavError::IndexOutOfBounds { index, len });
        }

        let mut inserted = Vec::new();
        let id = self.insert_subtree(parent, index, item, &mut inserted);

        if let Some(p) = parent {
            self.children_changed(p, false);
        }
        for &node in &inserted {
            if !self.dom.children(node).is_empty() {
                self.children_changed(node, false);
            }
        }
        for &node in &inserted {
            let Some(item) = self.dom.get_mut(node) else {
                continue;
            };
            item.settle_expanded();
            if item.enabled() {
                self.dispatcher
                    .push(Envelope::new(ItemEnabledChanged { item: node, enabled: true }, node));
            }
        }
        debug!(?id, ?parent, index, count = inserted.len(), "inserted items");

        self.structure_changed();
        self.pump();
        Ok(id)
    }

    fn insert_subtree(
        &mut self,
        parent: Option<NodeId>,
        index: usize,
        mut item: SidenavItem,
        inserted: &mut Vec<NodeId>,
    ) -> NodeId {
        let children = item.take_pending_children();
        let id = self.dom.insert_at(parent, index, item);
        inserted.push(id);
        for (i, child) in children.into_iter().enumerate() {
            self.insert_subtree(Some(id), i, child, inserted);
        }
        id
    }

    /// Remove an item and its subtree, returning the removed item.
    ///
    /// If the enabled item was inside the removed subtree, the removed item's
    /// parent becomes enabled.
    pub fn remove_item(&mut self, id: NodeId) -> Result<SidenavItem> {
        self.require(id)?;
        let parent = self.dom.parent(id);
        let subtree = self.dom.walk_depth_first(id);
        let lost_enabled = subtree
            .iter()
            .any(|&n| self.dom.get(n).is_some_and(SidenavItem::enabled));

        if let Some(target) = self.focus.current() {
            if subtree.contains(&target.item()) {
                // Removal does not blur: an open rename is dropped, not committed.
                self.focus.replace(None);
            }
        }
        if self.last_enabled.is_some_and(|e| subtree.contains(&e)) {
            self.last_enabled = None;
        }

        let removed = self.dom.remove(id).ok_or(SidenavError::UnknownItem(id))?;
        if let Some(p) = parent {
            self.children_changed(p, lost_enabled);
        }
        debug!(?id, ?parent, count = subtree.len(), lost_enabled, "removed items");

        self.structure_changed();
        self.pump();
        Ok(removed)
    }

    /// Move an item and its subtree to `index` among the children of
    /// `new_parent` (top level when `None`). `index` counts positions after
    /// the item has been taken out of its old place.
    ///
    /// Unlike [`remove_item`](Self::remove_item), a move does not bubble the
    /// enabled item: if the moved subtree holds it, it stays enabled where it
    /// lands and the old parent is not enabled in its place. The old parent
    /// still collapses if it lost its last child.
    pub fn move_item(&mut self, id: NodeId, new_parent: Option<NodeId>, index: usize) -> Result<()> {
        self.require(id)?;
        if let Some(p) = new_parent {
            self.require(p)?;
            if p == id || self.dom.is_ancestor(id, p) {
                return Err(SidenavError::CyclicMove { item: id, parent: p });
            }
        }
        let old_parent = self.dom.parent(id);
        let mut len = self.dom.child_list(new_parent).len();
        if old_parent == new_parent {
            len -= 1;
        }
        if index > len {
            return Err(SidenavError::IndexOutOfBounds { index, len });
        }

        self.dom.reparent(id, new_parent, index);
        if let Some(p) = old_parent {
            self.children_changed(p, false);
        }
        if let Some(p) = new_parent.filter(|&p| Some(p) != old_parent) {
            self.children_changed(p, false);
        }
        debug!(?id, ?old_parent, ?new_parent, index, "moved item");

        self.structure_changed();
        self.pump();
        Ok(())
    }

    /// Run an item's child-set recomputation and queue what it reports.
    fn children_changed(&mut self, parent: NodeId, lost_enabled: bool) {
        let kids = self.dom.children(parent).to_vec();
        if let Some(item) = self.dom.get_mut(parent) {
            for envelope in item.children_changed(kids, lost_enabled) {
                self.dispatcher.push(envelope);
            }
        }
    }

    /// Recompute tree-wide derived state after any structural change.
    fn structure_changed(&mut self) {
        let order = self.dom.walk_all();
        for &id in &order {
            let layer = self
                .dom
                .parent(id)
                .and_then(|p| self.dom.get(p))
                .map_or(0, |p| p.layer() + 1);
            if let Some(item) = self.dom.get_mut(id) {
                item.set_layer(layer);
            }
        }

        let layered = self.is_layered();
        for &id in &order {
            if let Some(item) = self.dom.get_mut(id) {
                item.set_in_layered(layered);
            }
        }

        self.refresh_set_size();
        self.repair_selection();
    }

    fn refresh_set_size(&mut self) {
        self.aria_set_size = self
            .dom
            .top_level()
            .iter()
            .filter(|&&id| self.dom.get(id).is_some_and(|item| !item.disabled()))
            .count();
    }

    /// Re-establish the roving tab stop if no item holds it.
    fn repair_selection(&mut self) {
        if self.dom.is_empty() || self.selected_item().is_some() {
            return;
        }
        let target = self
            .enabled_item()
            .or_else(|| self.selectable_items().first().copied())
            .or_else(|| self.dom.top_level().first().copied());
        if let Some(target) = target {
            self.select_item(target);
        }
    }

    // ── Item properties ──────────────────────────────────────────────

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<()> {
        self.require_mut(id)?.set_label(label.into());
        Ok(())
    }

    pub fn set_separator(&mut self, id: NodeId, separator: bool) -> Result<()> {
        self.require_mut(id)?.set_separator(separator);
        Ok(())
    }

    pub fn set_error(&mut self, id: NodeId, error: bool) -> Result<()> {
        self.require_mut(id)?.set_error(error);
        Ok(())
    }

    /// Put a named icon in an item's icon slot, or empty it.
    pub fn set_icon(&mut self, id: NodeId, icon: Option<String>) -> Result<()> {
        self.require_mut(id)?.set_icon(icon);
        Ok(())
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> Result<()> {
        self.require_mut(id)?.set_disabled(disabled);
        self.refresh_set_size();
        Ok(())
    }

    /// Declare whether an item may have (not yet loaded) children.
    ///
    /// This changes whether the tree is layered, so the tree-wide derived
    /// state is recomputed as for a structural change.
    pub fn set_may_have_children(&mut self, id: NodeId, may_have_children: bool) -> Result<()> {
        let envelope = self.require_mut(id)?.set_may_have_children(may_have_children);
        self.post(envelope);
        self.structure_changed();
        self.pump();
        Ok(())
    }

    /// Expand or collapse an item. Expanding an item that has no children
    /// is a no-op.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> Result<()> {
        let envelope = self.require_mut(id)?.set_expanded(expanded);
        self.post(envelope);
        self.pump();
        Ok(())
    }

    /// Set an item's `enabled` flag directly. Enabling one item un-enables
    /// whichever item was enabled before.
    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) -> Result<()> {
        let envelope = self.require_mut(id)?.set_enabled(enabled);
        self.post(envelope);
        self.pump();
        Ok(())
    }

    /// Open or close an item's rename field.
    ///
    /// Opening focuses the field. Closing from here discards the edit; focus
    /// returns to the row if it was in the field.
    pub fn set_renaming(&mut self, id: NodeId, renaming: bool) -> Result<()> {
        self.require(id)?;
        if renaming {
            if self.require_mut(id)?.set_renaming(true) {
                self.set_focus(Some(FocusTarget::RenameField(id)));
            }
        } else {
            if self.focus.current() == Some(FocusTarget::RenameField(id)) {
                self.focus.replace(Some(FocusTarget::Row(id)));
            }
            self.require_mut(id)?.set_renaming(false);
        }
        self.pump();
        Ok(())
    }

    /// Replace the text of an open rename field.
    pub fn set_rename_value(&mut self, id: NodeId, value: impl Into<String>) -> Result<()> {
        self.require_mut(id)?
            .rename_field_mut()
            .ok_or(SidenavError::NotRenaming(id))?
            .set_value(value);
        Ok(())
    }

    /// Expand every ancestor of an item so that it becomes visible.
    pub fn reveal(&mut self, id: NodeId) -> Result<()> {
        self.require(id)?;
        for ancestor in self.dom.ancestors(id) {
            let envelope = self.dom.get_mut(ancestor).and_then(|a| a.set_expanded(true));
            self.post(envelope);
        }
        self.pump();
        Ok(())
    }

    // ── Enabled / selected ───────────────────────────────────────────

    /// Make `id` the enabled item. `None` is a no-op: once an item is
    /// enabled, clearing goes through [`set_enabled`](Self::set_enabled).
    pub fn set_enabled_item(&mut self, id: Option<NodeId>) -> Result<()> {
        let Some(id) = id else {
            return Ok(());
        };
        self.require(id)?;
        self.enable_item(id);
        self.pump();
        Ok(())
    }

    /// Move the roving tab stop to `id`.
    pub fn select(&mut self, id: NodeId) -> Result<()> {
        self.require(id)?;
        self.select_item(id);
        self.pump();
        Ok(())
    }

    /// Enable `target`, un-enabling every other item, then select it and
    /// request it be scrolled into view.
    fn enable_item(&mut self, target: NodeId) {
        let others: Vec<NodeId> = self
            .dom
            .walk_all()
            .into_iter()
            .filter(|&id| id != target && self.dom.get(id).is_some_and(SidenavItem::enabled))
            .collect();
        let previous = others.first().copied();
        for other in others {
            let envelope = self.dom.get_mut(other).and_then(|item| item.set_enabled(false));
            self.post(envelope);
        }
        let envelope = self.dom.get_mut(target).and_then(|item| item.set_enabled(true));
        self.post(envelope);
        self.last_enabled = Some(target);

        self.select_item(target);
        self.scroll_request = Some(target);
        debug!(?previous, enabled = ?target, "enabled item");
        self.dispatcher.push(Envelope::new(
            EnabledChanged {
                previous,
                enabled: target,
            },
            target,
        ));
    }

    /// Give `target` the roving tab stop. When focus is inside the sidenav,
    /// the old item is blurred and `target` is focused once the current
    /// notification pass has settled.
    fn select_item(&mut self, target: NodeId) {
        let previous: Vec<NodeId> = self
            .dom
            .walk_all()
            .into_iter()
            .filter(|&id| id != target && self.dom.get(id).is_some_and(|item| item.tab_index() == 0))
            .collect();
        for &id in &previous {
            if let Some(item) = self.dom.get_mut(id) {
                item.set_tab_index(-1);
            }
        }
        if let Some(item) = self.dom.get_mut(target) {
            item.set_tab_index(0);
        }
        trace!(selected = ?target, "selected item");

        if let Some(focused) = self.focused() {
            if previous.contains(&focused.item()) {
                self.set_focus(None);
            }
            self.focus.defer_row(target);
        }
    }

    // ── Focus ────────────────────────────────────────────────────────

    /// Focus the selected item's row. No-op on an empty sidenav.
    pub fn focus(&mut self) {
        if let Some(selected) = self.selected_item() {
            self.set_focus(Some(FocusTarget::Row(selected)));
            self.pump();
        }
    }

    /// Focus an item's row directly.
    pub fn focus_item(&mut self, id: NodeId) -> Result<()> {
        self.require(id)?;
        self.set_focus(Some(FocusTarget::Row(id)));
        self.pump();
        Ok(())
    }

    /// Move focus out of the sidenav.
    pub fn blur(&mut self) {
        self.set_focus(None);
        self.pump();
    }

    /// Move focus, running the rename blur when it leaves a rename field.
    fn set_focus(&mut self, target: Option<FocusTarget>) {
        let old = self.focus.replace(target);
        if old == target {
            return;
        }
        if let Some(FocusTarget::RenameField(id)) = old {
            let envelope = self.dom.get_mut(id).and_then(SidenavItem::rename_blurred);
            if envelope.is_some() {
                debug!(item = ?id, "rename committed");
            }
            self.post(envelope);
        }
    }

    // ── Pointer ──────────────────────────────────────────────────────

    /// A click on an item's row enables it, unless it is disabled. Clicks on
    /// a row that is renaming land in the rename field and do nothing.
    pub fn click_row(&mut self, id: NodeId) -> Result<()> {
        let item = self.require_mut(id)?;
        if item.disabled() || item.renaming() {
            return Ok(());
        }
        let envelope = item.set_enabled(true);
        self.post(envelope);
        self.pump();
        Ok(())
    }

    /// A click on an item's expand icon toggles it, unless it is disabled.
    pub fn click_expand_icon(&mut self, id: NodeId) -> Result<()> {
        let item = self.require_mut(id)?;
        if item.disabled() {
            return Ok(());
        }
        let expanded = item.expanded();
        let envelope = item.set_expanded(!expanded);
        self.post(envelope);
        self.pump();
        Ok(())
    }

    /// A double-click on an item. Toggles expansion when
    /// [`doubleclick_expands`](SidenavConfig::doubleclick_expands) is set.
    /// Double-clicks on the expand icon are left to the icon's own click
    /// handling.
    pub fn double_click(&mut self, id: NodeId, on_expand_icon: bool) -> Result<DoubleClick> {
        let doubleclick_expands = self.config.doubleclick_expands;
        let item = self.require_mut(id)?;
        if !doubleclick_expands || on_expand_icon || item.renaming() {
            return Ok(DoubleClick::Ignored);
        }
        if item.disabled() {
            return Ok(DoubleClick::Suppressed);
        }
        let expanded = item.expanded();
        let envelope = item.set_expanded(!expanded);
        self.post(envelope);
        self.pump();
        Ok(DoubleClick::Toggled)
    }

    // ── Keyboard ─────────────────────────────────────────────────────

    /// Handle a key press while the sidenav has keyboard focus.
    ///
    /// Returns `true` when the key was consumed (the host should suppress
    /// its default handling).
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if let Some(FocusTarget::RenameField(id)) = self.focused() {
            let outcome = self
                .dom
                .get_mut(id)
                .map_or(RenameKey::Ignored, |item| item.rename_key(&event));
            if outcome == RenameKey::Leave {
                self.set_focus(Some(FocusTarget::Row(id)));
            }
            self.pump();
            return true;
        }

        let Some(selected) = self.selected_item() else {
            return false;
        };
        if event.repeat || event.modifiers.contains(Modifiers::CTRL) {
            return false;
        }
        let Some(action) = self.bindings.resolve(&event, self.config.direction) else {
            return false;
        };
        trace!(?action, ?selected, "navigation key");

        let handled = self.navigate(selected, action);
        self.pump();
        handled
    }

    fn navigate(&mut self, selected: NodeId, action: NavAction) -> bool {
        let Some(item) = self.dom.get(selected) else {
            return false;
        };
        let (disabled, expanded, has_children) = (item.disabled(), item.expanded(), item.has_children());

        let target = match action {
            NavAction::Activate => {
                if !disabled {
                    self.enable_item(selected);
                }
                return true;
            }
            NavAction::Previous | NavAction::Next => {
                let list = self.selectable_items();
                match list.iter().position(|&id| id == selected) {
                    Some(i) if action == NavAction::Next => list.get(i + 1).copied(),
                    Some(i) => i.checked_sub(1).and_then(|p| list.get(p).copied()),
                    None => list.first().copied(),
                }
            }
            NavAction::Expand => {
                if has_children && !expanded {
                    // Disabled items absorb the key without expanding.
                    if !disabled {
                        let envelope = self.dom.get_mut(selected).and_then(|i| i.set_expanded(true));
                        self.post(envelope);
                    }
                    return true;
                }
                self.selectable_children(selected).first().copied()
            }
            NavAction::Collapse => {
                if expanded {
                    if !disabled {
                        let envelope = self.dom.get_mut(selected).and_then(|i| i.set_expanded(false));
                        self.post(envelope);
                    }
                    return true;
                }
                self.dom.parent(selected)
            }
            NavAction::First => self.selectable_items().first().copied(),
            NavAction::Last => self.selectable_items().last().copied(),
        };

        match target {
            Some(target) if target != selected && self.is_selectable(target) => {
                self.select_item(target);
                true
            }
            _ => false,
        }
    }

    // ── Notification processing ──────────────────────────────────────

    fn post(&mut self, envelope: Option<Envelope>) {
        if let Some(envelope) = envelope {
            self.dispatcher.push(envelope);
        }
    }

    /// Drain the notification queue, then run deferred focus requests, until
    /// both are empty.
    fn pump(&mut self) {
        loop {
            while let Some(envelope) = self.dispatcher.pop() {
                trace!(
                    message = envelope.message.message_name(),
                    sender = ?envelope.sender,
                    "dispatch"
                );
                self.handle_message(&envelope);
                self.dispatcher.publish(&envelope);
            }
            let Some(id) = self.focus.next_deferred() else {
                break;
            };
            if self.dom.contains(id) {
                self.set_focus(Some(FocusTarget::Row(id)));
            }
        }
    }

    fn handle_message(&mut self, envelope: &Envelope) {
        if let Some(m) = envelope.downcast_ref::<ItemEnabledChanged>() {
            if m.enabled {
                let still_enabled = self.dom.get(m.item).is_some_and(SidenavItem::enabled);
                if still_enabled && self.last_enabled != Some(m.item) {
                    self.enable_item(m.item);
                }
            } else if self.last_enabled == Some(m.item) {
                self.last_enabled = None;
            }
        } else if let Some(m) = envelope.downcast_ref::<ItemCollapsed>() {
            // A collapsing item pulls the selection out of its hidden subtree.
            if let Some(selected) = self.selected_item() {
                if selected != m.item && self.dom.is_ancestor(m.item, selected) {
                    self.select_item(m.item);
                }
            }
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn require(&self, id: NodeId) -> Result<&SidenavItem> {
        self.dom.get(id).ok_or(SidenavError::UnknownItem(id))
    }

    fn require_mut(&mut self, id: NodeId) -> Result<&mut SidenavItem> {
        self.dom.get_mut(id).ok_or(SidenavError::UnknownItem(id))
    }

    fn find_item(&self, pred: impl Fn(&SidenavItem) -> bool) -> Option<NodeId> {
        self.dom
            .walk_all()
            .into_iter()
            .find(|&id| self.dom.get(id).is_some_and(&pred))
    }
}

impl Default for Sidenav {
    fn default() -> Self {
        Self::new(SidenavConfig::default())
    }
}

impl std::fmt::Debug for Sidenav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sidenav")
            .field("config", &self.config)
            .field("items", &self.dom.len())
            .field("enabled", &self.enabled_item())
            .field("selected", &self.selected_item())
            .field("focus", &self.focus.current())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
