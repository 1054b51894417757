//! A single sidenav row: properties, derived layout state and the behaviours
//! an item runs on itself.
//!
//! An item only ever mutates its own fields. Every change other items or the
//! sidenav must react to is returned as an [`Envelope`] for the owning
//! [`Sidenav`](crate::sidenav::Sidenav) to dispatch.

use crate::dom::node::NodeId;
use crate::event::input::{Key, KeyEvent};
use crate::event::message::{Envelope, ItemCollapsed, ItemEnabledChanged, ItemExpanded, ItemRenamed};
use crate::widgets::rename::RenameField;

// ---------------------------------------------------------------------------
// SidenavItem
// ---------------------------------------------------------------------------

/// One expandable, selectable row of a sidenav.
///
/// Build items with the `with_*` methods and hand them to
/// [`Sidenav::append_item`](crate::sidenav::Sidenav::append_item). Nested
/// children added with [`with_child`](Self::with_child) are inserted together
/// with their parent.
///
/// # Examples
///
/// ```
/// use sidenav_tree::item::SidenavItem;
///
/// let photos = SidenavItem::new("Photos")
///     .with_icon("folder")
///     .with_expanded(true)
///     .with_child(SidenavItem::new("2024"))
///     .with_child(SidenavItem::new("2025"));
/// assert_eq!(photos.label(), "Photos");
/// ```
#[derive(Debug, Clone)]
pub struct SidenavItem {
    id: NodeId,
    label: String,
    separator: bool,
    disabled: bool,
    enabled: bool,
    expanded: bool,
    error: bool,
    may_have_children: bool,
    icon: Option<String>,
    layer: usize,
    tab_index: i32,
    in_layered: bool,
    /// Realized direct children, refreshed on every child-set change.
    items: Vec<NodeId>,
    rename: Option<RenameField>,
    commit_rename_on_blur: bool,
    pending_children: Vec<SidenavItem>,
}

impl SidenavItem {
    /// Create a collapsed, unselected item with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: NodeId::default(),
            label: label.into(),
            separator: false,
            disabled: false,
            enabled: false,
            expanded: false,
            error: false,
            may_have_children: false,
            icon: None,
            layer: 0,
            tab_index: -1,
            in_layered: false,
            items: Vec::new(),
            rename: None,
            commit_rename_on_blur: true,
            pending_children: Vec::new(),
        }
    }

    // ── Builders ─────────────────────────────────────────────────────

    /// Draw a divider above this item, starting a new section.
    pub fn with_separator(mut self, separator: bool) -> Self {
        self.separator = separator;
        self
    }

    /// Disabled items are inert: they cannot be enabled, expanded or reached
    /// by keyboard navigation.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Insert the item already enabled. The sidenav un-enables any other item.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Insert the item expanded. Ignored unless the item ends up with children.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Mark the item as containing an error.
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Show the expand affordance even without realized children (for
    /// children that are loaded lazily).
    pub fn with_may_have_children(mut self, may_have_children: bool) -> Self {
        self.may_have_children = may_have_children;
        self
    }

    /// Put a named icon in the icon slot.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Add a nested child, inserted together with this item.
    pub fn with_child(mut self, child: SidenavItem) -> Self {
        self.pending_children.push(child);
        self
    }

    /// Add several nested children, inserted together with this item.
    pub fn with_children(mut self, children: impl IntoIterator<Item = SidenavItem>) -> Self {
        self.pending_children.extend(children);
        self
    }

    pub(crate) fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn take_pending_children(&mut self) -> Vec<SidenavItem> {
        std::mem::take(&mut self.pending_children)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// This item's id. Null until the item is inserted into a sidenav.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn separator(&self) -> bool {
        self.separator
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Whether this is the currently active item of the sidenav.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the rename field is open.
    pub fn renaming(&self) -> bool {
        self.rename.is_some()
    }

    pub fn error(&self) -> bool {
        self.error
    }

    pub fn may_have_children(&self) -> bool {
        self.may_have_children
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Whether the icon slot is occupied.
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Nesting depth, 0 for top-level items.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// 0 for the one item reachable with Tab, -1 for every other item.
    pub fn tab_index(&self) -> i32 {
        self.tab_index
    }

    /// Whether the sidenav nests items anywhere (all rows then reserve room
    /// for the expand affordance).
    pub fn in_layered(&self) -> bool {
        self.in_layered
    }

    /// Realized direct children, in order.
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Whether the expand affordance is shown.
    pub fn has_children(&self) -> bool {
        self.may_have_children || !self.items.is_empty()
    }

    /// The open rename field, if any.
    pub fn rename_field(&self) -> Option<&RenameField> {
        self.rename.as_ref()
    }

    // ── Plain property setters ───────────────────────────────────────

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_separator(&mut self, separator: bool) {
        self.separator = separator;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub(crate) fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    pub(crate) fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub(crate) fn set_layer(&mut self, layer: usize) {
        self.layer = layer;
    }

    pub(crate) fn set_tab_index(&mut self, tab_index: i32) {
        self.tab_index = tab_index;
    }

    pub(crate) fn set_in_layered(&mut self, in_layered: bool) {
        self.in_layered = in_layered;
    }

    // ── Notifying property setters ───────────────────────────────────

    /// Set `expanded`. Expanding an item without children is refused.
    ///
    /// Returns the expanded/collapsed notification when the value changed.
    pub(crate) fn set_expanded(&mut self, expanded: bool) -> Option<Envelope> {
        if expanded == self.expanded || (expanded && !self.has_children()) {
            return None;
        }
        self.expanded = expanded;
        Some(self.expansion_notification())
    }

    /// Set `enabled`. Returns the change notification when the value changed.
    pub(crate) fn set_enabled(&mut self, enabled: bool) -> Option<Envelope> {
        if enabled == self.enabled {
            return None;
        }
        self.enabled = enabled;
        Some(Envelope::new(
            ItemEnabledChanged {
                item: self.id,
                enabled,
            },
            self.id,
        ))
    }

    /// Set `may_have_children`, collapsing the item if that leaves it with
    /// nothing to show.
    pub(crate) fn set_may_have_children(&mut self, may_have_children: bool) -> Option<Envelope> {
        self.may_have_children = may_have_children;
        if self.expanded && !self.has_children() {
            self.expanded = false;
            return Some(self.expansion_notification());
        }
        None
    }

    /// Drop an `expanded` flag the item cannot honour. Used on insertion,
    /// before the item has ever been shown.
    pub(crate) fn settle_expanded(&mut self) {
        if self.expanded && !self.has_children() {
            self.expanded = false;
        }
    }

    fn expansion_notification(&self) -> Envelope {
        if self.expanded {
            Envelope::new(ItemExpanded { item: self.id }, self.id)
        } else {
            Envelope::new(ItemCollapsed { item: self.id }, self.id)
        }
    }

    // ── Child-set changes ────────────────────────────────────────────

    /// React to a change of the realized child set.
    ///
    /// `lost_enabled` is true when the enabled item was inside a subtree
    /// that has just been removed from under this item; the item then takes
    /// over as the enabled item. An expanded item whose last child went away
    /// collapses.
    pub(crate) fn children_changed(&mut self, items: Vec<NodeId>, lost_enabled: bool) -> Vec<Envelope> {
        let had_children = !self.items.is_empty();
        self.items = items;

        let mut out = Vec::new();
        if had_children && self.items.is_empty() && self.expanded {
            self.expanded = false;
            out.push(self.expansion_notification());
        }
        if lost_enabled {
            out.extend(self.set_enabled(true));
        }
        out
    }

    // ── Rename state machine ─────────────────────────────────────────

    /// Open or close the rename field. Returns whether the state changed.
    ///
    /// Opening pre-fills the field with the label, fully selected. Closing
    /// from here discards the edit.
    pub(crate) fn set_renaming(&mut self, renaming: bool) -> bool {
        if renaming == self.renaming() {
            return false;
        }
        self.rename = renaming.then(|| RenameField::new(self.label.clone()));
        self.commit_rename_on_blur = true;
        true
    }

    pub(crate) fn rename_field_mut(&mut self) -> Option<&mut RenameField> {
        self.rename.as_mut()
    }

    /// Handle a key pressed inside the rename field.
    pub(crate) fn rename_key(&mut self, event: &KeyEvent) -> RenameKey {
        let Some(field) = self.rename.as_mut() else {
            return RenameKey::Ignored;
        };
        match event.code {
            Key::Escape | Key::Enter if event.repeat => RenameKey::Ignored,
            Key::Escape => {
                // Leaving the field blurs it; the blur must not commit.
                self.commit_rename_on_blur = false;
                RenameKey::Leave
            }
            Key::Enter => RenameKey::Leave,
            _ if field.handle_key(event) => RenameKey::Edited,
            _ => RenameKey::Ignored,
        }
    }

    /// The rename field lost focus: close it and commit unless cancelled.
    pub(crate) fn rename_blurred(&mut self) -> Option<Envelope> {
        let field = self.rename.take()?;
        if self.commit_rename_on_blur {
            self.commit_rename(field.value().to_owned())
        } else {
            self.commit_rename_on_blur = true;
            None
        }
    }

    /// Apply a new label. Empty (after trimming) or unchanged values are
    /// silently discarded.
    fn commit_rename(&mut self, new_label: String) -> Option<Envelope> {
        if new_label.trim().is_empty() || new_label == self.label {
            return None;
        }
        let old_label = std::mem::replace(&mut self.label, new_label.clone());
        Some(Envelope::new(
            ItemRenamed {
                item: self.id,
                old_label,
                new_label,
            },
            self.id,
        ))
    }
}

/// Outcome of a key pressed inside the rename field. Every key is consumed
/// by the field; this only says what else has to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameKey {
    /// The field's text or cursor changed.
    Edited,
    /// Nothing happened.
    Ignored,
    /// Focus must move back to the row (committing or cancelling on blur).
    Leave,
}

// ===========================================================================
// Tests
// ===========================================================================
