//! Pilot: programmatic interaction with a headless sidenav.
//!
//! The `Pilot` wraps a [`Sidenav`] and provides methods to simulate user
//! input (key presses, typed text, clicks, focus changes) and to render the
//! visible rows to text for snapshot testing.

use crate::config::SidenavConfig;
use crate::dom::node::NodeId;
use crate::error::Result;
use crate::event::input::{try_from_crossterm, Key, KeyEvent, Modifiers};
use crate::event::message::SidenavEvent;
use crate::item::SidenavItem;
use crate::sidenav::{DoubleClick, Sidenav};

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless sidenav driver for testing.
///
/// # Examples
///
/// ```
/// use sidenav_tree::event::Key;
/// use sidenav_tree::item::SidenavItem;
/// use sidenav_tree::testing::Pilot;
///
/// let mut pilot = Pilot::new();
/// let a = pilot.add(None, SidenavItem::new("A")).unwrap();
/// let b = pilot.add(None, SidenavItem::new("B")).unwrap();
/// pilot.focus();
/// pilot.press_key(Key::Down);
/// assert_eq!(pilot.sidenav().selected_item(), Some(b));
/// assert_ne!(pilot.sidenav().selected_item(), Some(a));
/// ```
#[derive(Debug, Default)]
pub struct Pilot {
    sidenav: Sidenav,
}

impl Pilot {
    /// Create a pilot around an empty sidenav with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pilot around an empty sidenav with the given config.
    pub fn with_config(config: SidenavConfig) -> Self {
        Self {
            sidenav: Sidenav::new(config),
        }
    }

    /// Append an item (and its nested children).
    pub fn add(&mut self, parent: Option<NodeId>, item: SidenavItem) -> Result<NodeId> {
        self.sidenav.append_item(parent, item)
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers. Returns whether it was consumed.
    pub fn press_key(&mut self, key: Key) -> bool {
        self.sidenav.handle_key(KeyEvent::new(key, Modifiers::NONE))
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> bool {
        self.sidenav.handle_key(KeyEvent::new(key, modifiers))
    }

    /// Feed a raw terminal event. Non-key events are ignored.
    pub fn send_event(&mut self, event: crossterm::event::Event) -> bool {
        match try_from_crossterm(event) {
            Some(key) => self.sidenav.handle_key(key),
            None => false,
        }
    }

    /// Simulate typing each character of `text` as individual key presses.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press_key(Key::Char(ch));
        }
    }

    /// Simulate a click on an item's row.
    pub fn click(&mut self, id: NodeId) -> Result<()> {
        self.sidenav.click_row(id)
    }

    /// Simulate a click on an item's expand icon.
    pub fn click_expand_icon(&mut self, id: NodeId) -> Result<()> {
        self.sidenav.click_expand_icon(id)
    }

    /// Simulate a double-click on an item's row.
    pub fn double_click(&mut self, id: NodeId) -> Result<DoubleClick> {
        self.sidenav.double_click(id, false)
    }

    /// Move keyboard focus into the sidenav.
    pub fn focus(&mut self) {
        self.sidenav.focus();
    }

    /// Move keyboard focus out of the sidenav.
    pub fn blur(&mut self) {
        self.sidenav.blur();
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Borrow the underlying sidenav immutably.
    pub fn sidenav(&self) -> &Sidenav {
        &self.sidenav
    }

    /// Borrow the underlying sidenav mutably.
    pub fn sidenav_mut(&mut self) -> &mut Sidenav {
        &mut self.sidenav
    }

    /// Drain the notifications published so far.
    pub fn take_events(&mut self) -> Vec<SidenavEvent> {
        self.sidenav.take_events()
    }

    /// Render the visible rows to text.
    pub fn outline(&self) -> String {
        super::snapshot::outline_to_string(&self.sidenav)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
