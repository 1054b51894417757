//! Navigation key bindings.
//!
//! [`NavBindings`] maps key+modifier combinations to [`NavAction`]s.
//! The `with_defaults()` constructor installs the tree navigation keys.
//! Horizontal arrows are bound in left-to-right terms and mirrored at
//! resolution time for right-to-left text.

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};
use crate::config::TextDirection;

// ---------------------------------------------------------------------------
// NavAction
// ---------------------------------------------------------------------------

/// Action to take when a navigation key is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Enable the selected item.
    Activate,
    /// Select the previous selectable item.
    Previous,
    /// Select the next selectable item.
    Next,
    /// Expand the selected item, or step into its first child.
    Expand,
    /// Collapse the selected item, or step out to its parent.
    Collapse,
    /// Select the first selectable item.
    First,
    /// Select the last selectable item.
    Last,
}

// ---------------------------------------------------------------------------
// NavBindings
// ---------------------------------------------------------------------------

/// Registry of navigation bindings, mapping (Key, Modifiers) -> NavAction.
#[derive(Debug, Clone)]
pub struct NavBindings {
    bindings: HashMap<(Key, Modifiers), NavAction>,
}

impl NavBindings {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the standard tree bindings.
    ///
    /// Defaults:
    /// - `Enter`, `Space` -> Activate
    /// - `Up` / `Down` -> Previous / Next
    /// - `Right` / `Left` -> Expand / Collapse (mirrored under RTL)
    /// - `Home` / `End` -> First / Last
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Enter, Modifiers::NONE, NavAction::Activate);
        registry.bind(Key::Char(' '), Modifiers::NONE, NavAction::Activate);
        registry.bind(Key::Up, Modifiers::NONE, NavAction::Previous);
        registry.bind(Key::Down, Modifiers::NONE, NavAction::Next);
        registry.bind(Key::Right, Modifiers::NONE, NavAction::Expand);
        registry.bind(Key::Left, Modifiers::NONE, NavAction::Collapse);
        registry.bind(Key::Home, Modifiers::NONE, NavAction::First);
        registry.bind(Key::End, Modifiers::NONE, NavAction::Last);
        registry
    }

    /// Register a binding, replacing any existing one for the same combination.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: NavAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a binding. Returns the removed action, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<NavAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a key event under the given text direction.
    ///
    /// Under [`TextDirection::Rtl`] `Left` and `Right` are swapped before lookup.
    pub fn resolve(&self, event: &KeyEvent, direction: TextDirection) -> Option<NavAction> {
        let code = match (direction, event.code) {
            (TextDirection::Rtl, Key::Left) => Key::Right,
            (TextDirection::Rtl, Key::Right) => Key::Left,
            (_, code) => code,
        };
        self.bindings.get(&(code, event.modifiers)).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for NavBindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: Key) -> KeyEvent {
        KeyEvent::new(code, Modifiers::NONE)
    }

    #[test]
    fn new_registry_is_empty() {
        let reg = NavBindings::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn defaults_cover_tree_keys() {
        let reg = NavBindings::with_defaults();
        assert_eq!(reg.len(), 8);
        let ltr = TextDirection::Ltr;
        assert_eq!(reg.resolve(&press(Key::Enter), ltr), Some(NavAction::Activate));
        assert_eq!(reg.resolve(&press(Key::Char(' ')), ltr), Some(NavAction::Activate));
        assert_eq!(reg.resolve(&press(Key::Up), ltr), Some(NavAction::Previous));
        assert_eq!(reg.resolve(&press(Key::Down), ltr), Some(NavAction::Next));
        assert_eq!(reg.resolve(&press(Key::Home), ltr), Some(NavAction::First));
        assert_eq!(reg.resolve(&press(Key::End), ltr), Some(NavAction::Last));
    }

    #[test]
    fn horizontal_arrows_follow_direction() {
        let reg = NavBindings::with_defaults();
        assert_eq!(
            reg.resolve(&press(Key::Right), TextDirection::Ltr),
            Some(NavAction::Expand)
        );
        assert_eq!(
            reg.resolve(&press(Key::Left), TextDirection::Ltr),
            Some(NavAction::Collapse)
        );
        assert_eq!(
            reg.resolve(&press(Key::Left), TextDirection::Rtl),
            Some(NavAction::Expand)
        );
        assert_eq!(
            reg.resolve(&press(Key::Right), TextDirection::Rtl),
            Some(NavAction::Collapse)
        );
    }

    #[test]
    fn modifiers_must_match() {
        let reg = NavBindings::with_defaults();
        let shifted = KeyEvent::new(Key::Down, Modifiers::SHIFT);
        assert_eq!(reg.resolve(&shifted, TextDirection::Ltr), None);
    }

    #[test]
    fn rebind_and_unbind() {
        let mut reg = NavBindings::with_defaults();
        reg.bind(Key::Char('j'), Modifiers::NONE, NavAction::Next);
        assert_eq!(
            reg.resolve(&press(Key::Char('j')), TextDirection::Ltr),
            Some(NavAction::Next)
        );
        assert_eq!(reg.unbind(Key::Char('j'), Modifiers::NONE), Some(NavAction::Next));
        assert_eq!(reg.unbind(Key::Char('j'), Modifiers::NONE), None);
    }
}
