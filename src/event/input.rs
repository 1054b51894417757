//! Keyboard input for the sidenav.
//!
//! [`KeyEvent`] is what [`Sidenav::handle_key`](crate::sidenav::Sidenav::handle_key)
//! consumes. Terminal hosts feed crossterm events through
//! [`try_from_crossterm`]; keys the sidenav has no use for are dropped there
//! rather than mapped to something else.

use std::ops::{BitAnd, BitOr};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A key the tree or its rename field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    /// Map a crossterm key code. Returns `None` for keys without a [`Key`].
    pub fn from_crossterm(code: KeyCode) -> Option<Key> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        Some(key)
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Whether every bit of `other` is set.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(m: KeyModifiers) -> Self {
        [
            (KeyModifiers::SHIFT, Modifiers::SHIFT),
            (KeyModifiers::CONTROL, Modifiers::CTRL),
            (KeyModifiers::ALT, Modifiers::ALT),
        ]
        .into_iter()
        .filter(|(ct, _)| m.contains(*ct))
        .fold(Modifiers::NONE, |acc, (_, ours)| acc | ours)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A key press with modifiers and auto-repeat flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
    /// Generated by holding the key down.
    pub repeat: bool,
}

impl KeyEvent {
    /// A fresh (non-repeat) press.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            repeat: false,
        }
    }

    /// Mark this event as an auto-repeat.
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Whether Ctrl or Alt is held.
    pub fn is_chord(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL) || self.modifiers.contains(Modifiers::ALT)
    }
}

impl From<Key> for KeyEvent {
    fn from(code: Key) -> Self {
        KeyEvent::new(code, Modifiers::NONE)
    }
}

/// Extract a key press from a crossterm `Event`.
///
/// Returns `None` for non-key events, key releases and unsupported keys.
/// `KeyEventKind::Repeat` sets [`KeyEvent::repeat`].
pub fn try_from_crossterm(event: Event) -> Option<KeyEvent> {
    let Event::Key(ct) = event else {
        return None;
    };
    if ct.kind == KeyEventKind::Release {
        return None;
    }
    Some(KeyEvent {
        code: Key::from_crossterm(ct.code)?,
        modifiers: ct.modifiers.into(),
        repeat: ct.kind == KeyEventKind::Repeat,
    })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent as CtKeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(CtKeyEvent::new(code, modifiers))
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert_eq!(mods & Modifiers::ALT, Modifiers::ALT);
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn modifiers_from_crossterm() {
        let m = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert_eq!(m, Modifiers::CTRL | Modifiers::SHIFT);
        assert!(Modifiers::from(KeyModifiers::NONE).is_empty());
    }

    // ── KeyEvent ─────────────────────────────────────────────────────

    #[test]
    fn new_is_not_repeat() {
        let ke = KeyEvent::new(Key::Down, Modifiers::NONE);
        assert!(!ke.repeat);
        assert!(ke.repeated().repeat);
    }

    #[test]
    fn chord_detection() {
        assert!(KeyEvent::new(Key::Up, Modifiers::CTRL).is_chord());
        assert!(KeyEvent::new(Key::Up, Modifiers::ALT).is_chord());
        assert!(!KeyEvent::new(Key::Char('A'), Modifiers::SHIFT).is_chord());
    }

    // ── try_from_crossterm ───────────────────────────────────────────

    #[test]
    fn converts_navigation_keys() {
        for (code, expected) in [
            (KeyCode::Left, Key::Left),
            (KeyCode::Up, Key::Up),
            (KeyCode::End, Key::End),
            (KeyCode::Esc, Key::Escape),
            (KeyCode::Char(' '), Key::Char(' ')),
        ] {
            let ke = try_from_crossterm(key(code, KeyModifiers::NONE)).unwrap();
            assert_eq!(ke.code, expected);
            assert!(!ke.repeat);
        }
    }

    #[test]
    fn carries_modifiers_and_repeat() {
        let ke = try_from_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
        assert!(ke.modifiers.contains(Modifiers::CTRL));

        let held = Event::Key(CtKeyEvent::new_with_kind(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
        assert!(try_from_crossterm(held).unwrap().repeat);
    }

    #[test]
    fn drops_releases_unsupported_keys_and_other_events() {
        let release = Event::Key(CtKeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(try_from_crossterm(release).is_none());
        assert!(try_from_crossterm(key(KeyCode::F(5), KeyModifiers::NONE)).is_none());
        assert!(try_from_crossterm(key(KeyCode::PageDown, KeyModifiers::NONE)).is_none());
        assert!(try_from_crossterm(Event::FocusGained).is_none());
        assert!(try_from_crossterm(Event::Resize(80, 24)).is_none());
    }
}
