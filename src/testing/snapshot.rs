//! Snapshot rendering helpers.
//!
//! Converts a sidenav's visible rows into plain text suitable for snapshot
//! testing and assertions. One line per visible row:
//!
//! ```text
//! > ▾ Photos *
//!     ▸ 2024
//!       notes.txt (disabled)
//! ```
//!
//! - `> ` marks the selected item,
//! - two spaces of indent per layer,
//! - `▾`/`▸` for expanded/collapsed items with children,
//! - a rename field in progress shows as `[text]` instead of the label,
//! - suffixes: ` *` enabled, ` (disabled)`, ` (error)`.
//!
//! Separator items are preceded by a divider line.

use crate::item::SidenavItem;
use crate::sidenav::Sidenav;

const DIVIDER: &str = "  ────────";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the visible rows of a sidenav as plain text.
///
/// Rows hidden under a collapsed ancestor are omitted. Lines are joined with
/// `'\n'` and right-trimmed; there is no trailing newline.
///
/// # Examples
///
/// ```
/// use sidenav_tree::item::SidenavItem;
/// use sidenav_tree::sidenav::Sidenav;
/// use sidenav_tree::testing::outline_to_string;
///
/// let mut nav = Sidenav::default();
/// nav.append_item(None, SidenavItem::new("Inbox")).unwrap();
/// nav.append_item(None, SidenavItem::new("Sent")).unwrap();
/// assert_eq!(outline_to_string(&nav), "> Inbox\n  Sent");
/// ```
pub fn outline_to_string(nav: &Sidenav) -> String {
    let mut lines = Vec::new();
    for id in nav.items() {
        let visible = nav
            .dom()
            .ancestors(id)
            .into_iter()
            .all(|a| nav.item(a).is_some_and(SidenavItem::expanded));
        if !visible {
            continue;
        }
        let Some(item) = nav.item(id) else {
            continue;
        };
        if item.separator() {
            lines.push(DIVIDER.to_owned());
        }
        lines.push(row_to_string(item, nav.selected_item() == Some(id)));
    }
    lines.join("\n")
}

/// Render a single row, without the hidden-ancestor check.
pub fn row_to_string(item: &SidenavItem, selected: bool) -> String {
    let mut row = String::new();
    row.push_str(if selected { "> " } else { "  " });
    row.push_str(&"  ".repeat(item.layer()));

    if item.has_children() {
        row.push_str(if item.expanded() { "▾ " } else { "▸ " });
    } else if item.in_layered() {
        row.push_str("  ");
    }

    match item.rename_field() {
        Some(field) => {
            row.push('[');
            row.push_str(field.value());
            row.push(']');
        }
        None => row.push_str(item.label()),
    }

    if item.enabled() {
        row.push_str(" *");
    }
    if item.disabled() {
        row.push_str(" (disabled)");
    }
    if item.error() {
        row.push_str(" (error)");
    }
    row.trim_end().to_owned()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── outline_to_string ────────────────────────────────────────────

    #[test]
    fn empty_sidenav_renders_nothing() {
        assert_eq!(outline_to_string(&Sidenav::default()), "");
    }

    #[test]
    fn flat_rows_have_no_markers() {
        let mut nav = Sidenav::default();
        nav.append_item(None, SidenavItem::new("A")).unwrap();
        nav.append_item(None, SidenavItem::new("B").with_error(true))
            .unwrap();
        assert_eq!(outline_to_string(&nav), "> A\n  B (error)");
    }

    #[test]
    fn collapsed_children_are_hidden() {
        let mut nav = Sidenav::default();
        let a = nav
            .append_item(None, SidenavItem::new("A").with_child(SidenavItem::new("B")))
            .unwrap();
        nav.append_item(None, SidenavItem::new("C")).unwrap();
        assert_eq!(outline_to_string(&nav), "> ▸ A\n    C");

        nav.set_expanded(a, true).unwrap();
        assert_eq!(outline_to_string(&nav), "> ▾ A\n      B\n    C");
    }

    #[test]
    fn separator_draws_divider() {
        let mut nav = Sidenav::default();
        nav.append_item(None, SidenavItem::new("A")).unwrap();
        nav.append_item(None, SidenavItem::new("B").with_separator(true))
            .unwrap();
        let out = outline_to_string(&nav);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines, vec!["> A", DIVIDER, "  B"]);
    }

    // ── row_to_string ────────────────────────────────────────────────

    #[test]
    fn row_shows_state_suffixes() {
        let mut nav = Sidenav::default();
        let a = nav
            .append_item(None, SidenavItem::new("A").with_enabled(true))
            .unwrap();
        nav.set_disabled(a, true).unwrap();
        let item = nav.item(a).unwrap();
        assert_eq!(row_to_string(item, false), "  A * (disabled)");
    }

    #[test]
    fn row_shows_rename_field() {
        let mut nav = Sidenav::default();
        let a = nav.append_item(None, SidenavItem::new("A")).unwrap();
        nav.set_renaming(a, true).unwrap();
        nav.set_rename_value(a, "Draft").unwrap();
        assert_eq!(row_to_string(nav.item(a).unwrap(), true), "> [Draft]");
    }
}
