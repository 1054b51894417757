//! Widgets embedded in sidenav rows.
//!
//! - [`RenameField`]: single-line text field shown while an item is renaming

pub mod rename;

pub use rename::RenameField;
