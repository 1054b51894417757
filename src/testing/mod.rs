//! Headless testing helpers: Pilot, snapshot rendering.
//!
//! Use the [`Pilot`] to drive a [`Sidenav`](crate::sidenav::Sidenav) the way
//! a user would. Use [`outline_to_string`] to capture the visible rows as
//! plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{outline_to_string, row_to_string};
