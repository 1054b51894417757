//! # sidenav-tree
//!
//! A keyboard-navigable, hierarchically expandable side-navigation tree.
//!
//! A [`Sidenav`] holds nested [`SidenavItem`]s in a slotmap arena and acts as
//! the single arbiter of tree-wide state: at most one item is *enabled* (the
//! active page), exactly one item holds the roving tab stop (the *selected*
//! item), and selection never hides inside a collapsed subtree. Items only
//! change themselves and report through typed notifications that the sidenav
//! reacts to before handing them on to the host.
//!
//! ## Core Systems
//!
//! - **[`sidenav`]**: The container: structure API, enabled/selected arbitration, keyboard navigation, pointer gestures
//! - **[`item`]**: Item properties, expansion rules and the rename state machine
//! - **[`dom`]**: Slotmap-backed item arena with tree operations
//! - **[`event`]**: Key input, notifications, dispatch queue, navigation bindings
//! - **[`focus`]**: Focus targets and deferred focus
//! - **[`widgets`]**: The inline rename text field
//! - **[`config`]**: Behaviour flags and text direction
//! - **[`error`]**: Error type for item-addressed operations
//! - **[`testing`]**: Headless Pilot and outline snapshots

// Foundation
pub mod config;
pub mod error;

// Core systems
pub mod dom;
pub mod item;
pub mod widgets;

// Events and focus
pub mod event;
pub mod focus;

// Container
pub mod sidenav;

// Testing
pub mod testing;

pub use config::{SidenavConfig, TextDirection};
pub use dom::NodeId;
pub use error::{Result, SidenavError};
pub use event::{Key, KeyEvent, Modifiers, SidenavEvent};
pub use item::SidenavItem;
pub use sidenav::{DoubleClick, Sidenav};
