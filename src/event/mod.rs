//! Event system: keyboard input, notifications, dispatch, navigation bindings.

pub mod binding;
pub mod handler;
pub mod input;
pub mod message;

pub use binding::{NavAction, NavBindings};
pub use handler::EventDispatcher;
pub use input::{Key, KeyEvent, Modifiers};
pub use message::{
    EnabledChanged, Envelope, ItemCollapsed, ItemEnabledChanged, ItemExpanded, ItemRenamed,
    Message, SidenavEvent,
};
