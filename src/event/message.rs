//! Message trait, envelope, and the sidenav notifications.
//!
//! The [`Message`] trait is object-safe and supports downcasting via `Any`.
//! [`Envelope`] wraps a boxed message with the id of the item it came from.
//!
//! Item notifications: [`ItemExpanded`], [`ItemCollapsed`], [`ItemRenamed`],
//! [`ItemEnabledChanged`]. Container notification: [`EnabledChanged`].
//! [`SidenavEvent`] is the cloneable, host-facing form of all five.

use std::any::Any;

use crate::dom::node::NodeId;

// ---------------------------------------------------------------------------
// Message trait
// ---------------------------------------------------------------------------

/// Object-safe message trait.
///
/// All messages must implement `as_any` for downcasting and `message_name`
/// for logging.
pub trait Message: Send + 'static {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Event name of this message, e.g. `"item-expanded"`.
    fn message_name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Wraps a boxed message with its sender.
///
/// Envelopes travel one way: from the sending item to the
/// [`Sidenav`](crate::sidenav::Sidenav), and from there out to the host.
pub struct Envelope {
    /// The message payload.
    pub message: Box<dyn Message>,
    /// The item that sent this message.
    pub sender: NodeId,
}

impl Envelope {
    /// Create a new envelope from the sender.
    pub fn new(message: impl Message, sender: NodeId) -> Self {
        Self {
            message: Box::new(message),
            sender,
        }
    }

    /// Attempt to downcast the message to a concrete type.
    pub fn downcast_ref<T: Message + 'static>(&self) -> Option<&T> {
        self.message.as_any().downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("message_name", &self.message.message_name())
            .field("sender", &self.sender)
            .finish()
    }
}

macro_rules! impl_message {
    ($ty:ty, $name:literal) => {
        impl Message for $ty {
            fn as_any(&self) -> &dyn Any {
                self
            }
            fn message_name(&self) -> &str {
                $name
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Item notifications
// ---------------------------------------------------------------------------

/// An item has been expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemExpanded {
    pub item: NodeId,
}

impl_message!(ItemExpanded, "item-expanded");

/// An item has been collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCollapsed {
    pub item: NodeId,
}

impl_message!(ItemCollapsed, "item-collapsed");

/// An item's label was changed through the rename field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRenamed {
    pub item: NodeId,
    /// The label before rename.
    pub old_label: String,
    /// The label after rename.
    pub new_label: String,
}

impl_message!(ItemRenamed, "item-renamed");

/// An item's `enabled` flag changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEnabledChanged {
    pub item: NodeId,
    /// The new value.
    pub enabled: bool,
}

impl_message!(ItemEnabledChanged, "item-enabled-changed");

// ---------------------------------------------------------------------------
// Container notification
// ---------------------------------------------------------------------------

/// The sidenav's enabled item changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledChanged {
    /// The item that was enabled before, if any.
    pub previous: Option<NodeId>,
    /// The newly enabled item.
    pub enabled: NodeId,
}

impl_message!(EnabledChanged, "container-enabled-changed");

// ---------------------------------------------------------------------------
// SidenavEvent
// ---------------------------------------------------------------------------

/// Host-facing notification, published after the sidenav has processed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidenavEvent {
    ItemExpanded(ItemExpanded),
    ItemCollapsed(ItemCollapsed),
    ItemRenamed(ItemRenamed),
    ItemEnabledChanged(ItemEnabledChanged),
    EnabledChanged(EnabledChanged),
}

impl SidenavEvent {
    /// Build the host-facing event for an envelope. Returns `None` for
    /// messages that are not sidenav notifications.
    pub fn from_envelope(envelope: &Envelope) -> Option<Self> {
        if let Some(m) = envelope.downcast_ref::<ItemExpanded>() {
            Some(Self::ItemExpanded(*m))
        } else if let Some(m) = envelope.downcast_ref::<ItemCollapsed>() {
            Some(Self::ItemCollapsed(*m))
        } else if let Some(m) = envelope.downcast_ref::<ItemRenamed>() {
            Some(Self::ItemRenamed(m.clone()))
        } else if let Some(m) = envelope.downcast_ref::<ItemEnabledChanged>() {
            Some(Self::ItemEnabledChanged(*m))
        } else {
            envelope
                .downcast_ref::<EnabledChanged>()
                .map(|m| Self::EnabledChanged(*m))
        }
    }

    /// Event name, matching [`Message::message_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::ItemExpanded(_) => "item-expanded",
            Self::ItemCollapsed(_) => "item-collapsed",
            Self::ItemRenamed(_) => "item-renamed",
            Self::ItemEnabledChanged(_) => "item-enabled-changed",
            Self::EnabledChanged(_) => "container-enabled-changed",
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
