//! Broadcasting of notifications of state changes, and other messages.
//!
//! This module re-exports the parts of [`nosy`] that the editor's API uses, so that
//! hosts do not need to depend on a matching version of it themselves.
//!
//! Notifications are delivered synchronously, while the editor is in the middle of
//! handling an event; listeners should record that something changed (for example,
//! with a [`Flag`]) and read the editor's state afterward.

pub use nosy::{Flag, Listen, Listener, Log};

pub use nosy::sync::{DynListener, Notifier};
