//! Haven Client Editing Library
//!
//! Client-side state for editing server settings: a generic dirty-field
//! tracker, a typed editor for the server settings record, and the
//! session controllers that drive save and delete flows.
//!
//! This crate performs no I/O. Sessions produce [`ClientMessage`] values
//! for the caller's transport layer to send, and consume the matching
//! responses and broadcasts.
//!
//! [`ClientMessage`]: haven_common::protocol::ClientMessage

pub mod session;
pub mod types;

pub use session::{DeleteConfirmState, SettingsSession};
pub use types::{FieldTracker, FieldValue, SettingsEditor, SettingsField};
