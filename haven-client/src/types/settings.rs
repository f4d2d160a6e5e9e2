//! Typed editor for the server settings record
//!
//! Wraps the generic [`FieldTracker`] with the concrete fields of
//! [`ServerSettings`] and builds the minimal `ServerSettingsUpdate`
//! patch from whatever the user actually changed.

use std::collections::HashMap;

use haven_common::protocol::{ClientMessage, ServerSettings};
use uuid::Uuid;

use super::tracker::FieldTracker;

/// Editable fields of the server settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    /// Server name
    Name,
    /// Channel new members are directed to
    DefaultChannel,
    /// Channel system messages are posted to (nullable)
    SystemChannel,
}

/// Value of a settings field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-form text (server name)
    Text(String),
    /// Channel selection (None = no channel)
    Channel(Option<Uuid>),
}

/// Dirty-tracked editor for one server's settings
///
/// Created from a [`ServerSettings`] snapshot when the edit form opens.
/// Typed accessors read the effective values for display; typed mutators
/// feed the tracker on every input event.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    fields: FieldTracker<SettingsField, FieldValue>,
}

fn baseline_of(settings: &ServerSettings) -> HashMap<SettingsField, FieldValue> {
    HashMap::from([
        (
            SettingsField::Name,
            FieldValue::Text(settings.name.clone()),
        ),
        (
            SettingsField::DefaultChannel,
            FieldValue::Channel(Some(settings.default_channel_id)),
        ),
        (
            SettingsField::SystemChannel,
            FieldValue::Channel(settings.system_channel_id),
        ),
    ])
}

impl SettingsEditor {
    /// Create an editor with the snapshot as its baseline
    pub fn new(settings: &ServerSettings) -> Self {
        Self {
            fields: FieldTracker::new(baseline_of(settings)),
        }
    }

    /// Effective server name
    pub fn name(&self) -> &str {
        match self.fields.get(&SettingsField::Name) {
            Some(FieldValue::Text(name)) => name,
            _ => "",
        }
    }

    /// Set the server name
    pub fn set_name(&mut self, name: String) {
        self.fields.set(SettingsField::Name, FieldValue::Text(name));
    }

    /// Effective default channel
    pub fn default_channel_id(&self) -> Option<Uuid> {
        match self.fields.get(&SettingsField::DefaultChannel) {
            Some(FieldValue::Channel(id)) => *id,
            _ => None,
        }
    }

    /// Set the default channel
    pub fn set_default_channel_id(&mut self, id: Uuid) {
        self.fields
            .set(SettingsField::DefaultChannel, FieldValue::Channel(Some(id)));
    }

    /// Effective system messages channel (None = disabled)
    pub fn system_channel_id(&self) -> Option<Uuid> {
        match self.fields.get(&SettingsField::SystemChannel) {
            Some(FieldValue::Channel(id)) => *id,
            _ => None,
        }
    }

    /// Set or clear the system messages channel
    pub fn set_system_channel_id(&mut self, id: Option<Uuid>) {
        self.fields
            .set(SettingsField::SystemChannel, FieldValue::Channel(id));
    }

    /// Whether a specific field differs from the baseline
    pub fn is_changed(&self, field: SettingsField) -> bool {
        self.fields.is_changed(&field)
    }

    /// Whether the form has any changes compared to the baseline
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.fields.has_changes()
    }

    /// Adopt a new snapshot as the baseline and clear all edits
    pub fn reset(&mut self, settings: &ServerSettings) {
        self.fields.reset(Some(baseline_of(settings)));
    }

    /// Discard edits, keeping the current baseline
    pub fn discard(&mut self) {
        self.fields.reset(None);
    }

    /// Build the update message with only changed fields
    ///
    /// Returns `None` when nothing changed, so callers never send an
    /// empty update.
    #[must_use]
    pub fn to_update(&self, server_id: Uuid) -> Option<ClientMessage> {
        if !self.fields.has_changes() {
            return None;
        }

        let changed = self.fields.changed_fields();

        let name = match changed.get(&SettingsField::Name) {
            Some(FieldValue::Text(name)) => Some(name.clone()),
            _ => None,
        };
        let default_channel_id = match changed.get(&SettingsField::DefaultChannel) {
            Some(FieldValue::Channel(id)) => *id,
            _ => None,
        };
        let system_channel_id = match changed.get(&SettingsField::SystemChannel) {
            Some(FieldValue::Channel(id)) => Some(*id),
            _ => None,
        };

        Some(ClientMessage::ServerSettingsUpdate {
            server_id,
            name,
            default_channel_id,
            system_channel_id,
        })
    }
}
