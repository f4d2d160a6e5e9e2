//! Protocol definitions for Haven
//!
//! All messages are sent as newline-delimited JSON over TLS.
//!
//! Settings updates are partial: a field that is omitted from
//! `ServerSettingsUpdate` is left unchanged by the server. The nullable
//! `system_channel_id` field distinguishes "unchanged" (omitted) from
//! "cleared" (explicit `null`) via [`double_option`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serde helper for `Option<Option<T>>` patch fields.
///
/// Combined with `#[serde(default, skip_serializing_if = "Option::is_none")]`:
/// - outer `None` → field omitted → unchanged
/// - `Some(None)` → explicit `null` → cleared
/// - `Some(Some(v))` → new value
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        // Outer None is skipped by skip_serializing_if, so only the inner
        // option reaches the wire.
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        // A present field (even null) deserializes to Some(inner);
        // an absent field falls back to the outer default of None.
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Client request messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Update server settings (owner only)
    ///
    /// Every field except `server_id` is optional; omitted fields are
    /// left unchanged. Sending no fields at all is a protocol error.
    ServerSettingsUpdate {
        server_id: Uuid,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Channel new members are directed to
        #[serde(skip_serializing_if = "Option::is_none")]
        default_channel_id: Option<Uuid>,
        /// Channel system messages are posted to (`null` clears it)
        #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
        system_channel_id: Option<Option<Uuid>>,
    },
    /// Delete a server (owner only, cannot be undone)
    ServerDelete { server_id: Uuid },
}

/// Server response messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Settings update response
    ServerSettingsUpdateResponse {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// Broadcast after any successful settings update, carrying the new
    /// authoritative snapshot
    ServerSettingsUpdated {
        server_id: Uuid,
        settings: ServerSettings,
    },
    /// Server delete response
    ServerDeleteResponse {
        success: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// Server settings snapshot
///
/// The persisted settings record for a server, as last reported by the
/// server. Clients capture this as the baseline for editing sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server name
    pub name: String,
    /// Channel new members are directed to
    pub default_channel_id: Uuid,
    /// Channel system messages are posted to (None = disabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_channel_id: Option<Uuid>,
}
