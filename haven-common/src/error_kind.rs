//! Machine-readable error kinds for settings operations
//!
//! These error kinds are serialized to strings in protocol messages,
//! allowing clients to make decisions based on the error type
//! (e.g., discarding in-progress edits when the server no longer exists).

use std::fmt;

/// Error kinds for server settings update/delete operations
///
/// These are returned in `ServerSettingsUpdateResponse` and
/// `ServerDeleteResponse` to help clients decide how to handle the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsErrorKind {
    /// Target server not found
    ///
    /// Client should discard the editing session; there is nothing
    /// left to save.
    NotFound,

    /// Permission denied
    ///
    /// Only the server owner may change settings or delete the server.
    Permission,

    /// Invalid field value
    ///
    /// A submitted field failed server-side validation. The client
    /// keeps the user's edits so they can correct and resubmit.
    Invalid,
}

impl SettingsErrorKind {
    /// Convert to the string representation used in protocol messages
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Permission => "permission",
            Self::Invalid => "invalid",
        }
    }

    /// Parse from string (for client-side handling)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "not_found" => Some(Self::NotFound),
            "permission" => Some(Self::Permission),
            "invalid" => Some(Self::Invalid),
            _ => None,
        }
    }
}

impl fmt::Display for SettingsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SettingsErrorKind> for String {
    fn from(kind: SettingsErrorKind) -> Self {
        kind.as_str().to_string()
    }
}
