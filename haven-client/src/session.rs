//! Editing-session controllers for server settings
//!
//! A [`SettingsSession`] owns the dirty-tracked editor for one server plus
//! the save lifecycle around it: pre-validation, the in-flight guard that
//! prevents duplicate submissions, and error surfacing. The session
//! produces protocol messages for the caller to transmit and consumes the
//! matching responses; it never performs I/O itself.
//!
//! Sessions are instance-scoped. A client editing two servers (e.g. in
//! two tabs) holds two independent sessions.

use haven_common::protocol::{ClientMessage, ServerSettings};
use haven_common::validators::{MAX_SERVER_NAME_LENGTH, ServerNameError, validate_server_name};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::types::SettingsEditor;

/// Editing session for one server's settings
#[derive(Debug, Clone)]
pub struct SettingsSession {
    /// Server being edited
    server_id: Uuid,
    /// Dirty-tracked form state
    editor: SettingsEditor,
    /// Whether an update request is currently in flight
    request_sent: bool,
    /// Error message to display
    error: Option<String>,
}

impl SettingsSession {
    /// Open an editing session with the current snapshot as baseline
    pub fn new(server_id: Uuid, settings: &ServerSettings) -> Self {
        Self {
            server_id,
            editor: SettingsEditor::new(settings),
            request_sent: false,
            error: None,
        }
    }

    /// Server this session edits
    pub fn server_id(&self) -> Uuid {
        self.server_id
    }

    /// Read access to the form state
    pub fn editor(&self) -> &SettingsEditor {
        &self.editor
    }

    /// Mutable access to the form state (field change handlers)
    pub fn editor_mut(&mut self) -> &mut SettingsEditor {
        &mut self.editor
    }

    /// Error message to display, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an update request is currently in flight
    pub fn is_saving(&self) -> bool {
        self.request_sent
    }

    /// Whether the save action should be enabled
    pub fn can_save(&self) -> bool {
        !self.request_sent && self.editor.has_changes()
    }

    /// Start a save, returning the patch message to transmit
    ///
    /// Returns `None` without changing state when a save is already in
    /// flight or nothing changed. Validation failures also return `None`
    /// and surface the problem through [`SettingsSession::error`] instead.
    /// On success the in-flight flag is set; the caller must feed the
    /// server's response to [`SettingsSession::handle_update_response`]
    /// to release it.
    #[must_use]
    pub fn begin_save(&mut self) -> Option<ClientMessage> {
        if self.request_sent {
            return None;
        }

        if let Err(e) = validate_server_name(self.editor.name()) {
            self.error = Some(match e {
                ServerNameError::Empty => "Server name cannot be empty".to_string(),
                ServerNameError::TooLong => {
                    format!("Server name cannot exceed {MAX_SERVER_NAME_LENGTH} characters")
                }
                ServerNameError::ContainsNewlines => {
                    "Server name cannot contain line breaks".to_string()
                }
            });
            return None;
        }

        let msg = self.editor.to_update(self.server_id)?;

        self.error = None;
        self.request_sent = true;
        debug!(server_id = %self.server_id, "sending server settings update");
        Some(msg)
    }

    /// Handle the `ServerSettingsUpdateResponse` for this session
    ///
    /// Clears the in-flight flag on every outcome. On failure the error
    /// is stored for display and the user's edits stay intact so they
    /// can retry; the baseline only moves when the server broadcasts the
    /// new snapshot.
    pub fn handle_update_response(&mut self, success: bool, error: Option<String>) {
        self.request_sent = false;
        if success {
            self.error = None;
        } else {
            warn!(server_id = %self.server_id, ?error, "server settings update failed");
            self.error = Some(error.unwrap_or_else(|| "Settings update failed".to_string()));
        }
    }

    /// Handle a `ServerSettingsUpdated` broadcast
    ///
    /// Adopts the authoritative snapshot as the new baseline and discards
    /// pending edits. The caller routes every broadcast here, which also
    /// covers out-of-band refreshes (another owner session saving while
    /// this form is open) - the stale-baseline case.
    pub fn handle_settings_updated(&mut self, server_id: Uuid, settings: &ServerSettings) {
        if server_id != self.server_id {
            return;
        }
        debug!(server_id = %server_id, "adopting updated server settings as baseline");
        self.editor.reset(settings);
    }
}

// =============================================================================
// Delete Confirmation
// =============================================================================

/// Delete confirmation dialog state
///
/// Independent of the settings editor: deletion needs no dirty tracking,
/// only the type-the-name-to-confirm gate and the same in-flight guard
/// as saves. The server is not assumed deleted until the response
/// reports success.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmState {
    /// Name typed by the user; must match the server name exactly
    confirm_text: String,
    /// Whether a delete request is currently in flight
    request_sent: bool,
    /// Error message to display in the dialog
    error: Option<String>,
}

impl DeleteConfirmState {
    /// Create an empty confirmation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed into the confirmation field
    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    /// Handle confirmation field change
    pub fn set_confirm_text(&mut self, text: String) {
        self.confirm_text = text;
        self.error = None;
    }

    /// Error message to display, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a delete request is currently in flight
    pub fn is_deleting(&self) -> bool {
        self.request_sent
    }

    /// Whether the delete action should be enabled
    pub fn can_delete(&self, server_name: &str) -> bool {
        !self.request_sent && self.confirm_text == server_name
    }

    /// Start a delete, returning the message to transmit
    ///
    /// Guarded by the confirmation match and the in-flight flag.
    #[must_use]
    pub fn begin_delete(&mut self, server_id: Uuid, server_name: &str) -> Option<ClientMessage> {
        if !self.can_delete(server_name) {
            return None;
        }

        self.error = None;
        self.request_sent = true;
        debug!(server_id = %server_id, "sending server delete");
        Some(ClientMessage::ServerDelete { server_id })
    }

    /// Handle the `ServerDeleteResponse` for this dialog
    ///
    /// Clears the in-flight flag on every outcome; on failure the error
    /// is shown in the dialog and the user may try again.
    pub fn handle_delete_response(&mut self, success: bool, error: Option<String>) {
        self.request_sent = false;
        if !success {
            warn!(?error, "server delete failed");
            self.error = Some(error.unwrap_or_else(|| "Server delete failed".to_string()));
        }
    }
}
