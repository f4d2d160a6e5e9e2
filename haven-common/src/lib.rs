//! Haven Common Library
//!
//! Shared types, protocol messages, and validators for the Haven chat system.

mod error_kind;
pub mod protocol;
pub mod validators;

pub use error_kind::SettingsErrorKind;

/// Version information for the Haven protocol
pub const PROTOCOL_VERSION: &str = "0.1.0";
