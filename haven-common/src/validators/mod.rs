//! Input validation functions
//!
//! Reusable validators for common input types. These validators are shared
//! between client and server - clients can use them for pre-validation,
//! servers use them for enforcement.

mod server_name;

pub use server_name::{MAX_SERVER_NAME_LENGTH, ServerNameError, validate_server_name};
