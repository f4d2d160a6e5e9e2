//! Editing state types

mod settings;
mod tracker;

pub use settings::{FieldValue, SettingsEditor, SettingsField};
pub use tracker::FieldTracker;
