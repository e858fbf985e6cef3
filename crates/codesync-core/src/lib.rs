//! Core utilities shared by the codesync binary: error types, platform and
//! path resolution, and keychain-backed credential storage.

pub mod core;

pub use crate::core::{
    format_error_with_help, CodesyncError, CodesyncResult, CredentialStore, EditorVariant,
    ErrorHelp, Platform,
};
