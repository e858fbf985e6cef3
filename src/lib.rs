//! Codesync: mirror an editor's settings and extensions through a private gist
//!
//! This crate holds the sync engine behind the `codesync` binary. Platform,
//! path, error, and keychain primitives come from `codesync-core`; everything
//! that talks to the network, the editor CLI, or the user lives here.

pub use codesync_core::{
    format_error_with_help, CodesyncError, CodesyncResult, CredentialStore, EditorVariant,
    ErrorHelp, Platform,
};

/// Core module re-exported from codesync-core.
pub mod core;

/// Configuration management.
pub mod config;

/// GitHub token prompt and lookup.
pub mod credential;

/// Dependency injection.
pub mod di;

/// Gist API client.
pub mod github;

/// Editor settings file, CLI, and environment description.
pub mod local;

/// Extension records and the install-and-verify loop.
pub mod package;

/// Persisted gist id.
pub mod state;

/// Payload model and sync reconciler.
pub mod sync;
