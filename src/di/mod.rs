//! Dependency injection infrastructure for Codesync
//!
//! The sync core only talks to capability traits; production wiring lives in
//! `SyncContext::new`, and `mocks` provides in-memory fakes for tests.
//!
//! # Example (Production)
//! ```no_run
//! use codesync::di::{SyncContext, mocks::MockPrompt};
//! use std::sync::Arc;
//!
//! # fn example() -> codesync::core::CodesyncResult<()> {
//! let context = SyncContext::new(Arc::new(MockPrompt::new()), None)?;
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::SyncContext;
pub use traits::{
    ConfigProvider, LocalEnvironment, PackageRuntime, RemoteStore, SecretStore, StateStore,
    UserPrompt,
};
