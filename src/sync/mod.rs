//! Sync payload model and the reconciler deciding between init, push, and pull.

pub mod payload;
pub mod reconciler;

pub use payload::{RemoteHandle, SyncPayload};
pub use reconciler::{Direction, Reconciler, SyncOptions, SyncOutcome};
