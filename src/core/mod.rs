//! Core module re-exports.
//!
//! Error types, platform detection, paths, and credentials live in
//! `codesync-core`; they are re-exported here so the rest of the crate can use
//! `crate::core::...` paths.

pub use codesync_core::core::*;
