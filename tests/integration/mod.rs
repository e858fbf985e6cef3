//! Integration tests module
//!
//! These run the `codesync` binary against an isolated config directory.

pub mod cli;
pub mod common;
pub mod link;
pub mod status;
pub mod sync;
