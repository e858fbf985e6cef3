//! GitHub integration: the gist that stores the sync payload
//!
//! One private gist per sync relationship, holding a single JSON file. The
//! client creates it on first upload, then fetches or overwrites it.

pub mod client;
pub mod types;

pub use client::{GistClient, GIST_FILE_NAME};
pub use types::{Gist, GistFile};
