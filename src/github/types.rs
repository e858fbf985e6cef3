//! GitHub gist API type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A gist as returned by `GET /gists/{id}` and `POST /gists`
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
}

/// One file entry of a gist
#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub content: Option<String>,
    /// Set when `content` was cut off by the API; the full text is at `raw_url`
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub raw_url: Option<String>,
}

/// File content in a create/update request
#[derive(Debug, Clone, Serialize)]
pub struct GistFileContent {
    pub content: String,
}

/// Body of `POST /gists`
#[derive(Debug, Clone, Serialize)]
pub struct CreateGistRequest {
    pub description: String,
    pub public: bool,
    pub files: HashMap<String, GistFileContent>,
}

/// Body of `PATCH /gists/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateGistRequest {
    pub files: HashMap<String, GistFileContent>,
}
