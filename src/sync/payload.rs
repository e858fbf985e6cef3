use crate::core::{CodesyncError, CodesyncResult};
use crate::local::{EnvironmentInfo, Settings};
use crate::package::{dedupe, Extension};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Opaque identifier of the remote blob (a gist id).
///
/// Deserialized values go through the same id check as `parse`, minus URL
/// stripping, so a hand-edited state file cannot smuggle a path into API URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RemoteHandle(String);

impl RemoteHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accept a bare gist id or a gist URL (`https://gist.github.com/<user>/<id>`).
    pub fn parse(input: &str) -> CodesyncResult<Self> {
        let trimmed = input.trim().trim_end_matches('/');
        let id = trimmed.rsplit('/').next().unwrap_or(trimmed);

        if !is_gist_id(id) {
            return Err(invalid_id(input));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_gist_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

fn invalid_id(input: &str) -> CodesyncError {
    CodesyncError::Config(format!("'{}' is not a valid gist id", input.trim()))
}

impl TryFrom<String> for RemoteHandle {
    type Error = CodesyncError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        if is_gist_id(&id) {
            Ok(Self(id))
        } else {
            Err(invalid_id(&id))
        }
    }
}

impl From<RemoteHandle> for String {
    fn from(handle: RemoteHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for RemoteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything one machine uploads: settings, extensions, and where they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    pub settings: Settings,
    pub extensions: Vec<Extension>,
    /// ISO-8601 UTC creation time
    pub timestamp: String,
    pub environment: EnvironmentInfo,
}

impl SyncPayload {
    /// Build a payload from local state. Extension ids are de-duplicated.
    pub fn build(
        settings: Settings,
        installed: Vec<Extension>,
        environment: EnvironmentInfo,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            settings,
            extensions: dedupe(installed),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            environment,
        }
    }

    pub fn to_pretty_json(&self) -> CodesyncResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate blob content.
    pub fn from_json(content: &str) -> CodesyncResult<Self> {
        let payload: SyncPayload = serde_json::from_str(content)
            .map_err(|e| CodesyncError::PayloadParse(e.to_string()))?;
        payload.validate()?;
        Ok(payload)
    }

    /// Check invariants serde cannot express: non-blank, unique extension ids.
    pub fn validate(&self) -> CodesyncResult<()> {
        let mut seen = HashSet::new();
        for ext in &self.extensions {
            let id = ext.normalized_id();
            if id.is_empty() {
                return Err(CodesyncError::PayloadParse(
                    "extension entry with an empty id".to_string(),
                ));
            }
            if !seen.insert(id) {
                return Err(CodesyncError::PayloadParse(format!(
                    "extension {} listed more than once",
                    ext.id
                )));
            }
        }
        Ok(())
    }
}
