//! GitHub gist API client implementation

use crate::core::{CodesyncError, CodesyncResult};
use crate::di::traits::RemoteStore;
use crate::github::types::{
    CreateGistRequest, Gist, GistFileContent, UpdateGistRequest,
};
use crate::sync::{RemoteHandle, SyncPayload};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, RequestBuilder, Response, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Name of the single file inside the sync gist
pub const GIST_FILE_NAME: &str = "codesync-settings.json";

const GIST_DESCRIPTION: &str = "codesync: editor settings and extensions";

/// GitHub gist API client
pub struct GistClient {
    http_client: HttpClient,
    api_url: String,
    token: Option<String>,
}

impl GistClient {
    /// Create a new gist client
    ///
    /// A missing token is only reported when a request is made, so commands
    /// that never touch the network can still build a client.
    pub fn new(api_url: &str, token: Option<String>) -> CodesyncResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("codesync-settings-sync"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CodesyncError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn gist_url(&self, handle: &RemoteHandle) -> String {
        format!("{}/gists/{}", self.api_url, handle)
    }

    fn authorized(&self, builder: RequestBuilder) -> CodesyncResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or_else(|| {
            CodesyncError::RemoteAuth(
                "no GitHub token configured; run `codesync configure`".to_string(),
            )
        })?;
        Ok(builder.bearer_auth(token))
    }

    /// Send an authorized request and map HTTP failures onto the error taxonomy
    async fn send(&self, builder: RequestBuilder, what: &str) -> CodesyncResult<Response> {
        let response = self
            .authorized(builder)?
            .send()
            .await
            .map_err(|e| CodesyncError::RemoteTransport(format!("{} failed: {}", what, e)))?;

        let status = response.status();
        debug!(%status, "{}", what);

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(CodesyncError::RemoteAuth(
                format!("GitHub rejected the token during {} (HTTP {})", what, status),
            )),
            StatusCode::NOT_FOUND => Err(CodesyncError::RemoteNotFound(format!(
                "{} returned HTTP 404",
                what
            ))),
            _ => Err(CodesyncError::RemoteTransport(format!(
                "{}: GitHub API error: HTTP {}",
                what, status
            ))),
        }
    }

    async fn read_gist(response: Response) -> CodesyncResult<Gist> {
        response.json().await.map_err(|e| {
            CodesyncError::RemoteTransport(format!("Failed to parse GitHub API response: {}", e))
        })
    }

    fn files_for(payload: &SyncPayload) -> CodesyncResult<HashMap<String, GistFileContent>> {
        let mut files = HashMap::new();
        files.insert(
            GIST_FILE_NAME.to_string(),
            GistFileContent {
                content: payload.to_pretty_json()?,
            },
        );
        Ok(files)
    }

    /// Create a new private gist holding `payload`
    pub async fn create_gist(&self, payload: &SyncPayload) -> CodesyncResult<RemoteHandle> {
        let body = CreateGistRequest {
            description: GIST_DESCRIPTION.to_string(),
            public: false,
            files: Self::files_for(payload)?,
        };
        let url = format!("{}/gists", self.api_url);
        let response = self
            .send(self.http_client.post(&url).json(&body), "creating gist")
            .await?;

        let gist = Self::read_gist(response).await?;
        info!(gist_id = %gist.id, "created gist");
        Ok(RemoteHandle::new(gist.id))
    }

    /// Fetch the sync payload stored in a gist
    pub async fn fetch_gist(&self, handle: &RemoteHandle) -> CodesyncResult<SyncPayload> {
        let response = self
            .send(self.http_client.get(self.gist_url(handle)), "fetching gist")
            .await?;
        let gist = Self::read_gist(response).await?;

        let file = gist.files.get(GIST_FILE_NAME).ok_or_else(|| {
            CodesyncError::PayloadParse(format!(
                "gist {} has no {} file",
                handle, GIST_FILE_NAME
            ))
        })?;

        let content = match (&file.content, file.truncated, &file.raw_url) {
            (Some(content), false, _) => content.clone(),
            (_, _, Some(raw_url)) => {
                debug!(%raw_url, "gist content truncated, downloading raw file");
                self.send(self.http_client.get(raw_url), "downloading gist file")
                    .await?
                    .text()
                    .await
                    .map_err(|e| {
                        CodesyncError::RemoteTransport(format!("Failed to read gist file: {}", e))
                    })?
            }
            _ => {
                return Err(CodesyncError::PayloadParse(format!(
                    "gist {} file {} has no content",
                    handle, GIST_FILE_NAME
                )))
            }
        };

        SyncPayload::from_json(&content)
    }

    /// Replace the sync payload stored in a gist
    pub async fn update_gist(
        &self,
        handle: &RemoteHandle,
        payload: &SyncPayload,
    ) -> CodesyncResult<()> {
        let body = UpdateGistRequest {
            files: Self::files_for(payload)?,
        };
        self.send(
            self.http_client.patch(self.gist_url(handle)).json(&body),
            "updating gist",
        )
        .await?;

        info!(gist_id = %handle, "updated gist");
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for GistClient {
    async fn create(&self, payload: &SyncPayload) -> CodesyncResult<RemoteHandle> {
        self.create_gist(payload).await
    }

    async fn fetch(&self, handle: &RemoteHandle) -> CodesyncResult<SyncPayload> {
        self.fetch_gist(handle).await
    }

    async fn update(&self, handle: &RemoteHandle, payload: &SyncPayload) -> CodesyncResult<()> {
        self.update_gist(handle, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EditorVariant, Platform};
    use crate::local::{EnvironmentInfo, Settings};
    use crate::package::Extension;
    use chrono::Utc;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> SyncPayload {
        let mut settings = Settings::new();
        settings.insert("editor.fontSize".to_string(), json!(13));
        SyncPayload::build(
            settings,
            vec![Extension::new("pub.ext", "1.0.0")],
            EnvironmentInfo::detect(Platform::Linux, EditorVariant::Code),
            Utc::now(),
        )
    }

    fn client(server: &MockServer) -> GistClient {
        GistClient::new(&server.uri(), Some("test-token".to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_create_gist() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/gists"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(json!({ "public": false })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "aa5a315d61ae9438b18d",
                "files": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let handle = client(&server).create(&payload()).await.unwrap();
        assert_eq!(handle.as_str(), "aa5a315d61ae9438b18d");
    }

    #[tokio::test]
    async fn test_fetch_gist() {
        let server = MockServer::start().await;
        let expected = payload();

        Mock::given(method("GET"))
            .and(path("/gists/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc",
                "files": {
                    GIST_FILE_NAME: {
                        "content": expected.to_pretty_json().unwrap(),
                        "truncated": false
                    }
                }
            })))
            .mount(&server)
            .await;

        let fetched = client(&server)
            .fetch(&RemoteHandle::new("abc"))
            .await
            .unwrap();
        assert_eq!(fetched, expected);
    }

    #[tokio::test]
    async fn test_fetch_truncated_uses_raw_url() {
        let server = MockServer::start().await;
        let expected = payload();

        Mock::given(method("GET"))
            .and(path("/gists/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc",
                "files": {
                    GIST_FILE_NAME: {
                        "content": "{\"settings\":",
                        "truncated": true,
                        "raw_url": format!("{}/raw/abc/{}", server.uri(), GIST_FILE_NAME)
                    }
                }
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/raw/abc/{}", GIST_FILE_NAME)))
            .respond_with(ResponseTemplate::new(200).set_body_string(expected.to_pretty_json().unwrap()))
            .expect(1)
            .mount(&server)
            .await;

        let fetched = client(&server)
            .fetch(&RemoteHandle::new("abc"))
            .await
            .unwrap();
        assert_eq!(fetched, expected);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gists/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch(&RemoteHandle::new("gone"))
            .await
            .unwrap_err();
        assert!(matches!(err, CodesyncError::RemoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gists/other"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "other",
                "files": { "notes.md": { "content": "# hi" } }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch(&RemoteHandle::new("other"))
            .await
            .unwrap_err();
        assert!(matches!(err, CodesyncError::PayloadParse(_)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_payload_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gists/junk"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "junk",
                "files": { GIST_FILE_NAME: { "content": "{\"hello\": 1}" } }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .fetch(&RemoteHandle::new("junk"))
            .await
            .unwrap_err();
        assert!(matches!(err, CodesyncError::PayloadParse(_)));
    }

    #[tokio::test]
    async fn test_update_gist() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/gists/abc"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc",
                "files": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .update(&RemoteHandle::new("abc"), &payload())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_is_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/gists/abc"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server)
            .update(&RemoteHandle::new("abc"), &payload())
            .await
            .unwrap_err();
        assert!(matches!(err, CodesyncError::RemoteAuth(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/gists"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client(&server).create(&payload()).await.unwrap_err();
        assert!(matches!(err, CodesyncError::RemoteTransport(_)));
    }

    #[tokio::test]
    async fn test_missing_token_fails_without_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = GistClient::new(&server.uri(), None).unwrap();
        let err = client.create(&payload()).await.unwrap_err();
        assert!(matches!(err, CodesyncError::RemoteAuth(_)));
    }
}
