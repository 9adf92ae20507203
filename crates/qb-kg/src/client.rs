//! Knowledge graph core HTTP client.
//!
//! Every call forwards the caller's `Authorization` header so that the
//! core API answers with the permissions of the logged-in user.

use std::time::Duration;

use async_trait::async_trait;
use qb_core::types::normalize_types;
use qb_core::{decode, AuthProvider, Envelope, QbError, QbResult, SpaceProvider, TypeEntity, TypeProvider};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Default knowledge graph core URL.
pub const DEFAULT_KG_URL: &str = "http://localhost:8000";

/// Default API version prefix.
pub const DEFAULT_API_VERSION: &str = "v3";

/// Stage the query builder reads types from.
const STAGE: &str = "IN_PROGRESS";

/// Configuration for connecting to the knowledge graph core.
#[derive(Debug, Clone, Deserialize)]
pub struct KgConfig {
    pub base_url: String,
    pub api_version: String,
}

impl Default for KgConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_KG_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct AuthInfo {
    endpoint: Option<String>,
}

/// Client for the knowledge graph core API.
#[derive(Clone)]
pub struct KgClient {
    api_url: String,
    client: reqwest::Client,
}

impl KgClient {
    /// Create a new client from config.
    pub fn new(config: &KgConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        let api_url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        );
        debug!(api_url = %api_url, "KgClient initialized");

        Self { api_url, client }
    }

    /// Create a client with default settings (localhost:8000, v3).
    pub fn default_client() -> Self {
        Self::new(&KgConfig::default())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        authorization: Option<&str>,
    ) -> QbResult<Value> {
        let mut request = self.client.get(self.url(path)).query(query);
        if let Some(auth) = authorization {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| QbError::upstream(format!("GET {}: {}", path, e)))?;

        read_json(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        authorization: Option<&str>,
        body: &B,
    ) -> QbResult<Value> {
        let mut request = self.client.post(self.url(path)).query(query).json(body);
        if let Some(auth) = authorization {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| QbError::upstream(format!("POST {}: {}", path, e)))?;

        read_json(path, response).await
    }
}

async fn read_json(path: &str, response: reqwest::Response) -> QbResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(path, status = %status, "Knowledge graph core returned an error");
        return Err(QbError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| QbError::upstream(format!("Failed to parse response of {}: {}", path, e)))
}

/// Pull the authentication endpoint out of a `users/authorization` body.
fn auth_endpoint_from(body: Value) -> QbResult<Option<String>> {
    let info: Envelope<AuthInfo> = serde_json::from_value(body)?;
    Ok(info.data.endpoint)
}

#[async_trait]
impl AuthProvider for KgClient {
    async fn auth_endpoint(&self) -> QbResult<Option<String>> {
        let body = self.get_json("users/authorization", &[], None).await?;
        auth_endpoint_from(body)
    }
}

#[async_trait]
impl SpaceProvider for KgClient {
    async fn spaces(&self, authorization: Option<&str>) -> QbResult<Value> {
        self.get_json("spaces", &[("permissions", "true")], authorization)
            .await
    }
}

#[async_trait]
impl TypeProvider for KgClient {
    async fn types(&self, authorization: Option<&str>) -> QbResult<Vec<TypeEntity>> {
        let body = self
            .get_json(
                "types",
                &[
                    ("stage", STAGE),
                    ("withProperties", "true"),
                    ("withIncomingLinks", "true"),
                    ("withCounts", "false"),
                ],
                authorization,
            )
            .await?;

        let records = decode::type_records(&body)?;
        let types = normalize_types(records);
        debug!(records = records.len(), types = types.len(), "Normalized types");
        Ok(types)
    }

    async fn types_by_name(&self, authorization: Option<&str>, names: &[String]) -> QbResult<Value> {
        self.post_json(
            "typesByName",
            &[
                ("stage", STAGE),
                ("withProperties", "true"),
                ("withIncomingLinks", "true"),
            ],
            authorization,
            names,
        )
        .await
    }
}
