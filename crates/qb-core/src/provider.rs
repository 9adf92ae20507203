//! Seams towards the services the backend forwards to.
//!
//! `authorization` is the caller's `Authorization` header, passed through
//! unchanged so the metadata service applies the user's permissions.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::QbResult;
use crate::model::TypeEntity;

/// Knows where the authentication service lives.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Endpoint of the authentication service, if one is configured upstream.
    async fn auth_endpoint(&self) -> QbResult<Option<String>>;
}

/// Lists the spaces visible to the caller.
#[async_trait]
pub trait SpaceProvider: Send + Sync {
    async fn spaces(&self, authorization: Option<&str>) -> QbResult<Value>;
}

/// Looks up type schemas.
#[async_trait]
pub trait TypeProvider: Send + Sync {
    /// All types, normalized and merged across spaces.
    async fn types(&self, authorization: Option<&str>) -> QbResult<Vec<TypeEntity>>;

    /// Raw schema records of the named types.
    async fn types_by_name(&self, authorization: Option<&str>, names: &[String]) -> QbResult<Value>;
}
