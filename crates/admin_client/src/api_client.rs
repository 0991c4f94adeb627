//! API client for communicating with the fraud-review backend.

use crate::error::ClientError;
use admin_core::backend::AdminBackend;
use admin_core::model::{
    AuditLogPage, CreditConfig, CreditConfigPatch, Envelope, FraudFlag, FraudStatus,
    HealthReport, ResolveAction, ResolveRequest, ResolveResponse, User,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Backend URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Environment variable overriding the backend URL
pub const API_URL_ENV: &str = "WALLET_ADMIN_API_URL";

/// Default page size for audit log requests
pub const DEFAULT_AUDIT_LIMIT: u32 = 50;

/// API client for the fraud-review backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    /// Create a client from `WALLET_ADMIN_API_URL`, falling back to the default URL
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// Apply a timeout to every request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<T, ClientError> {
        tracing::debug!(%method, path, "Sending API request");
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%method, path, %status, "API request failed");
            return Err(ClientError::status(status, &body));
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path), Method::GET, path)
            .await
    }

    /// Fraud flags, optionally restricted to one status
    pub async fn get_fraud_flags(
        &self,
        status: Option<FraudStatus>,
    ) -> Result<Vec<FraudFlag>, ClientError> {
        let path = "/api/fraud/flags";
        let mut builder = self.request(Method::GET, path);
        if let Some(status) = status {
            builder = builder.query(&[("status", status.as_str())]);
        }
        let envelope: Envelope<Vec<FraudFlag>> = self.send(builder, Method::GET, path).await?;
        Ok(envelope.data)
    }

    /// Submit a decision for a fraud flag. Returns the whole response body.
    pub async fn resolve_flag(
        &self,
        entry_id: &str,
        action: ResolveAction,
    ) -> Result<ResolveResponse, ClientError> {
        let path = "/api/fraud/resolve";
        let builder = self
            .request(Method::POST, path)
            .json(&ResolveRequest { entry_id, action });
        self.send(builder, Method::POST, path).await
    }

    /// One page of audit logs, with pagination metadata
    pub async fn get_audit_logs(&self, limit: u32, offset: u32) -> Result<AuditLogPage, ClientError> {
        let path = "/api/audit/logs";
        let builder = self
            .request(Method::GET, path)
            .query(&[("limit", limit), ("offset", offset)]);
        self.send(builder, Method::GET, path).await
    }

    /// All user accounts
    pub async fn get_users(&self) -> Result<Vec<User>, ClientError> {
        let envelope: Envelope<Vec<User>> = self.get("/api/admin/users").await?;
        Ok(envelope.data)
    }

    /// Current credit configuration
    pub async fn get_config(&self) -> Result<CreditConfig, ClientError> {
        let envelope: Envelope<CreditConfig> = self.get("/api/admin/config").await?;
        Ok(envelope.data)
    }

    /// Apply a partial credit configuration update
    pub async fn update_config(
        &self,
        patch: &CreditConfigPatch,
    ) -> Result<CreditConfig, ClientError> {
        let path = "/api/admin/config";
        let builder = self.request(Method::PUT, path).json(patch);
        let envelope: Envelope<CreditConfig> = self.send(builder, Method::PUT, path).await?;
        Ok(envelope.data)
    }

    /// Health check
    pub async fn health_check(&self) -> Result<HealthReport, ClientError> {
        self.get("/health").await
    }
}

#[async_trait]
impl AdminBackend for ApiClient {
    type Error = ClientError;

    async fn fraud_flags(
        &self,
        status: Option<FraudStatus>,
    ) -> Result<Vec<FraudFlag>, ClientError> {
        self.get_fraud_flags(status).await
    }

    async fn resolve_flag(
        &self,
        entry_id: &str,
        action: ResolveAction,
    ) -> Result<ResolveResponse, ClientError> {
        ApiClient::resolve_flag(self, entry_id, action).await
    }

    async fn audit_logs(&self, limit: u32, offset: u32) -> Result<AuditLogPage, ClientError> {
        self.get_audit_logs(limit, offset).await
    }

    async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.get_users().await
    }

    async fn credit_config(&self) -> Result<CreditConfig, ClientError> {
        self.get_config().await
    }

    async fn update_credit_config(
        &self,
        patch: &CreditConfigPatch,
    ) -> Result<CreditConfig, ClientError> {
        self.update_config(patch).await
    }

    async fn health(&self) -> Result<HealthReport, ClientError> {
        self.health_check().await
    }
}
