//! # mejora-client
//!
//! HTTP client for the improvement-plan REST API.
//!
//! Every call carries the session's bearer token when one is available and
//! treats any non-2xx status as a failure whose message comes from the
//! server's JSON body. Nothing here retries; each request is bounded by the
//! configured timeout.

mod error;
mod http;
mod payload;
mod query;

pub use error::ApiError;
pub use payload::{records_from_value, unwrap_data};
pub use query::QueryParams;

use async_trait::async_trait;
use mejora_config::ApiConfig;
use mejora_core::entities::{
    AuditLog, DashboardStats, Faculty, NewUser, Plan, User, UserProfile,
};
use mejora_core::enums::{Decision, ResourceKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::check_response;

// ── Types ──────────────────────────────────────────────────────────

/// Successful authentication: the credential plus the profile to cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// The seam views fetch through. Implemented by [`ApiClient`] and by fakes.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch one resource listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    async fn fetch(
        &self,
        kind: ResourceKind,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Value, ApiError>;
}

/// Issue several fetches concurrently and return every outcome, in the order
/// requested.
///
/// One failure neither cancels nor invalidates the others, so the caller may
/// get a mix of successes and failures.
pub async fn fetch_many<F: ResourceFetcher + ?Sized>(
    fetcher: &F,
    kinds: &[ResourceKind],
    token: Option<&str>,
) -> Vec<(ResourceKind, Result<Value, ApiError>)> {
    let params = QueryParams::new();
    let requests = kinds.iter().map(|kind| {
        let params = &params;
        async move { (*kind, fetcher.fetch(*kind, params, token).await) }
    });
    futures::future::join_all(requests).await
}

// ── Client ─────────────────────────────────────────────────────────

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.trimmed_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, params: &QueryParams) -> String {
        format!("{}{path}{}", self.base_url, params.to_query_string())
    }

    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json(
        &self,
        path: &str,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path, params);
        tracing::debug!(%url, "GET");
        let resp = self
            .authorized(self.http.get(&url), token)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path, &QueryParams::new());
        tracing::debug!(%url, "POST");
        let resp = self
            .authorized(self.http.post(&url), token)
            .json(body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Authenticate with institutional credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] for rejected credentials and
    /// [`ApiError::Parse`] if the response lacks a token or profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let value = unwrap_data(self.post_json("/auth/login", &body, None).await?);
        serde_json::from_value(value).map_err(|e| ApiError::Parse(format!("login response: {e}")))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn list_plans(
        &self,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Vec<Plan>, ApiError> {
        let value = self.fetch(ResourceKind::Plans, params, token).await?;
        Ok(records_from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn list_users(
        &self,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Vec<User>, ApiError> {
        let value = self.fetch(ResourceKind::Users, params, token).await?;
        Ok(records_from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn list_faculties(
        &self,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Vec<Faculty>, ApiError> {
        let value = self.fetch(ResourceKind::Faculties, params, token).await?;
        Ok(records_from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn list_audit_logs(
        &self,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Vec<AuditLog>, ApiError> {
        let value = self.fetch(ResourceKind::AuditLogs, params, token).await?;
        Ok(records_from_value(value))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if the aggregate payload has the wrong shape.
    pub async fn dashboard_stats(&self, token: Option<&str>) -> Result<DashboardStats, ApiError> {
        let value = self
            .fetch(ResourceKind::DashboardStats, &QueryParams::new(), token)
            .await?;
        serde_json::from_value(unwrap_data(value))
            .map_err(|e| ApiError::Parse(format!("dashboard stats: {e}")))
    }

    /// Create a user account. Callers validate the form first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejection, or a malformed reply.
    pub async fn create_user(&self, user: &NewUser, token: Option<&str>) -> Result<User, ApiError> {
        let value = unwrap_data(self.post_json(ResourceKind::Users.path(), user, token).await?);
        serde_json::from_value(value).map_err(|e| ApiError::Parse(format!("created user: {e}")))
    }

    /// Approve or reject a submitted plan.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, rejection, or a malformed reply.
    pub async fn decide_plan(
        &self,
        plan_id: i64,
        decision: Decision,
        comment: Option<&str>,
        token: Option<&str>,
    ) -> Result<Plan, ApiError> {
        let path = format!("{}/{plan_id}/{}", ResourceKind::Plans.path(), decision.as_str());
        let body = serde_json::json!({ "comment": comment });
        let value = unwrap_data(self.post_json(&path, &body, token).await?);
        serde_json::from_value(value).map_err(|e| ApiError::Parse(format!("decided plan: {e}")))
    }
}

#[async_trait]
impl ResourceFetcher for ApiClient {
    async fn fetch(
        &self,
        kind: ResourceKind,
        params: &QueryParams,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.get_json(kind.path(), params, token).await
    }
}
