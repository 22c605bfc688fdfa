//! `reqwest` implementation of [`PlatformClient`] against the platform's
//! PostgREST interface.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::client::{Caller, PlatformClient, PlatformError, TableQuery};

/// Default timeout for a single platform request.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// PlatformConfig
// ---------------------------------------------------------------------------

/// Connection settings for the backend platform.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public (anon) API key, sent with every user request.
    pub anon_key: String,
    /// Service-role key for trusted jobs. Bypasses row-level security.
    pub service_role_key: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl PlatformConfig {
    /// Load platform settings from environment variables.
    ///
    /// | Env Var                     | Required | Default |
    /// |-----------------------------|----------|---------|
    /// | `PLATFORM_URL`              | **yes**  | --      |
    /// | `PLATFORM_ANON_KEY`         | **yes**  | --      |
    /// | `PLATFORM_SERVICE_ROLE_KEY` | **yes**  | --      |
    /// | `PLATFORM_TIMEOUT_SECS`     | no       | `10`    |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or empty.
    pub fn from_env() -> Self {
        let required = |name: &str| {
            let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"));
            assert!(!value.is_empty(), "{name} must not be empty");
            value
        };

        let timeout_secs: u64 = std::env::var("PLATFORM_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("PLATFORM_TIMEOUT_SECS must be a valid u64");

        Self {
            url: required("PLATFORM_URL").trim_end_matches('/').to_string(),
            anon_key: required("PLATFORM_ANON_KEY"),
            service_role_key: required("PLATFORM_SERVICE_ROLE_KEY"),
            timeout_secs,
        }
    }
}

// ---------------------------------------------------------------------------
// RestClient
// ---------------------------------------------------------------------------

/// PostgREST error payload (`{ code, message, details, hint }`).
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Talks to the platform over HTTPS.
pub struct RestClient {
    http: reqwest::Client,
    config: PlatformConfig,
}

impl RestClient {
    pub fn new(config: PlatformConfig) -> Result<Self, PlatformError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.config.url)
    }

    /// Attach the `apikey` header and bearer token for `caller`.
    fn authorize(&self, request: RequestBuilder, caller: &Caller) -> RequestBuilder {
        match caller {
            Caller::User { access_token } => request
                .header("apikey", &self.config.anon_key)
                .bearer_auth(access_token),
            Caller::Service => request
                .header("apikey", &self.config.service_role_key)
                .bearer_auth(&self.config.service_role_key),
        }
    }

    /// Read a response body as JSON, turning non-2xx statuses into
    /// [`PlatformError::Remote`].
    async fn read_json(response: Response, context: &str) -> Result<Value, PlatformError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = remote_error(status.as_u16(), &bytes);
            tracing::warn!(context, status = status.as_u16(), error = %err, "Platform request rejected");
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| PlatformError::decode(context, e))
    }

    async fn read_rows(response: Response, context: &str) -> Result<Vec<Value>, PlatformError> {
        match Self::read_json(response, context).await? {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            other => Err(PlatformError::decode(
                context,
                format!("expected an array of rows, got {other}"),
            )),
        }
    }
}

/// Build a [`PlatformError::Remote`] from a raw error body.
fn remote_error(status: u16, body: &[u8]) -> PlatformError {
    match serde_json::from_slice::<RemoteErrorBody>(body) {
        Ok(RemoteErrorBody {
            code,
            message: Some(message),
        }) => PlatformError::Remote {
            status,
            code,
            message,
        },
        _ => PlatformError::Remote {
            status,
            code: None,
            message: String::from_utf8_lossy(body).trim().to_string(),
        },
    }
}

#[async_trait]
impl PlatformClient for RestClient {
    async fn rpc(
        &self,
        caller: &Caller,
        procedure: &str,
        params: Value,
    ) -> Result<Value, PlatformError> {
        tracing::debug!(procedure, "Invoking remote procedure");
        let request = self
            .http
            .post(self.rest_url(&format!("rpc/{procedure}")))
            .json(&params);
        let response = self.authorize(request, caller).send().await?;
        Self::read_json(response, procedure).await
    }

    async fn select(&self, caller: &Caller, query: &TableQuery) -> Result<Vec<Value>, PlatformError> {
        tracing::debug!(table = query.table, "Reading platform table");
        let request = self
            .http
            .get(self.rest_url(query.table))
            .query(&query.to_query_pairs());
        let response = self.authorize(request, caller).send().await?;
        Self::read_rows(response, query.table).await
    }

    async fn insert(
        &self,
        caller: &Caller,
        table: &str,
        row: Value,
        on_conflict: Option<&str>,
    ) -> Result<Vec<Value>, PlatformError> {
        tracing::debug!(table, upsert = on_conflict.is_some(), "Writing platform table");
        let mut request = self.http.post(self.rest_url(table)).json(&row);
        request = match on_conflict {
            Some(column) => request
                .query(&[("on_conflict", column)])
                .header("Prefer", "return=representation,resolution=merge-duplicates"),
            None => request.header("Prefer", "return=representation"),
        };
        let response = self.authorize(request, caller).send().await?;
        Self::read_rows(response, table).await
    }

    async fn ping(&self) -> Result<(), PlatformError> {
        let response = self
            .http
            .get(self.rest_url(""))
            .header("apikey", &self.config.anon_key)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(PlatformError::Remote {
                status: response.status().as_u16(),
                code: None,
                message: "Platform health probe failed".to_string(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
