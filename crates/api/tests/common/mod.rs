#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use avolve_api::auth::jwt::{generate_access_token, JwtConfig};
use avolve_api::config::ServerConfig;
use avolve_api::router::build_app_router;
use avolve_api::state::AppState;
use avolve_core::types::UserId;
use avolve_db::{Caller, PlatformClient, PlatformError, TableQuery};
use avolve_mail::{EmailMessage, MailError, Mailer};
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";
pub const CRON_SECRET: &str = "test-cron-secret";
pub const TEST_ORIGIN: &str = "http://localhost:3000";

// ---------------------------------------------------------------------------
// Fake platform
// ---------------------------------------------------------------------------

/// A platform request as the fake received it.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    Rpc {
        caller: Caller,
        procedure: String,
        params: Value,
    },
    Select {
        caller: Caller,
        table: String,
        pairs: Vec<(String, String)>,
    },
    Insert {
        caller: Caller,
        table: String,
        row: Value,
        on_conflict: Option<String>,
    },
}

/// Canned answer for a remote procedure.
#[derive(Debug, Clone)]
pub enum Reply {
    Ok(Value),
    Remote { status: u16, message: String },
    /// A payload the client cannot decode.
    Garbage,
}

/// Columns the fake honours in equality filters.
const FILTER_COLUMNS: &[&str] = &["id", "user_id", "created_by", "superpuzzle_id"];

/// In-memory [`PlatformClient`] that records every call.
///
/// Procedures answer with the configured [`Reply`] (`null` by default).
/// Tables are plain row lists; inserts append, upserts replace rows with the
/// same conflict-column value.
#[derive(Default)]
pub struct FakePlatform {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<HashMap<String, Reply>>,
    tables: Mutex<HashMap<String, Vec<Value>>>,
    unhealthy: Mutex<bool>,
}

impl FakePlatform {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, procedure: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .insert(procedure.to_string(), reply);
    }

    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_unhealthy(&self) {
        *self.unhealthy.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Parameters of every call to `procedure`, in order.
    pub fn rpc_params(&self, procedure: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Rpc {
                    procedure: p,
                    params,
                    ..
                } if p == procedure => Some(params),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn matches_filters(row: &Value, query: &TableQuery) -> bool {
    FILTER_COLUMNS.iter().all(|column| match query.eq_value(column) {
        Some(expected) => row[*column].as_str() == Some(expected),
        None => true,
    })
}

#[async_trait]
impl PlatformClient for FakePlatform {
    async fn rpc(
        &self,
        caller: &Caller,
        procedure: &str,
        params: Value,
    ) -> Result<Value, PlatformError> {
        self.record(RecordedCall::Rpc {
            caller: caller.clone(),
            procedure: procedure.to_string(),
            params,
        });

        let reply = self.replies.lock().unwrap().get(procedure).cloned();
        match reply.unwrap_or(Reply::Ok(Value::Null)) {
            Reply::Ok(value) => Ok(value),
            Reply::Remote { status, message } => Err(PlatformError::Remote {
                status,
                code: Some("P0001".to_string()),
                message,
            }),
            Reply::Garbage => Ok(serde_json::json!({ "unexpected": [1, 2, 3] })),
        }
    }

    async fn select(&self, caller: &Caller, query: &TableQuery) -> Result<Vec<Value>, PlatformError> {
        self.record(RecordedCall::Select {
            caller: caller.clone(),
            table: query.table.to_string(),
            pairs: query.to_query_pairs(),
        });

        Ok(self
            .rows(query.table)
            .into_iter()
            .filter(|row| matches_filters(row, query))
            .collect())
    }

    async fn insert(
        &self,
        caller: &Caller,
        table: &str,
        row: Value,
        on_conflict: Option<&str>,
    ) -> Result<Vec<Value>, PlatformError> {
        self.record(RecordedCall::Insert {
            caller: caller.clone(),
            table: table.to_string(),
            row: row.clone(),
            on_conflict: on_conflict.map(str::to_string),
        });

        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        if let Some(column) = on_conflict {
            rows.retain(|existing| existing[column] != row[column]);
        }
        rows.push(row.clone());
        Ok(vec![row])
    }

    async fn ping(&self) -> Result<(), PlatformError> {
        if *self.unhealthy.lock().unwrap() {
            Err(PlatformError::Remote {
                status: 503,
                code: None,
                message: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Fake mailer
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeMailer {
    sent: Mutex<Vec<EmailMessage>>,
}

impl FakeMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        site_url: "https://avolve.test".to_string(),
        csrf_ttl_secs: 3600,
        csrf_max_outstanding: 1_000,
        cron_secret: CRON_SECRET.to_string(),
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            audience: "authenticated".to_string(),
        },
    }
}

/// Build the full application router over `platform`, without email.
pub fn build_test_app(platform: Arc<FakePlatform>) -> Router {
    build_test_app_with_mailer(platform, None)
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app_with_mailer(
    platform: Arc<FakePlatform>,
    mailer: Option<Arc<FakeMailer>>,
) -> Router {
    let mailer = mailer.map(|m| m as Arc<dyn Mailer>);
    let state = AppState::new(platform, test_config(), mailer);
    build_app_router(state, &test_config())
}

/// Build the router over a caller-adjusted config, without email.
pub fn build_test_app_with_config(platform: Arc<FakePlatform>, config: ServerConfig) -> Router {
    let state = AppState::new(platform, config.clone(), None);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// A valid access token for `user_id`.
pub fn user_token(user_id: UserId) -> String {
    generate_access_token(user_id, Some("ada@example.com"), &test_config().jwt, 900).unwrap()
}

/// A fresh user id and a valid access token for it.
pub fn new_user() -> (UserId, String) {
    let id = UserId::new_v4();
    (id, user_token(id))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a JSON body, with a bearer token when `token` is set.
pub async fn post_json(app: Router, uri: &str, body: Value, token: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
