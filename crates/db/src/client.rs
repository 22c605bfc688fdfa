//! Platform client abstraction.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for calls into the backend platform.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The HTTP request failed before a response arrived (network, DNS,
    /// timeout, TLS).
    #[error("Platform request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-2xx status. `message` is the remote
    /// error text (e.g. an exception raised inside a database function).
    #[error("Platform returned HTTP {status}: {message}")]
    Remote {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The response body did not match the expected contract.
    #[error("Unexpected platform response for {context}: {message}")]
    Decode { context: String, message: String },
}

impl PlatformError {
    pub(crate) fn decode(context: impl Into<String>, err: impl fmt::Display) -> Self {
        PlatformError::Decode {
            context: context.into(),
            message: err.to_string(),
        }
    }
}

/// Deserialize a JSON value, tagging failures with `context`.
pub(crate) fn decode<T: DeserializeOwned>(context: &str, value: Value) -> Result<T, PlatformError> {
    serde_json::from_value(value).map_err(|e| PlatformError::decode(context, e))
}

/// Deserialize every row of a table read.
pub(crate) fn decode_rows<T: DeserializeOwned>(
    context: &str,
    rows: Vec<Value>,
) -> Result<Vec<T>, PlatformError> {
    rows.into_iter().map(|row| decode(context, row)).collect()
}

// ---------------------------------------------------------------------------
// Caller identity
// ---------------------------------------------------------------------------

/// On whose behalf a platform request is made.
///
/// User calls forward the caller's access token so row-level security is
/// evaluated against them. Service calls use the service-role key and bypass
/// row-level security; they are reserved for trusted jobs.
#[derive(Clone)]
pub enum Caller {
    User { access_token: String },
    Service,
}

impl Caller {
    pub fn user(access_token: impl Into<String>) -> Self {
        Caller::User {
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caller::User { .. } => f.write_str("Caller::User(<redacted>)"),
            Caller::Service => f.write_str("Caller::Service"),
        }
    }
}

// ---------------------------------------------------------------------------
// Table queries
// ---------------------------------------------------------------------------

/// A read against one platform table, expressed as PostgREST query
/// parameters (`select`, `<column>=eq.<value>`, `order`, `limit`).
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl TableQuery {
    /// Select all columns from `table`.
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Column list, including embedded relations such as `*,tokens(*)`.
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Equality filter on `column`.
    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{column}.{direction}"));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The value of an equality filter on `column`, if one was set.
    pub fn eq_value(&self, column: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(c, _)| c == column)
            .and_then(|(_, v)| v.strip_prefix("eq."))
    }

    /// Render as URL query pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        pairs.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Client trait
// ---------------------------------------------------------------------------

/// Transport to the backend platform.
///
/// Implementations are stateless: each method is one independent request
/// with no retry, caching or batching.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Invoke the database function `procedure` with named `params`.
    ///
    /// Functions returning `void` yield [`Value::Null`].
    async fn rpc(
        &self,
        caller: &Caller,
        procedure: &str,
        params: Value,
    ) -> Result<Value, PlatformError>;

    /// Read rows from a table.
    async fn select(&self, caller: &Caller, query: &TableQuery) -> Result<Vec<Value>, PlatformError>;

    /// Insert `row` into `table`, returning the stored rows.
    ///
    /// With `on_conflict` set, an existing row with the same value in that
    /// column is merged instead (upsert).
    async fn insert(
        &self,
        caller: &Caller,
        table: &str,
        row: Value,
        on_conflict: Option<&str>,
    ) -> Result<Vec<Value>, PlatformError>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), PlatformError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_render_postgrest_syntax() {
        let query = TableQuery::new("user_balances")
            .select("token_id,balance,tokens(symbol,name)")
            .eq("user_id", "abc")
            .order("created_at", false)
            .limit(5);

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("select".to_string(), "token_id,balance,tokens(symbol,name)".to_string()),
                ("user_id".to_string(), "eq.abc".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn default_select_is_star() {
        let pairs = TableQuery::new("profiles").to_query_pairs();
        assert_eq!(pairs, vec![("select".to_string(), "*".to_string())]);
    }

    #[test]
    fn eq_value_strips_operator() {
        let query = TableQuery::new("profiles").eq("id", 42);
        assert_eq!(query.eq_value("id"), Some("42"));
        assert_eq!(query.eq_value("username"), None);
    }

    #[test]
    fn caller_debug_redacts_token() {
        let caller = Caller::user("secret-jwt");
        assert!(!format!("{caller:?}").contains("secret-jwt"));
    }

    #[test]
    fn decode_error_carries_context() {
        let err = decode::<bool>("complete_weekly_checkin", serde_json::json!("yes")).unwrap_err();
        assert!(err.to_string().contains("complete_weekly_checkin"));
    }
}
