use avolve_core::csrf::{DEFAULT_MAX_OUTSTANDING, DEFAULT_TOKEN_TTL_SECS};

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Everything except the secrets has a default suitable for local
/// development. Platform connection settings live in
/// [`avolve_db::PlatformConfig`] and mail settings in
/// [`avolve_mail::EmailConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public site URL used in email links (default: `http://localhost:3000`).
    pub site_url: String,
    /// Lifetime of issued CSRF tokens in seconds (default: `3600`).
    pub csrf_ttl_secs: i64,
    /// Most CSRF tokens kept at once; the oldest is evicted beyond it
    /// (default: `10000`).
    pub csrf_max_outstanding: usize,
    /// Shared secret the scheduler presents to cron endpoints.
    pub cron_secret: String,
    /// Access-token verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SITE_URL`             | `http://localhost:3000`    |
    /// | `CSRF_TOKEN_TTL_SECS`  | `3600`                     |
    /// | `CSRF_MAX_OUTSTANDING` | `10000`                    |
    /// | `CRON_SECRET`          | **required**               |
    ///
    /// # Panics
    ///
    /// Panics on unparsable numbers or a missing `CRON_SECRET`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let csrf_ttl_secs: i64 = std::env::var("CSRF_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse()
            .expect("CSRF_TOKEN_TTL_SECS must be a valid i64");

        let csrf_max_outstanding: usize = std::env::var("CSRF_MAX_OUTSTANDING")
            .unwrap_or_else(|_| DEFAULT_MAX_OUTSTANDING.to_string())
            .parse()
            .expect("CSRF_MAX_OUTSTANDING must be a valid usize");
        assert!(csrf_max_outstanding > 0, "CSRF_MAX_OUTSTANDING must be positive");

        let cron_secret =
            std::env::var("CRON_SECRET").expect("CRON_SECRET must be set in the environment");
        assert!(!cron_secret.is_empty(), "CRON_SECRET must not be empty");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            site_url,
            csrf_ttl_secs,
            csrf_max_outstanding,
            cron_secret,
            jwt,
        }
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.site_url.starts_with("https://")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
