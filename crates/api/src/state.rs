use std::sync::Arc;

use avolve_db::Platform;
use avolve_mail::Mailer;

use crate::config::ServerConfig;
use crate::csrf::CsrfStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Client for the backend platform.
    pub platform: Platform,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outstanding CSRF tokens.
    pub csrf: Arc<CsrfStore>,
    /// Outbound email, `None` when `EMAIL_API_KEY` is unset.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(
        platform: Platform,
        config: ServerConfig,
        mailer: Option<Arc<dyn Mailer>>,
    ) -> Self {
        let csrf = Arc::new(CsrfStore::new(
            config.csrf_ttl_secs,
            config.csrf_max_outstanding,
        ));
        Self {
            platform,
            config: Arc::new(config),
            csrf,
            mailer,
        }
    }
}
