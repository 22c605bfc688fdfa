use std::net::SocketAddr;
use std::sync::Arc;

use avolve_api::config::ServerConfig;
use avolve_api::router::build_app_router;
use avolve_api::state::AppState;
use avolve_db::{PlatformConfig, RestClient};
use avolve_mail::{EmailConfig, Mailer, SmtpMailer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "avolve_api=debug,avolve_db=debug,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Platform ---
    let platform_config = PlatformConfig::from_env();
    tracing::info!(url = %platform_config.url, "Loaded platform configuration");
    let platform = Arc::new(
        RestClient::new(platform_config).expect("Failed to build platform HTTP client"),
    );

    match avolve_db::health_check(platform.as_ref()).await {
        Ok(()) => tracing::info!("Platform health check passed"),
        // The platform may come up after us; /health keeps reporting it.
        Err(e) => tracing::warn!(error = %e, "Platform health check failed"),
    }

    // --- Email ---
    let mailer: Option<Arc<dyn Mailer>> = match EmailConfig::from_env() {
        Some(email_config) => {
            let mailer = SmtpMailer::new(&email_config).expect("Invalid email configuration");
            tracing::info!(host = %email_config.smtp_host, "Email delivery enabled");
            Some(Arc::new(mailer))
        }
        None => {
            tracing::warn!("EMAIL_API_KEY not set, email routes will fail");
            None
        }
    };

    // --- App state + router ---
    let state = AppState::new(platform, config.clone(), mailer);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
