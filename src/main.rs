//! Course checkout server binary.
//!
//! Startup sequence: load and validate configuration, initialize
//! tracing, connect to PostgreSQL, construct the PayPal gateway and
//! postgres adapters, then serve the axum router until shutdown.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use course_checkout::adapters::http::transactions::{transactions_router, TransactionsAppState};
use course_checkout::adapters::paypal::{PaypalConfig, PaypalGateway, LIVE_API_BASE};
use course_checkout::adapters::postgres::{
    PostgresCourseRepository, PostgresEnrollmentRepository, PostgresTransactionReader,
};
use course_checkout::config::AppConfig;
use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        environment = ?config.server.environment,
        paypal_environment = ?config.payment.environment,
        "Starting course-checkout server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let mut paypal_config = PaypalConfig::new(
        config.payment.paypal_client_id.clone(),
        config.payment.paypal_client_secret.expose_secret().clone(),
    )
    .with_currency(config.payment.currency.clone());
    if config.payment.is_live() {
        paypal_config = paypal_config.with_base_url(LIVE_API_BASE);
    }

    let state = TransactionsAppState {
        payment_gateway: Arc::new(PaypalGateway::new(paypal_config)),
        course_repository: Arc::new(PostgresCourseRepository::new(pool.clone())),
        enrollment_repository: Arc::new(PostgresEnrollmentRepository::new(pool.clone())),
        transaction_reader: Arc::new(PostgresTransactionReader::new(pool)),
    };

    let app = transactions_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the configured log filter.
///
/// Production emits JSON lines; development keeps the human format.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Build the CORS layer from configured origins.
///
/// With no origins configured, any origin is allowed (development).
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
