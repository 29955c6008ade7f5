//! MeteorCloud HTTP server
//!
//! Loads configuration, wires adapters into the services, and serves the API.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{
    AccountService, WeatherService,
    ports::{GeocodingPort, PasswordHasherPort, UserStore, WeatherHistoryStore, WeatherPort},
};
use infrastructure::{
    AppConfig, Argon2PasswordHasher, GeocodingAdapter, LogFormat, SqliteUserStore,
    SqliteWeatherHistoryStore, WeatherAdapter, create_pool, init_logging,
};
use presentation_http::{AppState, build_app};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A broken config must not start the server with development defaults.
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(LogFormat::from_config(&config.server), &config.server.log_filter)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "MeteorCloud starting"
    );

    let issues = config.validate();
    for issue in &issues {
        warn!(key = issue.key, "{}", issue.message);
    }
    if config.is_fatal(&issues) {
        anyhow::bail!(
            "refusing to start in {} with {} configuration issue(s)",
            config.environment,
            issues.len()
        );
    }

    let pool = Arc::new(create_pool(&config.database).context("Failed to open database")?);
    info!(path = %config.database.path, "Database ready");

    let users: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(Arc::clone(&pool)));
    let history: Arc<dyn WeatherHistoryStore> =
        Arc::new(SqliteWeatherHistoryStore::new(Arc::clone(&pool)));
    let hasher: Arc<dyn PasswordHasherPort> = Arc::new(Argon2PasswordHasher::new());

    let geocoding: Arc<dyn GeocodingPort> = Arc::new(
        GeocodingAdapter::new(&config.geocoding.to_client_config())
            .context("Failed to initialize geocoding client")?,
    );
    let weather: Arc<dyn WeatherPort> = match config.weather.to_client_config() {
        Some(client_config) => Arc::new(
            WeatherAdapter::new(&client_config).context("Failed to initialize weather client")?,
        ),
        None => Arc::new(WeatherAdapter::unconfigured()),
    };

    let state = AppState::new(
        Arc::new(WeatherService::new(geocoding, weather).with_history(history)),
        Arc::new(AccountService::new(users, hasher)),
    );
    let app = build_app(state, &config.server);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Server listening");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM
///
/// Once a signal arrives, in-flight requests get `timeout` to finish before
/// the process exits regardless.
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }

    info!(?timeout, "Draining connections");
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("Connections still open after shutdown timeout, exiting");
        std::process::exit(1);
    });
}
