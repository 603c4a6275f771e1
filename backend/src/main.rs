//! Service entry point: config, logging, pool, router, serve.

use anyhow::Result;
use shiplog_backend::config::AppConfig;
use shiplog_backend::state::AppState;
use shiplog_backend::{config, db, routes};
use tokio::signal;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::load()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %config::env_name(),
        "shiplog backend starting"
    );

    if AppConfig::is_production() {
        guard_production_config(&config)?;
    }

    let pool = db::connect(&config.database).await?;

    // Production schema changes ship through a separate migration job
    if !AppConfig::is_production() {
        db::migrate(&pool).await?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(pool, config);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "shiplog_backend=info,tower_http=info".into()
        } else {
            "shiplog_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let registry = tracing_subscriber::registry().with(filter);

    // JSON output for log aggregation in production, pretty locally
    if AppConfig::is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Refuse to boot against a secret that only belongs on a laptop.
fn guard_production_config(config: &AppConfig) -> Result<()> {
    if config.jwt.secret.len() < 32 || config.jwt.secret.contains("development") {
        anyhow::bail!("jwt.secret must be at least 32 characters and not the development default");
    }
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c().await.expect("ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("ctrl-c received, draining"),
        _ = terminate => info!("SIGTERM received, draining"),
    }
}
