use std::net::SocketAddr;
use std::sync::Arc;

use interview_scheduler::{
    app,
    config::{get_config, init_config, Environment},
    database::{
        pool::{create_pool, run_migrations},
        PgInterviewRepository,
    },
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.environment);

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let app_state = AppState::new(Arc::new(PgInterviewRepository::new(pool)));
    let router = app(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!(environment = ?config.environment, "Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if environment == Environment::Production {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
