// src/main.rs

use std::sync::Arc;

use anyhow::Context;
use log::{error, info};

use fyyur::application::state::AppState;
use fyyur::config::AppConfig;
use fyyur::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use fyyur::http::router;
use fyyur::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION & LOGGING
    let config = AppConfig::load().context("loading configuration")?;
    init_logging(&config.log_settings()).context("starting logger")?;

    // 2. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config.database_path, config.pool_size)
            .context("opening database")?,
    );

    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("initializing schema")?;
        verify_database_integrity(&conn).context("checking database integrity")?;
        let stats = get_database_stats(&conn)?;
        info!(
            "event=database_ready path={} size_bytes={} venues={} artists={} shows={}",
            config.database_path.display(),
            stats.size_bytes,
            stats.venue_count,
            stats.artist_count,
            stats.show_count
        );
    }

    // 3. APPLICATION STATE
    let state = Arc::new(AppState::new(pool, config.homepage_limit));

    // 4. HTTP
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("event=server_start address={} debug={}", addr, config.debug);

    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving requests")?;

    // last clone goes here, closing the pool
    drop(state);
    info!("event=server_stop status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal status=error error={}", err);
    }
}
