use news_api::{app, apply_migrations, ensure_database_exists, seed, store, AppState, SeedData, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("news_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = store::connect(&config).await?;
    apply_migrations(&pool).await?;

    if let Some(dir) = &config.seed_path {
        let data = SeedData::load(dir).await?;
        seed::run(&pool, &data).await?;
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("news api listening on http://{}", listener.local_addr()?);
    let state = AppState::new(pool.clone(), config);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
