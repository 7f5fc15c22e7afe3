//! Athenaeum record service
//!
//! Run with: cargo run

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use athenaeum::config::Config;
use athenaeum::router::build_router;
use athenaeum::state::AppState;
use athenaeum::storage::open_pool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "athenaeum=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    // Keep the appender guard alive for the whole process when logging
    // to a file.
    let _file_guard = if let Some(ref path) = config.log_file {
        let dir = std::path::Path::new(path)
            .parent()
            .unwrap_or(std::path::Path::new("."));
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("athenaeum.log");
        let file_appender = tracing_appender::rolling::daily(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
        Some(guard)
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
        None
    };

    info!("Opening database at {:?}", config.database_path);
    let pool = open_pool(&config.database_path)?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Record service listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("Received ctrl-c, shutting down");
}
