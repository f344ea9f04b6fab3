use std::net::SocketAddr;
use std::sync::Arc;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "catalog_api=debug,catalog_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = prepare_database(&database_url, config.db_max_connections).await;

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let app = build_app_router(AppState {
        pool: pool.clone(),
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Catalog API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // In-flight requests have drained; release connections last.
    pool.close().await;
    tracing::info!("Catalog API stopped");
}

/// `RUST_LOG` wins over the built-in filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify, and migrate the catalog database. Any failure aborts
/// startup before the listener is bound.
async fn prepare_database(database_url: &str, max_connections: u32) -> DbPool {
    let pool = catalog_db::create_pool(database_url, max_connections)
        .await
        .expect("Failed to connect to database");
    catalog_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    catalog_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let status = catalog_db::catalog_status(&pool)
        .await
        .expect("Catalog tables missing after migrations");
    tracing::info!(
        schema_version = ?status.schema_version,
        authors = status.authors,
        categories = status.categories,
        books = status.books,
        max_connections,
        "Catalog database ready",
    );
    pool
}

/// Resolve on SIGINT, or SIGTERM on Unix.
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

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining in-flight requests");
}
