use std::sync::Arc;

use clap::Parser;
use item_server::{
    config::{ConfigError, Profile, Settings},
    db,
    gateway::ItemGateway,
    routes,
    store::{MemoryItemStore, PgItemStore},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug, Clone)]
#[command(name = "item-server")]
#[command(about = "Item CRUD server")]
struct Args {
    /// Deployment profile: dev, release or prod
    #[arg(long, env = "APP_ENV", default_value = "dev")]
    profile: String,

    /// Enable development mode (relaxed config requirements)
    #[arg(long)]
    dev_mode: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if args.dev_mode {
        tracing::warn!("DEV MODE ENABLED");
    }

    let profile: Profile = args.profile.parse()?;
    let settings = Settings::load(profile)?;
    tracing::info!("Using {} profile", settings.profile);

    let items = match settings.database_url.as_deref() {
        Some(url) => ItemGateway::new(PgItemStore::new(connect(url)?)),
        None if args.dev_mode => {
            tracing::warn!("DATABASE_URL not set, items are kept in memory");
            ItemGateway::new(MemoryItemStore::default())
        }
        None => return Err(ConfigError::MissingVar("DATABASE_URL").into()),
    };

    let app_state = Arc::new(AppState { items });
    let app = routes::router(app_state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(settings.addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Create the database pool and run migrations.
fn connect(database_url: &str) -> anyhow::Result<db::DbPool> {
    let pool = db::create_pool(database_url)?;

    tracing::info!("Running database migrations...");
    match db::run_migrations(&pool) {
        Ok(applied) => {
            if applied.is_empty() {
                tracing::info!("Database is up to date");
            } else {
                for m in &applied {
                    tracing::info!("Applied migration: {}", m);
                }
            }
        }
        Err(e) => {
            tracing::error!("Failed to run migrations: {}", e);
            return Err(e);
        }
    }

    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
