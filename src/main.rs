//! EduCenter server
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::info;

use EduCenter::{
    config::{Settings, StoreBackend},
    database::{create_pool, run_migrations, DatabaseService, MemoryStore, Store},
    server,
    services::AiService,
    utils::logging,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", EduCenter::info());

    let store: Arc<dyn Store> = match settings.database.backend {
        StoreBackend::Postgres => {
            info!("Connecting to database...");
            let pool_config = EduCenter::database::DatabaseConfig::from(&settings.database);
            let pool = create_pool(&pool_config).await?;

            info!("Running database migrations...");
            run_migrations(&pool).await?;

            Arc::new(DatabaseService::new(pool))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store, data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };

    let ai = AiService::new(settings.ai.clone())?;
    let state = AppState::new(store, ai);

    let addr = settings.bind_address()?;
    server::serve(addr, state, &settings.server.static_dir).await?;

    info!("EduCenter has been shut down.");
    Ok(())
}
