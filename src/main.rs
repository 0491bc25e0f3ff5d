use std::process::ExitCode;

use tracing::{error, info};

use lentille::catalog::{seed_catalog, CatalogRepository};
use lentille::{Config, Database, ForumService, WebServer};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let mut config = match Config::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    if let Err(e) = lentille::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        lentille::logging::init_console_only(&config.logging.level);
    }

    info!("Lentille - {}", config.site.name);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> lentille::Result<()> {
    config.validate()?;

    let db = Database::open(&config.database.url, config.database.max_connections).await?;

    ForumService::new(db.pool())
        .ensure_categories(config.forum.default_categories.as_slice())
        .await?;

    if let Some(seed_file) = &config.catalog.seed_file {
        seed_catalog(&CatalogRepository::new(db.pool()), seed_file).await?;
    }

    let server = WebServer::new(&config, db)?;
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );
    server.run().await?;
    Ok(())
}
