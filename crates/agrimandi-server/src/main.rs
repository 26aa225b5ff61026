// AgriMandi Server
//
// Main server binary for the farm-produce marketplace backend.

mod logging;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Result;
use log::info;

use agrimandi_api::{routes, AppState};
use agrimandi_configs::ServerConfig;
use agrimandi_store::{RocksDbBackend, RocksDbInit, StorageBackend};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration
    let mut config = match ServerConfig::from_file("config.toml") {
        Ok(cfg) => cfg,
        Err(_) => {
            eprintln!("Warning: config.toml not found, using defaults");
            ServerConfig::default()
        }
    };
    config.apply_env_overrides();
    config.validate()?;

    // Initialize logging
    logging::init_logging(&config.logging)?;

    info!("Starting AgriMandi Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: host={}, port={}",
        config.server.host, config.server.port
    );

    // Initialize RocksDB with one column family per entity partition
    std::fs::create_dir_all(&config.storage.data_path)?;
    let db = RocksDbInit::new(&config.storage.data_path).open()?;
    let backend: Arc<dyn StorageBackend> = Arc::new(RocksDbBackend::new(db));
    info!("RocksDB initialized at {}", config.storage.data_path);

    let state = web::Data::new(AppState::new(backend, &config.auth));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_addr);

    let cors_settings = config.cors.clone();

    // Start HTTP server
    HttpServer::new(move || {
        // Configure CORS for web browser clients
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(cors_settings.max_age as usize);

        if cors_settings.allowed_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_settings.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?
    .workers(if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    })
    .run()
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
