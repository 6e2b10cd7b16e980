//! Zonekeeper web frontend.
//!
//! Boots the SQLite store, wires the core services through
//! `AppStateBuilder`, and serves the admin/user API with Actix-web.

mod auth;
mod error;
mod handlers;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use zonekeeper_app::{AppStateBuilder, SqliteStore};
use zonekeeper_core::probe::HttpsProbe;
use zonekeeper_core::CloudflareClient;

use settings::Settings;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("ZONEKEEPER_CONFIG")
        .map_or_else(|_| PathBuf::from("config.toml"), PathBuf::from);
    let settings = Settings::load(&config_path)?;

    let store = Arc::new(SqliteStore::new(&settings.database.path).await?);
    let state = AppStateBuilder::new()
        .store(store)
        .provider(Arc::new(CloudflareClient::new()))
        .probe(Arc::new(HttpsProbe::new()))
        .policy(settings.policy())
        .build()?;

    let bind_addr = (settings.server.host.clone(), settings.server.port);
    let workers = settings.workers();
    tracing::info!(
        "listening on {}:{} with {workers} workers",
        bind_addr.0,
        bind_addr.1
    );

    let state = web::Data::new(state);
    let settings = web::Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(settings.clone())
            .service(web::scope("/api").configure(handlers::configure))
    })
    .workers(workers)
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
