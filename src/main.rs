use crate::calculator::NinjaCalculator;
use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::domain::{Enricher, SearchService};
use crate::router::handle;
use anyhow::Context;
use astra::Server;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod calculator;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config.general.log_level);
    config.validate()?;

    // Database handle + schema
    let db = Database::new(&config.general.database_path);
    init_db(&db, &config.general.schema_path).context("Database initialization failed")?;

    // Calculator client, injected into the enricher
    if config.calculator.api_key.is_empty() {
        warn!("No calculator API key configured; every search will fail to enrich");
    }
    let calculator =
        NinjaCalculator::new(&config.calculator).context("Failed to build calculator client")?;
    let service = SearchService::new(db, Enricher::new(Arc::new(calculator)));

    let addr = config.socket_addr()?;
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &service) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    result.context("Server ended with error")?;

    info!("Server shut down cleanly.");
    Ok(())
}
