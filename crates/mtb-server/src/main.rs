//! MTB data-intake validation core -- process entry point.
//!
//! Wires the catalog registry, staging store and query service into one
//! [`mtb_intake::IntakePipeline`]. This binary deliberately carries no
//! CLI/HTTP surface for *submitting* MTB files -- that belongs to a layer
//! outside this core's scope. What's here is the ambient process skeleton
//! any runnable deployment of the core needs: configuration, logging, and
//! collaborator construction.

use std::sync::Arc;

use clap::Parser;
use mtb_intake::{HttpQueryService, IntakePipeline, SqliteStagingStore};
use mtb_server::Config;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    mtb_server::init_logging(&config.log_level);

    info!(site_id = %config.site_id, "starting MTB data-intake core");

    let catalog = mtb_catalog::load_registry(&config.catalog_paths())
        .map_err(|e| anyhow::anyhow!("catalog registry failed to load at startup: {e}"))?;
    let catalog: Arc<dyn mtb_catalog::CatalogRegistry> = Arc::new(catalog);

    let store = Arc::new(
        SqliteStagingStore::open(&config.staging_db_path)
            .map_err(|e| anyhow::anyhow!("failed to open staging store at {}: {e}", config.staging_db_path.display()))?,
    );
    let query_service = Arc::new(HttpQueryService::new(&config.query_service_url));

    let _pipeline = IntakePipeline::new(catalog, store, query_service, config.site_id.clone());

    info!("MTB data-intake core ready; awaiting shutdown signal");
    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    Ok(())
}
