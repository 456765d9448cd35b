use std::sync::Arc;

use dotenv::dotenv;
use tracing::info;

use institute_admin_server::config::Config;
use institute_admin_server::error::Result;
use institute_admin_server::handlers::api::AdminApi;
use institute_admin_server::server::run_http_server;
use institute_admin_server::store::init_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Build configuration before logging so the filter level applies
    let config = Config::load();
    init_tracing(&config);

    info!(
        "Starting {} v{}",
        institute_admin_server::NAME,
        institute_admin_server::VERSION
    );

    // Open the persistent store and wire the service layer onto it
    let store = init_store(&config.store).await?;
    let api = Arc::new(AdminApi::new(store, &config));

    // Bootstrap: default admin account + one-time directory seed
    api.bootstrap().await?;

    // Serve the contact/health HTTP surface until shutdown
    run_http_server(&config.server, api).await
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
