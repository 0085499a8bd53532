use accounts::{config::ServerConfig, run_server};
use accounts_db::Seeder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        "Building accounts store from {} and {}",
        config.store.schema_script,
        config.store.data_script
    );

    // Startup fails here if either script or any balance write fails.
    let store = Seeder::new(config.store).initialize().await?;

    run_server(store, config.port).await
}
