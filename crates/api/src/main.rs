//! Cooling-System Diagnosis Service - Main Entry Point

use api::{init_logging, run_server, ApiError, ServiceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let path = std::env::args().nth(1);
    let config = ServiceConfig::load(path.as_deref())?;
    init_logging(&config);

    info!("=== Coolant Diagnosis v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Loaded configuration: {:?}", config);

    run_server(config).await?;

    Ok(())
}
