use tokio::net::TcpListener;
use tracing::{error, info};

use catalog_api::{app, logging, ApiConfig, Dependencies, StartupError};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            logging::init(logging::LogFormat::default());
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    logging::init(config.log_format);

    if let Err(e) = run(config).await {
        error!(error = %e, "Catalog API stopped");
        std::process::exit(1);
    }
}

async fn run(config: ApiConfig) -> Result<(), StartupError> {
    let dependencies = Dependencies::new(&config).await?;
    let app = app::build_app(dependencies.catalog);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "Catalog API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalog API shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
