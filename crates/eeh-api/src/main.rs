//! Binary entrypoint for the EEH assessment API.
use eeh_api::{config::ApiConfig, init_tracing, run};

#[tokio::main]
async fn main() {
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("eeh-api: {}", e);
            std::process::exit(2);
        }
    };

    init_tracing(&config.log_filter);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
