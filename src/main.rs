//! Congestion tax HTTP service.
//!
//! Serves `POST /tax`. Taxation rules are read from the YAML directory named
//! by `CONGESTION_TAX_CONFIG_DIR`, or from the built-in Gothenburg ruleset
//! when it is unset. `CONGESTION_TAX_ADDR` sets the listen address.

use std::sync::Arc;

use tracing::{error, info};

use congestion_tax::api::{AppState, create_router};
use congestion_tax::calculation::TaxCalculator;
use congestion_tax::config::{StaticTaxationSource, TaxationSource, YamlTaxationSource};
use congestion_tax::models::City;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let source: Arc<dyn TaxationSource> = match std::env::var("CONGESTION_TAX_CONFIG_DIR") {
        Ok(dir) => {
            info!(config_dir = %dir, "Using YAML taxation rules");
            Arc::new(YamlTaxationSource::new(dir))
        }
        Err(_) => {
            info!("CONGESTION_TAX_CONFIG_DIR not set, using built-in Gothenburg rules");
            Arc::new(StaticTaxationSource::gothenburg())
        }
    };

    let calculator = TaxCalculator::new(source, City::Gothenburg);
    let router = create_router(AppState::new(calculator));

    let addr = std::env::var("CONGESTION_TAX_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %addr, error = %e, "Failed to bind listener");
            return Err(e.into());
        }
    };
    info!(addr = %addr, "Congestion tax service listening");

    axum::serve(listener, router).await?;
    Ok(())
}
