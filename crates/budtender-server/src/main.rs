use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use budtender_gateway::GatewayClient;
use budtender_server::{config::Config, router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let backend = match &config.api_key {
        Some(key) => {
            let mut client = GatewayClient::new(key.clone());
            if let Some(base) = &config.base_url {
                client = client.with_base_url(base.clone());
            }
            if let Some(model) = &config.model {
                client = client.with_model(model.clone());
            }
            Some(Arc::new(client))
        }
        None => {
            warn!("AI_GATEWAY_API_KEY is not set; requests will fail with a configuration error");
            None
        }
    };

    let app = router(AppState { backend });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("budtender server listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
