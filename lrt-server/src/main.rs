use std::net::SocketAddr;

use lrt_server::aggregate::PolicyTable;
use lrt_server::cache::{CacheConfig, CachedLrtClient};
use lrt_server::lrt::{LrtClient, LrtConfig};
use lrt_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lrt_server=info".into()),
        )
        .init();

    // Build the API client, with an env override for the base URL
    let mut config = LrtConfig::default();
    if let Ok(base_url) = std::env::var("LRT_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let client = LrtClient::new(config).expect("Failed to create Light Rail client");

    // Wrap it in the schedule cache
    let cached = CachedLrtClient::new(client, &CacheConfig::default());

    // Platform-handling rules for the terminus and merged-platform stations
    let policies = PolicyTable::default();

    let state = AppState::new(cached, policies);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Light Rail schedule server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                        - Health check");
    println!("  GET /api/stations                  - Station catalog");
    println!("  GET /api/stations/:id/schedule     - Live board for a station");
    println!("  GET /api/routes                    - Route catalog");
    println!("  GET /api/routes/:route/board       - Route-mode board");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
