//! Shipping Fee API Server
//!
//! REST proxy for Vietnamese address data and GHN shipping fees
//!
//! Usage:
//!   cargo run --bin shipping_api
//!
//! Environment:
//!   GHN_API_TOKEN    - GHN token (unset = mock data only)
//!   GHN_SHOP_ID      - GHN shop id
//!   GHN_BASE_URL     - Override API base url
//!   GHN_ENV          - production | development (default: development)
//!   GHN_TIMEOUT_SECS - Upstream timeout (default: 10)
//!   PORT / SHIPPING_PORT - Server port (default: 8080)
//!   SHIPPING_HOST    - Server host (default: 0.0.0.0)
//!   RUST_LOG         - Log filter (default: info)

use shipping_fee::api::{create_router, AppState};
use shipping_fee::utils::constants::{APP_NAME, APP_VERSION};
use shipping_fee::{GhnConfig, ServerConfig, ShippingService};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    print_banner();

    let ghn = GhnConfig::from_env()?;
    let service = ShippingService::from_config(&ghn)?;
    info!("📦 Data source: {}", service.source().as_str());

    let state = Arc::new(AppState::new(service));
    let app = create_router(state);

    let server = ServerConfig::from_env();
    let addr = server.socket_addr()?;

    info!("🚀 {} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!("");
    info!("Endpoints:");
    info!("  GET  /api/shipping/provinces                 - List provinces");
    info!("  GET  /api/shipping/districts/{{provinceId}}    - Districts of a province");
    info!("  GET  /api/shipping/wards/{{districtId}}        - Wards of a district");
    info!("  GET  /api/shipping/services/{{toDistrictId}}   - Available services");
    info!("  POST /api/shipping/calculate                 - Calculate shipping fee");
    info!("  GET  /api/shipping/health                    - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("👋 {} shutdown complete", APP_NAME);

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════════╗
    ║                                              ║
    ║        S H I P P I N G   F E E   A P I       ║
    ║                                              ║
    ║     Vietnam address data + GHN fee proxy     ║
    ║{:^46}║
    ║                                              ║
    ╚══════════════════════════════════════════════╝
    "#,
        format!("v{}", APP_VERSION)
    );
}
