use std::net::SocketAddr;

use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use smartbusflow::bootstrap::config::PlaceholderConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "smartbusflow=debug,placeholder=debug,tower_http=info".into()),
        )
        .init();

    let cfg = PlaceholderConfig::from_env();
    let app = smartbusflow::presentation::http::placeholder::routes()
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!(%addr, "Placeholder API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
