use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use smartbusflow::application::ports::notifier::Notifier;
use smartbusflow::bootstrap::app_context::{AppContext, AppServices};
use smartbusflow::bootstrap::config::Config;
use smartbusflow::infrastructure::db::repositories::contact_message_repository_sqlx::SqlxContactMessageRepository;
use smartbusflow::infrastructure::db::repositories::subscriber_repository_sqlx::SqlxSubscriberRepository;
use smartbusflow::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use smartbusflow::infrastructure::mail::{HttpMailNotifier, LogNotifier};
use smartbusflow::infrastructure::sessions::InMemorySessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "smartbusflow=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        production = cfg.is_production,
        mail_configured = cfg.mail_api_url.is_some(),
        "Starting SmartBusFlow site"
    );

    // Database
    let pool = smartbusflow::infrastructure::db::connect_pool(&cfg.database_url).await?;
    smartbusflow::infrastructure::db::migrate(&pool).await?;

    let notifier: Arc<dyn Notifier> = match cfg.mail_api_url.clone() {
        Some(url) => Arc::new(HttpMailNotifier::new(
            url,
            cfg.mail_api_key.clone(),
            cfg.mail_from.clone(),
        )?),
        None => {
            tracing::warn!("MAIL_API_URL not set; notifications are only logged");
            Arc::new(LogNotifier)
        }
    };

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxSubscriberRepository::new(pool.clone())),
        Arc::new(SqlxContactMessageRepository::new(pool.clone())),
        Arc::new(InMemorySessionStore::new()),
        notifier,
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = smartbusflow::presentation::http::router(ctx)
        .merge(smartbusflow::presentation::http::health::routes(pool.clone()))
        .nest_service("/static", ServeDir::new(&cfg.static_dir))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP site listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
