use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::infrastructure::db::PgPool;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub service: &'static str,
    pub status: &'static str,
    pub database: &'static str,
}

/// Liveness of the site and its Postgres pool. A failed probe query answers
/// 503 so load balancers stop routing to the instance.
pub async fn health(State(pool): State<PgPool>) -> (StatusCode, Json<HealthReport>) {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthReport {
                service: "smartbusflow",
                status: "ok",
                database: "up",
            }),
        ),
        Err(err) => {
            tracing::warn!(error = ?err, "health_db_unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    service: "smartbusflow",
                    status: "degraded",
                    database: "down",
                }),
            )
        }
    }
}

pub fn routes(pool: PgPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}
