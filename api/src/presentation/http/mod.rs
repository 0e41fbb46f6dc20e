use axum::Router;
use axum::http::StatusCode;

use crate::bootstrap::app_context::AppContext;

pub mod auth;
pub mod contact;
pub mod cookies;
pub mod dashboard;
pub mod fare;
pub mod flash;
pub mod health;
pub mod newsletter;
pub mod pages;
pub mod placeholder;

/// Logs an unexpected failure and maps it to a bare 500.
pub(crate) fn internal_error<E: std::fmt::Debug>(op: &'static str, err: E) -> StatusCode {
    tracing::error!(error = ?err, op, "request_failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Every site route; health checks and static assets are mounted by the binary.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(pages::routes(ctx.clone()))
        .merge(fare::routes(ctx.clone()))
        .merge(newsletter::routes(ctx.clone()))
        .merge(contact::routes(ctx.clone()))
        .merge(auth::routes(ctx.clone()))
        .merge(dashboard::routes(ctx))
}
