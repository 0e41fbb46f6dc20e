use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
};

use crate::application::access::AccessError;
use crate::application::use_cases::dashboard::admin_overview::{AdminOverview, DashboardError};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{SessionContext, login_required};
use crate::presentation::http::flash::{IncomingFlash, render_page, render_page_with_status};
use crate::presentation::http::internal_error;
use crate::presentation::views;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .with_state(ctx)
}

pub async fn dashboard(
    State(ctx): State<AppContext>,
    session: SessionContext,
    flash: IncomingFlash,
) -> Result<Response, StatusCode> {
    let users = ctx.user_repo();
    let subscribers = ctx.subscriber_repo();
    let messages = ctx.contact_repo();
    let uc = AdminOverview {
        users: users.as_ref(),
        subscribers: subscribers.as_ref(),
        messages: messages.as_ref(),
    };
    match uc.execute(session.principal.as_ref()).await {
        Ok(data) => Ok(render_page(
            &flash,
            views::dashboard(&session.chrome(&flash), &data),
        )),
        Err(DashboardError::Access(AccessError::Unauthorized)) => Ok(login_required()),
        Err(DashboardError::Access(AccessError::Forbidden)) => {
            if let Some(p) = &session.principal {
                tracing::warn!(user_id = p.user_id, "dashboard_forbidden");
            }
            Ok(render_page_with_status(
                StatusCode::FORBIDDEN,
                &flash,
                views::forbidden(&session.chrome(&flash)),
            ))
        }
        Err(DashboardError::Store(e)) => Err(internal_error("dashboard_load_failed", e)),
    }
}
