use axum::{Router, response::Response, routing::get};

use crate::bootstrap::app_context::AppContext;
use crate::domain::transit::samples;
use crate::presentation::http::auth::SessionContext;
use crate::presentation::http::flash::{IncomingFlash, render_page};
use crate::presentation::views;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/schedule", get(schedule))
        .route("/track", get(track))
        .with_state(ctx)
}

pub async fn home(session: SessionContext, flash: IncomingFlash) -> Response {
    let html = views::home(&session.chrome(&flash), samples::upcoming_arrivals());
    render_page(&flash, html)
}

pub async fn schedule(session: SessionContext, flash: IncomingFlash) -> Response {
    let html = views::schedule(&session.chrome(&flash), samples::route_schedules());
    render_page(&flash, html)
}

pub async fn track(session: SessionContext, flash: IncomingFlash) -> Response {
    let html = views::track(&session.chrome(&flash), samples::bus_positions());
    render_page(&flash, html)
}
