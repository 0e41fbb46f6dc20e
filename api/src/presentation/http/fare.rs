use axum::{Form, Router, response::Response, routing::get};
use serde::Deserialize;

use crate::bootstrap::app_context::AppContext;
use crate::domain::transit::fare;
use crate::presentation::http::auth::SessionContext;
use crate::presentation::http::flash::{IncomingFlash, render_page};
use crate::presentation::views;

#[derive(Debug, Deserialize)]
pub struct FareForm {
    #[serde(default)]
    pub distance: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/fare", get(fare_form).post(quote_fare))
        .with_state(ctx)
}

pub async fn fare_form(session: SessionContext, flash: IncomingFlash) -> Response {
    render_page(&flash, views::fare(&session.chrome(&flash), None, None))
}

pub async fn quote_fare(
    session: SessionContext,
    flash: IncomingFlash,
    Form(form): Form<FareForm>,
) -> Response {
    let quote = fare::quote(&form.distance);
    let html = views::fare(
        &session.chrome(&flash),
        Some(form.distance.as_str()),
        Some(quote),
    );
    render_page(&flash, html)
}
