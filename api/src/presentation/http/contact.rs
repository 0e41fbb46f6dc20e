use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
};
use serde::Deserialize;

use crate::application::use_cases::contact::submit_message::{ContactRequest, SubmitContactMessage};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::SessionContext;
use crate::presentation::http::flash::{
    FlashLevel, FlashMessage, IncomingFlash, redirect_with_flash, render_page,
};
use crate::presentation::http::internal_error;
use crate::presentation::views;

/// All three keys must be present in the body; empty values are accepted.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/contact", get(contact_form).post(submit_contact))
        .with_state(ctx)
}

pub async fn contact_form(session: SessionContext, flash: IncomingFlash) -> Response {
    render_page(&flash, views::contact(&session.chrome(&flash)))
}

pub async fn submit_contact(
    State(ctx): State<AppContext>,
    Form(form): Form<ContactForm>,
) -> Result<Response, StatusCode> {
    let (Some(name), Some(email), Some(message)) = (form.name, form.email, form.message) else {
        return Ok(redirect_with_flash(
            "/contact",
            FlashMessage::new(FlashLevel::Error, "Please fill in all fields."),
        ));
    };
    let repo = ctx.contact_repo();
    let notifier = ctx.notifier();
    let uc = SubmitContactMessage {
        repo: repo.as_ref(),
        notifier: notifier.as_ref(),
        admin_email: ctx.cfg.admin_email.as_deref(),
    };
    let req = ContactRequest {
        name,
        email,
        message,
    };
    uc.execute(&req)
        .await
        .map_err(|e| internal_error("contact_submit_failed", e))?;
    Ok(redirect_with_flash(
        "/contact",
        FlashMessage::new(FlashLevel::Success, "Thanks! Your message has been sent."),
    ))
}
