use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::post,
};
use serde::Deserialize;

use crate::application::use_cases::newsletter::subscribe::{
    Subscribe, SubscribeError, SubscribeOutcome,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::flash::{FlashLevel, FlashMessage, redirect_with_flash};
use crate::presentation::http::internal_error;

#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/subscribe", post(subscribe))
        .with_state(ctx)
}

pub async fn subscribe(
    State(ctx): State<AppContext>,
    Form(form): Form<SubscribeForm>,
) -> Result<Response, StatusCode> {
    let repo = ctx.subscriber_repo();
    let notifier = ctx.notifier();
    let uc = Subscribe {
        repo: repo.as_ref(),
        notifier: notifier.as_ref(),
    };
    let flash = match uc.execute(form.email.as_deref()).await {
        Ok(SubscribeOutcome::Subscribed(_)) => {
            FlashMessage::new(FlashLevel::Success, "Thanks for subscribing!")
        }
        Ok(SubscribeOutcome::AlreadySubscribed) => {
            FlashMessage::new(FlashLevel::Info, "You are already subscribed.")
        }
        Err(SubscribeError::MissingEmail) => {
            FlashMessage::new(FlashLevel::Error, "Please enter an email address.")
        }
        Err(SubscribeError::Store(e)) => return Err(internal_error("subscribe_failed", e)),
    };
    Ok(redirect_with_flash("/", flash))
}
