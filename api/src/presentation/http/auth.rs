use axum::{
    Form, Router,
    extract::{FromRequestParts, State},
    http::{HeaderValue, StatusCode, header, request::Parts},
    response::Response,
    routing::get,
};
use serde::Deserialize;

use crate::application::access::{self, Principal};
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::logout::Logout;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterOutcome, RegisterRequest as RegisterDto,
};
use crate::application::use_cases::auth::resolve_session::ResolveSession;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::cookies::{
    SESSION_COOKIE, build_session_cookie, clear_session_cookie, get_cookie,
};
use crate::presentation::http::flash::{
    FlashLevel, FlashMessage, IncomingFlash, redirect_with_flash, render_page,
};
use crate::presentation::http::internal_error;
use crate::presentation::views::{self, PageChrome};

/// Keys are optional so a missing field becomes a flash message rather than
/// an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .with_state(ctx)
}

// --- Session extractor ---

/// Session cookie resolved against the token table. Anonymous when there is
/// no cookie, or when the token or its user no longer exists.
pub struct SessionContext {
    pub token: Option<String>,
    pub principal: Option<Principal>,
}

impl SessionContext {
    pub fn chrome<'a>(&'a self, flash: &'a IncomingFlash) -> PageChrome<'a> {
        PageChrome {
            principal: self.principal.as_ref(),
            flash: flash.0.as_ref(),
        }
    }
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for SessionContext {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = get_cookie(&parts.headers, SESSION_COOKIE).filter(|t| !t.is_empty())
        else {
            return Ok(SessionContext {
                token: None,
                principal: None,
            });
        };
        let repo = ctx.user_repo();
        let sessions = ctx.session_store();
        let uc = ResolveSession {
            repo: repo.as_ref(),
            sessions: sessions.as_ref(),
        };
        let principal = uc
            .execute(&token)
            .await
            .map_err(|e| internal_error("session_resolve_failed", e))?;
        Ok(SessionContext {
            token: Some(token),
            principal,
        })
    }
}

pub(crate) fn login_required() -> Response {
    redirect_with_flash(
        "/login",
        FlashMessage::new(FlashLevel::Info, "Please log in to access this page."),
    )
}

// --- Handlers ---

pub async fn register_form(session: SessionContext, flash: IncomingFlash) -> Response {
    render_page(&flash, views::register(&session.chrome(&flash)))
}

pub async fn register(
    State(ctx): State<AppContext>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, StatusCode> {
    let (Some(name), Some(email), Some(password)) = (form.name, form.email, form.password) else {
        return Ok(redirect_with_flash(
            "/register",
            FlashMessage::new(FlashLevel::Error, "Please fill in all fields."),
        ));
    };
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        name,
        email,
        password,
    };
    let outcome = uc
        .execute(&dto)
        .await
        .map_err(|e| internal_error("register_failed", e))?;
    Ok(match outcome {
        RegisterOutcome::Registered(_) => redirect_with_flash(
            "/login",
            FlashMessage::new(FlashLevel::Success, "Registration successful. Please log in."),
        ),
        RegisterOutcome::AlreadyRegistered => redirect_with_flash(
            "/register",
            FlashMessage::new(FlashLevel::Error, "That email is already registered."),
        ),
    })
}

pub async fn login_form(session: SessionContext, flash: IncomingFlash) -> Response {
    render_page(&flash, views::login(&session.chrome(&flash)))
}

pub async fn login(
    State(ctx): State<AppContext>,
    session: SessionContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, StatusCode> {
    let (Some(email), Some(password)) = (form.email, form.password) else {
        return Ok(invalid_credentials());
    };
    let repo = ctx.user_repo();
    let sessions = ctx.session_store();
    let uc = LoginUc {
        repo: repo.as_ref(),
        sessions: sessions.as_ref(),
    };
    let dto = LoginDto { email, password };
    let established = uc
        .execute(&dto)
        .await
        .map_err(|e| internal_error("login_failed", e))?;
    let Some(established) = established else {
        return Ok(invalid_credentials());
    };

    // re-login replaces whatever session the browser already carried
    if let Some(previous) = session.token.as_deref() {
        let revoke = Logout {
            sessions: sessions.as_ref(),
        };
        revoke
            .execute(previous)
            .await
            .map_err(|e| internal_error("session_revoke_failed", e))?;
    }

    let landing = if established.principal.is_admin {
        "/dashboard"
    } else {
        "/"
    };
    tracing::info!(user_id = established.principal.user_id, "user_logged_in");
    let mut response = redirect_with_flash(
        landing,
        FlashMessage::new(
            FlashLevel::Success,
            format!("Welcome back, {}!", established.principal.name),
        ),
    );
    let cookie = build_session_cookie(&established.token, ctx.cfg.secure_cookies());
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie).unwrap_or(HeaderValue::from_static("")),
    );
    Ok(response)
}

fn invalid_credentials() -> Response {
    redirect_with_flash(
        "/login",
        FlashMessage::new(FlashLevel::Error, INVALID_CREDENTIALS),
    )
}

pub async fn logout(
    State(ctx): State<AppContext>,
    session: SessionContext,
) -> Result<Response, StatusCode> {
    if access::require_authenticated(session.principal.as_ref()).is_err() {
        return Ok(login_required());
    }
    if let Some(token) = session.token.as_deref() {
        let sessions = ctx.session_store();
        let uc = Logout {
            sessions: sessions.as_ref(),
        };
        uc.execute(token)
            .await
            .map_err(|e| internal_error("logout_failed", e))?;
    }
    let mut response = redirect_with_flash(
        "/",
        FlashMessage::new(FlashLevel::Info, "You have been logged out."),
    );
    let cookie = clear_session_cookie(ctx.cfg.secure_cookies());
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie).unwrap_or(HeaderValue::from_static("")),
    );
    Ok(response)
}
