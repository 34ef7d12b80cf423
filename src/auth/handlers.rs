use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, MessageResponse},
        jwt::SessionKeys,
    },
    error::{AppError, Result},
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials. Use the demo account from the login page.";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    // an unreadable body is just a failed login
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    if !state.demo.check(&email, &password)? {
        warn!(email = %email.trim(), "login rejected");
        return Err(AppError::Auth(INVALID_CREDENTIALS.into()));
    }

    let keys = SessionKeys::from_ref(&state);
    let user = state.demo.public_user();
    let token = keys.sign(&user.email, &user.role)?;

    info!(email = %user.email, "user logged in");
    Ok((
        [(header::SET_COOKIE, keys.session_cookie(&token))],
        Json(LoginResponse {
            message: "Login successful".into(),
            data: user,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let keys = SessionKeys::from_ref(&state);
    (
        [(header::SET_COOKIE, keys.clear_cookie())],
        Json(MessageResponse {
            message: "Logged out".into(),
        }),
    )
}
