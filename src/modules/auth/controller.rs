use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use tickbox_core::AppError;
use tickbox_models::{LoginRequest, MessageResponse, RegisterRequest, SessionResponse, UserResponse};
use tracing::instrument;

use super::error::AuthError;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state.users.register(&dto.email, &dto.password).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchanges credentials for a session cookie.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AuthError> {
    let session = state.auth.login(&dto.email, &dto.password).await?;

    let body = SessionResponse {
        user_id: session.claims.user_id,
        email: session.claims.email,
        expires_at: Some(session.expires_at),
    };
    let jar = state.cookies.attach(jar, session.token, session.expires_at);

    Ok((jar, Json(body)))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    (
        state.cookies.clear(jar),
        Json(MessageResponse::new("logged out")),
    )
}
