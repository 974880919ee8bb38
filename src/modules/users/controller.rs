use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use tickbox_core::AppError;
use tickbox_models::{MessageResponse, SessionResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Returns the identity carried by the session.
pub async fn me(AuthUser(claims): AuthUser) -> Json<SessionResponse> {
    let expires_at = claims.expiry();
    Json(SessionResponse {
        user_id: claims.user_id,
        email: claims.email,
        expires_at,
    })
}

/// Deletes the signed-in account and ends the session.
#[instrument(skip_all)]
pub async fn delete_me(
    State(state): State<AppState>,
    jar: CookieJar,
    AuthUser(claims): AuthUser,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    state.users.delete(claims.user_id).await?;

    Ok((
        state.cookies.clear(jar),
        Json(MessageResponse::new("account deleted")),
    ))
}
