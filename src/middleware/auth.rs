use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Extensions, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use thiserror::Error;
use tickbox_auth::Claims;
use tickbox_core::AppError;

use crate::modules::auth::error::AuthError;
use crate::state::AppState;

/// The verified identity of the current request.
#[derive(Debug, Clone)]
pub struct Identity(pub Claims);

/// A handler asked for the identity on a route that never authenticated.
#[derive(Debug, Error)]
#[error("no identity attached to request")]
pub struct MissingIdentity;

pub fn with_identity(extensions: &mut Extensions, claims: Claims) {
    extensions.insert(Identity(claims));
}

pub fn identity_of(extensions: &Extensions) -> Result<&Claims, MissingIdentity> {
    extensions
        .get::<Identity>()
        .map(|Identity(claims)| claims)
        .ok_or(MissingIdentity)
}

/// Rejects the request unless its session cookie resolves to a live identity,
/// which is then attached for downstream handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = state.cookies.extract(&jar)?;
    let claims = state.auth.authorize(&token).await?;

    with_identity(req.extensions_mut(), claims);

    Ok(next.run(req).await)
}

/// Extractor for handlers behind [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        identity_of(&parts.extensions)
            .cloned()
            .map(AuthUser)
            .map_err(AppError::internal)
    }
}
