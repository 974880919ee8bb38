//! Authentication failures.
//!
//! [`AuthError`] is what callers see: a rejected session, rejected
//! credentials, a missing token, or an internal failure. The specific
//! [`Rejection`] is carried along for logs and tests but never reaches an
//! HTTP response, so bad signatures, expired tokens and deleted accounts all
//! look the same to a client, as do unknown emails and wrong passwords.

use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tickbox_auth::TokenError;
use tickbox_core::AppError;

#[derive(Debug, Error)]
pub enum Rejection {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("token signature does not match its payload")]
    SignatureMismatch,

    #[error("token expired at {0}")]
    Expired(DateTime<Utc>),

    #[error("token identity no longer exists")]
    NoSuchIdentity,

    #[error("no account with this email")]
    NoSuchUser,

    #[error("password does not match")]
    WrongPassword,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unauthenticated")]
    Unauthenticated(#[source] Rejection),

    #[error("invalid credentials")]
    InvalidCredentials(#[source] Rejection),

    #[error("no session token")]
    NoToken,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    /// The specific reason behind a rejection, if this is one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            AuthError::Unauthenticated(reason) | AuthError::InvalidCredentials(reason) => {
                Some(reason)
            }
            AuthError::NoToken | AuthError::Internal(_) => None,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Unauthenticated(_) | AuthError::NoToken => {
                AppError::unauthorized("unauthenticated")
            }
            AuthError::InvalidCredentials(_) => AppError::unauthorized("invalid credentials"),
            AuthError::Internal(err) => AppError::internal(err),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.into_app_error().into_response()
    }
}
