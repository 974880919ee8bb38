//! Token issuance and authorization.
//!
//! Login path: look up the account, verify the password, build claims valid
//! for [`TOKEN_EXPIRATION_SECS`], sign.
//!
//! Authorization path: decode the wire token, verify the signature, decode
//! the claims, check expiry, then confirm the account still exists. Only the
//! returned [`Claims`] count as proof of identity for the rest of a request.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tickbox_auth::{Claims, Token, TokenSigner};
use tickbox_core::{AppError, hash_password_with_cost, verify_password};
use tickbox_db::UserStore;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::error::{AuthError, Rejection};

/// Validity window of an issued token: 24 hours.
pub const TOKEN_EXPIRATION_SECS: i64 = 24 * 60 * 60;

/// A freshly issued token with the claims it carries.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
    pub expires_at: DateTime<Utc>,
}

pub struct AuthService {
    users: Arc<dyn UserStore>,
    signer: TokenSigner,
    // Verified against when the email is unknown so that path costs a full
    // bcrypt comparison too.
    decoy_hash: String,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        signer: TokenSigner,
        password_hash_cost: u32,
    ) -> Result<Self, AppError> {
        let decoy_hash = hash_password_with_cost(&Uuid::new_v4().to_string(), password_hash_cost)?;

        Ok(Self {
            users,
            signer,
            decoy_hash,
        })
    }

    /// Authenticates by credentials and returns the wire token.
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<String, AuthError> {
        self.login(email, password).await.map(|session| session.token)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.login_at(email, password, Utc::now()).await
    }

    #[instrument(skip(self, password))]
    pub async fn login_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthError> {
        let user = self.users.get_by_email(email).await.map_err(internal)?;

        let Some(user) = user else {
            self.password_matches(password, &self.decoy_hash).await?;
            return Err(invalid_credentials(Rejection::NoSuchUser));
        };

        if !self.password_matches(password, &user.password_hash).await? {
            return Err(invalid_credentials(Rejection::WrongPassword));
        }

        let expires_at = now + Duration::seconds(TOKEN_EXPIRATION_SECS);
        let claims = Claims::new(user.id, user.email, expires_at);
        let token = self.signer.create_token(&claims).map_err(internal)?;

        info!(user_id = %claims.user_id, %expires_at, "issued session token");

        Ok(Session {
            token,
            claims,
            expires_at,
        })
    }

    /// Resolves a wire token back to its claims, or rejects it.
    pub async fn authorize(&self, token: &str) -> Result<Claims, AuthError> {
        self.authorize_at(token, Utc::now()).await
    }

    #[instrument(skip(self, wire))]
    pub async fn authorize_at(&self, wire: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let token = Token::decode(wire).map_err(|e| unauthenticated(e.into()))?;

        if !self.signer.verify(&token) {
            return Err(unauthenticated(Rejection::SignatureMismatch));
        }

        let claims = Claims::decode(&token.payload).map_err(|e| unauthenticated(e.into()))?;

        match claims.expiry() {
            Some(at) if at < now => return Err(unauthenticated(Rejection::Expired(at))),
            _ => {}
        }

        let user = self
            .users
            .get_by_email(&claims.email)
            .await
            .map_err(internal)?;

        match user {
            Some(user) if user.id == claims.user_id => Ok(claims),
            _ => Err(unauthenticated(Rejection::NoSuchIdentity)),
        }
    }

    async fn password_matches(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(internal)?
            .map_err(|e| AuthError::Internal(e.error))
    }
}

fn unauthenticated(reason: Rejection) -> AuthError {
    warn!(%reason, "session token rejected");
    AuthError::Unauthenticated(reason)
}

fn invalid_credentials(reason: Rejection) -> AuthError {
    warn!(%reason, "login rejected");
    AuthError::InvalidCredentials(reason)
}

fn internal<E>(err: E) -> AuthError
where
    E: Into<anyhow::Error>,
{
    AuthError::Internal(err.into())
}
