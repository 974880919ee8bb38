//! Session token transport over an HTTP cookie.
//!
//! The cookie carries the wire token verbatim. It is `HttpOnly` and
//! `SameSite=Strict`, scoped to the configured path, and expires together
//! with the token's claims.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use tickbox_config::AuthConfig;
use time::OffsetDateTime;

use crate::modules::auth::error::AuthError;

#[derive(Debug, Clone)]
pub struct CookieAuth {
    name: String,
    path: String,
}

impl CookieAuth {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.cookie_name.clone(), config.cookie_path.clone())
    }

    /// Adds the session cookie for `token` to the jar.
    pub fn attach(&self, jar: CookieJar, token: String, expires_at: DateTime<Utc>) -> CookieJar {
        let expires = OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);

        jar.add(self.build(token, expires))
    }

    /// Reads the token from the request's cookies.
    ///
    /// A missing cookie and an empty value are both [`AuthError::NoToken`].
    pub fn extract(&self, jar: &CookieJar) -> Result<String, AuthError> {
        match jar.get(&self.name) {
            Some(cookie) if !cookie.value().is_empty() => Ok(cookie.value().to_string()),
            _ => Err(AuthError::NoToken),
        }
    }

    /// Overwrites the session cookie with an empty, already-expired one.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.build(String::new(), OffsetDateTime::UNIX_EPOCH))
    }

    fn build(&self, value: String, expires: OffsetDateTime) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .path(self.path.clone())
            .http_only(true)
            .same_site(SameSite::Strict)
            .expires(expires)
            .build()
    }
}
