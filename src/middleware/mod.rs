//! Request authentication.
//!
//! 1. [`auth::require_auth`] reads the session cookie and authorizes the token
//! 2. On success the claims are attached to the request as [`auth::Identity`]
//! 3. Handlers take [`auth::AuthUser`] to read them back

pub mod auth;
