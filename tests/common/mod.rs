#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
// bcrypt keeps its MIN_COST private; mirror its value (4).
const MIN_COST: u32 = 4;
use http_body_util::BodyExt;
use serde_json::Value;
use tickbox::modules::auth::AuthService;
use tickbox::router::init_router;
use tickbox::state::AppState;
use tickbox_auth::TokenSigner;
use tickbox_config::AuthConfig;
use tickbox_core::hash_password_with_cost;
use tickbox_db::{InMemoryUserStore, UserStore};
use tickbox_models::User;

pub const SECRET: &str = "test-secret-key-at-least-32-characters-long";
pub const COOKIE_NAME: &str = "tickbox_session";

pub fn test_config() -> AuthConfig {
    let mut config = AuthConfig::with_secret(SECRET).unwrap();
    config.password_hash_cost = MIN_COST;
    config
}

pub fn signer() -> TokenSigner {
    TokenSigner::from_secret(SECRET)
}

pub async fn seed_user(store: &InMemoryUserStore, email: &str, password: &str) -> User {
    let user = User::new(email, hash_password_with_cost(password, MIN_COST).unwrap());
    store.create(&user).await.unwrap();
    user
}

pub fn auth_service(store: &InMemoryUserStore) -> AuthService {
    AuthService::new(Arc::new(store.clone()), signer(), MIN_COST).unwrap()
}

pub fn test_app() -> (Router, InMemoryUserStore) {
    let store = InMemoryUserStore::new();
    let state = AppState::new(&test_config(), Arc::new(store.clone())).unwrap();
    (init_router(state), store)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn cookie_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` pair of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{COOKIE_NAME}=")))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn set_cookie_header(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
