use std::sync::Arc;

use tickbox_auth::TokenSigner;
use tickbox_config::AuthConfig;
use tickbox_core::AppError;
use tickbox_db::UserStore;

use crate::modules::auth::service::AuthService;
use crate::modules::users::service::UsersService;
use crate::utils::CookieAuth;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UsersService>,
    pub cookies: CookieAuth,
}

impl AppState {
    pub fn new(config: &AuthConfig, users: Arc<dyn UserStore>) -> Result<Self, AppError> {
        let signer = TokenSigner::from_secret(config.secret.as_bytes());
        let auth = AuthService::new(users.clone(), signer, config.password_hash_cost)?;

        Ok(Self {
            auth: Arc::new(auth),
            users: Arc::new(UsersService::new(users, config.password_hash_cost)),
            cookies: CookieAuth::from_config(config),
        })
    }
}
