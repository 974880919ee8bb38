use std::sync::Arc;

use anyhow::anyhow;
use tickbox_core::{AppError, hash_password_with_cost};
use tickbox_db::{StoreError, UserStore};
use tickbox_models::User;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct UsersService {
    users: Arc<dyn UserStore>,
    password_hash_cost: u32,
}

impl UsersService {
    pub fn new(users: Arc<dyn UserStore>, password_hash_cost: u32) -> Self {
        Self {
            users,
            password_hash_cost,
        }
    }

    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        let password = password.to_owned();
        let cost = self.password_hash_cost;
        let password_hash =
            tokio::task::spawn_blocking(move || hash_password_with_cost(&password, cost))
                .await??;

        let user = User::new(email, password_hash);
        self.users.create(&user).await.map_err(store_error)?;

        info!(user_id = %user.id, "registered user");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.users.delete(id).await.map_err(store_error)?;
        info!(user_id = %id, "deleted user");
        Ok(())
    }
}

fn store_error(err: StoreError) -> AppError {
    match err {
        StoreError::DuplicateEmail => AppError::conflict(anyhow!("email is already registered")),
        StoreError::NotFound => AppError::not_found(anyhow!("user not found")),
        StoreError::Database(e) => AppError::internal(e),
    }
}
