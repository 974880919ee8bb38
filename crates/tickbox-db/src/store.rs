//! The user store collaborator.

use async_trait::async_trait;
use thiserror::Error;
use tickbox_models::User;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a user with this email already exists")]
    DuplicateEmail,

    #[error("user not found")]
    NotFound,

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// Lookup and lifecycle operations on stored accounts.
///
/// Consistency across concurrent requests is the implementation's concern.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), StoreError>;

    /// `Ok(None)` when no account has this email.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::NotFound`] when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
