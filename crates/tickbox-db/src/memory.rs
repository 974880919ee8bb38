//! In-memory [`UserStore`].
//!
//! Accounts are kept in a [`HashMap`] keyed by email behind a
//! [`parking_lot::RwLock`]. Clones share the same data. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tickbox_models::User;
use uuid::Uuid;

use crate::store::{StoreError, UserStore};

#[derive(Clone, Debug, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write();
        if users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().get(email).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|_, user| user.id != id);
        if users.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
