use async_trait::async_trait;
use regex::RegexBuilder;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::store::{CatalogStore, SetAdd, UserStore};
use crate::models::{CatalogDocument, UserRecord};
use crate::utils::StoreError;

/// In-process user store (STORE_BACKEND=memory and tests).
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .get(username)
            .filter(|user| user.password == password)
            .cloned())
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&record.username) {
            return Err(StoreError::Duplicate);
        }
        users.insert(record.username.clone(), record.clone());
        Ok(())
    }

    async fn add_destination(&self, username: &str, name: &str) -> Result<SetAdd, StoreError> {
        // check-and-push under one write lock, same guarantee as $addToSet
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(username) else {
            return Ok(SetAdd::NoSuchUser);
        };
        if user.has_destination(name) {
            return Ok(SetAdd::Unchanged);
        }
        user.destinations.push(name.to_string());
        Ok(SetAdd::Added)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-process catalog store.
#[derive(Default)]
pub struct MemoryCatalogStore {
    documents: RwLock<Vec<CatalogDocument>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn find_exact(&self, document: &CatalogDocument) -> Result<Option<CatalogDocument>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.same_entries(document)).cloned())
    }

    async fn insert(&self, document: &CatalogDocument) -> Result<(), StoreError> {
        self.documents.write().await.push(document.clone());
        Ok(())
    }

    async fn find_matching(&self, pattern: &str) -> Result<Vec<CatalogDocument>, StoreError> {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::Backend(format!("invalid pattern: {}", e)))?;

        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| d.destinations.iter().any(|entry| re.is_match(&entry.name)))
            .cloned()
            .collect())
    }
}
