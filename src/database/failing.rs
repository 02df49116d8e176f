//! Stores whose every call fails with a backend error, for exercising
//! the error paths of services and handlers.

use async_trait::async_trait;

use super::store::{CatalogStore, SetAdd, UserStore};
use crate::models::{CatalogDocument, UserRecord};
use crate::utils::StoreError;

fn unreachable_store() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}

#[derive(Default)]
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn find_by_username(&self, _: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(unreachable_store())
    }

    async fn find_by_credentials(&self, _: &str, _: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(unreachable_store())
    }

    async fn insert(&self, _: &UserRecord) -> Result<(), StoreError> {
        Err(unreachable_store())
    }

    async fn add_destination(&self, _: &str, _: &str) -> Result<SetAdd, StoreError> {
        Err(unreachable_store())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable_store())
    }
}

#[derive(Default)]
pub struct FailingCatalogStore;

#[async_trait]
impl CatalogStore for FailingCatalogStore {
    async fn find_exact(&self, _: &CatalogDocument) -> Result<Option<CatalogDocument>, StoreError> {
        Err(unreachable_store())
    }

    async fn insert(&self, _: &CatalogDocument) -> Result<(), StoreError> {
        Err(unreachable_store())
    }

    async fn find_matching(&self, _: &str) -> Result<Vec<CatalogDocument>, StoreError> {
        Err(unreachable_store())
    }
}
