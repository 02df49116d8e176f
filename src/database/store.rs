use async_trait::async_trait;

use crate::models::{CatalogDocument, UserRecord};
use crate::utils::StoreError;

/// Result of a set-add on a user's `destinations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetAdd {
    Added,
    /// Name was already in the set; nothing written
    Unchanged,
    NoSuchUser,
}

/// Persistence for user records (collection "users").
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Field-equality match on both username and password.
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, StoreError>;

    async fn insert(&self, record: &UserRecord) -> Result<(), StoreError>;

    /// Idempotent set-add; concurrent calls never leave duplicates.
    async fn add_destination(&self, username: &str, name: &str) -> Result<SetAdd, StoreError>;

    /// Cheap reachability probe for `/health`.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Persistence for catalog documents (collection "catalog").
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Document whose `destinations` array equals the given one exactly.
    async fn find_exact(&self, document: &CatalogDocument) -> Result<Option<CatalogDocument>, StoreError>;

    async fn insert(&self, document: &CatalogDocument) -> Result<(), StoreError>;

    /// Documents with at least one entry name matching `pattern`
    /// (case-insensitive regex), in insertion order.
    async fn find_matching(&self, pattern: &str) -> Result<Vec<CatalogDocument>, StoreError>;
}
