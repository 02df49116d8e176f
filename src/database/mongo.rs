use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{self, doc};

use super::store::{CatalogStore, SetAdd, UserStore};
use super::{MongoDB, CATALOG_COLLECTION, USERS_COLLECTION};
use crate::models::{CatalogDocument, UserRecord};
use crate::utils::StoreError;

#[async_trait]
impl UserStore for MongoDB {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let collection = self.collection::<UserRecord>(USERS_COLLECTION);
        Ok(collection.find_one(doc! { "username": username }).await?)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let collection = self.collection::<UserRecord>(USERS_COLLECTION);
        Ok(collection
            .find_one(doc! { "username": username, "password": password })
            .await?)
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), StoreError> {
        let collection = self.collection::<UserRecord>(USERS_COLLECTION);
        collection.insert_one(record).await?;
        Ok(())
    }

    async fn add_destination(&self, username: &str, name: &str) -> Result<SetAdd, StoreError> {
        let collection = self.collection::<UserRecord>(USERS_COLLECTION);
        let result = collection
            .update_one(
                doc! { "username": username },
                doc! { "$addToSet": { "destinations": name } },
            )
            .await?;

        Ok(match (result.matched_count, result.modified_count) {
            (0, _) => SetAdd::NoSuchUser,
            (_, 0) => SetAdd::Unchanged,
            _ => SetAdd::Added,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.health_check().await {
            Ok(())
        } else {
            Err(StoreError::Backend("MongoDB unreachable".to_string()))
        }
    }
}

#[async_trait]
impl CatalogStore for MongoDB {
    async fn find_exact(&self, document: &CatalogDocument) -> Result<Option<CatalogDocument>, StoreError> {
        let collection = self.collection::<CatalogDocument>(CATALOG_COLLECTION);
        let destinations = bson::to_bson(&document.destinations)
            .map_err(|e| StoreError::Backend(format!("Failed to encode catalog: {}", e)))?;

        Ok(collection.find_one(doc! { "destinations": destinations }).await?)
    }

    async fn insert(&self, document: &CatalogDocument) -> Result<(), StoreError> {
        let collection = self.collection::<CatalogDocument>(CATALOG_COLLECTION);
        let result = collection.insert_one(document).await?;
        log::info!("📋 Catalog document inserted with _id: {}", result.inserted_id);
        Ok(())
    }

    async fn find_matching(&self, pattern: &str) -> Result<Vec<CatalogDocument>, StoreError> {
        let collection = self.collection::<CatalogDocument>(CATALOG_COLLECTION);

        let cursor = collection
            .find(doc! { "destinations.name": { "$regex": pattern, "$options": "i" } })
            .projection(doc! { "destinations": 1, "_id": 0 })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect::<Vec<CatalogDocument>>().await?)
    }
}
