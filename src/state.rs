use std::sync::Arc;

use crate::config::{AppConfig, PasswordStorage, SessionConfig, StoreBackend};
use crate::database::{CatalogStore, MemoryCatalogStore, MemoryUserStore, MongoDB, UserStore};

/// Shared handles passed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub password_storage: PasswordStorage,
    pub session: SessionConfig,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let (users, catalog): (Arc<dyn UserStore>, Arc<dyn CatalogStore>) = match config.store_backend {
            StoreBackend::MongoDB => {
                let db = Arc::new(MongoDB::new(&config.database_url).await?);
                log::info!("✅ MongoDB connected successfully");
                (db.clone() as Arc<dyn UserStore>, db as Arc<dyn CatalogStore>)
            }
            StoreBackend::Memory => {
                log::warn!("⚠️  Using in-memory store; data is lost on restart");
                (
                    Arc::new(MemoryUserStore::new()) as Arc<dyn UserStore>,
                    Arc::new(MemoryCatalogStore::new()) as Arc<dyn CatalogStore>,
                )
            }
        };

        Ok(Self::with_stores(users, catalog, config))
    }

    pub fn with_stores(
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn CatalogStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            users,
            catalog,
            password_storage: config.password_storage,
            session: config.session.clone(),
        }
    }
}
