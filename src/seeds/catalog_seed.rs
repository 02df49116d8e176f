use crate::database::CatalogStore;
use crate::models::{CatalogDocument, CatalogEntry};

/// Os 6 destinos do catálogo padrão, na ordem das páginas
const DEFAULT_DESTINATIONS: [&str; 6] = ["Bali", "Paris", "AnnaPurna", "Rome", "Inca", "Santorini"];

pub fn default_catalog() -> CatalogDocument {
    CatalogDocument::new(DEFAULT_DESTINATIONS.iter().map(|name| CatalogEntry::new(*name)).collect())
}

/// Seed do catálogo padrão.
/// Só insere se não existir um documento com exatamente o mesmo array.
/// Falhas são logadas; o servidor continua sem catálogo completo.
pub async fn seed_default_catalog(store: &dyn CatalogStore) {
    let catalog = default_catalog();

    match store.find_exact(&catalog).await {
        Ok(Some(_)) => {
            log::info!("📋 Catalog: destinations already exist — skipping seed");
        }
        Ok(None) => {
            log::info!("📋 Catalog: seeding {} default destinations...", catalog.destinations.len());
            match store.insert(&catalog).await {
                Ok(()) => log::info!("   ✅ Default catalog inserted"),
                Err(e) => log::error!("   ❌ Failed to seed default catalog: {}", e),
            }
        }
        Err(e) => {
            log::error!("❌ Catalog seed check failed: {}", e);
        }
    }
}
