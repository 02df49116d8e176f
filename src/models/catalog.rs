use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Entrada embutida no array `destinations` do catálogo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct CatalogEntry {
    pub name: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Documento na collection "catalog"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub destinations: Vec<CatalogEntry>,
}

impl CatalogDocument {
    pub fn new(destinations: Vec<CatalogEntry>) -> Self {
        Self { id: None, destinations }
    }

    /// Whole-array equality, ignoring `_id`.
    pub fn same_entries(&self, other: &CatalogDocument) -> bool {
        self.destinations == other.destinations
    }
}

/// A catalog entry selected by a search, in scan order.
pub type MatchedDestination = CatalogEntry;
