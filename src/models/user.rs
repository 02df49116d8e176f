use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Documento na collection "users"
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub username: String,  // unique key
    pub password: String,  // bcrypt hash or verbatim, see PasswordStorage
    #[serde(default)]
    pub destinations: Vec<String>,
}

impl UserRecord {
    /// Fresh record with an empty want-to-go list.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password.into(),
            destinations: Vec::new(),
        }
    }

    pub fn has_destination(&self, name: &str) -> bool {
        self.destinations.iter().any(|d| d == name)
    }
}
