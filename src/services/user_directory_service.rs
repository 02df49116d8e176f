use bcrypt::{hash, verify};

use crate::config::PasswordStorage;
use crate::database::UserStore;
use crate::models::UserRecord;
use crate::utils::ServiceError;

// Exact-match lookup
pub async fn find_user(
    store: &dyn UserStore,
    username: &str,
) -> Result<Option<UserRecord>, ServiceError> {
    Ok(store.find_by_username(username).await?)
}

// User registration
pub async fn register(
    store: &dyn UserStore,
    storage: PasswordStorage,
    username: &str,
    password: &str,
) -> Result<UserRecord, ServiceError> {
    if username.is_empty() || password.is_empty() {
        return Err(ServiceError::Validation(
            "Both username and password are required".to_string(),
        ));
    }

    if find_user(store, username).await?.is_some() {
        return Err(ServiceError::AlreadyExists);
    }

    let stored_password = match storage {
        PasswordStorage::Bcrypt { cost } => hash(password, cost)
            .map_err(|e| ServiceError::Backend(format!("Failed to hash password: {}", e)))?,
        PasswordStorage::Plaintext => password.to_string(),
    };

    let record = UserRecord::new(username, stored_password);

    // A concurrent registration can still win the unique index; that
    // surfaces as StoreError::Duplicate -> AlreadyExists.
    store.insert(&record).await?;

    log::info!("✅ User registered successfully: {}", username);
    Ok(record)
}

// User login
pub async fn authenticate(
    store: &dyn UserStore,
    storage: PasswordStorage,
    username: &str,
    password: &str,
) -> Result<UserRecord, ServiceError> {
    if username.is_empty() || password.is_empty() {
        return Err(ServiceError::Validation(
            "Please fill in both username and password".to_string(),
        ));
    }

    match storage {
        PasswordStorage::Plaintext => store
            .find_by_credentials(username, password)
            .await?
            .ok_or(ServiceError::InvalidCredentials),
        PasswordStorage::Bcrypt { .. } => {
            let user = find_user(store, username)
                .await?
                .ok_or(ServiceError::InvalidCredentials)?;

            match verify(password, &user.password) {
                Ok(true) => Ok(user),
                Ok(false) => Err(ServiceError::InvalidCredentials),
                Err(e) => {
                    // e.g. a record written before hashing was enabled
                    log::warn!("⚠️ Unreadable password hash for {}: {}", username, e);
                    Err(ServiceError::InvalidCredentials)
                }
            }
        }
    }
}
