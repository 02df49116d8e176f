use crate::database::{SetAdd, UserStore};
use crate::utils::ServiceError;

/// Adds `name` to the user's want-to-go list.
///
/// `Ok(())` means the name was added. A name already in the list yields
/// `AlreadyPresent` and nothing is written. The membership pre-check is
/// not atomic with the write; the store's set-add keeps the list
/// duplicate-free when two requests race, and the loser also reports
/// `AlreadyPresent`.
pub async fn add_destination(
    store: &dyn UserStore,
    username: Option<&str>,
    name: &str,
) -> Result<(), ServiceError> {
    let username = username.ok_or(ServiceError::NotLoggedIn)?;

    if name.is_empty() {
        return Err(ServiceError::Validation("Destination is required".to_string()));
    }

    let user = store
        .find_by_username(username)
        .await?
        .ok_or(ServiceError::NotLoggedIn)?;

    if user.has_destination(name) {
        return Err(ServiceError::AlreadyPresent);
    }

    match store.add_destination(username, name).await? {
        SetAdd::Added => {
            log::info!("✅ {} added to want-to-go list of {}", name, username);
            Ok(())
        }
        SetAdd::Unchanged => Err(ServiceError::AlreadyPresent),
        SetAdd::NoSuchUser => Err(ServiceError::NotLoggedIn),
    }
}

/// The user's list in storage order; empty when there is none.
pub async fn list_destinations(
    store: &dyn UserStore,
    username: Option<&str>,
) -> Result<Vec<String>, ServiceError> {
    let username = username.ok_or(ServiceError::NotLoggedIn)?;

    Ok(store
        .find_by_username(username)
        .await?
        .map(|user| user.destinations)
        .unwrap_or_default())
}
