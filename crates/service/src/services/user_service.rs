use models::user::{NewUser, User, UserPatch};

use crate::entity_store::EntityStore;
use crate::errors::ServiceError;

/// Look up a user by wallet address.
pub async fn get_user_by_address(store: &EntityStore, address: &str) -> Result<User, ServiceError> {
    store
        .users
        .find_first(|u| !u.address.is_empty() && u.address == address)
        .await
        .ok_or_else(|| ServiceError::not_found("user"))
}

/// Create a user. Address and email are unique across users.
pub async fn create_user(store: &EntityStore, input: NewUser) -> Result<User, ServiceError> {
    input.validate()?;
    store.users.append(input.into_record()).await
}

/// Partially update the user with `address`; only name, email, type and
/// balance are writable.
pub async fn update_user(store: &EntityStore, address: &str, patch: UserPatch) -> Result<User, ServiceError> {
    patch.validate()?;
    // Ids never change and users are never removed, so the id found here
    // still names the same user inside the update.
    let user = get_user_by_address(store, address).await?;
    store
        .users
        .update(&user.id, |u| {
            u.apply(patch);
            Ok(())
        })
        .await
}
