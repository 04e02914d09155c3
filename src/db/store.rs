use sea_orm::*;

use crate::models::store;

/// Store key for the serialized blog post array.
pub const BLOGS_KEY: &str = "portfolio-blogs";
/// Store key for the plaintext admin password.
pub const ADMIN_PASS_KEY: &str = "portfolio-admin-pass";
/// Store key for the admin session flag.
pub const ADMIN_AUTH_KEY: &str = "portfolio-admin-auth";

/// Read a value from the key/value store.
pub async fn get(db: &DatabaseConnection, key: &str) -> Result<Option<String>, DbErr> {
    Ok(store::Entity::find_by_id(key)
        .one(db)
        .await?
        .map(|entry| entry.value))
}

/// Write a value, replacing any existing entry under the same key.
pub async fn set(db: &DatabaseConnection, key: &str, value: &str) -> Result<(), DbErr> {
    match store::Entity::find_by_id(key).one(db).await? {
        Some(existing) => {
            let mut active: store::ActiveModel = existing.into();
            active.value = Set(value.to_string());
            active.update(db).await?;
        }
        None => {
            let entry = store::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
            };
            entry.insert(db).await?;
        }
    }
    Ok(())
}

/// Delete an entry. Removing a missing key is a no-op.
pub async fn remove(db: &DatabaseConnection, key: &str) -> Result<(), DbErr> {
    store::Entity::delete_by_id(key).exec(db).await?;
    Ok(())
}
