//! Single-owner admin gate: a plaintext password and a boolean session
//! flag, both kept in the key/value store. A deliberate toy trust model
//! for a personal site, not a real authentication scheme.

use sea_orm::{DatabaseConnection, DbErr};

use crate::db::store;

/// Whether the admin session flag is currently set.
pub async fn is_admin(db: &DatabaseConnection) -> Result<bool, DbErr> {
    Ok(store::get(db, store::ADMIN_AUTH_KEY).await?.as_deref() == Some("true"))
}

/// Set or clear the admin session flag. Clearing removes the entry rather
/// than storing `false`.
pub async fn set_authenticated(db: &DatabaseConnection, value: bool) -> Result<(), DbErr> {
    if value {
        store::set(db, store::ADMIN_AUTH_KEY, "true").await
    } else {
        store::remove(db, store::ADMIN_AUTH_KEY).await
    }
}

/// Whether an admin password has been created yet.
pub async fn password_set(db: &DatabaseConnection) -> Result<bool, DbErr> {
    Ok(store::get(db, store::ADMIN_PASS_KEY).await?.is_some())
}

pub async fn set_password(db: &DatabaseConnection, password: &str) -> Result<(), DbErr> {
    store::set(db, store::ADMIN_PASS_KEY, password).await
}

/// Verbatim comparison against the stored password. `false` when no
/// password has been created.
pub async fn verify_password(db: &DatabaseConnection, attempt: &str) -> Result<bool, DbErr> {
    Ok(store::get(db, store::ADMIN_PASS_KEY).await?.as_deref() == Some(attempt))
}
