use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::db::store;
use crate::models::blog::BlogList;

/// Load the blog snapshot. A missing entry or a snapshot that fails to
/// parse falls back to the seed set, never an error to the caller.
pub async fn load(db: &DatabaseConnection) -> Result<BlogList, DbErr> {
    match store::get(db, store::BLOGS_KEY).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(posts) => Ok(BlogList(posts)),
            Err(e) => {
                tracing::warn!("stored blog snapshot is malformed, reseeding: {e}");
                Ok(BlogList::seed(Utc::now()))
            }
        },
        None => Ok(BlogList::seed(Utc::now())),
    }
}

/// Persist the complete list as one snapshot, last-writer-wins.
pub async fn save(db: &DatabaseConnection, blogs: &BlogList) -> Result<(), DbErr> {
    let raw = serde_json::to_string(blogs)
        .map_err(|e| DbErr::Custom(format!("failed to serialize blog snapshot: {e}")))?;
    store::set(db, store::BLOGS_KEY, &raw).await
}
