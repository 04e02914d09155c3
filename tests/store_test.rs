//! Integration tests for the key/value store, the blog snapshot, and the
//! admin gate, against an in-memory SQLite database. No running server
//! is needed.
//!
//! Run with: `cargo test --test store_test`

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use portfolio_backend::auth::admin;
use portfolio_backend::db::{blogs as blog_db, store};
use portfolio_backend::models::blog::BlogList;

async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    db
}

#[tokio::test]
async fn test_store_set_get_overwrite_remove() {
    let db = test_db().await;

    assert_eq!(store::get(&db, "missing").await.unwrap(), None);

    store::set(&db, "k", "first").await.unwrap();
    assert_eq!(store::get(&db, "k").await.unwrap().as_deref(), Some("first"));

    store::set(&db, "k", "second").await.unwrap();
    assert_eq!(
        store::get(&db, "k").await.unwrap().as_deref(),
        Some("second")
    );

    store::remove(&db, "k").await.unwrap();
    assert_eq!(store::get(&db, "k").await.unwrap(), None);

    // Removing a missing key is fine.
    store::remove(&db, "k").await.unwrap();
}

#[tokio::test]
async fn test_missing_snapshot_falls_back_to_seeds() {
    let db = test_db().await;

    let blogs = blog_db::load(&db).await.unwrap();
    assert_eq!(blogs.0.len(), 2);
    assert_eq!(blogs.0[0].title, "Why I Love CSS Grid");
    assert_eq!(blogs.0[1].title, "The Art of Debugging");
}

#[tokio::test]
async fn test_malformed_snapshot_falls_back_to_seeds() {
    let db = test_db().await;

    store::set(&db, store::BLOGS_KEY, "{not json at all")
        .await
        .unwrap();

    let blogs = blog_db::load(&db).await.unwrap();
    assert_eq!(blogs.0.len(), 2);
}

#[tokio::test]
async fn test_snapshot_round_trips_through_the_store() {
    let db = test_db().await;

    let mut blogs = BlogList::seed(Utc::now());
    blogs.add(Utc::now(), "A third post", "With content").unwrap();
    blogs.toggle_like(blogs.0[1].id).unwrap();
    blog_db::save(&db, &blogs).await.unwrap();

    let loaded = blog_db::load(&db).await.unwrap();
    assert_eq!(loaded, blogs);
}

#[tokio::test]
async fn test_save_replaces_the_whole_snapshot() {
    let db = test_db().await;

    let mut first = BlogList::default();
    first.add(Utc::now(), "One", "one").unwrap();
    blog_db::save(&db, &first).await.unwrap();

    // A later save wins wholesale; nothing merges.
    let second = BlogList::default();
    blog_db::save(&db, &second).await.unwrap();

    let loaded = blog_db::load(&db).await.unwrap();
    assert!(loaded.0.is_empty());
}

#[tokio::test]
async fn test_admin_gate_flow() {
    let db = test_db().await;

    assert!(!admin::password_set(&db).await.unwrap());
    assert!(!admin::is_admin(&db).await.unwrap());

    // No password yet: any attempt fails verbatim comparison.
    assert!(!admin::verify_password(&db, "guess").await.unwrap());

    admin::set_password(&db, "hunter2").await.unwrap();
    assert!(admin::password_set(&db).await.unwrap());
    assert!(!admin::verify_password(&db, "Hunter2").await.unwrap());
    assert!(admin::verify_password(&db, "hunter2").await.unwrap());

    admin::set_authenticated(&db, true).await.unwrap();
    assert!(admin::is_admin(&db).await.unwrap());

    admin::set_authenticated(&db, false).await.unwrap();
    assert!(!admin::is_admin(&db).await.unwrap());

    // Logging out clears the flag, not the password.
    assert!(admin::password_set(&db).await.unwrap());
}
