//! Tests for the blog list: authoring rules, like toggling, ordering,
//! and the derived card/detail projections.
//!
//! Run with: `cargo test --test blog_test`

use chrono::{Duration, TimeZone, Utc};
use portfolio_backend::models::blog::{BlogError, BlogList, BlogPost};

fn post(id: i64, title: &str, days_ago: i64, likes: i64) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        content: format!("{title} content"),
        date: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap() - Duration::days(days_ago),
        likes,
        liked: false,
    }
}

#[test]
fn test_add_with_empty_title_is_rejected_and_list_unchanged() {
    let mut blogs = BlogList(vec![post(1, "Existing", 1, 0)]);
    let before = blogs.clone();

    assert_eq!(
        blogs.add(Utc::now(), "", "some content"),
        Err(BlogError::EmptyTitle)
    );
    assert_eq!(
        blogs.add(Utc::now(), "   ", "some content"),
        Err(BlogError::EmptyTitle)
    );
    assert_eq!(blogs, before);
}

#[test]
fn test_add_with_empty_content_is_rejected() {
    let mut blogs = BlogList::default();
    assert_eq!(
        blogs.add(Utc::now(), "A title", "\n\t "),
        Err(BlogError::EmptyContent)
    );
    assert!(blogs.0.is_empty());
}

#[test]
fn test_add_prepends_a_trimmed_post_with_millisecond_id() {
    let mut blogs = BlogList(vec![post(1, "Old", 5, 3)]);
    let now = Utc.with_ymd_and_hms(2026, 8, 5, 9, 30, 0).unwrap();

    let created = blogs
        .add(now, "  Fresh thoughts  ", "  body text  ")
        .expect("valid post")
        .clone();

    assert_eq!(created.id, now.timestamp_millis());
    assert_eq!(created.title, "Fresh thoughts");
    assert_eq!(created.content, "body text");
    assert_eq!(created.likes, 0);
    assert!(!created.liked);
    assert_eq!(blogs.0[0], created);
    assert_eq!(blogs.0.len(), 2);
}

#[test]
fn test_like_then_unlike_round_trips() {
    let mut blogs = BlogList(vec![post(1, "Post", 1, 12)]);

    let liked = blogs.toggle_like(1).unwrap();
    assert!(liked.liked);
    assert_eq!(liked.likes, 13);

    let unliked = blogs.toggle_like(1).unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.likes, 12);
}

#[test]
fn test_unlike_never_drives_likes_negative() {
    let mut blogs = BlogList(vec![BlogPost {
        liked: true,
        ..post(1, "Post", 1, 0)
    }]);

    let unliked = blogs.toggle_like(1).unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.likes, 0);
}

#[test]
fn test_toggle_like_on_missing_post() {
    let mut blogs = BlogList::default();
    assert_eq!(blogs.toggle_like(42), Err(BlogError::NotFound(42)));
}

#[test]
fn test_edit_applies_only_nonempty_trimmed_fields() {
    let mut blogs = BlogList(vec![post(1, "Original", 1, 0)]);

    let edited = blogs.edit(1, Some("  New Title "), Some("")).unwrap();
    assert_eq!(edited.title, "New Title");
    assert_eq!(edited.content, "Original content");

    let edited = blogs.edit(1, None, Some("New body")).unwrap();
    assert_eq!(edited.title, "New Title");
    assert_eq!(edited.content, "New body");
}

#[test]
fn test_edit_missing_post() {
    let mut blogs = BlogList::default();
    assert_eq!(blogs.edit(7, Some("x"), None), Err(BlogError::NotFound(7)));
}

#[test]
fn test_remove_by_id() {
    let mut blogs = BlogList(vec![post(1, "Keep", 1, 0), post(2, "Drop", 2, 0)]);

    blogs.remove(2).unwrap();
    assert_eq!(blogs.0.len(), 1);
    assert_eq!(blogs.0[0].id, 1);

    assert_eq!(blogs.remove(2), Err(BlogError::NotFound(2)));
}

#[test]
fn test_sorted_returns_newest_first_without_mutating() {
    let blogs = BlogList(vec![
        post(1, "Oldest", 10, 0),
        post(2, "Newest", 1, 0),
        post(3, "Middle", 5, 0),
    ]);

    let sorted: Vec<i64> = blogs.sorted().iter().map(|p| p.id).collect();
    assert_eq!(sorted, vec![2, 3, 1]);

    // The stored order is untouched; sorting is a per-render projection.
    let stored: Vec<i64> = blogs.0.iter().map(|p| p.id).collect();
    assert_eq!(stored, vec![1, 2, 3]);
}

#[test]
fn test_preview_truncates_long_content() {
    let long = "x".repeat(200);
    let p = BlogPost {
        content: long,
        ..post(1, "Post", 1, 0)
    };

    let preview = p.preview();
    assert_eq!(preview.chars().count(), 153);
    assert!(preview.ends_with("..."));

    let short = BlogPost {
        content: "brief".to_string(),
        ..post(2, "Post", 1, 0)
    };
    assert_eq!(short.preview(), "brief");
}

#[test]
fn test_paragraphs_split_on_blank_lines() {
    let p = BlogPost {
        content: "First paragraph.\n\nSecond one.\nStill second.\n\nThird.".to_string(),
        ..post(1, "Post", 1, 0)
    };

    assert_eq!(
        p.paragraphs(),
        vec!["First paragraph.", "Second one.\nStill second.", "Third."]
    );
}

#[test]
fn test_date_projections() {
    let p = BlogPost {
        date: Utc.with_ymd_and_hms(2026, 8, 5, 9, 0, 0).unwrap(),
        ..post(1, "Post", 1, 0)
    };

    assert_eq!(p.short_date(), "Aug 5, 2026");
    assert_eq!(p.long_date(), "August 5, 2026");
}

#[test]
fn test_seed_set_has_two_unliked_posts() {
    let now = Utc::now();
    let seeds = BlogList::seed(now);

    assert_eq!(seeds.0.len(), 2);
    assert!(seeds.0.iter().all(|p| !p.liked));
    assert!(seeds.0.iter().all(|p| p.date < now));

    // The stored seed order is oldest-first; rendering sorts it.
    let sorted: Vec<i64> = seeds.sorted().iter().map(|p| p.id).collect();
    assert_eq!(sorted, vec![seeds.0[1].id, seeds.0[0].id]);
}
