use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card previews truncate content beyond this many characters.
pub const PREVIEW_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogError {
    #[error("Please add a title for your blog.")]
    EmptyTitle,
    #[error("Please write some content.")]
    EmptyContent,
    #[error("Blog post {0} not found")]
    NotFound(i64),
}

/// A single blog post. Ids are epoch milliseconds assigned at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub likes: i64,
    pub liked: bool,
}

impl BlogPost {
    /// Card preview: the first 150 characters, with an ellipsis when cut.
    pub fn preview(&self) -> String {
        if self.content.chars().count() > PREVIEW_LENGTH {
            let cut: String = self.content.chars().take(PREVIEW_LENGTH).collect();
            format!("{cut}...")
        } else {
            self.content.clone()
        }
    }

    /// Content split into paragraphs on blank lines.
    pub fn paragraphs(&self) -> Vec<String> {
        self.content.split("\n\n").map(str::to_string).collect()
    }

    /// Short date for cards, e.g. "Aug 5, 2026".
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Long date for the detail view, e.g. "August 5, 2026".
    pub fn long_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlog {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// The full set of blog posts.
///
/// This is the unit of persistence: the whole list is serialized wholesale
/// under one store key after every mutation, last-writer-wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogList(pub Vec<BlogPost>);

impl BlogList {
    /// The fixed seed set, used when no snapshot exists or it fails to parse.
    pub fn seed(now: DateTime<Utc>) -> Self {
        Self(vec![
            BlogPost {
                id: now.timestamp_millis() - 3000,
                title: "Why I Love CSS Grid".to_string(),
                content: "Just learned CSS Grid and it's absolutely life-changing! The ability to create complex layouts with just a few lines of code is incredible. I spent years fighting with floats and flexbox for 2D layouts, but Grid makes it so intuitive.\n\nThe grid-template-areas property is particularly amazing - you can literally draw your layout in ASCII art and CSS will make it happen. If you haven't tried it yet, I highly recommend diving in!".to_string(),
                date: now - Duration::days(3),
                likes: 5,
                liked: false,
            },
            BlogPost {
                id: now.timestamp_millis() - 2000,
                title: "The Art of Debugging".to_string(),
                content: "Here's something I wish I learned earlier: sometimes the best debugging technique is to step away from the computer.\n\nI was stuck on a bug for 3 hours yesterday. Went for a walk, came back, and solved it in 5 minutes. Your brain continues processing problems in the background, even when you're not actively thinking about them.\n\nSo next time you're stuck, give yourself permission to take a break. It's not procrastination - it's debugging.".to_string(),
                date: now - Duration::days(2),
                likes: 12,
                liked: false,
            },
        ])
    }

    pub fn get(&self, id: i64) -> Option<&BlogPost> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Posts sorted by date descending. Recomputed on every call.
    pub fn sorted(&self) -> Vec<BlogPost> {
        let mut posts = self.0.clone();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Create a new post at the head of the list. Both fields must be
    /// non-empty after trimming.
    pub fn add(
        &mut self,
        now: DateTime<Utc>,
        title: &str,
        content: &str,
    ) -> Result<&BlogPost, BlogError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() {
            return Err(BlogError::EmptyTitle);
        }
        if content.is_empty() {
            return Err(BlogError::EmptyContent);
        }

        let post = BlogPost {
            id: now.timestamp_millis(),
            title: title.to_string(),
            content: content.to_string(),
            date: now,
            likes: 0,
            liked: false,
        };
        self.0.insert(0, post);
        Ok(&self.0[0])
    }

    /// Apply edits to an existing post. Only non-empty trimmed values are
    /// applied; a `None` or blank field leaves the current value in place.
    pub fn edit(
        &mut self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<&BlogPost, BlogError> {
        let post = self
            .0
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BlogError::NotFound(id))?;

        if let Some(title) = title {
            let title = title.trim();
            if !title.is_empty() {
                post.title = title.to_string();
            }
        }
        if let Some(content) = content {
            let content = content.trim();
            if !content.is_empty() {
                post.content = content.to_string();
            }
        }
        Ok(post)
    }

    pub fn remove(&mut self, id: i64) -> Result<(), BlogError> {
        let len = self.0.len();
        self.0.retain(|p| p.id != id);
        if self.0.len() == len {
            return Err(BlogError::NotFound(id));
        }
        Ok(())
    }

    /// Flip the liked flag and move the counter in lockstep, clamped at 0.
    pub fn toggle_like(&mut self, id: i64) -> Result<&BlogPost, BlogError> {
        let post = self
            .0
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(BlogError::NotFound(id))?;

        post.liked = !post.liked;
        let delta = if post.liked { 1 } else { -1 };
        post.likes = (post.likes + delta).max(0);
        Ok(post)
    }
}
