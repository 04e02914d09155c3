use serde::{Deserialize, Serialize};

use crate::gallery::modal::{ModalKind, ModalPhase};
use crate::models::blog::BlogPost;
use crate::models::project::{Category, Project};

// ── Client -> Server events ──

/// UI control events the browser shell sends over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// A category button was clicked ("all" or a category name).
    SelectCategory { category: String },
    /// A tag chip was clicked.
    ToggleTag { tag: String },
    /// The search box changed. Debounced server-side.
    Search { query: String },
    /// A project card was activated. `focus` is the id of the control
    /// focused at that moment, restored when the dialog closes.
    OpenProject {
        id: f64,
        #[serde(default)]
        focus: Option<String>,
    },
    /// A blog card was activated.
    OpenBlog {
        id: i64,
        #[serde(default)]
        focus: Option<String>,
    },
    /// The CV preview affordance was activated.
    PreviewDocument {
        #[serde(default)]
        focus: Option<String>,
    },
    /// A dialog's close control was clicked.
    CloseModal { modal: ModalKind },
    /// A click landed on a dialog backdrop (not its content).
    BackdropClick { modal: ModalKind },
    /// Escape was pressed.
    Escape,
    /// Tab or Shift+Tab while a dialog holds the focus trap.
    TabKey {
        #[serde(default)]
        shift: bool,
    },
}

// ── Server -> Client updates ──

/// A link rendered in the project dialog footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalLink {
    pub label: String,
    pub href: String,
    pub primary: bool,
}

/// Re-render instructions pushed to the browser shell.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerUpdate {
    /// The visible project set together with the control state it was
    /// computed from.
    Gallery {
        projects: Vec<Project>,
        category: String,
        tag: Option<String>,
        query: String,
    },
    /// Tag chips for the current category pool.
    TagRail { tags: Vec<String> },
    /// A dialog phase change.
    Modal { modal: ModalKind, phase: ModalPhase },
    /// Project dialog content.
    ProjectDetail {
        title: String,
        description: String,
        tags: Vec<String>,
        image: Option<String>,
        links: Vec<ModalLink>,
    },
    /// Blog dialog content.
    BlogDetail {
        id: i64,
        title: String,
        date: String,
        likes: i64,
        liked: bool,
        paragraphs: Vec<String>,
        admin: bool,
    },
    /// Document preview dialog content.
    DocumentPreview { path: String },
    /// Move focus to the given target.
    FocusMoved { target: String },
    /// Lock or release page scrolling behind a dialog.
    ScrollLock { locked: bool },
    /// The blog list changed; the shell should refetch it.
    BlogsInvalidated,
    /// A user-visible error.
    Error { message: String },
}

impl ServerUpdate {
    pub fn project_detail(project: &Project) -> Self {
        Self::ProjectDetail {
            title: project.title.clone(),
            description: project.detail_text().to_string(),
            tags: project.tags.clone(),
            image: project.image.clone(),
            links: project_links(project),
        }
    }

    pub fn blog_detail(post: &BlogPost, admin: bool) -> Self {
        Self::BlogDetail {
            id: post.id,
            title: post.title.clone(),
            date: post.long_date(),
            likes: post.likes,
            liked: post.liked,
            paragraphs: post.paragraphs(),
            admin,
        }
    }
}

/// Footer links for the project dialog, dependent on the category.
pub fn project_links(project: &Project) -> Vec<ModalLink> {
    let mut links = Vec::new();
    let mut push = |label: &str, href: &Option<String>, primary: bool| {
        if let Some(href) = href {
            links.push(ModalLink {
                label: label.to_string(),
                href: href.clone(),
                primary,
            });
        }
    };

    match project.category {
        Category::Youtube => {
            push("View Channel", &project.youtube, true);
            push("Watch Video", &project.demo, false);
        }
        Category::Github => {
            push("View Code", &project.github, true);
            push("Live Demo", &project.demo, false);
        }
        Category::Others => {
            push("View Code", &project.github, true);
            push("View Project", &project.demo, false);
        }
    }
    links
}

// ── Focus target layouts ──
//
// Ordered focusable targets per dialog, matching the rendered markup.

pub fn project_focusables(project: &Project) -> Vec<String> {
    let mut targets = vec!["modal-close".to_string()];
    for (i, _) in project_links(project).iter().enumerate() {
        targets.push(format!("modal-link-{i}"));
    }
    targets
}

pub fn blog_focusables(admin: bool) -> Vec<String> {
    let mut targets = vec!["modal-close".to_string(), "blog-like".to_string()];
    if admin {
        targets.push("blog-edit".to_string());
        targets.push("blog-delete".to_string());
    }
    targets
}

pub fn document_focusables() -> Vec<String> {
    vec![
        "pdf-close".to_string(),
        "pdf-print".to_string(),
        "pdf-download".to_string(),
    ]
}

/// The control the document dialog focuses on open (its print button, not
/// the close control).
pub const DOCUMENT_INITIAL_FOCUS: &str = "pdf-print";
/// The control the project and blog dialogs focus on open.
pub const MODAL_INITIAL_FOCUS: &str = "modal-close";
