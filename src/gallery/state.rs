use crate::models::project::{Category, Project};

/// Active category narrowing: everything, or one category exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(Self::All);
        }
        Category::parse(s).map(Self::Only)
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

/// Per-visitor filtering state for the project gallery.
///
/// `filtered` is always a full recomputation from `projects`: each
/// control change replaces it wholesale, nothing is patched in place.
/// The three controls compose with deliberate asymmetry, matching the
/// page's behavior:
///
/// - picking a category resets the tag filter and clears the search text;
/// - toggling a tag keeps the category and recomputes from the
///   category+tag pool alone, ignoring any text still in the search box;
/// - searching narrows the category+tag pool by substring.
#[derive(Debug, Clone)]
pub struct GalleryState {
    projects: Vec<Project>,
    pub filtered: Vec<Project>,
    pub category: CategoryFilter,
    pub tag: Option<String>,
    pub query: String,
}

impl GalleryState {
    pub fn new(projects: Vec<Project>) -> Self {
        let filtered = projects.clone();
        Self {
            projects,
            filtered,
            category: CategoryFilter::All,
            tag: None,
            query: String::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// First project with the given id. Seed data carries duplicate ids,
    /// so "first match" is the lookup rule.
    pub fn project(&self, id: f64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn category_pool(&self) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| self.category.matches(p))
            .cloned()
            .collect()
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.tag = None;
        self.query.clear();
        self.filtered = self.category_pool();
    }

    /// Radio-with-off tag filter: clicking the active tag deactivates it,
    /// clicking another replaces it. At most one tag is active at a time.
    pub fn toggle_tag(&mut self, tag: &str) {
        let pool = self.category_pool();
        if self.tag.as_deref() == Some(tag) {
            self.tag = None;
            self.filtered = pool;
        } else {
            self.tag = Some(tag.to_string());
            self.filtered = pool.into_iter().filter(|p| p.has_tag(tag)).collect();
        }
    }

    /// Free-text narrowing over the category+tag pool. The empty query
    /// leaves the pool unchanged.
    pub fn search(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
        let pool = self.category_pool();
        let pool: Vec<Project> = match self.tag.as_deref() {
            Some(tag) => pool.into_iter().filter(|p| p.has_tag(tag)).collect(),
            None => pool,
        };
        self.filtered = pool
            .into_iter()
            .filter(|p| p.matches_query(&self.query))
            .collect();
    }

    /// Distinct tags over the category pool, in first-seen order.
    pub fn available_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for project in self.projects.iter().filter(|p| self.category.matches(p)) {
            for tag in &project.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}

/// Stateless composition of all three predicates, used by the REST
/// listing endpoint: category-match, then tag membership, then
/// case-insensitive substring match.
pub fn compose(
    projects: &[Project],
    category: CategoryFilter,
    tag: Option<&str>,
    query: &str,
) -> Vec<Project> {
    let query = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| tag.is_none_or(|t| p.has_tag(t)))
        .filter(|p| p.matches_query(&query))
        .cloned()
        .collect()
}
