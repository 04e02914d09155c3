use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::project::{Project, seed_projects};

const FETCH_CACHE_TTL: Duration = Duration::from_secs(300);

/// Loads the project list from the configured remote source, with a TTL
/// cache in front so every session start doesn't refetch. Any failure
/// (network, non-2xx, malformed body) falls back to the embedded seed
/// list without surfacing an error.
#[derive(Clone)]
pub struct ProjectCatalog {
    client: reqwest::Client,
    cache: Cache<String, Arc<Vec<Project>>>,
    source_url: Option<String>,
}

impl ProjectCatalog {
    pub fn new(source_url: Option<String>) -> Self {
        let cache = Cache::builder()
            .time_to_live(FETCH_CACHE_TTL)
            .max_capacity(1)
            .build();

        Self {
            client: reqwest::Client::new(),
            cache,
            source_url,
        }
    }

    /// The current project list. Never fails; the seed list is the floor.
    pub async fn projects(&self) -> Vec<Project> {
        let Some(url) = &self.source_url else {
            return seed_projects();
        };

        if let Some(cached) = self.cache.get(url).await {
            return cached.as_ref().clone();
        }

        match self.fetch(url).await {
            Ok(projects) => {
                debug!("loaded {} projects from {url}", projects.len());
                self.cache
                    .insert(url.clone(), Arc::new(projects.clone()))
                    .await;
                projects
            }
            Err(e) => {
                warn!("project source unavailable, using embedded defaults: {e}");
                seed_projects()
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Project>, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
