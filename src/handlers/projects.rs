use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;

use crate::catalog::ProjectCatalog;
use crate::gallery::state::{self, CategoryFilter};

/// Query params for the project listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub q: Option<String>,
}

/// GET /api/projects?category=&tag=&q= — the full list, narrowed by the
/// composed category/tag/query predicates.
pub async fn get_projects(
    catalog: web::Data<ProjectCatalog>,
    query: web::Query<ProjectsQuery>,
) -> impl Responder {
    let category = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => match CategoryFilter::parse(raw) {
            Some(filter) => filter,
            None => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": format!("Unknown category: {raw}"),
                }));
            }
        },
    };

    let projects = catalog.projects().await;
    let filtered = state::compose(
        &projects,
        category,
        query.tag.as_deref(),
        query.q.as_deref().unwrap_or(""),
    );
    HttpResponse::Ok().json(filtered)
}
