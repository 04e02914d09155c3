use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::auth::middleware::AdminSession;
use crate::db::blogs as blog_db;
use crate::gallery::server::{Broadcast, GalleryServer};
use crate::models::blog::{BlogError, CreateBlog, UpdateBlog};

/// GET /api/blogs — all posts, newest first.
pub async fn get_blogs(db: web::Data<DatabaseConnection>) -> impl Responder {
    match blog_db::load(db.get_ref()).await {
        Ok(blogs) => HttpResponse::Ok().json(blogs.sorted()),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch blogs: {e}"),
        })),
    }
}

/// POST /api/blogs — create a post (admin only).
pub async fn create_blog(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    gallery_server: web::Data<Arc<GalleryServer>>,
    body: web::Json<CreateBlog>,
) -> impl Responder {
    let input = body.into_inner();

    let mut blogs = match blog_db::load(db.get_ref()).await {
        Ok(blogs) => blogs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let post = match blogs.add(Utc::now(), &input.title, &input.content) {
        Ok(post) => post.clone(),
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string(),
            }));
        }
    };

    if let Err(e) = blog_db::save(db.get_ref(), &blogs).await {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save blog: {e}"),
        }));
    }

    gallery_server.broadcast(Broadcast::BlogsChanged).await;
    HttpResponse::Created().json(post)
}

/// PUT /api/blogs/{id} — edit a post (admin only). Blank fields leave the
/// current values untouched.
pub async fn update_blog(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    gallery_server: web::Data<Arc<GalleryServer>>,
    path: web::Path<i64>,
    body: web::Json<UpdateBlog>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    let mut blogs = match blog_db::load(db.get_ref()).await {
        Ok(blogs) => blogs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let post = match blogs.edit(id, input.title.as_deref(), input.content.as_deref()) {
        Ok(post) => post.clone(),
        Err(e @ BlogError::NotFound(_)) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string(),
            }));
        }
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string(),
            }));
        }
    };

    if let Err(e) = blog_db::save(db.get_ref(), &blogs).await {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save blog: {e}"),
        }));
    }

    gallery_server.broadcast(Broadcast::BlogsChanged).await;
    HttpResponse::Ok().json(post)
}

/// DELETE /api/blogs/{id} — remove a post (admin only). Sessions with
/// the post open close their dialog via the broadcast.
pub async fn delete_blog(
    _admin: AdminSession,
    db: web::Data<DatabaseConnection>,
    gallery_server: web::Data<Arc<GalleryServer>>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    let mut blogs = match blog_db::load(db.get_ref()).await {
        Ok(blogs) => blogs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if let Err(e) = blogs.remove(id) {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string(),
        }));
    }

    if let Err(e) = blog_db::save(db.get_ref(), &blogs).await {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save blog: {e}"),
        }));
    }

    gallery_server.broadcast(Broadcast::BlogDeleted { id }).await;
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Blog post {id} deleted"),
    }))
}

/// POST /api/blogs/{id}/like — any visitor can toggle their like.
pub async fn like_blog(
    db: web::Data<DatabaseConnection>,
    gallery_server: web::Data<Arc<GalleryServer>>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    let mut blogs = match blog_db::load(db.get_ref()).await {
        Ok(blogs) => blogs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let post = match blogs.toggle_like(id) {
        Ok(post) => post.clone(),
        Err(e) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string(),
            }));
        }
    };

    if let Err(e) = blog_db::save(db.get_ref(), &blogs).await {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save blog: {e}"),
        }));
    }

    gallery_server.broadcast(Broadcast::BlogsChanged).await;
    HttpResponse::Ok().json(post)
}
