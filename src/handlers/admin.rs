use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::auth::admin;

#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    pub password: String,
    pub confirm: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /api/admin/setup — first-time password creation. Rejected once a
/// password exists; a successful setup also logs the admin in.
pub async fn setup(
    db: web::Data<DatabaseConnection>,
    body: web::Json<SetupRequest>,
) -> impl Responder {
    match admin::password_set(db.get_ref()).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "An admin password is already set.",
            }));
        }
        Ok(false) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    let input = body.into_inner();
    if input.password.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Password must not be empty.",
        }));
    }
    if input.password != input.confirm {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Passwords did not match - try again.",
        }));
    }

    let result = async {
        admin::set_password(db.get_ref(), &input.password).await?;
        admin::set_authenticated(db.get_ref(), true).await
    }
    .await;

    match result {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Admin password set. You are now logged in as admin.",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/admin/login — verbatim comparison against the stored
/// password.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    match admin::verify_password(db.get_ref(), &body.password).await {
        Ok(true) => match admin::set_authenticated(db.get_ref(), true).await {
            Ok(()) => HttpResponse::Ok().json(serde_json::json!({
                "message": "Admin login successful.",
            })),
            Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            })),
        },
        Ok(false) => HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Incorrect password.",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/admin/logout — clear the session flag.
pub async fn logout(db: web::Data<DatabaseConnection>) -> impl Responder {
    match admin::set_authenticated(db.get_ref(), false).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Logged out of admin mode.",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/admin/status — whether a password exists and whether the
/// session flag is set.
pub async fn status(db: web::Data<DatabaseConnection>) -> impl Responder {
    let result = async {
        let password_set = admin::password_set(db.get_ref()).await?;
        let is_admin = admin::is_admin(db.get_ref()).await?;
        Ok::<_, sea_orm::DbErr>((password_set, is_admin))
    }
    .await;

    match result {
        Ok((password_set, is_admin)) => HttpResponse::Ok().json(serde_json::json!({
            "password_set": password_set,
            "admin": is_admin,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
