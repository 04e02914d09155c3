use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use crate::auth::admin;

/// Extractor that admits a request only while the admin session flag is
/// set. Handlers for blog authoring take this as a parameter; everything
/// else stays public.
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            let is_admin = admin::is_admin(db.get_ref()).await.map_err(|e| {
                actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
            })?;

            if !is_admin {
                return Err(actix_web::error::ErrorUnauthorized(
                    "Only the site owner (admin) can do this.",
                ));
            }

            Ok(AdminSession)
        })
    }
}
