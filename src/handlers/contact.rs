use actix_web::{HttpResponse, Responder, web};

use crate::models::contact::ContactSubmission;
use crate::relay::FormRelay;

/// POST /api/contact — validate and forward a submission to the form
/// relay service. Honeypot hits are dropped without telling the sender.
pub async fn submit_contact(
    relay: web::Data<FormRelay>,
    body: web::Json<ContactSubmission>,
) -> impl Responder {
    let submission = body.into_inner();

    if submission.is_trap() {
        tracing::debug!("contact submission dropped by honeypot");
        return HttpResponse::Ok().json(serde_json::json!({
            "message": "Message sent - thank you!",
        }));
    }

    if let Err(e) = submission.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
            "field": e.field(),
        }));
    }

    match relay.send(&submission).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Message sent - thank you!",
        })),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": e.to_string(),
        })),
    }
}
