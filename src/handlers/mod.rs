pub mod admin;
pub mod blogs;
pub mod contact;
pub mod projects;

use actix_web::web;

use crate::gallery::session;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Admin gate (plaintext, store-backed) ──
    cfg.service(
        web::scope("/admin")
            .route("/setup", web::post().to(admin::setup))
            .route("/login", web::post().to(admin::login))
            .route("/logout", web::post().to(admin::logout))
            .route("/status", web::get().to(admin::status)),
    );

    // ── Projects (public, stateless filtering) ──
    cfg.service(web::resource("/projects").route(web::get().to(projects::get_projects)));

    // ── Blog (list and like are public; authoring is admin-gated) ──
    cfg.service(
        web::scope("/blogs")
            .route("", web::get().to(blogs::get_blogs))
            .route("", web::post().to(blogs::create_blog))
            .route("/{id}", web::put().to(blogs::update_blog))
            .route("/{id}", web::delete().to(blogs::delete_blog))
            .route("/{id}/like", web::post().to(blogs::like_blog)),
    );

    // ── Contact relay ──
    cfg.service(web::resource("/contact").route(web::post().to(contact::submit_contact)));

    // ── Gallery UI sessions ──
    cfg.service(web::resource("/gallery/ws").route(web::get().to(session::ws_connect)));
}
