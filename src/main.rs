use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use portfolio_backend::catalog::ProjectCatalog;
use portfolio_backend::create_pool;
use portfolio_backend::gallery::server::GalleryServer;
use portfolio_backend::gallery::session::DocumentPath;
use portfolio_backend::handlers;
use portfolio_backend::relay::FormRelay;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db_data = web::Data::new(db);

    let projects_url = std::env::var("PROJECTS_URL").ok();
    if projects_url.is_none() {
        tracing::info!("PROJECTS_URL not set - serving the embedded project list");
    }
    let catalog = web::Data::new(ProjectCatalog::new(projects_url));

    let form_endpoint = std::env::var("FORM_ENDPOINT").expect("FORM_ENDPOINT must be set");
    let relay = web::Data::new(FormRelay::new(form_endpoint));

    let assets_dir = std::env::var("ASSETS_DIR").unwrap_or_else(|_| "./assets".to_string());
    let document_path =
        std::env::var("DOCUMENT_PATH").unwrap_or_else(|_| "/assets/resume.pdf".to_string());
    let document = web::Data::new(DocumentPath(document_path));

    // Shared session registry for WebSocket gallery sessions.
    let gallery_server = web::Data::new(Arc::new(GalleryServer::new()));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(catalog.clone())
            .app_data(relay.clone())
            .app_data(document.clone())
            .app_data(gallery_server.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(Files::new("/assets", assets_dir.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
