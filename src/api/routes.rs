// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::system::health));

    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );

    // Education routes; "/tips" must precede the "/{id}" catch-all
    cfg.service(
        web::scope("/education")
            .route("", web::get().to(handlers::education::list_topics))
            .route("/tips", web::get().to(handlers::education::list_tips))
            .route("/{id}", web::get().to(handlers::education::get_topic))
    );
}
