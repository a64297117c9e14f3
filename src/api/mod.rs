// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // Education endpoints
        crate::api::handlers::education::list_topics,
        crate::api::handlers::education::get_topic,
        crate::api::handlers::education::list_tips,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::HealthResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::EducationTopic,
            crate::api::types::TopicContent,
            crate::api::types::TopicListResponse,
            crate::api::types::TopicContentResponse,
            crate::api::types::TipsResponse,
            crate::generators::StrengthScore,
            crate::generators::StrengthTier
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength scoring"),
        (name = "Education", description = "Security tips and topic pages"),
        (name = "System", description = "Server status")
    ),
    info(
        title = "CiberConsejos API",
        version = "0.1.0",
        description = "Password generator and cybersecurity advice",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Shared, read-only state for the handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub default_length: usize,
}

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting CiberConsejos API server on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        // Read-only API, so any origin may call it
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/generator/password",
            "/generator/analysis/{pwd}",
            "/education",
            "/education/{id}",
            "/education/tips",
            "/health",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
