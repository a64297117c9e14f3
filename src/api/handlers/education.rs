// src/api/handlers/education.rs
use actix_web::{web, HttpResponse, Responder};
use crate::education::{EducationManager, SECURITY_TIPS};
use crate::api::types::{TopicListResponse, TopicContentResponse, TipsResponse};

#[utoipa::path(
    get,
    path = "/education",
    tag = "Education",
    responses(
        (status = 200, description = "List of available education topics", body = TopicListResponse)
    )
)]
pub async fn list_topics() -> impl Responder {
    let education_manager = EducationManager::new();
    let topics = education_manager.get_all_topics();

    HttpResponse::Ok().json(TopicListResponse {
        success: true,
        topics,
        error: None,
    })
}

#[utoipa::path(
    get,
    path = "/education/{id}",
    tag = "Education",
    params(
        ("id" = String, Path, description = "Topic ID to retrieve")
    ),
    responses(
        (status = 200, description = "Topic content", body = TopicContentResponse),
        (status = 404, description = "Topic not found", body = TopicContentResponse)
    )
)]
pub async fn get_topic(
    path: web::Path<String>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let education_manager = EducationManager::new();

    match education_manager.get_topic_by_id(&topic_id) {
        Some(topic) => {
            HttpResponse::Ok().json(TopicContentResponse {
                success: true,
                topic: Some(topic),
                error: None,
            })
        },
        None => {
            log::debug!("Unknown education topic requested: {}", topic_id);
            HttpResponse::NotFound().json(TopicContentResponse {
                success: false,
                topic: None,
                error: Some(format!("Topic not found: {}", topic_id)),
            })
        }
    }
}

#[utoipa::path(
    get,
    path = "/education/tips",
    tag = "Education",
    responses(
        (status = 200, description = "Security tips in rotation order", body = TipsResponse)
    )
)]
pub async fn list_tips() -> impl Responder {
    HttpResponse::Ok().json(TipsResponse {
        success: true,
        tips: SECURITY_TIPS.iter().map(|tip| tip.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn lists_topics() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/education").to_request();

        let resp: TopicListResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        assert_eq!(resp.topics.len(), 6);
    }

    #[actix_web::test]
    async fn tips_route_is_not_taken_for_a_topic_id() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/education/tips").to_request();

        let resp: TipsResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.tips.len(), SECURITY_TIPS.len());
        assert_eq!(resp.tips[0], SECURITY_TIPS[0]);
    }

    #[actix_web::test]
    async fn missing_topic_is_404() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/education/no-existe").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn fetches_topic() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/education/phishing").to_request();

        let resp: TopicContentResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.topic.unwrap().id, "phishing");
    }
}
