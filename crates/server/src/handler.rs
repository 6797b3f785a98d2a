//! HTTP routes for the recommendation service.

use crate::api::{
    BadgeRequest, BadgeResponse, HealthResponse, RecommendationRequest, RecommendationResponse,
};
use crate::error::{ApiError, ApiResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use learnavia_intelligence::Catalog;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// Builds the service routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/recommendations", post(recommendations))
        .route("/badges", post(badges))
        .with_state(state)
}

async fn health() -> ApiResult<Json<HealthResponse>> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::internal(format!("failed to format time: {e}")))?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        time,
    }))
}

async fn recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> ApiResult<Json<RecommendationResponse>> {
    let Json(request) = payload?;
    Ok(Json(request.respond(&state.catalog)))
}

async fn badges(
    payload: Result<Json<BadgeRequest>, JsonRejection>,
) -> ApiResult<Json<BadgeResponse>> {
    let Json(request) = payload?;
    Ok(Json(request.respond()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use learnavia_test_utils::{recommendation_request, SYNTHETIC_CATALOG_TOML, TestFixture};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Catalog::builtin()))
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok_and_time() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        let time = body["time"].as_str().unwrap();
        assert!(OffsetDateTime::parse(time, &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn recommendations_returns_ranked_list() {
        let (status, body) = send(
            app(),
            post_json("/recommendations", &recommendation_request(Some(2))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0]["title"], "Research Internship (CS Dept)");
        assert_eq!(recs[0]["type"], "internship");
        assert_eq!(
            recs[0]["reason"],
            "matches your interests; good for final-year portfolio"
        );
        assert_eq!(recs[1]["title"], "NLP Hands-on");
    }

    #[tokio::test]
    async fn recommendations_default_count_is_six() {
        let (_, body) = send(
            app(),
            post_json("/recommendations", &recommendation_request(None)),
        )
        .await;
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn recommendations_negative_count_is_empty() {
        let (status, body) = send(
            app(),
            post_json("/recommendations", &recommendation_request(Some(-4))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn recommendations_skip_history_any_case() {
        let body = json!({
            "profile": { "name": "A", "skills": ["python"], "interests": ["ml"] },
            "activities": [{ "type": "workshop", "title": "advanced ml WORKSHOP" }],
            "num_recs": 8
        });
        let (_, body) = send(app(), post_json("/recommendations", &body)).await;

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 7);
        assert!(recs.iter().all(|r| r["title"] != "Advanced ML Workshop"));
    }

    #[tokio::test]
    async fn recommendations_identical_requests_identical_bodies() {
        let req = || post_json("/recommendations", &recommendation_request(None));
        let (_, first) = send(app(), req()).await;
        let (_, second) = send(app(), req()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn recommendations_use_injected_catalog() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture
            .write_catalog("catalog.toml", SYNTHETIC_CATALOG_TOML)
            .unwrap();
        let app = router(AppState::new(Catalog::load(&path).unwrap()));

        let body = json!({ "profile": { "name": "A", "skills": ["Rust"] } });
        let (_, body) = send(app, post_json("/recommendations", &body)).await;

        let titles: Vec<&str> = body["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Delta Lab", "Beta Lab", "Gamma Project"]);
    }

    #[tokio::test]
    async fn recommendations_missing_profile_is_unprocessable() {
        let (status, body) = send(
            app(),
            post_json("/recommendations", &json!({ "activities": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn recommendations_malformed_json_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"profile\": "))
            .unwrap();
        let (status, body) = send(app(), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn recommendations_without_content_type_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/recommendations")
            .body(Body::from(
                serde_json::to_vec(&recommendation_request(None)).unwrap(),
            ))
            .unwrap();
        let (status, _) = send(app(), req).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn badges_tally_categories() {
        let body = json!({
            "activities": [
                { "type": "workshop", "title": "A" },
                { "type": "project", "title": "B" },
                { "type": "workshop", "title": "C" }
            ]
        });
        let (status, body) = send(app(), post_json("/badges", &body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "badges": [
                { "label": "Workshop", "count": 2 },
                { "label": "Project", "count": 1 }
            ]})
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let req = Request::builder()
            .uri("/generate_portfolio")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
