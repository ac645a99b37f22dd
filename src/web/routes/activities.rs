use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::directory::SharedDirectory;
use crate::models::Activity;
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(directory): State<SharedDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<SharedDirectory>,
) -> Response {
    let email = query.email.trim();
    if email.is_empty() {
        return bad_request("Email is required");
    }

    match activities_service::signup(&directory, &activity_name, email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Json(serde_json::json!({ "message": message })).into_response()
        }
        Err(err) => {
            warn!(activity = %activity_name, email = %email, error = %err, "signup rejected");
            err.into_response()
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<SharedDirectory>,
) -> Response {
    let email = query.email.trim();
    if email.is_empty() {
        return bad_request("Email is required");
    }

    match activities_service::unregister(&directory, &activity_name, email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Json(serde_json::json!({ "message": message })).into_response()
        }
        Err(err) => {
            warn!(activity = %activity_name, email = %email, error = %err, "unregister rejected");
            err.into_response()
        }
    }
}

fn bad_request(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "detail": detail })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::directory::seeded_directory;
    use crate::web;

    fn app() -> Router {
        web::router(seeded_directory().into_shared())
    }

    #[tokio::test]
    async fn blank_email_is_rejected_before_the_directory_is_touched() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/activities/Chess%20Club/signup?email=%20%20")
                    .body(Body::empty())
                    .expect("request build failed"),
            )
            .await
            .expect("request failed");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_email_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/activities/Chess%20Club/signup")
                    .body(Body::empty())
                    .expect("request build failed"),
            )
            .await
            .expect("request failed");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn email_is_stored_trimmed() {
        let app = app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/activities/Chess%20Club/signup?email=%20padded@mergington.edu%20")
                    .body(Body::empty())
                    .expect("request build failed"),
            )
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/activities")
                    .body(Body::empty())
                    .expect("request build failed"),
            )
            .await
            .expect("request failed");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        let activities: serde_json::Value =
            serde_json::from_slice(&body).expect("json parse failed");
        let participants = activities["Chess Club"]["participants"]
            .as_array()
            .expect("participants should be an array");
        assert!(participants.contains(&serde_json::json!("padded@mergington.edu")));
    }
}
