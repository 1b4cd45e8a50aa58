use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::tasks::core::task::{Priority, TaskDetails};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

/// Editable task fields, shared by create and update bodies.
#[derive(Deserialize)]
pub struct TaskDetailsBody {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl From<TaskDetailsBody> for TaskDetails {
    fn from(b: TaskDetailsBody) -> Self {
        Self {
            title: b.title,
            description: b.description,
            priority: b.priority,
            due_date: b.due_date,
            assigned_to: b.assigned_to,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub user_id: String,
    #[serde(flatten)]
    pub details: TaskDetailsBody,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .create_task
        .handle(&body.user_id, body.details.into())
        .await
    {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod create_task_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{TestApp, make_test_app};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new().route("/tasks", post(handle)).with_state(state)
    }

    fn create_request(body: &'static str) -> Request<Body> {
        Request::post("/tasks")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_task() {
        let TestApp { state, .. } = make_test_app();
        let response = app(state)
            .oneshot(create_request(
                r#"{"user_id":"u-1","title":"Ship invoice","due_date":"2024-01-12","assigned_to":"u-2"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["user_id"], "u-1");
        assert_eq!(json["title"], "Ship invoice");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["due_date"], "2024-01-12");
        assert_eq!(json["assigned_to"], "u-2");
        assert_eq!(json["completed"], false);
    }

    #[tokio::test]
    async fn it_should_return_422_on_a_blank_title() {
        let TestApp { state, .. } = make_test_app();
        let response = app(state)
            .oneshot(create_request(r#"{"user_id":"u-1","title":"  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_422_on_an_unknown_priority() {
        let TestApp { state, .. } = make_test_app();
        let response = app(state)
            .oneshot(create_request(
                r#"{"user_id":"u-1","title":"Ship","priority":"urgent"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
