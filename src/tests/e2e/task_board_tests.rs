use crate::shell::http::router;
use crate::tests::fixtures::app::{TestApp, make_test_app};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::TimeDelta;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn shares_a_task_between_creator_and_assignee() {
    let TestApp { state, clock, .. } = make_test_app();
    let app = router(state);

    let (status, first) = call(
        &app,
        json_request(Method::POST, "/tasks", json!({ "user_id": "lead", "title": "Own backlog" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    clock.advance(TimeDelta::minutes(5));
    let (status, shared) = call(
        &app,
        json_request(
            Method::POST,
            "/tasks",
            json!({
                "user_id": "lead",
                "title": "Fix login bug",
                "description": "",
                "priority": "high",
                "assigned_to": "dev"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(shared["description"].is_null());
    let shared_id = shared["id"].as_str().unwrap().to_string();

    // The creator sees both, newest first; the assignee sees only the shared one.
    let (_, lead_tasks) = call(&app, get("/tasks?user_id=lead")).await;
    assert_eq!(lead_tasks[0]["id"], shared["id"]);
    assert_eq!(lead_tasks[1]["id"], first["id"]);
    let (_, dev_tasks) = call(&app, get("/tasks?user_id=dev")).await;
    assert_eq!(dev_tasks.as_array().map(Vec::len), Some(1));

    // The assignee may complete it but not edit or delete it.
    let (status, done) = call(
        &app,
        json_request(
            Method::POST,
            &format!("/tasks/{shared_id}/toggle"),
            json!({ "user_id": "dev" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(done["completed"], true);

    let (status, _) = call(
        &app,
        json_request(
            Method::PUT,
            &format!("/tasks/{shared_id}"),
            json!({ "user_id": "dev", "title": "Not my call" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call(
        &app,
        Request::delete(format!("/tasks/{shared_id}?user_id=dev"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The creator reassigns it; the former assignee loses sight of it.
    let (status, edited) = call(
        &app,
        json_request(
            Method::PUT,
            &format!("/tasks/{shared_id}"),
            json!({ "user_id": "lead", "title": "Fix login bug", "assigned_to": "qa" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["completed"], true);
    assert_eq!(edited["priority"], "medium");
    let (_, dev_tasks) = call(&app, get("/tasks?user_id=dev")).await;
    assert_eq!(dev_tasks, json!([]));

    let (status, _) = call(
        &app,
        Request::delete(format!("/tasks/{shared_id}?user_id=lead"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, lead_tasks) = call(&app, get("/tasks?user_id=lead")).await;
    assert_eq!(lead_tasks.as_array().map(Vec::len), Some(1));
}
