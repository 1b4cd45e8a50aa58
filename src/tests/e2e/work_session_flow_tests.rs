use crate::modules::work_sessions::adapters::outbound::time_entries::TimeEntryRepository;
use crate::shared::core::clock::ManualClock;
use crate::shell::http::router;
use crate::tests::fixtures::app::{TestApp, make_test_app_with_clock};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{FixedOffset, TimeDelta, TimeZone};
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

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn tracks_a_session_across_midnight() {
    let offset = FixedOffset::east_opt(0).unwrap();
    let TestApp { state, clock, .. } = make_test_app_with_clock(ManualClock::at_local(
        offset.with_ymd_and_hms(2024, 1, 9, 23, 50, 0).unwrap(),
    ));
    let app = router(state);

    let (status, started) = call(
        &app,
        post_json("/sessions/start", json!({ "user_id": "u-1", "notes": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(started["notes"].is_null());

    clock.advance(TimeDelta::minutes(10));
    let (_, current) = call(&app, get("/sessions/current?user_id=u-1")).await;
    let live = current["hours"].as_f64().unwrap();
    assert!((live - 10.0 / 60.0).abs() < 1e-9);

    clock.advance(TimeDelta::minutes(10));
    let (status, ended) = call(
        &app,
        post_json("/sessions/end", json!({ "user_id": "u-1", "notes": "night deploy" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ended["id"], started["id"]);
    assert_eq!(ended["total_hours"], 0.33);
    assert_eq!(ended["notes"], "night deploy");

    // The entry started yesterday, so today's total is empty while the week has it.
    let (_, today) = call(&app, get("/sessions/hours?user_id=u-1&period=today")).await;
    assert_eq!(today["hours"], 0.0);
    let (_, week) = call(&app, get("/sessions/hours?user_id=u-1&period=week")).await;
    assert_eq!(week["hours"], 0.33);

    let (_, current) = call(&app, get("/sessions/current?user_id=u-1")).await;
    assert_eq!(current["hours"], 0.0);
}

#[tokio::test]
async fn rejects_overlapping_sessions_and_double_ends() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let TestApp { state, clock, .. } = make_test_app_with_clock(ManualClock::at_local(
        offset.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap(),
    ));
    let app = router(state);

    let start = json!({ "user_id": "u-1" });
    assert_eq!(call(&app, post_json("/sessions/start", start.clone())).await.0, StatusCode::CREATED);
    assert_eq!(call(&app, post_json("/sessions/start", start.clone())).await.0, StatusCode::CONFLICT);

    clock.advance(TimeDelta::hours(4));
    assert_eq!(call(&app, post_json("/sessions/end", start.clone())).await.0, StatusCode::OK);
    assert_eq!(call(&app, post_json("/sessions/end", start.clone())).await.0, StatusCode::CONFLICT);

    clock.advance(TimeDelta::hours(1));
    assert_eq!(call(&app, post_json("/sessions/start", start.clone())).await.0, StatusCode::CREATED);
    clock.advance(TimeDelta::minutes(30));
    assert_eq!(call(&app, post_json("/sessions/end", start)).await.0, StatusCode::OK);

    let (_, entries) = call(&app, get("/time-entries?user_id=u-1")).await;
    let hours: Vec<f64> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["total_hours"].as_f64().unwrap())
        .collect();
    assert_eq!(hours, vec![0.5, 4.0]);

    let (_, today) = call(&app, get("/sessions/hours?user_id=u-1&period=today")).await;
    assert_eq!(today, json!({ "user_id": "u-1", "period": "today", "hours": 4.5 }));
}

#[tokio::test]
async fn serializes_concurrent_starts_for_one_user() {
    let offset = FixedOffset::east_opt(0).unwrap();
    let TestApp { state, stores, .. } = make_test_app_with_clock(ManualClock::at_local(
        offset.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
    ));

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move { state.start_session.handle("u-1", None).await })
        })
        .collect();
    let mut created = 0;
    for attempt in attempts {
        if attempt.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(stores.time_entries.list_by_user("u-1").await.unwrap().len(), 1);
}
