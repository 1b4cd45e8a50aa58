use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.run_reminder_tick.handle().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod run_reminder_tick_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::reminders::adapters::outbound::recipients::RecipientDirectory;
    use crate::modules::reminders::adapters::outbound::subscriptions::SubscriptionRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{TestApp, make_test_app};
    use crate::tests::fixtures::subscriptions::SubscriptionBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/reminders/run", post(handle))
            .with_state(state)
    }

    fn run_request() -> Request<Body> {
        Request::post("/reminders/run").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_tick_report() {
        let TestApp { state, stores, .. } = make_test_app();
        stores.recipients.register("u-1", "ana@example.com").await.unwrap();
        stores
            .subscriptions
            .insert(SubscriptionBuilder::new().user_id("u-1").build())
            .await
            .unwrap();

        let response = app(state).oneshot(run_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "processed": 1, "sent": 1, "skipped": 0, "failed": 0 })
        );
    }

    #[tokio::test]
    async fn it_should_return_503_when_subscriptions_are_unavailable() {
        let TestApp { state, stores, .. } = make_test_app();
        stores.subscriptions.toggle_offline();
        let response = app(state).oneshot(run_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
