use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::reminders::use_cases::list_subscriptions_by_user::inbound::http as list_subscriptions_http;
use crate::modules::reminders::use_cases::register_recipient::inbound::http as register_recipient_http;
use crate::modules::reminders::use_cases::run_reminder_tick::inbound::http as run_reminders_http;
use crate::modules::reminders::use_cases::subscribe_reminder::inbound::http as subscribe_http;
use crate::modules::tasks::use_cases::create_task::inbound::http as create_task_http;
use crate::modules::tasks::use_cases::delete_task::inbound::http as delete_task_http;
use crate::modules::tasks::use_cases::list_tasks_for_user::inbound::http as list_tasks_http;
use crate::modules::tasks::use_cases::toggle_task::inbound::http as toggle_task_http;
use crate::modules::tasks::use_cases::update_task::inbound::http as update_task_http;
use crate::modules::work_sessions::use_cases::aggregate_hours::inbound::http as hours_http;
use crate::modules::work_sessions::use_cases::current_duration::inbound::http as current_http;
use crate::modules::work_sessions::use_cases::end_session::inbound::http as end_http;
use crate::modules::work_sessions::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::work_sessions::use_cases::start_session::inbound::http as start_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions/start", post(start_http::handle))
        .route("/sessions/end", post(end_http::handle))
        .route("/sessions/current", get(current_http::handle))
        .route("/sessions/hours", get(hours_http::handle))
        .route("/time-entries", get(list_http::handle))
        .route("/reminders/run", post(run_reminders_http::handle))
        .route(
            "/reminders/subscriptions",
            get(list_subscriptions_http::handle).put(subscribe_http::handle),
        )
        .route("/reminders/recipients", put(register_recipient_http::handle))
        .route(
            "/tasks",
            get(list_tasks_http::handle).post(create_task_http::handle),
        )
        .route(
            "/tasks/{id}",
            put(update_task_http::handle).delete(delete_task_http::handle),
        )
        .route("/tasks/{id}/toggle", post(toggle_task_http::handle))
        .with_state(state)
}

pub fn error_status(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::AlreadyActive { .. } | ApplicationError::NoActiveSession { .. } => {
            StatusCode::CONFLICT
        }
        ApplicationError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::TaskNotFound { .. } => StatusCode::NOT_FOUND,
        ApplicationError::NotPermitted { .. } => StatusCode::FORBIDDEN,
        ApplicationError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ApplicationError::EmailDeliveryFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn error_response(error: &ApplicationError) -> Response {
    (error_status(error), Json(json!({ "error": error.to_string() }))).into_response()
}
