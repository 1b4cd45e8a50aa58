use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::reminders::use_cases::list_subscriptions_by_user::inbound::graphql::ReminderSubscriptionsQuery;
use crate::modules::reminders::use_cases::register_recipient::inbound::graphql::RegisterRecipientMutation;
use crate::modules::reminders::use_cases::run_reminder_tick::inbound::graphql::RunRemindersMutation;
use crate::modules::reminders::use_cases::subscribe_reminder::inbound::graphql::SubscribeReminderMutation;
use crate::modules::tasks::use_cases::create_task::inbound::graphql::CreateTaskMutation;
use crate::modules::tasks::use_cases::delete_task::inbound::graphql::DeleteTaskMutation;
use crate::modules::tasks::use_cases::list_tasks_for_user::inbound::graphql::TasksQuery;
use crate::modules::tasks::use_cases::toggle_task::inbound::graphql::ToggleTaskMutation;
use crate::modules::tasks::use_cases::update_task::inbound::graphql::UpdateTaskMutation;
use crate::modules::work_sessions::use_cases::aggregate_hours::inbound::graphql::WorkSessionHoursQuery;
use crate::modules::work_sessions::use_cases::end_session::inbound::graphql::EndSessionMutation;
use crate::modules::work_sessions::use_cases::list_time_entries_by_user::inbound::graphql::TimeEntriesQuery;
use crate::modules::work_sessions::use_cases::start_session::inbound::graphql::StartSessionMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    TimeEntriesQuery,
    WorkSessionHoursQuery,
    ReminderSubscriptionsQuery,
    TasksQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    StartSessionMutation,
    EndSessionMutation,
    RunRemindersMutation,
    SubscribeReminderMutation,
    RegisterRecipientMutation,
    CreateTaskMutation,
    UpdateTaskMutation,
    ToggleTaskMutation,
    DeleteTaskMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
