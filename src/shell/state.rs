use crate::modules::reminders::adapters::outbound::recipients_in_memory::InMemoryRecipients;
use crate::modules::reminders::adapters::outbound::subscriptions_in_memory::InMemorySubscriptions;
use crate::modules::reminders::use_cases::evaluate_reminder::handler::EvaluateReminderHandler;
use crate::modules::reminders::use_cases::list_subscriptions_by_user::handler::ListSubscriptionsHandler;
use crate::modules::reminders::use_cases::register_recipient::handler::RegisterRecipientHandler;
use crate::modules::reminders::use_cases::run_reminder_tick::handler::RunReminderTickHandler;
use crate::modules::reminders::use_cases::subscribe_reminder::handler::SubscribeReminderHandler;
use crate::modules::tasks::adapters::outbound::tasks_in_memory::InMemoryTasks;
use crate::modules::tasks::use_cases::create_task::handler::CreateTaskHandler;
use crate::modules::tasks::use_cases::delete_task::handler::DeleteTaskHandler;
use crate::modules::tasks::use_cases::list_tasks_for_user::handler::ListTasksHandler;
use crate::modules::tasks::use_cases::toggle_task::handler::ToggleTaskHandler;
use crate::modules::tasks::use_cases::update_task::handler::UpdateTaskHandler;
use crate::modules::work_sessions::adapters::outbound::time_entries_in_memory::InMemoryTimeEntries;
use crate::modules::work_sessions::use_cases::aggregate_hours::handler::AggregateHoursHandler;
use crate::modules::work_sessions::use_cases::current_duration::handler::CurrentDurationHandler;
use crate::modules::work_sessions::use_cases::end_session::handler::EndSessionHandler;
use crate::modules::work_sessions::use_cases::list_time_entries_by_user::handler::ListTimeEntriesHandler;
use crate::modules::work_sessions::use_cases::start_session::handler::StartSessionHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::email::EmailSender;
use crate::shared::infrastructure::keyed_locks::KeyedLocks;
use std::sync::Arc;

pub type ReminderTick =
    RunReminderTickHandler<InMemorySubscriptions, InMemoryTimeEntries, InMemoryRecipients>;

/// The backing stores, kept separately so callers can seed or inspect them.
#[derive(Clone, Default)]
pub struct Stores {
    pub time_entries: Arc<InMemoryTimeEntries>,
    pub subscriptions: Arc<InMemorySubscriptions>,
    pub recipients: Arc<InMemoryRecipients>,
    pub tasks: Arc<InMemoryTasks>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub start_session: Arc<StartSessionHandler<InMemoryTimeEntries>>,
    pub end_session: Arc<EndSessionHandler<InMemoryTimeEntries>>,
    pub current_duration: Arc<CurrentDurationHandler<InMemoryTimeEntries>>,
    pub aggregate_hours: Arc<AggregateHoursHandler<InMemoryTimeEntries>>,
    pub list_time_entries: Arc<ListTimeEntriesHandler<InMemoryTimeEntries>>,
    pub run_reminder_tick: Arc<ReminderTick>,
    pub subscribe_reminder: Arc<SubscribeReminderHandler<InMemorySubscriptions>>,
    pub list_subscriptions: Arc<ListSubscriptionsHandler<InMemorySubscriptions>>,
    pub register_recipient: Arc<RegisterRecipientHandler<InMemoryRecipients>>,
    pub create_task: Arc<CreateTaskHandler<InMemoryTasks>>,
    pub update_task: Arc<UpdateTaskHandler<InMemoryTasks>>,
    pub toggle_task: Arc<ToggleTaskHandler<InMemoryTasks>>,
    pub delete_task: Arc<DeleteTaskHandler<InMemoryTasks>>,
    pub list_tasks: Arc<ListTasksHandler<InMemoryTasks>>,
}

impl AppState {
    pub fn new(stores: &Stores, clock: Arc<dyn Clock>, email: Arc<dyn EmailSender>) -> Self {
        let user_locks = Arc::new(KeyedLocks::new());
        let task_locks = Arc::new(KeyedLocks::new());
        let evaluator = Arc::new(EvaluateReminderHandler::new(
            stores.subscriptions.clone(),
            stores.time_entries.clone(),
            stores.recipients.clone(),
            email,
            clock.clone(),
        ));

        Self {
            start_session: Arc::new(StartSessionHandler::new(
                stores.time_entries.clone(),
                clock.clone(),
                user_locks.clone(),
            )),
            end_session: Arc::new(EndSessionHandler::new(
                stores.time_entries.clone(),
                clock.clone(),
                user_locks,
            )),
            current_duration: Arc::new(CurrentDurationHandler::new(
                stores.time_entries.clone(),
                clock.clone(),
            )),
            aggregate_hours: Arc::new(AggregateHoursHandler::new(
                stores.time_entries.clone(),
                clock.clone(),
            )),
            list_time_entries: Arc::new(ListTimeEntriesHandler::new(stores.time_entries.clone())),
            run_reminder_tick: Arc::new(RunReminderTickHandler::new(
                stores.subscriptions.clone(),
                evaluator,
                clock.clone(),
            )),
            subscribe_reminder: Arc::new(SubscribeReminderHandler::new(
                stores.subscriptions.clone(),
            )),
            list_subscriptions: Arc::new(ListSubscriptionsHandler::new(
                stores.subscriptions.clone(),
            )),
            register_recipient: Arc::new(RegisterRecipientHandler::new(stores.recipients.clone())),
            create_task: Arc::new(CreateTaskHandler::new(stores.tasks.clone(), clock)),
            update_task: Arc::new(UpdateTaskHandler::new(
                stores.tasks.clone(),
                task_locks.clone(),
            )),
            toggle_task: Arc::new(ToggleTaskHandler::new(
                stores.tasks.clone(),
                task_locks.clone(),
            )),
            delete_task: Arc::new(DeleteTaskHandler::new(stores.tasks.clone(), task_locks)),
            list_tasks: Arc::new(ListTasksHandler::new(stores.tasks.clone())),
        }
    }
}
