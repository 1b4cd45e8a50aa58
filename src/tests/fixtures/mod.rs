pub mod app;
pub mod subscriptions;
pub mod tasks;
pub mod time_entries;
