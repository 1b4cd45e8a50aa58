pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod email;
        pub mod keyed_locks;
    }
}

pub mod modules {
    pub mod work_sessions {
        pub mod core {
            pub mod hours;
            pub mod periods;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod start_session {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod end_session {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod current_duration {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod aggregate_hours {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod time_entries;
                pub mod time_entries_in_memory;
            }
        }
    }
    pub mod reminders {
        pub mod core {
            pub mod message;
            pub mod rules;
            pub mod subscription;
        }
        pub mod use_cases {
            pub mod evaluate_reminder {
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
            pub mod run_reminder_tick {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod subscribe_reminder {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_subscriptions_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod register_recipient {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod recipients;
                pub mod recipients_in_memory;
                pub mod subscriptions;
                pub mod subscriptions_in_memory;
            }
        }
    }
    pub mod tasks {
        pub mod core {
            pub mod task;
        }
        pub mod use_cases {
            pub mod create_task {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_task {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod toggle_task {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_task {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_tasks_for_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod tasks;
                pub mod tasks_in_memory;
            }
        }
    }
}

pub mod shell;
