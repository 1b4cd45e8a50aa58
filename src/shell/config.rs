// Runtime configuration read from environment variables.
//
// A `.env` file, when present, is loaded by the binary before this runs.

use crate::shared::infrastructure::email::resend::DEFAULT_RESEND_BASE_URL;
use chrono::{FixedOffset, Offset, Utc};
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TICK_SECONDS: u64 = 900;
pub const DEFAULT_EMAIL_FROM: &str = "Team Tracker <onboarding@resend.dev>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailConfig {
    Resend {
        api_key: String,
        from: String,
        base_url: String,
    },
    /// No provider key configured; reminders are only logged.
    LogOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub tick_interval: Duration,
    pub utc_offset: FixedOffset,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = match read("BIND_ADDR") {
            Some(v) => v.parse().map_err(|_| invalid("BIND_ADDR", v))?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let tick_seconds = match read("REMINDER_TICK_SECONDS") {
            Some(v) => match v.parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("REMINDER_TICK_SECONDS", v)),
            },
            None => DEFAULT_TICK_SECONDS,
        };

        let utc_offset = match read("REMINDER_UTC_OFFSET") {
            Some(v) => parse_utc_offset(&v).ok_or_else(|| invalid("REMINDER_UTC_OFFSET", v))?,
            None => Utc.fix(),
        };

        let email = match read("RESEND_API_KEY") {
            Some(api_key) => EmailConfig::Resend {
                api_key,
                from: read("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
                base_url: read("RESEND_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_BASE_URL.to_string()),
            },
            None => EmailConfig::LogOnly,
        };

        Ok(Self {
            bind_addr,
            tick_interval: Duration::from_secs(tick_seconds),
            utc_offset,
            email,
        })
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { key, value }
}

/// Accepts `Z`, `UTC` and anything chrono parses as an offset (`+HH:MM`, `-HHMM`).
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Some(Utc.fix());
    }
    raw.parse::<FixedOffset>().ok()
}
