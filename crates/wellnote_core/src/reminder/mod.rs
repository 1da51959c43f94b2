//! Daily reminder scheduling against platform notification primitives.
//!
//! # Responsibility
//! - Define the platform notification seam (permission, schedule, cancel).
//! - Persist the enabled flag and reminder time across restarts and re-arm
//!   on startup when previously enabled.
//!
//! # Invariants
//! - Permission denial forces the persisted enabled flag back to `false`.
//! - Persisted enabled state can drift from platform permission; the drift
//!   is logged, not reconciled.

use crate::prefs::PrefsError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod gateway;
pub mod scheduler;

pub use gateway::{NotificationGateway, NotifyError, PermissionStatus};
pub use scheduler::{
    parse_hour_minute, ReloadOutcome, ReminderScheduler, TestFireOutcome, ToggleOutcome,
    DAILY_REMINDER_ID, DEFAULT_REMINDER_TIME, REMINDER_ENABLED_KEY, REMINDER_TIME_KEY,
    TEST_NOTIFICATION_ID,
};

pub type ReminderResult<T> = Result<T, ReminderError>;

#[derive(Debug)]
pub enum ReminderError {
    Prefs(PrefsError),
    Notify(NotifyError),
    /// Persisted enabled flag is not a valid JSON boolean.
    Malformed(serde_json::Error),
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefs(err) => write!(f, "{err}"),
            Self::Notify(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed persisted reminder flag: {err}"),
        }
    }
}

impl Error for ReminderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prefs(err) => Some(err),
            Self::Notify(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<PrefsError> for ReminderError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}

impl From<NotifyError> for ReminderError {
    fn from(value: NotifyError) -> Self {
        Self::Notify(value)
    }
}
