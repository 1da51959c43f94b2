//! Platform notification seam.
//!
//! # Responsibility
//! - Define the schedule/cancel/permission contract the host platform
//!   provides (mobile local notifications or a desktop equivalent).
//!
//! # Invariants
//! - The core never schedules directly; every platform call crosses this
//!   trait so tests can observe and fake it.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host notification permission as last reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

pub type NotifyResult<T> = Result<T, NotifyError>;

/// Failure reported by the platform notification layer.
#[derive(Debug)]
pub enum NotifyError {
    Platform(String),
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Platform(message) => write!(f, "notification platform failure: {message}"),
        }
    }
}

impl Error for NotifyError {}

/// Platform-provided notification primitives.
///
/// `hour`/`minute` are passed through as parsed; range validation is the
/// platform's concern (see time parse rule in the scheduler).
pub trait NotificationGateway {
    /// Asks the user for notification permission (may show a system dialog).
    fn request_permission(&self) -> NotifyResult<PermissionStatus>;

    /// Reads current permission without prompting.
    fn check_permission(&self) -> NotifyResult<PermissionStatus>;

    /// Schedules a repeating daily notification under a stable id.
    fn schedule_daily(
        &self,
        id: u32,
        title: &str,
        body: &str,
        hour: u32,
        minute: u32,
    ) -> NotifyResult<()>;

    /// Schedules a one-off notification at an absolute epoch-millis time.
    fn schedule_at(&self, id: u32, title: &str, body: &str, fire_at_epoch_ms: i64)
        -> NotifyResult<()>;

    /// Cancels the notification registered under `id`.
    fn cancel(&self, id: u32) -> NotifyResult<()>;
}
