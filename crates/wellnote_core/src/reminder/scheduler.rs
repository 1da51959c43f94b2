//! Reminder state machine and time parsing.
//!
//! # Responsibility
//! - Toggle the daily reminder on/off against the notification gateway.
//! - Persist enabled flag and time string; re-arm on startup when enabled.
//!
//! # Invariants
//! - `toggle(true)` never schedules when permission is denied, and the
//!   denial is persisted as `enabled=false`.
//! - The time string is persisted by the schedule step, mirroring when the
//!   host historically wrote it.
//! - Unparsable time halves default independently (hour 20, minute 0);
//!   out-of-range values pass through unvalidated.

use super::gateway::{NotificationGateway, PermissionStatus};
use super::{ReminderError, ReminderResult};
use crate::prefs::PreferencesStore;
use chrono::Utc;
use log::{info, warn};

/// Stable id of the repeating daily reminder.
pub const DAILY_REMINDER_ID: u32 = 1001;
/// Distinct id of the one-off test notification.
pub const TEST_NOTIFICATION_ID: u32 = 9999;

/// Preferences key holding the JSON boolean enabled flag.
pub const REMINDER_ENABLED_KEY: &str = "reminder.enabled";
/// Preferences key holding the raw `HH:MM` time string (not JSON-wrapped).
pub const REMINDER_TIME_KEY: &str = "reminder.time";

/// Compile-time default reminder time (8:00 PM).
pub const DEFAULT_REMINDER_TIME: &str = "20:00";

const DEFAULT_HOUR: u32 = 20;
const DEFAULT_MINUTE: u32 = 0;

const DAILY_TITLE: &str = "Daily Wellness Journal";
const DAILY_BODY: &str = "Take a minute to write your reflection for today.";
const TEST_TITLE: &str = "Time to Journal!";
const TEST_BODY: &str = "Got anything on your mind? Write it down.";
const TEST_FIRE_DELAY_MS: i64 = 5_000;

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Reminder armed and enabled flag persisted.
    Enabled,
    /// Reminder cancelled and disabled flag persisted.
    Disabled,
    /// Platform denied permission; forced back to disabled and persisted.
    PermissionDenied,
}

/// Result of the startup reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// Reminder was not enabled in storage.
    Disabled,
    /// Enabled and permission still granted; reminder re-armed.
    Rearmed,
    /// Enabled in storage but permission revoked; nothing armed, flag kept.
    PermissionLost,
}

/// Result of a test notification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFireOutcome {
    Scheduled,
    PermissionDenied,
}

/// Splits `HH:MM` on `:` and parses both halves as integers.
///
/// A half that fails to parse defaults independently: hour to 20, minute to
/// 0. Values outside clock range are passed through as-is.
pub fn parse_hour_minute(time: &str) -> (u32, u32) {
    let mut halves = time.splitn(2, ':');
    let hour = halves
        .next()
        .and_then(|half| half.trim().parse().ok())
        .unwrap_or(DEFAULT_HOUR);
    let minute = halves
        .next()
        .and_then(|half| half.trim().parse().ok())
        .unwrap_or(DEFAULT_MINUTE);
    (hour, minute)
}

/// Daily reminder state machine over preferences and the platform gateway.
pub struct ReminderScheduler<'a, P: PreferencesStore, N: NotificationGateway> {
    prefs: &'a P,
    gateway: &'a N,
    enabled: bool,
    time: String,
}

impl<'a, P: PreferencesStore, N: NotificationGateway> ReminderScheduler<'a, P, N> {
    /// Creates a scheduler in the disabled default state.
    pub fn new(prefs: &'a P, gateway: &'a N) -> Self {
        Self {
            prefs,
            gateway,
            enabled: false,
            time: DEFAULT_REMINDER_TIME.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Updates the in-memory time string; it is persisted by the next
    /// schedule step.
    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    /// Turns the daily reminder on or off.
    ///
    /// # Contract
    /// - `requested_on=true`: requests permission; denial persists
    ///   `enabled=false` and issues no schedule call. Grant schedules the
    ///   repeating notification at the parsed stored time and persists both
    ///   the time string and `enabled=true`.
    /// - `requested_on=false`: cancels the daily id and persists
    ///   `enabled=false`.
    pub fn toggle(&mut self, requested_on: bool) -> ReminderResult<ToggleOutcome> {
        if !requested_on {
            self.gateway.cancel(DAILY_REMINDER_ID)?;
            self.enabled = false;
            self.persist_enabled()?;
            info!("event=reminder_toggle module=reminder status=ok state=disabled");
            return Ok(ToggleOutcome::Disabled);
        }

        if self.gateway.request_permission()? == PermissionStatus::Denied {
            self.enabled = false;
            self.persist_enabled()?;
            warn!("event=reminder_toggle module=reminder status=denied state=disabled");
            return Ok(ToggleOutcome::PermissionDenied);
        }

        self.schedule_daily()?;
        self.enabled = true;
        self.persist_enabled()?;
        info!(
            "event=reminder_toggle module=reminder status=ok state=enabled time={}",
            self.time
        );
        Ok(ToggleOutcome::Enabled)
    }

    /// Reloads persisted reminder state and re-arms when still permitted.
    ///
    /// Does not re-request permission: a previously enabled reminder is only
    /// re-armed when the platform already reports `Granted`. When permission
    /// was revoked externally, storage keeps `enabled=true` (logged drift).
    pub fn reload_on_startup(&mut self) -> ReminderResult<ReloadOutcome> {
        self.enabled = match self.prefs.get(REMINDER_ENABLED_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(ReminderError::Malformed)?,
            None => false,
        };
        if let Some(time) = self.prefs.get(REMINDER_TIME_KEY)? {
            if !time.is_empty() {
                self.time = time;
            }
        }

        if !self.enabled {
            return Ok(ReloadOutcome::Disabled);
        }

        if self.gateway.check_permission()? == PermissionStatus::Granted {
            self.schedule_daily()?;
            info!(
                "event=reminder_reload module=reminder status=ok state=rearmed time={}",
                self.time
            );
            Ok(ReloadOutcome::Rearmed)
        } else {
            warn!("event=reminder_reload module=reminder status=drift state=enabled_unarmed");
            Ok(ReloadOutcome::PermissionLost)
        }
    }

    /// Fires a one-off test notification ~5 seconds in the future.
    ///
    /// Independent of the daily reminder: distinct id, and neither the
    /// enabled state nor the persisted prefs are touched.
    pub fn fire_test_notification(&self) -> ReminderResult<TestFireOutcome> {
        if self.gateway.request_permission()? == PermissionStatus::Denied {
            warn!("event=reminder_test module=reminder status=denied");
            return Ok(TestFireOutcome::PermissionDenied);
        }

        let fire_at = Utc::now().timestamp_millis() + TEST_FIRE_DELAY_MS;
        self.gateway
            .schedule_at(TEST_NOTIFICATION_ID, TEST_TITLE, TEST_BODY, fire_at)?;
        info!("event=reminder_test module=reminder status=ok fire_at={fire_at}");
        Ok(TestFireOutcome::Scheduled)
    }

    fn schedule_daily(&self) -> ReminderResult<()> {
        let (hour, minute) = parse_hour_minute(&self.time);
        self.gateway
            .schedule_daily(DAILY_REMINDER_ID, DAILY_TITLE, DAILY_BODY, hour, minute)?;
        self.prefs.set(REMINDER_TIME_KEY, &self.time)?;
        Ok(())
    }

    fn persist_enabled(&self) -> ReminderResult<()> {
        let raw = serde_json::to_string(&self.enabled).map_err(ReminderError::Malformed)?;
        self.prefs.set(REMINDER_ENABLED_KEY, &raw)?;
        Ok(())
    }
}
