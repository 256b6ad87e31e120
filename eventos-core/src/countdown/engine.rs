use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use super::remaining::{CountdownDisplay, Remaining};
use crate::constants::REFERENCE_TZ;
use crate::error::TargetError;
use crate::instant;

/// One countdown toward a fixed target instant.
///
/// Evaluated with [`Countdown::tick`]; once the target has been reached the
/// countdown stays expired no matter what later clock readings say.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Utc>,
    tz: Tz,
    expired: bool,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Countdown {
            target,
            tz: REFERENCE_TZ,
            expired: false,
        }
    }

    /// Build a countdown from target text, logging why it was rejected.
    pub fn parse(target_text: Option<&str>) -> Result<Self, TargetError> {
        match instant::parse_target(target_text) {
            Ok(target) => Ok(Countdown::new(target)),
            Err(err) => {
                log_target_error(&err);
                Err(err)
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownState {
        if !self.expired {
            match Remaining::until(now, self.target, self.tz) {
                Some(remaining) => return CountdownState::running(self.target, remaining),
                None => {
                    tracing::debug!(target_instant = %self.target, "countdown expired");
                    self.expired = true;
                }
            }
        }
        CountdownState::expired(self.target)
    }
}

fn log_target_error(err: &TargetError) {
    match err {
        TargetError::MissingTarget => tracing::warn!("countdown has no target date"),
        TargetError::InvalidFormat(text) => {
            tracing::warn!(text = %text, "countdown target is not strict ISO-8601 UTC")
        }
        TargetError::UnparsableInstant(text) => {
            tracing::warn!(text = %text, "countdown target matches the format but is not a real instant")
        }
    }
}

/// Snapshot of a countdown after one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownState {
    pub target: Option<DateTime<Utc>>,
    pub remaining: Remaining,
    pub expired: bool,
    pub error: Option<String>,
}

impl CountdownState {
    pub fn running(target: DateTime<Utc>, remaining: Remaining) -> Self {
        CountdownState {
            target: Some(target),
            remaining,
            expired: false,
            error: None,
        }
    }

    pub fn expired(target: DateTime<Utc>) -> Self {
        CountdownState {
            target: Some(target),
            remaining: Remaining::ZERO,
            expired: true,
            error: None,
        }
    }

    pub fn failed(err: &TargetError) -> Self {
        CountdownState {
            target: None,
            remaining: Remaining::ZERO,
            expired: false,
            error: Some(err.to_string()),
        }
    }

    /// Evaluate `target_text` once at `now` without keeping any state.
    pub fn snapshot(target_text: &str, now: DateTime<Utc>) -> Self {
        match instant::parse_utc(target_text) {
            Ok(target) => Countdown::new(target).tick(now),
            Err(err) => CountdownState::failed(&err),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Running or expired countdowns show numbers; failed ones show placeholders.
    pub fn display(&self) -> CountdownDisplay {
        if self.is_failed() {
            CountdownDisplay::placeholder()
        } else {
            self.remaining.display()
        }
    }
}
