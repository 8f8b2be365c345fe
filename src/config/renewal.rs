//! Renewal window configuration.
//!
//! The window that the renewal page scans is an explicit configuration
//! input rather than a hard-coded policy, so any of the historically used
//! behaviors can be selected without code changes: a fixed offset pair
//! around today, a forward-only lookahead, or an explicit date range.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::errors::{Error, Result};

/// How the scan window is derived from today's date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// `today - past_days ..= today + upcoming_days`
    #[default]
    Offsets,
    /// `today ..= today + lookahead_days`
    Lookahead,
    /// A literal `from ..= to` date pair
    Explicit,
}

/// Renewal window settings, read from the `[renewal]` table of config.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenewalConfig {
    /// Which derivation to use
    pub mode: WindowMode,
    /// Days of already-lapsed policies to include (offsets mode)
    pub past_days: i64,
    /// Days of upcoming expirations to include (offsets mode)
    pub upcoming_days: i64,
    /// Forward horizon in days (lookahead mode; typically 30/60/90/180)
    pub lookahead_days: i64,
    /// Window start (explicit mode)
    pub from: Option<NaiveDate>,
    /// Window end (explicit mode)
    pub to: Option<NaiveDate>,
    /// Days-remaining threshold at or below which a policy counts as due
    pub due_within_days: i64,
}

impl Default for RenewalConfig {
    fn default() -> Self {
        Self {
            mode: WindowMode::Offsets,
            past_days: 5,
            upcoming_days: 18,
            lookahead_days: 30,
            from: None,
            to: None,
            due_within_days: 18,
        }
    }
}

impl RenewalConfig {
    /// Checks that the selected mode has the fields it needs.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            WindowMode::Explicit if self.from.is_none() || self.to.is_none() => Err(Error::Config {
                message: "renewal mode \"explicit\" requires both `from` and `to` dates"
                    .to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Resolves the inclusive `(from, to)` scan bounds for the given day.
    #[must_use]
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self.mode {
            WindowMode::Offsets => (
                today - Duration::days(self.past_days),
                today + Duration::days(self.upcoming_days),
            ),
            WindowMode::Lookahead => (today, today + Duration::days(self.lookahead_days)),
            WindowMode::Explicit => (self.from.unwrap_or(today), self.to.unwrap_or(today)),
        }
    }
}
