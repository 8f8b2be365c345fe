//! Renewal tracking business logic.
//!
//! A policy's end date against today's date yields a whole-day remaining
//! count; that count buckets the policy into a severity used for display
//! and follow-up. The scan window itself is a configuration input
//! (offsets, lookahead, or an explicit date pair) so the page can serve
//! any of the historically used behaviors.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, QueryOrder, prelude::*};
use serde::Serialize;

use crate::config::renewal::RenewalConfig;
use crate::entities::{Policy, policy};
use crate::errors::Result;

/// Display severity of a policy within the renewal window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// End date already passed
    Lapsed,
    /// Ends within the configured due-within threshold
    Due,
    /// Ends later than the threshold
    Clear,
}

/// One policy inside the renewal window, with its derived fields
#[derive(Debug, Clone, Serialize)]
pub struct RenewalEntry {
    /// The policy nearing (or past) its end date
    pub policy: policy::Model,
    /// Whole days until the end date; negative when lapsed
    pub days_remaining: i64,
    /// Severity bucket for display
    pub severity: Severity,
}

/// Result of scanning the renewal window
#[derive(Debug, Clone, Serialize)]
pub struct RenewalScan {
    /// Entries ordered by end date ascending
    pub entries: Vec<RenewalEntry>,
    /// Inclusive window start used for the scan
    pub from: NaiveDate,
    /// Inclusive window end used for the scan
    pub to: NaiveDate,
    /// How many entries already lapsed
    pub lapsed_count: usize,
    /// How many entries are still upcoming
    pub upcoming_count: usize,
}

/// Whole days from `today` until `end`.
///
/// Dates are date-only values, so the difference is an exact number of
/// days: zero for today, negative once the end date has passed.
#[must_use]
pub fn days_remaining(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days()
}

/// Buckets a days-remaining count into a display severity.
#[must_use]
pub const fn classify(days_remaining: i64, due_within_days: i64) -> Severity {
    if days_remaining < 0 {
        Severity::Lapsed
    } else if days_remaining <= due_within_days {
        Severity::Due
    } else {
        Severity::Clear
    }
}

/// Scans the store for policies whose end date falls inside the window
/// and derives days-remaining, severity, and lapsed/upcoming counts.
///
/// The window bounds are inclusive and results come back ordered by end
/// date ascending, soonest expiration first.
pub async fn scan_window(
    db: &DatabaseConnection,
    config: &RenewalConfig,
    today: NaiveDate,
) -> Result<RenewalScan> {
    let (from, to) = config.bounds(today);
    scan_between(db, config, today, from, to).await
}

/// Like [`scan_window`] but with caller-supplied bounds, for requests
/// that override the configured window.
pub async fn scan_between(
    db: &DatabaseConnection,
    config: &RenewalConfig,
    today: NaiveDate,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<RenewalScan> {
    let policies = Policy::find()
        .filter(policy::Column::EndDate.gte(from))
        .filter(policy::Column::EndDate.lte(to))
        .order_by_asc(policy::Column::EndDate)
        .all(db)
        .await?;

    let entries: Vec<RenewalEntry> = policies
        .into_iter()
        .map(|p| {
            let days = days_remaining(p.end_date, today);
            RenewalEntry {
                policy: p,
                days_remaining: days,
                severity: classify(days, config.due_within_days),
            }
        })
        .collect();

    let lapsed_count = entries.iter().filter(|e| e.days_remaining < 0).count();
    let upcoming_count = entries.len() - lapsed_count;

    Ok(RenewalScan {
        entries,
        from,
        to,
        lapsed_count,
        upcoming_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::renewal::RenewalConfig;
    use crate::test_utils::{create_test_customer, create_test_policy_ending, setup_test_db};
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_days_remaining_same_day_is_zero() {
        let today = day(2026, 8, 6);
        assert_eq!(days_remaining(today, today), 0);
    }

    #[test]
    fn test_days_remaining_future_and_past() {
        let today = day(2026, 8, 6);
        assert_eq!(days_remaining(day(2026, 8, 16), today), 10);
        assert_eq!(days_remaining(day(2026, 8, 3), today), -3);
    }

    #[test]
    fn test_classify_buckets() {
        assert_eq!(classify(-3, 18), Severity::Lapsed);
        assert_eq!(classify(0, 18), Severity::Due);
        assert_eq!(classify(10, 18), Severity::Due);
        assert_eq!(classify(18, 18), Severity::Due);
        assert_eq!(classify(19, 18), Severity::Clear);
    }

    #[test]
    fn test_classify_with_tiered_threshold() {
        // Lookahead deployments use a wider due threshold
        assert_eq!(classify(25, 30), Severity::Due);
        assert_eq!(classify(45, 30), Severity::Clear);
    }

    #[tokio::test]
    async fn test_scan_window_orders_and_counts() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Ahmet Yılmaz").await?;
        let today = day(2026, 3, 10);

        create_test_policy_ending(&db, customer.id, "P-001", today + Duration::days(12)).await?;
        create_test_policy_ending(&db, customer.id, "P-002", today - Duration::days(3)).await?;
        create_test_policy_ending(&db, customer.id, "P-003", today + Duration::days(2)).await?;
        // Outside the default -5/+18 window: must not appear
        create_test_policy_ending(&db, customer.id, "P-004", today + Duration::days(40)).await?;
        create_test_policy_ending(&db, customer.id, "P-005", today - Duration::days(10)).await?;

        let scan = scan_window(&db, &RenewalConfig::default(), today).await?;

        let numbers: Vec<&str> = scan
            .entries
            .iter()
            .map(|e| e.policy.policy_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["P-002", "P-003", "P-001"]);
        assert_eq!(scan.lapsed_count, 1);
        assert_eq!(scan.upcoming_count, 2);
        assert_eq!(scan.entries[0].severity, Severity::Lapsed);
        assert_eq!(scan.entries[1].severity, Severity::Due);
        Ok(())
    }

    #[tokio::test]
    async fn test_scan_between_inclusive_bounds() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Ayşe Demir").await?;
        let today = day(2026, 3, 10);

        create_test_policy_ending(&db, customer.id, "P-EDGE-LO", day(2026, 3, 5)).await?;
        create_test_policy_ending(&db, customer.id, "P-EDGE-HI", day(2026, 3, 28)).await?;

        let scan = scan_between(
            &db,
            &RenewalConfig::default(),
            today,
            day(2026, 3, 5),
            day(2026, 3, 28),
        )
        .await?;

        assert_eq!(scan.entries.len(), 2);
        Ok(())
    }
}
