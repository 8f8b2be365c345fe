//! Collections business logic.
//!
//! The finance page tracks cash-sold policies: how much premium was
//! written, how much has been collected, and what remains outstanding.
//! Outstanding debt never goes negative - overpayment counts as settled.

use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;

use crate::entities::{Policy, policy};
use crate::errors::Result;

/// Payment method tracked by the collections view
pub const PAYMENT_METHOD_CASH: &str = "Nakit";

/// Totals over the cash-sold policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CollectionSummary {
    /// Premium written across the ledger
    pub total_premium: f64,
    /// Amount collected so far
    pub total_collected: f64,
    /// Sum of per-policy outstanding debt
    pub total_outstanding: f64,
}

/// Remaining debt on a single policy: `max(0, premium - paid)`.
#[must_use]
pub fn outstanding(premium: f64, paid: f64) -> f64 {
    (premium - paid).max(0.0)
}

/// Sums premium, collected, and outstanding amounts over a policy slice.
#[must_use]
pub fn summarize(policies: &[policy::Model]) -> CollectionSummary {
    policies.iter().fold(CollectionSummary::default(), |mut acc, p| {
        let paid = p.amount_paid.unwrap_or(0.0);
        acc.total_premium += p.premium;
        acc.total_collected += paid;
        acc.total_outstanding += outstanding(p.premium, paid);
        acc
    })
}

/// Retrieves the cash-sold policies, newest registration first.
pub async fn get_cash_policies(db: &DatabaseConnection) -> Result<Vec<policy::Model>> {
    Policy::find()
        .filter(policy::Column::PaymentMethod.eq(PAYMENT_METHOD_CASH))
        .order_by_desc(policy::Column::RegisteredAt)
        .all(db)
        .await
        .map_err(Into::into)
}
