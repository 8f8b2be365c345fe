//! Portfolio reporting business logic.
//!
//! Aggregates the policy collection for the reports page (counts, sums,
//! per-company and per-product breakdowns), produces the CSV export, and
//! derives the dashboard stat cards. All functions are framework-agnostic
//! and return structured data that the HTTP layer serializes.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::core::{customer, finance};
use crate::entities::{customer as customer_entity, policy};
use crate::errors::Result;

/// Forward horizon of the dashboard's "renewals due" card, in days
pub const DASHBOARD_RENEWAL_LOOKAHEAD_DAYS: i64 = 30;

/// Column headers of the CSV export
pub const CSV_HEADERS: [&str; 8] = [
    "Poliçe No",
    "Müşteri",
    "Tür",
    "Şirket",
    "Prim",
    "Komisyon",
    "Başlangıç",
    "Bitiş",
];

/// One row of a count breakdown, e.g. policies per company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    /// Group label (company or product type)
    pub name: String,
    /// Number of policies in the group
    pub count: usize,
}

/// Aggregate view of the whole policy portfolio
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    /// Total number of policies
    pub total_policies: usize,
    /// Sum of premiums
    pub total_premium: f64,
    /// Sum of commissions
    pub total_commission: f64,
    /// Number of distinct policy-holding customers
    pub distinct_customers: usize,
    /// Policy counts per insurer company, descending
    pub by_company: Vec<CountEntry>,
    /// Policy counts per product type, descending
    pub by_product: Vec<CountEntry>,
}

/// The dashboard's stat cards
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Total number of policies
    pub total_policies: usize,
    /// Policies ending within the next 30 days
    pub renewals_due: usize,
    /// Sum of premiums
    pub total_premium: f64,
    /// Total outstanding debt across all policies
    pub total_outstanding: f64,
}

fn count_by<F>(policies: &[policy::Model], key: F) -> Vec<CountEntry>
where
    F: Fn(&policy::Model) -> &str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for p in policies {
        *counts.entry(key(p)).or_insert(0) += 1;
    }

    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    // Descending by count; ties alphabetical so output is deterministic
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Builds the aggregate portfolio report from a policy collection.
#[must_use]
pub fn build_report(policies: &[policy::Model]) -> PortfolioReport {
    let distinct_customers = policies
        .iter()
        .map(|p| p.customer_id)
        .collect::<HashSet<_>>()
        .len();

    PortfolioReport {
        total_policies: policies.len(),
        total_premium: policies.iter().map(|p| p.premium).sum(),
        total_commission: policies.iter().map(|p| p.commission).sum(),
        distinct_customers,
        by_company: count_by(policies, |p| p.company.as_str()),
        by_product: count_by(policies, |p| p.product_type.as_str()),
    }
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Serializes the policy collection as the downloadable report CSV.
///
/// UTF-8 with a byte-order marker so spreadsheet imports pick the right
/// encoding; every field double-quoted with internal quotes doubled;
/// amounts with two decimals; dates as `dd.mm.yyyy`.
#[must_use]
pub fn export_csv(policies: &[policy::Model], customers: &[customer_entity::Model]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(&CSV_HEADERS.join(","));
    out.push('\n');

    for p in policies {
        let fields = [
            p.policy_number.clone(),
            customer::display_name(customers, p.customer_id),
            p.product_type.clone(),
            p.company.clone(),
            format!("{:.2}", p.premium),
            format!("{:.2}", p.commission),
            p.start_date.format("%d.%m.%Y").to_string(),
            p.end_date.format("%d.%m.%Y").to_string(),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// File name of the CSV download, carrying the export date.
#[must_use]
pub fn csv_filename(today: NaiveDate) -> String {
    format!("policy-desk-rapor-{}.csv", today.format("%Y-%m-%d"))
}

/// Derives the dashboard stat cards from the full policy collection.
pub async fn dashboard_stats(db: &DatabaseConnection, today: NaiveDate) -> Result<DashboardStats> {
    let policies = crate::core::policy::get_all_policies(db).await?;
    let horizon = today + Duration::days(DASHBOARD_RENEWAL_LOOKAHEAD_DAYS);

    let renewals_due = policies
        .iter()
        .filter(|p| p.end_date >= today && p.end_date <= horizon)
        .count();
    let total_outstanding = policies
        .iter()
        .map(|p| finance::outstanding(p.premium, p.amount_paid.unwrap_or(0.0)))
        .sum();

    Ok(DashboardStats {
        total_policies: policies.len(),
        renewals_due,
        total_premium: policies.iter().map(|p| p.premium).sum(),
        total_outstanding,
    })
}
