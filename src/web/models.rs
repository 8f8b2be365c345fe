//! Request and response bodies for the HTTP API.
//!
//! Thin serde structs only - all derivation happens in `core`, these
//! types just shape what goes over the wire.

use serde::{Deserialize, Serialize};

use crate::core::auth::SessionUser;
use crate::core::finance::CollectionSummary;
use crate::core::renewal::Severity;
use crate::entities::policy;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable machine-readable code
    pub code: Option<String>,
}

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plain-text password; hashed before comparison
    pub password: String,
}

/// Successful login body
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The record persisted to the session store
    pub user: SessionUser,
}

/// Policy entry form body
#[derive(Debug, Deserialize)]
pub struct NewPolicyRequest {
    /// Customer full name
    pub full_name: String,
    /// Customer national id, 11 digits
    pub national_id: String,
    /// Customer phone
    pub phone: Option<String>,
    /// Customer e-mail
    pub email: Option<String>,
    /// Insurer-issued policy number
    pub policy_number: String,
    /// Product category
    pub product_type: String,
    /// Insurer company
    pub company: String,
    /// Vehicle plate
    pub plate: Option<String>,
    /// Document serial
    pub document_serial: Option<String>,
    /// First day of cover
    pub start_date: chrono::NaiveDate,
    /// Last day of cover; omitted means one year of cover
    pub end_date: Option<chrono::NaiveDate>,
    /// Premium amount
    pub premium: f64,
    /// Payment method; omitted means `"Nakit"`
    pub payment_method: Option<String>,
    /// Assigned sales agent
    pub agent_id: Option<i64>,
    /// Free-form notes
    pub description: Option<String>,
}

/// One policy in a listing, with the holder's name resolved
#[derive(Debug, Serialize)]
pub struct PolicyRow {
    /// The stored policy
    #[serde(flatten)]
    pub policy: policy::Model,
    /// Resolved customer display name
    pub customer_name: String,
}

/// Select-list content for the policy entry form
#[derive(Debug, Serialize)]
pub struct PolicyOptions {
    /// Offered product categories
    pub product_types: Vec<String>,
    /// Offered insurer companies
    pub companies: Vec<String>,
    /// Accepted payment methods, form default first
    pub payment_methods: Vec<String>,
    /// Assignable (active) agents
    pub agents: Vec<AgentOption>,
}

/// One assignable agent in the entry form's select list
#[derive(Debug, Serialize)]
pub struct AgentOption {
    /// Agent primary key
    pub id: i64,
    /// Agent display name
    pub full_name: String,
}

/// Optional overrides for the renewal window
#[derive(Debug, Default, Deserialize)]
pub struct RenewalQuery {
    /// Explicit window start (with `to`)
    pub from: Option<chrono::NaiveDate>,
    /// Explicit window end (with `from`)
    pub to: Option<chrono::NaiveDate>,
    /// Forward horizon in days from today
    pub lookahead: Option<i64>,
}

/// One renewal row with derived display fields
#[derive(Debug, Serialize)]
pub struct RenewalRow {
    /// The stored policy
    #[serde(flatten)]
    pub policy: policy::Model,
    /// Resolved customer display name
    pub customer_name: String,
    /// Whole days until the end date; negative when lapsed
    pub days_remaining: i64,
    /// Severity bucket
    pub severity: Severity,
}

/// Renewal page body
#[derive(Debug, Serialize)]
pub struct RenewalListResponse {
    /// Rows ordered by end date ascending
    pub entries: Vec<RenewalRow>,
    /// Inclusive window start used for the scan
    pub from: chrono::NaiveDate,
    /// Inclusive window end used for the scan
    pub to: chrono::NaiveDate,
    /// How many rows already lapsed
    pub lapsed_count: usize,
    /// How many rows are still upcoming
    pub upcoming_count: usize,
}

/// One cash-ledger row with collection state
#[derive(Debug, Serialize)]
pub struct FinanceRow {
    /// The stored policy
    #[serde(flatten)]
    pub policy: policy::Model,
    /// Resolved customer display name
    pub customer_name: String,
    /// Customer phone for follow-up calls
    pub customer_phone: Option<String>,
    /// Remaining debt, never negative
    pub outstanding: f64,
}

/// Finance page body
#[derive(Debug, Serialize)]
pub struct FinanceResponse {
    /// Cash-sold policies, newest first
    pub policies: Vec<FinanceRow>,
    /// Totals over the ledger
    pub summary: CollectionSummary,
}
