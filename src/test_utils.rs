//! Shared test utilities for `PolicyDesk`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::config::AppConfig;
use crate::config::renewal::RenewalConfig;
use crate::core::auth::hash_password;
use crate::core::{customer, policy};
use crate::entities::{app_user, policy as policy_entity, sales_agent};
use crate::errors::Result;
use crate::web::AppState;

static SESSION_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates full application state over a fresh in-memory database and a
/// unique temporary session file, for router-level tests.
pub async fn setup_test_state() -> Result<AppState> {
    let db = setup_test_db().await?;
    let n = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
    let session_file = std::env::temp_dir().join(format!(
        "policy-desk-test-session-{}-{n}.json",
        std::process::id()
    ));
    // Leftovers from an earlier run with the same pid must not leak in
    let _ = std::fs::remove_file(&session_file);

    let config = AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        session_file,
        renewal: RenewalConfig::default(),
        poll_interval: Duration::from_secs(30),
    };
    Ok(AppState::new(db, config))
}

/// Creates a test customer with sensible defaults.
///
/// # Defaults
/// * `national_id`: None
/// * `phone`: `"05551234567"`
/// * `email`: None
pub async fn create_test_customer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<crate::entities::customer::Model> {
    customer::create_customer(
        db,
        name.to_string(),
        None,
        Some("05551234567".to_string()),
        None,
    )
    .await
}

/// Creates a test sales agent with the given status.
pub async fn create_test_agent(
    db: &DatabaseConnection,
    name: &str,
    status: &str,
) -> Result<sales_agent::Model> {
    sales_agent::ActiveModel {
        full_name: Set(name.to_string()),
        phone: Set(None),
        email: Set(None),
        commission_rate: Set(0.05),
        status: Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test login account with the password stored as its digest.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    status: &str,
) -> Result<app_user::Model> {
    app_user::ActiveModel {
        username: Set(username.to_string()),
        full_name: Set("Test Kullanıcısı".to_string()),
        password_hash: Set(hash_password(password)),
        status: Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

fn base_policy(customer_id: i64, number: &str) -> policy_entity::ActiveModel {
    let today = Utc::now().date_naive();
    policy_entity::ActiveModel {
        customer_id: Set(customer_id),
        agent_id: Set(None),
        policy_number: Set(number.to_string()),
        product_type: Set("Kasko".to_string()),
        company: Set("Anadolu Sigorta".to_string()),
        plate: Set(None),
        document_serial: Set(None),
        start_date: Set(today),
        end_date: Set(policy::default_end_date(today)),
        premium: Set(1000.0),
        commission: Set(150.0),
        payment_method: Set("Nakit".to_string()),
        description: Set(None),
        renewal_status: Set(policy::RENEWAL_STATUS_IN_PROGRESS.to_string()),
        amount_paid: Set(None),
        payment_date: Set(None),
        registered_at: Set(Utc::now()),
        ..Default::default()
    }
}

/// Creates a test policy with a specific end date, for renewal tests.
pub async fn create_test_policy_ending(
    db: &DatabaseConnection,
    customer_id: i64,
    number: &str,
    end_date: NaiveDate,
) -> Result<policy_entity::Model> {
    let mut row = base_policy(customer_id, number);
    row.end_date = Set(end_date);
    row.insert(db).await.map_err(Into::into)
}

/// Creates a test policy with a specific payment method, premium, and
/// collected amount, for finance tests.
pub async fn create_test_policy_paid(
    db: &DatabaseConnection,
    customer_id: i64,
    number: &str,
    payment_method: &str,
    premium: f64,
    amount_paid: Option<f64>,
) -> Result<policy_entity::Model> {
    let mut row = base_policy(customer_id, number);
    row.payment_method = Set(payment_method.to_string());
    row.premium = Set(premium);
    row.amount_paid = Set(amount_paid);
    row.insert(db).await.map_err(Into::into)
}

/// Creates a test policy with a specific product type, company, and
/// premium, for reporting and cross-sell tests.
pub async fn create_test_policy_with(
    db: &DatabaseConnection,
    customer_id: i64,
    number: &str,
    product_type: &str,
    company: &str,
    premium: f64,
) -> Result<policy_entity::Model> {
    let mut row = base_policy(customer_id, number);
    row.product_type = Set(product_type.to_string());
    row.company = Set(company.to_string());
    row.premium = Set(premium);
    row.insert(db).await.map_err(Into::into)
}

/// Builds a policy entry form input with sensible defaults: Kasko from
/// Anadolu Sigorta at a 10 000 premium starting today.
pub fn new_test_policy_input(full_name: &str, national_id: &str, number: &str) -> policy::NewPolicy {
    policy::NewPolicy {
        full_name: full_name.to_string(),
        national_id: national_id.to_string(),
        phone: Some("05551234567".to_string()),
        email: None,
        policy_number: number.to_string(),
        product_type: "Kasko".to_string(),
        company: "Anadolu Sigorta".to_string(),
        plate: None,
        document_serial: None,
        start_date: Utc::now().date_naive(),
        end_date: None,
        premium: 10000.0,
        payment_method: None,
        agent_id: None,
        description: None,
    }
}
