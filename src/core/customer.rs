//! Customer business logic - lookup and creation.
//!
//! Customers are keyed by national id in practice: the policy entry flow
//! looks the id up first and only inserts a new row when no match exists.

use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

use crate::entities::{Customer, customer};
use crate::errors::Result;

/// Retrieves all customers, ordered alphabetically by full name.
pub async fn get_all_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a customer by national id, returning None if no row matches.
pub async fn get_customer_by_national_id(
    db: &DatabaseConnection,
    national_id: &str,
) -> Result<Option<customer::Model>> {
    Customer::find()
        .filter(customer::Column::NationalId.eq(national_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new customer record with the registration timestamp set to now.
pub async fn create_customer(
    db: &DatabaseConnection,
    full_name: String,
    national_id: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> Result<customer::Model> {
    let customer = customer::ActiveModel {
        full_name: Set(full_name),
        national_id: Set(national_id),
        phone: Set(phone),
        email: Set(email),
        address: Set(None),
        registered_at: Set(Utc::now()),
        ..Default::default()
    };

    customer.insert(db).await.map_err(Into::into)
}

/// Resolves a customer id to a display name, used by listings and the CSV
/// export when joining policies to their holders.
#[must_use]
pub fn display_name(customers: &[customer::Model], customer_id: i64) -> String {
    customers
        .iter()
        .find(|c| c.id == customer_id)
        .map_or_else(|| "Bilinmiyor".to_string(), |c| c.full_name.clone())
}
