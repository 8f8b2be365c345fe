//! Database configuration module for `PolicyDesk`.
//!
//! This module handles the connection to the remote table store and table
//! creation using `SeaORM`. Production deployments point `DATABASE_URL` at
//! the hosted Postgres instance; tests and local runs fall back to a local
//! `SQLite` file. Table creation uses `SeaORM`'s
//! `Schema::create_table_from_entity` so the store schema always matches
//! the Rust entity definitions without hand-written SQL.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, PaginatorTrait, Schema, Set};

use crate::core::commission;
use crate::entities::{AppUser, CommissionRate, Customer, Policy, SalesAgent, commission_rate};
use crate::errors::Result;

/// Gets the store URL from the `DATABASE_URL` environment variable or
/// returns the default local `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/policy_desk.sqlite".to_string())
}

/// Establishes a connection to the table store.
///
/// Connection failures surface as-is; there is no retry layer, callers
/// decide whether startup should abort.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all store tables from the entity definitions when they do not
/// exist yet.
///
/// Safe to run on every startup: each statement carries `IF NOT EXISTS`,
/// so an already-provisioned hosted store is left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut customer_table = schema.create_table_from_entity(Customer);
    let mut agent_table = schema.create_table_from_entity(SalesAgent);
    let mut policy_table = schema.create_table_from_entity(Policy);
    let mut rate_table = schema.create_table_from_entity(CommissionRate);
    let mut user_table = schema.create_table_from_entity(AppUser);

    db.execute(builder.build(customer_table.if_not_exists())).await?;
    db.execute(builder.build(agent_table.if_not_exists())).await?;
    db.execute(builder.build(policy_table.if_not_exists())).await?;
    db.execute(builder.build(rate_table.if_not_exists())).await?;
    db.execute(builder.build(user_table.if_not_exists())).await?;

    Ok(())
}

/// Seeds the commission-rate table with the built-in default rates when it
/// is empty, so a fresh store computes the same commissions the fallback
/// table would.
pub async fn seed_default_rates(db: &DatabaseConnection) -> Result<()> {
    use sea_orm::EntityTrait;

    let existing = CommissionRate::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    let rows: Vec<commission_rate::ActiveModel> = commission::DEFAULT_RATES
        .iter()
        .map(|(product_type, fraction)| commission_rate::ActiveModel {
            product_type: Set((*product_type).to_string()),
            rate_percent: Set(fraction * 100.0),
            ..Default::default()
        })
        .collect();

    CommissionRate::insert_many(rows).exec(db).await?;
    Ok(())
}
