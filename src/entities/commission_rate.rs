//! Commission rate entity - Per-product-type commission percentages.
//!
//! Fetched once per process by the rate cache and converted from percent
//! to fraction; a missing or empty table falls back to built-in defaults.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Commission rate database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commission_rates")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Insurance product category the rate applies to
    pub product_type: String,
    /// Rate as a percentage (e.g. `15.0` for 15%)
    pub rate_percent: f64,
}

/// `CommissionRate` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
