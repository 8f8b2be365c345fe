//! Customer entity - Represents a policy-holding customer of the agency.
//!
//! Customers are looked up by national id during policy entry and created
//! on the fly when no match exists. Rows are insert-only in this surface.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Unique identifier for the customer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name as entered on the policy form
    pub full_name: String,
    /// 11-digit national identity number; unique in practice
    pub national_id: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact e-mail address
    pub email: Option<String>,
    /// Postal address
    pub address: Option<String>,
    /// When the customer record was first created
    pub registered_at: DateTimeUtc,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer holds many policies
    #[sea_orm(has_many = "super::policy::Entity")]
    Policies,
}

impl Related<super::policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Policies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
