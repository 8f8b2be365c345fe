//! Sales agent entity - Agency staff who close policies.
//!
//! Only agents whose status is `"Aktif"` are offered as assignable on the
//! policy entry form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sales agent database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_agents")]
pub struct Model {
    /// Unique identifier for the agent
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Agent full name
    pub full_name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact e-mail address
    pub email: Option<String>,
    /// Agent's personal commission share, as a fraction
    pub commission_rate: f64,
    /// `"Aktif"` or `"Pasif"`; only active agents are assignable
    pub status: String,
}

/// Defines relationships between `SalesAgent` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One agent closes many policies
    #[sea_orm(has_many = "super::policy::Entity")]
    Policies,
}

impl Related<super::policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Policies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
