//! Policy entity - The core insurance contract record.
//!
//! Each policy references its owning customer (and optionally the sales
//! agent who closed it), carries the premium and the commission computed
//! at entry time, and the validity dates that drive renewal tracking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Policy database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "policies")]
pub struct Model {
    /// Unique identifier for the policy
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning customer; always references an existing row
    pub customer_id: i64,
    /// Sales agent who closed the policy, if any
    pub agent_id: Option<i64>,
    /// Insurer-issued policy number
    pub policy_number: String,
    /// Insurance product category (e.g. "Kasko", "Trafik"); drives the commission rate
    pub product_type: String,
    /// Insurer company name
    pub company: String,
    /// Vehicle plate, for motor products
    pub plate: Option<String>,
    /// Document serial number
    pub document_serial: Option<String>,
    /// First day of cover
    pub start_date: Date,
    /// Last day of cover; drives renewal classification
    pub end_date: Date,
    /// Amount charged to the customer for the term
    pub premium: f64,
    /// Agency share computed from the premium at entry time; never recomputed
    pub commission: f64,
    /// Payment method (e.g. `"Nakit"`, `"Kredi Kartı"`)
    pub payment_method: String,
    /// Free-form notes
    pub description: Option<String>,
    /// Renewal workflow state (e.g. `"Süreç devam ediyor"`)
    pub renewal_status: String,
    /// Amount collected so far, for cash policies
    pub amount_paid: Option<f64>,
    /// When the last payment was received
    pub payment_date: Option<Date>,
    /// When the policy record was created
    pub registered_at: DateTimeUtc,
}

/// Defines relationships between Policy and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each policy belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// Each policy may reference one sales agent
    #[sea_orm(
        belongs_to = "super::sales_agent::Entity",
        from = "Column::AgentId",
        to = "super::sales_agent::Column::Id"
    )]
    SalesAgent,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::sales_agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesAgent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
