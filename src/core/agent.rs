//! Sales agent business logic.
//!
//! The entry form only offers agents whose status is `"Aktif"`.

use sea_orm::{QueryOrder, prelude::*};

use crate::entities::{SalesAgent, sales_agent};
use crate::errors::Result;

/// Status value marking an agent as assignable
pub const STATUS_ACTIVE: &str = "Aktif";

/// Retrieves all active agents, ordered alphabetically by full name.
pub async fn get_active_agents(db: &DatabaseConnection) -> Result<Vec<sales_agent::Model>> {
    SalesAgent::find()
        .filter(sales_agent::Column::Status.eq(STATUS_ACTIVE))
        .order_by_asc(sales_agent::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}
