//! Entity module - Contains all SeaORM entity definitions for the remote
//! table store. These entities represent the store's tables and their
//! relationships. Each entity has a Model struct for data and an Entity
//! struct for operations.

pub mod app_user;
pub mod commission_rate;
pub mod customer;
pub mod policy;
pub mod sales_agent;

// Re-export specific types to avoid conflicts
pub use app_user::{Column as AppUserColumn, Entity as AppUser, Model as AppUserModel};
pub use commission_rate::{
    Column as CommissionRateColumn, Entity as CommissionRate, Model as CommissionRateModel,
};
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use policy::{Column as PolicyColumn, Entity as Policy, Model as PolicyModel};
pub use sales_agent::{Column as SalesAgentColumn, Entity as SalesAgent, Model as SalesAgentModel};
