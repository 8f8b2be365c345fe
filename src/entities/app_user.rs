//! Application user entity - Back-office login accounts.
//!
//! Passwords are stored as lowercase-hex SHA-256 digests of the UTF-8
//! password bytes. The digest is never serialized out of the store layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Application user database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique in practice
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Lowercase-hex SHA-256 digest of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// `"Aktif"` or `"Pasif"`; inactive users cannot sign in
    pub status: String,
}

/// `AppUser` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
