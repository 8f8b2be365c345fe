//! Login business logic.
//!
//! Credentials check against the `app_users` table: the stored value is a
//! lowercase-hex SHA-256 digest of the UTF-8 password bytes, and only
//! accounts with status `"Aktif"` may sign in. Every failure collapses to
//! the same `None` so callers cannot distinguish an unknown user from a
//! wrong password or an inactive account.

use sea_orm::{QuerySelect, prelude::*};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::entities::{AppUser, app_user};
use crate::errors::Result;

/// Status value an account needs in order to sign in
pub const STATUS_ACTIVE: &str = "Aktif";

/// The signed-in user record persisted by the session store.
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User primary key
    pub id: i64,
    /// Login name
    pub username: String,
    /// Display name
    pub full_name: String,
    /// Account status at login time
    pub status: String,
}

impl From<app_user::Model> for SessionUser {
    fn from(user: app_user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            status: user.status,
        }
    }
}

/// Lowercase-hex SHA-256 digest of the UTF-8 password bytes.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Checks a username/password pair against the user table.
///
/// Returns the session record on success and `None` for every failure
/// cause: unknown username, inactive status, or digest mismatch.
pub async fn authenticate(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<Option<SessionUser>> {
    let user = AppUser::find()
        .filter(app_user::Column::Username.eq(username))
        .limit(1)
        .one(db)
        .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    if user.status != STATUS_ACTIVE {
        return Ok(None);
    }

    if user.password_hash != hash_password(password) {
        return Ok(None);
    }

    Ok(Some(SessionUser::from(user)))
}
