//! File-backed session store.
//!
//! Holds the single signed-in-user record as one JSON file at a fixed
//! path - the service-side equivalent of the browser's one localStorage
//! key. Purely a client hint: no encryption, no expiry, no server-side
//! validation. Reads are synchronous so the route guard can check the
//! session inline before any handler runs; a missing or unreadable file
//! simply reads as "not signed in".

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::auth::SessionUser;
use crate::errors::Result;

/// Persistent store for the signed-in-user record
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store over the given file path. The file does not need
    /// to exist yet.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists the signed-in user, replacing any previous record.
    pub fn set(&self, user: &SessionUser) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(user)?)?;
        Ok(())
    }

    /// Reads the current session record.
    ///
    /// A missing file means no session; an unreadable or corrupt file is
    /// logged and treated the same way rather than failing the caller.
    #[must_use]
    pub fn get(&self) -> Option<SessionUser> {
        let contents = match fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read session file: {e}");
                return None;
            }
        };

        match serde_json::from_slice(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Failed to decode session record: {e}");
                None
            }
        }
    }

    /// Removes the session record. Clearing an absent session is not an
    /// error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
