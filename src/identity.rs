//! Anonymous identity bootstrap.
//!
//! A stable opaque id is created on first launch and reused on every later
//! one, so activity reports can be attributed to the same player without
//! any account. When the backing file cannot be read or written the game
//! keeps running with a freshly generated `guest-` id; only cross-session
//! continuity is lost.

use crate::warn_log;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const APP_DIR_NAME: &str = "ordle";
const IDENTITY_FILE_NAME: &str = "identity";

/// Result of a bootstrap call. `is_new` is true only for the call that
/// created the id (first launch, or any degraded fallback id).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub is_new: bool,
}

fn default_identity_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(IDENTITY_FILE_NAME))
}

fn read_identity(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let id = contents.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

fn write_identity(path: &Path, id: &str) -> bool {
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return false;
    }
    fs::write(path, format!("{id}\n")).is_ok()
}

fn fallback_identity() -> Identity {
    Identity {
        id: format!("guest-{}", Uuid::new_v4().simple()),
        is_new: true,
    }
}

pub struct IdentityStore {
    path: Option<PathBuf>,
}

impl IdentityStore {
    /// Store rooted in the platform data directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self {
            path: default_identity_path(),
        }
    }

    /// Store backed by an explicit file, used by tests.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Returns the persisted id, creating and persisting one on first call.
    /// Never fails: storage trouble degrades to a throwaway guest id.
    pub fn get_or_create(&self) -> Identity {
        let Some(path) = &self.path else {
            warn_log!("no data directory available, using throwaway guest identity");
            return fallback_identity();
        };

        if let Some(id) = read_identity(path) {
            return Identity { id, is_new: false };
        }

        let id = Uuid::new_v4().to_string();
        if write_identity(path, &id) {
            Identity { id, is_new: true }
        } else {
            warn_log!(
                "could not persist identity to {}, using throwaway guest identity",
                path.display()
            );
            fallback_identity()
        }
    }

    /// Forgets the persisted id. The next bootstrap starts over.
    pub fn clear(&self) {
        if let Some(path) = &self.path {
            let _ = fs::remove_file(path);
        }
    }
}
