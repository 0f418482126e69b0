//! Local session persistence
//!
//! The session is a single process-wide slot holding the last authenticated
//! user and a logged-in flag. Reads are fail-safe: any storage trouble is
//! reported as "not logged in" rather than an error the launch path would
//! have to handle. Writes surface a `Storage` error, which callers treat as
//! non-fatal.

use crate::core::StoredUser;
use crate::error::{Result, ShadowError};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

const USER_FILE: &str = "user_data.json";
const FLAG_FILE: &str = "is_logged_in";

/// Durable store for the current session
pub trait SessionStore: Send + Sync {
    /// Whether a session is marked logged in
    fn is_logged_in(&self) -> bool;

    /// The stored user record, if any
    fn load_user(&self) -> Option<StoredUser>;

    /// Persist the user and mark the session logged in
    fn save(&self, user: &StoredUser) -> Result<()>;

    /// Drop the stored user and mark the session logged out
    fn clear(&self) -> Result<()>;
}

/// The session as read at launch
///
/// An explicit value rather than ambient global state; the router owns it
/// for the duration of one routing decision.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<StoredUser>,
    pub logged_in: bool,
}

impl Session {
    /// Read the current session, failing safe to logged-out
    pub fn read_from(store: &dyn SessionStore) -> Self {
        if !store.is_logged_in() {
            return Self::default();
        }
        let user = store.load_user();
        Self {
            logged_in: user.is_some(),
            user,
        }
    }
}

/// File-backed session store
///
/// Persists the user record as JSON next to a `"true"`/`"false"` flag file
/// under the platform data directory.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at the given directory
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    fn flag_path(&self) -> PathBuf {
        self.dir.join(FLAG_FILE)
    }

    fn write(&self, path: &PathBuf, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(path, contents))
            .map_err(|err| {
                tracing::warn!(path = %path.display(), error = %err, "session write failed");
                ShadowError::Storage(err.to_string())
            })
    }
}

impl SessionStore for FileSessionStore {
    fn is_logged_in(&self) -> bool {
        // Unreadable flag means logged out, never an error.
        fs::read_to_string(self.flag_path())
            .map(|flag| flag.trim() == "true")
            .unwrap_or(false)
    }

    fn load_user(&self) -> Option<StoredUser> {
        let contents = fs::read_to_string(self.user_path()).ok()?;
        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored session user is unreadable");
                None
            },
        }
    }

    fn save(&self, user: &StoredUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.write(&self.user_path(), &json)?;
        self.write(&self.flag_path(), "true")
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(self.user_path()) {
            Ok(()) => {},
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {},
            Err(err) => {
                tracing::warn!(error = %err, "could not remove stored session user");
            },
        }
        self.write(&self.flag_path(), "false")
    }
}

/// In-memory session store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: Mutex<(Option<StoredUser>, bool)>,
}

impl MemorySessionStore {
    /// Create an empty, logged-out store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a logged-in user
    #[must_use]
    pub fn with_user(user: StoredUser) -> Self {
        Self {
            state: Mutex::new((Some(user), true)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn is_logged_in(&self) -> bool {
        self.state.lock().map(|state| state.1).unwrap_or(false)
    }

    fn load_user(&self) -> Option<StoredUser> {
        self.state.lock().ok().and_then(|state| state.0.clone())
    }

    fn save(&self, user: &StoredUser) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ShadowError::Storage("session lock poisoned".to_string()))?;
        *state = (Some(user.clone()), true);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ShadowError::Storage("session lock poisoned".to_string()))?;
        *state = (None, false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stored_user(role_label: &str) -> StoredUser {
        StoredUser {
            id: "7".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role_label: role_label.to_string(),
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session"));

        assert!(!store.is_logged_in());
        assert!(store.load_user().is_none());

        store.save(&stored_user("Tecnico")).expect("save session");
        assert!(store.is_logged_in());
        assert_eq!(store.load_user().unwrap().role_label, "Tecnico");
    }

    #[test]
    fn test_file_store_clear_flips_flag_and_drops_user() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session"));

        store.save(&stored_user("Estandar")).unwrap();
        store.clear().expect("clear session");

        assert!(!store.is_logged_in());
        assert!(store.load_user().is_none());
    }

    #[test]
    fn test_clear_before_any_save_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session"));
        store.clear().expect("clearing an empty session is fine");
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_corrupted_user_file_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("session");
        let store = FileSessionStore::new(dir.clone());

        store.save(&stored_user("Tecnico")).unwrap();
        std::fs::write(dir.join(USER_FILE), "not json").unwrap();

        assert!(store.load_user().is_none());
    }

    #[test]
    fn test_session_read_fail_safe() {
        let store = MemorySessionStore::new();
        let session = Session::read_from(&store);
        assert!(!session.logged_in);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_session_reads_logged_in_user() {
        let store = MemorySessionStore::with_user(stored_user("Administrador"));
        let session = Session::read_from(&store);
        assert!(session.logged_in);
        assert_eq!(session.user.unwrap().role_label, "Administrador");
    }

    #[test]
    fn test_flag_set_but_user_missing_reads_as_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("session");
        let store = FileSessionStore::new(dir.clone());

        store.save(&stored_user("Tecnico")).unwrap();
        std::fs::remove_file(dir.join(USER_FILE)).unwrap();

        let session = Session::read_from(&store);
        assert!(!session.logged_in);
        assert!(session.user.is_none());
    }
}
