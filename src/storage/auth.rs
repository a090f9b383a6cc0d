use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::{Config, SessionState, SessionUser};

const AUTH_FILE: &str = "n9r-auth.json";
const SNAPSHOT_VERSION: u32 = 1;

/// Persisted subset of the session: user, token, and the authenticated
/// flag. The loading flag is deliberately excluded so a restart never
/// resumes in a loading state.
///
/// The token is stored in clear text; treat the file like a netrc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub version: u32,
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthSnapshot {
    pub fn capture(session: &SessionState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            user: session.user.clone(),
            token: session.token.clone(),
            is_authenticated: session.is_authenticated,
        }
    }

    pub fn restore(self) -> SessionState {
        SessionState {
            user: self.user,
            token: self.token,
            is_authenticated: self.is_authenticated,
            is_loading: false,
        }
    }
}

/// Auth snapshot storage manager.
pub struct AuthStorage {
    auth_path: PathBuf,
}

impl AuthStorage {
    pub fn new() -> Result<Self> {
        let config_dir = Config::ensure_config_dir()?;
        Ok(Self {
            auth_path: config_dir.join(AUTH_FILE),
        })
    }

    /// Storage rooted at an explicit path instead of the config dir.
    pub fn at(auth_path: PathBuf) -> Self {
        Self { auth_path }
    }

    /// Load the persisted snapshot. An absent file, an unparsable
    /// file, or an unknown snapshot version all hydrate as `None`
    /// rather than failing startup.
    pub fn load(&self) -> Option<AuthSnapshot> {
        if !self.auth_path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&self.auth_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read auth snapshot: {}", e);
                return None;
            }
        };

        let snapshot: AuthSnapshot = match serde_json::from_str(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Discarding corrupt auth snapshot: {}", e);
                return None;
            }
        };

        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                "Discarding auth snapshot with unknown version {}",
                snapshot.version
            );
            return None;
        }

        Some(snapshot)
    }

    /// Save a snapshot to disk. Unlike `load`, failures here are
    /// reported so the caller can surface them.
    pub fn save(&self, snapshot: &AuthSnapshot) -> Result<()> {
        let content =
            serde_json::to_string_pretty(snapshot).context("Failed to serialize auth snapshot")?;

        std::fs::write(&self.auth_path, content).context("Failed to write auth snapshot")?;

        Ok(())
    }

    /// Delete the snapshot file, used on logout.
    pub fn delete(&self) -> Result<()> {
        if self.auth_path.exists() {
            std::fs::remove_file(&self.auth_path).context("Failed to delete auth snapshot")?;
        }
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.auth_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: 7,
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            email: None,
            avatar_url: Some("https://avatars.example/7".to_string()),
        }
    }

    fn storage_in(dir: &tempfile::TempDir) -> AuthStorage {
        AuthStorage::at(dir.path().join(AUTH_FILE))
    }

    #[test]
    fn test_capture_excludes_loading_flag() {
        let mut session = SessionState::new();
        session.login(sample_user(), "ghp_token".to_string());
        session.set_loading(true);

        let restored = AuthSnapshot::capture(&session).restore();

        assert_eq!(restored.user, Some(sample_user()));
        assert_eq!(restored.token.as_deref(), Some("ghp_token"));
        assert!(restored.is_authenticated);
        assert!(!restored.is_loading);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut session = SessionState::new();
        session.login(sample_user(), "ghp_token".to_string());
        storage.save(&AuthSnapshot::capture(&session)).unwrap();

        // Simulated restart: a fresh load from the same path.
        let restored = storage.load().unwrap().restore();
        assert_eq!(restored.user, Some(sample_user()));
        assert_eq!(restored.token.as_deref(), Some("ghp_token"));
        assert!(restored.is_authenticated);
        assert!(!restored.is_loading);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), "{not json").unwrap();

        assert!(storage.load().is_none());
    }

    #[test]
    fn test_load_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(
            storage.path(),
            r#"{"version": 99, "user": null, "token": null, "isAuthenticated": false}"#,
        )
        .unwrap();

        assert!(storage.load().is_none());
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let session = SessionState::new();
        let content = serde_json::to_string(&AuthSnapshot::capture(&session)).unwrap();
        assert!(content.contains("\"isAuthenticated\""));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        storage.delete().unwrap();

        let session = SessionState::new();
        storage.save(&AuthSnapshot::capture(&session)).unwrap();
        storage.delete().unwrap();
        assert!(storage.load().is_none());
    }
}
