use serde::{Deserialize, Serialize};

/// Authenticated GitHub user profile as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub login: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Current authentication session.
///
/// Owned by `AppState` and mutated only through the methods below.
/// Persistence is explicit: the main loop captures an `AuthSnapshot`
/// (see `storage::auth`) when it decides to flush, so nothing here
/// touches the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the user and derives the authenticated flag from it.
    pub fn set_user(&mut self, user: Option<SessionUser>) {
        self.is_authenticated = user.is_some();
        self.user = user;
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn login(&mut self, user: SessionUser, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.is_loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.is_loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| if u.name.is_empty() { &u.login } else { &u.name })
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: 42,
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            email: Some("octocat@github.com".to_string()),
            avatar_url: None,
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionState::new();
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[test]
    fn test_login_sets_all_fields() {
        let mut session = SessionState::new();
        session.set_loading(true);
        session.login(sample_user(), "ghp_token".to_string());

        assert_eq!(session.user, Some(sample_user()));
        assert_eq!(session.token.as_deref(), Some("ghp_token"));
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = SessionState::new();
        session.login(sample_user(), "ghp_token".to_string());
        session.set_loading(true);
        session.logout();

        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_set_user_derives_authenticated() {
        let mut session = SessionState::new();

        session.set_user(Some(sample_user()));
        assert!(session.is_authenticated);

        session.set_user(None);
        assert!(!session.is_authenticated);
    }

    #[test]
    fn test_set_token_leaves_other_fields() {
        let mut session = SessionState::new();
        session.set_token(Some("ghp_token".to_string()));

        assert_eq!(session.token.as_deref(), Some("ghp_token"));
        assert!(session.user.is_none());
        assert!(!session.is_authenticated);
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let mut session = SessionState::new();
        let mut user = sample_user();
        user.name = String::new();
        session.set_user(Some(user));

        assert_eq!(session.display_name(), Some("octocat"));
    }
}
