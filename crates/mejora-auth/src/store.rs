use std::path::PathBuf;

use mejora_core::entities::UserProfile;

use crate::error::AuthError;
use crate::session::Session;
use crate::storage::{FileStorage, NoStorage, SessionStorage};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const TOKEN_ENV: &str = "MEJORA_AUTH__TOKEN";

/// Unauthenticated entry point returned by [`SessionStore::clear`].
pub const LOGIN_PATH: &str = "/login";

/// Single owner of the persisted session record.
///
/// Every command reads the session through this accessor instead of touching
/// storage directly.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    env_override: bool,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            env_override: false,
        }
    }

    /// File-backed store in `dir`, or a no-op store when no directory exists.
    #[must_use]
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => Self::new(FileStorage::new(dir)),
            None => {
                tracing::debug!("no session directory available; using no-op storage");
                Self::new(NoStorage)
            }
        }
    }

    /// Let `MEJORA_AUTH__TOKEN` take precedence over the stored token.
    #[must_use]
    pub const fn with_env_override(mut self, enabled: bool) -> Self {
        self.env_override = enabled;
        self
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when either entry is missing, the token is blank, or the
    /// profile is not an object carrying a `role`. Never fails.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;

        let Some(raw_user) = self.storage.get(USER_KEY) else {
            tracing::debug!("session token present but profile entry missing");
            return None;
        };

        let parsed = match serde_json::from_str::<serde_json::Value>(&raw_user) {
            Ok(value) if value.is_object() => serde_json::from_value::<UserProfile>(value),
            Ok(_) => {
                tracing::debug!("stored profile is not a JSON object; treating as logged out");
                return None;
            }
            Err(error) => Err(error),
        };
        match parsed {
            Ok(user) => Some(Session::new(token, user)),
            Err(error) => {
                tracing::debug!(%error, "stored profile is unparsable; treating as logged out");
                None
            }
        }
    }

    /// Persist a freshly authenticated session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the storage backend rejects either entry.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)?;
        Ok(())
    }

    /// Remove both entries. Never fails; removal problems are logged.
    ///
    /// Returns the login path when `redirect` is set, for the caller to
    /// navigate to.
    pub fn clear(&self, redirect: bool) -> Option<String> {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(error) = self.storage.remove(key) {
                tracing::warn!(key, %error, "failed to remove session entry");
            }
        }
        redirect.then(|| LOGIN_PATH.to_string())
    }

    /// Where the active token comes from, for status display.
    #[must_use]
    pub fn token_source(&self) -> Option<&'static str> {
        if self.env_token().is_some() {
            return Some("env");
        }
        self.storage
            .get(TOKEN_KEY)
            .map(|_| self.storage.describe())
    }

    fn token(&self) -> Option<String> {
        self.env_token()
            .or_else(|| self.storage.get(TOKEN_KEY))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn env_token(&self) -> Option<String> {
        if !self.env_override {
            return None;
        }
        std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty())
    }
}
