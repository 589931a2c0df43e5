//! Where the persisted session entries live.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the `token` and `user` entries.
    /// Empty means `~/.mejora/session`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolved storage directory, or `None` when neither an explicit
    /// directory nor a home directory is available.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if !self.dir.trim().is_empty() {
            return Some(PathBuf::from(self.dir.trim()));
        }
        dirs::home_dir().map(|home| home.join(".mejora").join("session"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            dir: "/tmp/mejora-session".into(),
        };
        assert_eq!(
            config.resolved_dir(),
            Some(PathBuf::from("/tmp/mejora-session"))
        );
    }

    #[test]
    fn default_dir_is_under_home() {
        let config = SessionConfig::default();
        if let Some(dir) = config.resolved_dir() {
            assert!(dir.ends_with(".mejora/session"));
        }
    }
}
