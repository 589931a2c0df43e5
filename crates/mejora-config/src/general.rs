//! General client preferences.

use serde::{Deserialize, Serialize};

/// Default rows per page for list commands.
const fn default_page_size() -> usize {
    10
}

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_institutional_domain() -> String {
    "universidad.edu.ec".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Directory CSV exports are written to when `--export` has no value.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Domain every new account's email must belong to.
    #[serde(default = "default_institutional_domain")]
    pub institutional_domain: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            export_dir: default_export_dir(),
            institutional_domain: default_institutional_domain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.institutional_domain, "universidad.edu.ec");
    }
}
