use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, EntityKind};

/// An append-only audit log entry recorded by the backend on every mutation.
///
/// `entity` and `action` keep the server's raw tags so that values outside
/// the known vocabulary still filter and export as sent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditLog {
    pub id: i64,
    pub entity: String,
    pub entity_id: Option<i64>,
    pub action: String,
    pub user_email: Option<String>,
    pub description: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    #[must_use]
    pub fn entity_kind(&self) -> EntityKind {
        EntityKind::from_tag(&self.entity)
    }

    #[must_use]
    pub fn action_kind(&self) -> AuditAction {
        AuditAction::from_tag(&self.action)
    }
}
