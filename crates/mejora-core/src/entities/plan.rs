use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PlanStatus;

/// An improvement plan authored by a docente and reviewed by a decano or director.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Plan {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: PlanStatus,
    pub owner_id: Option<i64>,
    pub owner_name: Option<String>,
    pub faculty: Option<String>,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
