use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate counters served by the dashboard endpoint.
///
/// Every counter defaults to zero so partial payloads still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_plans: u32,
    #[serde(default)]
    pub pending_approval: u32,
    #[serde(default)]
    pub approved: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total_users: u32,
}
