use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A faculty (facultad) or school grouping users and plans.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub dean: Option<String>,
}
