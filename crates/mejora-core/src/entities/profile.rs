use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Backend user identifier; some endpoints emit numbers, others strings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

/// Profile cached next to the bearer token after login.
///
/// `role` is the raw tag so that unknown roles survive a round trip through
/// storage; resolve it with [`crate::enums::Role::from_tag`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<ProfileId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub facultad: Option<String>,
    pub role: String,
}
