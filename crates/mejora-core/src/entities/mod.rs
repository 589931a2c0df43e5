//! Entity structs for the remote API payloads.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod audit;
mod faculty;
mod plan;
mod profile;
mod stats;
mod user;

pub use audit::AuditLog;
pub use faculty::Faculty;
pub use plan::Plan;
pub use profile::{ProfileId, UserProfile};
pub use stats::DashboardStats;
pub use user::{NewUser, User};
