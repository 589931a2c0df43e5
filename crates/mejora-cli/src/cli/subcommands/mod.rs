pub mod auth;
pub mod plans;
pub mod users;

pub use auth::AuthCommands;
pub use plans::PlanCommands;
pub use users::UserCommands;
