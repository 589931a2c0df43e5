//! # mejora-auth
//!
//! Client-held session for the improvement-plan client.
//!
//! A session is two independent string entries: an opaque bearer `token` and a
//! serialized `user` profile. Reading is fail-silent: a missing entry or a
//! profile that does not deserialize means "logged out", never an error.

pub mod error;
pub mod session;
pub mod storage;
pub mod store;

pub use error::AuthError;
pub use session::Session;
pub use storage::{FileStorage, MemoryStorage, NoStorage, SessionStorage};
pub use store::{LOGIN_PATH, SessionStore};
