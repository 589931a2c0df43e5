//! # mejora-core
//!
//! Domain types shared by every crate of the improvement-plan client:
//! - Entity structs for the remote API payloads (plans, users, faculties, audit logs)
//! - The closed `Role` set and the plan status state machine
//! - Resource kinds addressable through the REST API
//! - Domain errors for role parsing and status transitions

pub mod entities;
pub mod enums;
pub mod errors;
