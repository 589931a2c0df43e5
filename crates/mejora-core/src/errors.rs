//! Domain error types.
//!
//! Transport and storage errors live in their own crates (`ApiError`,
//! `AuthError`, `ConfigError`).

use thiserror::Error;

use crate::enums::PlanStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A plan status change outside the approval flow.
    #[error("a plan cannot go from {from} to {to}")]
    InvalidTransition { from: PlanStatus, to: PlanStatus },

    /// A role tag outside the closed role set.
    #[error("unknown role '{0}' (expected Director, Docente, Decano or Administrador)")]
    UnknownRole(String),
}
