//! Roles, statuses, resource kinds, and audit vocabulary.
//!
//! Status and audit enums use `snake_case` serialization. `Role` keeps the
//! exact tags the backend issues (`"Director"`, `"Docente"`, ...), because
//! those strings are persisted verbatim in the session profile.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Closed set of user classifications.
///
/// The role decides which navigation menu and which dashboard view a session
/// sees. Any tag outside this set is treated as "no role", never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    Director,
    Docente,
    Decano,
    Administrador,
}

impl Role {
    pub const ALL: [Self; 4] = [
        Self::Director,
        Self::Docente,
        Self::Decano,
        Self::Administrador,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Director => "Director",
            Self::Docente => "Docente",
            Self::Decano => "Decano",
            Self::Administrador => "Administrador",
        }
    }

    /// Resolve a raw role tag. Matching ignores surrounding whitespace and
    /// ASCII case; anything else yields `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| CoreError::UnknownRole(s.trim().to_string()))
    }
}

// ---------------------------------------------------------------------------
// PlanStatus
// ---------------------------------------------------------------------------

/// Status of an improvement plan through its approval lifecycle.
///
/// ```text
/// borrador → enviado → aprobado → en_progreso → completado
///                    → rechazado → borrador (revision)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Borrador,
    Enviado,
    Aprobado,
    Rechazado,
    EnProgreso,
    Completado,
}

impl PlanStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Borrador => &[Self::Enviado],
            Self::Enviado => &[Self::Aprobado, Self::Rechazado],
            Self::Rechazado => &[Self::Borrador],
            Self::Aprobado => &[Self::EnProgreso],
            Self::EnProgreso => &[Self::Completado],
            Self::Completado => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Move to `next` if the approval flow allows it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] otherwise.
    pub fn transition_to(self, next: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition { from: self, to: next })
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Borrador => "borrador",
            Self::Enviado => "enviado",
            Self::Aprobado => "aprobado",
            Self::Rechazado => "rechazado",
            Self::EnProgreso => "en_progreso",
            Self::Completado => "completado",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Outcome an approver records on a submitted plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Status the plan ends up in once the decision is applied.
    #[must_use]
    pub const fn target_status(self) -> PlanStatus {
        match self {
            Self::Approve => PlanStatus::Aprobado,
            Self::Reject => PlanStatus::Rechazado,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
    Logout,
    Approve,
    Reject,
    #[serde(other)]
    Other,
}

impl AuditAction {
    pub const KNOWN: [Self; 7] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Login,
        Self::Logout,
        Self::Approve,
        Self::Reject,
    ];

    /// Case-insensitive lookup; anything outside the vocabulary is `Other`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::KNOWN
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(Self::Other)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Kind of domain object an audit log entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Plan,
    User,
    Faculty,
    Approval,
    Session,
    #[serde(other)]
    Other,
}

impl EntityKind {
    pub const KNOWN: [Self; 5] = [
        Self::Plan,
        Self::User,
        Self::Faculty,
        Self::Approval,
        Self::Session,
    ];

    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::KNOWN
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or(Self::Other)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::User => "user",
            Self::Faculty => "faculty",
            Self::Approval => "approval",
            Self::Session => "session",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// REST resources the client can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Plans,
    Users,
    Docentes,
    Faculties,
    AuditLogs,
    DashboardStats,
    Approvals,
}

impl ResourceKind {
    /// Path relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Plans => "/plans",
            Self::Users => "/users",
            Self::Docentes => "/users/docentes",
            Self::Faculties => "/faculties",
            Self::AuditLogs => "/audit-logs",
            Self::DashboardStats => "/dashboard/stats",
            Self::Approvals => "/plans/pending-approval",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plans => "plans",
            Self::Users => "users",
            Self::Docentes => "docentes",
            Self::Faculties => "faculties",
            Self::AuditLogs => "audit_logs",
            Self::DashboardStats => "dashboard_stats",
            Self::Approvals => "approvals",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
