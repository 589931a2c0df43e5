//! Role → dashboard view, and the concurrent load behind each view.

use mejora_client::{ResourceFetcher, fetch_many};
use mejora_core::enums::{ResourceKind, Role};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::notification::Notification;

/// Top-level view a role lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    DirectorDashboard,
    DocenteDashboard,
    DecanoDashboard,
    AdminDashboard,
}

impl ViewId {
    /// Resources the view loads on mount, fetched concurrently.
    #[must_use]
    pub const fn resources(self) -> &'static [ResourceKind] {
        match self {
            Self::DirectorDashboard => &[
                ResourceKind::DashboardStats,
                ResourceKind::Plans,
                ResourceKind::Docentes,
            ],
            Self::DocenteDashboard => &[ResourceKind::DashboardStats, ResourceKind::Plans],
            Self::DecanoDashboard => &[
                ResourceKind::DashboardStats,
                ResourceKind::Approvals,
                ResourceKind::Plans,
            ],
            Self::AdminDashboard => &[
                ResourceKind::DashboardStats,
                ResourceKind::Users,
                ResourceKind::Faculties,
                ResourceKind::AuditLogs,
            ],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DirectorDashboard => "director_dashboard",
            Self::DocenteDashboard => "docente_dashboard",
            Self::DecanoDashboard => "decano_dashboard",
            Self::AdminDashboard => "admin_dashboard",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the dashboard for a role. No role means no view.
#[must_use]
pub const fn dashboard_for(role: Option<Role>) -> Option<ViewId> {
    match role {
        Some(Role::Director) => Some(ViewId::DirectorDashboard),
        Some(Role::Docente) => Some(ViewId::DocenteDashboard),
        Some(Role::Decano) => Some(ViewId::DecanoDashboard),
        Some(Role::Administrador) => Some(ViewId::AdminDashboard),
        None => None,
    }
}

/// One loaded block of a dashboard. `data` is `None` when its fetch failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSection {
    pub resource: ResourceKind,
    pub data: Option<Value>,
}

/// Result of mounting a dashboard: whatever loaded, plus one notification per
/// failed resource. Partial results are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub view: ViewId,
    pub sections: Vec<DashboardSection>,
    pub notifications: Vec<Notification>,
}

impl DashboardView {
    #[must_use]
    pub fn section(&self, resource: ResourceKind) -> Option<&Value> {
        self.sections
            .iter()
            .find(|s| s.resource == resource)
            .and_then(|s| s.data.as_ref())
    }
}

/// Fetch every resource of `view` concurrently.
pub async fn load_dashboard<F: ResourceFetcher + ?Sized>(
    fetcher: &F,
    view: ViewId,
    token: Option<&str>,
) -> DashboardView {
    let results = fetch_many(fetcher, view.resources(), token).await;

    let mut sections = Vec::with_capacity(results.len());
    let mut notifications = Vec::new();
    for (resource, result) in results {
        match result {
            Ok(value) => sections.push(DashboardSection {
                resource,
                data: Some(mejora_client::unwrap_data(value)),
            }),
            Err(error) => {
                tracing::warn!(%resource, %error, "dashboard section failed");
                notifications.push(Notification::error(format!(
                    "{resource}: {}",
                    error.user_message()
                )));
                sections.push(DashboardSection {
                    resource,
                    data: None,
                });
            }
        }
    }

    DashboardView {
        view,
        sections,
        notifications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_has_exactly_one_view() {
        let views: Vec<ViewId> = Role::ALL
            .into_iter()
            .filter_map(|role| dashboard_for(Some(role)))
            .collect();
        assert_eq!(views.len(), 4);
        for (i, a) in views.iter().enumerate() {
            for b in &views[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn no_role_renders_nothing() {
        assert_eq!(dashboard_for(None), None);
        assert_eq!(dashboard_for(Role::from_tag("Rector")), None);
    }

    #[test]
    fn docente_maps_to_docente_dashboard() {
        assert_eq!(
            dashboard_for(Some(Role::Docente)),
            Some(ViewId::DocenteDashboard)
        );
    }

    #[test]
    fn every_view_loads_stats() {
        for role in Role::ALL {
            let view = dashboard_for(Some(role)).unwrap();
            assert!(view.resources().contains(&ResourceKind::DashboardStats));
        }
    }
}
