//! # mejora-views
//!
//! View-layer logic shared by every screen of the improvement-plan client:
//! - the canonical role → navigation table and role → dashboard selector
//! - predicate filtering, pagination, and CSV export of record lists
//! - per-screen list state with transient notifications
//! - client-side form validation

pub mod dashboard;
pub mod filter_state;
pub mod list;
pub mod navigation;
pub mod notification;
pub mod screen;
pub mod validation;

pub use dashboard::{DashboardView, ViewId, dashboard_for, load_dashboard};
pub use filter_state::FilterState;
pub use navigation::{NavigationItem, navigation_for, navigation_labels};
pub use notification::{Notification, NotificationLevel};
pub use screen::ListScreen;
