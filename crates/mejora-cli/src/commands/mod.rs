pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod faculties;
pub mod nav;
pub mod plans;
pub mod shared;
pub mod users;
