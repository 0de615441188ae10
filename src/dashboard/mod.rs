//! Headless dashboard
//!
//! The view-model layer of the admin dashboard: a state container fed by the
//! API client, directory filtering, create forms, and the derived data the
//! screens display.

pub mod filter;
pub mod forms;
pub mod session;
pub mod state;
pub mod views;

pub use filter::{filter_users, DirectoryQuery, StatusFilter};
pub use forms::{CourseForm, FormError, GroupForm, UserForm};
pub use session::Session;
pub use state::{reduce, Action, DashboardState, Snapshot};
pub use views::{
    directory_rows, group_cards, recent_members, DashboardStats, DirectoryRow, GroupCard,
    DEFAULT_REQUIREMENTS,
};
