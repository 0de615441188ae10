//! Directory filtering
//!
//! Recomputed from the snapshot on every call; there is no index.

use crate::models::{Role, User, UserStatus};

/// Status tabs of the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UserStatus),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Barchasi",
            StatusFilter::Only(status) => status.label(),
        }
    }

    fn accepts(&self, status: UserStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// What the directory view is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub role: Role,
    pub status: StatusFilter,
    pub search: String,
}

impl DirectoryQuery {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            status: StatusFilter::All,
            search: String::new(),
        }
    }

    /// Role must match, status must pass the tab, and the search term must
    /// occur in the name or email (ignoring case) or literally in the phone.
    pub fn matches(&self, user: &User) -> bool {
        let term = self.search.to_lowercase();

        user.role == self.role
            && self.status.accepts(user.status)
            && (user.name.to_lowercase().contains(&term)
                || user.phone.contains(self.search.as_str())
                || user.email.to_lowercase().contains(&term))
    }
}

/// Users matching `query`, in snapshot order
pub fn filter_users<'a>(users: &'a [User], query: &DirectoryQuery) -> Vec<&'a User> {
    users.iter().filter(|user| query.matches(user)).collect()
}
