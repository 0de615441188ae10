//! Dashboard state container
//!
//! A unidirectional store: the session dispatches [`Action`]s, [`reduce`]
//! folds them into a new [`Snapshot`], views only ever read `&Snapshot`.

use crate::models::{Course, Group, User};

/// Everything the dashboard knows, fetched once per session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Initial load finished
    Loaded(Snapshot),
    /// Initial load failed; the dashboard shows what it has
    LoadFailed,
    UserCreated(User),
    CourseCreated(Course),
    GroupCreated(Group),
}

/// Fold one action into the snapshot. Created records are appended; nothing
/// is re-fetched.
pub fn reduce(mut snapshot: Snapshot, action: Action) -> Snapshot {
    match action {
        Action::Loaded(loaded) => loaded,
        Action::LoadFailed => snapshot,
        Action::UserCreated(user) => {
            snapshot.users.push(user);
            snapshot
        }
        Action::CourseCreated(course) => {
            snapshot.courses.push(course);
            snapshot
        }
        Action::GroupCreated(group) => {
            snapshot.groups.push(group);
            snapshot
        }
    }
}

/// Snapshot plus the loading flag shown until the initial load settles
#[derive(Debug, Clone)]
pub struct DashboardState {
    snapshot: Snapshot,
    loading: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
            loading: true,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        if matches!(action, Action::Loaded(_) | Action::LoadFailed) {
            self.loading = false;
        }
        let snapshot = std::mem::take(&mut self.snapshot);
        self.snapshot = reduce(snapshot, action);
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
