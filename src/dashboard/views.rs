//! Derived view data
//!
//! Pure functions over a [`Snapshot`]; nothing here is cached.

use uuid::Uuid;
use crate::models::{Group, Role, User};
use super::filter::{filter_users, DirectoryQuery};
use super::state::Snapshot;

/// Label shown for a group whose teacher is not in the snapshot
pub const NO_TEACHER: &str = "Tanlanmagan";

/// Requirements the bot prompt generator starts with
pub const DEFAULT_REQUIREMENTS: &str = "Ro'yxatdan o'tish uchun Telegram bot va unga mos Node.js backendini yarat. Bot ism, rol (talaba/o'qituvchi) va telefon raqamini so'rashi kerak. Ma'lumotlarni PostgreSQL-da saqlash. Dashboard uchun backendda JWT autentifikatsiya bo'lishi lozim.";

/// Number of members listed under "recent members"
pub const RECENT_MEMBERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub students: usize,
    pub teachers: usize,
    pub groups: usize,
    pub courses: usize,
}

impl DashboardStats {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            students: count_role(&snapshot.users, Role::Student),
            teachers: count_role(&snapshot.users, Role::Teacher),
            groups: snapshot.groups.len(),
            courses: snapshot.courses.len(),
        }
    }
}

fn count_role(users: &[User], role: Role) -> usize {
    users.iter().filter(|u| u.role == role).count()
}

/// Last five users in snapshot order, newest first
pub fn recent_members(snapshot: &Snapshot) -> Vec<&User> {
    snapshot.users.iter().rev().take(RECENT_MEMBERS).collect()
}

pub fn teachers(snapshot: &Snapshot) -> Vec<&User> {
    snapshot.users.iter().filter(|u| u.role == Role::Teacher).collect()
}

/// Group choices of the student form: all groups until a course is chosen
pub fn groups_for_course(snapshot: &Snapshot, course_id: Option<Uuid>) -> Vec<&Group> {
    snapshot
        .groups
        .iter()
        .filter(|g| course_id.map_or(true, |id| g.course_id == id))
        .collect()
}

/// One row of the member directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRow {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub telegram: Option<String>,
    /// Preferred time label, students only
    pub preferred_time: Option<&'static str>,
    pub status: &'static str,
}

impl From<&User> for DirectoryRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            phone: user.phone.clone(),
            telegram: user.telegram.clone(),
            preferred_time: user.preferred_time.map(|time| time.label()),
            status: user.status.label(),
        }
    }
}

/// Directory rows for the users matching `query`
pub fn directory_rows(users: &[User], query: &DirectoryQuery) -> Vec<DirectoryRow> {
    filter_users(users, query).into_iter().map(DirectoryRow::from).collect()
}

/// One row of the group list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCard {
    pub id: Uuid,
    pub name: String,
    pub teacher_name: String,
    pub student_count: usize,
    pub schedule: String,
    /// Fill of the group, 0..=100
    pub progress_percent: u8,
}

impl GroupCard {
    pub fn new(group: &Group, teachers: &[&User], capacity: u32) -> Self {
        let teacher_name = teachers
            .iter()
            .find(|t| t.id == group.teacher_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| NO_TEACHER.to_string());

        Self {
            id: group.id,
            name: group.name.clone(),
            teacher_name,
            student_count: group.student_ids.len(),
            schedule: group.schedule.clone(),
            progress_percent: progress_percent(group.student_ids.len(), capacity),
        }
    }
}

/// Students as a share of capacity, capped at 100
pub fn progress_percent(students: usize, capacity: u32) -> u8 {
    if students == 0 || capacity == 0 {
        return 0;
    }
    let percent = (students as u64 * 100) / capacity as u64;
    percent.min(100) as u8
}

pub fn group_cards(snapshot: &Snapshot, capacity: u32) -> Vec<GroupCard> {
    let teachers = teachers(snapshot);
    snapshot
        .groups
        .iter()
        .map(|group| GroupCard::new(group, &teachers, capacity))
        .collect()
}
