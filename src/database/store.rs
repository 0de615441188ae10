//! Store abstraction used by the HTTP layer
//!
//! Both the PostgreSQL-backed [`DatabaseService`](super::DatabaseService) and
//! the in-process [`MemoryStore`](super::MemoryStore) implement [`Store`], and
//! both shape their output through [`assemble_users`] and [`assemble_groups`].

use std::collections::HashMap;
use async_trait::async_trait;
use uuid::Uuid;
use crate::models::{
    Course, CreateCourseRequest, CreateGroupRequest, CreateUserRequest, GroupRecord,
    GroupWithRelations, Role, User, UserWithRelations,
};
use crate::utils::errors::Result;
use super::repositories::GroupStudentLink;

#[async_trait]
pub trait Store: Send + Sync {
    /// All users, optionally filtered by role, with course and groups expanded
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserWithRelations>>;

    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;

    async fn list_courses(&self) -> Result<Vec<Course>>;

    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course>;

    /// All groups with course, teacher and students embedded
    async fn list_groups(&self) -> Result<Vec<GroupWithRelations>>;

    /// Create a group, link its students, and return it in list shape
    async fn create_group(&self, request: CreateGroupRequest) -> Result<GroupWithRelations>;

    /// Verify the backing storage is reachable
    async fn health_check(&self) -> Result<()>;
}

/// Expand each user with its course, the groups it teaches, and the groups it
/// attends.
pub fn assemble_users(
    users: Vec<User>,
    courses: &[Course],
    groups: &[GroupRecord],
    links: &[GroupStudentLink],
) -> Vec<UserWithRelations> {
    let courses_by_id: HashMap<Uuid, &Course> = courses.iter().map(|c| (c.id, c)).collect();
    let groups_by_id: HashMap<Uuid, &GroupRecord> = groups.iter().map(|g| (g.id, g)).collect();

    users
        .into_iter()
        .map(|user| {
            let course = user
                .course_id
                .and_then(|id| courses_by_id.get(&id))
                .map(|c| (*c).clone());
            let teaching_groups = groups
                .iter()
                .filter(|g| g.teacher_id == user.id)
                .cloned()
                .collect();
            let attended = links
                .iter()
                .filter(|link| link.student_id == user.id)
                .filter_map(|link| groups_by_id.get(&link.group_id))
                .map(|g| (*g).clone())
                .collect();

            UserWithRelations {
                user,
                course,
                teaching_groups,
                groups: attended,
            }
        })
        .collect()
}

/// Embed course, teacher and students into each group. Students keep the
/// order of `users`.
pub fn assemble_groups(
    groups: Vec<GroupRecord>,
    courses: &[Course],
    users: &[User],
    links: &[GroupStudentLink],
) -> Vec<GroupWithRelations> {
    let courses_by_id: HashMap<Uuid, &Course> = courses.iter().map(|c| (c.id, c)).collect();
    let users_by_id: HashMap<Uuid, &User> = users.iter().map(|u| (u.id, u)).collect();

    groups
        .into_iter()
        .map(|record| {
            let course = courses_by_id.get(&record.course_id).map(|c| (*c).clone());
            let teacher = users_by_id.get(&record.teacher_id).map(|u| (*u).clone());
            let students = users
                .iter()
                .filter(|u| {
                    links
                        .iter()
                        .any(|link| link.group_id == record.id && link.student_id == u.id)
                })
                .cloned()
                .collect();

            GroupWithRelations::assemble(record, course, teacher, students)
        })
        .collect()
}
