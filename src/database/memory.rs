//! In-process store
//!
//! Keeps every table in memory behind a single lock. References are checked
//! the way the PostgreSQL foreign keys check them; roles are not.

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;
use crate::database::repositories::GroupStudentLink;
use crate::database::store::{Store, assemble_groups, assemble_users};
use crate::models::*;
use crate::utils::errors::{EduCenterError, Result};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    courses: Vec<Course>,
    groups: Vec<GroupRecord>,
    links: Vec<GroupStudentLink>,
}

impl Tables {
    fn require_course(&self, id: Uuid) -> Result<()> {
        if self.courses.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(EduCenterError::NotFound { entity: "course", id: id.to_string() })
        }
    }

    fn require_user(&self, id: Uuid) -> Result<()> {
        if self.users.iter().any(|u| u.id == id) {
            Ok(())
        } else {
            Err(EduCenterError::NotFound { entity: "user", id: id.to_string() })
        }
    }

    fn require_group(&self, id: Uuid) -> Result<()> {
        if self.groups.iter().any(|g| g.id == id) {
            Ok(())
        } else {
            Err(EduCenterError::NotFound { entity: "group", id: id.to_string() })
        }
    }
}

/// Store kept entirely in process memory; contents are lost on restart
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserWithRelations>> {
        let tables = self.tables.read().await;
        let users = tables
            .users
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .cloned()
            .collect();

        Ok(assemble_users(users, &tables.courses, &tables.groups, &tables.links))
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        let mut tables = self.tables.write().await;
        if let Some(course_id) = request.course_id {
            tables.require_course(course_id)?;
        }
        if let Some(group_id) = request.group_id {
            tables.require_group(group_id)?;
        }

        let user = request.into_user(Utc::now());
        tables.users.push(user.clone());
        debug!(user_id = %user.id, role = %user.role, "User stored in memory");

        Ok(user)
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.tables.read().await.courses.clone())
    }

    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course> {
        let course = request.into_course();
        self.tables.write().await.courses.push(course.clone());
        debug!(course_id = %course.id, "Course stored in memory");

        Ok(course)
    }

    async fn list_groups(&self) -> Result<Vec<GroupWithRelations>> {
        let tables = self.tables.read().await;

        Ok(assemble_groups(
            tables.groups.clone(),
            &tables.courses,
            &tables.users,
            &tables.links,
        ))
    }

    async fn create_group(&self, request: CreateGroupRequest) -> Result<GroupWithRelations> {
        let mut tables = self.tables.write().await;
        let (record, student_ids) = request.into_parts();

        // Every reference is checked before anything is written
        tables.require_course(record.course_id)?;
        tables.require_user(record.teacher_id)?;
        for id in &student_ids {
            tables.require_user(*id)?;
        }

        tables.groups.push(record.clone());
        tables.links.extend(student_ids.iter().map(|&student_id| GroupStudentLink {
            group_id: record.id,
            student_id,
        }));
        debug!(group_id = %record.id, students = student_ids.len(), "Group stored in memory");

        let created = assemble_groups(vec![record], &tables.courses, &tables.users, &tables.links);
        created
            .into_iter()
            .next()
            .ok_or_else(|| EduCenterError::InvalidInput("group assembly produced no record".to_string()))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
