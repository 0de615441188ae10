//! Database service layer
//!
//! This module provides a high-level interface to database operations

use std::time::Instant;
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use crate::database::{DatabasePool, UserRepository, CourseRepository, GroupRepository};
use crate::database::store::{Store, assemble_groups, assemble_users};
use crate::models::*;
use crate::utils::errors::Result;
use crate::utils::logging::log_store_operation;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub courses: CourseRepository,
    pub groups: GroupRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            courses: CourseRepository::new(pool.clone()),
            groups: GroupRepository::new(pool.clone()),
            pool,
        }
    }

    /// Read-only transaction whose queries all see one snapshot
    async fn read_snapshot(&self) -> Result<Transaction<'static, Postgres>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;
        Ok(tx)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[async_trait]
impl Store for DatabaseService {
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<UserWithRelations>> {
        let started = Instant::now();
        let mut tx = self.read_snapshot().await?;
        let users = self.users.list(&mut *tx, role).await?;
        let courses = self.courses.list(&mut *tx).await?;
        let groups = self.groups.list(&mut *tx).await?;
        let links = self.groups.links(&mut *tx).await?;
        tx.commit().await?;
        log_store_operation("list", "users", elapsed_ms(started), true);

        Ok(assemble_users(users, &courses, &groups, &links))
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        let started = Instant::now();
        let result = self.users.create(request).await;
        log_store_operation("create", "users", elapsed_ms(started), result.is_ok());
        result
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        let mut conn = self.pool.acquire().await?;
        self.courses.list(&mut *conn).await
    }

    async fn create_course(&self, request: CreateCourseRequest) -> Result<Course> {
        let started = Instant::now();
        let result = self.courses.create(request).await;
        log_store_operation("create", "courses", elapsed_ms(started), result.is_ok());
        result
    }

    async fn list_groups(&self) -> Result<Vec<GroupWithRelations>> {
        let started = Instant::now();
        let mut tx = self.read_snapshot().await?;
        let groups = self.groups.list(&mut *tx).await?;
        let courses = self.courses.list(&mut *tx).await?;
        let users = self.users.list(&mut *tx, None).await?;
        let links = self.groups.links(&mut *tx).await?;
        tx.commit().await?;
        log_store_operation("list", "groups", elapsed_ms(started), true);

        Ok(assemble_groups(groups, &courses, &users, &links))
    }

    async fn create_group(&self, request: CreateGroupRequest) -> Result<GroupWithRelations> {
        let started = Instant::now();
        let result = self.insert_group(request).await;
        log_store_operation("create", "groups", elapsed_ms(started), result.is_ok());
        result
    }

    async fn health_check(&self) -> Result<()> {
        super::connection::health_check(&self.pool).await
    }
}

impl DatabaseService {
    /// Insert the group, its links and read back its relations in one
    /// transaction; nothing is stored unless the whole reply can be built.
    async fn insert_group(&self, request: CreateGroupRequest) -> Result<GroupWithRelations> {
        let mut tx = self.pool.begin().await?;

        let (record, student_ids) = self.groups.insert(&mut *tx, request).await?;
        let course = self.courses.find_by_id(&mut *tx, record.course_id).await?;
        let teacher = self.users.find_by_id(&mut *tx, record.teacher_id).await?;
        let students = self.users.find_by_ids(&mut *tx, &student_ids).await?;

        tx.commit().await?;

        Ok(GroupWithRelations::assemble(record, course, teacher, students))
    }
}
