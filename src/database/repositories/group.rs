//! Group repository implementation

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use crate::models::group::{GroupRecord, CreateGroupRequest};
use crate::utils::errors::EduCenterError;

/// One row of `group_students`
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct GroupStudentLink {
    pub group_id: Uuid,
    pub student_id: Uuid,
}

#[derive(Clone, Debug)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a group and link its students. Runs on the caller's
    /// connection; the caller owns the transaction.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        request: CreateGroupRequest,
    ) -> Result<(GroupRecord, Vec<Uuid>), EduCenterError> {
        let (record, student_ids) = request.into_parts();

        let group = sqlx::query_as::<_, GroupRecord>(
            r#"
            INSERT INTO groups (id, name, course_id, teacher_id, schedule)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, course_id, teacher_id, schedule
            "#
        )
        .bind(record.id)
        .bind(record.name)
        .bind(record.course_id)
        .bind(record.teacher_id)
        .bind(record.schedule)
        .fetch_one(&mut *conn)
        .await?;

        if !student_ids.is_empty() {
            sqlx::query(
                "INSERT INTO group_students (group_id, student_id) SELECT $1, UNNEST($2::uuid[])"
            )
            .bind(group.id)
            .bind(student_ids.as_slice())
            .execute(&mut *conn)
            .await?;
        }

        Ok((group, student_ids))
    }

    /// Find group by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GroupRecord>, EduCenterError> {
        let group = sqlx::query_as::<_, GroupRecord>(
            "SELECT id, name, course_id, teacher_id, schedule FROM groups WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    /// List all groups in creation order
    pub async fn list(&self, conn: &mut PgConnection) -> Result<Vec<GroupRecord>, EduCenterError> {
        let groups = sqlx::query_as::<_, GroupRecord>(
            "SELECT id, name, course_id, teacher_id, schedule FROM groups ORDER BY created_at ASC, id ASC"
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(groups)
    }

    /// All group/student links
    pub async fn links(&self, conn: &mut PgConnection) -> Result<Vec<GroupStudentLink>, EduCenterError> {
        let links = sqlx::query_as::<_, GroupStudentLink>(
            "SELECT group_id, student_id FROM group_students"
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(links)
    }
}
