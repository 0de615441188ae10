//! Course repository implementation

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use crate::models::course::{Course, CreateCourseRequest};
use crate::utils::errors::EduCenterError;

#[derive(Clone, Debug)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new course
    pub async fn create(&self, request: CreateCourseRequest) -> Result<Course, EduCenterError> {
        let course = request.into_course();

        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (id, title, description, duration, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, duration, category
            "#
        )
        .bind(course.id)
        .bind(course.title)
        .bind(course.description)
        .bind(course.duration)
        .bind(course.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(&self, conn: &mut PgConnection, id: Uuid) -> Result<Option<Course>, EduCenterError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, duration, category FROM courses WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(course)
    }

    /// List all courses in creation order
    pub async fn list(&self, conn: &mut PgConnection) -> Result<Vec<Course>, EduCenterError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, duration, category FROM courses ORDER BY created_at ASC, id ASC"
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(courses)
    }
}
