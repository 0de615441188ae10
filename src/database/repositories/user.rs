//! User repository implementation

use sqlx::{PgConnection, PgPool};
use chrono::Utc;
use uuid::Uuid;
use crate::models::user::{User, CreateUserRequest, Role};
use crate::utils::errors::EduCenterError;

const USER_COLUMNS: &str =
    "id, name, phone, email, telegram, preferred_time, role, joined_at, status, specialty, course_id, group_id";

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user; id and joined_at are assigned here
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, EduCenterError> {
        let user = request.into_user(Utc::now());

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, phone, email, telegram, preferred_time, role, joined_at, status, specialty, course_id, group_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(user.name)
        .bind(user.phone)
        .bind(user.email)
        .bind(user.telegram)
        .bind(user.preferred_time)
        .bind(user.role)
        .bind(user.joined_at)
        .bind(user.status)
        .bind(user.specialty)
        .bind(user.course_id)
        .bind(user.group_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, conn: &mut PgConnection, id: Uuid) -> Result<Option<User>, EduCenterError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// List users in join order, optionally restricted to one role
    pub async fn list(&self, conn: &mut PgConnection, role: Option<Role>) -> Result<Vec<User>, EduCenterError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE ($1::user_role IS NULL OR role = $1) ORDER BY joined_at ASC, id ASC"
        ))
        .bind(role)
        .fetch_all(&mut *conn)
        .await?;

        Ok(users)
    }

    /// Find all users whose id is in `ids`
    pub async fn find_by_ids(&self, conn: &mut PgConnection, ids: &[Uuid]) -> Result<Vec<User>, EduCenterError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1) ORDER BY joined_at ASC, id ASC"
        ))
        .bind(ids)
        .fetch_all(&mut *conn)
        .await?;

        Ok(users)
    }
}
