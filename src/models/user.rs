//! User model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use super::course::Course;
use super::group::GroupRecord;
use crate::utils::errors::EduCenterError;

/// Classification of a user. Fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Teacher,
}

/// Lifecycle flag; `Draft` means the user is on the waiting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_status", rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Draft,
}

/// A student's preferred class slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "study_time", rename_all = "UPPERCASE")]
pub enum StudyTime {
    Morning,
    Afternoon,
    Evening,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Teacher => "TEACHER",
        }
    }

    /// Display label used by the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "talaba",
            Role::Teacher => "o'qituvchi",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Faol",
            UserStatus::Draft => "Qoralama",
        }
    }
}

impl StudyTime {
    pub fn label(&self) -> &'static str {
        match self {
            StudyTime::Morning => "Ertalab",
            StudyTime::Afternoon => "Tushdan keyin",
            StudyTime::Evening => "Kechqurun",
        }
    }

    /// Class hours offered for the slot
    pub fn hours(&self) -> &'static str {
        match self {
            StudyTime::Morning => "9:00 - 13:00",
            StudyTime::Afternoon => "14:00 - 18:00",
            StudyTime::Evening => "18:00 - 21:00",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub telegram: Option<String>,
    pub preferred_time: Option<StudyTime>,
    pub role: Role,
    pub joined_at: DateTime<Utc>,
    pub status: UserStatus,
    pub specialty: Option<String>,
    pub course_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
}

/// Payload for `POST /api/users`; id and joinedAt are assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub telegram: Option<String>,
    pub preferred_time: Option<StudyTime>,
    pub role: Role,
    pub status: UserStatus,
    pub specialty: Option<String>,
    pub course_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
}

impl CreateUserRequest {
    /// Materialize the request into a user with a fresh id and join timestamp
    pub fn into_user(self, joined_at: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name,
            phone: self.phone,
            email: self.email,
            telegram: self.telegram,
            preferred_time: self.preferred_time,
            role: self.role,
            joined_at,
            status: self.status,
            specialty: self.specialty,
            course_id: self.course_id,
            group_id: self.group_id,
        }
    }
}

impl std::str::FromStr for Role {
    type Err = EduCenterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(Role::Student),
            "TEACHER" => Ok(Role::Teacher),
            other => Err(EduCenterError::InvalidInput(format!("Unknown role: {}", other))),
        }
    }
}

/// Query string of `GET /api/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub role: Option<String>,
}

impl UserQuery {
    /// The requested role filter; an empty value means no filter
    pub fn role(&self) -> Result<Option<Role>, EduCenterError> {
        match self.role.as_deref() {
            None | Some("") => Ok(None),
            Some(role) => role.parse().map(Some),
        }
    }
}

/// A user as listed by the API, with its course and groups expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithRelations {
    #[serde(flatten)]
    pub user: User,
    pub course: Option<Course>,
    pub teaching_groups: Vec<GroupRecord>,
    pub groups: Vec<GroupRecord>,
}
