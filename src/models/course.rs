//! Course model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Free text, e.g. "3 oy"
    pub duration: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: String,
}

impl CreateCourseRequest {
    pub fn into_course(self) -> Course {
        Course {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            duration: self.duration,
            category: self.category,
        }
    }
}
