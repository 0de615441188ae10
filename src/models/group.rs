//! Group model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use super::course::Course;
use super::user::User;

/// A row of the `groups` table, without its student links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub schedule: String,
}

/// A group as the dashboard sees it: students flattened to their ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub student_ids: Vec<Uuid>,
    /// Free text, e.g. "Dush-Chor-Jum 18:00"
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    pub course_id: Uuid,
    pub teacher_id: Uuid,
    pub schedule: String,
    #[serde(default)]
    pub student_ids: Vec<Uuid>,
}

impl CreateGroupRequest {
    /// Split the request into the row to insert and the student links.
    /// Repeated student ids collapse to one link, first occurrence wins.
    pub fn into_parts(self) -> (GroupRecord, Vec<Uuid>) {
        let record = GroupRecord {
            id: Uuid::new_v4(),
            name: self.name,
            course_id: self.course_id,
            teacher_id: self.teacher_id,
            schedule: self.schedule,
        };
        let mut student_ids = Vec::with_capacity(self.student_ids.len());
        for id in self.student_ids {
            if !student_ids.contains(&id) {
                student_ids.push(id);
            }
        }
        (record, student_ids)
    }
}

/// A group as returned by both `GET` and `POST /api/groups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWithRelations {
    #[serde(flatten)]
    pub group: Group,
    pub course: Option<Course>,
    pub teacher: Option<User>,
    pub students: Vec<User>,
}

impl GroupWithRelations {
    /// The single mapping from stored rows to the API shape. `studentIds` is
    /// always derived from `students` so list and create responses agree.
    pub fn assemble(
        record: GroupRecord,
        course: Option<Course>,
        teacher: Option<User>,
        students: Vec<User>,
    ) -> Self {
        let student_ids = students.iter().map(|s| s.id).collect();
        Self {
            group: Group {
                id: record.id,
                name: record.name,
                course_id: record.course_id,
                teacher_id: record.teacher_id,
                student_ids,
                schedule: record.schedule,
            },
            course,
            teacher,
            students,
        }
    }
}
