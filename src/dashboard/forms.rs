//! Create forms of the dashboard
//!
//! Forms hold raw input the way the view edits it (select values as strings,
//! empty meaning "none"). Submitting checks the required fields and turns the
//! form into the API request; nothing beyond "required" is validated.

use thiserror::Error;
use uuid::Uuid;
use crate::models::{
    CreateCourseRequest, CreateGroupRequest, CreateUserRequest, Role, StudyTime, UserStatus,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Required field is empty: {0}")]
    Required(&'static str),

    #[error("Invalid selection for {field}: {value}")]
    InvalidSelection { field: &'static str, value: String },
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Empty select value means no selection
fn selection(field: &'static str, value: &str) -> Result<Option<Uuid>, FormError> {
    if value.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(value)
        .map(Some)
        .map_err(|_| FormError::InvalidSelection {
            field,
            value: value.to_string(),
        })
}

/// New student or teacher. The role comes from the directory the form was
/// opened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub telegram: String,
    pub preferred_time: StudyTime,
    pub status: UserStatus,
    pub specialty: String,
    pub course_id: String,
    pub group_id: String,
}

impl UserForm {
    /// Blank form: status ACTIVE, preferred time MORNING
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            telegram: String::new(),
            preferred_time: StudyTime::Morning,
            status: UserStatus::Active,
            specialty: String::new(),
            course_id: String::new(),
            group_id: String::new(),
        }
    }

    /// Back to the blank form for the same role
    pub fn reset(&mut self) {
        *self = Self::new(self.role);
    }

    /// Dialog caption, e.g. "Yangi talaba qo'shish"
    pub fn title(&self) -> String {
        format!("Yangi {} qo'shish", self.role.label())
    }

    /// Preferred time choices with their class hours
    pub fn study_time_options() -> Vec<(StudyTime, String)> {
        [StudyTime::Morning, StudyTime::Afternoon, StudyTime::Evening]
            .into_iter()
            .map(|time| (time, format!("{} ({})", time.label(), time.hours())))
            .collect()
    }

    /// Build the request. Fields that belong to the other role are dropped.
    pub fn to_request(&self) -> Result<CreateUserRequest, FormError> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;

        let (preferred_time, specialty, course_id, group_id) = match self.role {
            Role::Student => (
                Some(self.preferred_time),
                None,
                selection("courseId", &self.course_id)?,
                selection("groupId", &self.group_id)?,
            ),
            Role::Teacher => (None, Some(required("specialty", &self.specialty)?), None, None),
        };

        Ok(CreateUserRequest {
            name,
            phone,
            email: self.email.trim().to_string(),
            telegram: optional(&self.telegram),
            preferred_time,
            role: self.role,
            status: self.status,
            specialty,
            course_id,
            group_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: String,
}

impl CourseForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fill the description with generated text
    pub fn apply_description(&mut self, text: String) {
        self.description = text;
    }

    pub fn to_request(&self) -> Result<CreateCourseRequest, FormError> {
        Ok(CreateCourseRequest {
            title: required("title", &self.title)?,
            description: required("description", &self.description)?,
            duration: required("duration", &self.duration)?,
            category: required("category", &self.category)?,
        })
    }
}

/// New group. Groups start without students.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupForm {
    pub name: String,
    pub course_id: String,
    pub teacher_id: String,
    pub schedule: String,
}

impl GroupForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateGroupRequest, FormError> {
        let name = required("name", &self.name)?;
        let course_id = selection("courseId", &self.course_id)?.ok_or(FormError::Required("courseId"))?;
        let teacher_id = selection("teacherId", &self.teacher_id)?.ok_or(FormError::Required("teacherId"))?;
        let schedule = required("schedule", &self.schedule)?;

        Ok(CreateGroupRequest {
            name,
            course_id,
            teacher_id,
            schedule,
            student_ids: Vec::new(),
        })
    }
}
