//! Test data helpers for building API payloads

use uuid::Uuid;
use EduCenter::models::{
    CreateCourseRequest, CreateGroupRequest, CreateUserRequest, Role, StudyTime, UserStatus,
};

pub fn python_course() -> CreateCourseRequest {
    CreateCourseRequest {
        title: "Python asoslari".to_string(),
        description: String::new(),
        duration: "3 oy".to_string(),
        category: "IT".to_string(),
    }
}

pub fn create_test_student(name: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        phone: "+998901234567".to_string(),
        email: format!("{}@example.uz", name.to_lowercase()),
        telegram: Some(format!("@{}", name.to_lowercase())),
        preferred_time: Some(StudyTime::Morning),
        role: Role::Student,
        status: UserStatus::Active,
        specialty: None,
        course_id: None,
        group_id: None,
    }
}

pub fn create_test_teacher(name: &str, specialty: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        phone: "+998977778899".to_string(),
        email: format!("{}@example.uz", name.to_lowercase()),
        telegram: None,
        preferred_time: None,
        role: Role::Teacher,
        status: UserStatus::Active,
        specialty: Some(specialty.to_string()),
        course_id: None,
        group_id: None,
    }
}

pub fn create_test_group(course_id: Uuid, teacher_id: Uuid, student_ids: Vec<Uuid>) -> CreateGroupRequest {
    CreateGroupRequest {
        name: "N1".to_string(),
        course_id,
        teacher_id,
        schedule: "Dush-Chor-Jum 18:00".to_string(),
        student_ids,
    }
}
