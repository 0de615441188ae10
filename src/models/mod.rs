//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod course;
pub mod group;
pub mod ai;

// Re-export commonly used models
pub use user::{User, CreateUserRequest, UserQuery, UserWithRelations, Role, UserStatus, StudyTime};
pub use course::{Course, CreateCourseRequest};
pub use group::{Group, GroupRecord, GroupWithRelations, CreateGroupRequest};
pub use ai::{GenerateDescriptionRequest, GeneratePromptRequest, GeneratedText, ErrorBody};
