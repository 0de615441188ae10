//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod course;
pub mod group;

// Re-export repositories
pub use user::UserRepository;
pub use course::CourseRepository;
pub use group::{GroupRepository, GroupStudentLink};
