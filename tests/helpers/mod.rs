//! Test helpers module
//!
//! This module provides utilities and helpers for testing the EduCenter
//! application: the mock AI provider, database helpers, and test context setup.

#![allow(dead_code)]

pub mod ai_mock;
pub mod database_helper;
pub mod test_context;
pub mod test_data;

pub use ai_mock::*;
pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
