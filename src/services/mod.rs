//! Services module
//!
//! This module contains the integrations with external services

pub mod ai;
pub mod prompts;

pub use ai::AiService;
