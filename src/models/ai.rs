//! Request and response bodies of the AI proxy endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionRequest {
    pub course_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePromptRequest {
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub text: String,
}

/// Body of every API error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
