//! Dashboard API client
//!
//! One method per REST operation. Every request is issued exactly once: no
//! caching, no retry. Failures carry the fixed label of the operation
//! ("Failed to fetch users", ...) and keep the transport error as source.

use std::time::Duration;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;
use crate::models::{
    Course, CreateCourseRequest, CreateGroupRequest, CreateUserRequest, GenerateDescriptionRequest,
    GeneratePromptRequest, GeneratedText, Group, Role, User,
};
use crate::utils::errors::{EduCenterError, Result};

/// HTTP client for the `/api` routes
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:3000`
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent(concat!("EduCenter-Dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(EduCenterError::Http)?;

        Self::with_client(http, base_url)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_users(&self, role: Option<Role>) -> Result<Vec<User>> {
        const LABEL: &str = "Failed to fetch users";

        let mut url = self.endpoint("api/users", LABEL)?;
        if let Some(role) = role {
            url.query_pairs_mut().append_pair("role", role.as_str());
        }

        let response = self.http.get(url).send().await;
        Self::decode(response, LABEL).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        self.post("api/users", request, "Failed to create user").await
    }

    pub async fn get_courses(&self) -> Result<Vec<Course>> {
        self.get("api/courses", "Failed to fetch courses").await
    }

    pub async fn create_course(&self, request: &CreateCourseRequest) -> Result<Course> {
        self.post("api/courses", request, "Failed to create course").await
    }

    /// Groups decode through [`Group`], the same type `create_group` returns
    pub async fn get_groups(&self) -> Result<Vec<Group>> {
        self.get("api/groups", "Failed to fetch groups").await
    }

    pub async fn create_group(&self, request: &CreateGroupRequest) -> Result<Group> {
        self.post("api/groups", request, "Failed to create group").await
    }

    pub async fn generate_course_description(&self, course_title: &str) -> Result<String> {
        let request = GenerateDescriptionRequest {
            course_title: course_title.to_string(),
        };
        let generated: GeneratedText = self
            .post("api/ai/generate-description", &request, "Failed to generate description")
            .await?;
        Ok(generated.text)
    }

    pub async fn generate_bot_prompt(&self, requirements: &str) -> Result<String> {
        let request = GeneratePromptRequest {
            requirements: requirements.to_string(),
        };
        let generated: GeneratedText = self
            .post("api/ai/generate-prompt", &request, "Failed to generate prompt")
            .await?;
        Ok(generated.text)
    }

    fn endpoint(&self, path: &str, label: &'static str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| {
            debug!(path = path, error = %e, "Invalid endpoint URL");
            EduCenterError::client_status(label)
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, label: &'static str) -> Result<T> {
        let url = self.endpoint(path, label)?;
        let response = self.http.get(url).send().await;
        Self::decode(response, label).await
    }

    async fn post<B, T>(&self, path: &str, body: &B, label: &'static str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, label)?;
        let response = self.http.post(url).json(body).send().await;
        Self::decode(response, label).await
    }

    async fn decode<T: DeserializeOwned>(
        response: std::result::Result<Response, reqwest::Error>,
        label: &'static str,
    ) -> Result<T> {
        let response = response.map_err(|e| EduCenterError::client(label, e))?;

        if !response.status().is_success() {
            debug!(status = %response.status(), label = label, "API returned an error status");
            return Err(EduCenterError::client_status(label));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EduCenterError::client(label, e))
    }
}
