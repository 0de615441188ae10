//! Dashboard session
//!
//! Owns the state container and talks to the API through [`ApiClient`].
//! Failed calls are logged and leave the state untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use crate::client::ApiClient;
use crate::config::DashboardConfig;
use crate::models::{Role, User};
use crate::utils::errors::{EduCenterError, Result};
use super::forms::{CourseForm, FormError, GroupForm, UserForm};
use super::state::{Action, DashboardState, Snapshot};
use super::views::{group_cards, GroupCard};

pub struct Session {
    client: ApiClient,
    state: DashboardState,
    group_capacity: u32,
    generating: AtomicBool,
}

/// Clears the generating flag when the AI call settles, whatever the outcome
struct Generating<'a>(&'a AtomicBool);

impl Drop for Generating<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Session {
    pub fn new(client: ApiClient, config: &DashboardConfig) -> Self {
        Self {
            client,
            state: DashboardState::new(),
            group_capacity: config.group_capacity,
            generating: AtomicBool::new(false),
        }
    }

    /// True while an AI generation is in flight
    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    fn start_generating(&self) -> Result<Generating<'_>> {
        if self
            .generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("AI generation already in progress");
            return Err(EduCenterError::InvalidInput("AI generation already in progress".to_string()));
        }
        Ok(Generating(&self.generating))
    }

    /// Group list rows for the current snapshot
    pub fn group_cards(&self) -> Vec<GroupCard> {
        group_cards(self.state.snapshot(), self.group_capacity)
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.state.snapshot()
    }

    /// Fetch users, courses and groups concurrently. On failure the loading
    /// flag is cleared and the snapshot is kept.
    pub async fn load(&mut self) -> Result<()> {
        let fetched = futures::try_join!(
            self.client.get_users(None),
            self.client.get_courses(),
            self.client.get_groups(),
        );

        match fetched {
            Ok((users, courses, groups)) => {
                info!(
                    users = users.len(),
                    courses = courses.len(),
                    groups = groups.len(),
                    "Dashboard data loaded"
                );
                self.state.dispatch(Action::Loaded(Snapshot { users, courses, groups }));
                Ok(())
            }
            Err(e) => {
                error!("Error loading data: {}", e);
                self.state.dispatch(Action::LoadFailed);
                Err(e)
            }
        }
    }

    /// Submit the user form. On success the user is appended and the form reset.
    pub async fn add_user(&mut self, form: &mut UserForm) -> Result<()> {
        let request = form.to_request().map_err(invalid_form)?;

        match self.client.create_user(&request).await {
            Ok(user) => {
                self.state.dispatch(Action::UserCreated(user));
                form.reset();
                Ok(())
            }
            Err(e) => {
                error!(role = %form.role, "Error adding user: {}", e);
                Err(e)
            }
        }
    }

    pub async fn add_course(&mut self, form: &mut CourseForm) -> Result<()> {
        let request = form.to_request().map_err(invalid_form)?;

        match self.client.create_course(&request).await {
            Ok(course) => {
                self.state.dispatch(Action::CourseCreated(course));
                form.reset();
                Ok(())
            }
            Err(e) => {
                error!("Error adding course: {}", e);
                Err(e)
            }
        }
    }

    pub async fn add_group(&mut self, form: &mut GroupForm) -> Result<()> {
        let request = form.to_request().map_err(invalid_form)?;

        match self.client.create_group(&request).await {
            Ok(group) => {
                self.state.dispatch(Action::GroupCreated(group));
                form.reset();
                Ok(())
            }
            Err(e) => {
                error!("Error adding group: {}", e);
                Err(e)
            }
        }
    }

    /// Ask for a course description and put it into the form. Does nothing
    /// while the title is empty; on failure the form is unchanged. Refused
    /// while another generation is in flight.
    pub async fn suggest_description(&self, form: &mut CourseForm) -> Result<()> {
        if form.title.trim().is_empty() {
            return Ok(());
        }
        let _generating = self.start_generating()?;

        match self.client.generate_course_description(&form.title).await {
            Ok(text) => {
                form.apply_description(text);
                Ok(())
            }
            Err(e) => {
                error!("Error generating description: {}", e);
                Err(e)
            }
        }
    }

    /// Generate the developer prompt for the bot requirements
    pub async fn generate_prompt(&self, requirements: &str) -> Result<String> {
        let _generating = self.start_generating()?;
        self.client.generate_bot_prompt(requirements).await.map_err(|e| {
            error!("Error generating prompt: {}", e);
            e
        })
    }

    /// Users of one role fetched from the server, bypassing the snapshot
    pub async fn fetch_role(&self, role: Role) -> Result<Vec<User>> {
        self.client.get_users(Some(role)).await
    }
}

fn invalid_form(e: FormError) -> EduCenterError {
    EduCenterError::InvalidInput(e.to_string())
}
