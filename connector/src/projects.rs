/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProjectStatus {
    Draft,
    Open,
    InProgress,
    Review,
    Completed,
    Cancelled,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Review,
    Completed,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Outcome a project owner may set on an application.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ApplicationDecision {
    Accepted,
    Rejected,
}

impl From<ApplicationDecision> for ApplicationStatus {
    fn from(decision: ApplicationDecision) -> Self {
        match decision {
            ApplicationDecision::Accepted => ApplicationStatus::Accepted,
            ApplicationDecision::Rejected => ApplicationStatus::Rejected,
        }
    }
}

/// Technologies a project asks for.
///
/// The server sends either a list of strings or a single string holding a
/// JSON-encoded list (older rows may hold a plain comma-separated string).
/// All of these decode to the same list, and it is always written back as a
/// JSON array.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TechStack(pub Vec<String>);

impl TechStack {
    pub fn parse(text: &str) -> Self {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(text) {
            return Self(items);
        }

        Self(
            text.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for TechStack {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<'de> Deserialize<'de> for TechStack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => Self::default(),
            Some(Raw::List(items)) => Self(items),
            Some(Raw::Text(text)) => Self::parse(&text),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub complexity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub status: TaskStatus,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    pub order: i32,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub tech_stack: TechStack,
    pub status: ProjectStatus,
    pub customer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_spec: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// Tasks in their explicit `order`, independent of the order received.
    pub fn ordered_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|task| task.order);
        tasks
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i64,
    pub project_id: i64,
    pub student_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_rate: Option<f64>,
    pub status: ApplicationStatus,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
}

/// Project fields to change. Fields left as `None` are not sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationCreate {
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_rate: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
struct ApplicationStatusUpdate {
    status: ApplicationDecision,
}

pub fn list_endpoint(status: Option<ProjectStatus>, skip: u32, limit: u32) -> String {
    let mut endpoint = format!("/api/v1/projects/?skip={}&limit={}", skip, limit);

    if let Some(status) = status {
        endpoint.push_str("&status=");
        endpoint.push_str(status.as_ref());
    }

    endpoint
}

pub async fn create(config: &RequestConfig, data: &ProjectCreate) -> Result<Project> {
    let options = RequestOptions::new(RequestType::POST).with_json(data)?;
    fetch_api(config, "/api/v1/projects/", options).await
}

pub async fn get_list(
    config: &RequestConfig,
    status: Option<ProjectStatus>,
    skip: u32,
    limit: u32,
) -> Result<Vec<Project>> {
    fetch_api(config, &list_endpoint(status, skip, limit), RequestOptions::default()).await
}

pub async fn get_my(config: &RequestConfig) -> Result<Vec<Project>> {
    fetch_api(config, "/api/v1/projects/my", RequestOptions::default()).await
}

pub async fn get_by_id(config: &RequestConfig, id: i64) -> Result<Project> {
    fetch_api(config, &format!("/api/v1/projects/{}", id), RequestOptions::default()).await
}

pub async fn update(config: &RequestConfig, id: i64, data: &ProjectUpdate) -> Result<Project> {
    let options = RequestOptions::new(RequestType::PUT).with_json(data)?;
    fetch_api(config, &format!("/api/v1/projects/{}", id), options).await
}

pub async fn publish(config: &RequestConfig, id: i64) -> Result<Project> {
    fetch_api(
        config,
        &format!("/api/v1/projects/{}/publish", id),
        RequestOptions::new(RequestType::POST),
    )
    .await
}

pub async fn apply(
    config: &RequestConfig,
    project_id: i64,
    cover_letter: Option<String>,
    proposed_rate: Option<f64>,
) -> Result<Application> {
    let req = ApplicationCreate {
        project_id,
        cover_letter,
        proposed_rate,
    };

    let options = RequestOptions::new(RequestType::POST).with_json(&req)?;
    fetch_api(config, &format!("/api/v1/projects/{}/apply", project_id), options).await
}

/// Only the project owner is allowed to list applications; the server
/// enforces this.
pub async fn get_applications(config: &RequestConfig, project_id: i64) -> Result<Vec<Application>> {
    fetch_api(
        config,
        &format!("/api/v1/projects/{}/applications", project_id),
        RequestOptions::default(),
    )
    .await
}

pub async fn update_application_status(
    config: &RequestConfig,
    project_id: i64,
    application_id: i64,
    decision: ApplicationDecision,
) -> Result<Application> {
    let options = RequestOptions::new(RequestType::PUT)
        .with_json(&ApplicationStatusUpdate { status: decision })?;

    fetch_api(
        config,
        &format!(
            "/api/v1/projects/{}/applications/{}",
            project_id, application_id
        ),
        options,
    )
    .await
}
