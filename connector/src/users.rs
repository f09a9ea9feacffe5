/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub const DEFAULT_SKIP: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Student,
    Customer,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub rating_score: f64,
    #[serde(default)]
    pub completed_projects: i64,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Profile fields to change. Fields left as `None` are not sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

pub async fn get_me(config: &RequestConfig) -> Result<User> {
    fetch_api(config, "/api/v1/users/me", RequestOptions::default()).await
}

pub async fn update_me(config: &RequestConfig, update: &UserUpdate) -> Result<User> {
    let options = RequestOptions::new(RequestType::PUT).with_json(update)?;
    fetch_api(config, "/api/v1/users/me", options).await
}

pub async fn get_by_id(config: &RequestConfig, id: i64) -> Result<User> {
    fetch_api(config, &format!("/api/v1/users/{}", id), RequestOptions::default()).await
}

pub async fn get_students(config: &RequestConfig, skip: u32, limit: u32) -> Result<Vec<User>> {
    fetch_api(
        config,
        &format!("/api/v1/users/?skip={}&limit={}", skip, limit),
        RequestOptions::default(),
    )
    .await
}

pub async fn get_leaderboard(config: &RequestConfig, limit: u32) -> Result<Vec<User>> {
    fetch_api(
        config,
        &format!("/api/v1/users/leaderboard?limit={}", limit),
        RequestOptions::default(),
    )
    .await
}
