/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub project_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub score: i32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub quality_score: Option<i32>,
    #[serde(default)]
    pub communication_score: Option<i32>,
    #[serde(default)]
    pub deadline_score: Option<i32>,
}

/// Review left by a customer for a student once a project is completed.
/// Scores range from 1 to 5; the server rejects anything else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RatingCreate {
    pub project_id: i64,
    pub reviewee_id: i64,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_score: Option<i32>,
}

pub async fn create(config: &RequestConfig, data: &RatingCreate) -> Result<Rating> {
    let options = RequestOptions::new(RequestType::POST).with_json(data)?;
    fetch_api(config, "/api/v1/ratings/", options).await
}

pub async fn get_for_user(
    config: &RequestConfig,
    user_id: i64,
    skip: u32,
    limit: u32,
) -> Result<Vec<Rating>> {
    fetch_api(
        config,
        &format!("/api/v1/ratings/user/{}?skip={}&limit={}", user_id, skip, limit),
        RequestOptions::default(),
    )
    .await
}
