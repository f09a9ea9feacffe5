/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::LOGIN_FAILED_MESSAGE;
use crate::users::User;
use crate::*;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Roles a new account may sign up with.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SignupRole {
    Student,
    Customer,
}

impl From<SignupRole> for users::Role {
    fn from(role: SignupRole) -> Self {
        match role {
            SignupRole::Student => users::Role::Student,
            SignupRole::Customer => users::Role::Customer,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: SignupRole,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn register(config: &RequestConfig, data: &RegisterData) -> Result<User> {
    let options = RequestOptions::new(RequestType::POST).with_json(data)?;
    fetch_api(config, "/api/v1/auth/register", options).await
}

/// Exchanges credentials for an access token.
///
/// The login endpoint takes an OAuth2 password form rather than JSON, so this
/// bypasses [`fetch_api`]: no stored token is attached, and a rejection
/// without `detail` reports [`LOGIN_FAILED_MESSAGE`].
pub async fn login(config: &RequestConfig, email: &str, password: &str) -> Result<LoginResponse> {
    let url = config.url("/api/v1/auth/login");
    tracing::debug!(%url, "sending login request");

    let res = config
        .client
        .post(&url)
        .form(&LoginForm {
            username: email,
            password,
        })
        .send()
        .await?;

    parse_response(res, |_| LOGIN_FAILED_MESSAGE.to_string()).await
}
