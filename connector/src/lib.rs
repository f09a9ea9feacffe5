/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod error;
pub mod projects;
pub mod ratings;
pub mod storage;
pub mod users;

pub use error::{Error, Result};
pub use storage::{ACCESS_TOKEN_KEY, MemoryStorage, NoStorage, TokenStorage};

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const SERVER_URL_ENV: &str = "WORK21_API_URL";

pub type RequestType = reqwest::Method;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub storage: Arc<dyn TokenStorage>,
    client: reqwest::Client,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>, storage: Arc<dyn TokenStorage>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();

        Self {
            server_url,
            storage,
            client: reqwest::Client::new(),
        }
    }

    /// Uses `WORK21_API_URL`, or the local development server when unset.
    pub fn from_env(storage: Arc<dyn TokenStorage>) -> Self {
        Self::new(resolve_server_url(std::env::var(SERVER_URL_ENV).ok()), storage)
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.server_url, endpoint)
    }

    fn token(&self) -> Option<String> {
        self.storage.access_token().filter(|t| !t.is_empty())
    }
}

pub fn resolve_server_url(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: RequestType,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: RequestType) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Sends `options` to `<server_url><endpoint>` and decodes the JSON reply.
///
/// Requests default to `Content-Type: application/json`; caller headers are
/// applied on top, and `Authorization: Bearer <token>` is added last when the
/// storage holds a token. A `204 No Content` reply is never read and decodes
/// as the empty value of `T`.
pub async fn fetch_api<T: DeserializeOwned>(
    config: &RequestConfig,
    endpoint: &str,
    options: RequestOptions,
) -> Result<T> {
    let RequestOptions {
        method,
        body,
        headers: extra,
    } = options;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(extra);

    if let Some(token) = config.token() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::InvalidToken)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let url = config.url(endpoint);
    debug!(%method, %url, "sending request");

    let mut request = config.client.request(method, &url).headers(headers);

    if let Some(body) = body {
        request = request.body(serde_json::to_vec(&body)?);
    }

    let res = request.send().await?;
    parse_response(res, error::status_fallback).await
}

async fn parse_response<T: DeserializeOwned>(
    res: reqwest::Response,
    fallback: fn(u16) -> String,
) -> Result<T> {
    let status = res.status();
    debug!(status = status.as_u16(), url = %res.url(), "received response");

    if !status.is_success() {
        let code = status.as_u16();
        let bytes = res.bytes().await.unwrap_or_default();
        return Err(Error::from_body(code, &bytes, || fallback(code)));
    }

    if status == StatusCode::NO_CONTENT {
        return empty_value();
    }

    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn empty_value<T: DeserializeOwned>() -> Result<T> {
    match serde_json::from_value(Value::Object(Default::default())) {
        Ok(value) => Ok(value),
        Err(_) => Ok(serde_json::from_value(Value::Null)?),
    }
}
