/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use parking_lot::RwLock;
use std::fmt;

/// Name under which persistent stores keep the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Read-only view of wherever the session keeps its access token.
///
/// The connector asks for the token once per request and never writes it;
/// logging in and out is the caller's business.
pub trait TokenStorage: Send + Sync + fmt::Debug {
    fn access_token(&self) -> Option<String>;
}

/// Storage for contexts that never hold a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStorage;

impl TokenStorage for NoStorage {
    fn access_token(&self) -> Option<String> {
        None
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    token: RwLock<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

impl TokenStorage for MemoryStorage {
    fn access_token(&self) -> Option<String> {
        self.token.read().clone().filter(|t| !t.is_empty())
    }
}

impl fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStorage")
            .field("token", &self.token.read().as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
