// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Endpoint and access token persisted in the `settings` table.
//!
//! Values are stored as given: no validation, no encryption, no expiry.
//! Readers see a change on their next read only; a [`Credentials`] snapshot
//! taken earlier keeps the old values.

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

pub const ENDPOINT_KEY: &str = "endpointUrl";
pub const TOKEN_KEY: &str = "accessToken";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Snapshot handed to the backend client at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: String,
    pub token: Option<String>,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
        }
    }
}

impl Credentials {
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token,
        }
    }

    /// The stored token, unless it is missing or empty.
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_demo(&self) -> bool {
        self.access_token().is_none()
    }
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub struct CredentialStore<'a> {
    conn: &'a Connection,
}

impl<'a> CredentialStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Raw stored endpoint, `None` when never set.
    pub fn endpoint(&self) -> Result<Option<String>> {
        get_setting(self.conn, ENDPOINT_KEY)
    }

    pub fn set_endpoint(&self, url: &str) -> Result<()> {
        tracing::debug!(endpoint = url, "storing endpoint");
        set_setting(self.conn, ENDPOINT_KEY, url)
    }

    pub fn token(&self) -> Result<Option<String>> {
        get_setting(self.conn, TOKEN_KEY)
    }

    /// An empty stored value counts as no token.
    pub fn has_token(&self) -> Result<bool> {
        Ok(self.token()?.is_some_and(|t| !t.is_empty()))
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        tracing::debug!("storing access token");
        set_setting(self.conn, TOKEN_KEY, token)
    }

    pub fn clear_token(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM settings WHERE key=?1", params![TOKEN_KEY])?;
        Ok(())
    }

    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            endpoint: self
                .endpoint()?
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token: self.token()?,
        })
    }
}

/// Token with everything but the last four characters hidden.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
