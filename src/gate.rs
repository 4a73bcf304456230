// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Two-state gate in front of the dashboard.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::client::BackendClient;
use crate::credentials::{CredentialStore, Credentials, DEFAULT_ENDPOINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Disconnected,
    Connected,
}

#[derive(Debug)]
pub struct ConnectionGate {
    state: GateState,
}

impl ConnectionGate {
    /// Connected iff a non-empty access token is stored right now.
    pub fn mount(store: &CredentialStore<'_>) -> Result<Self> {
        let state = if store.has_token()? {
            GateState::Connected
        } else {
            GateState::Disconnected
        };
        tracing::debug!(?state, "gate mounted");
        Ok(Self { state })
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == GateState::Connected
    }

    /// Store the submitted fields and run the connection check.
    ///
    /// Blank fields (after trimming) leave the stored value untouched. The
    /// client is built from the freshly stored credentials; it is returned
    /// when the check passes, which it always does.
    pub fn submit<F>(
        &mut self,
        store: &CredentialStore<'_>,
        endpoint: &str,
        token: &str,
        make_client: F,
    ) -> Result<Option<BackendClient>>
    where
        F: FnOnce(Credentials) -> Result<BackendClient>,
    {
        let token = token.trim();
        if !token.is_empty() {
            store.set_token(token)?;
        }
        let endpoint = endpoint.trim();
        if !endpoint.is_empty() {
            store.set_endpoint(endpoint)?;
        }

        let client = make_client(store.credentials()?)?;
        if !client.test_connection() {
            return Ok(None);
        }
        tracing::info!(from = ?self.state, to = ?GateState::Connected, "gate transition");
        self.state = GateState::Connected;
        Ok(Some(client))
    }

    /// "Change connection": back to the form, credentials kept as they are.
    pub fn change_connection(&mut self) {
        if self.state == GateState::Connected {
            tracing::info!(from = ?self.state, to = ?GateState::Disconnected, "gate transition");
        }
        self.state = GateState::Disconnected;
    }
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    shown_default: &str,
) -> Result<String> {
    if shown_default.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{shown_default}]: ")?;
    }
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Ask for endpoint and token, showing the stored endpoint as default.
/// An empty answer keeps the stored value. Returns the raw answers.
pub fn prompt_credentials<R: BufRead, W: Write>(
    store: &CredentialStore<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<(String, String)> {
    writeln!(output, "Connect to trading backend")?;
    let current = store
        .endpoint()?
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let endpoint = prompt_line(input, output, "API URL", &current)?;
    let has_token = store.has_token()?;
    let token = prompt_line(
        input,
        output,
        "API key (optional)",
        if has_token { "keep stored" } else { "" },
    )?;
    Ok((endpoint, token))
}
