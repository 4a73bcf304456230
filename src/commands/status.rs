// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::credentials::{CredentialStore, mask_token};
use crate::gate::{ConnectionGate, GateState};
use crate::utils::pretty_table;

pub fn rows(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let store = CredentialStore::new(conn);
    let creds = store.credentials()?;
    let gate = ConnectionGate::mount(&store)?;
    let state = match gate.state() {
        GateState::Connected => "connected",
        GateState::Disconnected => "disconnected",
    };
    Ok(vec![
        vec!["Endpoint".into(), creds.endpoint.clone()],
        vec![
            "API key".into(),
            creds
                .access_token()
                .map(mask_token)
                .unwrap_or_else(|| "(none)".into()),
        ],
        vec!["Gate".into(), state.into()],
        vec![
            "Mode".into(),
            if creds.is_demo() { "demo" } else { "live" }.into(),
        ],
    ])
}

pub fn handle(conn: &Connection) -> Result<()> {
    println!("{}", pretty_table(&["Setting", "Value"], rows(conn)?));
    Ok(())
}

pub fn disconnect(conn: &Connection) -> Result<()> {
    CredentialStore::new(conn).clear_token()?;
    tracing::info!("access token cleared");
    println!("API key removed; panels will show demo data");
    Ok(())
}
