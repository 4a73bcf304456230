// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

use crate::client::BackendClient;
use crate::commands::http_client_factory;
use crate::config::DashboardConfig;
use crate::credentials::{CredentialStore, Credentials};
use crate::gate::{ConnectionGate, prompt_credentials};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let cfg = DashboardConfig::load(conn)?;
    let url = m.get_one::<String>("url").cloned();
    let token = m.get_one::<String>("token").cloned();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    connect(
        conn,
        url,
        token,
        &mut input,
        &mut output,
        http_client_factory(cfg.request_timeout),
    )?;
    Ok(())
}

/// "Change connection": reopen the form even when already connected.
pub fn connect<R, W, F>(
    conn: &Connection,
    url: Option<String>,
    token: Option<String>,
    input: &mut R,
    output: &mut W,
    make_client: F,
) -> Result<Option<BackendClient>>
where
    R: BufRead,
    W: Write,
    F: FnOnce(Credentials) -> Result<BackendClient>,
{
    let store = CredentialStore::new(conn);
    let mut gate = ConnectionGate::mount(&store)?;
    gate.change_connection();
    submit_form(&store, &mut gate, url, token, input, output, make_client)
}

/// Fill the form from flags, prompting when neither flag was given, submit
/// it and report the outcome.
pub fn submit_form<R, W, F>(
    store: &CredentialStore<'_>,
    gate: &mut ConnectionGate,
    url: Option<String>,
    token: Option<String>,
    input: &mut R,
    output: &mut W,
    make_client: F,
) -> Result<Option<BackendClient>>
where
    R: BufRead,
    W: Write,
    F: FnOnce(Credentials) -> Result<BackendClient>,
{
    let (endpoint, token) = match (url, token) {
        (None, None) => prompt_credentials(store, input, output)?,
        (u, t) => (u.unwrap_or_default(), t.unwrap_or_default()),
    };
    let client = gate.submit(store, &endpoint, &token, make_client)?;
    match &client {
        Some(c) => {
            for notice in c.take_notices() {
                writeln!(output, "{}: {}", notice.title, notice.description)?;
            }
            let creds = c.credentials();
            let mode = if creds.is_demo() {
                "demo mode"
            } else {
                "authenticated"
            };
            writeln!(output, "Connected to {} ({})", creds.endpoint, mode)?;
        }
        None => writeln!(output, "Connection failed")?,
    }
    Ok(client)
}
