// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::commands::connect::submit_form;
use crate::commands::http_client_factory;
use crate::config::DashboardConfig;
use crate::credentials::CredentialStore;
use crate::dashboard::Dashboard;
use crate::gate::ConnectionGate;

const LOAD_POLL: Duration = Duration::from_millis(50);
const CLEAR: &str = "\x1B[2J\x1B[H";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let cfg = DashboardConfig::load(conn)?;
    let once = m.get_flag("once");
    let ticks = m.get_one::<u64>("ticks").copied();
    let make_client = http_client_factory(cfg.request_timeout);

    let store = CredentialStore::new(conn);
    let mut gate = ConnectionGate::mount(&store)?;
    let client = if gate.is_connected() {
        make_client(store.credentials()?)?
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        match submit_form(&store, &mut gate, None, None, &mut input, &mut output, make_client)? {
            Some(client) => client,
            None => return Ok(()),
        }
    };

    let mut dash = Dashboard::mount(Arc::new(client), &cfg)?;
    let mut stdout = io::stdout();
    let mut redraws: u64 = 0;
    loop {
        if once && !dash.all_loaded() {
            thread::sleep(LOAD_POLL);
            continue;
        }
        let frame = dash.render();
        if once {
            write!(stdout, "{frame}")?;
        } else {
            write!(stdout, "{CLEAR}{frame}\nCtrl-C to quit, `tradeboard connect` to change connection\n")?;
        }
        stdout.flush()?;
        redraws += 1;
        if once || ticks.is_some_and(|n| redraws >= n) {
            break;
        }
        thread::sleep(cfg.redraw_interval);
    }
    dash.unmount();
    Ok(())
}
