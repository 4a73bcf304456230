// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::config::{DashboardConfig, store};
use crate::utils::pretty_table;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = DashboardConfig::load(conn)?;
            println!("{}", pretty_table(&["Key", "Value"], cfg.rows()));
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("KEY").unwrap();
            let secs = sub.get_one::<String>("SECONDS").unwrap();
            store(conn, key, secs)?;
            println!("Set {} = {}s", key, secs.trim());
        }
        _ => {}
    }
    Ok(())
}
