// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use tradeboard::{cli, commands, db, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_flag("verbose"));

    let conn = match matches.get_one::<String>("db") {
        Some(path) => db::open_at(&PathBuf::from(path))?,
        None => db::open_or_init()?,
    };

    match matches.subcommand() {
        Some(("connect", sub)) => commands::connect::handle(&conn, sub)?,
        Some(("disconnect", _)) => commands::status::disconnect(&conn)?,
        Some(("status", _)) => commands::status::handle(&conn)?,
        Some(("fetch", sub)) => commands::fetch::handle(&conn, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&conn, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
