// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tradeboard::{cli, commands::status, credentials::CredentialStore, db};

#[test]
fn global_db_flag_after_subcommand() {
    let matches = cli::build_cli().get_matches_from([
        "tradeboard",
        "dashboard",
        "--ticks",
        "3",
        "--db",
        "/tmp/x.sqlite",
    ]);
    assert_eq!(
        matches.get_one::<String>("db").map(String::as_str),
        Some("/tmp/x.sqlite")
    );
    if let Some(("dashboard", sub)) = matches.subcommand() {
        assert_eq!(sub.get_one::<u64>("ticks"), Some(&3));
        assert!(!sub.get_flag("once"));
    } else {
        panic!("no dashboard subcommand");
    }
}

#[test]
fn fetch_json_flags_conflict() {
    let res = cli::build_cli().try_get_matches_from([
        "tradeboard",
        "fetch",
        "portfolio",
        "--json",
        "--jsonl",
    ]);
    assert!(res.is_err());

    let matches = cli::build_cli().get_matches_from(["tradeboard", "fetch", "chart", "--jsonl"]);
    let Some(("fetch", fetch_m)) = matches.subcommand() else {
        panic!("no fetch subcommand");
    };
    let Some(("chart", chart_m)) = fetch_m.subcommand() else {
        panic!("no chart subcommand");
    };
    assert!(chart_m.get_flag("jsonl"));
}

#[test]
fn connect_flags_are_optional() {
    let matches = cli::build_cli().get_matches_from(["tradeboard", "connect", "--url", "http://h:1"]);
    let Some(("connect", sub)) = matches.subcommand() else {
        panic!("no connect subcommand");
    };
    assert_eq!(
        sub.get_one::<String>("url").map(String::as_str),
        Some("http://h:1")
    );
    assert!(sub.get_one::<String>("token").is_none());
}

#[test]
fn status_masks_token() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let store = CredentialStore::new(&conn);

    let rows = status::rows(&conn).unwrap();
    assert_eq!(rows[1], vec!["API key".to_string(), "(none)".to_string()]);
    assert_eq!(rows[2][1], "disconnected");
    assert_eq!(rows[3][1], "demo");

    store.set_token("").unwrap();
    let rows = status::rows(&conn).unwrap();
    assert_eq!(rows[1][1], "(none)");
    assert_eq!(rows[2][1], "disconnected");

    store.set_token("supersecret").unwrap();
    let rows = status::rows(&conn).unwrap();
    assert_eq!(rows[1][1], "*******cret");
    assert_eq!(rows[2][1], "connected");
    assert_eq!(rows[3][1], "live");
}
