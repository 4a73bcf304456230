// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tempfile::tempdir;
use tradeboard::credentials::{CredentialStore, Credentials, DEFAULT_ENDPOINT};
use tradeboard::db;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn fresh_store_is_demo_with_default_endpoint() {
    let conn = setup();
    let store = CredentialStore::new(&conn);
    assert_eq!(store.endpoint().unwrap(), None);
    assert_eq!(store.token().unwrap(), None);
    let creds = store.credentials().unwrap();
    assert_eq!(creds, Credentials::default());
    assert_eq!(creds.endpoint, DEFAULT_ENDPOINT);
    assert!(creds.is_demo());
}

#[test]
fn last_write_wins() {
    let conn = setup();
    let store = CredentialStore::new(&conn);
    for (url, token) in [
        ("http://a:1", "t1"),
        ("http://b:2", "t2"),
        ("not even a url", ""),
    ] {
        store.set_endpoint(url).unwrap();
        store.set_token(token).unwrap();
        assert_eq!(store.endpoint().unwrap().as_deref(), Some(url));
        assert_eq!(store.token().unwrap().as_deref(), Some(token));
    }
}

#[test]
fn snapshot_does_not_follow_later_writes() {
    let conn = setup();
    let store = CredentialStore::new(&conn);
    store.set_token("first").unwrap();
    let snapshot = store.credentials().unwrap();
    store.set_token("second").unwrap();
    assert_eq!(snapshot.token.as_deref(), Some("first"));
    assert_eq!(
        store.credentials().unwrap().token.as_deref(),
        Some("second")
    );
}

#[test]
fn clear_token_returns_to_demo() {
    let conn = setup();
    let store = CredentialStore::new(&conn);
    store.set_endpoint("http://keep:9").unwrap();
    store.set_token("secret").unwrap();
    store.clear_token().unwrap();
    let creds = store.credentials().unwrap();
    assert!(creds.is_demo());
    assert_eq!(creds.endpoint, "http://keep:9");
}

#[test]
fn survives_reopen_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("tradeboard.sqlite");
    {
        let conn = db::open_at(&path).unwrap();
        let store = CredentialStore::new(&conn);
        store.set_endpoint("http://persisted:5000").unwrap();
        store.set_token("abc123").unwrap();
    }
    let conn = db::open_at(&path).unwrap();
    let creds = CredentialStore::new(&conn).credentials().unwrap();
    assert_eq!(
        creds,
        Credentials::new("http://persisted:5000", Some("abc123".into()))
    );
}
