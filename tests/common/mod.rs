// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tradeboard::client::{BackendClient, RawResponse, Transport};
use tradeboard::credentials::Credentials;
use tradeboard::error::FetchError;

#[derive(Clone)]
pub enum Reply {
    Ok(&'static str),
    Status(u16),
    Network,
}

/// Scripted transport. Replies are chosen by the last path segment of the
/// URL; unknown resources answer HTTP 404. Every dispatched request is logged.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: HashMap<&'static str, Reply>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, resource: &'static str, reply: Reply) -> Self {
        self.replies.insert(resource, reply);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, bearer: &str) -> Result<RawResponse, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), bearer.to_string()));
        let resource = url.rsplit('/').next().unwrap_or_default();
        match self.replies.get(resource) {
            Some(Reply::Ok(body)) => Ok(RawResponse {
                status: 200,
                body: body.to_string(),
            }),
            Some(Reply::Status(code)) => Ok(RawResponse {
                status: *code,
                body: "{\"error\":\"boom\"}".into(),
            }),
            Some(Reply::Network) => Err(FetchError::Network("connection refused".into())),
            None => Ok(RawResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn client(token: Option<&str>, transport: &FakeTransport) -> BackendClient {
    BackendClient::new(
        Credentials::new("http://backend.test:5000", token.map(str::to_string)),
        Box::new(transport.clone()),
    )
    .with_clock(fixed_now)
}

pub fn wait_until(timeout: Duration, mut f: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if f() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    f()
}
