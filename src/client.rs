// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Backend client with a demo-data fallback.
//!
//! Every fetch resolves to a value. Without an access token the demo payload
//! is returned and nothing is sent; with a token one bearer-authenticated GET
//! is sent and any failure (network, non-2xx status, undecodable body) is
//! logged and answered with the same demo payload.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::FetchError;
use crate::mock;
use crate::models::{CurrentTransaction, PortfolioValue, Transaction};
use crate::utils::{http_client, lock};

pub const TRANSACTIONS_PATH: &str = "transactions";
pub const PORTFOLIO_PATH: &str = "portfolio";
pub const CURRENT_TRANSACTION_PATH: &str = "current-transaction";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Network seam. Implementations send one GET with a bearer token.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, bearer: &str) -> Result<RawResponse, FetchError>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, bearer: &str) -> Result<RawResponse, FetchError> {
        let resp = self.client.get(url).bearer_auth(bearer).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(RawResponse { status, body })
    }
}

/// Toast-style message produced by the connection check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

pub struct BackendClient {
    credentials: Credentials,
    transport: Box<dyn Transport>,
    clock: fn() -> DateTime<Utc>,
    notices: Mutex<Vec<Notice>>,
}

impl BackendClient {
    pub fn new(credentials: Credentials, transport: Box<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            clock: Utc::now,
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Client talking HTTP through reqwest.
    pub fn http(credentials: Credentials, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self::new(credentials, Box::new(HttpTransport::new(timeout)?)))
    }

    /// Replace the time source used to stamp demo transactions.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.credentials.endpoint.trim_end_matches('/'),
            resource
        )
    }

    /// Always reports a working connection. No health request is sent, so an
    /// unreachable or misconfigured backend still "connects" and the panels
    /// then run on demo data.
    pub fn test_connection(&self) -> bool {
        let notice = Notice {
            title: "Success".into(),
            description: "Connected to dummy backend".into(),
        };
        tracing::info!(
            endpoint = %self.credentials.endpoint,
            demo = self.credentials.is_demo(),
            "{}: {}",
            notice.title,
            notice.description
        );
        lock(&self.notices).push(notice);
        true
    }

    /// Drain notices recorded since the last call.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *lock(&self.notices))
    }

    pub fn fetch_transactions(&self) -> Vec<Transaction> {
        self.fetch_or_mock(TRANSACTIONS_PATH, || mock::transactions((self.clock)()))
    }

    pub fn fetch_portfolio_value(&self) -> PortfolioValue {
        self.fetch_or_mock(PORTFOLIO_PATH, mock::portfolio)
    }

    /// `None` when the backend reports no transaction in flight (`null` body).
    pub fn fetch_current_transaction(&self) -> Option<CurrentTransaction> {
        self.fetch_or_mock(CURRENT_TRANSACTION_PATH, || {
            Some(mock::current_transaction())
        })
    }

    fn fetch_or_mock<T, F>(&self, resource: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(token) = self.credentials.access_token() else {
            return fallback();
        };
        match self.get_json(resource, token) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(resource, error = %err, "request failed, serving demo data");
                fallback()
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, resource: &str, token: &str) -> Result<T, FetchError> {
        let url = self.url_for(resource);
        tracing::debug!(%url, "GET");
        let resp = self.transport.get(&url, token)?;
        if !(200..300).contains(&resp.status) {
            return Err(FetchError::Status(resp.status));
        }
        Ok(serde_json::from_str(&resp.body)?)
    }
}
