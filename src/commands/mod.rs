// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod connect;
pub mod dashboard;
pub mod fetch;
pub mod status;

use anyhow::Result;
use std::time::Duration;

use crate::client::BackendClient;
use crate::credentials::Credentials;

/// Production client factory: reqwest transport with an optional timeout.
pub fn http_client_factory(
    timeout: Option<Duration>,
) -> impl Fn(Credentials) -> Result<BackendClient> {
    move |creds| BackendClient::http(creds, timeout)
}
