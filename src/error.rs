// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed errors for the backend client and panel rendering.
//!
//! Neither error ever reaches the user directly: fetch errors collapse into
//! demo data inside the client and render errors into a panel fallback.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused, reset, timeout).
    #[error("network error: {0}")]
    Network(String),

    #[error("backend answered with HTTP {0}")]
    Status(u16),

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("non-finite value in field {0}")]
    NonFinite(&'static str),

    #[error("panel panicked: {0}")]
    Panic(String),
}
