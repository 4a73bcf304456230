// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::panic::{self, AssertUnwindSafe};

use crate::error::RenderError;

/// Barrier around one panel's renderer.
///
/// The first render error or panic latches the barrier: from then on only
/// the fallback text is shown, until the panel is mounted again.
#[derive(Debug)]
pub struct Isolated {
    fallback: &'static str,
    fault: Option<RenderError>,
}

impl Isolated {
    pub fn new(fallback: &'static str) -> Self {
        Self {
            fallback,
            fault: None,
        }
    }

    pub fn fault(&self) -> Option<&RenderError> {
        self.fault.as_ref()
    }

    pub fn is_tripped(&self) -> bool {
        self.fault.is_some()
    }

    pub fn render<F>(&mut self, f: F) -> String
    where
        F: FnOnce() -> Result<String, RenderError>,
    {
        if self.fault.is_some() {
            return self.fallback.to_string();
        }
        let outcome = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(result) => result,
            Err(payload) => {
                let message = if let Some(message) = payload.downcast_ref::<&str>() {
                    (*message).to_string()
                } else if let Some(message) = payload.downcast_ref::<String>() {
                    message.clone()
                } else {
                    "unknown panic payload".to_string()
                };
                Err(RenderError::Panic(message))
            }
        };
        match outcome {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, fallback = self.fallback, "panel render failed");
                self.fault = Some(err);
                self.fallback.to_string()
            }
        }
    }
}
