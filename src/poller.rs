// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed-interval refresh tasks.
//!
//! [`spawn_poll`] runs `fetch` immediately and then at a fixed rate on a
//! dedicated thread, handing each result to `publish`. The returned
//! [`PollHandle`] stops the timer when cancelled or dropped. A fetch that is
//! already running cannot be interrupted, but its result is discarded: once
//! `cancel()` has returned, `publish` is never called again.

use anyhow::{Context, Result};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::utils::lock;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<Mutex<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks while a guarded section is running on another thread.
    pub fn cancel(&self) {
        *lock(&self.cancelled) = true;
    }

    pub fn is_cancelled(&self) -> bool {
        *lock(&self.cancelled)
    }

    /// Run `f` unless cancelled. Cancellation cannot interleave with `f`.
    pub fn run_unless_cancelled<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let guard = lock(&self.cancelled);
        if *guard {
            return None;
        }
        let out = f();
        drop(guard);
        Some(out)
    }
}

pub struct PollHandle {
    name: String,
    interval: Duration,
    token: CancelToken,
    wake: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop the timer. Does not wait for a fetch in progress.
    pub fn cancel(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!(task = %self.name, "poll cancelled");
        }
        self.token.cancel();
        // Dropping the sender wakes a sleeping worker immediately.
        self.wake.take();
    }

    /// Cancel and wait for the worker thread to exit.
    pub fn join(mut self) {
        self.cancel();
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                tracing::error!(task = %self.name, "poll thread panicked");
            }
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn spawn_poll<T, F, P>(
    name: &str,
    interval: Duration,
    mut fetch: F,
    mut publish: P,
) -> Result<PollHandle>
where
    T: Send + 'static,
    F: FnMut(&CancelToken) -> T + Send + 'static,
    P: FnMut(T) + Send + 'static,
{
    let token = CancelToken::new();
    let (wake_tx, wake_rx) = mpsc::channel::<()>();
    let worker_token = token.clone();
    let task = name.to_string();

    let join = thread::Builder::new()
        .name(format!("poll-{name}"))
        .spawn(move || {
            let mut tick: u64 = 0;
            loop {
                if worker_token.is_cancelled() {
                    break;
                }
                tracing::debug!(task = %task, tick, "poll tick");
                let started = Instant::now();
                let value = fetch(&worker_token);
                if worker_token.run_unless_cancelled(|| publish(value)).is_none() {
                    tracing::debug!(task = %task, tick, "result resolved after cancel, dropped");
                    break;
                }
                tick += 1;
                // Fixed rate: a slow fetch shortens the wait, an overrun fires at once.
                match wake_rx.recv_timeout(interval.saturating_sub(started.elapsed())) {
                    Ok(()) | Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        })
        .with_context(|| format!("Failed to spawn poll thread for {name}"))?;

    Ok(PollHandle {
        name: name.to_string(),
        interval,
        token,
        wake: Some(wake_tx),
        join: Some(join),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_section_skipped_after_cancel() {
        let token = CancelToken::new();
        assert_eq!(token.run_unless_cancelled(|| 1), Some(1));
        token.cancel();
        assert_eq!(token.run_unless_cancelled(|| 2), None);
        assert!(token.clone().is_cancelled());
    }
}
