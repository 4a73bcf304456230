// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use std::time::Duration;

use crate::credentials::{get_setting, set_setting};

pub const INTERVAL_KEYS: [&str; 4] = [
    "interval.portfolio",
    "interval.current",
    "interval.transactions",
    "interval.chart",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub portfolio_interval: Duration,
    pub current_interval: Duration,
    pub transactions_interval: Duration,
    pub chart_interval: Duration,
    /// How often the terminal is redrawn from panel state.
    pub redraw_interval: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            portfolio_interval: Duration::from_secs(30),
            current_interval: Duration::from_secs(10),
            transactions_interval: Duration::from_secs(20),
            chart_interval: Duration::from_secs(60),
            redraw_interval: Duration::from_secs(1),
            request_timeout: None,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by any `interval.*` keys in the settings table.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut cfg = Self::default();
        for key in INTERVAL_KEYS {
            if let Some(raw) = get_setting(conn, key)? {
                let secs = parse_seconds(&raw)
                    .with_context(|| format!("Invalid stored value for {key}"))?;
                *cfg.slot_mut(key)? = secs;
            }
        }
        if let Some(raw) = get_setting(conn, "request.timeout")? {
            cfg.request_timeout = Some(
                parse_seconds(&raw).context("Invalid stored value for request.timeout")?,
            );
        }
        Ok(cfg)
    }

    fn slot_mut(&mut self, key: &str) -> Result<&mut Duration> {
        match key {
            "interval.portfolio" => Ok(&mut self.portfolio_interval),
            "interval.current" => Ok(&mut self.current_interval),
            "interval.transactions" => Ok(&mut self.transactions_interval),
            "interval.chart" => Ok(&mut self.chart_interval),
            other => Err(anyhow!(
                "Unknown setting '{other}' (expected one of {} or request.timeout)",
                INTERVAL_KEYS.join(", ")
            )),
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = vec![
            ("interval.portfolio", self.portfolio_interval),
            ("interval.current", self.current_interval),
            ("interval.transactions", self.transactions_interval),
            ("interval.chart", self.chart_interval),
        ]
        .into_iter()
        .map(|(k, d)| vec![k.to_string(), format!("{}s", d.as_secs())])
        .collect();
        rows.push(vec![
            "request.timeout".into(),
            self.request_timeout
                .map(|d| format!("{}s", d.as_secs()))
                .unwrap_or_else(|| "default".into()),
        ]);
        rows
    }
}

pub fn parse_seconds(s: &str) -> Result<Duration> {
    let n: u64 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid seconds '{}'", s))?;
    if n == 0 {
        return Err(anyhow!("Interval must be at least one second"));
    }
    Ok(Duration::from_secs(n))
}

/// Validate and persist one `config set` pair.
pub fn store(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let secs = parse_seconds(value)?;
    if key != "request.timeout" {
        DashboardConfig::default().slot_mut(key)?;
    }
    set_setting(conn, key, &secs.as_secs().to_string())
}
