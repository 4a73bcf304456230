// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::error::RenderError;

const UA: &str = concat!(
    "tradeboard/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/tradeboard)"
);

/// Blocking client used for backend calls. Without `timeout` reqwest's own
/// default applies.
pub fn http_client(timeout: Option<Duration>) -> Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder().user_agent(UA);
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    Ok(builder.build()?)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

fn group_thousands(int_part: &str) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

/// `1234.5` -> `$1,234.50`. Negative values keep their sign in front of the `$`.
pub fn fmt_money(v: f64, field: &'static str) -> Result<String, RenderError> {
    let d = Decimal::from_f64_retain(v)
        .filter(|_| v.is_finite())
        .ok_or(RenderError::NonFinite(field))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{:.2}", d.abs());
    let (int_part, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let sign = if d.is_sign_negative() && !d.is_zero() { "-" } else { "" };
    Ok(format!("{sign}${}.{frac}", group_thousands(int_part)))
}

pub fn fmt_percent(v: f64, field: &'static str) -> Result<String, RenderError> {
    if !v.is_finite() {
        return Err(RenderError::NonFinite(field));
    }
    Ok(format!("{v:.2}%"))
}

/// Lock a mutex, recovering the data if a panicking thread poisoned it.
pub fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
