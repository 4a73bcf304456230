// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local};

use crate::client::BackendClient;
use crate::error::RenderError;
use crate::models::{Side, Transaction, TxStatus};
use crate::panels::Panel;
use crate::utils::{fmt_money, pretty_table};

#[derive(Debug, Default)]
pub struct TransactionListPanel;

pub const INVALID_DATE: &str = "Invalid Date";

/// Local wall-clock time, or a placeholder for an unparsable stamp.
fn local_time(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(err) => {
            tracing::debug!(timestamp = ts, error = %err, "unparsable transaction time");
            INVALID_DATE.to_string()
        }
    }
}

fn row(tx: &Transaction) -> Result<Vec<String>, RenderError> {
    let action = match tx.side {
        Side::Buy => "Bought",
        Side::Sell => "Sold",
    };
    let status = match tx.status {
        TxStatus::Completed => "completed",
        TxStatus::Pending => "pending",
        TxStatus::Failed => "FAILED",
    };
    Ok(vec![
        format!("{action} {}", tx.crypto),
        status.to_string(),
        local_time(&tx.timestamp),
        format!("{} {}", tx.amount, tx.crypto),
        fmt_money(tx.total_value(), "amount*price")?,
        tx.hash.clone(),
    ])
}

impl Panel for TransactionListPanel {
    type Data = Vec<Transaction>;

    fn title(&self) -> &'static str {
        "Recent Transactions"
    }

    fn fallback(&self) -> &'static str {
        "Unable to load transaction list"
    }

    fn fetch(&mut self, client: &BackendClient) -> Vec<Transaction> {
        client.fetch_transactions()
    }

    fn render(data: &Vec<Transaction>) -> Result<String, RenderError> {
        if data.is_empty() {
            return Ok("No transactions found".to_string());
        }
        let rows = data.iter().map(row).collect::<Result<Vec<_>, _>>()?;
        Ok(pretty_table(
            &["Trade", "Status", "Time", "Amount", "Value", "Hash"],
            rows,
        )
        .to_string())
    }
}
