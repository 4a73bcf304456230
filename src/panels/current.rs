// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::BackendClient;
use crate::error::RenderError;
use crate::models::{CurrentStatus, CurrentTransaction, Side};
use crate::panels::Panel;
use crate::utils::fmt_money;

#[derive(Debug, Default)]
pub struct CurrentTransactionPanel;

impl Panel for CurrentTransactionPanel {
    type Data = Option<CurrentTransaction>;

    fn title(&self) -> &'static str {
        "Current Transaction"
    }

    fn fallback(&self) -> &'static str {
        "Unable to load transaction data"
    }

    fn fetch(&mut self, client: &BackendClient) -> Option<CurrentTransaction> {
        client.fetch_current_transaction()
    }

    fn render(data: &Option<CurrentTransaction>) -> Result<String, RenderError> {
        let Some(tx) = data else {
            return Ok("No active transactions".to_string());
        };
        let verb = match tx.side {
            Side::Buy => "Buying",
            Side::Sell => "Selling",
        };
        let marker = match tx.status {
            CurrentStatus::Pending => " …",
            CurrentStatus::Completed => "",
        };
        let mut lines = vec![
            format!("{verb} {}{marker}", tx.crypto),
            format!("Amount  {} {}", tx.amount, tx.crypto),
            format!("Price   {}", fmt_money(tx.price, "price")?),
            format!("Total   {}", fmt_money(tx.total_value(), "total")?),
        ];
        if let Some(hash) = &tx.hash {
            lines.push(format!("Hash    {hash}"));
        }
        Ok(lines.join("\n"))
    }
}
