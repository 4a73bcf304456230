// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::client::BackendClient;
use crate::config::DashboardConfig;
use crate::credentials::CredentialStore;
use crate::panels::{
    CurrentTransactionPanel, Isolated, Panel, PortfolioPanel, PriceChartPanel,
    TransactionListPanel,
};
use crate::utils::maybe_print_json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let cfg = DashboardConfig::load(conn)?;
    let creds = CredentialStore::new(conn).credentials()?;
    let client = BackendClient::http(creds, cfg.request_timeout)?;
    match m.subcommand() {
        Some(("portfolio", sub)) => print_once(PortfolioPanel, &client, sub),
        Some(("current", sub)) => print_once(CurrentTransactionPanel, &client, sub),
        Some(("transactions", sub)) => print_once(TransactionListPanel, &client, sub),
        Some(("chart", sub)) => print_once(PriceChartPanel::default(), &client, sub),
        _ => Ok(()),
    }
}

fn print_once<P>(panel: P, client: &BackendClient, sub: &clap::ArgMatches) -> Result<()>
where
    P: Panel,
    P::Data: Serialize,
{
    let json = sub.get_flag("json");
    let jsonl = sub.get_flag("jsonl");
    let (title, data, text) = fetch_once(panel, client);
    if maybe_print_json(json, jsonl, &data)? {
        return Ok(());
    }
    println!("{title}\n{text}");
    Ok(())
}

/// One fetch and one isolated render, outside of any refresh loop.
pub fn fetch_once<P: Panel>(mut panel: P, client: &BackendClient) -> (&'static str, P::Data, String) {
    let mut isolation = Isolated::new(panel.fallback());
    let data = panel.fetch(client);
    let text = isolation.render(|| P::render(&data));
    (panel.title(), data, text)
}
