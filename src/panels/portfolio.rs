// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::BackendClient;
use crate::error::RenderError;
use crate::models::PortfolioValue;
use crate::panels::Panel;
use crate::utils::{fmt_money, fmt_percent};

#[derive(Debug, Default)]
pub struct PortfolioPanel;

impl Panel for PortfolioPanel {
    type Data = PortfolioValue;

    fn title(&self) -> &'static str {
        "Portfolio Value"
    }

    fn fallback(&self) -> &'static str {
        "Unable to load portfolio data"
    }

    fn fetch(&mut self, client: &BackendClient) -> PortfolioValue {
        client.fetch_portfolio_value()
    }

    fn render(p: &PortfolioValue) -> Result<String, RenderError> {
        let arrow = if p.change24h >= 0.0 { "▲" } else { "▼" };
        Ok(format!(
            "{}\n{} {} ({}) 24h",
            fmt_money(p.total, "total")?,
            arrow,
            fmt_money(p.change24h.abs(), "change24h")?,
            fmt_percent(p.change_percentage24h.abs(), "changePercentage24h")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn renders_demo_portfolio() {
        let text = PortfolioPanel::render(&mock::portfolio()).unwrap();
        assert_eq!(text, "$15,420.65\n▲ $420.35 (2.80%) 24h");
    }

    #[test]
    fn negative_change_points_down_without_sign() {
        let p = PortfolioValue {
            total: 1000.0,
            change24h: -12.5,
            change_percentage24h: -1.23,
        };
        let text = PortfolioPanel::render(&p).unwrap();
        assert!(text.ends_with("▼ $12.50 (1.23%) 24h"));
    }
}
