// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use crate::client::BackendClient;
use crate::config::DashboardConfig;
use crate::panels::{
    CurrentTransactionPanel, MountedPanel, PanelView, PortfolioPanel, PriceChartPanel,
    TransactionListPanel,
};

pub const HEADER: &str = "Crypto Trading Dashboard";

/// The four panels, each polling on its own.
pub struct Dashboard {
    panels: Vec<Box<dyn PanelView>>,
    demo: bool,
}

impl Dashboard {
    pub fn mount(client: Arc<BackendClient>, cfg: &DashboardConfig) -> Result<Self> {
        let demo = client.credentials().is_demo();
        let panels: Vec<Box<dyn PanelView>> = vec![
            Box::new(MountedPanel::mount(
                PortfolioPanel,
                Arc::clone(&client),
                cfg.portfolio_interval,
            )?),
            Box::new(MountedPanel::mount(
                CurrentTransactionPanel,
                Arc::clone(&client),
                cfg.current_interval,
            )?),
            Box::new(MountedPanel::mount(
                TransactionListPanel,
                Arc::clone(&client),
                cfg.transactions_interval,
            )?),
            Box::new(MountedPanel::mount(
                PriceChartPanel::default(),
                client,
                cfg.chart_interval,
            )?),
        ];
        let dash = Self { panels, demo };
        for (title, interval) in dash.schedule() {
            tracing::debug!(panel = title, ?interval, "refresh scheduled");
        }
        tracing::info!(panels = dash.panels.len(), demo, "dashboard mounted");
        Ok(dash)
    }

    /// Assemble a dashboard from already mounted panels.
    pub fn with_panels(panels: Vec<Box<dyn PanelView>>, demo: bool) -> Self {
        Self { panels, demo }
    }

    /// Panel titles in display order with their refresh intervals.
    pub fn schedule(&self) -> Vec<(&'static str, Duration)> {
        self.panels.iter().map(|p| (p.title(), p.interval())).collect()
    }

    pub fn all_loaded(&self) -> bool {
        self.panels.iter().all(|p| p.is_loaded())
    }

    pub fn render(&mut self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{HEADER}");
        if self.demo {
            let _ = writeln!(out, "(demo mode: no API key configured)");
        }
        for panel in &mut self.panels {
            let body = panel.view();
            let _ = writeln!(out, "\n── {} ──", panel.title());
            let _ = writeln!(out, "{body}");
        }
        out
    }

    pub fn unmount(self) {
        for panel in self.panels {
            panel.unmount();
        }
        tracing::debug!("dashboard unmounted");
    }
}
