// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard panels.
//!
//! A [`Panel`] knows how to fetch its data and turn it into text. Mounting a
//! panel starts its refresh task; the resulting [`MountedPanel`] owns the
//! task handle, the latest state and the isolation barrier.

pub mod chart;
pub mod current;
pub mod isolation;
pub mod portfolio;
pub mod transactions;

use anyhow::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::BackendClient;
use crate::error::RenderError;
use crate::poller::{PollHandle, spawn_poll};
use crate::utils::lock;

pub use chart::PriceChartPanel;
pub use current::CurrentTransactionPanel;
pub use isolation::Isolated;
pub use portfolio::PortfolioPanel;
pub use transactions::TransactionListPanel;

pub const LOADING: &str = "Loading...";

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    Loading,
    Ready(T),
}

pub trait Panel: Send + 'static {
    type Data: Clone + Send + 'static;

    fn title(&self) -> &'static str;

    /// Shown in place of the panel once rendering has failed.
    fn fallback(&self) -> &'static str;

    fn fetch(&mut self, client: &BackendClient) -> Self::Data;

    fn render(data: &Self::Data) -> Result<String, RenderError>;
}

/// Object-safe view over a mounted panel, used by the dashboard.
pub trait PanelView: Send {
    fn title(&self) -> &'static str;

    /// Current text: loading placeholder, rendered data or fallback.
    fn view(&mut self) -> String;

    fn is_loaded(&self) -> bool;

    fn interval(&self) -> Duration;

    /// Stops the refresh timer. A fetch in progress finishes but is dropped.
    fn unmount(self: Box<Self>);
}

pub struct MountedPanel<P: Panel> {
    title: &'static str,
    state: Arc<Mutex<PanelState<P::Data>>>,
    handle: PollHandle,
    isolation: Isolated,
}

impl<P: Panel> MountedPanel<P> {
    pub fn mount(mut panel: P, client: Arc<BackendClient>, interval: Duration) -> Result<Self> {
        let title = panel.title();
        let isolation = Isolated::new(panel.fallback());
        let state = Arc::new(Mutex::new(PanelState::Loading));
        let sink = Arc::clone(&state);
        let handle = spawn_poll(
            title,
            interval,
            move |_token| panel.fetch(&client),
            move |data| *lock(&sink) = PanelState::Ready(data),
        )?;
        Ok(Self {
            title,
            state,
            handle,
            isolation,
        })
    }

    pub fn state(&self) -> PanelState<P::Data> {
        lock(&self.state).clone()
    }

    pub fn handle(&self) -> &PollHandle {
        &self.handle
    }
}

impl<P: Panel> PanelView for MountedPanel<P> {
    fn title(&self) -> &'static str {
        self.title
    }

    fn view(&mut self) -> String {
        let snapshot = self.state();
        match snapshot {
            PanelState::Loading => LOADING.to_string(),
            PanelState::Ready(data) => self.isolation.render(|| P::render(&data)),
        }
    }

    fn is_loaded(&self) -> bool {
        matches!(*lock(&self.state), PanelState::Ready(_))
    }

    fn interval(&self) -> Duration {
        self.handle.interval()
    }

    fn unmount(self: Box<Self>) {
        let MountedPanel { mut handle, .. } = *self;
        handle.cancel();
    }
}
