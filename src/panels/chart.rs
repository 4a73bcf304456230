// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Illustrative value trend. The series is synthesized locally as a random
//! walk; there is no backend endpoint behind it.

use chrono::{DateTime, Duration, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::client::BackendClient;
use crate::error::RenderError;
use crate::models::PricePoint;
use crate::panels::Panel;
use crate::utils::fmt_money;

pub const POINTS: usize = 21;
const SPACING_MINUTES: i64 = 15;
const BASE: f64 = 15000.0;
const BASE_SPREAD: f64 = 1000.0;
const STEP: f64 = 200.0;
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn label(t: DateTime<Local>) -> String {
    t.format("%H:%M").to_string()
}

fn step<R: Rng>(prev: f64, rng: &mut R) -> f64 {
    prev + (rng.gen_range(0.0..1.0) - 0.5) * STEP
}

/// 21 points, 15 minutes apart, the last one at `now`.
pub fn initial_series<R: Rng>(now: DateTime<Local>, rng: &mut R) -> Vec<PricePoint> {
    let mut out: Vec<PricePoint> = Vec::with_capacity(POINTS);
    for i in (0..POINTS as i64).rev() {
        let t = now - Duration::minutes(i * SPACING_MINUTES);
        let value = match out.last() {
            Some(prev) => step(prev.value, rng),
            None => BASE + rng.gen_range(0.0..1.0) * BASE_SPREAD,
        };
        out.push(PricePoint {
            time: label(t),
            value,
        });
    }
    out
}

/// Drop the oldest point and append one stamped `now`.
pub fn advance<R: Rng>(series: &mut Vec<PricePoint>, now: DateTime<Local>, rng: &mut R) {
    let Some(last) = series.last().map(|p| p.value) else {
        *series = initial_series(now, rng);
        return;
    };
    if series.len() >= POINTS {
        series.remove(0);
    }
    series.push(PricePoint {
        time: label(now),
        value: step(last, rng),
    });
}

pub fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if span <= f64::EPSILON {
                return BARS[BARS.len() / 2];
            }
            let idx = ((v - min) / span * (BARS.len() - 1) as f64).round() as usize;
            BARS[idx.min(BARS.len() - 1)]
        })
        .collect()
}

pub struct PriceChartPanel {
    series: Vec<PricePoint>,
    rng: StdRng,
}

impl Default for PriceChartPanel {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl PriceChartPanel {
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            series: Vec::new(),
            rng,
        }
    }

    pub fn tick(&mut self, now: DateTime<Local>) -> Vec<PricePoint> {
        if self.series.is_empty() {
            self.series = initial_series(now, &mut self.rng);
        } else {
            advance(&mut self.series, now, &mut self.rng);
        }
        self.series.clone()
    }
}

impl Panel for PriceChartPanel {
    type Data = Vec<PricePoint>;

    fn title(&self) -> &'static str {
        "Portfolio Value Trend"
    }

    fn fallback(&self) -> &'static str {
        "Unable to load chart data"
    }

    fn fetch(&mut self, _client: &BackendClient) -> Vec<PricePoint> {
        self.tick(Local::now())
    }

    fn render(series: &Vec<PricePoint>) -> Result<String, RenderError> {
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Ok("No chart data".to_string());
        };
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RenderError::NonFinite("value"));
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(format!(
            "{}  {} → {}\nlow {}  high {}  last {}",
            sparkline(&values),
            first.time,
            last.time,
            fmt_money(min, "min")?,
            fmt_money(max, "max")?,
            fmt_money(last.value, "value")?,
        ))
    }
}
