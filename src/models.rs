// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Completed,
    Failed,
}

/// Status of the in-flight transaction. Never `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub crypto: String,
    pub amount: f64,
    pub price: f64,
    pub timestamp: String, // ISO-8601, parsed at render time
    pub hash: String,
    pub status: TxStatus,
}

impl Transaction {
    pub fn total_value(&self) -> f64 {
        self.amount * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValue {
    pub total: f64,
    pub change24h: f64,
    pub change_percentage24h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTransaction {
    pub crypto: String,
    #[serde(rename = "type")]
    pub side: Side,
    pub amount: f64,
    pub price: f64,
    pub status: CurrentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl CurrentTransaction {
    pub fn total_value(&self) -> f64 {
        self.amount * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: String, // HH:MM
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names() {
        let raw = r#"{"total": 100.5, "change24h": -2.0, "changePercentage24h": -1.95}"#;
        let p: PortfolioValue = serde_json::from_str(raw).unwrap();
        assert_eq!(p.change_percentage24h, -1.95);

        let raw = r#"{"crypto":"ETH","type":"sell","amount":2,"price":10,"status":"completed"}"#;
        let c: CurrentTransaction = serde_json::from_str(raw).unwrap();
        assert_eq!(c.side, Side::Sell);
        assert!(c.hash.is_none());
        assert_eq!(c.total_value(), 20.0);
    }

    #[test]
    fn current_status_rejects_failed() {
        let raw = r#"{"crypto":"ETH","type":"buy","amount":1,"price":1,"status":"failed"}"#;
        assert!(serde_json::from_str::<CurrentTransaction>(raw).is_err());
    }
}
