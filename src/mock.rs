// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Demo payloads served whenever the backend is not configured or fails.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::models::{CurrentStatus, CurrentTransaction, PortfolioValue, Side, Transaction, TxStatus};

fn hours_ago(now: DateTime<Utc>, hours: i64) -> String {
    (now - Duration::hours(hours)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Three completed trades stamped one, two and three hours before `now`.
pub fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".into(),
            side: Side::Buy,
            crypto: "BTC".into(),
            amount: 0.05,
            price: 62000.0,
            timestamp: hours_ago(now, 1),
            hash: "0x3d7f8a317e0e11c48abe0acb33eb2bd0".into(),
            status: TxStatus::Completed,
        },
        Transaction {
            id: "2".into(),
            side: Side::Sell,
            crypto: "ETH".into(),
            amount: 1.2,
            price: 3400.0,
            timestamp: hours_ago(now, 2),
            hash: "0x9c8b84d39e0e33c2dabe4acb77eb1bd9".into(),
            status: TxStatus::Completed,
        },
        Transaction {
            id: "3".into(),
            side: Side::Buy,
            crypto: "SOL".into(),
            amount: 10.0,
            price: 142.0,
            timestamp: hours_ago(now, 3),
            hash: "0x2d7a8b317e0456c48a23facb33eb2450".into(),
            status: TxStatus::Completed,
        },
    ]
}

pub fn portfolio() -> PortfolioValue {
    PortfolioValue {
        total: 15420.65,
        change24h: 420.35,
        change_percentage24h: 2.8,
    }
}

pub fn current_transaction() -> CurrentTransaction {
    CurrentTransaction {
        crypto: "BTC".into(),
        side: Side::Buy,
        amount: 0.01,
        price: 61800.0,
        status: CurrentStatus::Pending,
        hash: None,
    }
}
