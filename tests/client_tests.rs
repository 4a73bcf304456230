// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeTransport, Reply, client};
use tradeboard::mock;
use tradeboard::models::{CurrentStatus, PortfolioValue, Side};

#[test]
fn demo_mode_dispatches_nothing() {
    let transport = FakeTransport::new()
        .reply("portfolio", Reply::Network)
        .reply("transactions", Reply::Network)
        .reply("current-transaction", Reply::Network);
    let c = client(None, &transport);

    let portfolio = c.fetch_portfolio_value();
    assert_eq!(
        portfolio,
        PortfolioValue {
            total: 15420.65,
            change24h: 420.35,
            change_percentage24h: 2.8,
        }
    );
    assert_eq!(c.fetch_transactions().len(), 3);
    assert_eq!(c.fetch_current_transaction(), Some(mock::current_transaction()));
    assert!(transport.calls().is_empty());
}

#[test]
fn empty_token_is_demo_mode() {
    let transport = FakeTransport::new();
    let c = client(Some(""), &transport);
    assert_eq!(c.fetch_transactions().len(), 3);
    assert_eq!(c.fetch_current_transaction(), Some(mock::current_transaction()));
    assert!(transport.calls().is_empty());
}

#[test]
fn http_500_on_transactions_serves_demo_list() {
    let transport = FakeTransport::new().reply("transactions", Reply::Status(500));
    let c = client(Some("secret"), &transport);

    let txs = c.fetch_transactions();
    let summary: Vec<(Side, &str)> = txs.iter().map(|t| (t.side, t.crypto.as_str())).collect();
    assert_eq!(
        summary,
        vec![(Side::Buy, "BTC"), (Side::Sell, "ETH"), (Side::Buy, "SOL")]
    );
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn failures_match_demo_payloads() {
    let demo_transport = FakeTransport::new();
    let demo = client(None, &demo_transport);

    for reply in [Reply::Status(503), Reply::Network, Reply::Ok("not json")] {
        let transport = FakeTransport::new()
            .reply("portfolio", reply.clone())
            .reply("transactions", reply.clone())
            .reply("current-transaction", reply);
        let live = client(Some("secret"), &transport);

        assert_eq!(live.fetch_portfolio_value(), demo.fetch_portfolio_value());
        assert_eq!(live.fetch_transactions(), demo.fetch_transactions());
        assert_eq!(
            live.fetch_current_transaction(),
            demo.fetch_current_transaction()
        );
        assert_eq!(transport.calls().len(), 3);
    }
}

#[test]
fn success_sends_bearer_and_decodes_body() {
    let transport = FakeTransport::new()
        .reply(
            "portfolio",
            Reply::Ok(r#"{"total": 99.5, "change24h": -1.25, "changePercentage24h": -1.24}"#),
        )
        .reply(
            "transactions",
            Reply::Ok(
                r#"[{"id":"a","type":"sell","crypto":"ADA","amount":100,"price":0.5,
                    "timestamp":"2025-02-01T10:00:00Z","hash":"0xdead","status":"failed"}]"#,
            ),
        )
        .reply(
            "current-transaction",
            Reply::Ok(
                r#"{"crypto":"ETH","type":"sell","amount":1,"price":3000,"status":"completed","hash":"0xbeef"}"#,
            ),
        );
    let c = client(Some("secret"), &transport);

    let p = c.fetch_portfolio_value();
    assert_eq!(p.total, 99.5);
    assert_eq!(p.change24h, -1.25);

    let txs = c.fetch_transactions();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].crypto, "ADA");
    assert_eq!(txs[0].total_value(), 50.0);

    let cur = c.fetch_current_transaction().unwrap();
    assert_eq!(cur.status, CurrentStatus::Completed);
    assert_eq!(cur.hash.as_deref(), Some("0xbeef"));

    let calls = transport.calls();
    assert_eq!(
        calls,
        vec![
            ("http://backend.test:5000/portfolio".to_string(), "secret".to_string()),
            ("http://backend.test:5000/transactions".to_string(), "secret".to_string()),
            (
                "http://backend.test:5000/current-transaction".to_string(),
                "secret".to_string()
            ),
        ]
    );
}

#[test]
fn null_current_transaction_means_none() {
    let transport = FakeTransport::new().reply("current-transaction", Reply::Ok("null"));
    let c = client(Some("secret"), &transport);
    assert_eq!(c.fetch_current_transaction(), None);
}

#[test]
fn connection_test_always_succeeds_without_network() {
    let broken = FakeTransport::new().reply("health", Reply::Network);
    for token in [None, Some("secret")] {
        let c = client(token, &broken);
        assert!(c.test_connection());
        let notices = c.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Success");
    }
    let failing = FakeTransport::new().reply("health", Reply::Status(500));
    assert!(client(Some("secret"), &failing).test_connection());

    assert!(broken.calls().is_empty());
    assert!(failing.calls().is_empty());
}
