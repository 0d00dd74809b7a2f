// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for balance-normalizer integration tests
//!
//! Provides payload fixtures shaped like real API responses, plus a tracing
//! subscriber so conversion logs show up under `cargo test -- --nocapture`.

#![allow(dead_code)]

use balance_normalizer::PreciseDecimal;
use tracing_subscriber::EnvFilter;

/// ETH + token balances for three accounts, one without tokens
pub const ACCOUNT_BALANCES_JSON: &str = r#"{
    "0xAB": {"ETH": "1.5", "usd_value": "3000", "DAI": "200.25"},
    "0x78b0AD50E768D2376C6BA7de33F426ecE4e03e0B": {
        "ETH": "10.000000000000000001",
        "usd_value": "20451.123456789012345678",
        "DAI": "0.000000000000000001",
        "MKR": "3.14159265358979323846",
        "GNO": "0"
    },
    "0x9531C059098e3d194fF87FebB587aB07B30B1306": {"ETH": "0", "usd_value": "0"}
}"#;

/// Simple per-account balances
pub const SIMPLE_BALANCES_JSON: &str = r#"{
    "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2": {"amount": "0.5", "usd_value": "22500"},
    "1CounterpartyXXXXXXXXXXXXXXXUWLpVr": {"amount": "0.00000001", "usd_value": "0.00045"},
    "18ddjB7HWTVxzvTbLp1nWvaBxU3U2oTZF2": {"amount": "21000000", "usd_value": "945000000000"}
}"#;

/// Aggregate per-asset balances
pub const ASSET_BALANCES_JSON: &str = r#"{
    "BTC": {"amount": "0.1", "usd_value": "4500"},
    "ETH": {"amount": "11.500000000000000001", "usd_value": "23451.123456789012345678"},
    "DAI": {"amount": "200.250000000000000001", "usd_value": "200.25"}
}"#;

/// Parse a decimal literal, panicking on bad test input
pub fn dec(s: &str) -> PreciseDecimal {
    s.parse().expect("test decimal literal")
}

/// Install a test-writer tracing subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
