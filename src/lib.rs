// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # balance-normalizer
//!
//! Precision-safe normalization of externally-sourced balance payloads.
//!
//! Balance APIs hand out amounts as decimal strings, keyed by account or by
//! asset symbol. This crate turns those payloads into typed balances backed
//! by an arbitrary-precision decimal, so no digit is lost between the wire
//! and the code that consumes the numbers.
//!
//! - [`AccountBalances`] → [`convert_account_balances`] → [`NormalizedAccountBalances`]
//! - [`SimpleBalances`] → [`convert_simple_balances`] → [`NormalizedSimpleBalances`]
//! - [`AssetBalances`] → [`convert_asset_balances`] → [`NormalizedAssetBalances`]
//!
//! # Example
//!
//! ```
//! use balance_normalizer::{convert_asset_balances, AssetBalances, NormalizerError};
//!
//! # fn main() -> Result<(), NormalizerError> {
//! let raw = AssetBalances::from_json(r#"{"BTC": {"amount": "0.1", "usd_value": "4500"}}"#)?;
//! let assets = convert_asset_balances(&raw)?;
//!
//! assert_eq!(assets["BTC"].amount.to_string(), "0.1");
//! assert_eq!(assets["BTC"].usd_value.to_string(), "4500");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod normalizer;
pub mod payload;
pub mod types;

mod tracing;

pub use config::{InvalidEntryPolicy, NormalizerConfig, NormalizerConfigBuilder};
pub use errors::{ConversionError, NormalizerError, PayloadError};
pub use normalizer::{
    convert_account_balances, convert_asset_balances, convert_simple_balances, BalanceNormalizer,
};
pub use payload::{
    AccountBalances, AssetBalances, RawAccountBalance, RawAssetBalance, RawSimpleBalance,
    SimpleBalances,
};
pub use types::balance::{
    NormalizedAccountBalance, NormalizedAccountBalances, NormalizedAssetBalances,
    NormalizedSimpleBalance, NormalizedSimpleBalances,
};
pub use types::decimal::PreciseDecimal;
