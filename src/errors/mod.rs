// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the balance-normalizer library.
//!
//! It follows the same hybrid approach throughout:
//!
//! - **Module-specific errors** for fine-grained handling ([`ConversionError`],
//!   [`PayloadError`])
//! - **Unified error type** ([`NormalizerError`]) for callers that decode and
//!   convert in one go and don't need to distinguish the source
//!
//! # Examples
//!
//! ```rust
//! use balance_normalizer::{convert_account_balances, AccountBalances, NormalizerError};
//!
//! fn load(json: &str) -> Result<usize, NormalizerError> {
//!     let raw = AccountBalances::from_json(json)?;
//!     let balances = convert_account_balances(&raw)?;
//!     Ok(balances.len())
//! }
//!
//! assert_eq!(load(r#"{"0xAB": {"ETH": "1", "usd_value": "2"}}"#).unwrap(), 1);
//! assert!(matches!(load("not json"), Err(NormalizerError::Payload(_))));
//! ```

mod conversion;
mod payload;

pub use conversion::ConversionError;
pub use payload::PayloadError;

/// Unified error type for all balance-normalizer operations.
#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    /// Error while decoding a raw payload.
    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Error while converting decoded balances.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}
