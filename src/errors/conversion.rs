// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for balance conversions.
//!
//! This module provides the error type returned by the three balance
//! conversions in [`crate::normalizer`].

/// Errors that can occur while converting a raw balance entry.
///
/// Every variant names the entry key (an account or an asset symbol) and the
/// field that failed, so the caller can report exactly which part of the
/// upstream snapshot broke the contract.
///
/// # Examples
///
/// ```rust
/// use balance_normalizer::{convert_asset_balances, AssetBalances, ConversionError};
///
/// let raw = AssetBalances::from_json(r#"{"BTC": {"amount": "abc", "usd_value": "1"}}"#).unwrap();
///
/// match convert_asset_balances(&raw) {
///     Err(ConversionError::InvalidNumericFormat { key, field, .. }) => {
///         assert_eq!(key, "BTC");
///         assert_eq!(field, "amount");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A field expected to hold a decimal numeric string does not parse.
    #[error("Invalid numeric value {value:?} for field '{field}' of '{key}'")]
    InvalidNumericFormat {
        /// Account or asset key of the offending entry
        key: String,
        /// Name of the offending field
        field: String,
        /// The raw value as received
        value: String,
    },

    /// A reserved field is absent from an entry.
    ///
    /// Distinct from [`ConversionError::InvalidNumericFormat`]: the field is
    /// not there at all, rather than present and malformed.
    #[error("Missing required field '{field}' for '{key}'")]
    MissingRequiredField {
        /// Account or asset key of the offending entry
        key: String,
        /// Name of the missing field
        field: String,
    },
}

impl ConversionError {
    /// Create an `InvalidNumericFormat` error.
    pub fn invalid_numeric_format(
        key: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ConversionError::InvalidNumericFormat {
            key: key.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a `MissingRequiredField` error.
    pub fn missing_required_field(key: impl Into<String>, field: impl Into<String>) -> Self {
        ConversionError::MissingRequiredField {
            key: key.into(),
            field: field.into(),
        }
    }

    /// The account or asset key of the entry that failed.
    pub fn key(&self) -> &str {
        match self {
            ConversionError::InvalidNumericFormat { key, .. }
            | ConversionError::MissingRequiredField { key, .. } => key,
        }
    }

    /// The field that failed.
    pub fn field(&self) -> &str {
        match self {
            ConversionError::InvalidNumericFormat { field, .. }
            | ConversionError::MissingRequiredField { field, .. } => field,
        }
    }
}
