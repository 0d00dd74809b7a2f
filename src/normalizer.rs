// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion of raw balance payloads into normalized balances
//!
//! There is one conversion per external payload shape:
//!
//! - [`convert_account_balances`]: ETH + token balances per account. The
//!   reserved `ETH` and `usd_value` fields become `native_amount` and
//!   `usd_value`; every other field becomes a secondary holding.
//! - [`convert_simple_balances`]: `amount` + `usd_value` per account.
//! - [`convert_asset_balances`]: `amount` + `usd_value` per asset symbol.
//!
//! All three are pure: the input is only borrowed, the output is a freshly
//! built map, and calling twice on the same input gives equal results. Every
//! numeric string is parsed into a [`PreciseDecimal`] without rounding.
//!
//! Entries are visited in key order, and within an account entry `ETH` and
//! `usd_value` are checked before the token fields in name order, so the
//! reported error for a given input is always the same.
//!
//! By default a conversion is fail-fast: the first field that is missing or
//! does not parse aborts the call and nothing is returned. Use a
//! [`BalanceNormalizer`] configured with [`InvalidEntryPolicy::SkipAndWarn`]
//! to drop bad entries instead.
//!
//! # Example
//!
//! ```
//! use balance_normalizer::{convert_account_balances, AccountBalances, PreciseDecimal};
//!
//! let raw = AccountBalances::from_json(
//!     r#"{"0xAB": {"ETH": "1.5", "usd_value": "3000", "DAI": "200.25"}}"#,
//! ).unwrap();
//!
//! let balances = convert_account_balances(&raw).unwrap();
//! let account = &balances["0xAB"];
//! assert_eq!(account.native_amount, "1.5".parse::<PreciseDecimal>().unwrap());
//! assert_eq!(account.usd_value, "3000".parse::<PreciseDecimal>().unwrap());
//! assert_eq!(account.secondary_holdings.len(), 1);
//! assert_eq!(account.holding("DAI").unwrap().to_string(), "200.25");
//! ```

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::constants::{
    is_account_reserved, AMOUNT_FIELD, NATIVE_AMOUNT_FIELD, USD_VALUE_FIELD,
};
use crate::config::{InvalidEntryPolicy, NormalizerConfig};
use crate::errors::ConversionError;
use crate::payload::{
    AccountBalances, AssetBalances, RawAccountBalance, RawAssetBalance, RawSimpleBalance,
    SimpleBalances,
};
use crate::tracing::spans;
use crate::types::balance::{
    NormalizedAccountBalance, NormalizedAccountBalances, NormalizedAssetBalances,
    NormalizedSimpleBalance, NormalizedSimpleBalances,
};
use crate::types::decimal::PreciseDecimal;

/// Converts raw balance payloads according to a [`NormalizerConfig`]
///
/// The free functions [`convert_account_balances`], [`convert_simple_balances`]
/// and [`convert_asset_balances`] use the default (fail-fast) configuration.
///
/// # Example
///
/// ```
/// use balance_normalizer::{BalanceNormalizer, NormalizerConfig, SimpleBalances};
///
/// let raw = SimpleBalances::from_json(
///     r#"{"0xAB": {"amount": "1", "usd_value": "2"}, "0xCD": {"amount": "abc", "usd_value": "2"}}"#,
/// ).unwrap();
///
/// // Fail-fast: one bad entry, no output
/// assert!(BalanceNormalizer::default().convert_simple_balances(&raw).is_err());
///
/// // Lenient: the bad entry is dropped
/// let balances = BalanceNormalizer::new(NormalizerConfig::lenient())
///     .convert_simple_balances(&raw)
///     .unwrap();
/// assert_eq!(balances.len(), 1);
/// assert!(balances.contains_key("0xAB"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BalanceNormalizer {
    config: NormalizerConfig,
}

impl BalanceNormalizer {
    /// Create a normalizer with the given configuration
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Convert ETH + token balances, keyed by account
    ///
    /// # Errors
    ///
    /// - [`ConversionError::MissingRequiredField`] if an entry lacks `ETH` or `usd_value`
    /// - [`ConversionError::InvalidNumericFormat`] if any field does not parse as a decimal
    ///
    /// With [`InvalidEntryPolicy::SkipAndWarn`] these entries are dropped instead.
    pub fn convert_account_balances(
        &self,
        raw: &AccountBalances,
    ) -> Result<NormalizedAccountBalances, ConversionError> {
        let span = spans::convert_account_balances(raw.len());
        let _guard = span.enter();

        let balances = self.convert_entries(raw, |account: &str, entry: &RawAccountBalance| {
            convert_account_entry(account, entry)
        })?;

        debug!(
            accounts = balances.len(),
            secondary_holdings = balances
                .values()
                .map(|b| b.secondary_holdings.len())
                .sum::<usize>(),
            "Converted account balances"
        );

        Ok(balances)
    }

    /// Convert simple `amount` + `usd_value` balances, keyed by account
    ///
    /// # Errors
    ///
    /// - [`ConversionError::MissingRequiredField`] if an entry lacks `amount` or `usd_value`
    /// - [`ConversionError::InvalidNumericFormat`] if either does not parse as a decimal
    pub fn convert_simple_balances(
        &self,
        raw: &SimpleBalances,
    ) -> Result<NormalizedSimpleBalances, ConversionError> {
        let span = spans::convert_simple_balances(raw.len());
        let _guard = span.enter();

        let balances = self.convert_entries(raw, |account: &str, entry: &RawSimpleBalance| {
            convert_amount_entry(account, entry.amount.as_deref(), entry.usd_value.as_deref())
        })?;

        debug!(accounts = balances.len(), "Converted simple balances");

        Ok(balances)
    }

    /// Convert aggregate `amount` + `usd_value` balances, keyed by asset symbol
    ///
    /// # Errors
    ///
    /// - [`ConversionError::MissingRequiredField`] if an entry lacks `amount` or `usd_value`
    /// - [`ConversionError::InvalidNumericFormat`] if either does not parse as a decimal
    pub fn convert_asset_balances(
        &self,
        raw: &AssetBalances,
    ) -> Result<NormalizedAssetBalances, ConversionError> {
        let span = spans::convert_asset_balances(raw.len());
        let _guard = span.enter();

        let balances = self.convert_entries(raw, |asset: &str, entry: &RawAssetBalance| {
            convert_amount_entry(asset, entry.amount.as_deref(), entry.usd_value.as_deref())
        })?;

        debug!(assets = balances.len(), "Converted asset balances");

        Ok(balances)
    }

    /// Convert every entry into a fresh map, applying the invalid entry policy
    fn convert_entries<'a, E, T, I, F>(
        &self,
        entries: I,
        convert: F,
    ) -> Result<HashMap<String, T>, ConversionError>
    where
        E: 'a,
        I: IntoIterator<Item = (&'a String, &'a E)>,
        F: Fn(&str, &E) -> Result<T, ConversionError>,
    {
        let mut out = HashMap::new();

        for (key, entry) in entries {
            match convert(key.as_str(), entry) {
                Ok(converted) => {
                    out.insert(key.clone(), converted);
                }
                Err(error) => match self.config.invalid_entry_policy {
                    InvalidEntryPolicy::Reject => {
                        warn!(
                            key = %error.key(),
                            field = %error.field(),
                            %error,
                            "Rejecting balance snapshot"
                        );
                        return Err(error);
                    }
                    InvalidEntryPolicy::SkipAndWarn => {
                        warn!(
                            key = %error.key(),
                            field = %error.field(),
                            %error,
                            "Skipping invalid balance entry"
                        );
                    }
                },
            }
        }

        Ok(out)
    }
}

/// Convert ETH + token balances, keyed by account, failing on the first bad value
///
/// See [`BalanceNormalizer::convert_account_balances`].
pub fn convert_account_balances(
    raw: &AccountBalances,
) -> Result<NormalizedAccountBalances, ConversionError> {
    BalanceNormalizer::new(NormalizerConfig::strict()).convert_account_balances(raw)
}

/// Convert simple balances, keyed by account, failing on the first bad value
///
/// See [`BalanceNormalizer::convert_simple_balances`].
pub fn convert_simple_balances(
    raw: &SimpleBalances,
) -> Result<NormalizedSimpleBalances, ConversionError> {
    BalanceNormalizer::new(NormalizerConfig::strict()).convert_simple_balances(raw)
}

/// Convert aggregate asset balances, keyed by asset symbol, failing on the first bad value
///
/// See [`BalanceNormalizer::convert_asset_balances`].
pub fn convert_asset_balances(
    raw: &AssetBalances,
) -> Result<NormalizedAssetBalances, ConversionError> {
    BalanceNormalizer::new(NormalizerConfig::strict()).convert_asset_balances(raw)
}

fn convert_account_entry(
    account: &str,
    entry: &RawAccountBalance,
) -> Result<NormalizedAccountBalance, ConversionError> {
    let native_amount =
        required_decimal(account, NATIVE_AMOUNT_FIELD, entry.get(NATIVE_AMOUNT_FIELD))?;
    let usd_value = required_decimal(account, USD_VALUE_FIELD, entry.get(USD_VALUE_FIELD))?;

    let secondary_holdings = entry
        .fields()
        .filter(|(symbol, _)| !is_account_reserved(symbol))
        .map(|(symbol, value)| {
            parse_decimal(account, symbol, value).map(|amount| (symbol.to_string(), amount))
        })
        .collect::<Result<HashMap<_, _>, _>>()?;

    Ok(NormalizedAccountBalance {
        native_amount,
        usd_value,
        secondary_holdings,
    })
}

fn convert_amount_entry(
    key: &str,
    amount: Option<&str>,
    usd_value: Option<&str>,
) -> Result<NormalizedSimpleBalance, ConversionError> {
    Ok(NormalizedSimpleBalance {
        amount: required_decimal(key, AMOUNT_FIELD, amount)?,
        usd_value: required_decimal(key, USD_VALUE_FIELD, usd_value)?,
    })
}

fn required_decimal(
    key: &str,
    field: &str,
    value: Option<&str>,
) -> Result<PreciseDecimal, ConversionError> {
    let value = value.ok_or_else(|| ConversionError::missing_required_field(key, field))?;
    parse_decimal(key, field, value)
}

fn parse_decimal(key: &str, field: &str, value: &str) -> Result<PreciseDecimal, ConversionError> {
    value
        .parse()
        .map_err(|_| ConversionError::invalid_numeric_format(key, field, value))
}
