// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw balance payloads as received from the external API
//!
//! Each external payload shape gets its own type, so a conversion can only be
//! handed the shape it knows how to read:
//!
//! | Payload | Keyed by | Entry type |
//! |---------|----------|------------|
//! | [`AccountBalances`] | account | [`RawAccountBalance`]: `ETH`, `usd_value`, plus one field per token |
//! | [`SimpleBalances`] | account | [`RawSimpleBalance`]: `amount`, `usd_value` |
//! | [`AssetBalances`] | asset symbol | [`RawAssetBalance`]: `amount`, `usd_value` |
//!
//! Every numeric field must be a JSON string. A JSON number is rejected when
//! decoding, since it may already have been rounded by whoever produced it.
//!
//! # Example
//!
//! ```
//! use balance_normalizer::AccountBalances;
//!
//! let raw = AccountBalances::from_json(
//!     r#"{"0xAB": {"ETH": "1.5", "usd_value": "3000", "DAI": "200.25"}}"#,
//! ).unwrap();
//! assert_eq!(raw.len(), 1);
//! assert_eq!(raw.get("0xAB").and_then(|b| b.get("DAI")), Some("200.25"));
//!
//! // Numbers instead of numeric strings are refused
//! assert!(AccountBalances::from_json(r#"{"0xAB": {"ETH": 1.5}}"#).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::errors::PayloadError;
use crate::tracing::spans;

/// One account's entry in an ETH + token balances payload
///
/// A flat map from field name to numeric string. Besides the reserved native
/// amount and USD value fields, each field is a token holding. Fields are
/// kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAccountBalance(BTreeMap<String, String>);

impl RawAccountBalance {
    /// Create an entry from its fields
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        fields.into_iter().collect()
    }

    /// Value of `field`, if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// All fields of the entry in name order, reserved ones included
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields in the entry
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the entry has no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawAccountBalance {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One account's entry in a simple balances payload
///
/// Fields are optional at decode time; a missing one is reported by the
/// conversion as [`crate::ConversionError::MissingRequiredField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSimpleBalance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<String>,
}

impl RawSimpleBalance {
    /// Create an entry with both fields present
    pub fn new(amount: impl Into<String>, usd_value: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            usd_value: Some(usd_value.into()),
        }
    }
}

/// One asset's entry in an aggregate asset balances payload
///
/// Same fields as [`RawSimpleBalance`], but the entry describes the total
/// held of one asset rather than one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAssetBalance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_value: Option<String>,
}

impl RawAssetBalance {
    /// Create an entry with both fields present
    pub fn new(amount: impl Into<String>, usd_value: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            usd_value: Some(usd_value.into()),
        }
    }
}

/// Defines a keyed payload newtype and its shared accessors.
///
/// Entries are kept sorted by key, so conversions visit them in a stable order.
macro_rules! keyed_payload {
    ($(#[$meta:meta])* $name:ident, $entry:ty, $shape:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(BTreeMap<String, $entry>);

        impl $name {
            /// Decode the payload from JSON text
            pub fn from_json(json: &str) -> Result<Self, PayloadError> {
                let span = spans::decode_payload($shape, json.len());
                let _guard = span.enter();

                serde_json::from_str(json).map_err(|e| PayloadError::decode($shape, e))
            }

            /// Decode the payload from an already-parsed JSON value
            pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
                serde_json::from_value(value).map_err(|e| PayloadError::decode($shape, e))
            }

            /// Entry for `key`, if present
            pub fn get(&self, key: &str) -> Option<&$entry> {
                self.0.get(key)
            }

            /// Add or replace the entry for `key`
            pub fn insert(&mut self, key: impl Into<String>, entry: $entry) -> Option<$entry> {
                self.0.insert(key.into(), entry)
            }

            /// Iterate over all entries in key order
            pub fn iter(&self) -> btree_map::Iter<'_, String, $entry> {
                self.0.iter()
            }

            /// Number of entries
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether the payload has no entries
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl<K: Into<String>> FromIterator<(K, $entry)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, $entry)>>(iter: I) -> Self {
                Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = (&'a String, &'a $entry);
            type IntoIter = btree_map::Iter<'a, String, $entry>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

keyed_payload!(
    /// ETH + token balances payload, keyed by account
    AccountBalances,
    RawAccountBalance,
    "account balances"
);

keyed_payload!(
    /// Simple balances payload, keyed by account
    SimpleBalances,
    RawSimpleBalance,
    "simple balances"
);

keyed_payload!(
    /// Aggregate balances payload, keyed by asset symbol
    AssetBalances,
    RawAssetBalance,
    "asset balances"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_account_balances() {
        let raw = AccountBalances::from_json(
            r#"{
                "0xAB": {"ETH": "1.5", "usd_value": "3000", "DAI": "200.25"},
                "0xCD": {"ETH": "0", "usd_value": "0"}
            }"#,
        )
        .unwrap();

        assert_eq!(raw.len(), 2);
        let entry = raw.get("0xAB").unwrap();
        assert_eq!(entry.len(), 3);
        assert_eq!(entry.get("ETH"), Some("1.5"));
        assert_eq!(entry.get("MKR"), None);
        assert!(!raw.get("0xCD").unwrap().is_empty());
    }

    #[test]
    fn test_decode_keeps_digits_verbatim() {
        let raw = AssetBalances::from_json(
            r#"{"ETH": {"amount": "0.123456789012345678901234", "usd_value": "1e3"}}"#,
        )
        .unwrap();
        let entry = raw.get("ETH").unwrap();
        assert_eq!(entry.amount.as_deref(), Some("0.123456789012345678901234"));
        assert_eq!(entry.usd_value.as_deref(), Some("1e3"));
    }

    #[test]
    fn test_decode_missing_fields_are_none() {
        let raw = SimpleBalances::from_json(r#"{"0xAB": {"amount": "1"}}"#).unwrap();
        let entry = raw.get("0xAB").unwrap();
        assert_eq!(entry.amount.as_deref(), Some("1"));
        assert_eq!(entry.usd_value, None);
    }

    #[test]
    fn test_decode_rejects_json_numbers() {
        let err = AssetBalances::from_json(r#"{"BTC": {"amount": 0.1, "usd_value": "4500"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("asset balances"));

        assert!(AccountBalances::from_json(r#"{"0xAB": {"ETH": 1}}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(AccountBalances::from_json("[]").is_err());
        assert!(SimpleBalances::from_json(r#"{"0xAB": "1"}"#).is_err());
        assert!(AccountBalances::from_json("{").is_err());
    }

    #[test]
    fn test_from_value() {
        let value = serde_json::json!({"BTC": {"amount": "0.1", "usd_value": "4500"}});
        let raw = AssetBalances::from_value(value).unwrap();
        assert_eq!(raw.get("BTC"), Some(&RawAssetBalance::new("0.1", "4500")));
    }

    #[test]
    fn test_from_iterator_and_insert() {
        let mut raw: SimpleBalances =
            [("0xAB", RawSimpleBalance::new("1", "2"))].into_iter().collect();
        assert_eq!(raw.insert("0xCD", RawSimpleBalance::new("3", "4")), None);
        assert_eq!(raw.len(), 2);

        let entry: RawAccountBalance = [("ETH", "1"), ("usd_value", "2")].into_iter().collect();
        assert_eq!(entry.fields().count(), 2);
    }

    #[test]
    fn test_entries_iterate_in_key_order() {
        let raw = AccountBalances::from_json(
            r#"{"0xCC": {"ETH": "1"}, "0xAA": {"ETH": "1"}, "0xBB": {"ETH": "1"}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = raw.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["0xAA", "0xBB", "0xCC"]);

        let entry = RawAccountBalance::new([("MKR", "1"), ("DAI", "2"), ("ETH", "3")]);
        let fields: Vec<&str> = entry.fields().map(|(k, _)| k).collect();
        assert_eq!(fields, ["DAI", "ETH", "MKR"]);
    }

    #[test]
    fn test_empty_payload() {
        let raw = AccountBalances::from_json("{}").unwrap();
        assert!(raw.is_empty());
        assert_eq!((&raw).into_iter().count(), 0);
    }
}
