// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reserved field names of the external balance payloads
//!
//! These are the protocol-specific keys that carry the native amount and
//! the USD value. Everything else in an account entry is a token holding.

/// Field carrying an account's native (base currency) amount
pub const NATIVE_AMOUNT_FIELD: &str = "ETH";

/// Field carrying the USD value of an entry
pub const USD_VALUE_FIELD: &str = "usd_value";

/// Field carrying the amount of a simple or asset balance entry
pub const AMOUNT_FIELD: &str = "amount";

/// Fields stripped from an account entry before collecting secondary holdings
pub const ACCOUNT_RESERVED_FIELDS: [&str; 2] = [NATIVE_AMOUNT_FIELD, USD_VALUE_FIELD];

/// Whether `field` is one of [`ACCOUNT_RESERVED_FIELDS`]
pub fn is_account_reserved(field: &str) -> bool {
    ACCOUNT_RESERVED_FIELDS.contains(&field)
}
