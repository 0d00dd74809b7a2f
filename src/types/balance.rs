// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized balance types produced by the conversions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::decimal::PreciseDecimal;

/// An account's balance after normalization
///
/// The native amount and USD value are pulled out of the raw entry, and every
/// other field of the entry ends up in `secondary_holdings` keyed by its
/// asset symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAccountBalance {
    /// Holding in the chain's base unit (e.g. ETH)
    pub native_amount: PreciseDecimal,
    /// USD value of the whole account
    pub usd_value: PreciseDecimal,
    /// Token balances attached to the account, keyed by asset symbol
    pub secondary_holdings: HashMap<String, PreciseDecimal>,
}

impl NormalizedAccountBalance {
    /// Amount held of `symbol`, if the account holds it as a secondary asset
    pub fn holding(&self, symbol: &str) -> Option<&PreciseDecimal> {
        self.secondary_holdings.get(symbol)
    }

    /// Whether the account holds any secondary assets
    pub fn has_secondary_holdings(&self) -> bool {
        !self.secondary_holdings.is_empty()
    }
}

/// An amount together with its USD value
///
/// Used for both per-account simple balances and aggregate per-asset balances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSimpleBalance {
    /// Amount held
    pub amount: PreciseDecimal,
    /// USD value of the amount
    pub usd_value: PreciseDecimal,
}

/// Normalized ETH + token balances, keyed by account
pub type NormalizedAccountBalances = HashMap<String, NormalizedAccountBalance>;

/// Normalized simple balances, keyed by account
pub type NormalizedSimpleBalances = HashMap<String, NormalizedSimpleBalance>;

/// Normalized aggregate balances, keyed by asset symbol
pub type NormalizedAssetBalances = HashMap<String, NormalizedSimpleBalance>;
