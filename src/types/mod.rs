// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for normalized balances.
//!
//! This module provides:
//! - [`PreciseDecimal`](decimal::PreciseDecimal), the arbitrary-precision amount used everywhere
//! - The normalized balance shapes returned by the conversions

pub mod balance;
pub mod decimal;

// Note: Public types are re-exported from lib.rs, not here
