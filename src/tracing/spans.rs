// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for balance conversions.
//!
//! Telemetry is kept out of the conversion code: each instrumented operation
//! has a matching span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_conversion(raw: &Input) -> Result<Output, ConversionError> {
//!     let span = spans::my_conversion(raw.len());
//!     let _guard = span.enter();
//!     // Conversion logic here
//! }
//! ```

use tracing::Span;

/// Create span for converting ETH + token account balances.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn convert_account_balances(entries: usize) -> Span {
    tracing::debug_span!(
        "balance_normalizer.convert_account_balances",
        entries = entries,
    )
}

/// Create span for converting per-account simple balances.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn convert_simple_balances(entries: usize) -> Span {
    tracing::debug_span!(
        "balance_normalizer.convert_simple_balances",
        entries = entries,
    )
}

/// Create span for converting aggregate asset balances.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn convert_asset_balances(entries: usize) -> Span {
    tracing::debug_span!(
        "balance_normalizer.convert_asset_balances",
        entries = entries,
    )
}

/// Create span for decoding a JSON payload into one of the raw shapes.
#[inline]
pub(crate) fn decode_payload(shape: &'static str, bytes: usize) -> Span {
    tracing::trace_span!("balance_normalizer.decode_payload", shape = shape, bytes = bytes)
}
