// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for balance normalization
//!
//! The only tunable behavior is what happens when an entry fails to convert.
//! The default rejects the whole call, so a malformed snapshot never produces
//! partial output.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use balance_normalizer::{InvalidEntryPolicy, NormalizerConfig};
//!
//! let config = NormalizerConfig::default();
//! assert_eq!(config.invalid_entry_policy, InvalidEntryPolicy::Reject);
//! ```
//!
//! # Example: Tolerating bad entries
//!
//! ```rust
//! use balance_normalizer::{InvalidEntryPolicy, NormalizerConfigBuilder};
//!
//! let config = NormalizerConfigBuilder::new()
//!     .invalid_entry_policy(InvalidEntryPolicy::SkipAndWarn)
//!     .build();
//! assert!(config.skips_invalid_entries());
//! ```

pub mod constants;

/// What a conversion does with an entry whose fields fail to convert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidEntryPolicy {
    /// Abort the whole call with the first error; no output is produced
    #[default]
    Reject,
    /// Drop the entry, log it at `warn` level, and keep converting the rest
    SkipAndWarn,
}

/// Configuration for [`crate::BalanceNormalizer`]
///
/// Use [`NormalizerConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Default)]
pub struct NormalizerConfig {
    /// Handling of entries with malformed or missing fields
    /// Default: [`InvalidEntryPolicy::Reject`]
    pub invalid_entry_policy: InvalidEntryPolicy,
}

impl NormalizerConfig {
    /// Create the strict, fail-fast configuration
    pub fn strict() -> Self {
        Self {
            invalid_entry_policy: InvalidEntryPolicy::Reject,
        }
    }

    /// Create a configuration that skips invalid entries
    pub fn lenient() -> Self {
        Self {
            invalid_entry_policy: InvalidEntryPolicy::SkipAndWarn,
        }
    }

    /// Whether invalid entries are dropped instead of failing the call
    pub fn skips_invalid_entries(&self) -> bool {
        self.invalid_entry_policy == InvalidEntryPolicy::SkipAndWarn
    }
}

/// Builder for [`NormalizerConfig`]
///
/// # Example
///
/// ```rust
/// use balance_normalizer::{InvalidEntryPolicy, NormalizerConfigBuilder};
///
/// let config = NormalizerConfigBuilder::new()
///     .invalid_entry_policy(InvalidEntryPolicy::Reject)
///     .build();
/// assert!(!config.skips_invalid_entries());
/// ```
pub struct NormalizerConfigBuilder {
    config: NormalizerConfig,
}

impl Default for NormalizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerConfigBuilder {
    /// Create a new builder starting from [`NormalizerConfig::default`]
    pub fn new() -> Self {
        Self {
            config: NormalizerConfig::default(),
        }
    }

    /// Set the policy for entries that fail to convert
    pub fn invalid_entry_policy(mut self, policy: InvalidEntryPolicy) -> Self {
        self.config.invalid_entry_policy = policy;
        self
    }

    /// Build the configuration
    pub fn build(self) -> NormalizerConfig {
        self.config
    }
}
