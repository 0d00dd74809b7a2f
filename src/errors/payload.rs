// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding raw balance payloads.

/// Errors that can occur while decoding a JSON balance payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload is not valid JSON for the expected balance shape.
    ///
    /// This includes numeric fields sent as JSON numbers instead of strings.
    #[error("Failed to decode {shape} payload: {source}")]
    Decode {
        /// Name of the payload shape being decoded
        shape: &'static str,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    /// Create a `Decode` error for the given payload shape.
    pub fn decode(shape: &'static str, source: serde_json::Error) -> Self {
        PayloadError::Decode { shape, source }
    }
}
