/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the channel client.
//!
//! None of these reach the caller of a lifecycle operation directly; the
//! controller catches at its own boundary and surfaces a single user-visible
//! notification through [`SessionEvent`](crate::SessionEvent).

use thiserror::Error;

/// A failure reported by the vendor SDK's failure callback, carrying the
/// vendor's message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SdkError(pub String);

impl SdkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The SDK dropped both completion callbacks without invoking either.
    pub(crate) fn unsettled() -> Self {
        Self("operation dropped without settling".to_string())
    }
}

/// Errors produced by the client around the vendor SDK.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    /// A required connection parameter is empty.
    #[error("{field} should not be empty")]
    Validation { field: &'static str },

    /// An external call's failure callback fired.
    #[error("{context} failed: {source}")]
    Sdk {
        context: &'static str,
        source: SdkError,
    },

    /// An operation was invoked while its required state guard is not
    /// satisfied (e.g. unpublish without being published).
    #[error("{0}")]
    Precondition(&'static str),
}

impl ClientError {
    pub(crate) fn sdk(context: &'static str, source: SdkError) -> Self {
        Self::Sdk { context, source }
    }
}
