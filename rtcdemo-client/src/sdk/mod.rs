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

//! The boundary to the vendor real-time-communication SDK.
//!
//! The SDK is treated as an opaque collaborator: a fixed contract of
//! callback-based operations ([`RtcEngine`], [`RtcClient`], [`RtcStream`])
//! and asynchronous session notifications ([`SessionNotification`]).  The
//! [`adapter`] module bridges the callback style into ordinary awaiting so
//! the rest of the crate never sees a raw callback pair.

mod adapter;
mod traits;

pub use adapter::{settle, settle_on_return};
pub use traits::{
    ClientConfig, DoneCb, FailCb, RtcClient, RtcEngine, RtcStream, SessionNotification,
    StreamConfig,
};
