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

//! Framework-agnostic event types for the channel client.
//!
//! These are emitted through the `on_event` callback and can be consumed by
//! any frontend framework to re-render.

/// Events emitted by the [`ChannelClient`](crate::ChannelClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    // === Lifecycle events ===
    /// A join completed; `uid` is the server-assigned participant id.
    Joined { uid: u32 },

    /// The session was left and the session record reset to defaults.
    Left,

    /// The local stream is now being sent to remote participants.
    Published,

    /// The local stream is no longer being sent.
    Unpublished,

    // === Remote participant events ===
    /// A remote stream was subscribed and is rendering.
    RemoteStreamAdded(u32),

    /// A remote stream went away and its tile was stopped.
    RemoteStreamRemoved(u32),

    // === Notifications ===
    /// An operation failed; the message is meant for the user.
    Error(String),

    /// An operation was a no-op because its preconditions were not met
    /// ("Already joined", "Published already", ...).
    Notice(String),
}
