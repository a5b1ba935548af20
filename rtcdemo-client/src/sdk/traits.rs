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

//! The vendor SDK contract.
//!
//! Everything here mirrors what the vendor actually exposes: completion is
//! signaled through callbacks (`done`/`fail`), handles are reference-counted
//! and single-threaded, and session notifications arrive at any time between
//! join and leave.

use crate::error::SdkError;
use rtcdemo_types::DeviceInfo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Success continuation of a callback-style SDK operation.
pub type DoneCb<T> = Box<dyn FnOnce(T)>;

/// Failure continuation, carrying the vendor's error.
pub type FailCb = Box<dyn FnOnce(SdkError)>;

/// Settings for [`RtcEngine::create_client`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub mode: String,
    pub codec: String,
}

/// Settings for [`RtcEngine::create_stream`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    pub stream_id: u32,
    pub audio: bool,
    pub video: bool,
    pub screen: bool,
    pub microphone_id: String,
    pub camera_id: String,
    pub resolution: String,
}

/// Entry points of the vendor SDK that exist before any session does.
pub trait RtcEngine {
    /// Lists all capture devices known to the runtime.
    fn enumerate_devices(&self, done: DoneCb<Vec<DeviceInfo>>, fail: FailCb);

    /// Video codec names supported by the runtime.
    fn supported_codecs(&self, done: DoneCb<Vec<String>>, fail: FailCb);

    fn create_client(&self, config: ClientConfig) -> Rc<dyn RtcClient>;

    fn create_stream(&self, config: StreamConfig) -> Rc<dyn RtcStream>;
}

/// An external-session connection handle.
pub trait RtcClient {
    fn init(&self, app_id: &str, done: DoneCb<()>, fail: FailCb);

    /// Joins the channel; the success continuation receives the assigned
    /// participant id.
    fn join(&self, token: &str, channel: &str, uid: u32, done: DoneCb<u32>, fail: FailCb);

    /// Starts sending the stream.  Single-callback mode: success is implicit
    /// on return, completion is signaled by
    /// [`SessionNotification::StreamPublished`].
    fn publish(&self, stream: Rc<dyn RtcStream>, fail: FailCb);

    /// Stops sending the stream.  Single-callback mode, like
    /// [`publish`](Self::publish).
    fn unpublish(&self, stream: Rc<dyn RtcStream>, fail: FailCb);

    fn leave(&self, done: DoneCb<()>, fail: FailCb);

    /// Requests subscription to a remote stream; fire-and-forget, the result
    /// arrives as [`SessionNotification::StreamSubscribed`].
    fn subscribe(&self, stream: Rc<dyn RtcStream>);

    /// Binds the handler for asynchronous session notifications.  A later
    /// call replaces the previous handler.
    fn set_notification_handler(&self, handler: Rc<dyn Fn(SessionNotification)>);
}

/// A local or remote capture-stream handle.
pub trait RtcStream {
    fn id(&self) -> u32;

    fn init(&self, done: DoneCb<()>, fail: FailCb);

    /// Starts rendering into the DOM container with the given id.
    fn play(&self, container_id: &str);

    fn stop(&self);

    /// Releases the underlying capture; only ever called on local streams,
    /// remote teardown belongs to the SDK.
    fn close(&self);

    fn is_playing(&self) -> bool;
}

/// Asynchronous notifications the SDK delivers after a client is bound.
///
/// These are the only path by which `published` becomes true and by which
/// the remote stream set changes after join.
#[derive(Clone)]
pub enum SessionNotification {
    /// The session hit an error; the message is the vendor's.
    Error(String),

    /// The local stream is now reaching remote participants.
    StreamPublished,

    /// The local stream stopped reaching remote participants.
    StreamUnpublished,

    /// A remote participant published; subscribe to receive it.
    StreamAdded { stream: Rc<dyn RtcStream> },

    /// A previously requested subscription completed.
    StreamSubscribed { stream: Rc<dyn RtcStream> },

    /// A remote stream was withdrawn.
    StreamRemoved { stream: Rc<dyn RtcStream> },

    /// A remote participant left the channel entirely.
    PeerLeave { uid: u32 },
}

impl fmt::Debug for SessionNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(reason) => write!(f, "Error({reason:?})"),
            Self::StreamPublished => write!(f, "StreamPublished"),
            Self::StreamUnpublished => write!(f, "StreamUnpublished"),
            Self::StreamAdded { stream } => write!(f, "StreamAdded({})", stream.id()),
            Self::StreamSubscribed { stream } => write!(f, "StreamSubscribed({})", stream.id()),
            Self::StreamRemoved { stream } => write!(f, "StreamRemoved({})", stream.id()),
            Self::PeerLeave { uid } => write!(f, "PeerLeave({uid})"),
        }
    }
}
