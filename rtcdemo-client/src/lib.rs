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

//! Client-side session management for a vendor real-time-communication
//! channel.  The vendor SDK does all of the media heavy lifting (codecs,
//! transport, NAT traversal); this crate takes care of everything around it:
//! the connection form, the capture-device catalog, and the join / leave /
//! publish / unpublish lifecycle with its asynchronous session
//! notifications.
//!
//! This crate makes no assumptions about the UI.  The only DOM data it needs
//! is the id of the container the local stream plays into and a prefix for
//! the per-stream remote containers; everything else the UI learns through
//! the [`SessionEvent`] callback and the read-side getters on
//! [`ChannelClient`].
//!
//! # Outline of usage
//!
//! ## Startup: populate the selectable options
//! ```ignore
//! let mut catalog = MediaCatalog::new();
//! catalog.load(&engine).await?;   // devices and codecs, queried once
//!
//! let form = FormStore::new(ConnectionForm::default());
//! if let Some(codec) = catalog.default_codec() {
//!     form.update(|f| f.codec = codec.to_string());
//! }
//! ```
//!
//! ## Client creation and lifecycle
//! ```ignore
//! let client = ChannelClient::new(ChannelClientOptions {
//!     engine,
//!     form: form.clone(),
//!     local_container_id: ELEMENT_LOCAL_STREAM.to_string(),
//!     remote_container_prefix: ELEMENT_REMOTE_STREAM_PREFIX.to_string(),
//!     on_event: Callback::from(|event| { /* re-render */ }),
//! });
//!
//! client.join().await;
//! client.publish().await;
//! client.unpublish().await;
//! client.leave().await;
//! ```

mod client;
mod constants;
mod error;
mod events;
mod form;
mod media_devices;
mod sdk;

#[cfg(test)]
mod tests;

pub use client::{ChannelClient, ChannelClientOptions, SessionRecord, SessionStore};
pub use constants::{
    DEFAULT_MODE, DEFAULT_RESOLUTION, DEFAULT_UID, ELEMENT_LOCAL_STREAM,
    ELEMENT_REMOTE_STREAM_PREFIX, MODES, RESOLUTIONS,
};
pub use error::{ClientError, SdkError};
pub use events::SessionEvent;
pub use form::{ConnectionForm, FormStore};
pub use media_devices::{list_codecs, list_devices, MediaCatalog};
pub use rtcdemo_types::Callback;
pub use sdk::{
    settle, settle_on_return, ClientConfig, DoneCb, FailCb, RtcClient, RtcEngine, RtcStream,
    SessionNotification, StreamConfig,
};
