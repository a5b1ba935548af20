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

//! The session lifecycle controller.
//!
//! [`ChannelClient`] drives join, leave, publish and unpublish against the
//! vendor client, validates preconditions, and maps the SDK's asynchronous
//! session notifications onto the session record.  Every failure is caught
//! here and surfaced as a single user-visible [`SessionEvent`]; nothing
//! propagates to the caller for programmatic recovery, and nothing is
//! retried automatically.

use super::session_state::{SessionRecord, SessionStore};
use crate::error::ClientError;
use crate::events::SessionEvent;
use crate::form::{ConnectionForm, FormStore};
use crate::sdk::{
    settle, settle_on_return, ClientConfig, RtcEngine, SessionNotification, StreamConfig,
};
use log::{debug, error};
use rtcdemo_types::Callback;
use std::rc::Rc;

const MSG_BUSY: &str = "Another operation is in progress";
const MSG_ALREADY_JOINED: &str = "Already joined";
const MSG_JOIN_FIRST: &str = "Please join channel first";
const MSG_NOT_IN_CHANNEL: &str = "You are not in channel";
const MSG_ALREADY_PUBLISHED: &str = "Published already";
const MSG_NOT_PUBLISHED: &str = "Haven't published";

/// Options struct for constructing a client via
/// [ChannelClient::new(options)][ChannelClient::new].
pub struct ChannelClientOptions {
    /// The vendor SDK entry point.
    pub engine: Rc<dyn RtcEngine>,

    /// The connection form the controller reads parameters from; the
    /// server-assigned uid is written back here after a join.
    pub form: FormStore,

    /// DOM id of the container the local stream plays into.
    pub local_container_id: String,

    /// Remote streams play into `{prefix}{stream_id}` containers.
    pub remote_container_prefix: String,

    /// Callback will be called as `callback(event)` for every
    /// [`SessionEvent`]; this is the only channel errors surface through.
    pub on_event: Callback<SessionEvent>,
}

/// The session lifecycle controller for one channel connection.
///
/// Construct with [new(options)][Self::new], then drive it with
/// [join()][Self::join], [publish()][Self::publish],
/// [unpublish()][Self::unpublish] and [leave()][Self::leave].  The four
/// operations are serialized through the `loading` guard: while one is in
/// flight, the others are no-ops with a notice.
pub struct ChannelClient {
    options: ChannelClientOptions,
    store: SessionStore,
}

impl ChannelClient {
    pub fn new(options: ChannelClientOptions) -> Self {
        Self {
            options,
            store: SessionStore::default(),
        }
    }

    /// Returns `true` while a lifecycle operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Returns `true` iff a session is currently active.
    pub fn is_joined(&self) -> bool {
        self.store.is_joined()
    }

    /// Returns `true` iff the local stream is being sent to remote
    /// participants.
    pub fn is_published(&self) -> bool {
        self.store.is_published()
    }

    /// Ids of the subscribed remote streams, in subscription order.
    pub fn remote_stream_ids(&self) -> Vec<u32> {
        self.store.remote_stream_ids()
    }

    /// A snapshot of the whole session record, for view rendering.
    pub fn session(&self) -> SessionRecord {
        self.store.read(|record| record.clone())
    }

    /// Joins the channel described by the form.
    ///
    /// Validates the form first; any failure along the way aborts the whole
    /// sequence without committing anything (all-or-nothing).  On success
    /// the assigned participant id is written back into the form and
    /// [`SessionEvent::Joined`] fires.
    pub async fn join(&self) {
        if self.store.is_loading() {
            self.notice(MSG_BUSY);
            return;
        }
        if self.store.is_joined() {
            self.notice(MSG_ALREADY_JOINED);
            return;
        }
        let params = self.options.form.snapshot();
        if let Err(err) = params.validate() {
            self.report(err);
            return;
        }

        self.store.update(|record| record.loading = true);
        match self.try_join(&params).await {
            Ok(uid) => {
                debug!("join succ, uid={uid}");
                self.options.on_event.emit(SessionEvent::Joined { uid });
            }
            Err(err) => {
                self.store.update(|record| record.loading = false);
                self.report(err);
            }
        }
    }

    async fn try_join(&self, params: &ConnectionForm) -> Result<u32, ClientError> {
        let client = self.options.engine.create_client(ClientConfig {
            mode: params.mode.clone(),
            codec: params.codec.clone(),
        });

        settle(|done, fail| client.init(&params.app_id, done, fail))
            .await
            .map_err(|e| ClientError::sdk("init client", e))?;
        debug!("init client succ");

        let uid = settle(|done, fail| {
            client.join(&params.token, &params.channel, params.uid, done, fail)
        })
        .await
        .map_err(|e| ClientError::sdk("join channel", e))?;
        debug!("join channel succ, assigned uid {uid}");

        let local_stream = self.options.engine.create_stream(StreamConfig {
            stream_id: uid,
            audio: true,
            video: true,
            screen: false,
            microphone_id: params.mic.clone(),
            camera_id: params.camera.clone(),
            resolution: params.resolution.clone(),
        });
        settle(|done, fail| local_stream.init(done, fail))
            .await
            .map_err(|e| ClientError::sdk("init local stream", e))?;
        debug!("init local stream succ");

        client.set_notification_handler(self.notification_handler());

        // All-or-nothing commit point.
        self.options.form.set_uid(uid);
        self.store.update(|record| {
            record.client = Some(Rc::clone(&client));
            record.local_stream = Some(Rc::clone(&local_stream));
            record.joined = true;
            record.loading = false;
        });
        local_stream.play(&self.options.local_container_id);
        Ok(uid)
    }

    /// Leaves the session and resets the record to its defaults.
    ///
    /// If the leave request itself fails, only `loading` is reset; the
    /// stale-but-consistent joined state stays for the user to retry.
    pub async fn leave(&self) {
        if self.store.is_loading() {
            self.notice(MSG_BUSY);
            return;
        }
        let Some(client) = self.store.client() else {
            self.notice(MSG_JOIN_FIRST);
            return;
        };
        if !self.store.is_joined() {
            self.notice(MSG_NOT_IN_CHANNEL);
            return;
        }

        self.store.update(|record| record.loading = true);
        match settle(|done, fail| client.leave(done, fail)).await {
            Ok(()) => {
                if let Some(local) = self.store.local_stream() {
                    if local.is_playing() {
                        local.stop();
                    }
                    local.close();
                }
                // Remote handles are only stopped; their teardown belongs to
                // the SDK.
                for remote in self.store.read(|record| record.remote_streams.clone()) {
                    if remote.is_playing() {
                        remote.stop();
                    }
                }
                self.store.reset();
                debug!("leave succ");
                self.options.on_event.emit(SessionEvent::Left);
            }
            Err(err) => {
                self.store.update(|record| record.loading = false);
                self.report(ClientError::sdk("leave", err));
            }
        }
    }

    /// Starts sending the local stream.
    ///
    /// The request returns immediately; `published` flips when the
    /// [`SessionNotification::StreamPublished`] notification lands, and
    /// `loading` stays true until then.
    pub async fn publish(&self) {
        if self.store.is_loading() {
            self.notice(MSG_BUSY);
            return;
        }
        let Some(client) = self.store.client() else {
            self.notice(MSG_JOIN_FIRST);
            return;
        };
        if self.store.is_published() {
            self.notice(MSG_ALREADY_PUBLISHED);
            return;
        }
        let Some(local_stream) = self.store.local_stream() else {
            self.notice(MSG_JOIN_FIRST);
            return;
        };

        self.store.update(|record| record.loading = true);
        match settle_on_return(|fail| client.publish(local_stream, fail)).await {
            Ok(()) => debug!("publish requested"),
            Err(err) => {
                self.store.update(|record| record.loading = false);
                self.report(ClientError::sdk("publish", err));
            }
        }
    }

    /// Stops sending the local stream.
    ///
    /// Settles optimistically on the request's return; the
    /// [`SessionNotification::StreamUnpublished`] notification is kept as an
    /// idempotent reconciliation path.
    pub async fn unpublish(&self) {
        if self.store.is_loading() {
            self.notice(MSG_BUSY);
            return;
        }
        let Some(client) = self.store.client() else {
            self.notice(MSG_JOIN_FIRST);
            return;
        };
        if !self.store.is_published() {
            self.notice(MSG_NOT_PUBLISHED);
            return;
        }
        let Some(local_stream) = self.store.local_stream() else {
            self.notice(MSG_JOIN_FIRST);
            return;
        };

        self.store.update(|record| record.loading = true);
        match settle_on_return(|fail| client.unpublish(local_stream, fail)).await {
            Ok(()) => {
                self.store.update(|record| {
                    record.published = false;
                    record.loading = false;
                });
                debug!("unpublish succ");
                self.options.on_event.emit(SessionEvent::Unpublished);
            }
            Err(err) => {
                self.store.update(|record| record.loading = false);
                self.report(ClientError::sdk("unpublish", err));
            }
        }
    }

    /// Builds the handler the vendor client delivers session notifications
    /// to.  The handler mutates state through the same store as the
    /// lifecycle operations, against the latest record at delivery time.
    fn notification_handler(&self) -> Rc<dyn Fn(SessionNotification)> {
        let store = self.store.clone();
        let form = self.options.form.clone();
        let on_event = self.options.on_event.clone();
        let prefix = self.options.remote_container_prefix.clone();

        Rc::new(move |notification| {
            debug!("<< {notification:?}");
            match notification {
                SessionNotification::Error(reason) => {
                    error!("session error: {reason}");
                    store.update(|record| record.loading = false);
                    on_event.emit(SessionEvent::Error(reason));
                }
                SessionNotification::StreamPublished => {
                    let was_published = store.is_published();
                    store.update(|record| {
                        record.published = true;
                        record.loading = false;
                    });
                    if !was_published {
                        on_event.emit(SessionEvent::Published);
                    }
                }
                SessionNotification::StreamUnpublished => {
                    let was_published = store.is_published();
                    store.update(|record| {
                        record.published = false;
                        record.loading = false;
                    });
                    if was_published {
                        on_event.emit(SessionEvent::Unpublished);
                    }
                }
                SessionNotification::StreamAdded { stream } => {
                    let uid = stream.id();
                    if uid == form.uid() {
                        // Echo of our own publication.
                        debug!("ignoring own stream {uid}");
                        return;
                    }
                    if let Some(client) = store.client() {
                        debug!("subscribing to remote stream {uid}");
                        client.subscribe(stream);
                    }
                }
                SessionNotification::StreamSubscribed { stream } => {
                    let uid = stream.id();
                    if store.add_remote(Rc::clone(&stream)) {
                        stream.play(&format!("{prefix}{uid}"));
                        on_event.emit(SessionEvent::RemoteStreamAdded(uid));
                    }
                }
                SessionNotification::StreamRemoved { stream } => {
                    Self::drop_remote(&store, &on_event, stream.id());
                }
                SessionNotification::PeerLeave { uid } => {
                    Self::drop_remote(&store, &on_event, uid);
                }
            }
        })
    }

    fn drop_remote(store: &SessionStore, on_event: &Callback<SessionEvent>, uid: u32) {
        if let Some(stream) = store.take_remote(uid) {
            if stream.is_playing() {
                stream.stop();
            }
            on_event.emit(SessionEvent::RemoteStreamRemoved(uid));
        }
    }

    fn notice(&self, message: &'static str) {
        let err = ClientError::Precondition(message);
        debug!("{err}");
        self.options.on_event.emit(SessionEvent::Notice(err.to_string()));
    }

    fn report(&self, err: ClientError) {
        error!("{err}");
        self.options.on_event.emit(SessionEvent::Error(err.to_string()));
    }
}
