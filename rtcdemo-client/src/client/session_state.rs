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

//! The session record and the store that guards it.
//!
//! Every mutation goes through [`SessionStore::update`], which hands the
//! closure the latest record at the moment it is applied.  Lifecycle
//! operations and session-notification handlers both mutate through this
//! path, so updates issued around suspension points never clobber each
//! other with stale snapshots.

use crate::sdk::{RtcClient, RtcStream};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// The current connection/session record.  One per page, all-empty at load.
#[derive(Clone, Default)]
pub struct SessionRecord {
    /// Present iff a join has completed.
    pub client: Option<Rc<dyn RtcClient>>,

    /// Present iff local capture has been initialized.
    pub local_stream: Option<Rc<dyn RtcStream>>,

    /// Currently subscribed remote streams, in subscription order.  Each
    /// stream id appears at most once.
    pub remote_streams: Vec<Rc<dyn RtcStream>>,

    /// True while a lifecycle operation is in flight.
    pub loading: bool,

    /// True iff a session is currently active.
    pub joined: bool,

    /// True iff the local stream is being sent to remote participants.
    pub published: bool,
}

/// Cloneable handle to the single page-wide session record.
#[derive(Clone, Default)]
pub struct SessionStore {
    record: Rc<RefCell<SessionRecord>>,
}

impl SessionStore {
    /// Applies a mutation against the latest record.
    pub fn update(&self, apply: impl FnOnce(&mut SessionRecord)) {
        apply(&mut self.record.borrow_mut());
    }

    /// Reads from the latest record.
    pub fn read<R>(&self, read: impl FnOnce(&SessionRecord) -> R) -> R {
        read(&self.record.borrow())
    }

    /// Returns the record to its page-load defaults.
    pub fn reset(&self) {
        *self.record.borrow_mut() = SessionRecord::default();
    }

    pub fn client(&self) -> Option<Rc<dyn RtcClient>> {
        self.record.borrow().client.clone()
    }

    pub fn local_stream(&self) -> Option<Rc<dyn RtcStream>> {
        self.record.borrow().local_stream.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.record.borrow().loading
    }

    pub fn is_joined(&self) -> bool {
        self.record.borrow().joined
    }

    pub fn is_published(&self) -> bool {
        self.record.borrow().published
    }

    /// Ids of the subscribed remote streams, in subscription order.
    pub fn remote_stream_ids(&self) -> Vec<u32> {
        self.record
            .borrow()
            .remote_streams
            .iter()
            .map(|stream| stream.id())
            .collect()
    }

    /// Adds a remote stream unless one with the same id is already present.
    /// Returns whether the stream was inserted.
    pub fn add_remote(&self, stream: Rc<dyn RtcStream>) -> bool {
        let mut record = self.record.borrow_mut();
        let id = stream.id();
        if record.remote_streams.iter().any(|s| s.id() == id) {
            debug!("dropping duplicate remote stream {id}");
            return false;
        }
        record.remote_streams.push(stream);
        true
    }

    /// Removes and returns the remote stream with the given id, so the
    /// caller can stop its playback.
    pub fn take_remote(&self, uid: u32) -> Option<Rc<dyn RtcStream>> {
        let mut record = self.record.borrow_mut();
        let index = record.remote_streams.iter().position(|s| s.id() == uid)?;
        Some(record.remote_streams.remove(index))
    }
}
