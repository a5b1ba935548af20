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

//! The connection form: user-entered parameters, held separately from the
//! session state so that edits never race with an in-flight lifecycle
//! operation.

use crate::constants::{DEFAULT_MODE, DEFAULT_RESOLUTION, DEFAULT_UID};
use crate::error::ClientError;
use std::cell::RefCell;
use std::rc::Rc;

/// User-entered connection parameters.
///
/// `codec`, `camera` and `mic` start empty and are filled from the
/// [`MediaCatalog`](crate::MediaCatalog) options once those are loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionForm {
    pub app_id: String,
    pub channel: String,
    pub token: String,
    pub uid: u32,
    pub mode: String,
    pub codec: String,
    pub camera: String,
    pub mic: String,
    pub resolution: String,
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            channel: String::new(),
            token: String::new(),
            uid: DEFAULT_UID,
            mode: DEFAULT_MODE.to_string(),
            codec: String::new(),
            camera: String::new(),
            mic: String::new(),
            resolution: DEFAULT_RESOLUTION.to_string(),
        }
    }
}

impl ConnectionForm {
    /// Checks that every text field is filled in, reporting the first empty
    /// one in field order.  The numeric uid cannot be empty; 0 means the
    /// server assigns one.
    pub fn validate(&self) -> Result<(), ClientError> {
        let fields: [(&'static str, &str); 8] = [
            ("app_id", &self.app_id),
            ("channel", &self.channel),
            ("token", &self.token),
            ("mode", &self.mode),
            ("codec", &self.codec),
            ("camera", &self.camera),
            ("mic", &self.mic),
            ("resolution", &self.resolution),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ClientError::Validation { field });
            }
        }
        Ok(())
    }
}

/// Cloneable handle to the single page-wide form record.
#[derive(Clone, Debug, Default)]
pub struct FormStore {
    form: Rc<RefCell<ConnectionForm>>,
}

impl FormStore {
    pub fn new(form: ConnectionForm) -> Self {
        Self {
            form: Rc::new(RefCell::new(form)),
        }
    }

    /// A copy of the current parameters, detached from later edits.
    pub fn snapshot(&self) -> ConnectionForm {
        self.form.borrow().clone()
    }

    /// Applies an edit against the latest record.
    pub fn update(&self, apply: impl FnOnce(&mut ConnectionForm)) {
        apply(&mut self.form.borrow_mut());
    }

    /// The participant id, server-assigned after a successful join.
    pub fn uid(&self) -> u32 {
        self.form.borrow().uid
    }

    pub fn set_uid(&self, uid: u32) {
        self.form.borrow_mut().uid = uid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ConnectionForm {
        ConnectionForm {
            app_id: "app".to_string(),
            channel: "chan".to_string(),
            token: "tok".to_string(),
            uid: 0,
            mode: "rtc".to_string(),
            codec: "vp8".to_string(),
            camera: "cam1".to_string(),
            mic: "mic1".to_string(),
            resolution: "480p".to_string(),
        }
    }

    #[test]
    fn default_form_has_mode_and_resolution_preselected() {
        let form = ConnectionForm::default();
        assert_eq!(form.mode, "live");
        assert_eq!(form.resolution, "default");
        assert_eq!(form.uid, 0);
        assert!(form.codec.is_empty());
    }

    #[test]
    fn filled_form_validates() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn validation_reports_the_first_empty_field_in_order() {
        let mut form = filled_form();
        form.channel.clear();
        form.mic.clear();
        assert_eq!(
            form.validate(),
            Err(crate::ClientError::Validation { field: "channel" })
        );

        form.channel = "chan".to_string();
        assert_eq!(
            form.validate(),
            Err(crate::ClientError::Validation { field: "mic" })
        );
    }

    #[test]
    fn uid_zero_is_not_an_empty_field() {
        let mut form = filled_form();
        form.uid = 0;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn store_snapshot_is_detached_from_later_edits() {
        let store = FormStore::new(filled_form());
        let snapshot = store.snapshot();
        store.update(|f| f.channel = "other".to_string());
        assert_eq!(snapshot.channel, "chan");
        assert_eq!(store.snapshot().channel, "other");
    }

    #[test]
    fn set_uid_writes_back_the_assigned_id() {
        let store = FormStore::new(filled_form());
        store.set_uid(42);
        assert_eq!(store.uid(), 42);
    }
}
