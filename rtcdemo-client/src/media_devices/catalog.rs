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

//! Queries the engine once at startup for the available capture devices and
//! supported codecs, and normalizes them into the display/value pairs the
//! form selectors are built from.

use crate::constants::{MODES, RESOLUTIONS};
use crate::error::ClientError;
use crate::sdk::{settle, RtcEngine};
use futures::future::try_join;
use log::debug;
use rtcdemo_types::{DeviceKind, SelectOption};
use std::rc::Rc;

/// Lists capture devices, partitioned into (cameras, mics).
///
/// Devices the runtime left unlabeled get a kind-prefixed index over the
/// full enumeration.
pub async fn list_devices(
    engine: &Rc<dyn RtcEngine>,
) -> Result<(Vec<SelectOption>, Vec<SelectOption>), ClientError> {
    let devices = settle(|done, fail| engine.enumerate_devices(done, fail))
        .await
        .map_err(|e| ClientError::sdk("get devices", e))?;

    let mut cameras = Vec::new();
    let mut mics = Vec::new();
    for (idx, device) in devices.iter().enumerate() {
        let (list, prefix) = match device.kind {
            DeviceKind::VideoInput => (&mut cameras, "camera-"),
            DeviceKind::AudioInput => (&mut mics, "mic-"),
            DeviceKind::Other => continue,
        };
        let name = if device.label.is_empty() {
            format!("{prefix}{idx}")
        } else {
            device.label.clone()
        };
        list.push(SelectOption::new(name, device.effective_id()));
    }
    Ok((cameras, mics))
}

/// Lists supported video codecs, names normalized to lower case.
pub async fn list_codecs(engine: &Rc<dyn RtcEngine>) -> Result<Vec<SelectOption>, ClientError> {
    let codecs = settle(|done, fail| engine.supported_codecs(done, fail))
        .await
        .map_err(|e| ClientError::sdk("get codecs", e))?;

    Ok(codecs
        .into_iter()
        .map(|codec| {
            let codec = codec.to_lowercase();
            SelectOption::new(codec.clone(), codec)
        })
        .collect())
}

/// The selectable options the form is rendered from.
///
/// Modes and resolutions are fixed; cameras, mics and codecs are populated
/// by [`load()`](Self::load), which must run exactly once at startup.  If
/// loading fails those lists stay empty and the page remains usable --
/// a join attempt will then fail validation on the empty codec field.
pub struct MediaCatalog {
    pub modes: Vec<SelectOption>,
    pub codecs: Vec<SelectOption>,
    pub cameras: Vec<SelectOption>,
    pub mics: Vec<SelectOption>,
    pub resolutions: Vec<SelectOption>,
}

impl Default for MediaCatalog {
    fn default() -> Self {
        Self {
            modes: MODES.iter().map(|m| SelectOption::new(*m, *m)).collect(),
            codecs: Vec::new(),
            cameras: Vec::new(),
            mics: Vec::new(),
            resolutions: RESOLUTIONS
                .iter()
                .map(|r| SelectOption::new(*r, *r))
                .collect(),
        }
    }
}

impl MediaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queries devices and codecs concurrently and fills in the option
    /// lists.  Either query failing surfaces as the single returned error.
    pub async fn load(&mut self, engine: &Rc<dyn RtcEngine>) -> anyhow::Result<()> {
        let ((cameras, mics), codecs) =
            try_join(list_devices(engine), list_codecs(engine)).await?;
        debug!(
            "catalog loaded: {} cameras, {} mics, {} codecs",
            cameras.len(),
            mics.len(),
            codecs.len()
        );
        self.cameras = cameras;
        self.mics = mics;
        self.codecs = codecs;
        Ok(())
    }

    /// The first supported codec, the startup default for the form.
    pub fn default_codec(&self) -> Option<&str> {
        self.codecs.first().map(|codec| codec.value.as_str())
    }
}
