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

//! Capture-device descriptors and the display/value pairs the form
//! selectors are built from.

use serde::{Deserialize, Serialize};

/// Kind of a capture device, as reported by device enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    AudioInput,
    VideoInput,
    Other,
}

/// A capture device as reported by the engine.
///
/// `label` may be empty when the runtime withholds device names (e.g. before
/// capture permission is granted); consumers are expected to synthesize one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_id: String,
    pub group_id: String,
    pub kind: DeviceKind,
    pub label: String,
}

impl DeviceInfo {
    /// The identifier to select the device by; some runtimes leave
    /// `device_id` empty and only populate the group.
    pub fn effective_id(&self) -> &str {
        if self.device_id.is_empty() {
            &self.group_id
        } else {
            &self.device_id
        }
    }
}

/// A (display name, underlying value) pair for a form selector entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_id_prefers_device_id() {
        let device = DeviceInfo {
            device_id: "cam1".to_string(),
            group_id: "grp1".to_string(),
            kind: DeviceKind::VideoInput,
            label: "Front camera".to_string(),
        };
        assert_eq!(device.effective_id(), "cam1");
    }

    #[test]
    fn effective_id_falls_back_to_group_id() {
        let device = DeviceInfo {
            device_id: String::new(),
            group_id: "grp1".to_string(),
            kind: DeviceKind::AudioInput,
            label: String::new(),
        };
        assert_eq!(device.effective_id(), "grp1");
    }

    #[test]
    fn device_kind_displays_as_enumeration_strings() {
        assert_eq!(DeviceKind::AudioInput.to_string(), "audioinput");
        assert_eq!(DeviceKind::VideoInput.to_string(), "videoinput");
        assert_eq!(DeviceKind::Other.to_string(), "other");
    }
}
