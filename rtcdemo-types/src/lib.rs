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

//! Framework-agnostic types shared between the rtcdemo client library and
//! whatever frontend consumes it.

pub mod callback;
pub mod device;

pub use callback::Callback;
pub use device::{DeviceInfo, DeviceKind, SelectOption};

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DeviceKind::AudioInput => write!(f, "audioinput"),
            DeviceKind::VideoInput => write!(f, "videoinput"),
            DeviceKind::Other => write!(f, "other"),
        }
    }
}
