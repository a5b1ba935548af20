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

/// DOM id of the container the local stream plays into.
pub static ELEMENT_LOCAL_STREAM: &str = "local_stream";

/// Remote streams play into `{prefix}{stream_id}` containers.
pub static ELEMENT_REMOTE_STREAM_PREFIX: &str = "remote_stream_";

/// Channel modes offered by the vendor SDK.
pub const MODES: [&str; 2] = ["live", "rtc"];

/// Camera resolutions offered by the form.
pub const RESOLUTIONS: [&str; 4] = ["default", "480p", "720p", "1080p"];

pub const DEFAULT_MODE: &str = MODES[0];
pub const DEFAULT_RESOLUTION: &str = RESOLUTIONS[0];

/// Requested participant id; 0 asks the server to assign one.
pub const DEFAULT_UID: u32 = 0;
