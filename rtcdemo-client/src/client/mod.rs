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

mod channel_client;
mod session_state;

pub use channel_client::{ChannelClient, ChannelClientOptions};
pub use session_state::{SessionRecord, SessionStore};
