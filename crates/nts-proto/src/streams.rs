//! Fixed live-stream URLs for the two NTS broadcast channels.

use crate::config::StreamsConfig;

pub const DEFAULT_CHANNEL_STREAMS: [&str; 2] = [
    "https://stream-relay-geo.ntslive.net/stream",
    "https://stream-relay-geo.ntslive.net/stream2",
];

/// Stream URL for a 1-based channel number.
pub fn stream_url(streams: &StreamsConfig, channel: u8) -> Option<&str> {
    let idx = usize::from(channel).checked_sub(1)?;
    streams.channel_urls.get(idx).map(String::as_str)
}
