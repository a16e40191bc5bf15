//! Typed view of the NTS live and mixtape API documents.
//!
//! The wire structs (`Raw*`) mirror the JSON; the public types keep only the
//! fields the client displays.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One API call worth of live data: one entry per broadcast channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BroadcastDocument {
    #[serde(rename = "results", default)]
    pub channels: Vec<ChannelState>,
}

/// The show on air plus the upcoming slots, in upstream order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawChannel")]
pub struct ChannelState {
    pub current: BroadcastSlot,
    pub upcoming: Vec<BroadcastSlot>,
}

/// A single scheduled programme. Timestamps are kept as delivered and parsed
/// on demand by the schedule formatter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSlot")]
pub struct BroadcastSlot {
    pub title: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub details: Option<SlotDetails>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotDetails {
    pub description: String,
    pub genres: Vec<String>,
    pub location: Option<String>,
    pub art_url: Option<String>,
}

impl BroadcastSlot {
    pub fn art_url(&self) -> Option<&str> {
        self.details.as_ref()?.art_url.as_deref()
    }
}

/// A perpetual "infinite mixtape" stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMixtape")]
pub struct MixtapeEntry {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub alias: String,
    pub stream_url: String,
    pub credits: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MixtapeCatalog {
    #[serde(default)]
    pub results: Vec<MixtapeEntry>,
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawChannel {
    now: BroadcastSlot,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawSlot {
    broadcast_title: String,
    start_timestamp: String,
    end_timestamp: String,
    #[serde(default)]
    embeds: Option<RawEmbeds>,
}

#[derive(Deserialize)]
struct RawEmbeds {
    #[serde(default)]
    details: Option<RawDetails>,
}

#[derive(Deserialize)]
struct RawDetails {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    genres: Option<Vec<RawValue>>,
    #[serde(default)]
    location_long: Option<String>,
    #[serde(default)]
    media: Option<RawMedia>,
}

#[derive(Deserialize)]
struct RawValue {
    #[serde(default)]
    value: Option<String>,
}

#[derive(Deserialize)]
struct RawMedia {
    #[serde(default)]
    background_small: Option<String>,
}

#[derive(Deserialize)]
struct RawMixtape {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    mixtape_alias: Option<String>,
    #[serde(default)]
    audio_stream_endpoint: Option<String>,
    #[serde(default)]
    credits: Option<Vec<RawCredit>>,
}

#[derive(Deserialize)]
struct RawCredit {
    #[serde(default)]
    name: Option<String>,
}

/// `next` counts as slot 1; `next1`, `next2`, … carry their own index.
fn upcoming_index(key: &str) -> Option<u32> {
    let suffix = key.strip_prefix("next")?;
    if suffix.is_empty() {
        return Some(1);
    }
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl TryFrom<RawChannel> for ChannelState {
    type Error = serde_json::Error;

    fn try_from(raw: RawChannel) -> Result<Self, Self::Error> {
        let mut numbered: Vec<(u32, Value)> = raw
            .rest
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .filter_map(|(key, value)| upcoming_index(&key).map(|idx| (idx, value)))
            .collect();
        numbered.sort_by_key(|(idx, _)| *idx);

        let upcoming = numbered
            .into_iter()
            .map(|(_, value)| serde_json::from_value(value))
            .collect::<Result<Vec<BroadcastSlot>, _>>()?;

        Ok(Self {
            current: raw.now,
            upcoming,
        })
    }
}

impl From<RawSlot> for BroadcastSlot {
    fn from(raw: RawSlot) -> Self {
        let details = raw.embeds.and_then(|e| e.details).map(|d| SlotDetails {
            description: d.description.unwrap_or_default().trim().to_string(),
            genres: d
                .genres
                .unwrap_or_default()
                .into_iter()
                .filter_map(|g| non_empty(g.value))
                .collect(),
            location: non_empty(d.location_long),
            art_url: non_empty(d.media.and_then(|m| m.background_small)),
        });
        Self {
            title: raw.broadcast_title,
            start_timestamp: raw.start_timestamp,
            end_timestamp: raw.end_timestamp,
            details,
        }
    }
}

impl From<RawMixtape> for MixtapeEntry {
    fn from(raw: RawMixtape) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            subtitle: raw.subtitle.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            alias: raw.mixtape_alias.unwrap_or_default(),
            stream_url: raw.audio_stream_endpoint.unwrap_or_default(),
            credits: raw
                .credits
                .unwrap_or_default()
                .into_iter()
                .filter_map(|c| non_empty(c.name))
                .collect(),
        }
    }
}
