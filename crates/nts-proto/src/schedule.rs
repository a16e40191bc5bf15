//! Schedule shaping: timestamps to local `HH:MM`, title clean-up and the
//! compact / full projections used by the `now` and `schedule` views.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::error::TimestampError;
use crate::model::{BroadcastSlot, ChannelState};

/// Appended to titles of shows that are not replays.
pub const LIVE_INDICATOR: &str = "🔴";

/// Upstream marks replays by putting this in the broadcast title.
pub const REPLAY_MARKER: &str = "(R)";

/// Upcoming slots shown in the compact (`now`) view.
pub const COMPACT_UPCOMING: usize = 5;

/// Longest entity name we try to decode, e.g. `&#x1F534;`.
const MAX_ENTITY_LEN: usize = 10;

// ── Time ─────────────────────────────────────────────────────────────────────

/// Parse an upstream timestamp. RFC 3339 (`…Z` or `…+01:00`) is the normal
/// case; a timestamp without any offset is taken to be UTC.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, TimestampError> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(source) => NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| TimestampError {
                value: timestamp.to_string(),
                source,
            }),
    }
}

/// `2024-03-14T15:30:00Z` → `"15:30"` in the process's local timezone.
pub fn format_instant(timestamp: &str) -> Result<String, TimestampError> {
    let local = parse_timestamp(timestamp)?.with_timezone(&Local);
    Ok(local.format("%H:%M").to_string())
}

/// `"HH:MM - HH:MM"`. The end is not checked against the start.
pub fn format_range(start: &str, end: &str) -> Result<String, TimestampError> {
    Ok(format!("{} - {}", format_instant(start)?, format_instant(end)?))
}

// ── Titles ───────────────────────────────────────────────────────────────────

/// Undo HTML entity escaping (`&amp;` → `&`, `&#39;` → `'`, …).
/// Unknown or malformed entities are kept as written.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let decoded = tail
            .find(';')
            .filter(|&end| end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&tail[1..end]).map(|ch| (ch, end)));
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

pub fn is_replay(decoded_title: &str) -> bool {
    decoded_title.contains(REPLAY_MARKER)
}

/// Decoded title, with the live indicator unless the show is a replay.
pub fn display_title(raw_title: &str) -> String {
    let title = decode_entities(raw_title);
    if is_replay(&title) {
        title
    } else {
        format!("{} {}", title, LIVE_INDICATOR)
    }
}

// ── Projection ───────────────────────────────────────────────────────────────

/// One display-ready schedule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub time_range: String,
    pub title: String,
    pub is_live: bool,
}

impl DisplayEntry {
    pub fn from_slot(slot: &BroadcastSlot) -> Result<Self, TimestampError> {
        Ok(Self {
            time_range: format_range(&slot.start_timestamp, &slot.end_timestamp)?,
            title: display_title(&slot.title),
            is_live: !is_replay(&decode_entities(&slot.title)),
        })
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_live {
            "LIVE"
        } else {
            "REPLAY"
        }
    }
}

/// Current show plus the first [`COMPACT_UPCOMING`] upcoming slots.
pub fn project_compact(channel: &ChannelState) -> Result<Vec<DisplayEntry>, TimestampError> {
    std::iter::once(&channel.current)
        .chain(channel.upcoming.iter().take(COMPACT_UPCOMING))
        .map(DisplayEntry::from_slot)
        .collect()
}

/// Current show (always tagged live) plus every upcoming slot.
pub fn project_full(channel: &ChannelState) -> Result<Vec<DisplayEntry>, TimestampError> {
    let mut current = DisplayEntry::from_slot(&channel.current)?;
    current.is_live = true;

    let mut entries = Vec::with_capacity(1 + channel.upcoming.len());
    entries.push(current);
    for slot in &channel.upcoming {
        entries.push(DisplayEntry::from_slot(slot)?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn slot(title: &str, start: &str, end: &str) -> BroadcastSlot {
        BroadcastSlot {
            title: title.to_string(),
            start_timestamp: start.to_string(),
            end_timestamp: end.to_string(),
            details: None,
        }
    }

    fn channel(upcoming: usize) -> ChannelState {
        ChannelState {
            current: slot("Breakfast", "2024-03-14T08:00:00Z", "2024-03-14T10:00:00Z"),
            upcoming: (0..upcoming)
                .map(|i| {
                    let title = if i % 2 == 0 {
                        format!("Show {i}")
                    } else {
                        format!("Show {i} (R)")
                    };
                    slot(&title, "2024-03-14T10:00:00Z", "2024-03-14T12:00:00Z")
                })
                .collect(),
        }
    }

    fn local_hm(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> String {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }

    #[test]
    fn format_instant_is_local_hh_mm() {
        let formatted = format_instant("2024-03-14T15:30:00Z").unwrap();
        assert_eq!(formatted.len(), 5);
        assert_eq!(formatted.matches(':').count(), 1);
        assert_eq!(formatted, local_hm(2024, 3, 14, 15, 30));
    }

    #[test]
    fn format_instant_accepts_offsets_and_naive_utc() {
        assert_eq!(
            format_instant("2024-03-14T16:30:00+01:00").unwrap(),
            local_hm(2024, 3, 14, 15, 30)
        );
        assert_eq!(
            format_instant("2024-03-14T15:30:00").unwrap(),
            local_hm(2024, 3, 14, 15, 30)
        );
        assert_eq!(
            format_instant("2024-03-14T15:30:00.250Z").unwrap(),
            local_hm(2024, 3, 14, 15, 30)
        );
    }

    #[test]
    fn format_instant_rejects_garbage() {
        let err = format_instant("yesterday at noon").unwrap_err();
        assert_eq!(err.value, "yesterday at noon");
        assert!(err.to_string().contains("invalid timestamp"));
    }

    #[test]
    fn format_range_has_two_halves() {
        let range = format_range("2024-03-14T15:00:00Z", "2024-03-14T17:00:00Z").unwrap();
        let halves: Vec<_> = range.split(" - ").collect();
        assert_eq!(halves.len(), 2);
        assert!(halves.iter().all(|h| h.len() == 5));
    }

    #[test]
    fn format_range_does_not_check_order() {
        assert!(format_range("2024-03-14T17:00:00Z", "2024-03-14T15:00:00Z").is_ok());
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entities("Drum &amp; Bass"), "Drum & Bass");
        assert_eq!(decode_entities("It&#39;s &quot;Live&quot;"), "It's \"Live\"");
        assert_eq!(decode_entities("&lt;3 &#x263A;"), "<3 ☺");
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn leaves_unknown_entities_alone() {
        assert_eq!(decode_entities("R&B"), "R&B");
        assert_eq!(decode_entities("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(
            decode_entities("Tom & Jerry; a long way"),
            "Tom & Jerry; a long way"
        );
    }

    #[test]
    fn display_title_marks_live_shows() {
        assert_eq!(display_title("Test Show"), "Test Show 🔴");
        assert_eq!(display_title("Rhythm &amp; Soul"), "Rhythm & Soul 🔴");
    }

    #[test]
    fn display_title_leaves_replays_unchanged() {
        assert_eq!(display_title("Night Moves (R)"), "Night Moves (R)");
        assert_eq!(display_title("A &amp; B (R)"), "A & B (R)");
    }

    #[test]
    fn replay_marker_is_literal() {
        assert!(!is_replay("Show (r)"));
        assert!(!is_replay("Show (Repeat)"));
        assert!(is_replay("(R) Show"));
    }

    #[test]
    fn compact_caps_upcoming_at_five() {
        assert_eq!(project_compact(&channel(0)).unwrap().len(), 1);
        assert_eq!(project_compact(&channel(3)).unwrap().len(), 4);
        assert_eq!(project_compact(&channel(17)).unwrap().len(), 6);
    }

    #[test]
    fn compact_classifies_each_entry() {
        let entries = project_compact(&channel(2)).unwrap();
        assert!(entries[0].is_live);
        assert_eq!(entries[1].title, "Show 0 🔴");
        assert!(entries[1].is_live);
        assert_eq!(entries[2].title, "Show 1 (R)");
        assert!(!entries[2].is_live);
    }

    #[test]
    fn full_keeps_every_upcoming_slot() {
        for n in [0, 1, 5, 6, 17] {
            assert_eq!(project_full(&channel(n)).unwrap().len(), 1 + n);
        }
    }

    #[test]
    fn full_tags_current_live_even_when_replayed() {
        let mut ch = channel(2);
        ch.current.title = "Repeat Broadcast (R)".to_string();
        let entries = project_full(&ch).unwrap();
        assert_eq!(entries[0].kind_label(), "LIVE");
        assert_eq!(entries[0].title, "Repeat Broadcast (R)");
        assert_eq!(entries[1].kind_label(), "LIVE");
        assert_eq!(entries[2].kind_label(), "REPLAY");
    }

    #[test]
    fn projections_preserve_upstream_order_and_duplicates() {
        let mut ch = channel(0);
        ch.upcoming = vec![
            slot("Late", "2024-03-14T20:00:00Z", "2024-03-14T22:00:00Z"),
            slot("Early", "2024-03-14T10:00:00Z", "2024-03-14T12:00:00Z"),
            slot("Early", "2024-03-14T10:00:00Z", "2024-03-14T12:00:00Z"),
        ];
        let titles: Vec<_> = project_full(&ch)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["Breakfast 🔴", "Late 🔴", "Early 🔴", "Early 🔴"]);
    }

    #[test]
    fn projection_surfaces_bad_timestamps() {
        let mut ch = channel(1);
        ch.upcoming[0].end_timestamp = "not a time".to_string();
        assert!(project_compact(&ch).is_err());
        assert!(project_full(&ch).is_err());
    }

    #[test]
    fn test_show_document_end_to_end() {
        let doc: crate::model::BroadcastDocument = serde_json::from_str(
            r#"{"results":[{"now":{"broadcast_title":"Test Show",
                "start_timestamp":"2024-03-14T15:00:00Z",
                "end_timestamp":"2024-03-14T17:00:00Z"}}]}"#,
        )
        .unwrap();
        let entries = project_compact(&doc.channels[0]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].time_range,
            format!(
                "{} - {}",
                local_hm(2024, 3, 14, 15, 0),
                local_hm(2024, 3, 14, 17, 0)
            )
        );
        assert!(entries[0].title.contains(LIVE_INDICATOR));
    }
}
