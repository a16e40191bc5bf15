#![allow(dead_code)]

use axum::{http::StatusCode, routing::get, Json, Router};
use nts_proto::config::ApiConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const LIVE_PATH: &str = "/api/v2/live";
pub const MIXTAPES_PATH: &str = "/api/v2/mixtapes";

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("fixture server crashed");
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

pub fn api_config(base: &str) -> ApiConfig {
    ApiConfig {
        live_url: format!("{base}{LIVE_PATH}"),
        mixtapes_url: format!("{base}{MIXTAPES_PATH}"),
        ..ApiConfig::default()
    }
}

pub fn json_router(path: &'static str, body: Value) -> Router {
    Router::new().route(path, get(move || async move { Json(body) }))
}

pub fn status_router(path: &'static str, status: StatusCode) -> Router {
    Router::new().route(path, get(move || async move { (status, "upstream unavailable") }))
}

pub fn text_router(path: &'static str, body: &'static str) -> Router {
    Router::new().route(path, get(move || async move { body }))
}

pub fn slot(title: &str, start: &str, end: &str) -> Value {
    json!({
        "broadcast_title": title,
        "start_timestamp": start,
        "end_timestamp": end,
    })
}

pub fn test_show_document() -> Value {
    json!({
        "results": [{
            "now": slot("Test Show", "2024-03-14T15:00:00Z", "2024-03-14T17:00:00Z")
        }]
    })
}

pub fn two_channel_document() -> Value {
    let mut ch1 = json!({
        "channel_name": "1",
        "now": {
            "broadcast_title": "Morning Glory",
            "start_timestamp": "2024-03-14T08:00:00Z",
            "end_timestamp": "2024-03-14T10:00:00Z",
            "embeds": { "details": {
                "description": "Soft starts.",
                "genres": [{ "value": "Jazz" }, { "value": "Soul" }],
                "location_long": "London",
                "media": { "background_small": "https://media.example/glory.jpg" }
            }}
        }
    });
    for i in 1..=17 {
        let title = if i % 3 == 0 { format!("Slot {i} (R)") } else { format!("Slot {i}") };
        ch1[format!("next{i}")] = slot(&title, "2024-03-14T10:00:00Z", "2024-03-14T12:00:00Z");
    }
    json!({
        "results": [
            ch1,
            {
                "channel_name": "2",
                "now": slot("Late Replay (R)", "2024-03-14T08:00:00Z", "2024-03-14T09:00:00Z"),
                "next": slot("Dub &amp; Beyond", "2024-03-14T09:00:00Z", "2024-03-14T11:00:00Z")
            }
        ]
    })
}

pub fn mixtape_catalog() -> Value {
    json!({
        "results": [
            {
                "title": "Poolside",
                "subtitle": "Sun-kissed sounds",
                "description": "Balearic, boogie and yacht rock.",
                "mixtape_alias": "poolside",
                "audio_stream_endpoint": "https://stream-mixtape-geo.ntslive.net/mixtape4",
                "credits": [{ "name": "Music From Memory" }]
            },
            {
                "title": "Slow Focus",
                "subtitle": "Ambient and drone",
                "description": "Music for deep concentration.",
                "mixtape_alias": "slow-focus",
                "audio_stream_endpoint": "https://stream-mixtape-geo.ntslive.net/mixtape",
                "credits": []
            }
        ]
    })
}
